//! Slug normalization
//!
//! This module turns free-form text into a canonical slug: lowercase ASCII
//! letters and digits joined by single hyphens, with no hyphen at either end.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::transliterate::{Deunicode, Transliterate};

// Runs of these collapse into one hyphen. `]` and `^` sit between `\` and
// `_` and separate words just like them.
static SOFT_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\t\n\f\r ,./\\\]^_=+-]+").unwrap());
static DISALLOWED_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9-]").unwrap());
static MULTIPLE_DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Normalize text into a canonical ASCII slug
///
/// The text is transliterated with the default [`Deunicode`] tables, then
/// passed through [`get_ascii_slug_with`].
///
/// # Arguments
/// * `title` - The text to normalize
///
/// # Returns
/// The canonical slug, which is empty when the text holds no letter or digit
/// that survives transliteration
///
/// # Examples
///
/// ```
/// use slugrule::normalize::get_ascii_slug;
///
/// assert_eq!(get_ascii_slug("Hello world!"), "hello-world");
/// assert_eq!(get_ascii_slug("----This---is---a---test----"), "this-is-a-test");
/// ```
pub fn get_ascii_slug(title: &str) -> String {
    get_ascii_slug_with(title, &Deunicode)
}

/// Normalize text into a canonical ASCII slug using a specific transliterator
///
/// The passes run in a fixed order, each on the output of the previous one:
/// 1. Transliterate to ASCII
/// 2. Lowercase
/// 3. Replace each run of soft separators (whitespace, `,` `.` `/` `\` `]`
///    `^` `_` `=` `+` `-`) with one hyphen
/// 4. Delete every character that is not an ASCII letter, digit or hyphen
/// 5. Collapse hyphen runs left behind by step 4
/// 6. Trim hyphens from both ends
///
/// # Arguments
/// * `title` - The text to normalize
/// * `translit` - The transliterator used for step 1
///
/// # Returns
/// The canonical slug, possibly empty
pub fn get_ascii_slug_with(title: &str, translit: &dyn Transliterate) -> String {
    let ascii = translit.transliterate(title).to_lowercase();
    let separated = SOFT_SEPARATORS.replace_all(&ascii, "-");
    let allowed = DISALLOWED_CHARS.replace_all(&separated, "");
    let collapsed = MULTIPLE_DASHES.replace_all(&allowed, "-");
    collapsed.trim_matches('-').to_string()
}
