//! Delimited tag lists
//!
//! A tag list is the raw text a user types into a "tags" field, for example
//! `"Rust, Web dev, rust"`. [`get_tags_and_tag_slugs`] turns it into two
//! index-aligned lists: the tags as typed and their slugs. Blank entries and
//! entries whose slug was already seen are dropped from both lists together.

use std::collections::HashSet;

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::grammar::{is_tag, is_utf8_tag};
use crate::normalize::get_ascii_slug_with;
use crate::transliterate::{Deunicode, Transliterate};

/// Separator of user-entered tag lists.
pub const TAG_DELIMITER: char = ',';

/// Separator accepted by [`is_item_tag_list_regex`].
pub const TAG_LIST_REGEX_DELIMITER: char = '|';

// Tokens are lowercase slugs; any run of the delimiter may separate them.
static IS_TAG_LIST_VALID: Lazy<Regex> = Lazy::new(|| {
    let token = r"[a-z0-9]+(?:-[a-z0-9]+)*";
    let delimiter = regex::escape(&TAG_LIST_REGEX_DELIMITER.to_string());
    Regex::new(&format!(r"^{token}(?:{delimiter}+{token})*$")).unwrap()
});

/// Tags and their slugs, position `i` of one list belonging to position `i`
/// of the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSlugs {
    pub tags: Vec<String>,
    pub slugs: Vec<String>,
}

impl TagSlugs {
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    /// Iterate over `(tag, slug)` pairs in input order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags
            .iter()
            .map(String::as_str)
            .zip(self.slugs.iter().map(String::as_str))
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.tags, self.slugs)
    }
}

/// Split a comma-delimited tag list into tags and deduplicated slugs
///
/// Tags keep their original text, including case and surrounding spaces.
/// When two entries normalize to the same slug only the first survives.
///
/// # Arguments
/// * `tags` - The raw comma-delimited text
///
/// # Returns
/// The `(tags, slugs)` pair, both lists of equal length
///
/// # Examples
///
/// ```
/// use slugrule::itemtags::get_tags_and_tag_slugs;
///
/// let (tags, slugs) = get_tags_and_tag_slugs("One,one, Two ");
/// assert_eq!(tags, vec!["One", " Two "]);
/// assert_eq!(slugs, vec!["one", "two"]);
/// ```
pub fn get_tags_and_tag_slugs(tags: &str) -> (Vec<String>, Vec<String>) {
    tag_slugs_with(tags, &Deunicode).into_parts()
}

/// Same as [`get_tags_and_tag_slugs`], using `translit` for normalization.
pub fn tag_slugs_with(tags: &str, translit: &dyn Transliterate) -> TagSlugs {
    let plain = plain_tag_list_with_blanks(tags);
    let mut slugs = tag_slug_list_with_blanks(tags, translit);
    remove_duplicates(&mut slugs);

    let mut result = TagSlugs::default();
    for (tag, slug) in plain.into_iter().zip(slugs) {
        if let (Some(tag), Some(slug)) = (tag, slug) {
            result.tags.push(tag.to_string());
            result.slugs.push(slug);
        }
    }
    result
}

/// Every piece between delimiters, `None` for empty pieces.
fn plain_tag_list_with_blanks(tags: &str) -> Vec<Option<&str>> {
    tags.split(TAG_DELIMITER)
        .map(|tag| (!tag.is_empty()).then_some(tag))
        .collect()
}

/// The slug of every piece between delimiters, `None` where the slug is empty.
fn tag_slug_list_with_blanks(tags: &str, translit: &dyn Transliterate) -> Vec<Option<String>> {
    tags.split(TAG_DELIMITER)
        .map(|tag| {
            let slug = get_ascii_slug_with(tag, translit);
            if slug.is_empty() {
                trace!("tag {:?} has no slug content", tag);
                None
            } else {
                Some(slug)
            }
        })
        .collect()
}

/// Blank out every slug already seen earlier in the list.
fn remove_duplicates(slugs: &mut [Option<String>]) {
    let mut seen = HashSet::new();
    for (i, slot) in slugs.iter_mut().enumerate() {
        let Some(slug) = slot.as_deref() else {
            continue;
        };
        if !seen.insert(slug.to_string()) {
            trace!("dropping duplicate slug {:?} at position {}", slug, i);
            *slot = None;
        }
    }
}

/// Returns `true` when every comma-separated piece is a valid ASCII tag.
///
/// An empty piece fails, so the empty string and lists with doubled, leading
/// or trailing commas are rejected.
pub fn is_item_tag_list(tags: &str) -> bool {
    tags.split(TAG_DELIMITER).all(is_tag)
}

/// Returns `true` when every comma-separated piece is a valid UTF-8 tag.
pub fn is_utf8_item_tag_list(tags: &str) -> bool {
    tags.split(TAG_DELIMITER).all(is_utf8_tag)
}

/// Whole-string check for machine-generated `|`-delimited slug lists.
///
/// Unlike [`is_item_tag_list`], runs of consecutive delimiters are accepted.
/// Tokens must be lowercase; no whitespace is allowed anywhere.
pub fn is_item_tag_list_regex(tags: &str) -> bool {
    IS_TAG_LIST_VALID.is_match(tags)
}
