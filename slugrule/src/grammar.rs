//! Slug and tag grammars
//!
//! The ASCII grammars are plain anchored patterns. The UTF-8 variants do not
//! get patterns of their own: every letter and digit is rewritten to a
//! placeholder in one pass, and the rewritten string is matched against the
//! ASCII grammar. Both variants therefore always agree on shape.

use std::fmt;
use std::str::FromStr;

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use thiserror::Error;

use crate::itemtags::{is_item_tag_list, is_item_tag_list_regex, is_utf8_item_tag_list};

static IS_SLUG_VALID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$").unwrap());
static IS_TAG_VALID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+(?: [A-Za-z0-9]+)*$").unwrap());
static UTF8_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}0-9]").unwrap());

const PLACEHOLDER: &str = "a";

/// Returns `true` when `sl` is one or more ASCII alphanumeric runs joined by
/// single hyphens.
pub fn is_slug(sl: &str) -> bool {
    IS_SLUG_VALID.is_match(sl)
}

/// Like [`is_slug`], but any Unicode letter counts as alphanumeric.
///
/// Only ASCII `0`-`9` count as digits. Anything that is neither a letter, a
/// digit nor a hyphen rejects the string outright, including astral-plane
/// symbols that some classifiers report as letter-like.
pub fn is_utf8_slug(sl: &str) -> bool {
    is_slug(&placeholder_form(sl))
}

/// Returns `true` when `tag` is one or more ASCII alphanumeric runs joined by
/// single spaces.
pub fn is_tag(tag: &str) -> bool {
    IS_TAG_VALID.is_match(tag)
}

/// Like [`is_tag`], but any Unicode letter counts as alphanumeric.
pub fn is_utf8_tag(tag: &str) -> bool {
    is_tag(&placeholder_form(tag))
}

/// Rewrite every Unicode letter (`L*`) and ASCII digit to [`PLACEHOLDER`].
///
/// Everything else is left in place, so any character the ASCII grammar does
/// not allow still rejects the string.
fn placeholder_form(text: &str) -> Cow<'_, str> {
    UTF8_ALNUM.replace_all(text, NoExpand(PLACEHOLDER))
}

/// Every predicate exposed by this crate, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    Slug,
    Utf8Slug,
    Tag,
    Utf8Tag,
    ItemTagList,
    Utf8ItemTagList,
    ItemTagListRegex,
}

impl Grammar {
    pub const ALL: [Grammar; 7] = [
        Grammar::Slug,
        Grammar::Utf8Slug,
        Grammar::Tag,
        Grammar::Utf8Tag,
        Grammar::ItemTagList,
        Grammar::Utf8ItemTagList,
        Grammar::ItemTagListRegex,
    ];

    pub fn check(&self, text: &str) -> bool {
        match self {
            Grammar::Slug => is_slug(text),
            Grammar::Utf8Slug => is_utf8_slug(text),
            Grammar::Tag => is_tag(text),
            Grammar::Utf8Tag => is_utf8_tag(text),
            Grammar::ItemTagList => is_item_tag_list(text),
            Grammar::Utf8ItemTagList => is_utf8_item_tag_list(text),
            Grammar::ItemTagListRegex => is_item_tag_list_regex(text),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Grammar::Slug => "is_slug",
            Grammar::Utf8Slug => "is_utf8_slug",
            Grammar::Tag => "is_tag",
            Grammar::Utf8Tag => "is_utf8_tag",
            Grammar::ItemTagList => "is_item_tag_list",
            Grammar::Utf8ItemTagList => "is_utf8_item_tag_list",
            Grammar::ItemTagListRegex => "is_item_tag_list_regex",
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown grammar '{0}'")]
pub struct GrammarParseError(pub String);

impl FromStr for Grammar {
    type Err = GrammarParseError;

    /// Accepts the predicate name with or without the `is_` prefix, using
    /// either `_` or `-` between words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        let key = key.strip_prefix("is_").unwrap_or(&key);
        Grammar::ALL
            .into_iter()
            .find(|g| &g.name()[3..] == key)
            .ok_or_else(|| GrammarParseError(s.to_string()))
    }
}
