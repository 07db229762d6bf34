//! Slugger module: one front end over normalization, grammars and tag lists
//!
//! A [`Slugger`] owns the transliterator used for every normalization it
//! performs, so callers pick the script conversion once and then just ask for
//! slugs, checks and tag lists.

use slugrule::grammar::Grammar;
use slugrule::itemtags::{tag_slugs_with, TagSlugs};
use slugrule::normalize::get_ascii_slug_with;
use slugrule::transliterate::{AsciiOnly, Deunicode, Transliterate};

/// Front end for slug generation and validation
///
/// The grammars themselves never transliterate, so the choice of
/// transliterator only affects [`Slugger::slugify`] and
/// [`Slugger::tags_and_slugs`].
pub struct Slugger {
    translit: Box<dyn Transliterate>,
}

impl Slugger {
    /// Create a new Slugger using the `deunicode` tables.
    pub fn new() -> Self {
        Self::with_transliterator(Deunicode)
    }

    /// Create a Slugger that keeps ASCII and drops all other characters.
    pub fn ascii_only() -> Self {
        Self::with_transliterator(AsciiOnly)
    }

    pub fn with_transliterator(translit: impl Transliterate + 'static) -> Self {
        Self {
            translit: Box::new(translit),
        }
    }

    /// Normalize text into a canonical slug
    ///
    /// # Example
    /// ```rust
    /// use rsslug::slugger::Slugger;
    ///
    /// let slugger = Slugger::new();
    /// assert_eq!(slugger.slugify("中-文-网"), "zhong-wen-wang");
    /// ```
    pub fn slugify(&self, text: &str) -> String {
        get_ascii_slug_with(text, self.translit.as_ref())
    }

    /// Check `text` against `grammar`.
    ///
    /// The grammars do not transliterate, so the result is the same for every
    /// `Slugger`. This lets the CLI route all subcommands through one value;
    /// library callers can use [`Grammar::check`] directly.
    pub fn check(&self, grammar: Grammar, text: &str) -> bool {
        grammar.check(text)
    }

    /// Split a comma-delimited tag list into tags and deduplicated slugs.
    pub fn tags_and_slugs(&self, tags: &str) -> TagSlugs {
        tag_slugs_with(tags, self.translit.as_ref())
    }

    /// Transliterate text without normalizing it.
    pub fn transliterate(&self, text: &str) -> String {
        self.translit.transliterate(text)
    }
}

impl Default for Slugger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Transliterate for Upper {
        fn transliterate(&self, text: &str) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn test_slugify() {
        let slugger = Slugger::new();
        assert_eq!(slugger.slugify("Hello world!"), "hello-world");
        assert_eq!(slugger.slugify("Gültige Test"), "gultige-test");
        assert_eq!(slugger.slugify(""), "");
    }

    #[test]
    fn test_ascii_only_slugify() {
        let slugger = Slugger::ascii_only();
        assert_eq!(slugger.slugify("Gültige Test"), "gltige-test");
        assert_eq!(slugger.slugify("中-文-网"), "");
        assert_eq!(slugger.transliterate("née"), "ne");
    }

    #[test]
    fn test_custom_transliterator_is_used() {
        let slugger = Slugger::with_transliterator(Upper);
        assert_eq!(slugger.transliterate("abc"), "ABC");
        // Lowercasing runs after transliteration.
        assert_eq!(slugger.slugify("abc def"), "abc-def");
    }

    #[test]
    fn test_check() {
        let slugger = Slugger::default();
        assert!(slugger.check(Grammar::Slug, "this-is-a-test"));
        assert!(!slugger.check(Grammar::Slug, "this_is_a_test"));
        assert!(slugger.check(Grammar::Utf8Tag, "gültige test"));
        assert!(slugger.check(Grammar::ItemTagListRegex, "test123|test123|123hello"));
        assert!(!slugger.check(Grammar::ItemTagListRegex, "|test|"));
    }

    #[test]
    fn test_tags_and_slugs() {
        let slugger = Slugger::new();
        let result = slugger.tags_and_slugs("One,one");
        assert_eq!(result.tags, vec!["One"]);
        assert_eq!(result.slugs, vec!["one"]);

        let ascii = Slugger::ascii_only().tags_and_slugs("中文,rust");
        assert_eq!(ascii.into_parts(), (vec!["rust".to_string()], vec!["rust".to_string()]));
    }
}
