//! Slugrule - slug normalization and slug/tag grammar validation
//!
//! This crate turns free-form text into URL-safe slugs and checks strings
//! against the slug and tag grammars, in ASCII-only and Unicode-letter
//! variants. All compiled patterns are process-wide statics built on first
//! use and never mutated, so every function may be called from any thread.

pub mod field;
pub mod grammar;
pub mod itemtags;
pub mod normalize;
pub mod transliterate;

pub use field::{is_slug_field, FieldError, FieldRule, IsSlugField, Rejection};
pub use grammar::{is_slug, is_tag, is_utf8_slug, is_utf8_tag, Grammar, GrammarParseError};
pub use itemtags::{
    get_tags_and_tag_slugs, is_item_tag_list, is_item_tag_list_regex, is_utf8_item_tag_list,
    tag_slugs_with, TagSlugs,
};
pub use normalize::{get_ascii_slug, get_ascii_slug_with};
pub use transliterate::{transliterate, AsciiOnly, Deunicode, Transliterate};

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalization_is_idempotent(input in "\\PC{0,40}") {
            let once = get_ascii_slug(&input);
            prop_assert_eq!(get_ascii_slug(&once), once);
        }

        #[test]
        fn non_empty_slugs_are_valid(input in "\\PC{0,40}") {
            let slug = get_ascii_slug(&input);
            prop_assert_eq!(is_slug(&slug), !slug.is_empty());
        }

        #[test]
        fn ascii_input_without_alnum_gives_empty_slug(input in "[ -/:-@\\[-`{-~\t\n]{0,40}") {
            prop_assert_eq!(get_ascii_slug(&input), "");
        }

        #[test]
        fn whitespace_after_accented_letters_separates_words(
            first in "[àáâäçèéêëìíîïñòóôöùúûüßþ]{1,8}",
            gap in "[\t\n ]{1,3}",
            second in "[àáâäçèéêëìíîïñòóôöùúûüßþ]{1,8}",
        ) {
            let slug = get_ascii_slug(&format!("{}{}{}", first, gap, second));
            prop_assert!(slug.contains('-'));
            prop_assert_eq!(
                slug,
                format!("{}-{}", get_ascii_slug(&first), get_ascii_slug(&second))
            );
        }

        #[test]
        fn ascii_slug_grammar_is_a_subset(input in "[A-Za-z0-9 _.-]{0,24}") {
            if is_slug(&input) {
                prop_assert!(is_utf8_slug(&input));
            }
            if is_tag(&input) {
                prop_assert!(is_utf8_tag(&input));
            }
        }

        #[test]
        fn tag_lists_stay_aligned(input in "[A-Za-z0-9 ,.!é中-]{0,60}") {
            let (tags, slugs) = get_tags_and_tag_slugs(&input);
            prop_assert_eq!(tags.len(), slugs.len());
            let mut seen = std::collections::HashSet::new();
            for (tag, slug) in tags.iter().zip(&slugs) {
                prop_assert!(seen.insert(slug.clone()));
                prop_assert!(is_slug(slug));
                prop_assert_eq!(&get_ascii_slug(tag), slug);
            }
        }
    }
}
