//! Unicode to ASCII transliteration
//!
//! The normalizer never maps scripts itself. It hands the raw text to a
//! [`Transliterate`] implementation and works on whatever ASCII approximation
//! comes back. Spacing and punctuation must survive the trip so that word
//! boundaries can still be found afterwards.

/// A best-effort conversion of arbitrary Unicode text into ASCII.
///
/// Implementations map character by character and may drop anything they
/// cannot represent. Output is expected to be ASCII but the normalizer does
/// not rely on it: non-ASCII leftovers are deleted downstream.
pub trait Transliterate: Send + Sync {
    fn transliterate(&self, text: &str) -> String;
}

/// Transliteration backed by the `deunicode` tables.
///
/// ASCII characters are copied unchanged and only non-ASCII characters are
/// looked up, one at a time. Characters without a mapping are dropped rather
/// than replaced by a placeholder.
#[derive(Debug, Default, Clone, Copy)]
pub struct Deunicode;

impl Transliterate for Deunicode {
    fn transliterate(&self, text: &str) -> String {
        // The whole-string deunicode functions swallow whitespace that follows
        // a mapped character, which would merge words.
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if c.is_ascii() {
                out.push(c);
            } else if let Some(ascii) = deunicode::deunicode_char(c) {
                out.push_str(ascii);
            }
        }
        out
    }
}

/// Keeps ASCII characters verbatim and drops everything else.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiOnly;

impl Transliterate for AsciiOnly {
    fn transliterate(&self, text: &str) -> String {
        text.chars().filter(char::is_ascii).collect()
    }
}

/// Transliterate `text` with the default [`Deunicode`] tables.
pub fn transliterate(text: &str) -> String {
    Deunicode.transliterate(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(transliterate("Hello, world!"), "Hello, world!");
        assert_eq!(transliterate("a=b+c/d\\e"), "a=b+c/d\\e");
        assert_eq!(transliterate(""), "");
    }

    #[test]
    fn test_latin_diacritics() {
        assert_eq!(transliterate("Forneça"), "Forneca");
        assert_eq!(transliterate("Zulässig"), "Zulassig");
        assert_eq!(transliterate("àáâ"), "aaa");
    }

    #[test]
    fn test_whitespace_after_non_ascii_is_kept() {
        assert_eq!(transliterate("é\tb"), "e\tb");
        assert_eq!(transliterate("ą\nb"), "a\nb");
        assert_eq!(transliterate("à è"), "a e");
    }

    #[test]
    fn test_output_is_ascii() {
        for text in ["中文网", "소주", "あいうえお", "Привет", "Ｆｶﾀｶﾅ"] {
            assert!(transliterate(text).is_ascii(), "non-ASCII output for '{}'", text);
        }
    }

    #[test]
    fn test_ascii_only_drops_non_ascii() {
        assert_eq!(AsciiOnly.transliterate("café au lait"), "caf au lait");
        assert_eq!(AsciiOnly.transliterate("中文"), "");
        assert_eq!(AsciiOnly.transliterate("plain"), "plain");
    }
}
