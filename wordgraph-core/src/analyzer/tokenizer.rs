//! Streaming tokenizer.
//!
//! Splits normalized text into word tokens, the second stage of the
//! pipeline. Given normalized input like `"the  quick brown"`, it emits
//! each word together with its position in the sequence:
//!
//! ```ignore
//! ("the", 0)
//! ("quick", 1)
//! ("brown", 2)
//! ```
//!
//! Tokens are slices of the input string, not new allocations, and are
//! emitted via callback in strict input order. The normalizer replaces
//! separators one-for-one, so the input may contain leading, trailing or
//! consecutive spaces; empty segments between them are skipped, which is
//! what collapses separator runs.

use core::str;
use memchr::memchr_iter;

/// Streaming tokenizer - splits normalized text into word tokens.
///
/// Performs a single forward scan for ASCII space bytes (0x20); each
/// non-empty run between spaces becomes one token. Expects the
/// normalizer's output: ASCII text where the only separator is a space.
/// Case is passed through untouched; canonical lowercasing happens when
/// tokens are interned into the graph.
///
/// # Example
///
/// ```
/// use wordgraph_core::analyzer::tokenizer::Tokenizer;
///
/// let tokenizer = Tokenizer::new();
/// let mut words = Vec::new();
///
/// tokenizer.tokenize("to be  or ", |text, _pos| {
///     words.push(text);
/// });
///
/// assert_eq!(words, ["to", "be", "or"]);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes normalized input and emits `(text, position)`.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop (overflow protection).
    #[inline(always)]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = normalized.as_bytes();

        debug_assert!(
            normalized.is_ascii(),
            "tokenizer: non-ASCII input — normalizer contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // SAFETY: `normalized` is valid UTF-8. We split only on ASCII
                // space (0x20), which is never a continuation byte, so
                // `bytes[start..i]` is always a valid UTF-8 subslice.
                let text = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
                emit(text, pos);
                if pos == u32::MAX {
                    return;
                }
                pos += 1;
            }
            start = i + 1;
        }

        if start < bytes.len() {
            // SAFETY: same invariants as above — `bytes[start..]` is a valid
            // UTF-8 subslice since `start` was set to `i + 1` after an ASCII
            // space byte.
            let text = unsafe { str::from_utf8_unchecked(&bytes[start..]) };
            emit(text, pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(&str, u32)> {
        let mut out = Vec::new();
        Tokenizer::new().tokenize(input, |text, pos| {
            out.push((text, pos));
        });
        out
    }

    #[test]
    fn single_word() {
        let out = collect("hello");
        assert_eq!(out, [("hello", 0)]);
    }

    #[test]
    fn two_words() {
        let out = collect("hello world");
        assert_eq!(out, [("hello", 0), ("world", 1)]);
    }

    #[test]
    fn positions_are_sequential() {
        let out = collect("the quick brown fox");
        assert_eq!(out.len(), 4);
        for (i, (_, pos)) in out.iter().enumerate() {
            assert_eq!(*pos, i as u32);
        }
    }

    #[test]
    fn consecutive_spaces_collapse() {
        let out = collect("a   b");
        assert_eq!(out, [("a", 0), ("b", 1)]);
    }

    #[test]
    fn leading_and_trailing_spaces_ignored() {
        let out = collect("  hello world  ");
        assert_eq!(out, [("hello", 0), ("world", 1)]);
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn only_spaces_emits_nothing() {
        assert!(collect("    ").is_empty());
    }

    #[test]
    fn single_char_token() {
        let out = collect("a");
        assert_eq!(out, [("a", 0)]);
    }

    #[test]
    fn case_passed_through() {
        let out = collect("The THE the");
        assert_eq!(out[0].0, "The");
        assert_eq!(out[1].0, "THE");
        assert_eq!(out[2].0, "the");
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::new().tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn emit_order_is_left_to_right() {
        let words = ["one", "two", "three", "four"];
        let input = words.join(" ");
        let mut i = 0usize;

        Tokenizer::new().tokenize(&input, |text, pos| {
            assert_eq!(text, words[i]);
            assert_eq!(pos, i as u32);
            i += 1;
        });

        assert_eq!(i, words.len());
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = Tokenizer::new();

        let mut n = 0usize;
        t.tokenize("hello world", |_, _| n += 1);
        assert_eq!(n, 2);

        n = 0;
        t.tokenize("one two three", |_, _| n += 1);
        assert_eq!(n, 3);
    }
}
