/// Byte substitution table: ASCII letters map to themselves, every other
/// byte maps to a single space (0x20). Newlines, digits, punctuation and
/// non-ASCII bytes are all treated identically as separators.
#[rustfmt::skip]
const LETTER_TABLE: [u8; 256] = [
    0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,
    0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,
    0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,
    0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,
    0x20,0x41,0x42,0x43,0x44,0x45,0x46,0x47,0x48,0x49,0x4a,0x4b,0x4c,0x4d,0x4e,0x4f,
    0x50,0x51,0x52,0x53,0x54,0x55,0x56,0x57,0x58,0x59,0x5a,0x20,0x20,0x20,0x20,0x20,
    0x20,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x20,0x20,0x20,0x20,0x20,
    0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,
    0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,
    0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,
    0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,
    0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,
    0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,
    0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,
    0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,0x20,
];

/// Text normalizer for word-adjacency analysis.
///
/// Replaces every byte that is not an ASCII letter (`A-Z`, `a-z`) with a
/// single space. Letters pass through verbatim, including case; case
/// folding happens once, later in the pipeline. The replacement is
/// one-for-one, so the output length always equals the input length and
/// runs of separators are collapsed only by the tokenizer's whitespace
/// splitting.
///
/// The input is raw bytes of unspecified encoding: multi-byte sequences
/// simply decay into one space per byte, which is the desired separator
/// behavior.
///
/// # Examples
///
/// ```
/// use wordgraph_core::analyzer::normalizer::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(normalizer.normalize(b"Hello, world!"), "Hello  world ");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes raw bytes into an existing String buffer.
    ///
    /// Reuses the buffer's capacity if sufficient, growing only when
    /// necessary. Clears the buffer before writing.
    #[inline]
    pub fn normalize_into(&self, input: &[u8], out: &mut String) {
        out.clear();
        out.reserve(input.len());

        // SAFETY: every table entry is an ASCII letter or 0x20, so the
        // written bytes are always valid UTF-8.
        let buf = unsafe { out.as_mut_vec() };
        buf.extend(input.iter().map(|&b| LETTER_TABLE[b as usize]));
    }

    /// Normalizes raw bytes and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &[u8]) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}
