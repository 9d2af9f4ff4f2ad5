//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Maps non-letter bytes to separator spaces
//! - **Tokenizer**: Splits normalized text into word tokens

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::TextNormalizer;
pub use tokenizer::Tokenizer;
