// trnorm: Turkish text normalization for ASR evaluation and TTS
// preprocessing.
//
// The crate rewrites numerals, ordinals, Roman numerals, units, dimensions,
// symbols, times and clitic suffixes into their canonical spoken-word forms,
// and scores reference/hypothesis pairs with edit-distance metrics.
//
// Each rewrite stage is a pure `&str -> String` transform; the `pipeline`
// module composes them in a fixed order. Stage order matters: dates must be
// consumed before generic numbers, times before decimals, and so on.

pub mod alphanumeric;
pub mod apostrophe;
pub mod metrics;
pub mod numbers;
pub mod ordinals;
pub mod pipeline;
pub mod roman;
pub mod suffix;
pub mod symbols;
pub mod time;
pub mod units;

pub use alphanumeric::separate_alphanumeric;
pub use apostrophe::remove_apostrophes;
pub use metrics::{
    cer, levenshtein, levenshtein_batch, levenshtein_str, normalized_levenshtein, wer,
    MetricsError,
};
pub use numbers::{cardinal_words, convert_numbers_to_words};
pub use ordinals::{normalize_ordinals, normalize_ordinals_with_roman, ordinal_words};
pub use pipeline::{normalize, normalize_batch, normalize_with, Stage, DEFAULT_STAGES};
pub use roman::{arabic_to_roman, is_roman_numeral, roman_to_arabic, RomanNumeralError};
pub use suffix::{context_aware_merge_suffixes, merge_suffixes};
pub use symbols::{add_symbol_mapping, convert_symbols, SymbolConverter};
pub use time::normalize_times;
pub use units::{normalize_dimensions, normalize_units, preprocess_dimensions};
