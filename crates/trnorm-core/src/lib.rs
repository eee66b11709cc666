// trnorm-core: shared Turkish character-level utilities.
//
// Everything in this crate operates on plain characters and strings with
// Turkish-specific rules (dotted/dotless I, circumflexed vowels, vowel
// harmony). The normalization pipeline and metrics live in the `trnorm`
// crate; this crate is the leaf they build on.

pub mod character;
pub mod suffix;

pub use character::{
    ends_with_vowel, has_vowel, is_back_vowel, is_front_vowel, is_turkish_upper, is_vowel,
    last_vowel, last_vowel_is_back, remove_hats, turkish_capitalize, turkish_char_lower,
    turkish_char_upper, turkish_lower, turkish_upper,
};
pub use suffix::{attach_clitic, Clitic, CliticError};
