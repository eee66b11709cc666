// Alphanumeric splitting.
//
// Model and code names like "F3" or "A400" are spoken letter-then-number;
// inserting a space lets the number converter pick up the numeric half.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ALPHANUMERIC_RE: Regex = Regex::new(r"([a-zA-Z]+)(\d+)").unwrap();
}

/// Insert a space between letter and digit runs: "F3" becomes "F 3".
pub fn separate_alphanumeric(text: &str) -> String {
    ALPHANUMERIC_RE.replace_all(text, "$1 $2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_digit_split() {
        assert_eq!(separate_alphanumeric("F3 fırtınası"), "F 3 fırtınası");
        assert_eq!(separate_alphanumeric("A400 kargo uçağı"), "A 400 kargo uçağı");
        assert_eq!(separate_alphanumeric("B1 vitamini"), "B 1 vitamini");
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(separate_alphanumeric("sayı yok"), "sayı yok");
        assert_eq!(separate_alphanumeric("42"), "42");
    }
}
