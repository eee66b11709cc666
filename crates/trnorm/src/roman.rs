// Roman numeral validation and conversion.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Canonical Roman numeral grammar: at most three repeats of I/X/C/M,
    /// no repeats of V/L/D, subtractive pairs limited to IV, IX, XL, XC,
    /// CD, CM.
    static ref ROMAN_RE: Regex =
        Regex::new(r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$").unwrap();
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RomanNumeralError {
    #[error("invalid Roman numeral: {0:?}")]
    Invalid(String),
    #[error("{0} is outside the Roman numeral range 1-3999")]
    OutOfRange(u32),
}

/// Value/glyph pairs in descending order, subtractive forms included.
const ROMAN_DIGITS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn symbol_value(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Check whether a string is a valid Roman numeral (case-insensitive).
pub fn is_roman_numeral(s: &str) -> bool {
    !s.is_empty() && ROMAN_RE.is_match(&s.to_uppercase())
}

/// Convert a Roman numeral to its integer value.
///
/// Scans right to left, subtracting a symbol when its value is below the
/// largest value seen so far and adding otherwise.
pub fn roman_to_arabic(s: &str) -> Result<u32, RomanNumeralError> {
    if !is_roman_numeral(s) {
        return Err(RomanNumeralError::Invalid(s.to_string()));
    }

    let upper = s.to_uppercase();
    let mut result: i64 = 0;
    let mut prev_value: u32 = 0;

    for c in upper.chars().rev() {
        // Validation guarantees every character is a Roman symbol.
        let value = symbol_value(c).expect("validated roman symbol");
        if value < prev_value {
            result -= i64::from(value);
        } else {
            result += i64::from(value);
        }
        prev_value = value;
    }

    Ok(result as u32)
}

/// Convert an integer to its canonical Roman numeral.
///
/// Classic Roman numerals cover 1 through 3999; anything outside that
/// range is an error.
pub fn arabic_to_roman(n: u32) -> Result<String, RomanNumeralError> {
    if !(1..=3999).contains(&n) {
        return Err(RomanNumeralError::OutOfRange(n));
    }

    let mut remaining = n;
    let mut out = String::new();
    for (value, glyphs) in ROMAN_DIGITS {
        while remaining >= value {
            out.push_str(glyphs);
            remaining -= value;
        }
    }
    Ok(out)
}
