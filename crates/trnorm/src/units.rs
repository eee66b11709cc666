// Unit abbreviations and dimension expressions.
//
// "5cm" reads as "5 santimetre", "2x3" as "2 çarpı 3". The multiplication
// sign is only rewritten between numeric operands, so algebra like
// "x ve y" is never touched. A period trailing a unit is kept in the
// output because it may end the sentence rather than the abbreviation.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Unit abbreviation table: (abbreviation, full Turkish word). Matching is
/// longest-first so "mm" never half-matches as "m".
const UNIT_TRANSLATIONS: &[(&str, &str)] = &[
    ("cc", "santilitre"),
    ("mm", "milimetre"),
    ("cm", "santimetre"),
    ("dm", "desimetre"),
    ("m", "metre"),
    ("km", "kilometre"),
    ("g", "gram"),
    ("kg", "kilogram"),
    ("ml", "mililitre"),
    ("in", "inç"),
    ("ft", "feet"),
    ("yd", "yard"),
    ("mg", "miligram"),
    ("oz", "ons"),
    ("lb", "pound"),
    ("st", "stone"),
    ("l", "litre"),
    ("dl", "desilitre"),
    ("cl", "santilitre"),
    ("gal", "galon"),
    ("pt", "pint"),
    ("fl oz", "sıvı ons"),
    ("sq mm", "milimetre kare"),
    ("sq cm", "santimetre kare"),
    ("sq m", "metre kare"),
    ("acre", "akre"),
    ("hectare", "hektar"),
    ("j", "jul"),
    ("kj", "kilojul"),
    ("cal", "kalori"),
    ("kcal", "kilokalori"),
    ("wh", "watt saat"),
    ("kwh", "kilowatt saat"),
    ("°", "derece"),
    ("°c", "santigrat derece"),
    ("°C", "santigrat derece"),
    ("c°", "santigrat derece"),
    ("C°", "santigrat derece"),
    ("°f", "derece fahrenheit"),
    ("k", "kelvin"),
    ("mph", "mil/saat"),
    ("km/h", "kilometre/saat"),
    ("km/s", "kilometre/saat"),
    ("knot", "düğüm"),
    ("pa", "paskal"),
    ("kpa", "kilopaskal"),
    ("mpa", "megapaskal"),
    ("bar", "bar"),
    ("psi", "pound/inç kare"),
    ("mm3", "milimetre küp"),
    ("µm", "mikrometre"),
    ("mmHg", "milimetre civa"),
];

fn lookup_unit(abbrev: &str) -> Option<&'static str> {
    UNIT_TRANSLATIONS
        .iter()
        .find(|&&(unit, _)| unit == abbrev)
        .map(|&(_, word)| word)
}

/// Alternation of all unit abbreviations, longest first.
fn unit_alternation() -> String {
    let mut units: Vec<&str> = UNIT_TRANSLATIONS.iter().map(|&(unit, _)| unit).collect();
    units.sort_by_key(|unit| std::cmp::Reverse(unit.chars().count()));
    units
        .iter()
        .map(|unit| regex::escape(unit))
        .collect::<Vec<_>>()
        .join("|")
}

lazy_static! {
    /// A unit abbreviation preceded by whitespace or glued to a digit,
    /// with an optional trailing period.
    static ref UNIT_RE: Regex =
        Regex::new(&format!(r"(\s+|\d)({})(\.?)\b", unit_alternation())).unwrap();
    /// Digits glued to a multiplication sign: 2x3.
    static ref GLUED_X_RE: Regex = Regex::new(r"(\d+)([xX])(\d+)").unwrap();
    /// Digits glued to a unit abbreviation: 5cm.
    static ref GLUED_UNIT_RE: Regex =
        Regex::new(&format!(r"(\d+)(({})\.?)\b", unit_alternation())).unwrap();
    /// A spaced multiplication sign between numeric operands, the left one
    /// optionally unit-suffixed: "3 x 4", "3 cm x 4".
    static ref DIMENSION_RE: Regex = Regex::new(&format!(
        r"(\d+(?:\.\d+)?(?:\s*(?:{}))?)\s+[xX]\s+(\d+(?:\.\d+)?)",
        unit_alternation()
    ))
    .unwrap();
    static ref MULTISPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Expand unit abbreviations to their full Turkish words.
pub fn normalize_units(text: &str) -> String {
    UNIT_RE
        .replace_all(text, |caps: &Captures| {
            let prefix = &caps[1];
            let Some(word) = lookup_unit(&caps[2]) else {
                return caps[0].to_string();
            };
            let period = &caps[3];
            if prefix.chars().all(|c| c.is_ascii_digit()) {
                // Glued to the number: re-insert the digit plus a space.
                format!("{prefix} {word}{period}")
            } else {
                format!("{prefix}{word}{period}")
            }
        })
        .into_owned()
}

/// Insert spaces into glued dimension expressions: "2x3x4cm" becomes
/// "2 x 3 x 4 cm". Reapplied to a fixed point so chains unroll fully.
pub fn preprocess_dimensions(text: &str) -> String {
    let mut current = GLUED_X_RE.replace_all(text, "$1 $2 $3").into_owned();
    current = GLUED_UNIT_RE.replace_all(&current, "$1 $2").into_owned();

    loop {
        let next = GLUED_X_RE.replace_all(&current, "$1 $2 $3").into_owned();
        if next == current {
            return next;
        }
        current = next;
    }
}

/// Replace the multiplication sign with "çarpı" between numeric operands.
///
/// One occurrence is rewritten per round so chains like "2 x 3 x 4"
/// resolve left to right; a bare variable "x" with no flanking digits is
/// never rewritten.
pub fn normalize_dimensions(text: &str) -> String {
    let mut current = preprocess_dimensions(text);

    while DIMENSION_RE.is_match(&current) {
        current = DIMENSION_RE
            .replacen(&current, 1, |caps: &Captures| {
                format!("{} çarpı {}", caps[1].trim(), caps[2].trim())
            })
            .into_owned();
    }

    MULTISPACE_RE.replace_all(&current, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Units --

    #[test]
    fn spaced_units() {
        assert_eq!(normalize_units("5 cm uzunluk"), "5 santimetre uzunluk");
        assert_eq!(normalize_units("25 kg ağırlık"), "25 kilogram ağırlık");
        assert_eq!(normalize_units("2 l süt"), "2 litre süt");
    }

    #[test]
    fn glued_units() {
        assert_eq!(normalize_units("5cm"), "5 santimetre");
        assert_eq!(normalize_units("100km yol"), "100 kilometre yol");
    }

    #[test]
    fn longest_match_wins() {
        assert_eq!(normalize_units("3 mm kalınlık"), "3 milimetre kalınlık");
        assert_eq!(normalize_units("3 m kalınlık"), "3 metre kalınlık");
        assert_eq!(normalize_units("1 kwh enerji"), "1 kilowatt saat enerji");
    }

    #[test]
    fn trailing_period_preserved() {
        // The period may close the sentence, not the abbreviation.
        assert_eq!(normalize_units("Boyu 5 cm. Sonra"), "Boyu 5 santimetre. Sonra");
    }

    #[test]
    fn degrees() {
        assert_eq!(normalize_units("36 °C ateş"), "36 santigrat derece ateş");
    }

    #[test]
    fn idempotent_on_converted_text() {
        let once = normalize_units("5 cm ve 3 kg");
        assert_eq!(normalize_units(&once), once);
    }

    #[test]
    fn unknown_abbreviations_untouched() {
        assert_eq!(normalize_units("5 qq değer"), "5 qq değer");
    }

    // -- Dimensions --

    #[test]
    fn preprocess_inserts_spaces() {
        assert_eq!(preprocess_dimensions("2x3"), "2 x 3");
        assert_eq!(preprocess_dimensions("2x3x4"), "2 x 3 x 4");
        assert_eq!(preprocess_dimensions("3x4cm"), "3 x 4 cm");
        // Idempotent on already-spaced input.
        assert_eq!(preprocess_dimensions("2 x 3"), "2 x 3");
    }

    #[test]
    fn multiplication_between_numbers() {
        assert_eq!(normalize_dimensions("2x3"), "2 çarpı 3");
        assert_eq!(normalize_dimensions("2 x 5 x 6 x 3"), "2 çarpı 5 çarpı 6 çarpı 3");
        assert_eq!(normalize_dimensions("3 cm x 4"), "3 cm çarpı 4");
    }

    #[test]
    fn bare_variable_x_untouched() {
        assert_eq!(normalize_dimensions("x ve y eksenleri"), "x ve y eksenleri");
        assert_eq!(normalize_dimensions("deneyin x sonucu"), "deneyin x sonucu");
    }
}
