// Numeral-to-word conversion.
//
// Turkish formats numbers with `.` as the thousands grouper and `,` as the
// decimal separator (1.500.000 / 36,5). On top of that, free text mixes in
// dates (01.01.2023), times (22.00), fractions (7/24), apostrophe-suffixed
// numbers (1960'lı) and ordinal markers (3.), all built from the same few
// characters. Disambiguation precedence: dates, then times, then
// apostrophe-suffixed, then ordinal-exempt trailing dots, then decimals,
// then thousands-grouped integers. Anything that fits none of these is
// left untouched.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::time::normalize_times;

const ONES: [&str; 10] = [
    "", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz",
];
const TENS: [&str; 10] = [
    "", "on", "yirmi", "otuz", "kırk", "elli", "altmış", "yetmiş", "seksen", "doksan",
];

lazy_static! {
    static ref DATE_RE: Regex = Regex::new(r"\b(\d{1,2})[./-](\d{1,2})[./-](\d{2,4})\b").unwrap();
    /// The canonical thousands-grouped shape: 1.000, 22.500, 1.250.000.
    static ref THOUSANDS_GROUPED_RE: Regex = Regex::new(r"^\d{1,3}(?:\.\d{3})+$").unwrap();
}

// ---------------------------------------------------------------------------
// Cardinal number words
// ---------------------------------------------------------------------------

/// Convert a non-negative integer to Turkish cardinal words.
///
/// The multiplier "bin" is bare when its coefficient is one ("bin", not
/// "bir bin"), while "milyon" and "milyar" always take a coefficient
/// ("bir milyon"). Zero is "sıfır".
pub fn cardinal_words(n: u64) -> String {
    if n == 0 {
        return "sıfır".to_string();
    }

    let mut parts: Vec<String> = Vec::new();

    if n >= 1_000_000_000 {
        let billions = n / 1_000_000_000;
        let remainder = n % 1_000_000_000;
        if billions == 1 {
            parts.push("bir".to_string());
        } else {
            parts.push(cardinal_words(billions));
        }
        parts.push("milyar".to_string());
        if remainder > 0 {
            parts.push(cardinal_words(remainder));
        }
        return parts.join(" ");
    }

    if n >= 1_000_000 {
        let millions = n / 1_000_000;
        let remainder = n % 1_000_000;
        if millions == 1 {
            parts.push("bir".to_string());
        } else {
            parts.push(cardinal_words(millions));
        }
        parts.push("milyon".to_string());
        if remainder > 0 {
            parts.push(cardinal_words(remainder));
        }
        return parts.join(" ");
    }

    if n >= 1_000 {
        let thousands = n / 1_000;
        let remainder = n % 1_000;
        if thousands == 1 {
            parts.push("bin".to_string());
        } else {
            parts.push(cardinal_words(thousands));
            parts.push("bin".to_string());
        }
        if remainder > 0 {
            parts.push(cardinal_words(remainder));
        }
        return parts.join(" ");
    }

    if n >= 100 {
        let hundreds = n / 100;
        let remainder = n % 100;
        if hundreds == 1 {
            parts.push("yüz".to_string());
        } else {
            parts.push(ONES[hundreds as usize].to_string());
            parts.push("yüz".to_string());
        }
        if remainder > 0 {
            parts.push(cardinal_words(remainder));
        }
        return parts.join(" ");
    }

    if n >= 10 {
        let tens = n / 10;
        let remainder = n % 10;
        parts.push(TENS[tens as usize].to_string());
        if remainder > 0 {
            parts.push(ONES[remainder as usize].to_string());
        }
        return parts.join(" ");
    }

    ONES[n as usize].to_string()
}

/// Compact rendering without spaces ("altıyüzelli"), used for amounts on
/// commercial documents. Not part of the default pipeline.
pub fn cardinal_words_compact(n: u64) -> String {
    cardinal_words(n).replace(' ', "")
}

/// Words for a decimal written as integer part plus raw decimal digits.
///
/// Leading zeros in the decimal digits are read out as "sıfır"; trailing
/// zeros are insignificant ("3,50" reads as "üç virgül beş", "3,00" as
/// plain "üç").
fn decimal_words(int_part: u64, decimal_digits: &str) -> String {
    let significant = decimal_digits.trim_end_matches('0');
    if significant.is_empty() {
        return cardinal_words(int_part);
    }

    let zeros = significant.chars().take_while(|&c| c == '0').count();
    let rest = &significant[zeros..];

    let mut parts = vec![cardinal_words(int_part), "virgül".to_string()];
    for _ in 0..zeros {
        parts.push("sıfır".to_string());
    }
    if let Ok(n) = rest.parse::<u64>() {
        parts.push(cardinal_words(n));
    }
    parts.join(" ")
}

// ---------------------------------------------------------------------------
// Token classification
// ---------------------------------------------------------------------------

/// Convert the numeric core of a token (no apostrophe, no trailing comma).
/// Returns `None` when the token does not fit any recognized numeral shape.
fn convert_numeric_core(word: &str) -> Option<String> {
    let comma_parts: Vec<&str> = word.split(',').collect();
    match comma_parts.as_slice() {
        [int_str, dec_str] => {
            // Decimal number; the integer part may carry thousand groupers.
            if int_str.contains('.') && !THOUSANDS_GROUPED_RE.is_match(int_str) {
                return None;
            }
            if dec_str.is_empty() || !dec_str.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let int_part: u64 = int_str.replace('.', "").parse().ok()?;
            Some(decimal_words(int_part, dec_str))
        }
        [int_str] => {
            if int_str.contains('.') && !THOUSANDS_GROUPED_RE.is_match(int_str) {
                return None;
            }
            let n: u64 = int_str.replace('.', "").parse().ok()?;
            Some(cardinal_words(n))
        }
        _ => None,
    }
}

fn convert_token(token: &str) -> String {
    if !token.chars().any(|c| c.is_ascii_digit()) {
        return token.to_string();
    }

    // A trailing comma marks list context ("13, 14"), not a decimal.
    let (word, trailing_comma) = match token.strip_suffix(',') {
        Some(w) => (w, true),
        None => (token, false),
    };

    // Bare trailing period with nothing but digits in front is an ordinal
    // marker; ordinal normalization is a separate stage.
    if let Some(digits) = word.strip_suffix('.') {
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            return token.to_string();
        }
    }

    // Fraction notation: 7/24 -> yedi/yirmi dört.
    if word.contains('/') {
        let sides: Vec<&str> = word.split('/').collect();
        if sides.len() == 2
            && sides
                .iter()
                .all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
        {
            let left: u64 = sides[0].parse().unwrap_or(0);
            let right: u64 = sides[1].parse().unwrap_or(0);
            let converted = format!("{}/{}", cardinal_words(left), cardinal_words(right));
            return finish_token(converted, trailing_comma);
        }
        return token.to_string();
    }

    // Apostrophe-suffixed number: convert the numeric prefix only and keep
    // the suffix attached verbatim (1960'lı -> bin dokuz yüz altmış'lı).
    if let Some(apo) = word.find(['\'', '\u{2019}']) {
        let (prefix, rest) = word.split_at(apo);
        if !prefix.is_empty()
            && prefix.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            if let Some(converted) = convert_numeric_core(prefix) {
                return finish_token(format!("{converted}{rest}"), trailing_comma);
            }
        }
        return token.to_string();
    }

    match convert_numeric_core(word) {
        Some(converted) => finish_token(converted, trailing_comma),
        None => token.to_string(),
    }
}

fn finish_token(mut converted: String, trailing_comma: bool) -> String {
    if trailing_comma {
        converted.push(',');
    }
    converted
}

// ---------------------------------------------------------------------------
// Date pre-pass
// ---------------------------------------------------------------------------

/// Expand date-like patterns (01.01.2023, 9/5/24, 01-01-2023) into three
/// independent integer expansions. Runs before everything else so the
/// generic separator logic never sees date punctuation.
fn convert_dates(text: &str) -> String {
    DATE_RE
        .replace_all(text, |caps: &Captures| {
            let day: u64 = caps[1].parse().unwrap_or(0);
            let month: u64 = caps[2].parse().unwrap_or(0);
            let year: u64 = caps[3].parse().unwrap_or(0);
            format!(
                "{} {} {}",
                cardinal_words(day),
                cardinal_words(month),
                cardinal_words(year)
            )
        })
        .into_owned()
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Expand every recognized numeral in `text` to lowercase Turkish words.
///
/// Non-numeral text passes through unchanged. Comma-space list separators
/// and hyphens are protected with placeholders around tokenization so they
/// survive intact.
pub fn convert_numbers_to_words(text: &str) -> String {
    let text = convert_dates(text);
    let text = normalize_times(&text);

    let text = text
        .replace(", ", " |$| ")
        .replace('-', " ~ ")
        .replace(':', ": ");

    let converted: Vec<String> = text.split_whitespace().map(convert_token).collect();
    converted
        .join(" ")
        .replace(" |$| ", ", ")
        .replace(" ~ ", "-")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Cardinals --

    #[test]
    fn cardinal_basics() {
        assert_eq!(cardinal_words(0), "sıfır");
        assert_eq!(cardinal_words(9), "dokuz");
        assert_eq!(cardinal_words(10), "on");
        assert_eq!(cardinal_words(42), "kırk iki");
        assert_eq!(cardinal_words(100), "yüz");
        assert_eq!(cardinal_words(111), "yüz on bir");
        assert_eq!(cardinal_words(250), "iki yüz elli");
    }

    #[test]
    fn cardinal_thousands() {
        assert_eq!(cardinal_words(1000), "bin");
        assert_eq!(cardinal_words(1001), "bin bir");
        assert_eq!(cardinal_words(1010), "bin on");
        assert_eq!(cardinal_words(1999), "bin dokuz yüz doksan dokuz");
        assert_eq!(cardinal_words(2023), "iki bin yirmi üç");
        assert_eq!(cardinal_words(255_000), "iki yüz elli beş bin");
    }

    #[test]
    fn cardinal_millions_and_billions() {
        assert_eq!(cardinal_words(1_000_000), "bir milyon");
        assert_eq!(cardinal_words(5_000_000), "beş milyon");
        assert_eq!(cardinal_words(1_000_000_000), "bir milyar");
        assert_eq!(
            cardinal_words(1_500_000_000),
            "bir milyar beş yüz milyon"
        );
    }

    #[test]
    fn cardinal_compact() {
        assert_eq!(cardinal_words_compact(650), "altıyüzelli");
        assert_eq!(cardinal_words_compact(1999), "bindokuzyüzdoksandokuz");
    }

    // -- Decimals --

    #[test]
    fn decimal_conversion() {
        assert_eq!(convert_numbers_to_words("36,5"), "otuz altı virgül beş");
        assert_eq!(convert_numbers_to_words("3,05"), "üç virgül sıfır beş");
        assert_eq!(convert_numbers_to_words("3,50"), "üç virgül beş");
        assert_eq!(convert_numbers_to_words("3,00"), "üç");
    }

    // -- Thousands grouping vs. ambiguous dots --

    #[test]
    fn thousands_grouped_integers() {
        assert_eq!(convert_numbers_to_words("1.000"), "bin");
        assert_eq!(convert_numbers_to_words("1.250.000"), "bir milyon iki yüz elli bin");
        assert_eq!(
            convert_numbers_to_words("Değeri 2.000.000 dolar"),
            "Değeri iki milyon dolar"
        );
    }

    #[test]
    fn ambiguous_dot_left_untouched() {
        // Neither a thousands grouping nor a clock time (single decimal
        // digit, invalid hour); deferred rather than misread.
        assert_eq!(convert_numbers_to_words("45.9"), "45.9");
        assert_eq!(convert_numbers_to_words("oran 45.99 çıktı"), "oran 45.99 çıktı");
    }

    #[test]
    fn valid_time_shape_outranks_decimal() {
        // 3.14 reads as the clock time 03:14; Turkish decimals use a comma.
        assert_eq!(convert_numbers_to_words("pi 3.14 sayısı"), "pi üç on dört sayısı");
    }

    #[test]
    fn ordinal_marker_left_untouched() {
        assert_eq!(convert_numbers_to_words("3. sıra"), "3. sıra");
    }

    // -- Dates and times --

    #[test]
    fn date_expansion() {
        assert_eq!(
            convert_numbers_to_words("01.01.2023 tarihinde"),
            "bir bir iki bin yirmi üç tarihinde"
        );
        assert_eq!(
            convert_numbers_to_words("01-01-2023"),
            "bir bir iki bin yirmi üç"
        );
        assert_eq!(
            convert_numbers_to_words("9/5/1924"),
            "dokuz beş bin dokuz yüz yirmi dört"
        );
    }

    #[test]
    fn time_resolved_before_decimals() {
        // 22.00 is a time, not the decimal 22.0; zero minutes are omitted.
        assert_eq!(
            convert_numbers_to_words("Saat 22.00 sularında"),
            "Saat yirmi iki sularında"
        );
        assert_eq!(
            convert_numbers_to_words("Toplantı 22:15 gibi"),
            "Toplantı yirmi iki on beş gibi"
        );
        assert_eq!(
            convert_numbers_to_words("saat 9.30 gibi"),
            "saat dokuz buçuk gibi"
        );
    }

    // -- Fractions, apostrophes, lists --

    #[test]
    fn fraction_notation() {
        assert_eq!(convert_numbers_to_words("7/24 hizmet"), "yedi/yirmi dört hizmet");
    }

    #[test]
    fn apostrophe_suffix_preserved() {
        assert_eq!(
            convert_numbers_to_words("1960'lı yıllar"),
            "bin dokuz yüz altmış'lı yıllar"
        );
        assert_eq!(convert_numbers_to_words("8'i almadım"), "sekiz'i almadım");
    }

    #[test]
    fn list_commas_preserved() {
        assert_eq!(
            convert_numbers_to_words("13, 14 ve 15 Eylül"),
            "on üç, on dört ve on beş Eylül"
        );
    }

    #[test]
    fn hyphenated_ranges_preserved() {
        assert_eq!(convert_numbers_to_words("2020-2021"), "iki bin yirmi-iki bin yirmi bir");
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(
            convert_numbers_to_words("hiç sayı yok burada"),
            "hiç sayı yok burada"
        );
    }
}
