// Ordinal normalization.
//
// Arabic ordinal markers come in three shapes: a trailing period ("3."),
// an apostrophe plus suffix ("3'üncü"), or a fused suffix ("3üncü"). A
// trailing period is only an ordinal when the context says so: a line
// starting with "1. Madde" where the next word is capitalized is a
// numbered-list heading and stays verbatim, and "Mehmet D." is an initial,
// not an ordinal. Text is processed line by line because bullet-point
// detection is anchored to line starts.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use trnorm_core::is_turkish_upper;

use crate::numbers::cardinal_words;
use crate::roman::{is_roman_numeral, roman_to_arabic};

lazy_static! {
    /// An ordinal marker followed by another one: "1. 2." or "1., 2.".
    static ref SEQUENCE_RE: Regex = Regex::new(r"\b(\d+)\.,?(\s+)(\d+)\.").unwrap();
    /// An ordinal marker followed by a word; casing decides the outcome.
    static ref CONTEXT_RE: Regex =
        Regex::new(r"\b(\d+)\.\s+([A-Za-zÇçĞğİıÖöŞşÜü]\w*)").unwrap();
    /// An ordinal marker surrounded by whitespace or line boundaries.
    static ref STANDALONE_RE: Regex = Regex::new(r"(^|\s)(\d+)\.($|\s)").unwrap();
    /// Digits with an attached or apostrophe-joined ordinal suffix:
    /// "1'inci", "3üncü", "42'nci".
    static ref ATTACHED_RE: Regex =
        Regex::new(r"\b(\d+)'?(?:[iı]nc[iı]|nc[iı]|uncu|üncü)\b").unwrap();
    /// Numbered-list heading at the start of a line.
    static ref BULLET_RE: Regex =
        Regex::new(r"^\s*(\d+)\.\s+([A-Za-zÇçĞğİıÖöŞşÜü]\w*)").unwrap();
    /// Roman ordinal: I/V/X combinations with a period and a word. The
    /// symbol set is deliberately restricted so single capital initials
    /// like "D." or "M." are never mistaken for Roman numerals.
    static ref ROMAN_ORDINAL_RE: Regex =
        Regex::new(r"\b([IVX]+)\.\s+([A-Za-zÇçĞğİıÖöŞşÜü]\w*)").unwrap();
}

// ---------------------------------------------------------------------------
// Ordinal number words
// ---------------------------------------------------------------------------

/// Direct forms for the small ordinals and round decades.
fn special_case(n: u64) -> Option<&'static str> {
    let word = match n {
        1 => "birinci",
        2 => "ikinci",
        3 => "üçüncü",
        4 => "dördüncü",
        5 => "beşinci",
        6 => "altıncı",
        7 => "yedinci",
        8 => "sekizinci",
        9 => "dokuzuncu",
        10 => "onuncu",
        20 => "yirminci",
        30 => "otuzuncu",
        40 => "kırkıncı",
        50 => "ellinci",
        60 => "altmışıncı",
        70 => "yetmişinci",
        80 => "sekseninci",
        90 => "doksanıncı",
        100 => "yüzüncü",
        1000 => "bininci",
        _ => return None,
    };
    Some(word)
}

/// Mapping from a cardinal's final morpheme to its ordinal form, longest
/// morpheme first so "milyon" wins over "on" and "altmış" over "altı".
const ORDINAL_TAILS: [(&str, &str); 22] = [
    ("altmış", "altmışıncı"),
    ("yetmiş", "yetmişinci"),
    ("seksen", "sekseninci"),
    ("doksan", "doksanıncı"),
    ("milyon", "milyonuncu"),
    ("milyar", "milyarıncı"),
    ("dokuz", "dokuzuncu"),
    ("sekiz", "sekizinci"),
    ("yirmi", "yirminci"),
    ("dört", "dördüncü"),
    ("altı", "altıncı"),
    ("yedi", "yedinci"),
    ("otuz", "otuzuncu"),
    ("kırk", "kırkıncı"),
    ("elli", "ellinci"),
    ("bir", "birinci"),
    ("iki", "ikinci"),
    ("beş", "beşinci"),
    ("yüz", "yüzüncü"),
    ("bin", "bininci"),
    ("üç", "üçüncü"),
    ("on", "onuncu"),
];

/// Convert a number to Turkish ordinal words.
///
/// The ordinal suffix attaches to the final morpheme only: 42 is
/// "kırk ikinci", 103 is "yüz üçüncü", 2000 is "iki bininci".
pub fn ordinal_words(n: u64) -> String {
    if let Some(word) = special_case(n) {
        return word.to_string();
    }

    let words = cardinal_words(n);
    for (tail, ordinal) in ORDINAL_TAILS {
        if let Some(stem) = words.strip_suffix(tail) {
            return format!("{stem}{ordinal}");
        }
    }
    // Unreachable for any cardinal this crate produces.
    format!("{words}ıncı")
}

// ---------------------------------------------------------------------------
// Text passes
// ---------------------------------------------------------------------------

fn starts_uppercase(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| is_turkish_upper(&c.to_string()) && c.is_alphabetic())
}

/// A numbered-list heading: "1. Madde" at line start with a capitalized
/// word. These are structural, not spoken ordinals.
fn is_bullet_point(line: &str) -> bool {
    BULLET_RE
        .captures(line)
        .is_some_and(|caps| starts_uppercase(&caps[2]))
}

fn apply_sequence_pass(line: &str) -> String {
    // Each round rewrites the left marker of a "N. M." pair and keeps the
    // right one, so chains like "1. 2. 3." resolve front to back.
    let mut current = line.to_string();
    loop {
        let next = SEQUENCE_RE
            .replacen(&current, 1, |caps: &Captures| {
                let n: u64 = caps[1].parse().unwrap_or(0);
                format!("{}{}{}.", ordinal_words(n), &caps[2], &caps[3])
            })
            .into_owned();
        if next == current {
            return next;
        }
        current = next;
    }
}

/// Placeholder inserted between digits and period when the context pass
/// decides to preserve a marker, so the standalone pass cannot re-match it.
/// Stripped once all passes have run.
const KEEP_MARK: char = '\u{0}';

fn apply_context_pass(line: &str) -> String {
    CONTEXT_RE
        .replace_all(line, |caps: &Captures| {
            let word = &caps[2];
            if starts_uppercase(word) {
                // Proper noun or heading inside running text; keep the digits.
                format!("{}{KEEP_MARK}. {}", &caps[1], word)
            } else {
                let n: u64 = caps[1].parse().unwrap_or(0);
                format!("{} {}", ordinal_words(n), word)
            }
        })
        .into_owned()
}

fn apply_standalone_pass(line: &str) -> String {
    STANDALONE_RE
        .replace_all(line, |caps: &Captures| {
            let n: u64 = caps[2].parse().unwrap_or(0);
            format!("{}{}{}", &caps[1], ordinal_words(n), &caps[3])
        })
        .into_owned()
}

fn apply_attached_pass(line: &str) -> String {
    ATTACHED_RE
        .replace_all(line, |caps: &Captures| {
            let n: u64 = caps[1].parse().unwrap_or(0);
            ordinal_words(n)
        })
        .into_owned()
}

fn apply_roman_pass(line: &str) -> String {
    ROMAN_ORDINAL_RE
        .replace_all(line, |caps: &Captures| {
            let roman = &caps[1];
            if is_roman_numeral(roman) {
                match roman_to_arabic(roman) {
                    Ok(n) => return format!("{} {}", ordinal_words(u64::from(n)), &caps[2]),
                    Err(_) => {}
                }
            }
            caps[0].to_string()
        })
        .into_owned()
}

fn normalize_line(line: &str, convert_roman: bool) -> String {
    if is_bullet_point(line) {
        return line.to_string();
    }

    let mut line = line.to_string();
    if convert_roman {
        line = apply_roman_pass(&line);
    }
    line = apply_sequence_pass(&line);
    line = apply_context_pass(&line);
    line = apply_standalone_pass(&line);
    line = apply_attached_pass(&line);
    line.replace(KEEP_MARK, "")
}

/// Rewrite Arabic ordinal markers as Turkish ordinal words.
///
/// Roman ordinals ("II. Dünya Savaşı") are left alone; use
/// [`normalize_ordinals_with_roman`] to convert them too.
pub fn normalize_ordinals(text: &str) -> String {
    text.split('\n')
        .map(|line| normalize_line(line, false))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Like [`normalize_ordinals`], additionally converting Roman ordinals
/// built from I, V and X.
pub fn normalize_ordinals_with_roman(text: &str) -> String {
    text.split('\n')
        .map(|line| normalize_line(line, true))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Ordinal words --

    #[test]
    fn special_case_ordinals() {
        assert_eq!(ordinal_words(1), "birinci");
        assert_eq!(ordinal_words(4), "dördüncü");
        assert_eq!(ordinal_words(10), "onuncu");
        assert_eq!(ordinal_words(40), "kırkıncı");
        assert_eq!(ordinal_words(100), "yüzüncü");
        assert_eq!(ordinal_words(1000), "bininci");
    }

    #[test]
    fn compound_ordinals_suffix_last_morpheme() {
        assert_eq!(ordinal_words(42), "kırk ikinci");
        assert_eq!(ordinal_words(103), "yüz üçüncü");
        assert_eq!(ordinal_words(2000), "iki bininci");
        assert_eq!(ordinal_words(1999), "bin dokuz yüz doksan dokuzuncu");
        assert_eq!(ordinal_words(1_000_000), "bir milyonuncu");
    }

    // -- Context pass --

    #[test]
    fn lowercase_following_word_converts() {
        assert_eq!(normalize_ordinals("3. sırada"), "üçüncü sırada");
        assert_eq!(normalize_ordinals("dünyanın 7. harikası"), "dünyanın yedinci harikası");
    }

    #[test]
    fn uppercase_following_word_preserved() {
        // Could be a heading or a proper noun; leave the digits alone.
        assert_eq!(
            normalize_ordinals("Sınavda 5. Ahmet oldu"),
            "Sınavda 5. Ahmet oldu"
        );
    }

    #[test]
    fn bullet_point_line_preserved() {
        assert_eq!(normalize_ordinals("1. Giriş"), "1. Giriş");
        assert_eq!(
            normalize_ordinals("1. Giriş\n3. adım burada"),
            "1. Giriş\nüçüncü adım burada"
        );
    }

    // -- Sequence and standalone passes --

    #[test]
    fn ordinal_sequences() {
        assert_eq!(
            normalize_ordinals("sıralamada 1. 2. 3. geldiler"),
            "sıralamada birinci ikinci üçüncü geldiler"
        );
    }

    #[test]
    fn standalone_ordinal() {
        assert_eq!(normalize_ordinals("yarışı 2. bitirdi"), "yarışı ikinci bitirdi");
        assert_eq!(normalize_ordinals("sıra 5."), "sıra beşinci");
    }

    // -- Attached suffixes --

    #[test]
    fn apostrophe_and_fused_suffixes() {
        assert_eq!(normalize_ordinals("1'inci kat"), "birinci kat");
        assert_eq!(normalize_ordinals("3üncü kişi"), "üçüncü kişi");
        assert_eq!(normalize_ordinals("42'nci sokak"), "kırk ikinci sokak");
        assert_eq!(normalize_ordinals("8'inci"), "sekizinci");
    }

    // -- Roman ordinals --

    #[test]
    fn roman_ordinals_opt_in() {
        assert_eq!(
            normalize_ordinals("II. Dünya Savaşı"),
            "II. Dünya Savaşı"
        );
        assert_eq!(
            normalize_ordinals_with_roman("II. Dünya Savaşı"),
            "ikinci Dünya Savaşı"
        );
        assert_eq!(
            normalize_ordinals_with_roman("XX. yüzyıl başları"),
            "yirminci yüzyıl başları"
        );
    }

    #[test]
    fn single_letter_initial_not_roman() {
        // "D." is an abbreviated surname; D is outside the I/V/X subset.
        assert_eq!(
            normalize_ordinals_with_roman("Mehmet D. geldi"),
            "Mehmet D. geldi"
        );
    }

    #[test]
    fn invalid_roman_combination_untouched() {
        assert_eq!(
            normalize_ordinals_with_roman("IIII. madde"),
            "IIII. madde"
        );
    }
}
