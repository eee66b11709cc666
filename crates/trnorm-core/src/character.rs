// Turkish character classification and case folding.
//
// Turkish cannot rely on `char::to_lowercase` alone: uppercase dotted İ
// lowers to `i`, while uppercase dotless I lowers to `ı`. The circumflexed
// vowels (â, î, û, ê, ô) count as regular vowels for harmony purposes.

// ---------------------------------------------------------------------------
// Vowel classification
// ---------------------------------------------------------------------------

/// Back ("kalın") vowels, lowercase: a ı o u û â
const BACK_VOWELS: &[char] = &['a', 'ı', 'o', 'u', '\u{00FB}', '\u{00E2}'];

/// Front ("ince") vowels, lowercase: e i ö ü î ê ô
const FRONT_VOWELS: &[char] = &['e', 'i', '\u{00F6}', '\u{00FC}', '\u{00EE}', '\u{00EA}', '\u{00F4}'];

/// Check whether a character is a Turkish vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    let lower = turkish_char_lower(c);
    BACK_VOWELS.contains(&lower) || FRONT_VOWELS.contains(&lower)
}

/// Check whether a character is a back vowel (case-insensitive).
pub fn is_back_vowel(c: char) -> bool {
    BACK_VOWELS.contains(&turkish_char_lower(c))
}

/// Check whether a character is a front vowel (case-insensitive).
pub fn is_front_vowel(c: char) -> bool {
    FRONT_VOWELS.contains(&turkish_char_lower(c))
}

// ---------------------------------------------------------------------------
// Case folding
// ---------------------------------------------------------------------------

/// Lowercase a single character using Turkish rules.
///
/// `İ` maps to `i` and `I` maps to `ı`; everything else follows the first
/// character of the Unicode lowercase mapping.
pub fn turkish_char_lower(c: char) -> char {
    match c {
        'İ' => 'i',
        'I' => 'ı',
        'Ç' => 'ç',
        'Ş' => 'ş',
        'Ğ' => 'ğ',
        'Ü' => 'ü',
        'Ö' => 'ö',
        'Â' => 'â',
        'Î' => 'î',
        'Û' => 'û',
        'Ê' => 'ê',
        'Ô' => 'ô',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Uppercase a single character using Turkish rules.
///
/// `i` maps to `İ` and `ı` maps to `I`.
pub fn turkish_char_upper(c: char) -> char {
    match c {
        'i' => 'İ',
        'ı' => 'I',
        'ç' => 'Ç',
        'ş' => 'Ş',
        'ğ' => 'Ğ',
        'ü' => 'Ü',
        'ö' => 'Ö',
        'â' => 'Â',
        'î' => 'Î',
        'û' => 'Û',
        'ê' => 'Ê',
        'ô' => 'Ô',
        _ => c.to_uppercase().next().unwrap_or(c),
    }
}

/// Lowercase a string using Turkish rules.
pub fn turkish_lower(s: &str) -> String {
    s.chars().map(turkish_char_lower).collect()
}

/// Uppercase a string using Turkish rules.
pub fn turkish_upper(s: &str) -> String {
    s.chars().map(turkish_char_upper).collect()
}

/// Uppercase only the first character, leaving the rest untouched.
pub fn turkish_capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(turkish_char_upper(first));
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Check whether a string is entirely uppercase under Turkish folding.
///
/// The empty string counts as uppercase, matching `s == turkish_upper(s)`.
pub fn is_turkish_upper(s: &str) -> bool {
    s.chars().all(|c| c == turkish_char_upper(c))
}

// ---------------------------------------------------------------------------
// Circumflex ("hatted") characters
// ---------------------------------------------------------------------------

/// Strip circumflexes from Turkish vowels: â→a, î→i, û→u, ô→o and their
/// uppercase forms. Note the capital Î maps to plain I here; lowercase-fold
/// before calling this if dotted-I distinctions matter.
pub fn remove_hats(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'â' => 'a',
            'Â' => 'A',
            'î' => 'i',
            'Î' => 'I',
            'û' => 'u',
            'Û' => 'U',
            'ô' => 'o',
            'Ô' => 'O',
            _ => c,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Word-level vowel queries
// ---------------------------------------------------------------------------

/// Check whether a word contains at least one vowel.
pub fn has_vowel(word: &str) -> bool {
    word.chars().any(is_vowel)
}

/// Check whether a word ends with a vowel.
pub fn ends_with_vowel(word: &str) -> bool {
    word.chars().next_back().is_some_and(is_vowel)
}

/// The last vowel of a word, lowercased, or `None` if the word has no vowel.
pub fn last_vowel(word: &str) -> Option<char> {
    word.chars()
        .rev()
        .find(|&c| is_vowel(c))
        .map(turkish_char_lower)
}

/// Whether the last vowel of a word is a back vowel. `None` if no vowel.
pub fn last_vowel_is_back(word: &str) -> Option<bool> {
    last_vowel(word).map(|v| BACK_VOWELS.contains(&v))
}
