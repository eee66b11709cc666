// Clitic attachment for "ile", "ise" and "iken".
//
// When these words follow another word in speech they fuse onto it:
// "Toros ile" becomes "Torosla", "verdi ise" becomes "verdiyse",
// "böyle iken" becomes "böyleyken". The fused form follows vowel harmony,
// with a lexical exception table for loanwords whose final consonant is
// pronounced front despite a back last vowel (alkol, kontrol, saat, ...).

use std::str::FromStr;

use hashbrown::HashMap;
use lazy_static::lazy_static;

use crate::character::{
    ends_with_vowel, has_vowel, is_turkish_upper, last_vowel_is_back, remove_hats, turkish_lower,
};

/// The three clitics that can fuse onto a preceding word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clitic {
    /// "ile" (with/and): fuses as -la/-le/-yla/-yle.
    Ile,
    /// "ise" (if/whereas): fuses as -sa/-se/-ysa/-yse.
    Ise,
    /// "iken" (while): fuses as -ken/-yken, invariant vowel.
    Iken,
}

impl Clitic {
    /// The standalone written form of the clitic.
    pub fn as_str(self) -> &'static str {
        match self {
            Clitic::Ile => "ile",
            Clitic::Ise => "ise",
            Clitic::Iken => "iken",
        }
    }

    /// All clitics, in the order the suffix merger processes them.
    pub const ALL: [Clitic; 3] = [Clitic::Ile, Clitic::Ise, Clitic::Iken];

    /// The suffix consonant for the harmonized forms of ile/ise.
    fn consonant(self) -> char {
        match self {
            Clitic::Ile => 'l',
            Clitic::Ise => 's',
            Clitic::Iken => 'k',
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CliticError {
    #[error("unknown clitic {0:?}, expected one of: ile, ise, iken")]
    Unknown(String),
}

impl FromStr for Clitic {
    type Err = CliticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ile" => Ok(Clitic::Ile),
            "ise" => Ok(Clitic::Ise),
            "iken" => Ok(Clitic::Iken),
            other => Err(CliticError::Unknown(other.to_string())),
        }
    }
}

lazy_static! {
    /// Loanwords taking front-vowel ile/ise suffixes despite back-vowel
    /// harmony. Keyed on circumflex-stripped lowercase forms; values are
    /// the (ile, ise) endings.
    static ref HARMONY_EXCEPTIONS: HashMap<&'static str, (&'static str, &'static str)> = {
        let mut m = HashMap::new();
        m.insert("alkol", ("le", "se"));
        m.insert("festival", ("le", "se"));
        m.insert("gol", ("le", "se"));
        m.insert("hakikat", ("le", "se"));
        m.insert("hal", ("le", "se"));
        m.insert("harf", ("le", "se"));
        m.insert("kabul", ("le", "se"));
        m.insert("kontrol", ("le", "se"));
        m.insert("petrol", ("le", "se"));
        m.insert("rol", ("le", "se"));
        m.insert("saat", ("le", "se"));
        m.insert("sembol", ("le", "se"));
        m.insert("usul", ("le", "se"));
        m
    };
}

/// Fuse a clitic onto a word according to Turkish grammar.
///
/// Returns the fused form ("Toros" + ile -> "Torosla"), or the word and the
/// standalone clitic separated by a space when fusion is not possible:
/// short all-uppercase abbreviations ("AB ile") and vowelless words keep
/// the clitic as its own word. If `word` contains multiple words, only the
/// last one is considered (and returned).
pub fn attach_clitic(word: &str, clitic: Clitic) -> String {
    if word.is_empty() {
        return String::new();
    }
    let word = word.split(' ').next_back().unwrap_or(word);

    let buffer = if ends_with_vowel(word) { "y" } else { "" };

    // Abbreviations like "AB" or "TBMM" are spelled out letter by letter;
    // no fused form exists for the short ones.
    if is_turkish_upper(word) && word.chars().count() <= 3 {
        return format!("{word} {}", clitic.as_str());
    }

    if !has_vowel(word) {
        return format!("{word} {}", clitic.as_str());
    }

    if clitic == Clitic::Iken {
        return format!("{word}{buffer}ken");
    }

    let folded = remove_hats(&turkish_lower(word));
    if let Some(&(ile_ending, ise_ending)) = HARMONY_EXCEPTIONS.get(folded.as_str()) {
        let ending = match clitic {
            Clitic::Ile => ile_ending,
            _ => ise_ending,
        };
        return format!("{word}{ending}");
    }

    let vowel = if last_vowel_is_back(word).unwrap_or(false) {
        'a'
    } else {
        'e'
    };
    format!("{word}{buffer}{}{vowel}", clitic.consonant())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clitic_from_str() {
        assert_eq!("ile".parse(), Ok(Clitic::Ile));
        assert_eq!("ise".parse(), Ok(Clitic::Ise));
        assert_eq!("iken".parse(), Ok(Clitic::Iken));
        assert!(matches!(
            "ila".parse::<Clitic>(),
            Err(CliticError::Unknown(_))
        ));
    }

    #[test]
    fn ile_back_harmony() {
        assert_eq!(attach_clitic("Toros", Clitic::Ile), "Torosla");
        assert_eq!(attach_clitic("kapı", Clitic::Ile), "kapıyla");
    }

    #[test]
    fn ile_front_harmony() {
        assert_eq!(attach_clitic("Veli", Clitic::Ile), "Veliyle");
        assert_eq!(attach_clitic("tren", Clitic::Ile), "trenle");
    }

    #[test]
    fn ise_forms() {
        assert_eq!(attach_clitic("verdi", Clitic::Ise), "verdiyse");
        assert_eq!(attach_clitic("güzel", Clitic::Ise), "güzelse");
        assert_eq!(attach_clitic("yok", Clitic::Ise), "yoksa");
    }

    #[test]
    fn iken_forms() {
        assert_eq!(attach_clitic("böyle", Clitic::Iken), "böyleyken");
        assert_eq!(attach_clitic("çocuk", Clitic::Iken), "çocukken");
    }

    #[test]
    fn short_abbreviation_stays_separate() {
        assert_eq!(attach_clitic("AB", Clitic::Ile), "AB ile");
        assert_eq!(attach_clitic("ABD", Clitic::Ise), "ABD ise");
        // Longer all-caps words do fuse.
        assert_eq!(attach_clitic("TOROS", Clitic::Ile), "TOROSla");
    }

    #[test]
    fn vowelless_word_stays_separate() {
        assert_eq!(attach_clitic("krş", Clitic::Ile), "krş ile");
    }

    #[test]
    fn harmony_exceptions() {
        assert_eq!(attach_clitic("alkol", Clitic::Ile), "alkolle");
        assert_eq!(attach_clitic("kontrol", Clitic::Ile), "kontrolle");
        assert_eq!(attach_clitic("saat", Clitic::Ile), "saatle");
        assert_eq!(attach_clitic("kabul", Clitic::Ise), "kabulse");
        // Capitalized exception words still match via folding.
        assert_eq!(attach_clitic("Kontrol", Clitic::Ile), "Kontrolle");
    }

    #[test]
    fn multi_word_input_uses_last_word() {
        assert_eq!(attach_clitic("eve gitti", Clitic::Ise), "gittiyse");
    }

    #[test]
    fn empty_input() {
        assert_eq!(attach_clitic("", Clitic::Ile), "");
    }
}
