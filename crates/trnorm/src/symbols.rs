// Symbol-to-text conversion.
//
// Currency and percent symbols read out differently depending on position:
// "%50" is "yüzde 50" (text before the amount), while "$500" and "500 $"
// are both "500 dolar" (currency text always follows the amount in
// Turkish). Apostrophe suffixes stay attached to the number, not to the
// inserted word: "%50'si" becomes "yüzde 50'si".

use std::sync::{Mutex, PoisonError};

use hashbrown::HashMap;
use lazy_static::lazy_static;
use regex::Regex;

/// Default symbol table: (symbol, spoken text, text placed after number).
const DEFAULT_MAPPINGS: &[(&str, &str, bool)] = &[
    ("%", "yüzde", false),
    ("$", "dolar", true),
    ("€", "avro", true),
    ("£", "sterlin", true),
    ("₺", "lira", true),
    ("¥", "yen", true),
    ("₽", "ruble", true),
    ("₹", "rupi", true),
    ("₩", "won", true),
    ("฿", "baht", true),
    ("₫", "dong", true),
    ("₴", "grivna", true),
    ("₲", "guarani", true),
    ("₱", "peso", true),
    ("₡", "colon", true),
    ("₦", "naira", true),
    ("₭", "kip", true),
];

struct CompiledSymbol {
    text: String,
    text_after: bool,
    /// Symbol preceding the number: "$500", "%50'si".
    before_number: Regex,
    /// Symbol following the number: "500 $", "500$".
    after_number: Regex,
}

/// A registry of symbol mappings with compiled match patterns.
///
/// `SymbolConverter::new` starts from the default table; mappings added
/// later overwrite existing ones keyed by symbol.
pub struct SymbolConverter {
    symbols: HashMap<String, CompiledSymbol>,
}

impl SymbolConverter {
    /// A converter pre-populated with the default symbol table.
    pub fn new() -> Self {
        let mut converter = Self::empty();
        for &(symbol, text, text_after) in DEFAULT_MAPPINGS {
            converter.add_mapping(symbol, text, text_after);
        }
        converter
    }

    /// A converter with no mappings at all.
    pub fn empty() -> Self {
        Self {
            symbols: HashMap::new(),
        }
    }

    /// Register a symbol mapping, replacing any existing one for the same
    /// symbol. `text_after` places the spoken text after the number, the
    /// Turkish convention for currencies.
    pub fn add_mapping(&mut self, symbol: &str, text: &str, text_after: bool) {
        let escaped = regex::escape(symbol);
        let number = r"(\d+(?:[.,]\d+)?)((?:'[a-zA-ZçÇğĞıİöÖşŞüÜ]+)?)";
        // The two patterns are infallible for any escaped symbol.
        let before_number = Regex::new(&format!("{escaped}{number}")).unwrap();
        let after_number = Regex::new(&format!(r"{number}\s*{escaped}")).unwrap();

        self.symbols.insert(
            symbol.to_string(),
            CompiledSymbol {
                text: text.to_string(),
                text_after,
                before_number,
                after_number,
            },
        );
    }

    /// Convert one registered symbol throughout the text. Unknown symbols
    /// leave the text unchanged.
    pub fn convert_symbol(&self, text: &str, symbol: &str) -> String {
        let Some(entry) = self.symbols.get(symbol) else {
            return text.to_string();
        };

        let result = if entry.text_after {
            entry
                .before_number
                .replace_all(text, format!("$1$2 {}", entry.text))
        } else {
            entry
                .before_number
                .replace_all(text, format!("{} $1$2", entry.text))
        };

        // A symbol trailing the number is always read after it, whatever
        // the symbol's default position.
        entry
            .after_number
            .replace_all(&result, format!("$1$2 {}", entry.text))
            .into_owned()
    }

    /// Convert every registered symbol in the text.
    pub fn convert(&self, text: &str) -> String {
        let mut result = text.to_string();
        for symbol in self.symbols.keys() {
            result = self.convert_symbol(&result, symbol);
        }
        result
    }
}

impl Default for SymbolConverter {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    /// Process-wide default registry used by the free functions. Guarded
    /// by a mutex so `add_symbol_mapping` is safe across threads.
    static ref DEFAULT_CONVERTER: Mutex<SymbolConverter> = Mutex::new(SymbolConverter::new());
}

/// Convert all symbols in `text` using the process-wide default registry.
pub fn convert_symbols(text: &str) -> String {
    DEFAULT_CONVERTER
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .convert(text)
}

/// Register a symbol mapping on the process-wide default registry.
pub fn add_symbol_mapping(symbol: &str, text: &str, text_after: bool) {
    DEFAULT_CONVERTER
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .add_mapping(symbol, text, text_after);
}
