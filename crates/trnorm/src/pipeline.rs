// Pipeline orchestration.
//
// Every rewrite stage shares the uniform signature
// `fn(&str, Option<&str>) -> String`; context-blind stages simply ignore
// the second argument. Stage order is semantics: times must be consumed
// before the number converter can misread them as decimals, ordinals
// before numbers so "3." is not half-eaten, and punctuation stripping
// comes last.

use lazy_static::lazy_static;
use regex::Regex;

use trnorm_core::{remove_hats, turkish_lower};

use crate::alphanumeric::separate_alphanumeric;
use crate::apostrophe::remove_apostrophes;
use crate::numbers::convert_numbers_to_words;
use crate::ordinals::normalize_ordinals;
use crate::suffix::{context_aware_merge_suffixes, merge_suffixes};
use crate::symbols::convert_symbols;
use crate::time::normalize_times;
use crate::units::{normalize_dimensions, normalize_units, preprocess_dimensions};

/// The uniform stage signature: input text plus optional context text.
pub type StageFn = fn(&str, Option<&str>) -> String;

/// A named transformation step.
#[derive(Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    run: StageFn,
}

impl Stage {
    pub const fn new(name: &'static str, run: StageFn) -> Self {
        Self { name, run }
    }

    pub fn apply(&self, text: &str, context: Option<&str>) -> String {
        (self.run)(text, context)
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

// ---------------------------------------------------------------------------
// Stage functions
// ---------------------------------------------------------------------------

fn stage_times(text: &str, _context: Option<&str>) -> String {
    normalize_times(text)
}

fn stage_alphanumeric(text: &str, _context: Option<&str>) -> String {
    separate_alphanumeric(text)
}

fn stage_ordinals(text: &str, _context: Option<&str>) -> String {
    normalize_ordinals(text)
}

fn stage_symbols(text: &str, _context: Option<&str>) -> String {
    convert_symbols(text)
}

fn stage_numbers(text: &str, _context: Option<&str>) -> String {
    convert_numbers_to_words(text)
}

fn stage_suffixes(text: &str, context: Option<&str>) -> String {
    match context {
        Some(context_text) => context_aware_merge_suffixes(text, context_text),
        None => merge_suffixes(text),
    }
}

fn stage_apostrophes(text: &str, _context: Option<&str>) -> String {
    remove_apostrophes(text)
}

fn stage_accents(text: &str, _context: Option<&str>) -> String {
    remove_hats(text)
}

fn stage_dimension_preprocess(text: &str, _context: Option<&str>) -> String {
    preprocess_dimensions(text)
}

fn stage_dimensions(text: &str, _context: Option<&str>) -> String {
    normalize_dimensions(text)
}

fn stage_units(text: &str, _context: Option<&str>) -> String {
    normalize_units(text)
}

fn stage_lowercase(text: &str, _context: Option<&str>) -> String {
    turkish_lower(text)
}

lazy_static! {
    static ref NON_ALPHABET_RE: Regex = Regex::new(r"[^a-zçğıöşü]").unwrap();
    static ref MULTISPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Replace everything outside the lowercase Turkish alphabet with spaces
/// and collapse runs. Runs after lowercasing and accent stripping.
fn stage_punctuation(text: &str, _context: Option<&str>) -> String {
    let stripped = NON_ALPHABET_RE.replace_all(text, " ");
    MULTISPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

/// The default pipeline, in application order.
pub const DEFAULT_STAGES: &[Stage] = &[
    Stage::new("times", stage_times),
    Stage::new("alphanumeric-split", stage_alphanumeric),
    Stage::new("ordinals", stage_ordinals),
    Stage::new("symbols", stage_symbols),
    Stage::new("numbers", stage_numbers),
    Stage::new("suffix-merge", stage_suffixes),
    Stage::new("apostrophe-strip", stage_apostrophes),
    Stage::new("accent-strip", stage_accents),
    Stage::new("dimension-preprocess", stage_dimension_preprocess),
    Stage::new("dimension-normalize", stage_dimensions),
    Stage::new("unit-normalize", stage_units),
    Stage::new("lowercase", stage_lowercase),
    Stage::new("accent-strip-lower", stage_accents),
    Stage::new("punctuation-strip", stage_punctuation),
];

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Normalize text through the default pipeline without context.
pub fn normalize(text: &str) -> String {
    normalize_with(text, DEFAULT_STAGES, None)
}

/// Normalize text through an explicit stage list, threading the optional
/// context text to every stage.
pub fn normalize_with(text: &str, stages: &[Stage], context: Option<&str>) -> String {
    let mut result = text.to_string();
    for stage in stages {
        result = stage.apply(&result, context);
    }
    result
}

/// Normalize a batch through the default pipeline.
///
/// When a context batch of equal length is given, contexts pair with texts
/// elementwise; a mismatched context batch is ignored rather than
/// misaligned.
pub fn normalize_batch(texts: &[String], contexts: Option<&[String]>) -> Vec<String> {
    let paired = contexts.filter(|c| c.len() == texts.len());

    texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let context = paired.map(|c| c[i].as_str());
            normalize_with(text, DEFAULT_STAGES, context)
        })
        .collect()
}
