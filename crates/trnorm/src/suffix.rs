// Standalone suffix merging.
//
// The words "ile", "ise" and "iken" usually surface fused onto the
// preceding word in speech. ASR hypotheses therefore rarely contain them
// standalone; merging them in the reference text removes a systematic
// word-level mismatch. The context-aware variant skips merging when both
// sides already use the same standalone pattern, since merging would then
// create the very mismatch it is meant to remove.

use trnorm_core::{attach_clitic, turkish_lower, Clitic};

fn merge_one(text: &str, clitic: Clitic) -> String {
    let mut words: Vec<String> = text.split_whitespace().map(str::to_string).collect();

    let indices: Vec<usize> = words
        .iter()
        .enumerate()
        .filter(|(_, word)| turkish_lower(word) == clitic.as_str())
        .map(|(i, _)| i)
        .collect();

    // Back to front so earlier indices stay valid after removal.
    for &idx in indices.iter().rev() {
        if idx == 0 {
            continue;
        }
        let merged = attach_clitic(&words[idx - 1], clitic);
        words[idx - 1] = merged;
        words.remove(idx);
    }

    words.join(" ")
}

/// Fuse standalone "ile"/"ise"/"iken" tokens onto their preceding words.
pub fn merge_suffixes(text: &str) -> String {
    let mut result = text.to_string();
    for clitic in Clitic::ALL {
        result = merge_one(&result, clitic);
    }
    result
}

/// Count standalone occurrences of a clitic, case-folded and with
/// punctuation stripped from token edges.
fn count_clitic(text: &str, clitic: Clitic) -> usize {
    text.split_whitespace()
        .filter(|word| {
            let folded = turkish_lower(word);
            folded.trim_matches(|c: char| !c.is_alphanumeric()) == clitic.as_str()
        })
        .count()
}

/// Merge suffixes in `text` unless `context_text` shows the exact same
/// standalone-suffix counts for all three clitics, in which case both
/// sides already agree and `text` is returned unchanged.
pub fn context_aware_merge_suffixes(text: &str, context_text: &str) -> String {
    let counts_match = Clitic::ALL
        .iter()
        .all(|&clitic| count_clitic(text, clitic) == count_clitic(context_text, clitic));

    if counts_match {
        text.to_string()
    } else {
        merge_suffixes(text)
    }
}
