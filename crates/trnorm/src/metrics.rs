// Edit-distance metrics for ASR evaluation.
//
// WER and CER are Levenshtein distances over words and characters,
// normalized by the reference length. An empty reference scores 1.0 by
// convention: with nothing to compare against, any hypothesis (even an
// empty one) counts as total error.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("batched inputs must have equal lengths, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Levenshtein distance between two sequences.
///
/// Single rolling row, O(len(a) * len(b)) time and O(min(len)) space.
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Keep the shorter sequence as the row.
    if a.len() < b.len() {
        return levenshtein(b, a);
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous_row: Vec<usize> = (0..=b.len()).collect();
    for (i, item_a) in a.iter().enumerate() {
        let mut current_row = Vec::with_capacity(b.len() + 1);
        current_row.push(i + 1);
        for (j, item_b) in b.iter().enumerate() {
            let insertions = previous_row[j + 1] + 1;
            let deletions = current_row[j] + 1;
            let substitutions = previous_row[j] + usize::from(item_a != item_b);
            current_row.push(insertions.min(deletions).min(substitutions));
        }
        previous_row = current_row;
    }
    previous_row[b.len()]
}

/// Levenshtein distance between two strings, counted in characters.
pub fn levenshtein_str(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    levenshtein(&a_chars, &b_chars)
}

/// Element-wise character distances for two equal-length batches.
pub fn levenshtein_batch(a: &[String], b: &[String]) -> Result<Vec<usize>, MetricsError> {
    if a.len() != b.len() {
        return Err(MetricsError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| levenshtein_str(x, y))
        .collect())
}

/// Levenshtein distance divided by the longer length; two empty inputs
/// are identical, so 0.0.
pub fn normalized_levenshtein(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let max_len = a_len.max(b_len);
    if max_len == 0 {
        return 0.0;
    }
    levenshtein_str(a, b) as f64 / max_len as f64
}

/// Word Error Rate: word-level edit distance over the reference word
/// count. Empty reference scores 1.0.
pub fn wer(reference: &str, hypothesis: &str) -> f64 {
    let ref_words: Vec<&str> = reference.split_whitespace().collect();
    let hyp_words: Vec<&str> = hypothesis.split_whitespace().collect();

    if ref_words.is_empty() {
        return 1.0;
    }
    levenshtein(&ref_words, &hyp_words) as f64 / ref_words.len() as f64
}

/// Character Error Rate: character-level edit distance over the reference
/// character count. Empty reference scores 1.0.
pub fn cer(reference: &str, hypothesis: &str) -> f64 {
    let ref_len = reference.chars().count();
    if ref_len == 0 {
        return 1.0;
    }
    levenshtein_str(reference, hypothesis) as f64 / ref_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_classic_cases() {
        assert_eq!(levenshtein_str("kitten", "sitting"), 3);
        assert_eq!(levenshtein_str("", ""), 0);
        assert_eq!(levenshtein_str("abc", ""), 3);
        assert_eq!(levenshtein_str("", "abc"), 3);
        assert_eq!(levenshtein_str("abc", "abc"), 0);
        assert_eq!(levenshtein_str("abc", "abd"), 1);
    }

    #[test]
    fn turkish_characters_are_single_edits() {
        // Each Turkish letter differs from its ASCII lookalike.
        assert_eq!(levenshtein_str("şöğüıçİ", "soguici"), 7);
    }

    #[test]
    fn batch_distances() {
        let a = vec!["abc".to_string(), "def".to_string()];
        let b = vec!["abd".to_string(), "def".to_string()];
        assert_eq!(levenshtein_batch(&a, &b), Ok(vec![1, 0]));
        assert_eq!(levenshtein_batch(&[], &[]), Ok(vec![]));
    }

    #[test]
    fn batch_length_mismatch_fails() {
        let a = vec!["abc".to_string()];
        assert_eq!(
            levenshtein_batch(&a, &[]),
            Err(MetricsError::LengthMismatch { left: 1, right: 0 })
        );
    }

    #[test]
    fn wer_cases() {
        assert_eq!(wer("bu bir test cümlesidir", "bu bir test cümlesidir"), 0.0);
        assert_eq!(wer("bu bir test cümlesidir", "bu bir test cümlesi"), 0.25);
        assert_eq!(wer("", "x"), 1.0);
        assert_eq!(wer("x", ""), 1.0);
        // Empty on both sides still counts as total error.
        assert_eq!(wer("", ""), 1.0);
    }

    #[test]
    fn wer_suffix_mismatch_example() {
        let reference = "Kafkas göçmenleriyse günlük tartışmalardan uzak.";
        let hypothesis = "Kafkas göçmenleri ise günlük tartışmalardan uzak.";
        assert_eq!(wer(reference, hypothesis), 0.4);
    }

    #[test]
    fn cer_cases() {
        assert_eq!(cer("", "x"), 1.0);
        assert_eq!(cer("abc", "abc"), 0.0);
        let score = cer("otomatik konuşma tanıma", "otomotik konuşma tanımla");
        assert!((score - 2.0 / 23.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_distance() {
        assert_eq!(normalized_levenshtein("", ""), 0.0);
        assert_eq!(normalized_levenshtein("abc", ""), 1.0);
        assert_eq!(normalized_levenshtein("kitten", "sitting"), 3.0 / 7.0);
    }
}
