// Apostrophe and quote stripping.
//
// Turkish attaches case suffixes to proper nouns with an apostrophe
// ("İstanbul'da"). ASR output has no apostrophes, so removing them from
// the reference keeps the comparison fair.

/// Remove apostrophes and double quotes while preserving word boundaries.
pub fn remove_apostrophes(text: &str) -> String {
    text.replace(" '", " ")
        .replace("' ", " ")
        .replace('\'', "")
        .replace(" \"", " ")
        .replace("\" ", " ")
        .replace('"', "")
}
