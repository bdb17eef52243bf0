use crate::types::{PDF_SUFFIX, SNIPPET_LEN};

/// Remove every single and double quote from an argument value
pub fn strip_quotes(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '"' | '\'')).collect()
}

/// Whether a directory entry name is a scan candidate
pub fn is_pdf_name(file_name: &str) -> bool {
    file_name.ends_with(PDF_SUFFIX)
}

/// Lowercase one character at a time, without context-dependent rules such
/// as the final sigma, so text and keyword always fold the same way
fn fold_case(value: &str) -> String {
    value.chars().flat_map(char::to_lowercase).collect()
}

/// Find the byte offset in `text` where `keyword` first occurs, ignoring case.
///
/// The hit in the folded copy is mapped back by replaying the folded length of
/// each original character, so the returned offset always lands on a character
/// boundary of the original text even when folding changes its length.
pub fn find_case_insensitive(text: &str, keyword: &str) -> Option<usize> {
    let needle = fold_case(keyword);
    if needle.is_empty() {
        return Some(0);
    }

    let hit = fold_case(text).find(&needle)?;

    let mut folded_len = 0;
    text.char_indices().find_map(|(offset, ch)| {
        folded_len += ch.to_lowercase().map(char::len_utf8).sum::<usize>();
        (folded_len > hit).then_some(offset)
    })
}

/// Take up to `SNIPPET_LEN` characters of `text` starting at byte `start`
pub fn snippet_at(text: &str, start: usize) -> String {
    text[start..].chars().take(SNIPPET_LEN).collect()
}

/// Snippet following the first case-insensitive occurrence of `keyword`
pub fn find_snippet(text: &str, keyword: &str) -> Option<String> {
    find_case_insensitive(text, keyword).map(|start| snippet_at(text, start))
}
