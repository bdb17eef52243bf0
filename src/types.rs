use std::path::PathBuf;

/// Maximum snippet length, in characters
pub const SNIPPET_LEN: usize = 400;

/// Suffix a directory entry must carry to be scanned
pub const PDF_SUFFIX: &str = ".pdf";

/// Represents a match as (file name, snippet)
pub type SearchResult = (String, String);

/// Collection of search results, in directory listing order
pub type SearchResults = Vec<SearchResult>;

/// Validated scan settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Directory to scan (non-recursively)
    pub directory: PathBuf,
    /// Keyword to look for, matched case-insensitively
    pub keyword: String,
}
