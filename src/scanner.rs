use colored::Colorize;
use indicatif::ProgressBar;
use std::path::Path;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::{
    error::{ScanError, ScanResult},
    parsers::TextExtractor,
    types::SearchResults,
    utils::{find_snippet, is_pdf_name},
};

/// Searches the PDFs of a single directory for a keyword
pub struct Scanner<E> {
    extractor: E,
    progress: ProgressBar,
}

impl<E: TextExtractor> Scanner<E> {
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            progress: ProgressBar::hidden(),
        }
    }

    /// Report the file being processed on `progress`
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Scan `directory` (non-recursively) for `.pdf` entries whose text
    /// contains `keyword`, ignoring case.
    ///
    /// Results follow directory listing order. A file that fails extraction is
    /// reported and skipped; only a missing or unreadable directory fails the
    /// scan.
    pub fn scan(&self, directory: &Path, keyword: &str) -> ScanResult<SearchResults> {
        if !directory.is_dir() {
            return Err(ScanError::DirectoryNotFound(directory.to_path_buf()));
        }

        let mut results = SearchResults::new();

        let entries = WalkDir::new(directory).min_depth(1).max_depth(1);
        for entry in entries {
            let entry = entry.map_err(|source| ScanError::ReadDir {
                path: directory.to_path_buf(),
                source,
            })?;

            let file_name = entry.file_name().to_string_lossy().into_owned();
            if !is_pdf_name(&file_name) {
                trace!(file = %file_name, "skipping non-pdf entry");
                continue;
            }

            self.progress.set_message(file_name.clone());

            let text = match self.extractor.extract(entry.path()) {
                Ok(text) => text,
                Err(e) => {
                    self.report_failure(entry.path(), &e);
                    continue;
                }
            };

            if let Some(snippet) = find_snippet(&text, keyword) {
                debug!(file = %file_name, "keyword found");
                results.push((file_name, snippet));
            }
        }

        debug!(matches = results.len(), "scan finished");
        Ok(results)
    }

    fn report_failure(&self, path: &Path, error: &anyhow::Error) {
        self.progress.suspend(|| {
            println!(
                "{}",
                format!("[!] Error reading {}: {:#}", path.display(), error).red()
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use std::{collections::HashMap, fs};
    use tempfile::tempdir;

    /// Serves canned text keyed by file name; names mapped to `None` fail
    struct StubExtractor(HashMap<&'static str, Option<String>>);

    impl StubExtractor {
        fn new(entries: &[(&'static str, Option<&str>)]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|(name, text)| (*name, text.map(str::to_string)))
                    .collect(),
            )
        }
    }

    impl TextExtractor for StubExtractor {
        fn extract(&self, path: &Path) -> Result<String> {
            let name = path.file_name().unwrap().to_string_lossy();
            match self.0.get(&*name) {
                Some(Some(text)) => Ok(text.clone()),
                _ => Err(anyhow!("cannot decode {}", name)),
            }
        }
    }

    fn create_files(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), b"%PDF-stub").unwrap();
        }
    }

    #[test]
    fn test_scan_reference_scenario() {
        let dir = tempdir().unwrap();
        create_files(dir.path(), &["a.pdf", "b.pdf", "c.txt"]);
        let extractor = StubExtractor::new(&[
            ("a.pdf", Some("Hello World")),
            ("b.pdf", Some("nothing relevant")),
            ("c.txt", Some("world world world")),
        ]);

        let results = Scanner::new(extractor).scan(dir.path(), "world").unwrap();

        assert_eq!(results, vec![("a.pdf".to_string(), "World".to_string())]);
    }

    #[test]
    fn test_scan_without_pdfs_is_empty() {
        let dir = tempdir().unwrap();
        create_files(dir.path(), &["notes.txt", "report.PDF", "archive.pdf.zip"]);
        let extractor = StubExtractor::new(&[
            ("notes.txt", Some("keyword")),
            ("report.PDF", Some("keyword")),
            ("archive.pdf.zip", Some("keyword")),
        ]);

        let results = Scanner::new(extractor).scan(dir.path(), "keyword").unwrap();

        assert!(results.is_empty());
    }

    #[test]
    fn test_scan_skips_failed_files_and_continues() {
        let dir = tempdir().unwrap();
        create_files(dir.path(), &["broken.pdf", "good.pdf", "also-broken.pdf"]);
        let extractor = StubExtractor::new(&[
            ("broken.pdf", None),
            ("good.pdf", Some("The Keyword is here")),
            ("also-broken.pdf", None),
        ]);

        // an empty keyword would match any successfully extracted text
        let results = Scanner::new(extractor).scan(dir.path(), "").unwrap();

        assert_eq!(
            results,
            vec![("good.pdf".to_string(), "The Keyword is here".to_string())]
        );
    }

    #[test]
    fn test_scan_reports_each_file_once() {
        let dir = tempdir().unwrap();
        create_files(dir.path(), &["one.pdf", "two.pdf"]);
        let extractor = StubExtractor::new(&[
            ("one.pdf", Some("rust RUST Rust")),
            ("two.pdf", Some("no match here")),
        ]);

        let results = Scanner::new(extractor).scan(dir.path(), "Rust").unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, "one.pdf");
        assert_eq!(results[0].1, "rust RUST Rust");
    }

    #[test]
    fn test_scan_does_not_recurse() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        create_files(&nested, &["deep.pdf"]);
        let extractor = StubExtractor::new(&[("deep.pdf", Some("keyword"))]);

        let results = Scanner::new(extractor).scan(dir.path(), "keyword").unwrap();

        assert!(results.is_empty());
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");

        let err = Scanner::new(StubExtractor::new(&[]))
            .scan(&missing, "keyword")
            .unwrap_err();

        assert!(matches!(err, ScanError::DirectoryNotFound(path) if path == missing));
    }

    #[test]
    fn test_scan_snippet_is_capped() {
        let dir = tempdir().unwrap();
        create_files(dir.path(), &["long.pdf"]);
        let long_text = format!("intro needle {}", "y".repeat(800));
        let extractor = StubExtractor::new(&[("long.pdf", Some(long_text.as_str()))]);

        let results = Scanner::new(extractor).scan(dir.path(), "NEEDLE").unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1.chars().count(), crate::types::SNIPPET_LEN);
        assert!(results[0].1.starts_with("needle "));
    }
}
