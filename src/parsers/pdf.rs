use anyhow::{anyhow, Context, Result};
use std::{any::Any, fs, panic, path::Path, time::Instant};
use tracing::debug;

/// Turns a document on disk into plain text
pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Extracts the concatenated page text of a PDF with `pdf-extract`
#[derive(Clone, Copy, Debug, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        parse_from_path(path)
    }
}

/// Read a PDF from disk and extract its text
pub fn parse_from_path(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read PDF file: {}", path.display()))?;

    parse_from_mem(&bytes)
        .with_context(|| format!("Failed to extract text from PDF: {}", path.display()))
}

/// Extract the text of an in-memory PDF
pub fn parse_from_mem(bytes: &[u8]) -> Result<String> {
    let start = Instant::now();

    // pdf-extract panics on some malformed inputs instead of returning an error
    let text = catch_quietly(|| pdf_extract::extract_text_from_mem(bytes))??;

    debug!(
        bytes = bytes.len(),
        chars = text.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "extracted text from pdf"
    );

    Ok(text)
}

/// Run `f`, turning a panic into an error without the default hook's report
fn catch_quietly<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> T + panic::UnwindSafe,
{
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(f);
    panic::set_hook(previous_hook);

    outcome.map_err(|payload| {
        let message = panic_message(&*payload);
        debug!(%message, "pdf decoder panicked");
        anyhow!("PDF decoder panicked: {}", message)
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
