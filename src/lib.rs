pub mod cmd;
pub mod error;
pub mod parsers;
pub mod scanner;
pub mod types;
pub mod utils;

pub use error::{ScanError, ScanResult};
pub use parsers::{PdfExtractor, TextExtractor};
pub use scanner::Scanner;
pub use types::{Config, SearchResult, SearchResults};
pub use utils::{find_case_insensitive, find_snippet, strip_quotes};
