use anyhow::Result;
use clap::{error::ErrorKind, CommandFactory, Parser};
use colored::Colorize;
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    error::ScanError,
    parsers::PdfExtractor,
    scanner::Scanner,
    types::{Config, SearchResults},
    utils::strip_quotes,
};

const USAGE_EXAMPLE: &str = "Example pdfsearch -d <directory-path> -k <keyword/search term>";

#[derive(Parser, Debug)]
#[command(name = "pdfsearch")]
#[command(about = "A simple yet effective tool that searches .pdf files for a keyword & returns the filename")]
#[command(version)]
pub struct Cli {
    /// Directory Path. Example: "C:\Documents\Example\PDF"
    #[arg(short = 'd', long = "directory-path", value_name = "Directory Path")]
    directory_path: String,

    /// Keyword. Example: "Search Term"
    #[arg(short = 'k', long = "keyword", value_name = "Keyword")]
    keyword: String,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            directory: PathBuf::from(strip_quotes(&cli.directory_path)),
            keyword: strip_quotes(&cli.keyword),
        }
    }
}

pub struct CliApp {
    config: Config,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run() -> Result<ExitCode> {
        Self::show_startup_logo();
        Self::init_logging();

        let cli = match Cli::try_parse() {
            Ok(cli) => cli,
            Err(e) => return Self::usage_error(e),
        };

        Self::new(cli.into()).search()
    }

    fn search(&self) -> Result<ExitCode> {
        let Config { directory, keyword } = &self.config;
        info!(directory = %directory.display(), keyword = %keyword, "starting scan");

        if !directory.is_dir() {
            println!("{}", "[!] The specified directory does not exist.".red());
            return Ok(ExitCode::FAILURE);
        }

        let spinner = Self::start_spinner()?;
        let scanner = Scanner::new(PdfExtractor::new()).with_progress(spinner.clone());
        let outcome = scanner.scan(directory, keyword);
        spinner.finish_and_clear();

        match outcome {
            Ok(matches) => {
                Self::display_results(&matches, keyword);
                Ok(ExitCode::SUCCESS)
            }
            Err(ScanError::DirectoryNotFound(_)) => {
                println!("{}", "[!] The specified directory does not exist.".red());
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn usage_error(error: clap::Error) -> Result<ExitCode> {
        match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                error.print()?;
                return Ok(ExitCode::SUCCESS);
            }
            ErrorKind::MissingRequiredArgument => {
                println!("{}\n", format!("[-] Missing argument {}", USAGE_EXAMPLE).red());
            }
            _ => {
                println!("{}\n", format!("[-] Argument Error. {}", USAGE_EXAMPLE).red());
            }
        }

        Cli::command().print_help()?;
        Ok(ExitCode::FAILURE)
    }

    fn init_logging() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    fn start_spinner() -> Result<ProgressBar> {
        if !Term::stderr().is_term() {
            return Ok(ProgressBar::hidden());
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["|", "/", "-", "\\", "+"])
                .template("[{spinner}] {msg}")?,
        );
        spinner.enable_steady_tick(Duration::from_millis(250));
        Ok(spinner)
    }

    fn display_results(matches: &SearchResults, keyword: &str) {
        if matches.is_empty() {
            println!("\n{}", "[-] No matches found.".yellow());
            return;
        }

        println!(
            "\n\n{}\n",
            format!("[+] Found {} matches for \"{}\":", matches.len(), keyword)
                .green()
                .bold()
        );
        for (file_name, snippet) in matches {
            println!(
                "\n{} {}\n{}\n\n {}",
                "[+] File:".green(),
                file_name.cyan(),
                "[*] Snippet:".blue(),
                snippet
            );
        }
    }

    fn show_startup_logo() {
        let logo = r#"     ____  ____  ___________                      __
    / __ \/ __ \/ ____/ ___/___  ____ ___________/ /_
   / /_/ / / / / /_   \__ \/ _ \/ __ `/ ___/ ___/ __ \
  / ____/ /_/ / __/  ___/ /  __/ /_/ / /  / /__/ / / /
 /_/   /_____/_/    /____/\___/\__,_/_/   \___/_/ /_/
"#;
        println!("{}", logo);
    }
}
