use pdfsearch::cmd::CliApp;
use std::process::ExitCode;

fn main() -> ExitCode {
    match CliApp::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
