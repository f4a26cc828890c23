//! Console output utilities: colored status lines and the URL prompt.

use std::io::{self, BufRead, Write};

use console::style;

use ytget_core::downloader::FetchOutcome;

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Report one fetch outcome: green on success, red with the exit code
/// otherwise. Reporting is all that happens; the caller decides whether
/// the process exit code reflects it.
pub fn report_outcome(downloader: &str, outcome: FetchOutcome) {
    match outcome {
        FetchOutcome::Completed => print_success("Download completed successfully."),
        FetchOutcome::Failed(code) => {
            print_error(&format!("{downloader} exited with code {code}."));
        }
        FetchOutcome::Interrupted => {
            print_error(&format!("{downloader} was terminated by a signal."));
        }
    }
}

/// Prompt on stdout and read one line from stdin.
/// EOF yields an empty string, which callers treat like blank input.
pub fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
