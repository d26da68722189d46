// src/cli.rs
use std::sync::atomic::AtomicBool;

use crate::config::options::RunOptions;
use crate::runner;

pub const USAGE: &str = "\
Usage: volby_scrape <index-url> <output.csv>

  <index-url>   volby.cz page of a region or district, e.g.
                \"https://www.volby.cz/pls/ps2017nss/ps32?xjazyk=CZ&xkraj=1&xnumnuts=1100\"
  <output.csv>  destination file (semicolon-separated, UTF-8 with BOM)";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Help,
}

/// Exactly two positionals, or a lone `-h` / `--help`.
pub fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    match args.as_slice() {
        [flag] if flag == "-h" || flag == "--help" => Ok(Command::Help),
        [url, out] => Ok(Command::Run(RunOptions::new(url.as_str(), out.as_str()))),
        other => Err(format!("expected 2 arguments, got {}", other.len())),
    }
}

/// Parse, run, report. Returns the process exit status.
/// `args` excludes the program name; `stop` is the interrupt flag.
pub fn run<I>(args: I, stop: &AtomicBool) -> u8
where
    I: IntoIterator<Item = String>,
{
    let opts = match parse_args(args) {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            eprintln!("{USAGE}");
            return 0;
        }
        Err(e) => {
            eprintln!("Error: {e}\n\n{USAGE}");
            return 1;
        }
    };

    match runner::run(&opts, stop) {
        Ok(summary) => {
            println!(
                "Wrote {} ({} municipalities, {} parties)",
                summary.file_written.display(),
                summary.municipalities,
                summary.parties
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|a| s!(*a)).collect()
    }

    #[test]
    fn two_positionals_make_a_run() {
        let cmd = parse_args(args(&["https://www.volby.cz/pls/ps2017nss/ps32?xkraj=1", "praha.csv"])).unwrap();
        assert_eq!(
            cmd,
            Command::Run(RunOptions::new("https://www.volby.cz/pls/ps2017nss/ps32?xkraj=1", "praha.csv"))
        );
    }

    #[test]
    fn wrong_counts_are_rejected() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["https://www.volby.cz/"])).is_err());
        assert!(parse_args(args(&["a", "b", "c"])).is_err());
    }

    #[test]
    fn help_flag() {
        assert_eq!(parse_args(args(&["--help"])), Ok(Command::Help));
        assert_eq!(parse_args(args(&["-h"])), Ok(Command::Help));
    }
}
