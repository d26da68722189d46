// src/bin/cli.rs
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use volby_scrape::{cli, log};

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    log::init();

    // First Ctrl-C stops after the current page; a second one exits at once.
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    ctrlc::set_handler(move || {
        if flag.swap(true, Ordering::SeqCst) {
            std::process::exit(130);
        }
    })?;

    Ok(ExitCode::from(cli::run(std::env::args().skip(1), &stop)))
}
