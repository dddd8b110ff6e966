mod app;
mod catalog;
mod cli;
mod constants;
mod domain;
mod search;
mod storage;

fn main() {
    // Any arguments mean CLI usage; a bare invocation opens the TUI.
    if std::env::args().len() > 1 {
        cli::run_cli();
        return;
    }

    if let Err(e) = app::run_ui() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
