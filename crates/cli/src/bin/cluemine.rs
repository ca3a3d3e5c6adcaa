//! cluemine CLI binary entrypoint.

fn main() {
    if let Err(err) = cluemine_cli::app::run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
