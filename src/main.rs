use clap::Parser;
use duedate::cli::{self, output, Cli};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = cli::execute(&cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
