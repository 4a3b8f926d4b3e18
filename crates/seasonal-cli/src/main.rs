use clap::Parser;
use seasonal_cli::cli_args::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = seasonal_cli::run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
