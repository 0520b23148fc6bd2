use std::process::ExitCode;

use imagefry::cli::{self, USAGE};

fn main() -> ExitCode {
    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("ERROR: {e}");
            if e.shows_usage() {
                println!("{USAGE}");
            }
            return ExitCode::FAILURE;
        }
    };
    let verbosity = if args.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Error
    };
    pretty_env_logger::formatted_builder()
        .filter_level(verbosity)
        .init();

    match cli::run(&args) {
        Ok(output) => {
            println!("output written to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}
