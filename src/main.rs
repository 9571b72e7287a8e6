// src/main.rs
use clap::Parser;
use ls2::app;
use ls2::args::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => return app::handle_parse_error(&e),
    };

    match app::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ls2: {e}");
            ExitCode::FAILURE
        }
    }
}
