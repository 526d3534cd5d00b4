use clap::Parser;
use log::{debug, error, info, LevelFilter};

use std::error::Error;
use std::process::ExitCode;

mod args;
mod pages;

use crate::args::Args;

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!("args: {:?}", args);

    match pages::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_informational() => {
            info!("{}", e);
            println!("ℹ️ {}", e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:?}", e);
            eprintln!("❌ {}", e);
            let mut last = e.to_string();
            let mut source = e.source();
            while let Some(cause) = source {
                // Wrapped library errors display as their cause.
                let msg = cause.to_string();
                if msg != last {
                    eprintln!("   caused by: {}", msg);
                }
                last = msg;
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
