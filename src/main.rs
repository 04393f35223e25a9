//! WebSketch CLI
//!
//! Thin binary wrapper: sets up logging, then hands the arguments to the
//! router and exits with the code it returns.

use env_logger::Env;
use log::debug;
use std::io;
use websketch_cli::cli;

fn main() {
    // Initialize logger; RUST_LOG overrides the default level
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // Handler panics are reported through the output protocol as INTERNAL,
    // so the default hook must not print to stderr
    std::panic::set_hook(Box::new(|info| debug!("panic: {}", info)));

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = cli::run(&args, &mut stdout.lock(), &mut stderr.lock());

    std::process::exit(code);
}
