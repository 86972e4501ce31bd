use clap::Parser;

mod app;
mod cli;
mod config;
mod error;
mod tasks;
mod util;

fn main() {
    let cli = crate::cli::Cli::parse();
    crate::util::logging::init(cli.verbose);

    if let Err(e) = crate::app::run(cli) {
        log::error!("{e:#}");
        std::process::exit(crate::app::exit_code(&e));
    }
}
