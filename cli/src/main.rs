mod actions;
mod cli;
mod menu;
mod seed;
mod terminal;

use anyhow::Result;
use cursus_common::config::Config;
use cursus_core::Registry;

use crate::cli::CommandLine;
use crate::terminal::{logging, print};

fn main() -> Result<()> {
    let args = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        no_banner: args.no_banner,
        no_seed: args.no_seed,
        quiet: args.quiet,
    };

    let mut registry = Registry::new();
    if !cfg.no_seed {
        seed::populate(&mut registry);
    }

    print::banner(&cfg);
    menu::run(&mut registry, &cfg)
}
