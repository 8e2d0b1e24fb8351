//! CLI entry point for the convolution geometry animation

use clap::Parser;
use convviz::io::cli::{Cli, Runner};
use convviz::io::logging::init_logging;

fn main() -> convviz::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let runner = Runner::new(cli);
    runner.run(&mut std::io::stdout().lock())
}
