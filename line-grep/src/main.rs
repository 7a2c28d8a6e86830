//! Binary crate for the `line-grep` tool: print the lines of a file containing a substring.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run(&mut std::io::stdout().lock())
}
