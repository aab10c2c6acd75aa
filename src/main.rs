mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::Command;
use natcmp::Mode;
use std::io::{IsTerminal, stdout};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: Command,
    /// Compare the text between numbers by decoded UTF-8 characters instead of single bytes.
    #[arg(short = 'u', long, global = true)]
    utf8: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

impl Args {
    fn mode(&self) -> Mode {
        match self.utf8 {
            false => Mode::Ascii,
            true => Mode::Utf8,
        }
    }
}

fn main() -> Result<()> {
    utils::install_ctrl_c_handler();

    run(Args::parse())
}

fn run(args: Args) -> Result<()> {
    if args.no_color || !stdout().is_terminal() {
        yansi::disable();
    }
    let mode = args.mode();
    args.cmd.run(mode)
}
