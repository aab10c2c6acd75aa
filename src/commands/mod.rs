mod check;
mod cmp;
mod lt;
mod sort;

use anyhow::Result;
use clap::Subcommand;
use natcmp::Mode;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare two strings, printing -1, 0, or 1.
    Cmp(cmp::Cmp),
    /// Check whether the first string sorts before the second.
    Lt(lt::Lt),
    /// Sort lines from files or stdin in natural order.
    Sort(sort::Sort),
    /// Check that lines from files or stdin are already in natural order.
    Check(check::Check),
}

/// The common interface for natcmp commands.
///
/// Implemented for each command's options to confer its specific functionality.
pub trait Natcmp {
    fn run(&self, mode: Mode) -> Result<()>;
}

impl Command {
    pub fn run(self, mode: Mode) -> Result<()> {
        match self {
            Command::Cmp(cmd) => cmd.run(mode),
            Command::Lt(cmd) => cmd.run(mode),
            Command::Sort(cmd) => cmd.run(mode),
            Command::Check(cmd) => cmd.run(mode),
        }
    }
}
