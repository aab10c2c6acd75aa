use crate::commands::Natcmp;
use anyhow::Result;
use clap::Args;
use natcmp::Mode;
use std::ffi::OsString;
use std::process;

#[derive(Debug, Args)]
pub struct Lt {
    /// The first string.
    a: OsString,
    /// The second string.
    b: OsString,
    /// Print nothing; exit with 0 when the first string sorts before the second, 1 otherwise.
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl Natcmp for Lt {
    fn run(&self, mode: Mode) -> Result<()> {
        let less = mode.lt(self.a.as_encoded_bytes(), self.b.as_encoded_bytes());
        match self.quiet {
            false => println!("{less}"),
            true => process::exit(i32::from(!less)),
        }
        Ok(())
    }
}
