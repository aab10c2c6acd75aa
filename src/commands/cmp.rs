use crate::commands::Natcmp;
use anyhow::Result;
use clap::Args;
use natcmp::Mode;
use std::ffi::OsString;

#[derive(Debug, Args)]
pub struct Cmp {
    /// The first string.
    a: OsString,
    /// The second string.
    b: OsString,
}

impl Natcmp for Cmp {
    fn run(&self, mode: Mode) -> Result<()> {
        let ordering = mode.compare(self.a.as_encoded_bytes(), self.b.as_encoded_bytes());
        println!("{}", ordering as i8);
        Ok(())
    }
}
