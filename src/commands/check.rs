use crate::commands::Natcmp;
use crate::utils;
use anyhow::{Result, anyhow};
use clap::Args;
use natcmp::Mode;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use yansi::Paint;

#[derive(Debug, Args)]
pub struct Check {
    /// Files to read lines from; use `-` or nothing for stdin.
    files: Vec<PathBuf>,
    /// Also reject naturally equal adjacent lines.
    #[arg(short = 's', long)]
    strict: bool,
}

impl Natcmp for Check {
    fn run(&self, mode: Mode) -> Result<()> {
        let lines = utils::read_lines(&self.files)?;
        match first_disorder(&lines, mode, self.strict, utils::running_flag())? {
            None => {
                println!("in order: {} lines", lines.len());
                Ok(())
            }
            Some(n) => {
                let (prev, next) = (&lines[n - 1], &lines[n]);
                eprintln!(
                    "{} {}",
                    n.paint(yansi::Color::Blue),
                    String::from_utf8_lossy(prev)
                );
                eprintln!(
                    "{} {}",
                    (n + 1).paint(yansi::Color::Blue),
                    String::from_utf8_lossy(next).red()
                );
                Err(anyhow!("line {} is out of natural order", n + 1))
            }
        }
    }
}

/// The index of the first line that should have come before its predecessor, if any.
///
/// Fails when the running flag is lowered before the scan completes.
fn first_disorder(
    lines: &[Vec<u8>],
    mode: Mode,
    strict: bool,
    running: &AtomicBool,
) -> Result<Option<usize>> {
    for (i, w) in lines.windows(2).enumerate() {
        utils::ensure_running(running)?;
        let ordering = mode.compare(&w[0], &w[1]);
        if ordering.is_gt() || (strict && ordering.is_eq()) {
            return Ok(Some(i + 1));
        }
    }
    Ok(None)
}
