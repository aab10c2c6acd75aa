use crate::commands::Natcmp;
use crate::utils;
use anyhow::Result;
use clap::Args;
use human_repr::{HumanCount, HumanDuration};
use natcmp::Mode;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct Sort {
    /// Files to read lines from; use `-` or nothing for stdin.
    files: Vec<PathBuf>,
    /// Reverse the order.
    #[arg(short = 'r', long)]
    rev: bool,
    /// Output only the first of each group of naturally equal lines.
    #[arg(short = 'd', long)]
    dedup: bool,
    /// Sort with all available cores.
    #[arg(short = 'p', long)]
    parallel: bool,
    /// Display a summary receipt on stderr.
    #[arg(short = 's', long)]
    stats: bool,
}

impl Natcmp for Sort {
    fn run(&self, mode: Mode) -> Result<()> {
        let start = Instant::now();
        let mut lines = utils::read_lines(&self.files)?;
        let total = lines.len();

        // step: sort the lines, stable so equal lines keep their input order.
        let compare = |x: &Vec<u8>, y: &Vec<u8>| mode.compare(x, y);
        let compare: &(dyn Fn(&Vec<u8>, &Vec<u8>) -> Ordering + Sync) = match self.rev {
            false => &compare,
            true => &|x, y| compare(x, y).reverse(),
        };
        match self.parallel {
            false => lines.sort_by(compare),
            true => lines.par_sort_by(compare),
        }
        if self.dedup {
            lines.dedup_by(|x, y| mode.compare(x, y).is_eq());
        }

        // step: display the results.
        utils::write_lines(lines.iter().map(Vec::as_slice))?;

        // step: display summary receipt.
        if self.stats {
            let bytes = lines.iter().map(|l| l.len() as u64).sum::<u64>();
            eprintln!("sorted lines: {total} ({} in output)", lines.len());
            eprintln!("  total: {}", bytes.human_count_bytes());
            eprintln!("  elapsed: {}", start.elapsed().as_secs_f64().human_duration());
        }
        Ok(())
    }
}
