use super::user_aborted;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

/// Read all lines from the given files in order, or from stdin when there are none.
///
/// A `-` path also stands for stdin. Lines are raw bytes without their `\n`, since natural
/// ordering does not need them to be valid UTF-8.
pub fn read_lines(files: &[PathBuf]) -> Result<Vec<Vec<u8>>> {
    let stdin = [PathBuf::from("-")];
    let files = match files.is_empty() {
        true => &stdin[..],
        false => files,
    };

    let mut lines = Vec::new();
    for path in files {
        let reader: Box<dyn BufRead> = match path.as_os_str() == "-" {
            true => Box::new(io::stdin().lock()),
            false => {
                let file = File::open(path).with_context(|| format!("open {path:?}"))?;
                Box::new(BufReader::new(file))
            }
        };
        collect_lines(reader, &mut lines).with_context(|| format!("read {path:?}"))?;
    }
    Ok(lines)
}

fn collect_lines(reader: impl BufRead, lines: &mut Vec<Vec<u8>>) -> Result<()> {
    for line in reader.split(b'\n') {
        user_aborted()?;
        lines.push(line?);
    }
    Ok(())
}

/// Write the lines to stdout, each followed by a `\n`.
pub fn write_lines<'a>(lines: impl IntoIterator<Item = &'a [u8]>) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    for line in lines {
        out.write_all(line)?;
        out.write_all(b"\n")?;
    }
    out.flush().context("write output")
}
