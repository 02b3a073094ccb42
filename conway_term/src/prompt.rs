// prompt.rs - Ask which catalog entry to run

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use conway::patterns::{self, catalog_len, catalog_names};
use conway::Seed;
use log::warn;

/// Lists the catalog and reads indices until one is valid.
/// Rejected input leaves nothing changed and asks again.
pub fn choose_seed<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    density: f64,
) -> Result<Seed> {
    writeln!(output, "Available patterns:")?;
    for (index, name) in catalog_names().enumerate() {
        writeln!(output, "  {index:>2}: {name}")?;
    }

    loop {
        write!(output, "Select a pattern [0-{}]: ", catalog_len() - 1)?;
        output.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("failed to read pattern selection")?;
        if read == 0 {
            bail!("no pattern selected before end of input");
        }

        match parse_selection(line.trim(), density) {
            Ok(seed) => return Ok(seed),
            Err(err) => {
                warn!("rejected pattern selection {:?}: {err}", line.trim());
                writeln!(output, "{err}, try again.")?;
            }
        }
    }
}

fn parse_selection(text: &str, density: f64) -> Result<Seed> {
    let index: usize = text
        .parse()
        .with_context(|| format!("'{text}' is not a pattern number"))?;
    Ok(patterns::select(index, density)?)
}
