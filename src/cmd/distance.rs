use crate::calc::{estimate_travel, Coordinates};
use anyhow::{Context, Result};
use std::io::{self, Write};

pub fn run(from: &str, to: &str, json: bool) -> Result<()> {
    let from = Coordinates::parse(from).with_context(|| format!("invalid origin '{from}'"))?;
    let to = Coordinates::parse(to).with_context(|| format!("invalid destination '{to}'"))?;
    let mut out = io::stdout().lock();
    write_distance(&mut out, from, to, json)
}

pub(crate) fn write_distance<W: Write>(
    out: &mut W,
    from: Coordinates,
    to: Coordinates,
    json: bool,
) -> Result<()> {
    let est = estimate_travel(from, to);
    if json {
        serde_json::to_writer_pretty(&mut *out, &est)?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(out, "Distance : {}", est.distance_label)?;
    writeln!(out, "Trajet   : {}", est.duration_label)?;
    Ok(())
}
