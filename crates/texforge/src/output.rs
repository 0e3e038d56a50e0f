use anyhow::Result;
use serde_json::Value;
use std::fmt::Display;
use std::io::{self, Write};

/// Pretty-print a JSON value on its own line
pub fn print_json(value: &Value) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn print_text(line: impl Display) -> io::Result<()> {
    writeln!(io::stdout().lock(), "{line}")
}

/// Print rendered output exactly, without a trailing newline
pub fn print_raw(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(s.as_bytes())?;
    out.flush()
}
