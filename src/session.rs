//! The interactive prompt loop behind the `configvars` binary.
//!
//! Generic over the input and output streams so it can be driven from memory.

use std::io::{BufRead, Write};
use tracing::warn;

use crate::error::{ConfigvarsError, Result};
use crate::variables::VariableSet;

pub const PROMPT: &str = ">>> ";
pub const USAGE: &str =
    "Enter the variables you want to store. An empty string will save the variables and exit.";

fn io_error(source: std::io::Error) -> ConfigvarsError {
    ConfigvarsError::Io {
        path: "<terminal>".into(),
        source,
    }
}

/// Reads one line without its line ending. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line).map_err(io_error)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Asks for the storage name.
pub fn prompt_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "storage name: ").map_err(io_error)?;
    output.flush().map_err(io_error)?;
    let name = read_line(input)?.unwrap_or_default();
    if name.is_empty() {
        return Err(ConfigvarsError::InvalidName(name));
    }
    Ok(name)
}

/// Collects assignment lines until an empty line or the end of input.
///
/// A line that fails to parse is reported on `output` and skipped.
pub fn collect<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<VariableSet> {
    let mut vars = VariableSet::new();
    loop {
        write!(output, "{}", PROMPT).map_err(io_error)?;
        output.flush().map_err(io_error)?;
        let line = match read_line(input)? {
            Some(line) if !line.is_empty() => line,
            _ => break,
        };
        match vars.assign(&line) {
            Ok((name, value)) => {
                writeln!(output, "key: {} (str), value: {} ({})", name, value, value.type_name())
                    .map_err(io_error)?;
            }
            Err(e) if e.is_parse_error() => {
                warn!(error = %e, "rejected line");
                writeln!(output, "{}", e).map_err(io_error)?;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(vars)
}
