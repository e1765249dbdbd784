//! Interactive mode: ask for the page to read and the stub to write, retrying until both work.
//!
//! The loops are generic over the terminal streams so they can be driven from tests.

use crate::error::Error;
use crate::input::read_document;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Prompt shown before reading the source page path.
pub const SOURCE_PROMPT: &str = "Path of the source file:";
/// Prompt shown before reading the output stub path.
pub const OUTPUT_PROMPT: &str = "Path and name of the output file:";

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<PathBuf> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a path was given",
        ));
    }
    Ok(PathBuf::from(line.trim_end_matches(['\r', '\n'])))
}

/// Ask for a page until one can be read and is not empty.
///
/// # Errors
///
/// Fails only if the prompt streams fail or the input ends.
pub fn read_source<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<(PathBuf, String)> {
    loop {
        let path = ask(input, output, SOURCE_PROMPT)?;
        let loaded = read_document(&path);
        writeln!(output, "Source:{}", path.display())?;
        match loaded {
            Ok(document) => return Ok((path, document)),
            Err(Error::EmptyDocument { .. }) => write!(output, "Input file empty: ")?,
            Err(Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                write!(output, "File not found: ")?;
            }
            Err(err) => write!(output, "Cannot read file ({err}): ")?,
        }
    }
}

/// Ask for an output path until a file can be created there.
///
/// # Errors
///
/// Fails only if the prompt streams fail or the input ends.
pub fn create_output<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<(PathBuf, File)> {
    loop {
        let path = ask(input, output, OUTPUT_PROMPT)?;
        let created = File::create(&path);
        writeln!(output, "Output:{}", path.display())?;
        match created {
            Ok(file) => return Ok((path, file)),
            Err(err) => write!(output, "Failed to create output stream ({err}): ")?,
        }
    }
}

#[cfg(test)]
#[path = "tests/prompt.rs"]
mod tests;
