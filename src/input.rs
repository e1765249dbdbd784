//! File collaborators: finding pages, loading them whole, and placing the stubs.

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Expand `paths` into the documentation pages to convert.
///
/// Files are taken as given; directories are walked recursively for files whose extension
/// is one of `extensions`. Results are sorted and deduplicated.
///
/// # Errors
///
/// Returns an error if a path does not exist or a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            collect_dir(&path, extensions, &mut documents)?;
        } else if path.is_file() {
            documents.push(path);
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            ));
        }
    }
    documents.sort();
    documents.dedup();
    Ok(documents)
}

fn collect_dir(dir: &Path, extensions: &[String], documents: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_dir(&path, extensions, documents)?;
        } else if has_extension(&path, extensions) {
            documents.push(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(OsStr::to_str) else {
        return false;
    };
    extensions
        .iter()
        .any(|wanted| wanted.eq_ignore_ascii_case(ext))
}

/// Load a whole page into memory.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::EmptyDocument`] if it has
/// no content.
pub fn read_document(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)?;
    if content.is_empty() {
        return Err(Error::EmptyDocument {
            path: path.to_path_buf(),
        });
    }
    Ok(content)
}

#[must_use]
/// Where the stub for `page` goes: `out_dir` (or the page's own directory) joined with the
/// page's file stem and `extension`.
pub fn stub_path(page: &Path, out_dir: Option<&Path>, extension: &str) -> PathBuf {
    let stem = page.file_stem().unwrap_or_else(|| OsStr::new("Stub"));
    let dir = out_dir
        .or_else(|| page.parent())
        .unwrap_or_else(|| Path::new(""));
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(extension);
    dir.join(name)
}

/// Write a finished stub, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created.
pub fn write_stub(path: &Path, stub: &str) -> io::Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, stub)
}

/// Finish an output file created before generation ran.
///
/// A generated stub is written to `file`. A failed generation removes `target` instead, so
/// no partial stub is left behind, and the generation error is returned.
///
/// # Errors
///
/// Returns the generation error, or an I/O error if the stub cannot be written.
pub fn write_or_discard(target: &Path, mut file: File, stub: Result<String>) -> Result<()> {
    match stub {
        Ok(stub) => {
            file.write_all(stub.as_bytes())?;
            file.flush()?;
            Ok(())
        }
        Err(e) => {
            drop(file);
            if let Err(cleanup) = fs::remove_file(target) {
                tracing::warn!(path = %target.display(), "could not remove output file: {cleanup}");
            }
            Err(e)
        }
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
