// persistence.rs - Loading the document at startup and flushing it on quit

use log::{info, warn};
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::buffer::LineBuffer;
use crate::config::EditorConfig;
use crate::error::EditorError;

/// A buffer together with the file it was loaded from and will be saved to.
#[derive(Debug)]
pub struct Document {
    pub path: PathBuf,
    pub buffer: LineBuffer,
}

/// Open the document named on the command line.
///
/// With no path the configured default file is (re)created holding the placeholder text
/// and then loaded. A path that does not exist yet is created empty, giving a single empty
/// row. Any other failure to read or create is fatal.
pub fn open(path: Option<&Path>, config: &EditorConfig) -> Result<Document, EditorError> {
    match path {
        None => {
            let path = config.default_file.clone();
            create_with(&path, &config.placeholder)?;
            info!("created {}", path.display());
            let lines = read_lines(&path)?.ok_or_else(|| EditorError::Read {
                path: path.clone(),
                source: io::Error::from(io::ErrorKind::NotFound),
            })?;
            Ok(Document {
                buffer: LineBuffer::from_lines(lines),
                path,
            })
        }
        Some(path) => {
            let buffer = match read_lines(path)? {
                Some(lines) => {
                    info!("loaded {} rows from {}", lines.len(), path.display());
                    LineBuffer::from_lines(lines)
                }
                None => {
                    create_with(path, "")?;
                    info!("created empty {}", path.display());
                    LineBuffer::new()
                }
            };
            Ok(Document {
                path: path.to_path_buf(),
                buffer,
            })
        }
    }
}

/// Read `path` as rows. `Ok(None)` when the file does not exist.
pub fn read_lines(path: &Path) -> Result<Option<Vec<String>>, EditorError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(EditorError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        warn!("{} is not valid UTF-8, invalid bytes replaced", path.display());
    }
    Ok(Some(split_rows(&text)))
}

/// Split like a line scanner: LF terminates a row, a CR before it is dropped, and a final
/// terminator does not open an extra row.
pub fn split_rows(text: &str) -> Vec<String> {
    text.lines().map(String::from).collect()
}

/// Overwrite `path` with every row of `buffer`, each followed by a newline.
pub fn flush(path: &Path, buffer: &LineBuffer) -> Result<(), EditorError> {
    let file = File::create(path).map_err(|source| EditorError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let write_err = |source| EditorError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(file);
    for row in buffer.rows() {
        writeln!(writer, "{}", row).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;
    info!("saved {} rows to {}", buffer.row_count(), path.display());
    Ok(())
}

fn create_with(path: &Path, contents: &str) -> Result<(), EditorError> {
    let mut file = File::create(path).map_err(|source| EditorError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(contents.as_bytes())
        .map_err(|source| EditorError::Write {
            path: path.to_path_buf(),
            source,
        })
}
