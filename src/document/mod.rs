//! Markdown document structure.
//!
//! This module handles:
//! - Classifying blank-line-delimited blocks (heading or paragraph)
//! - Segmenting text into headline, standfirst and body
//! - Loading the initial document source
//! - Front-page furniture (edition number, dateline, placeholders)

mod classify;
pub mod masthead;
mod segment;

use std::io::Read;
use std::path::{Path, PathBuf};

pub use classify::{Block, classify_block};
pub use segment::{BLOCK_SEPARATOR, DEFAULT_HEADLINE, SegmentedDocument, segment, split_blocks};

/// Failure to load the initial document.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8 text", .0.display())]
    NotUtf8(PathBuf),
}

/// Where the editor text comes from at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The built-in sample article.
    Sample,
    /// Standard input (`-` on the command line).
    Stdin,
    /// A markdown file.
    File(PathBuf),
}

impl Source {
    /// Interpret an optional command-line path.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            None => Self::Sample,
            Some(p) if p == Path::new("-") => Self::Stdin,
            Some(p) => Self::File(p.to_path_buf()),
        }
    }

    /// Short label for the status bar.
    pub fn label(&self) -> String {
        match self {
            Self::Sample => "sample".to_string(),
            Self::Stdin => "stdin".to_string(),
            Self::File(path) => path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string()),
        }
    }

    /// Read the text. Nothing is ever written back.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the file is missing, unreadable, or not UTF-8.
    pub fn load(&self) -> Result<String, SourceError> {
        match self {
            Self::Sample => Ok(masthead::DEFAULT_MARKDOWN.to_string()),
            Self::Stdin => {
                let mut bytes = Vec::new();
                let stdin_path = PathBuf::from("<stdin>");
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .map_err(|source| SourceError::Io {
                        path: stdin_path.clone(),
                        source,
                    })?;
                String::from_utf8(bytes).map_err(|_| SourceError::NotUtf8(stdin_path))
            }
            Self::File(path) => load_file(path),
        }
    }
}

fn load_file(path: &Path) -> Result<String, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| SourceError::NotUtf8(path.to_path_buf()))
}
