//! Log input sources

use crate::error::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Where a log is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// A missing path or `-` means standard input
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            None => InputSource::Stdin,
            Some(p) if p == Path::new("-") => InputSource::Stdin,
            Some(p) => InputSource::File(p.to_path_buf()),
        }
    }

    /// Name used when reporting errors
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            InputSource::File(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        }
    }
}
