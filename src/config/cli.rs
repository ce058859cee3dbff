use crate::config::FindArgs;
use crate::utils::error::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Where `find` takes its inputs from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Args(Vec<String>),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn from_args(args: &FindArgs) -> Self {
        if !args.texts.is_empty() {
            InputSource::Args(args.texts.clone())
        } else if let Some(path) = &args.file {
            InputSource::File(PathBuf::from(path))
        } else {
            InputSource::Stdin
        }
    }

    pub fn read_inputs(&self) -> Result<Vec<String>> {
        match self {
            InputSource::Args(texts) => Ok(texts.clone()),
            InputSource::File(path) => {
                tracing::debug!("Reading inputs from {}", path.display());
                read_lines(BufReader::new(File::open(path)?))
            }
            InputSource::Stdin => {
                tracing::debug!("Reading inputs from stdin");
                read_lines(io::stdin().lock())
            }
        }
    }
}

/// One input per line; a trailing `\n` or `\r\n` is not part of the input,
/// any other `\r` is.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        inputs.push(line?);
    }
    Ok(inputs)
}
