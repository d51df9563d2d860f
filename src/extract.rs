use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::tokenize::{tokenize, unique_words};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordList {
    /// Distinct lowercase words in order of first appearance.
    pub words: Vec<String>,
    /// Every token seen, repeats included.
    pub total_tokens: usize,
}

impl WordList {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

pub fn extract(source: &Path) -> Result<WordList, ExtractError> {
    let bytes = fs::read(source).map_err(|source_err| ExtractError::Io {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    let text = String::from_utf8(bytes).map_err(|source_err| ExtractError::Decode {
        path: source.to_path_buf(),
        source: source_err,
    })?;

    let list = extract_str(&text);
    tracing::debug!(
        "{}: {} tokens, {} unique",
        source.display(),
        list.total_tokens,
        list.len()
    );
    Ok(list)
}

pub fn extract_str(text: &str) -> WordList {
    let tokens = tokenize(text);
    WordList {
        total_tokens: tokens.len(),
        words: unique_words(&tokens),
    }
}
