//! Common password dictionary
//!
//! Loads the list of known-weak passwords and answers membership queries.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the dictionary location.
pub const DICTIONARY_PATH_ENV: &str = "PWD_DICTIONARY_PATH";

/// Dictionary location used when nothing else is configured.
pub const DEFAULT_DICTIONARY_PATH: &str = "common_passwords.txt";

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Failed to read dictionary file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Set of known-weak passwords, stored trimmed and lowercased.
///
/// A blank line in the source list becomes an `""` entry, so the empty
/// password matches it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonPasswords {
    entries: HashSet<String>,
}

impl CommonPasswords {
    /// A dictionary that never matches.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CommonPasswords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|l| l.as_ref().trim().to_lowercase())
            .collect();
        Self { entries }
    }
}

/// How a dictionary load ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// File read; holds the number of distinct entries.
    Loaded(usize),
    /// File absent; the dictionary is empty.
    Missing(PathBuf),
}

/// A loaded dictionary together with how it was obtained.
#[derive(Debug, Clone)]
pub struct DictionaryLoad {
    pub passwords: CommonPasswords,
    pub status: LoadStatus,
}

impl DictionaryLoad {
    /// User-facing warning when the dictionary check will be skipped.
    pub fn warning(&self) -> Option<String> {
        match &self.status {
            LoadStatus::Missing(path) => Some(format!(
                "Warning: '{}' not found. Dictionary check will be skipped.",
                path.display()
            )),
            LoadStatus::Loaded(_) => None,
        }
    }
}

/// Returns the dictionary file path.
///
/// Priority:
/// 1. Environment variable `PWD_DICTIONARY_PATH`
/// 2. Default path `common_passwords.txt`
pub fn dictionary_path() -> PathBuf {
    std::env::var(DICTIONARY_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DICTIONARY_PATH))
}

/// Loads a newline-delimited password list.
///
/// Each line is trimmed and lowercased; blank lines become `""`. A missing
/// file is not an error: it yields an empty dictionary with
/// [`LoadStatus::Missing`].
///
/// # Errors
///
/// Returns [`DictionaryError::Read`] if the file exists but cannot be read
/// (permissions, invalid UTF-8, ...).
pub fn load_common_passwords<P: AsRef<Path>>(path: P) -> Result<DictionaryLoad, DictionaryError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Dictionary file not found: {}", path.display());
        return Ok(DictionaryLoad {
            passwords: CommonPasswords::empty(),
            status: LoadStatus::Missing(path.to_path_buf()),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| {
        #[cfg(feature = "tracing")]
        tracing::error!("Dictionary load FAILED: {} ({})", path.display(), source);
        DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let passwords: CommonPasswords = content.lines().collect();
    let count = passwords.len();

    #[cfg(feature = "tracing")]
    tracing::info!("Dictionary loaded: {} passwords from {:?}", count, path);

    Ok(DictionaryLoad {
        passwords,
        status: LoadStatus::Loaded(count),
    })
}
