//! Reading and writing the JSON documents a migration works on.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::action::ChangeList;
use crate::error::InvalidInput;
use crate::model::Dataset;

/// Where a migrated dataset goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Sentinel path meaning "write to standard output"
    pub const STDOUT_SENTINEL: &'static str = "-";

    pub fn parse(path: &str) -> Self {
        if path == Self::STDOUT_SENTINEL {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(path))
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str(Self::STDOUT_SENTINEL),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn load_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let file = File::open(path).with_context(|| {
        InvalidInput(format!("Failed to read {} from {}", what, path.display()))
    })?;
    serde_json::from_reader(BufReader::new(file)).with_context(|| {
        InvalidInput(format!("Failed to parse {} from {}", what, path.display()))
    })
}

/// Load a `{playlists, songs, users}` document
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    load_json(path, "dataset")
}

/// Load a `{actions: [...]}` change-list document
pub fn load_changes(path: &Path) -> Result<ChangeList> {
    load_json(path, "change-list")
}

/// Serialize a dataset with sorted keys and the given indentation
/// (0 = compact), followed by a newline
pub fn dataset_to_writer<W: Write>(dataset: &Dataset, writer: W, indent: usize) -> Result<()> {
    // Going through `Value` sorts object keys, including passthrough fields.
    let value = serde_json::to_value(dataset)?;
    let mut writer = writer;

    if indent == 0 {
        serde_json::to_writer(&mut writer, &value)?;
    } else {
        let indent = " ".repeat(indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = Serializer::with_formatter(&mut writer, formatter);
        value.serialize(&mut serializer)?;
    }

    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a dataset to a file or standard output.
///
/// File output goes through a temporary file in the same directory that
/// replaces the target only once fully written.
pub fn write_dataset(dataset: &Dataset, target: &OutputTarget, indent: usize) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            dataset_to_writer(dataset, stdout.lock(), indent)
                .context("Failed to write dataset to stdout")
        },
        OutputTarget::File(path) => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let mut temp = NamedTempFile::new_in(dir).with_context(|| {
                format!("Failed to create temporary file in {}", dir.display())
            })?;
            dataset_to_writer(dataset, temp.as_file_mut(), indent)
                .with_context(|| format!("Failed to write dataset to {}", path.display()))?;
            temp.persist(path)
                .with_context(|| format!("Failed to write dataset to {}", path.display()))?;
            Ok(())
        },
    }
}
