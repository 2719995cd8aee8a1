use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::action::Action;
use crate::apply::apply_changes;
use crate::collection::Lookup;
use crate::counts::OperationCounts;
use crate::dataset::{load_changes, load_dataset, write_dataset, OutputTarget};
use crate::error::ApplyError;
use crate::model::Dataset;
use crate::output::MigrateResult;

#[derive(Debug, Clone)]
pub struct MigrateOptions {
    /// Apply the changes in memory but write nothing
    pub dry_run: bool,
    /// Indentation of the written dataset (0 = compact)
    pub indent: usize,
}

impl Default for MigrateOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            indent: 4,
        }
    }
}

/// Apply `actions` to a dataset and return the next dataset.
///
/// Only playlists change. Songs and users come back exactly as they went in,
/// duplicates and field order included.
pub fn migrate(
    dataset: Dataset,
    actions: &[Action],
) -> std::result::Result<(Dataset, OperationCounts), ApplyError> {
    let Dataset {
        playlists,
        songs,
        users,
    } = dataset;

    let mut playlists = Lookup::from_records(playlists);
    let song_lookup = Lookup::from_records(songs.clone());
    let user_lookup = Lookup::from_records(users.clone());

    let counts = apply_changes(&mut playlists, &song_lookup, &user_lookup, actions)?;

    let dataset = Dataset {
        playlists: playlists.into_records(),
        songs,
        users,
    };
    Ok((dataset, counts))
}

/// High-level migrate operation - equivalent to `mixtape <input> <changes> <output>`
///
/// Nothing is written unless every action applies.
pub fn migrate_operation(
    input: &Path,
    changes: &Path,
    output: &OutputTarget,
    options: &MigrateOptions,
) -> Result<MigrateResult> {
    let dataset = load_dataset(input)?;
    let actions = load_changes(changes)?
        .decode()
        .with_context(|| format!("Invalid change-list in {}", changes.display()))?;

    info!(
        "Loaded {} playlists, {} songs, {} users and {} actions",
        dataset.playlists.len(),
        dataset.songs.len(),
        dataset.users.len(),
        actions.len()
    );

    let playlists_before = dataset.playlists.len();
    let (dataset, counts) = migrate(dataset, &actions)
        .with_context(|| format!("Failed to apply changes from {}", changes.display()))?;

    if options.dry_run {
        info!("Dry run, skipping write to {}", output);
    } else {
        write_dataset(&dataset, output, options.indent)?;
        info!("Wrote {} playlists to {}", dataset.playlists.len(), output);
    }

    Ok(MigrateResult {
        input: input.to_path_buf(),
        changes: changes.to_path_buf(),
        output: output.to_string(),
        dry_run: options.dry_run,
        playlists_before,
        playlists_after: dataset.playlists.len(),
        counts,
    })
}
