#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod action;
pub mod apply;
pub mod collection;
pub mod config;
pub mod counts;
pub mod dataset;
pub mod error;
pub mod model;
pub mod operations;
pub mod output;
pub mod report;

pub use action::{Action, ActionKind, ActionRecord, ChangeList};
pub use apply::{add_playlist, add_song, apply_action, apply_changes, delete_playlist, IdAllocator};
pub use collection::{Keyed, Lookup};
pub use config::Config;
pub use counts::OperationCounts;
pub use dataset::{dataset_to_writer, load_changes, load_dataset, write_dataset, OutputTarget};
pub use error::{ApplyError, InvalidInput};
pub use model::{Dataset, Playlist, Song, User};
pub use operations::{migrate, migrate_operation, MigrateOptions};
pub use output::{MigrateResult, OutputFormat, OutputFormatter};
pub use report::{render_result, should_use_color};
