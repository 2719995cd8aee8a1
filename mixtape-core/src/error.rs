use std::fmt;
use thiserror::Error;

use crate::action::ActionKind;

/// Errors raised while decoding or applying a change-list.
///
/// Every variant aborts the whole run. The variant is what callers match on;
/// the message text may change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("No such playlist, id={0}")]
    MissingPlaylist(String),

    #[error("No such song, id={0}")]
    MissingSong(String),

    #[error("No such user, id={0}")]
    MissingUser(String),

    #[error("No such operation: {0}")]
    UnknownActionKind(String),

    #[error("Invalid parameters for {kind}: {reason}")]
    InvalidParameters { kind: ActionKind, reason: String },

    #[error("Dataset has no playlists to allocate new ids from")]
    NoPlaylists,

    #[error("Playlist id is not an integer: {0:?}")]
    InvalidPlaylistId(String),

    #[error("Playlist id space exhausted")]
    IdSpaceExhausted,
}

impl ApplyError {
    /// True for the errors caused by a reference that does not resolve.
    pub fn is_missing_reference(&self) -> bool {
        matches!(
            self,
            Self::MissingPlaylist(_) | Self::MissingSong(_) | Self::MissingUser(_)
        )
    }
}

/// Context marking a failure to read or parse one of the input documents
/// (dataset, change-list or config file), as opposed to a failure while
/// applying changes or writing output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInput(pub String);

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub type Result<T, E = ApplyError> = std::result::Result<T, E>;
