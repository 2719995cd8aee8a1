use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{ApplyError, Result};

/// The closed set of change kinds a change-list may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    AddSong,
    DeletePlaylist,
    AddPlaylist,
}

impl ActionKind {
    pub const ALL: [Self; 3] = [Self::AddSong, Self::DeletePlaylist, Self::AddPlaylist];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AddSong => "ADD_SONG",
            Self::DeletePlaylist => "DELETE_PLAYLIST",
            Self::AddPlaylist => "ADD_PLAYLIST",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ApplyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ApplyError::UnknownActionKind(s.to_string()))
    }
}

/// One requested mutation of the playlist collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Append a song to the end of an existing playlist
    AddSong { playlist_id: String, song_id: String },
    /// Remove a playlist, leaving songs and users alone
    DeletePlaylist { playlist_id: String },
    /// Create a playlist with a freshly allocated id
    AddPlaylist { user_id: String, song_ids: Vec<String> },
}

impl Action {
    pub fn add_song(playlist_id: impl Into<String>, song_id: impl Into<String>) -> Self {
        Self::AddSong {
            playlist_id: playlist_id.into(),
            song_id: song_id.into(),
        }
    }

    pub fn delete_playlist(playlist_id: impl Into<String>) -> Self {
        Self::DeletePlaylist {
            playlist_id: playlist_id.into(),
        }
    }

    pub fn add_playlist<I, S>(user_id: impl Into<String>, song_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AddPlaylist {
            user_id: user_id.into(),
            song_ids: song_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::AddSong { .. } => ActionKind::AddSong,
            Self::DeletePlaylist { .. } => ActionKind::DeletePlaylist,
            Self::AddPlaylist { .. } => ActionKind::AddPlaylist,
        }
    }
}

/// A change record as it appears on disk: the `op` tag plus its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub op: String,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl TryFrom<ActionRecord> for Action {
    type Error = ApplyError;

    fn try_from(record: ActionRecord) -> Result<Self> {
        let kind: ActionKind = record.op.parse()?;
        let mut params = record.params;

        let action = match kind {
            ActionKind::AddSong => Self::AddSong {
                playlist_id: take_string(kind, &mut params, "playlist_id")?,
                song_id: take_string(kind, &mut params, "song_id")?,
            },
            ActionKind::DeletePlaylist => Self::DeletePlaylist {
                playlist_id: take_string(kind, &mut params, "playlist_id")?,
            },
            ActionKind::AddPlaylist => Self::AddPlaylist {
                user_id: take_string(kind, &mut params, "user_id")?,
                song_ids: take_string_list(kind, &mut params, "song_ids")?,
            },
        };

        if !params.is_empty() {
            let ignored: Vec<&str> = params.keys().map(String::as_str).collect();
            debug!("Ignoring extra parameters for {}: {}", kind, ignored.join(", "));
        }

        Ok(action)
    }
}

fn take_param(kind: ActionKind, params: &mut Map<String, Value>, name: &str) -> Result<Value> {
    params
        .remove(name)
        .ok_or_else(|| ApplyError::InvalidParameters {
            kind,
            reason: format!("missing parameter '{}'", name),
        })
}

fn take_string(kind: ActionKind, params: &mut Map<String, Value>, name: &str) -> Result<String> {
    match take_param(kind, params, name)? {
        Value::String(s) => Ok(s),
        other => Err(ApplyError::InvalidParameters {
            kind,
            reason: format!("parameter '{}' must be a string, got {}", name, other),
        }),
    }
}

fn take_string_list(
    kind: ActionKind,
    params: &mut Map<String, Value>,
    name: &str,
) -> Result<Vec<String>> {
    let invalid = |value: &Value| ApplyError::InvalidParameters {
        kind,
        reason: format!("parameter '{}' must be a list of strings, got {}", name, value),
    };

    match take_param(kind, params, name)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(invalid(&other)),
            })
            .collect(),
        other => Err(invalid(&other)),
    }
}

/// A change-list document: `{"actions": [...]}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChangeList {
    #[serde(default)]
    pub actions: Vec<ActionRecord>,
}

impl ChangeList {
    /// Decode every record into a typed action, stopping at the first bad one.
    pub fn decode(self) -> Result<Vec<Action>> {
        self.actions.into_iter().map(Action::try_from).collect()
    }
}
