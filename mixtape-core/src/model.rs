use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::collection::Keyed;

/// A song record. Never modified by a migration, only referenced by id.
///
/// Everything but the id is carried as-is and emitted unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A user record. Never modified by a migration, only referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A playlist owned by a user, holding an ordered list of song ids.
///
/// `song_ids` may contain the same song more than once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub song_ids: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Song {
    pub fn new(id: impl Into<String>, artist: impl Into<String>, title: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("artist".to_string(), Value::String(artist.into()));
        fields.insert("title".to_string(), Value::String(title.into()));
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn artist(&self) -> Option<&str> {
        self.fields.get("artist").and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(name.into()));
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }
}

impl Playlist {
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, song_ids: Vec<String>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            song_ids,
            extra: Map::new(),
        }
    }
}

impl Keyed for Song {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for User {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Playlist {
    fn key(&self) -> &str {
        &self.id
    }
}

/// The full document a migration reads and writes.
///
/// Field order here is irrelevant for output: datasets are written with
/// sorted keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub playlists: Vec<Playlist>,
    pub songs: Vec<Song>,
    pub users: Vec<User>,
}
