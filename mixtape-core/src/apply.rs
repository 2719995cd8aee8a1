//! The change applicator: runs a change-list against the playlist collection.
//!
//! Actions are applied strictly in order. Each action checks every id it
//! references before touching the collection, so a failing action leaves the
//! playlists exactly as the previous action left them. The first failure ends
//! the run.

use tracing::{debug, warn};

use crate::action::Action;
use crate::collection::Lookup;
use crate::counts::OperationCounts;
use crate::error::{ApplyError, Result};
use crate::model::{Playlist, Song, User};

/// Hands out new playlist ids.
///
/// Seeded once from the largest id in the initial collection and only ever
/// counts up, so ids freed by a deletion are never handed out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdAllocator {
    last: i64,
}

impl IdAllocator {
    /// Seed from existing playlist ids. Every id must be a base-10 integer
    /// and there must be at least one.
    pub fn seed<'a, I>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut max: Option<i64> = None;
        for id in ids {
            let value = parse_playlist_id(id)?;
            max = Some(max.map_or(value, |current| current.max(value)));
        }

        max.map(|last| Self { last }).ok_or(ApplyError::NoPlaylists)
    }

    /// The most recently allocated id, or the seed if none was allocated yet.
    pub fn last(&self) -> i64 {
        self.last
    }

    /// Allocate the next id.
    pub fn allocate(&mut self) -> Result<String> {
        self.last = self
            .last
            .checked_add(1)
            .ok_or(ApplyError::IdSpaceExhausted)?;
        Ok(self.last.to_string())
    }
}

// Plain `i64` parsing: sign and leading zeros are accepted, surrounding
// whitespace and `_` digit separators are not.
fn parse_playlist_id(id: &str) -> Result<i64> {
    id.parse()
        .map_err(|_| ApplyError::InvalidPlaylistId(id.to_string()))
}

/// Apply `actions` to `playlists` in order and return how many of each kind ran.
///
/// `songs` and `users` are only consulted to resolve references.
pub fn apply_changes(
    playlists: &mut Lookup<Playlist>,
    songs: &Lookup<Song>,
    users: &Lookup<User>,
    actions: &[Action],
) -> Result<OperationCounts> {
    let mut ids = IdAllocator::seed(playlists.ids())?;
    let mut counts = OperationCounts::new();

    for (index, action) in actions.iter().enumerate() {
        debug!("Applying action {} ({})", index, action.kind());
        counts.record(action.kind());

        apply_action(playlists, songs, users, &mut ids, action).map_err(|e| {
            warn!("Action {} ({}) failed: {}", index, action.kind(), e);
            e
        })?;
    }

    Ok(counts)
}

/// Apply a single action. On error nothing has been changed.
pub fn apply_action(
    playlists: &mut Lookup<Playlist>,
    songs: &Lookup<Song>,
    users: &Lookup<User>,
    ids: &mut IdAllocator,
    action: &Action,
) -> Result<()> {
    match action {
        Action::AddSong {
            playlist_id,
            song_id,
        } => add_song(playlists, songs, playlist_id, song_id),
        Action::AddPlaylist { user_id, song_ids } => {
            let id = add_playlist(playlists, songs, users, ids, user_id, song_ids)?;
            debug!("Created playlist {} for user {}", id, user_id);
            Ok(())
        },
        Action::DeletePlaylist { playlist_id } => {
            delete_playlist(playlists, playlist_id)?;
            Ok(())
        },
    }
}

/// Append `song_id` to the end of a playlist. Duplicates are kept.
pub fn add_song(
    playlists: &mut Lookup<Playlist>,
    songs: &Lookup<Song>,
    playlist_id: &str,
    song_id: &str,
) -> Result<()> {
    let playlist = playlists
        .get_mut(playlist_id)
        .ok_or_else(|| ApplyError::MissingPlaylist(playlist_id.to_string()))?;
    if !songs.contains(song_id) {
        return Err(ApplyError::MissingSong(song_id.to_string()));
    }

    playlist.song_ids.push(song_id.to_string());
    Ok(())
}

/// Create a playlist for `user_id` holding `song_ids` verbatim and return its new id.
pub fn add_playlist(
    playlists: &mut Lookup<Playlist>,
    songs: &Lookup<Song>,
    users: &Lookup<User>,
    ids: &mut IdAllocator,
    user_id: &str,
    song_ids: &[String],
) -> Result<String> {
    if let Some(missing) = song_ids.iter().find(|id| !songs.contains(id)) {
        return Err(ApplyError::MissingSong(missing.clone()));
    }
    if !users.contains(user_id) {
        return Err(ApplyError::MissingUser(user_id.to_string()));
    }

    let id = ids.allocate()?;
    playlists.insert(Playlist::new(id.clone(), user_id, song_ids.to_vec()));
    Ok(id)
}

/// Remove a playlist. Songs, users and other playlists are left alone.
pub fn delete_playlist(playlists: &mut Lookup<Playlist>, playlist_id: &str) -> Result<Playlist> {
    playlists
        .remove(playlist_id)
        .ok_or_else(|| ApplyError::MissingPlaylist(playlist_id.to_string()))
}
