#![no_main]

use libfuzzer_sys::fuzz_target;
use mixtape_core::{migrate, ChangeList, Dataset, Playlist, Song, User};

fn base_dataset() -> Dataset {
    Dataset {
        playlists: vec![
            Playlist::new("1", "1", vec!["1".to_string()]),
            Playlist::new("2", "1", vec!["2".to_string()]),
        ],
        songs: vec![Song::new("1", "artist", "title"), Song::new("2", "artist", "title")],
        users: vec![User::new("1", "name")],
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(changes) = serde_json::from_slice::<ChangeList>(data) else {
        return;
    };
    let Ok(actions) = changes.decode() else {
        return;
    };

    let before = base_dataset();
    if let Ok((after, counts)) = migrate(before.clone(), &actions) {
        assert_eq!(counts.total(), actions.len());
        assert_eq!(after.songs, before.songs);
        assert_eq!(after.users, before.users);
    }
});
