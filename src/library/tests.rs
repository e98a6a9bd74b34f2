use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use super::index::{DirListing, MatchRules, board_key, index_dir, index_listings};
use super::label::label_from_path;
use super::*;
use crate::config::LibrarySettings;
use crate::error::Error;

fn rules() -> MatchRules {
    MatchRules::from_settings(&LibrarySettings::default())
}

fn listing(dir: &str, files: &[&str]) -> DirListing {
    let dir = PathBuf::from(dir);
    DirListing {
        files: files.iter().map(|f| dir.join(f)).collect(),
        dir,
    }
}

fn by_key<'a>(boards: &'a BoardSet, key: &str) -> Option<&'a Board> {
    boards.position(key).map(|i| &boards[i])
}

fn settings_for(root: &Path) -> LibrarySettings {
    LibrarySettings {
        root_dir: root.to_path_buf(),
        ..LibrarySettings::default()
    }
}

#[test]
fn label_replaces_underscores_and_capitalizes() {
    assert_eq!(label_from_path(Path::new("/r/foo_bar.mp3")), "Foo bar");
    assert_eq!(label_from_path(Path::new("airhorn.mp3")), "Airhorn");
    assert_eq!(label_from_path(Path::new("SAD_Trombone.wav")), "Sad trombone");
}

#[test]
fn label_strips_only_the_last_extension() {
    assert_eq!(label_from_path(Path::new("take.2.wav")), "Take.2");
    assert_eq!(label_from_path(Path::new(".mp3")), ".mp3");
    assert_eq!(label_from_path(Path::new("_intro.mp3")), " intro");
    assert_eq!(label_from_path(Path::new("..mp3")), "..mp3");
    assert_eq!(label_from_path(Path::new(".hidden.mp3")), ".hidden");
    assert_eq!(label_from_path(Path::new("a..mp3")), "A.");
}

#[test]
fn label_title_cases_the_first_letter_and_lowers_the_rest_as_a_word() {
    assert_eq!(label_from_path(Path::new("ß_x.mp3")), "Ss x");
    assert_eq!(label_from_path(Path::new("ǆemo.mp3")), "ǅemo");
    assert_eq!(label_from_path(Path::new("ﬁle.wav")), "File");
    assert_eq!(label_from_path(Path::new("ΟΔΟΣ.mp3")), "Οδος");
    assert_eq!(label_from_path(Path::new("ΣΑΣ_ΟΔΟΣ.mp3")), "Σας οδος");
    assert_eq!(label_from_path(Path::new("ΟΣ.wav")), "Ος");
}

#[test]
fn audio_suffix_is_case_sensitive_but_background_is_not() {
    let r = rules();
    assert!(r.is_audio("a.wav"));
    assert!(r.is_audio("a.mp3"));
    assert!(!r.is_audio("a.WAV"));
    assert!(!r.is_audio("a.Mp3"));
    assert!(!r.is_audio("a.ogg"));

    assert!(r.is_background("background.jpg"));
    assert!(r.is_background("BackGround.JPG"));
    assert!(!r.is_background("background.jpeg"));
    assert!(!r.is_background("my_background.jpg"));
}

#[test]
fn board_key_is_relative_to_root() {
    let root = Path::new("/r");
    assert_eq!(board_key(root, Path::new("/r")), ".");
    assert_eq!(board_key(root, Path::new("/r/memes")), "memes");
    assert_eq!(
        board_key(root, Path::new("/r/memes/classics")),
        Path::new("memes").join("classics").to_string_lossy()
    );
}

#[test]
fn index_dir_keeps_enumeration_order_and_last_background() {
    let l = listing(
        "/r/memes",
        &[
            "b_clip.mp3",
            "Background.jpg",
            "notes.txt",
            "a_clip.wav",
            "BACKGROUND.JPG",
        ],
    );
    let board = index_dir(Path::new("/r"), &l, &rules()).unwrap();

    assert_eq!(board.key, "memes");
    let labels: Vec<&str> = board.sounds.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["B clip", "A clip"]);
    assert_eq!(board.sounds[0].path, PathBuf::from("/r/memes/b_clip.mp3"));
    assert_eq!(
        board.background,
        Some(PathBuf::from("/r/memes/BACKGROUND.JPG"))
    );
}

#[test]
fn index_dir_skips_folders_without_audio_or_background() {
    let l = listing("/r/docs", &["readme.txt", "cover.png"]);
    assert!(index_dir(Path::new("/r"), &l, &rules()).is_none());
}

#[test]
fn background_only_folder_is_not_a_board() {
    let boards = index_listings(
        Path::new("/r"),
        vec![
            listing("/r", &["background.jpg"]),
            listing("/r/memes", &["airhorn.mp3"]),
            listing("/r/empty", &["background.jpg"]),
        ],
        &rules(),
    );

    let keys: Vec<&str> = boards.keys().collect();
    assert_eq!(keys, vec!["memes"]);
    assert!(by_key(&boards, ".").is_none());
    assert!(by_key(&boards, "empty").is_none());
}

#[test]
fn board_order_follows_listing_order() {
    let boards = index_listings(
        Path::new("/r"),
        vec![
            listing("/r", &["root.wav"]),
            listing("/r/zeta", &["z.mp3"]),
            listing("/r/alpha", &["a.mp3"]),
        ],
        &rules(),
    );

    let keys: Vec<&str> = boards.keys().collect();
    assert_eq!(keys, vec![".", "zeta", "alpha"]);
    assert_eq!(boards.position("alpha"), Some(2));
    assert_eq!(boards.first().map(|b| b.key.as_str()), Some("."));
}

#[test]
fn listings_without_audio_anywhere_give_an_empty_set() {
    let boards = index_listings(
        Path::new("/r"),
        vec![
            listing("/r", &["background.jpg"]),
            listing("/r/a", &["BACKGROUND.jpg", "clip.WAV"]),
        ],
        &rules(),
    );
    assert_eq!(boards.len(), 0);
}

#[test]
fn scan_finds_nested_board_with_relative_key() {
    let dir = tempdir().unwrap();
    let memes = dir.path().join("memes");
    fs::create_dir_all(&memes).unwrap();
    fs::write(memes.join("airhorn.mp3"), b"not a real mp3").unwrap();

    let boards = scan(&settings_for(dir.path())).unwrap();
    assert_eq!(boards.len(), 1);

    let board = by_key(&boards, "memes").unwrap();
    assert_eq!(board.sounds.len(), 1);
    assert_eq!(board.sounds[0].label, "Airhorn");
    assert!(board.sounds[0].path.is_absolute());
    assert!(board.sounds[0].path.ends_with("memes/airhorn.mp3"));
    assert_eq!(board.background, None);
}

#[test]
fn scan_groups_files_by_their_own_folder() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    let ab = a.join("b");
    fs::create_dir_all(&ab).unwrap();
    fs::write(dir.path().join("top.wav"), b"x").unwrap();
    fs::write(a.join("one.mp3"), b"x").unwrap();
    fs::write(a.join("background.JPG"), b"x").unwrap();
    fs::write(ab.join("two.mp3"), b"x").unwrap();
    fs::write(ab.join("three.mp3"), b"x").unwrap();

    let boards = scan(&settings_for(dir.path())).unwrap();
    assert_eq!(boards.len(), 3);
    assert_eq!(boards.first().map(|b| b.key.as_str()), Some("."));
    assert_eq!(by_key(&boards, ".").unwrap().sounds.len(), 1);

    let a_board = by_key(&boards, "a").unwrap();
    assert_eq!(a_board.sounds.len(), 1);
    assert!(a_board.background.as_ref().unwrap().ends_with("background.JPG"));

    let nested_key = Path::new("a").join("b").to_string_lossy().into_owned();
    let ab_board = by_key(&boards, &nested_key).unwrap();
    assert_eq!(ab_board.sounds.len(), 2);
    assert_eq!(ab_board.background, None);
}

#[test]
fn scan_without_audio_yields_empty_set() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("pics");
    fs::create_dir_all(&sub).unwrap();
    fs::write(dir.path().join("background.jpg"), b"x").unwrap();
    fs::write(sub.join("background.jpg"), b"x").unwrap();
    fs::write(sub.join("loud.WAV"), b"x").unwrap();

    let boards = scan(&settings_for(dir.path())).unwrap();
    assert_eq!(boards.len(), 0);
}

#[test]
fn scan_respects_max_depth() {
    let dir = tempdir().unwrap();
    let d1 = dir.path().join("d1");
    let d2 = d1.join("d2");
    fs::create_dir_all(&d2).unwrap();
    fs::write(d1.join("one.mp3"), b"x").unwrap();
    fs::write(d2.join("two.mp3"), b"x").unwrap();

    // Root is depth 0, d1/* is depth 2.
    let settings = LibrarySettings {
        max_depth: Some(2),
        ..settings_for(dir.path())
    };
    let boards = scan(&settings).unwrap();
    let keys: Vec<&str> = boards.keys().collect();
    assert_eq!(keys, vec!["d1"]);
}

#[test]
fn scan_reports_missing_root() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = scan(&settings_for(&missing)).unwrap_err();
    assert!(matches!(err, Error::RootNotFound { .. }));
}

#[cfg(target_os = "linux")]
#[test]
fn folders_with_the_same_lossy_name_remain_separate_boards() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    use crate::board::BoardController;

    let dir = tempdir().unwrap();
    for (name, clip) in [(&b"x\xff"[..], "one.mp3"), (&b"x\xfe"[..], "two.mp3")] {
        let sub = dir.path().join(OsStr::from_bytes(name));
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join(clip), b"x").unwrap();
    }

    let boards = scan(&settings_for(dir.path())).unwrap();
    assert_eq!(boards.len(), 2);
    assert!(boards.keys().all(|k| k == "x\u{FFFD}"));

    let mut c = BoardController::new(boards).unwrap();
    let first = c.sound_at_slot(0).unwrap().path.clone();
    c.next_board();
    assert_eq!(c.current_board_index(), 1);
    let second = c.sound_at_slot(0).unwrap().path.clone();
    assert_ne!(first, second);
    assert_ne!(first.parent(), second.parent());
}
