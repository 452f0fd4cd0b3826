use std::path::PathBuf;

use textpad::Session;

#[test]
fn remember_moves_the_path_to_the_front() {
    let mut session = Session::default();
    session.remember(&PathBuf::from("/tmp/a.txt"));
    session.remember(&PathBuf::from("/tmp/b.txt"));
    session.remember(&PathBuf::from("/tmp/a.txt"));

    assert_eq!(
        session.recent_files,
        vec![PathBuf::from("/tmp/a.txt"), PathBuf::from("/tmp/b.txt")]
    );
    assert_eq!(session.last_file, Some(PathBuf::from("/tmp/a.txt")));
}

#[test]
fn recent_files_are_capped() {
    let mut session = Session::default();
    for index in 0..12 {
        session.remember(&PathBuf::from(format!("/tmp/file-{index}.txt")));
    }

    assert_eq!(session.recent_files.len(), 8);
    assert_eq!(
        session.recent_files.first(),
        Some(&PathBuf::from("/tmp/file-11.txt")),
        "most recent file comes first"
    );
    assert_eq!(
        session.recent_files.last(),
        Some(&PathBuf::from("/tmp/file-4.txt"))
    );
}

#[test]
fn defaults_enable_word_wrap() {
    let session = Session::default();
    assert!(session.word_wrap);
    assert!(session.recent_files.is_empty());
    assert!(session.last_file.is_none());
}
