mod common;

use common::{png_bytes, GREEN, RED};
use gridshot::{Command, Error, GridComposer, Outcome};

#[test]
fn gesture_sequence_produces_composite() {
    let mut composer = GridComposer::default();

    let out = composer
        .dispatch(Command::Place { index: 0, bytes: png_bytes(200, 100, RED) })
        .unwrap();
    assert!(matches!(out, Outcome::Placed { index: 0 }));

    let out = composer.dispatch(Command::Duplicate { index: 0 }).unwrap();
    assert!(matches!(out, Outcome::Duplicated { from: 0, to: 1 }));

    composer
        .dispatch(Command::Place { index: 5, bytes: png_bytes(100, 100, GREEN) })
        .unwrap();
    let out = composer.dispatch(Command::Remove { index: 5 }).unwrap();
    assert_eq!(out.status_message(), "Cleared slot 5");

    match composer.dispatch(Command::Compose { title: "Demo".into() }).unwrap() {
        Outcome::Composed(c) => {
            assert_eq!((c.width, c.height), (2000, 550));
            assert!(c.file_name.starts_with("Demo_"));
            assert!(c.file_name.ends_with(".png"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn rejected_commands_leave_grid_unchanged() {
    let mut composer = GridComposer::default();
    composer
        .dispatch(Command::Place { index: 48, bytes: png_bytes(4, 4, RED) })
        .unwrap();
    composer.dispatch(Command::Duplicate { index: 48 }).unwrap();

    let err = composer.dispatch(Command::Duplicate { index: 49 }).unwrap_err();
    assert_eq!(err, Error::NoNextSlot(49));
    let err = composer.dispatch(Command::Duplicate { index: 47 }).unwrap_err();
    assert_eq!(err, Error::EmptySlot(47));
    let err = composer
        .dispatch(Command::Place { index: 10, bytes: b"not an image".to_vec() })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidImageData(_)));
    assert!(err.to_string().starts_with("Please select an image file"));

    assert_eq!(composer.slots().occupied_count(), 2);
}
