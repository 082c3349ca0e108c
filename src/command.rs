//! User gestures as commands.
//!
//! A host translates its input events into `Command`s: click or drop places
//! an image, right-click duplicates into the next slot, double-click removes,
//! and the generate button composes. All logic stays in `GridComposer`.

use log::warn;

use crate::{Composite, GridComposer, Result};

#[derive(Debug, Clone)]
pub enum Command {
    /// Decode and place raw image bytes
    Place { index: usize, bytes: Vec<u8> },
    Duplicate { index: usize },
    Remove { index: usize },
    Compose { title: String },
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Placed { index: usize },
    Duplicated { from: usize, to: usize },
    Removed { index: usize },
    Composed(Composite),
}

impl Outcome {
    /// One-line status for the user
    pub fn status_message(&self) -> String {
        match self {
            Outcome::Placed { index } => format!("Placed image in slot {}", index),
            Outcome::Duplicated { from, to } => {
                format!("Duplicated slot {} into slot {}", from, to)
            }
            Outcome::Removed { index } => format!("Cleared slot {}", index),
            Outcome::Composed(c) => {
                format!("Generated {} ({}x{})", c.file_name, c.width, c.height)
            }
        }
    }
}

impl GridComposer {
    /// Apply one command. Failed commands leave the grid unchanged.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        let res = self.apply(command);
        log_rejection(&res);
        res
    }

    /// `dispatch`, with placement decoding on tokio's blocking pool
    pub async fn dispatch_async(&mut self, command: Command) -> Result<Outcome> {
        let res = match command {
            Command::Place { index, bytes } => self
                .place_bytes_async(index, bytes)
                .await
                .map(|_| Outcome::Placed { index }),
            other => self.apply(other),
        };
        log_rejection(&res);
        res
    }

    fn apply(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Place { index, bytes } => self
                .place_bytes(index, &bytes)
                .map(|_| Outcome::Placed { index }),
            Command::Duplicate { index } => self
                .duplicate(index)
                .map(|to| Outcome::Duplicated { from: index, to }),
            Command::Remove { index } => self.remove(index).map(|_| Outcome::Removed { index }),
            Command::Compose { title } => self.compose(&title).map(Outcome::Composed),
        }
    }
}

fn log_rejection(res: &Result<Outcome>) {
    if let Err(e) = res {
        warn!("command rejected: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ImageHandle};
    use image::RgbaImage;

    #[test]
    fn duplicate_reports_target() {
        let mut c = GridComposer::default();
        c.place(8, ImageHandle::new(RgbaImage::new(2, 2)).unwrap()).unwrap();
        let out = c.dispatch(Command::Duplicate { index: 8 }).unwrap();
        assert!(matches!(out, Outcome::Duplicated { from: 8, to: 9 }));
        assert_eq!(out.status_message(), "Duplicated slot 8 into slot 9");
    }

    #[test]
    fn compose_on_empty_grid_is_rejected() {
        let mut c = GridComposer::default();
        let err = c.dispatch(Command::Compose { title: "t".into() }).unwrap_err();
        assert_eq!(err, Error::EmptyGrid);
    }

    #[tokio::test]
    async fn async_dispatch_matches_sync_rules() {
        let mut c = GridComposer::default();
        c.place(49, ImageHandle::new(RgbaImage::new(2, 2)).unwrap()).unwrap();
        let err = c.dispatch_async(Command::Duplicate { index: 49 }).await.unwrap_err();
        assert_eq!(err, Error::NoNextSlot(49));
        let err = c
            .dispatch_async(Command::Place { index: 49, bytes: Vec::new() })
            .await
            .unwrap_err();
        assert_eq!(err, Error::SlotOccupied(49));
        let out = c.dispatch_async(Command::Remove { index: 49 }).await.unwrap();
        assert!(matches!(out, Outcome::Removed { index: 49 }));
    }
}
