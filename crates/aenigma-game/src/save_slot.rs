//! Best-effort save-file persistence.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::warn;

use crate::{Board, Snapshot};

/// The single on-disk save location for a play session.
///
/// The path is supplied at construction, so hosts and tests each choose
/// their own location; there is no process-global state. One slot holds one
/// save, fully overwritten on every [`save`](Self::save).
///
/// Persistence is best effort. Failures on either side are logged through
/// [`log`] and degrade to a no-op ([`save`](Self::save)) or `None`
/// ([`load_if_exists`](Self::load_if_exists)); gameplay never stops because
/// the filesystem misbehaves.
///
/// # Example
///
/// ```no_run
/// use aenigma_game::{Board, SaveSlot, sample_puzzle};
///
/// let slot = SaveSlot::new("aenigma_save.json");
/// let board = slot.load_if_exists().unwrap_or_else(|| {
///     let (puzzle, solution) = sample_puzzle();
///     Board::new(&puzzle, &solution)
/// });
/// // ... play ...
/// slot.save(&board);
/// ```
#[derive(Debug, Clone)]
pub struct SaveSlot {
    path: PathBuf,
}

impl SaveSlot {
    /// Creates a slot writing to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path this slot reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the board to the slot, replacing any previous save.
    ///
    /// I/O failures are logged as warnings and otherwise ignored.
    pub fn save(&self, board: &Board) {
        let snapshot = Snapshot::capture(board);
        let json = match serde_json::to_string(&snapshot) {
            Ok(json) => json,
            Err(err) => {
                warn!("failed to encode save for {}: {err}", self.path.display());
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, json) {
            warn!("failed to write save to {}: {err}", self.path.display());
        }
    }

    /// Loads the board saved in the slot, if there is one.
    ///
    /// A missing file is the expected first-run case and returns `None`
    /// without a diagnostic. An unreadable, unparseable, or unrestorable
    /// save is logged as a warning and also returns `None`, leaving the
    /// host to start a fresh game.
    #[must_use]
    pub fn load_if_exists(&self) -> Option<Board> {
        if !self.path.exists() {
            return None;
        }
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) => {
                warn!("failed to read save at {}: {err}", self.path.display());
                return None;
            }
        };
        let snapshot: Snapshot = match serde_json::from_str(&json) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("save at {} is malformed: {err}", self.path.display());
                return None;
            }
        };
        match snapshot.restore() {
            Ok(board) => Some(board),
            Err(err) => {
                warn!("save at {} cannot be restored: {err}", self.path.display());
                None
            }
        }
    }
}
