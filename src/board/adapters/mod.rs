//! Adapter implementations of the board ports.

mod file;
mod memory;

pub use file::{DEFAULT_BLOB_NAME, FileBlobStore};
pub use memory::InMemoryBlobStore;

use crate::board::domain::Board;

/// Decodes a stored blob, folding malformed data into absence.
///
/// Both data-level failure modes are logged: JSON that does not parse, and
/// JSON that parses but violates the collection invariants (status drift,
/// duplicate ids, empty required fields).
fn decode_blob(text: &str, source: &str) -> Option<Board> {
    let board = match serde_json::from_str::<Board>(text) {
        Ok(board) => board,
        Err(err) => {
            tracing::warn!(source, error = %err, "stored board blob is malformed, treating as absent");
            return None;
        }
    };
    if !board.is_well_formed() {
        tracing::warn!(source, "stored board blob violates collection invariants, treating as absent");
        return None;
    }
    Some(board)
}
