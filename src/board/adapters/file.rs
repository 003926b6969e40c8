//! File-backed blob store with capability-scoped directory access.

use crate::board::domain::Board;
use crate::board::ports::{BlobStore, PersistenceError, PersistenceResult};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

/// Blob name used when the embedding application does not pick its own.
pub const DEFAULT_BLOB_NAME: &str = "kanban-board";

/// Stores the board as one JSON document inside a directory the store was
/// granted at construction.
///
/// Writes land in a temporary sibling first and are renamed into place, so
/// an interrupted write never truncates the existing blob. Malformed blob
/// content loads as absence rather than an error.
#[derive(Debug)]
pub struct FileBlobStore {
    dir: Dir,
    file_name: String,
    tmp_name: String,
}

impl FileBlobStore {
    /// Opens a blob store rooted at `dir_path`, creating the directory if
    /// needed. `blob_name` names the blob; the stored file is
    /// `<blob_name>.json`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the directory cannot be created
    /// or opened.
    pub fn open(dir_path: &Utf8Path, blob_name: &str) -> PersistenceResult<Self> {
        Dir::create_ambient_dir_all(dir_path, ambient_authority())
            .map_err(PersistenceError::open)?;
        let dir =
            Dir::open_ambient_dir(dir_path, ambient_authority()).map_err(PersistenceError::open)?;
        Ok(Self {
            dir,
            file_name: format!("{blob_name}.json"),
            tmp_name: format!("{blob_name}.json.tmp"),
        })
    }
}

impl BlobStore for FileBlobStore {
    fn load(&self) -> PersistenceResult<Option<Board>> {
        let text = match self.dir.read_to_string(&self.file_name) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(PersistenceError::read(err)),
        };
        Ok(super::decode_blob(&text, &self.file_name))
    }

    fn save(&self, board: &Board) -> PersistenceResult<()> {
        let data = serde_json::to_string_pretty(board).map_err(PersistenceError::write)?;
        self.dir
            .write(&self.tmp_name, data)
            .map_err(PersistenceError::write)?;
        self.dir
            .rename(&self.tmp_name, &self.dir, &self.file_name)
            .map_err(PersistenceError::write)?;
        Ok(())
    }

    fn clear(&self) -> PersistenceResult<()> {
        match self.dir.remove_file(&self.file_name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(PersistenceError::write(err)),
        }
    }

    fn is_empty(&self) -> PersistenceResult<bool> {
        self.dir
            .try_exists(&self.file_name)
            .map(|exists| !exists)
            .map_err(PersistenceError::read)
    }
}
