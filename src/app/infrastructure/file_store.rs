use std::fs;
use std::io;
use std::path::Path;

use crate::app::domain::collaborators::FileStore;

/// Whole-file byte I/O against the local filesystem.
///
/// Each call opens, reads or writes, and closes its handle before returning,
/// so nothing stays open after a failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFileStore;

impl FileStore for DiskFileStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        fs::write(path, bytes)
    }
}
