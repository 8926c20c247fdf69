use anyhow::{Context, Result};
use fs2::FileExt;
use std::io::Write;
use std::path::Path;

/// Whole-file overwrite via a temp file in the target directory plus rename,
/// so readers never observe a half-written file.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file next to {}", path.display()))?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.persist(path)
        .with_context(|| format!("Failed to move temp file into {}", path.display()))?;
    Ok(())
}

/// Advisory exclusive lock, released when the guard drops.
pub struct LockGuard {
    _file: std::fs::File,
}

pub fn lock_file(path: &Path) -> Result<LockGuard> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)
        .with_context(|| format!("Failed to open lock file {}", path.display()))?;
    file.lock_exclusive()
        .with_context(|| format!("Failed to lock {}", path.display()))?;
    Ok(LockGuard { _file: file })
}
