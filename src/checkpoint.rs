use anyhow::{Context, Result};
use std::path::Path;

use crate::store;

/// Count of conversations already uploaded, persisted as a bare base-10
/// integer in a side file. Never decremented; reset only by deleting the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub last_index: usize,
}

impl Checkpoint {
    /// An absent checkpoint file is created with value 0; garbage content is
    /// fatal rather than being treated as a fresh start.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if !path.exists() {
            let checkpoint = Checkpoint { last_index: 0 };
            checkpoint.save(path)?;
            return Ok(checkpoint);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read checkpoint file {}", path.display()))?;
        let last_index = content.trim().parse().with_context(|| {
            format!(
                "Checkpoint file {} does not contain an integer: `{}`",
                path.display(),
                content.trim()
            )
        })?;

        Ok(Checkpoint { last_index })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        store::write_atomic(path, self.last_index.to_string().as_bytes())
    }

    /// Called once per successful upload, never otherwise.
    pub fn advance(&mut self) {
        self.last_index += 1;
    }
}
