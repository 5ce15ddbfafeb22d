use crate::io;
use crate::model::Roster;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait RosterStorage {
    /// Loads a roster from a backing store.
    fn load(&self) -> anyhow::Result<Roster>;
    /// Saves atomically.
    fn save(&self, roster: &Roster) -> anyhow::Result<()>;
}

/// Plain-text backend: one `name,skill` line per nurse.
pub struct TextRosterStorage {
    path: PathBuf,
}

impl TextRosterStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }
}

impl RosterStorage for TextRosterStorage {
    fn load(&self) -> anyhow::Result<Roster> {
        let nurses = io::import_nurses(&self.path)?;
        Ok(Roster { nurses })
    }

    fn save(&self, roster: &Roster) -> anyhow::Result<()> {
        let lines = io::roster_lines(&roster.nurses);
        let mut tmp = NamedTempFile::new_in(self.path.parent().unwrap_or_else(|| Path::new(".")))
            .with_context(|| "creating temp file")?;
        tmp.write_all(lines.as_bytes())?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
