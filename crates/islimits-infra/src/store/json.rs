use std::fs;
use std::path::{Path, PathBuf};

use islimits_core::ports::OverrideStore;
use islimits_types::error::StoreError;
use islimits_types::ids::IslandId;
use islimits_types::record::OverrideRecord;

/// Override records persisted as `{dir}/{island}.json`.
///
/// Island ids are percent-encoded into file names, so any id maps to exactly
/// one file. Writes go to a temporary file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct JsonFileOverrideStore {
    dir: PathBuf,
}

impl JsonFileOverrideStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding an island's record.
    pub fn record_path(&self, island: &IslandId) -> PathBuf {
        self.dir.join(format!("{}.json", encode_file_stem(island.as_str())))
    }

    /// Every stored record, ordered by island id.
    pub fn list(&self) -> Result<Vec<OverrideRecord>, StoreError> {
        let mut records = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                let content = fs::read_to_string(&path)?;
                records.push(serde_json::from_str::<OverrideRecord>(&content)?);
            }
        }
        records.sort_by(|a, b| a.island_id.cmp(&b.island_id));
        Ok(records)
    }
}

impl OverrideStore for JsonFileOverrideStore {
    fn get(&self, island: &IslandId) -> Result<Option<OverrideRecord>, StoreError> {
        let path = self.record_path(island);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn set(&self, island: &IslandId, record: &OverrideRecord) -> Result<(), StoreError> {
        let path = self.record_path(island);
        let tmp = path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(record)?;
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &path)?;
        tracing::trace!(island = %island, path = %path.display(), "Wrote override record");
        Ok(())
    }
}

/// Keep `[A-Za-z0-9_-]`, percent-encode every other byte.
fn encode_file_stem(id: &str) -> String {
    let mut stem = String::with_capacity(id.len());
    for byte in id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("%{byte:02X}"));
        }
    }
    stem
}
