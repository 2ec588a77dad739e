use std::{collections::BTreeMap, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use zen_maze_system_stats::RecordStore;

/// TOML-file-backed record store persisting best times between launches.
///
/// Records are held in a sorted map so the serialized file stays stable
/// across rewrites. Writes land on disk only when [`FileStore::save`] runs;
/// the statistics system itself never touches the file.
#[derive(Debug)]
pub(crate) struct FileStore {
    path: PathBuf,
    records: BTreeMap<String, String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecordsFile {
    records: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`, starting empty when the file is absent.
    pub(crate) fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("failed to read records at {}", path.display()))?;
            let parsed: RecordsFile = toml::from_str(&contents)
                .with_context(|| format!("failed to parse records at {}", path.display()))?;
            parsed.records
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, records })
    }

    /// Writes the current records back to the file.
    pub(crate) fn save(&self) -> Result<()> {
        let file = RecordsFile {
            records: self.records.clone(),
        };
        let contents =
            toml::to_string_pretty(&file).context("failed to serialize best-time records")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("failed to write records at {}", self.path.display()))
    }
}

impl RecordStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.records.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        let _ = self.records.insert(key.to_owned(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_starts_empty() {
        let store = FileStore::load("does-not-exist.toml").expect("load");
        assert_eq!(store.get("best/1"), None);
    }

    #[test]
    fn values_round_trip_in_memory() {
        let mut store = FileStore::load("unused.toml").expect("load");
        store.set("best/3", "21".to_owned());
        assert_eq!(store.get("best/3"), Some("21".to_owned()));
    }
}
