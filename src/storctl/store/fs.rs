use super::{find, DataStore};
use crate::error::Result;
use crate::model::{ClusterSnapshot, Resource};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the data file, returning both the parsed document and the typed
    /// snapshot built from it.
    fn load(&self) -> Result<(Value, ClusterSnapshot)> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file, using empty cluster");
            return Ok((Value::Null, ClusterSnapshot::default()));
        }
        let content = fs::read_to_string(&self.path)?;
        let document: Value = serde_json::from_str(&content)?;
        let snapshot: ClusterSnapshot = serde_json::from_value(document.clone())?;
        Ok((document, snapshot))
    }

    /// Writes a snapshot, creating parent directories as needed.
    pub fn save(&self, snapshot: &ClusterSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn list<R: Resource>(&self) -> Result<Vec<R>> {
        let (_, snapshot) = self.load()?;
        Ok(R::section(&snapshot).to_vec())
    }

    fn get<R: Resource>(&self, reference: &str) -> Result<R> {
        let (_, snapshot) = self.load()?;
        let (_, item) = find::<R>(&snapshot, reference)?;
        Ok(item.clone())
    }

    fn get_raw<R: Resource>(&self, reference: &str) -> Result<Option<Vec<u8>>> {
        let (document, snapshot) = self.load()?;
        let (index, _) = find::<R>(&snapshot, reference)?;
        // Both views come from the same document, so positions line up.
        match document.get(R::SECTION).and_then(|section| section.get(index)) {
            Some(raw) => Ok(Some(serde_json::to_vec(raw)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorctlError;
    use crate::model::{Node, Volume};
    use tempfile::tempdir;

    const SNAPSHOT: &str = r#"{
        "nodes": [
            {"id": "n1", "name": "storage-1", "address": "10.0.0.1", "zone": "eu-1"},
            {"id": "n2", "name": "storage-2", "address": "10.0.0.2"}
        ],
        "volumes": [
            {"id": "v1", "name": "db", "namespace": "default", "size": 5000000000}
        ]
    }"#;

    fn store_with(content: &str) -> (tempfile::TempDir, FileStore) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cluster.json");
        fs::write(&path, content).unwrap();
        (dir, FileStore::new(path))
    }

    #[test]
    fn missing_file_is_an_empty_cluster() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nope.json"));

        assert!(store.list::<Node>().unwrap().is_empty());
        assert!(matches!(
            store.get::<Node>("n1"),
            Err(StorctlError::NotFound { kind: "node", .. })
        ));
    }

    #[test]
    fn lists_in_file_order() {
        let (_dir, store) = store_with(SNAPSHOT);
        let names: Vec<String> = store
            .list::<Node>()
            .unwrap()
            .into_iter()
            .map(|n| n.name)
            .collect();
        assert_eq!(names, vec!["storage-1", "storage-2"]);
    }

    #[test]
    fn gets_by_reference() {
        let (_dir, store) = store_with(SNAPSHOT);
        assert_eq!(store.get::<Node>("storage-2").unwrap().id, "n2");
        assert_eq!(store.get::<Volume>("default/db").unwrap().size, 5_000_000_000);
    }

    #[test]
    fn raw_keeps_unmodelled_fields() {
        let (_dir, store) = store_with(SNAPSHOT);
        let raw = store.get_raw::<Node>("n1").unwrap().unwrap();
        let value: Value = serde_json::from_slice(&raw).unwrap();

        assert_eq!(value["zone"], "eu-1");
        assert_eq!(value["name"], "storage-1");
    }

    #[test]
    fn raw_of_unknown_reference_is_not_found() {
        let (_dir, store) = store_with(SNAPSHOT);
        assert!(store.get_raw::<Node>("ghost").is_err());
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let (_dir, store) = store_with("{ not json");
        assert!(matches!(
            store.list::<Node>(),
            Err(StorctlError::Serialization(_))
        ));
    }

    #[test]
    fn save_then_read_back() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("cluster.json"));
        let snapshot = ClusterSnapshot {
            nodes: vec![Node {
                id: "n1".into(),
                name: "storage-1".into(),
                ..Default::default()
            }],
            ..Default::default()
        };

        store.save(&snapshot).unwrap();
        assert_eq!(store.list::<Node>().unwrap(), snapshot.nodes);
    }
}
