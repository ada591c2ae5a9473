//! # API Facade
//!
//! A thin layer between the CLI and the store. It returns Rust values, never
//! writes to the terminal, and is generic over the [`DataStore`] backend:
//! `StorctlApi<FileStore>` in the binary, `StorctlApi<InMemoryStore>` in tests.
//!
//! Formatting stays in the CLI: `list` hands back objects for the renderer, and
//! `fetch` hands back an object plus its stored JSON for the inspect pipeline.

use crate::error::Result;
use crate::model::Resource;
use crate::store::DataStore;
use stencil::Fetched;
use tracing::debug;

pub struct StorctlApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> StorctlApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list<R: Resource>(&self) -> Result<Vec<R>> {
        let items = self.store.list::<R>()?;
        debug!(kind = R::KIND, count = items.len(), "listed objects");
        Ok(items)
    }

    /// Resolves one reference for `inspect`.
    pub fn fetch<R: Resource>(&self, reference: &str) -> Result<Fetched<R>> {
        let object = self.store.get::<R>(reference)?;
        Ok(match self.store.get_raw::<R>(reference)? {
            Some(raw) => Fetched::with_raw(object, raw),
            None => Fetched::new(object),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorctlError;
    use crate::model::{Node, Policy, Volume};
    use crate::store::fs::FileStore;
    use crate::store::memory::fixtures::{sample_cluster, sample_store};

    #[test]
    fn list_returns_every_object_of_the_kind() {
        let api = StorctlApi::new(sample_store());
        assert_eq!(api.list::<Node>().unwrap().len(), 2);
        assert_eq!(api.list::<Policy>().unwrap().len(), 1);
    }

    #[test]
    fn fetch_from_memory_has_no_raw_bytes() {
        let api = StorctlApi::new(sample_store());
        let fetched = api.fetch::<Volume>("db").unwrap();
        assert_eq!(fetched.object.id, "v1");
        assert!(fetched.raw.is_none());
    }

    #[test]
    fn fetch_from_file_carries_raw_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("cluster.json"));
        store.save(&sample_cluster()).unwrap();

        let api = StorctlApi::new(store);
        let fetched = api.fetch::<Node>("storage-1").unwrap();
        let raw: serde_json::Value = serde_json::from_slice(&fetched.raw.unwrap()).unwrap();
        assert_eq!(raw["id"], "n1");
    }

    #[test]
    fn fetch_unknown_reference_fails() {
        let api = StorctlApi::new(sample_store());
        assert!(matches!(
            api.fetch::<Node>("ghost"),
            Err(StorctlError::NotFound { kind: "node", .. })
        ));
    }
}
