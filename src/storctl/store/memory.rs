use super::{find, DataStore};
use crate::error::Result;
use crate::model::{ClusterSnapshot, Resource};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: ClusterSnapshot,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: ClusterSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot_mut(&mut self) -> &mut ClusterSnapshot {
        &mut self.snapshot
    }
}

impl DataStore for InMemoryStore {
    fn list<R: Resource>(&self) -> Result<Vec<R>> {
        Ok(R::section(&self.snapshot).to_vec())
    }

    fn get<R: Resource>(&self, reference: &str) -> Result<R> {
        let (_, item) = find::<R>(&self.snapshot, reference)?;
        Ok(item.clone())
    }

    fn get_raw<R: Resource>(&self, reference: &str) -> Result<Option<Vec<u8>>> {
        find::<R>(&self.snapshot, reference)?;
        Ok(None)
    }
}

// --- Test Fixtures ---
