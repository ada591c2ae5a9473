//! # Storage Layer
//!
//! The [`DataStore`] trait is how the rest of storctl reads cluster objects.
//! Lookups are generic over the [`Resource`] kind, so one implementation serves
//! nodes, volumes, policies, users and namespaces alike.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: reads a JSON [`ClusterSnapshot`] from disk
//!   - A missing file is an empty cluster
//!   - Keeps the document as parsed JSON, so `inspect` can reproduce an object
//!     exactly as stored, including fields storctl does not model
//!
//! - [`memory::InMemoryStore`]: a snapshot held in memory, for tests
//!   - Has no raw representation; `get_raw` always returns `None`
//!
//! ## Snapshot Format
//!
//! ```text
//! {
//!   "nodes":      [ { "id": "...", "name": "...", ... } ],
//!   "volumes":    [ ... ],
//!   "policies":   [ ... ],
//!   "users":      [ ... ],
//!   "namespaces": [ ... ]
//! }
//! ```
//!
//! Every section is optional.

use crate::error::{Result, StorctlError};
use crate::model::{ClusterSnapshot, Resource};

pub mod fs;
pub mod memory;

/// Read access to cluster objects.
pub trait DataStore {
    /// All objects of kind `R`, in snapshot order.
    fn list<R: Resource>(&self) -> Result<Vec<R>>;

    /// The first object of kind `R` matching `reference`.
    fn get<R: Resource>(&self, reference: &str) -> Result<R>;

    /// The stored JSON of the object `get` would return, when the backend
    /// keeps one.
    fn get_raw<R: Resource>(&self, reference: &str) -> Result<Option<Vec<u8>>>;
}

/// Position and value of the first object matching `reference`.
pub(crate) fn find<'a, R: Resource>(
    snapshot: &'a ClusterSnapshot,
    reference: &str,
) -> Result<(usize, &'a R)> {
    R::section(snapshot)
        .iter()
        .enumerate()
        .find(|(_, item)| item.matches(reference))
        .ok_or_else(|| StorctlError::not_found(R::KIND, reference))
}
