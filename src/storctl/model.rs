//! Cluster objects as they appear in a snapshot file.
//!
//! Every kind implements [`Resource`], which is all the store needs to find an
//! object by reference: the section of the snapshot it lives in and how a
//! user-typed reference is matched against it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Namespace assumed for volume references without a `namespace/` prefix.
pub const DEFAULT_NAMESPACE: &str = "default";

pub type Labels = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capacity {
    pub total: u64,
    pub free: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub address: String,
    pub health: String,
    pub scheduler: bool,
    pub cordoned: bool,
    pub labels: Labels,
    pub capacity: Capacity,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Volume {
    pub id: String,
    pub name: String,
    pub namespace: String,
    pub driver: String,
    pub size: u64,
    pub labels: Labels,
    pub mounted: bool,
    pub mounted_by: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Policy {
    pub id: String,
    pub user: String,
    pub group: String,
    pub namespace: String,
    pub readonly: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: String,
    pub username: String,
    pub groups: Vec<String>,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Namespace {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub labels: Labels,
}

/// Everything the CLI can list, as stored in the data file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterSnapshot {
    pub nodes: Vec<Node>,
    pub volumes: Vec<Volume>,
    pub policies: Vec<Policy>,
    pub users: Vec<User>,
    pub namespaces: Vec<Namespace>,
}

pub trait Resource: Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    /// Singular kind name, used in messages and config keys.
    const KIND: &'static str;

    /// Key of the snapshot section holding this kind.
    const SECTION: &'static str;

    fn matches(&self, reference: &str) -> bool;

    fn section(snapshot: &ClusterSnapshot) -> &[Self];
}

impl Resource for Node {
    const KIND: &'static str = "node";
    const SECTION: &'static str = "nodes";

    fn matches(&self, reference: &str) -> bool {
        self.id == reference || self.name == reference
    }

    fn section(snapshot: &ClusterSnapshot) -> &[Self] {
        &snapshot.nodes
    }
}

impl Resource for Volume {
    const KIND: &'static str = "volume";
    const SECTION: &'static str = "volumes";

    /// Volumes are addressed by id or `namespace/name`; a bare name is looked
    /// up in the default namespace.
    fn matches(&self, reference: &str) -> bool {
        if self.id == reference {
            return true;
        }
        let (namespace, name) = reference
            .split_once('/')
            .unwrap_or((DEFAULT_NAMESPACE, reference));
        self.namespace == namespace && self.name == name
    }

    fn section(snapshot: &ClusterSnapshot) -> &[Self] {
        &snapshot.volumes
    }
}

impl Resource for Policy {
    const KIND: &'static str = "policy";
    const SECTION: &'static str = "policies";

    fn matches(&self, reference: &str) -> bool {
        self.id == reference
    }

    fn section(snapshot: &ClusterSnapshot) -> &[Self] {
        &snapshot.policies
    }
}

impl Resource for User {
    const KIND: &'static str = "user";
    const SECTION: &'static str = "users";

    fn matches(&self, reference: &str) -> bool {
        self.id == reference || self.username == reference
    }

    fn section(snapshot: &ClusterSnapshot) -> &[Self] {
        &snapshot.users
    }
}

impl Resource for Namespace {
    const KIND: &'static str = "namespace";
    const SECTION: &'static str = "namespaces";

    fn matches(&self, reference: &str) -> bool {
        self.id == reference || self.name == reference
    }

    fn section(snapshot: &ClusterSnapshot) -> &[Self] {
        &snapshot.namespaces
    }
}
