//! # storctl Architecture
//!
//! storctl is a cluster-management CLI that lists and inspects nodes, volumes,
//! policies, users and namespaces. All output goes through the [`stencil`]
//! engine, so every kind supports the same `--format` selectors and templates.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (args.rs, main.rs)                                     │
//! │  - Parses arguments, picks the format, owns stdout/stderr   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┴───────────────┐
//!              ▼                               ▼
//! ┌───────────────────────────┐   ┌─────────────────────────────┐
//! │  API (api.rs)             │   │  Formatter (formatter/)     │
//! │  - list / fetch objects   │   │  - one FieldAccessor / kind │
//! └───────────────────────────┘   └─────────────────────────────┘
//!              │
//!              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - DataStore trait                                          │
//! │  - FileStore (JSON snapshot), InMemoryStore (tests)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to the terminal. The formatter writes to
//! whatever `io::Write` it is handed, which is stdout in the binary and a
//! `Vec<u8>` in tests.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Cluster object types and the [`model::Resource`] trait
//! - [`formatter`]: Per-kind field accessors and the list renderer
//! - [`config`]: Config file and path resolution
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod formatter;
pub mod model;
pub mod store;
