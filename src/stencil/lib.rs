//! # Stencil - Template-Driven CLI Listings
//!
//! A small rendering engine for CLIs that print many kinds of objects in
//! interchangeable formats: an aligned table, a quiet single-field listing,
//! a raw key/value dump, or any template the user hands in on the command line.
//!
//! ## The Problem
//!
//! A cluster CLI lists nodes, volumes, policies, users and namespaces. Each kind
//! needs a table, a `-q` mode, and a `--format` escape hatch. Hard-coding a
//! column schema per kind means a user template like `table {{ Name }}\t{{ Size }}`
//! can never get the right header row.
//!
//! ## The Solution
//!
//! - Each kind implements [`FieldAccessor`]: named string fields, each carrying
//!   its display header.
//! - Templates are compiled once with minijinja plus a small function library.
//! - In table mode the template is first evaluated against `A::default()`.
//!   Every field it touches is recorded, and that list becomes the header row.
//!   The columns follow the template, not a schema.
//! - Rows are buffered and aligned by [`TabWriter`] before anything is written,
//!   so a failing row never leaves half a table on the terminal.
//!
//! ## Quick Example
//!
//! ```rust
//! use stencil::{Field, FieldAccessor, FormatSpec, Formats, RenderContext};
//!
//! #[derive(Debug, Default)]
//! struct Disk {
//!     name: String,
//!     size: u64,
//! }
//!
//! impl FieldAccessor for Disk {
//!     const KIND: &'static str = "disk";
//!     const FORMATS: Formats = Formats {
//!         table: "{{ Name }}\t{{ Size }}",
//!         quiet: "{{ Name }}",
//!         raw: "name: {{ Name }}\n",
//!         raw_quiet: "name: {{ Name }}",
//!     };
//!
//!     fn field(&self, name: &str) -> Option<Field> {
//!         match name {
//!             "Name" => Some(Field::new("NAME", self.name.clone())),
//!             "Size" => Some(Field::new("SIZE", stencil::human_size(self.size as f64))),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let disks = vec![Disk { name: "sda".into(), size: 1_500_000_000 }];
//! let mut out = Vec::new();
//! RenderContext::new(&mut out, FormatSpec::resolve("table", false))
//!     .write(disks)
//!     .unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("NAME"));
//! assert!(text.contains("1.5GB"));
//! ```
//!
//! ## Format Selectors
//!
//! [`FormatSpec::resolve`] understands:
//! - `table`: the kind's canonical table (or its quiet template with `-q`)
//! - `raw`: the kind's key/value dump (only the identifying field with `-q`)
//! - `table <template>`: an aligned table built from a user template
//! - anything else: a literal template, one rendering per object
//!
//! Escaped `\t` and `\n` in selectors become real tabs and newlines.
//!
//! ## Template Syntax
//!
//! Templates use [minijinja](https://docs.rs/minijinja). Unknown fields are
//! errors, not blanks. The dotted call style found in older config files is
//! rewritten on compile:
//!
//! ```jinja
//! {{ .Name }}               -> {{ Name }}
//! {{ .Label "tier" }}       -> {{ Label("tier") }}
//! {{ join .Groups "," }}    -> {{ join(Groups, ",") }}
//! ```
//!
//! ## Inspect
//!
//! [`inspect`] fetches a list of references one by one, renders each with a
//! template (or dumps it as indented JSON), keeps going past fetch failures and
//! reports them all at the end in a single [`Error::Fetch`].

mod accessor;
mod compat;
mod error;
mod format;
mod funcs;
mod header;
mod inspect;
mod render;
mod table;
mod template;

pub use accessor::{Field, FieldAccessor, Formats};
pub use error::{Error, FetchErrors, FetchFailure, Result};
pub use format::{FormatSpec, RAW_FORMAT_KEY, TABLE_FORMAT_KEY};
pub use funcs::human_size;
pub use header::HeaderTracker;
pub use inspect::{inspect, Fetched};
pub use render::{header_line, RenderContext};
pub use table::{TabWriter, MIN_WIDTH, PADDING};
pub use template::Template;
