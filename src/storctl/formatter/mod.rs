//! Field accessors binding each cluster kind to the template engine.
//!
//! A kind's context wraps one object and exposes its fields by the names used
//! in `--format` templates (`{{ Name }}`, `{{ Label("tier") }}`). Values are
//! always strings: sizes are humanized, label maps are flattened to sorted
//! `k=v` pairs.

use crate::error::Result;
use crate::model::{Labels, Resource};
use std::io::Write;
use stencil::{Field, FieldAccessor, FormatSpec, RenderContext};

pub mod namespace;
pub mod node;
pub mod policy;
pub mod user;
pub mod volume;

pub use namespace::NamespaceContext;
pub use node::NodeContext;
pub use policy::PolicyContext;
pub use user::UserContext;
pub use volume::VolumeContext;

pub(crate) const ID_HEADER: &str = "ID";
pub(crate) const NAME_HEADER: &str = "NAME";
pub(crate) const NAMESPACE_HEADER: &str = "NAMESPACE";
pub(crate) const LABELS_HEADER: &str = "LABELS";

/// A resource kind with a formatter context.
pub trait Formattable: Resource {
    type Context: FieldAccessor + Default + From<Self>;
}

/// Renders `items` in `format` to `output`.
pub fn write<R: Formattable, W: Write>(output: W, format: FormatSpec, items: Vec<R>) -> Result<()> {
    RenderContext::new(output, format).write(items.into_iter().map(R::Context::from))?;
    Ok(())
}

/// `a=1,b=2`, sorted by key.
pub(crate) fn join_labels(labels: &Labels) -> String {
    labels
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Header for `Label(key)`: the last dot-separated segment of the key, with
/// dashes and underscores turned into spaces.
pub(crate) fn label_header(key: &str) -> String {
    key.rsplit('.')
        .next()
        .unwrap_or(key)
        .replace(['-', '_'], " ")
}

pub(crate) fn label_field(labels: &Labels, key: &str) -> Field {
    Field::new(
        label_header(key),
        labels.get(key).cloned().unwrap_or_default(),
    )
}
