use crate::error::{Error, FetchErrors, Result};
use crate::template::Template;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value as JsonValue;
use std::error::Error as StdError;
use std::io::Write;
use tracing::debug;

const JSON_INDENT: &[u8] = b"    ";

/// One fetched object, optionally with the raw bytes the backend sent for it.
///
/// When raw bytes are present the JSON fallback reproduces them instead of
/// re-serializing the object.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub object: T,
    pub raw: Option<Vec<u8>>,
}

impl<T> Fetched<T> {
    pub fn new(object: T) -> Self {
        Self { object, raw: None }
    }

    pub fn with_raw(object: T, raw: Vec<u8>) -> Self {
        Self {
            object,
            raw: Some(raw),
        }
    }
}

/// Fetches every reference in order and prints it.
///
/// With a non-empty `template` each object is rendered and written, followed
/// by a newline, as soon as it is fetched. With an empty template the objects
/// are collected and written at the end as one indented JSON array (`[]` when
/// nothing was fetched).
///
/// A fetch failure is recorded and the loop moves on; all of them come back
/// together as [`Error::Fetch`]. A template that does not compile fails before
/// anything is fetched, and a template that fails on an object ends the call.
pub fn inspect<W, R, T, E, F>(output: &mut W, refs: &[R], template: &str, mut fetch: F) -> Result<()>
where
    W: Write + ?Sized,
    R: AsRef<str>,
    T: Serialize,
    E: Into<Box<dyn StdError + Send + Sync>>,
    F: FnMut(&str) -> std::result::Result<Fetched<T>, E>,
{
    let compiled = if template.is_empty() {
        None
    } else {
        Some(Template::compile(template)?)
    };

    let mut failures = FetchErrors::new();
    let mut collected: Vec<JsonValue> = Vec::new();

    for reference in refs {
        let reference = reference.as_ref();
        let fetched = match fetch(reference) {
            Ok(fetched) => fetched,
            Err(err) => {
                let cause = err.into();
                debug!(reference, error = %cause, "fetch failed");
                failures.push(reference, cause);
                continue;
            }
        };

        match &compiled {
            Some(template) => {
                let rendered = template.render_value(&fetched.object)?;
                output.write_all(rendered.as_bytes())?;
                output.write_all(b"\n")?;
            }
            None => collected.push(to_json(fetched)?),
        }
    }

    if compiled.is_none() {
        write_json_array(output, &collected)?;
    }
    output.flush()?;

    debug!(
        requested = refs.len(),
        failed = failures.len(),
        "inspect finished"
    );

    if failures.is_empty() {
        Ok(())
    } else {
        Err(Error::Fetch(failures))
    }
}

fn to_json<T: Serialize>(fetched: Fetched<T>) -> Result<JsonValue> {
    match fetched.raw {
        Some(raw) => Ok(serde_json::from_slice(&raw)?),
        None => Ok(serde_json::to_value(&fetched.object)?),
    }
}

fn write_json_array<W: Write + ?Sized>(output: &mut W, values: &[JsonValue]) -> Result<()> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    values.serialize(&mut serializer)?;
    buffer.push(b'\n');
    output.write_all(&buffer)?;
    Ok(())
}
