//! Function library bound to every compiled template.
//!
//! Each helper is registered both as a filter (`{{ Size | human_size }}`) and as
//! a function (`{{ human_size(Size) }}`). `join`, `lower`, `upper` and `title`
//! already exist as minijinja filters and are only added as functions.

use minijinja::value::Value;
use minijinja::{Environment, Error, ErrorKind};

const DECIMAL_UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const SIGNIFICANT_DIGITS: i32 = 4;

pub(crate) fn register(env: &mut Environment<'static>) {
    env.add_filter("split", split);
    env.add_filter("pad", pad);
    env.add_filter("truncate", truncate);
    env.add_filter("human_size", human_size);
    env.add_filter("json", json);

    env.add_function("join", join);
    env.add_function("split", split);
    env.add_function("lower", lower);
    env.add_function("upper", upper);
    env.add_function("title", title);
    env.add_function("pad", pad);
    env.add_function("truncate", truncate);
    env.add_function("human_size", human_size);
    env.add_function("json", json);
}

/// Formats a byte count with decimal units and four significant digits,
/// e.g. `1500000000` -> `1.5GB`, `1234567` -> `1.235MB`.
pub fn human_size(size: f64) -> String {
    if !size.is_finite() {
        return size.to_string();
    }
    let mut size = size;
    let mut unit = 0;
    while size >= 1000.0 && unit < DECIMAL_UNITS.len() - 1 {
        size /= 1000.0;
        unit += 1;
    }
    format!("{}{}", significant(size), DECIMAL_UNITS[unit])
}

fn significant(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let integer_digits = value.abs().log10().floor() as i32 + 1;
    let decimals = (SIGNIFICANT_DIGITS - integer_digits).max(0) as usize;
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

fn join(value: Value, sep: Option<String>) -> Result<String, Error> {
    if let Some(s) = value.as_str() {
        return Ok(s.to_string());
    }
    let items: Vec<String> = value.try_iter()?.map(|v| v.to_string()).collect();
    Ok(items.join(sep.as_deref().unwrap_or("")))
}

fn split(value: String, sep: String) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(sep.as_str()).map(str::to_string).collect()
}

fn lower(value: String) -> String {
    value.to_lowercase()
}

fn upper(value: String) -> String {
    value.to_uppercase()
}

fn title(value: String) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    out
}

fn pad(value: String, left: usize, right: usize) -> String {
    format!("{}{}{}", " ".repeat(left), value, " ".repeat(right))
}

/// Keeps the first `length` characters. Replaces the minijinja builtin, which
/// appends an ellipsis.
fn truncate(value: String, length: usize) -> String {
    value.chars().take(length).collect()
}

fn json(value: Value) -> Result<String, Error> {
    serde_json::to_string(&value).map_err(|err| {
        Error::new(ErrorKind::InvalidOperation, "cannot encode value as JSON").with_source(err)
    })
}
