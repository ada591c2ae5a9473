//! Rewrites the dotted, space-separated call style used by older format strings
//! (`{{ .Name }}`, `{{ .Label "tier" }}`, `{{ join .Groups "," }}`) into the
//! equivalent minijinja expressions. Anything that already reads as minijinja
//! passes through untouched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::ops::Range;

static EXPRESSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{\{(-?)(.*?)(-?)\}\}").expect("valid expression pattern"));

static STRING_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#).expect("valid literal pattern")
});

static DOT_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|[\s(,|\[])\.([A-Za-z_])").expect("valid field pattern"));

static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""(?:[^"\\]|\\.)*"|\S+"#).expect("valid token pattern"));

static ATOM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(?:"(?:[^"\\]|\\.)*"|[A-Za-z_][A-Za-z0-9_]*|-?[0-9]+(?:\.[0-9]+)?)$"#)
        .expect("valid atom pattern")
});

static IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier pattern"));

const KEYWORDS: &[&str] = &[
    "and", "or", "not", "in", "is", "if", "else", "true", "false", "none", "True", "False", "None",
];

pub(crate) fn normalize(source: &str) -> String {
    EXPRESSION
        .replace_all(source, |caps: &Captures| {
            let mut out = String::from("{{");
            out.push_str(&caps[1]);
            out.push_str(&rewrite_expression(&caps[2]));
            out.push_str(&caps[3]);
            out.push_str("}}");
            out
        })
        .into_owned()
}

fn rewrite_expression(expr: &str) -> String {
    let stripped = strip_field_dots(expr);
    match as_call(&stripped) {
        Some(call) => format!(" {} ", call),
        None => stripped,
    }
}

/// `.Name` -> `Name`, outside string literals.
fn strip_field_dots(expr: &str) -> String {
    let literals: Vec<Range<usize>> = STRING_LITERAL.find_iter(expr).map(|m| m.range()).collect();
    DOT_FIELD
        .replace_all(expr, |caps: &Captures| {
            let start = caps.get(0).map_or(0, |m| m.start());
            if literals.iter().any(|r| r.contains(&start)) {
                caps[0].to_string()
            } else {
                format!("{}{}", &caps[1], &caps[2])
            }
        })
        .into_owned()
}

/// `Label "tier"` -> `Label("tier")` when every token is a plain identifier,
/// number or string literal.
fn as_call(expr: &str) -> Option<String> {
    let tokens: Vec<&str> = TOKEN.find_iter(expr).map(|m| m.as_str()).collect();
    let (name, args) = tokens.split_first()?;
    if args.is_empty() || !IDENT.is_match(name) || KEYWORDS.contains(name) {
        return None;
    }
    if !args
        .iter()
        .all(|arg| ATOM.is_match(arg) && !KEYWORDS.contains(arg))
    {
        return None;
    }
    Some(format!("{}({})", name, args.join(", ")))
}
