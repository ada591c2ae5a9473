use std::borrow::Cow;
use std::fmt;

/// One evaluated field: the column header it belongs to and its rendered value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub header: Cow<'static, str>,
    pub value: String,
}

impl Field {
    pub fn new(header: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            value: value.into(),
        }
    }
}

/// The canonical templates of one object kind.
///
/// `table` is the body of the default table (headers are discovered from it),
/// `quiet` is the single identifying field printed by `-q`, `raw` and
/// `raw_quiet` are the key/value dumps behind the `raw` selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formats {
    pub table: &'static str,
    pub quiet: &'static str,
    pub raw: &'static str,
    pub raw_quiet: &'static str,
}

/// Adapter between one domain value and the template engine.
///
/// Templates reach fields by name (`{{ Name }}`). Parameterized fields listed in
/// [`FieldAccessor::PARAMETERIZED`] are called with one string argument
/// (`{{ Label("tier") }}`) and may derive their header from it.
///
/// `Default` is not required here but [`crate::RenderContext::write`] asks for
/// it: the default value is what header discovery evaluates against, so every
/// field must produce a header even when its value is empty.
pub trait FieldAccessor: fmt::Debug + Send + Sync + 'static {
    /// Kind name used in logs and error messages.
    const KIND: &'static str;

    const FORMATS: Formats;

    /// Names of the fields that take one argument.
    const PARAMETERIZED: &'static [&'static str] = &[];

    /// Looks up a zero-argument field. `None` means the field does not exist.
    fn field(&self, name: &str) -> Option<Field>;

    /// Looks up a parameterized field.
    fn field_with(&self, name: &str, arg: &str) -> Option<Field> {
        let _ = (name, arg);
        None
    }
}
