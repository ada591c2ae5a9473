use crate::accessor::Formats;
use std::borrow::Cow;

/// Selector for the canonical table (or the quiet listing with `-q`).
pub const TABLE_FORMAT_KEY: &str = "table";

/// Selector for the canonical key/value dump.
pub const RAW_FORMAT_KEY: &str = "raw";

/// A resolved output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSpec {
    /// Aligned grid with a discovered header row. `None` uses the kind's
    /// canonical columns, `Some` carries the body of a `table <template>` selector.
    Table(Option<String>),
    /// One identifying field per object.
    Quiet,
    /// Key/value dump; `quiet` keeps only the identifying field.
    Raw { quiet: bool },
    /// A user template rendered once per object.
    Custom(String),
}

impl FormatSpec {
    /// Maps a `--format` selector and the `-q` flag to a format.
    ///
    /// Never fails: anything that is not a reserved key is a template, and
    /// template errors surface when it is compiled.
    pub fn resolve(selector: &str, quiet: bool) -> Self {
        match selector {
            TABLE_FORMAT_KEY if quiet => FormatSpec::Quiet,
            TABLE_FORMAT_KEY => FormatSpec::Table(None),
            RAW_FORMAT_KEY => FormatSpec::Raw { quiet },
            _ => match selector
                .strip_prefix(TABLE_FORMAT_KEY)
                .filter(|rest| rest.starts_with(' '))
            {
                Some(body) => FormatSpec::Table(Some(body.to_string())),
                None => FormatSpec::Custom(selector.to_string()),
            },
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, FormatSpec::Table(_))
    }

    /// The template text to compile for a kind with the given canonical formats.
    pub fn template_source(&self, formats: &Formats) -> String {
        let source: Cow<'_, str> = match self {
            FormatSpec::Table(None) => formats.table.into(),
            FormatSpec::Table(Some(body)) => body.trim_start_matches(' ').into(),
            FormatSpec::Quiet => formats.quiet.into(),
            FormatSpec::Raw { quiet: false } => formats.raw.into(),
            FormatSpec::Raw { quiet: true } => formats.raw_quiet.into(),
            FormatSpec::Custom(body) => body.as_str().into(),
        };
        unescape(&source)
    }
}

/// Turns the two-character sequences `\t` and `\n` typed on a command line into
/// the characters they name.
fn unescape(source: &str) -> String {
    source.replace("\\t", "\t").replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMATS: Formats = Formats {
        table: "{{ Driver }}\t{{ Name }}",
        quiet: "{{ Name }}",
        raw: "name: {{ Name }}\ndriver: {{ Driver }}\n",
        raw_quiet: "name: {{ Name }}",
    };

    #[test]
    fn table_key_resolves_to_canonical_table() {
        assert_eq!(FormatSpec::resolve("table", false), FormatSpec::Table(None));
        assert_eq!(
            FormatSpec::resolve("table", false).template_source(&FORMATS),
            "{{ Driver }}\t{{ Name }}"
        );
    }

    #[test]
    fn quiet_table_is_single_field() {
        let spec = FormatSpec::resolve("table", true);
        assert_eq!(spec, FormatSpec::Quiet);
        assert!(!spec.is_table());
        assert_eq!(spec.template_source(&FORMATS), "{{ Name }}");
    }

    #[test]
    fn raw_key_honors_quiet() {
        assert_eq!(
            FormatSpec::resolve("raw", false).template_source(&FORMATS),
            "name: {{ Name }}\ndriver: {{ Driver }}\n"
        );
        assert_eq!(
            FormatSpec::resolve("raw", true).template_source(&FORMATS),
            "name: {{ Name }}"
        );
    }

    #[test]
    fn table_prefix_carries_custom_body() {
        let spec = FormatSpec::resolve("table {{ Name }}\\t{{ Size }}", false);
        assert!(spec.is_table());
        assert_eq!(spec.template_source(&FORMATS), "{{ Name }}\t{{ Size }}");
    }

    #[test]
    fn anything_else_is_custom_and_ignores_quiet() {
        let spec = FormatSpec::resolve("{{ Name }}: {{ Size }}", true);
        assert_eq!(spec, FormatSpec::Custom("{{ Name }}: {{ Size }}".into()));
        assert_eq!(spec.template_source(&FORMATS), "{{ Name }}: {{ Size }}");
    }

    #[test]
    fn custom_templates_keep_surrounding_spaces() {
        let spec = FormatSpec::resolve(" {{ Name }} ", false);
        assert_eq!(spec.template_source(&FORMATS), " {{ Name }} ");
    }

    #[test]
    fn table_body_drops_only_separating_spaces() {
        let spec = FormatSpec::resolve("table   {{ Name }} ", false);
        assert_eq!(spec.template_source(&FORMATS), "{{ Name }} ");
    }

    #[test]
    fn words_starting_with_table_are_not_tables() {
        assert_eq!(
            FormatSpec::resolve("tables", false),
            FormatSpec::Custom("tables".into())
        );
    }

    #[test]
    fn escapes_become_tabs_and_newlines() {
        let spec = FormatSpec::resolve("{{ Name }}\\t{{ Size }}\\n", false);
        assert_eq!(spec.template_source(&FORMATS), "{{ Name }}\t{{ Size }}\n");
    }
}
