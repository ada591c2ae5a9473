use crate::accessor::FieldAccessor;
use crate::error::Result;
use crate::format::FormatSpec;
use crate::table::TabWriter;
use crate::template::Template;
use std::io::Write;
use tracing::{debug, trace};

/// One render call: an output sink and the format every object is printed in.
///
/// Nothing reaches the sink until every object has rendered. A failing row
/// aborts the call with the sink untouched, in every format.
pub struct RenderContext<W: Write> {
    output: W,
    format: FormatSpec,
}

impl<W: Write> RenderContext<W> {
    pub fn new(output: W, format: FormatSpec) -> Self {
        Self { output, format }
    }

    pub fn format(&self) -> &FormatSpec {
        &self.format
    }

    /// Renders `objects` in input order.
    ///
    /// In table mode the header row is discovered from `A::default()` first, so an
    /// empty sequence still prints it. Other modes print one rendering plus a
    /// newline per object and nothing at all for an empty sequence.
    pub fn write<A, I>(&mut self, objects: I) -> Result<()>
    where
        A: FieldAccessor + Default,
        I: IntoIterator<Item = A>,
    {
        let source = self.format.template_source(&A::FORMATS);
        let template = Template::compile(&source)?;

        let headers = if self.format.is_table() {
            template.discover::<A>()?
        } else {
            Vec::new()
        };

        let mut body = String::new();
        let mut count = 0usize;
        for object in objects {
            let row = template.render(object)?;
            trace!(kind = A::KIND, row = %row, "rendered row");
            body.push_str(&row);
            body.push('\n');
            count += 1;
        }

        if self.format.is_table() {
            let mut table = TabWriter::new();
            if !headers.is_empty() {
                table.push_str(&header_line(&headers));
                table.push_str("\n");
            }
            table.push_str(&body);
            self.output.write_all(table.render().as_bytes())?;
        } else {
            self.output.write_all(body.as_bytes())?;
        }
        self.output.flush()?;

        debug!(kind = A::KIND, format = ?self.format, rows = count, "rendered objects");
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

/// The table header row: headers upper-cased and tab separated.
pub fn header_line(headers: &[String]) -> String {
    headers
        .iter()
        .map(|h| h.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::{Field, Formats};
    use crate::error::Error;
    use crate::table::{MIN_WIDTH, PADDING};
    use std::collections::BTreeMap;

    #[derive(Debug, Default, Clone)]
    struct Volume {
        name: String,
        driver: String,
        labels: BTreeMap<String, String>,
    }

    impl FieldAccessor for Volume {
        const KIND: &'static str = "volume";
        const FORMATS: Formats = Formats {
            table: "{{ Driver }}\t{{ Name }}",
            quiet: "{{ Name }}",
            raw: "name: {{ Name }}\ndriver: {{ Driver }}\n",
            raw_quiet: "name: {{ Name }}",
        };
        const PARAMETERIZED: &'static [&'static str] = &["Label"];

        fn field(&self, name: &str) -> Option<Field> {
            match name {
                "Name" => Some(Field::new("name", self.name.clone())),
                "Driver" if self.driver != "detached" => {
                    Some(Field::new("driver", self.driver.clone()))
                }
                _ => None,
            }
        }

        fn field_with(&self, name: &str, arg: &str) -> Option<Field> {
            match name {
                "Label" => Some(Field::new(
                    format!("label {}", arg),
                    self.labels.get(arg).cloned().unwrap_or_default(),
                )),
                _ => None,
            }
        }
    }

    fn volume(name: &str) -> Volume {
        Volume {
            name: name.into(),
            driver: "storageos".into(),
            labels: BTreeMap::new(),
        }
    }

    fn render(selector: &str, quiet: bool, volumes: Vec<Volume>) -> Result<String> {
        let mut out = Vec::new();
        RenderContext::new(&mut out, FormatSpec::resolve(selector, quiet)).write(volumes)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn cell(text: &str) -> String {
        format!("{:<width$}", text, width = MIN_WIDTH.max(text.len() + PADDING))
    }

    #[test]
    fn table_writes_upper_cased_header_then_rows() {
        let out = render("table", false, vec![volume("db"), volume("logs")]).unwrap();
        let expected = format!(
            "{}NAME\n{}db\n{}logs\n",
            cell("DRIVER"),
            cell("storageos"),
            cell("storageos")
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn empty_table_still_prints_header() {
        let out = render("table", false, vec![]).unwrap();
        assert_eq!(out, format!("{}NAME\n", cell("DRIVER")));
    }

    #[test]
    fn header_follows_the_template_not_the_data() {
        let mut labelled = volume("db");
        labelled.labels.insert("tier".into(), "gold".into());

        let with_data = render(
            r#"table {{ Name }}\t{{ Label("tier") }}"#,
            false,
            vec![labelled, volume("plain")],
        )
        .unwrap();
        let without_data = render(r#"table {{ Name }}\t{{ Label("tier") }}"#, false, vec![]).unwrap();

        let header = with_data.lines().next().unwrap();
        assert_eq!(header, format!("{}LABEL TIER", cell("NAME")));
        assert_eq!(without_data.lines().next().unwrap(), header);
        assert!(with_data.contains("gold"));
    }

    #[test]
    fn quiet_prints_one_line_per_object() {
        let out = render("table", true, vec![volume("a"), volume("b"), volume("c")]).unwrap();
        assert_eq!(out, "a\nb\nc\n");
    }

    #[test]
    fn non_table_formats_print_nothing_for_empty_input() {
        assert_eq!(render("table", true, vec![]).unwrap(), "");
        assert_eq!(render("raw", false, vec![]).unwrap(), "");
        assert_eq!(render("{{ Name }}", false, vec![]).unwrap(), "");
    }

    #[test]
    fn raw_dumps_key_values() {
        let out = render("raw", false, vec![volume("db")]).unwrap();
        assert_eq!(out, "name: db\ndriver: storageos\n\n");

        let quiet = render("raw", true, vec![volume("db")]).unwrap();
        assert_eq!(quiet, "name: db\n");
    }

    #[test]
    fn custom_template_is_not_aligned() {
        let out = render(r"{{ Name }}\t{{ Driver }}", false, vec![volume("db")]).unwrap();
        assert_eq!(out, "db\tstorageos\n");
    }

    #[test]
    fn unknown_field_fails_without_output() {
        let mut out = Vec::new();
        let result = RenderContext::new(&mut out, FormatSpec::resolve("{{ Nmae }}", false))
            .write(vec![volume("a"), volume("b")]);

        assert!(matches!(result, Err(Error::TemplateExecution(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn table_row_failure_writes_nothing() {
        let mut broken = volume("b");
        broken.driver = "detached".into();

        let mut out = Vec::new();
        let result = RenderContext::new(&mut out, FormatSpec::resolve("table", false))
            .write(vec![volume("a"), broken]);

        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn syntax_error_is_reported_before_rendering() {
        let result = render("{{ Name", false, vec![volume("a")]);
        assert!(matches!(result, Err(Error::TemplateSyntax(_))));
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let volumes = vec![volume("db"), volume("logs")];
        let first = render("table", false, volumes.clone()).unwrap();
        let second = render("table", false, volumes).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn header_line_upper_cases_and_joins() {
        let headers = vec!["name".to_string(), "b c".to_string()];
        assert_eq!(header_line(&headers), "NAME\tB C");
    }

    #[test]
    fn into_inner_returns_sink() {
        let mut ctx = RenderContext::new(Vec::new(), FormatSpec::Quiet);
        assert_eq!(ctx.format(), &FormatSpec::Quiet);
        ctx.write(vec![volume("a")]).unwrap();
        assert_eq!(ctx.into_inner(), b"a\n");
    }
}
