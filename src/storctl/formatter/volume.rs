use super::{
    join_labels, label_field, Formattable, ID_HEADER, LABELS_HEADER, NAMESPACE_HEADER, NAME_HEADER,
};
use crate::model::Volume;
use stencil::{human_size, Field, FieldAccessor, Formats};

#[derive(Debug, Default)]
pub struct VolumeContext {
    volume: Volume,
}

impl From<Volume> for VolumeContext {
    fn from(volume: Volume) -> Self {
        Self { volume }
    }
}

impl Formattable for Volume {
    type Context = VolumeContext;
}

impl FieldAccessor for VolumeContext {
    const KIND: &'static str = "volume";
    const FORMATS: Formats = Formats {
        table: "{{ Namespace }}\t{{ Name }}\t{{ Driver }}\t{{ Size }}\t{{ MountedBy }}",
        quiet: "{{ Name }}",
        raw: "name: {{ Name }}\nnamespace: {{ Namespace }}\ndriver: {{ Driver }}\n",
        raw_quiet: "name: {{ Name }}",
    };
    const PARAMETERIZED: &'static [&'static str] = &["Label"];

    fn field(&self, name: &str) -> Option<Field> {
        let v = &self.volume;
        let field = match name {
            "ID" => Field::new(ID_HEADER, v.id.clone()),
            "Name" => Field::new(NAME_HEADER, v.name.clone()),
            "Namespace" => Field::new(NAMESPACE_HEADER, v.namespace.clone()),
            "Driver" => Field::new("DRIVER", v.driver.clone()),
            "Size" => Field::new("SIZE", human_size(v.size as f64)),
            "Labels" => Field::new(LABELS_HEADER, join_labels(&v.labels)),
            // Only meaningful while mounted; a stale value is hidden.
            "MountedBy" => Field::new(
                "MOUNTED BY",
                if v.mounted {
                    v.mounted_by.clone()
                } else {
                    String::new()
                },
            ),
            "Status" => Field::new("STATUS", v.status.clone()),
            _ => return None,
        };
        Some(field)
    }

    fn field_with(&self, name: &str, arg: &str) -> Option<Field> {
        match name {
            "Label" => Some(label_field(&self.volume.labels, arg)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::write;
    use crate::store::memory::fixtures::sample_cluster;
    use stencil::{Error, FormatSpec};

    fn render(selector: &str, quiet: bool, volumes: Vec<Volume>) -> crate::error::Result<String> {
        let mut out = Vec::new();
        write(&mut out, FormatSpec::resolve(selector, quiet), volumes)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn table_has_canonical_columns() {
        let out = render("table", false, sample_cluster().volumes).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines[0].split_whitespace().collect::<Vec<_>>(),
            vec!["NAMESPACE", "NAME", "DRIVER", "SIZE", "MOUNTED", "BY"]
        );
        assert!(lines[0].ends_with("MOUNTED BY"));
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            vec!["default", "db", "storageos", "5GB", "storage-1"]
        );
        assert_eq!(
            lines[2].split_whitespace().collect::<Vec<_>>(),
            vec!["prod", "logs", "storageos", "1.5GB"]
        );
    }

    #[test]
    fn empty_table_prints_only_header() {
        let out = render("table", false, Vec::new()).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("NAMESPACE"));
    }

    #[test]
    fn quiet_lists_names() {
        let out = render("table", true, sample_cluster().volumes).unwrap();
        assert_eq!(out, "db\nlogs\n");
    }

    #[test]
    fn raw_quiet_shows_name_only() {
        let out = render("raw", true, sample_cluster().volumes).unwrap();
        assert_eq!(out, "name: db\nname: logs\n");
    }

    #[test]
    fn legacy_dotted_template() {
        let out = render(
            r#"{{.Name}} {{.Label "app"}} {{.Status}}"#,
            false,
            sample_cluster().volumes,
        )
        .unwrap();
        assert_eq!(out, "db postgres active\nlogs  pending\n");
    }

    #[test]
    fn dotted_label_header() {
        let out = render(r#"table {{ Label("a.b-c") }}"#, false, sample_cluster().volumes).unwrap();
        assert_eq!(out.lines().next(), Some("B C"));
    }

    #[test]
    fn misspelled_field_writes_nothing() {
        let err = render("{{ Nmae }}", false, sample_cluster().volumes).unwrap_err();
        assert!(matches!(
            err,
            crate::error::StorctlError::Render(Error::TemplateExecution(_))
        ));
    }
}
