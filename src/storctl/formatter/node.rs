use super::{join_labels, label_field, Formattable, ID_HEADER, LABELS_HEADER, NAME_HEADER};
use crate::model::Node;
use stencil::{human_size, Field, FieldAccessor, Formats};

#[derive(Debug, Default)]
pub struct NodeContext {
    node: Node,
}

impl From<Node> for NodeContext {
    fn from(node: Node) -> Self {
        Self { node }
    }
}

impl Formattable for Node {
    type Context = NodeContext;
}

impl FieldAccessor for NodeContext {
    const KIND: &'static str = "node";
    const FORMATS: Formats = Formats {
        table: "{{ Name }}\t{{ Address }}\t{{ Health }}\t{{ Scheduler }}\t{{ Capacity }}",
        quiet: "{{ Name }}",
        raw: "name: {{ Name }}\naddress: {{ Address }}\nhealth: {{ Health }}\n",
        raw_quiet: "name: {{ Name }}",
    };
    const PARAMETERIZED: &'static [&'static str] = &["Label"];

    fn field(&self, name: &str) -> Option<Field> {
        let n = &self.node;
        let field = match name {
            "ID" => Field::new(ID_HEADER, n.id.clone()),
            "Name" => Field::new(NAME_HEADER, n.name.clone()),
            "Address" => Field::new("ADDRESS", n.address.clone()),
            "Health" => Field::new("HEALTH", n.health.clone()),
            "Scheduler" => Field::new("SCHEDULER", n.scheduler.to_string()),
            "Cordoned" => Field::new("CORDONED", n.cordoned.to_string()),
            "Labels" => Field::new(LABELS_HEADER, join_labels(&n.labels)),
            "Capacity" => Field::new("CAPACITY", human_size(n.capacity.total as f64)),
            "Free" => Field::new("FREE", human_size(n.capacity.free as f64)),
            "Version" => Field::new("VERSION", n.version.clone()),
            _ => return None,
        };
        Some(field)
    }

    fn field_with(&self, name: &str, arg: &str) -> Option<Field> {
        match name {
            "Label" => Some(label_field(&self.node.labels, arg)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::write;
    use crate::model::ClusterSnapshot;
    use crate::store::memory::fixtures::sample_cluster;
    use stencil::FormatSpec;

    fn nodes() -> Vec<Node> {
        let ClusterSnapshot { nodes, .. } = sample_cluster();
        nodes
    }

    fn render(selector: &str, quiet: bool) -> String {
        let mut out = Vec::new();
        write(&mut out, FormatSpec::resolve(selector, quiet), nodes()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn table_has_canonical_columns() {
        let out = render("table", false);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0].split_whitespace().collect::<Vec<_>>(),
            vec!["NAME", "ADDRESS", "HEALTH", "SCHEDULER", "CAPACITY"]
        );
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            vec!["storage-1", "10.0.0.1", "healthy", "true", "100GB"]
        );
        assert_eq!(
            lines[2].split_whitespace().collect::<Vec<_>>(),
            vec!["storage-2", "10.0.0.2", "unhealthy", "false", "0B"]
        );
    }

    #[test]
    fn quiet_lists_names() {
        assert_eq!(render("table", true), "storage-1\nstorage-2\n");
    }

    #[test]
    fn raw_dump() {
        let out = render("raw", false);
        assert!(out.starts_with("name: storage-1\naddress: 10.0.0.1\nhealth: healthy\n\n"));
    }

    #[test]
    fn label_column_header_comes_from_key() {
        let out = render(r#"table {{ Name }}\t{{ Label("storageos.com/zone") }}"#, false);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("NAME"));
        assert!(lines[0].ends_with("COM/ZONE"));
        assert!(lines[1].ends_with("eu-1a"));
        assert_eq!(lines[2].trim_end(), "storage-2");
    }

    #[test]
    fn every_field_resolves() {
        let out = render(
            "{{ ID }} {{ Cordoned }} {{ Labels }} {{ Free }} {{ Version }}",
            false,
        );
        assert_eq!(
            out,
            "n1 false storageos.com/zone=eu-1a,tier=gold 40GB 1.2.0\nn2 true  0B 1.2.0\n"
        );
    }
}
