use super::{join_labels, label_field, Formattable, ID_HEADER, LABELS_HEADER, NAME_HEADER};
use crate::model::Namespace;
use stencil::{Field, FieldAccessor, Formats};

#[derive(Debug, Default)]
pub struct NamespaceContext {
    namespace: Namespace,
}

impl From<Namespace> for NamespaceContext {
    fn from(namespace: Namespace) -> Self {
        Self { namespace }
    }
}

impl Formattable for Namespace {
    type Context = NamespaceContext;
}

impl FieldAccessor for NamespaceContext {
    const KIND: &'static str = "namespace";
    const FORMATS: Formats = Formats {
        table: "{{ Name }}\t{{ DisplayName }}\t{{ Description }}",
        quiet: "{{ Name }}",
        raw: "name: {{ Name }}\ndisplay name: {{ DisplayName }}\n",
        raw_quiet: "name: {{ Name }}",
    };
    const PARAMETERIZED: &'static [&'static str] = &["Label"];

    fn field(&self, name: &str) -> Option<Field> {
        let ns = &self.namespace;
        let field = match name {
            "ID" => Field::new(ID_HEADER, ns.id.clone()),
            "Name" => Field::new(NAME_HEADER, ns.name.clone()),
            "DisplayName" => Field::new("DISPLAY NAME", ns.display_name.clone()),
            "Description" => Field::new("DESCRIPTION", ns.description.clone()),
            "Labels" => Field::new(LABELS_HEADER, join_labels(&ns.labels)),
            _ => return None,
        };
        Some(field)
    }

    fn field_with(&self, name: &str, arg: &str) -> Option<Field> {
        match name {
            "Label" => Some(label_field(&self.namespace.labels, arg)),
            _ => None,
        }
    }
}
