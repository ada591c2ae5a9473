use super::{Formattable, ID_HEADER, NAMESPACE_HEADER};
use crate::model::Policy;
use stencil::{Field, FieldAccessor, Formats};

#[derive(Debug, Default)]
pub struct PolicyContext {
    policy: Policy,
}

impl From<Policy> for PolicyContext {
    fn from(policy: Policy) -> Self {
        Self { policy }
    }
}

impl Formattable for Policy {
    type Context = PolicyContext;
}

impl FieldAccessor for PolicyContext {
    const KIND: &'static str = "policy";
    const FORMATS: Formats = Formats {
        table: "{{ ID }}\t{{ User }}\t{{ Group }}\t{{ Namespace }}\t{{ ReadOnly }}",
        quiet: "{{ ID }}",
        raw: "id: {{ ID }}\nuser: {{ User }}\ngroup: {{ Group }}\nnamespace: {{ Namespace }}\nreadonly: {{ ReadOnly }}\n",
        raw_quiet: "id: {{ ID }}",
    };

    fn field(&self, name: &str) -> Option<Field> {
        let p = &self.policy;
        let field = match name {
            "ID" => Field::new(ID_HEADER, p.id.clone()),
            "User" => Field::new("USER", p.user.clone()),
            "Group" => Field::new("GROUP", p.group.clone()),
            "Namespace" => Field::new(NAMESPACE_HEADER, p.namespace.clone()),
            "ReadOnly" => Field::new("READONLY", p.readonly.to_string()),
            _ => return None,
        };
        Some(field)
    }
}
