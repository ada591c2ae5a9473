use super::{Formattable, ID_HEADER};
use crate::model::User;
use stencil::{Field, FieldAccessor, Formats};

#[derive(Debug, Default)]
pub struct UserContext {
    user: User,
}

impl From<User> for UserContext {
    fn from(user: User) -> Self {
        Self { user }
    }
}

impl Formattable for User {
    type Context = UserContext;
}

impl FieldAccessor for UserContext {
    const KIND: &'static str = "user";
    const FORMATS: Formats = Formats {
        table: "{{ Username }}\t{{ Groups }}\t{{ Role }}",
        quiet: "{{ Username }}",
        raw: "username: {{ Username }}\ngroups: {{ Groups }}\nrole: {{ Role }}\n",
        raw_quiet: "username: {{ Username }}",
    };

    fn field(&self, name: &str) -> Option<Field> {
        let u = &self.user;
        let field = match name {
            "ID" => Field::new(ID_HEADER, u.id.clone()),
            "Username" => Field::new("USERNAME", u.username.clone()),
            "Groups" => Field::new("GROUPS", u.groups.join(",")),
            "Role" => Field::new("ROLE", u.role.clone()),
            _ => return None,
        };
        Some(field)
    }
}
