use crate::accessor::{Field, FieldAccessor};
use crate::compat;
use crate::error::{Error, Result};
use crate::funcs;
use crate::header::HeaderTracker;
use minijinja::value::{Object, Value};
use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

const TEMPLATE_NAME: &str = "format";

/// A compiled format string.
///
/// Compilation binds the function library and switches minijinja to strict
/// undefined handling, so a misspelled field fails the render instead of
/// printing an empty cell.
#[derive(Debug)]
pub struct Template {
    env: Environment<'static>,
}

impl Template {
    /// Compiles `source`, failing with [`Error::TemplateSyntax`] if it is malformed.
    pub fn compile(source: &str) -> Result<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        funcs::register(&mut env);
        env.add_template_owned(TEMPLATE_NAME, compat::normalize(source))
            .map_err(Error::TemplateSyntax)?;
        Ok(Self { env })
    }

    /// Evaluates the template against `A::default()` and returns the headers of
    /// every field it touched, in first-use order. The output is discarded.
    pub fn discover<A: FieldAccessor + Default>(&self) -> Result<Vec<String>> {
        let tracker = Arc::new(HeaderTracker::new());
        let context = ObjectContext {
            accessor: A::default(),
            headers: Some(Arc::clone(&tracker)),
        };
        self.execute(Value::from_object(context))?;

        let headers = tracker.headers();
        debug!(kind = A::KIND, headers = ?headers, "discovered table headers");
        Ok(headers)
    }

    /// Renders one object through its accessor. Header state is never touched.
    pub fn render<A: FieldAccessor>(&self, accessor: A) -> Result<String> {
        self.execute(Value::from_object(ObjectContext {
            accessor,
            headers: None,
        }))
    }

    /// Renders a serializable value directly; fields are addressed by their
    /// serialized names.
    pub fn render_value<S: Serialize>(&self, value: &S) -> Result<String> {
        self.execute(Value::from_serialize(value))
    }

    fn execute(&self, context: Value) -> Result<String> {
        let template = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(Error::TemplateExecution)?;
        template.render(context).map_err(Error::TemplateExecution)
    }
}

/// Wraps one accessor for the template engine. During discovery it carries the
/// tracker that collects headers; during rendering it does not.
#[derive(Debug)]
struct ObjectContext<A> {
    accessor: A,
    headers: Option<Arc<HeaderTracker>>,
}

impl<A: FieldAccessor> ObjectContext<A> {
    fn emit(&self, field: Field) -> String {
        if let Some(headers) = &self.headers {
            headers.add_header(&field.header);
        }
        field.value
    }
}

impl<A: FieldAccessor> Object for ObjectContext<A> {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        let name = key.as_str()?;

        if A::PARAMETERIZED.contains(&name) {
            let this = Arc::clone(self);
            let method = name.to_string();
            return Some(Value::from_function(
                move |arg: String| -> std::result::Result<String, minijinja::Error> {
                    let field = this.accessor.field_with(&method, &arg).ok_or_else(|| {
                        minijinja::Error::new(
                            ErrorKind::UnknownMethod,
                            format!("{} has no field {}({:?})", A::KIND, method, arg),
                        )
                    })?;
                    Ok(this.emit(field))
                },
            ));
        }

        let field = self.accessor.field(name)?;
        Some(Value::from(self.emit(field)))
    }
}
