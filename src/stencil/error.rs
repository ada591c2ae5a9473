use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The format string does not compile. Raised before any output is written.
    #[error("Template parsing error: {0}")]
    TemplateSyntax(#[source] minijinja::Error),

    /// A field lookup or filter failed while rendering one object.
    #[error("Template execution error: {0}")]
    TemplateExecution(#[source] minijinja::Error),

    /// One or more references could not be fetched during inspect.
    #[error("{0}")]
    Fetch(FetchErrors),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A reference that failed to resolve, together with the reason.
#[derive(Debug)]
pub struct FetchFailure {
    pub reference: String,
    pub cause: Box<dyn StdError + Send + Sync>,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.reference, self.cause)
    }
}

/// Every fetch failure of one inspect call, in input order.
#[derive(Debug, Default)]
pub struct FetchErrors {
    failures: Vec<FetchFailure>,
}

impl FetchErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, reference: impl Into<String>, cause: Box<dyn StdError + Send + Sync>) {
        self.failures.push(FetchFailure {
            reference: reference.into(),
            cause,
        });
    }

    pub fn failures(&self) -> &[FetchFailure] {
        &self.failures
    }

    /// The references that failed, in the order they were requested.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|f| f.reference.as_str())
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for FetchErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl StdError for FetchErrors {}
