use serde::Serialize;
use crate::enums::field_source::FieldSource;

/// A display value together with the schema location it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedField<T> {
    pub value: T,
    pub source: FieldSource,
}

impl<T> ResolvedField<T> {
    pub fn new(value: T, source: FieldSource) -> Self {
        Self { value, source }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == FieldSource::Fallback
    }
}
