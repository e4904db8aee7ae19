use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CoreErrorKind {
    NotFound,
    Validation,
    Conflict,
    Forbidden,
    Unauthorized,
    Database,
}

#[derive(Debug)]
pub struct CoreError {
    kind: CoreErrorKind,
    message: String,
    fields: Option<BTreeMap<String, String>>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl CoreError {
    pub fn new(kind: CoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            fields: None,
            source: None,
        }
    }

    /// Not-found error whose message names the entity and the requested id,
    /// e.g. `No Branch with id 7`.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        let entity = entity.into();
        let id = id.into();
        let message = format!("No {} with id {}", entity, id);

        let mut fields = BTreeMap::new();
        fields.insert("entity".to_string(), entity);
        fields.insert("id".to_string(), id);

        Self {
            kind: CoreErrorKind::NotFound,
            message,
            fields: Some(fields),
            source: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(CoreErrorKind::Validation, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(CoreErrorKind::Conflict, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(CoreErrorKind::Forbidden, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(CoreErrorKind::Unauthorized, message)
    }

    /// Data-layer failure while running `operation`.
    pub fn database(operation: &str, err: sea_orm::DbErr) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("operation".to_string(), operation.to_string());

        Self::new(
            CoreErrorKind::Database,
            format!("Database error during {}: {}", operation, err),
        )
        .with_fields(fields)
        .with_source(err)
    }

    pub fn with_fields(mut self, fields: BTreeMap<String, String>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> CoreErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn fields(&self) -> Option<&BTreeMap<String, String>> {
        self.fields.as_ref()
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl StdError for CoreError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_contains_entity_and_id() {
        let err = CoreError::not_found("Branch", "42");
        assert_eq!(err.kind(), CoreErrorKind::NotFound);
        assert_eq!(err.message(), "No Branch with id 42");

        let fields = err.fields().expect("fields");
        assert_eq!(fields.get("entity").map(String::as_str), Some("Branch"));
        assert_eq!(fields.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn db_errors_keep_their_source() {
        let err = CoreError::database(
            "branch_reps::insert",
            sea_orm::DbErr::Custom("disk full".to_string()),
        );
        assert_eq!(err.kind(), CoreErrorKind::Database);
        assert!(err.message().contains("branch_reps::insert"));
        assert!(err.message().contains("disk full"));
        assert!(StdError::source(&err).is_some());
    }
}
