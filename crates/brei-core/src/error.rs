use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Recipe not found: {0}")]
    NotFound(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Recipe name cannot be empty")]
    EmptyName,

    #[error("Recipe already exists: {0}")]
    DuplicateName(String),

    #[error("Recipe needs at least one ingredient with a positive quantity")]
    NoIngredients,
}

impl ValidationError {
    /// Short machine-readable kind, used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "EmptyName",
            ValidationError::DuplicateName(_) => "DuplicateName",
            ValidationError::NoIngredients => "NoIngredients",
        }
    }

    /// Message shown to the person filling in the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "Bitte gib einen Namen für den Brei ein",
            ValidationError::DuplicateName(_) => "Ein Rezept mit diesem Namen existiert bereits",
            ValidationError::NoIngredients => "Bitte füge mindestens eine Zutat hinzu",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StorageError {
    /// Message shown when recipes could not be written.
    pub fn user_message(&self) -> &'static str {
        "Fehler beim Speichern der Rezepte"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_wraps_into_core_error() {
        let err: CoreError = ValidationError::DuplicateName("Haferbrei".to_string()).into();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::DuplicateName(ref n)) if n == "Haferbrei"
        ));
        assert_eq!(
            err.to_string(),
            "Validation error: Recipe already exists: Haferbrei"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ValidationError::EmptyName.kind(), "EmptyName");
        assert_eq!(ValidationError::NoIngredients.kind(), "NoIngredients");
        assert_eq!(
            ValidationError::DuplicateName(String::new()).kind(),
            "DuplicateName"
        );
    }
}
