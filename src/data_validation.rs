use crate::model::UserRegistryError;

/// A field counts as missing when the key is absent or the value is empty,
/// matching how the register/login endpoints reject bad bodies.
pub fn require_field(field: Option<String>) -> Result<String, UserRegistryError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(UserRegistryError::MissingFields),
    }
}
