//! `${VAR}` and `${VAR:-default}` expansion for descriptor strings.
//!
//! Bare `$VAR` is left alone so that literal dollar signs in titles and
//! descriptions survive.

use crate::ConfigError;

/// Variable that could not be resolved.
struct Unset {
    name: String,
}

/// Expand environment variable references in `value`.
///
/// `field` names the descriptor field for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| -> Result<Option<String>, Unset> {
        std::env::var(name).map(Some).map_err(|_| Unset {
            name: name.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.name),
    })
}

/// Expand `value` in place.
pub(crate) fn expand_in_place(value: &mut String, field: &str) -> Result<(), ConfigError> {
    *value = expand_env(value, field)?;
    Ok(())
}
