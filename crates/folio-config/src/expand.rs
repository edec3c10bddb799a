//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// `field` names the config field for error messages.
///
/// # Errors
///
/// Returns `ConfigError::EnvVar` if a referenced variable without a default
/// is unset, or if the reference syntax is malformed.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(value, context)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: e.cause,
        })
}

/// Lookup context supporting `${VAR:-default}` fallback syntax.
///
/// shellexpand passes the braced content through verbatim, so the default
/// separator is split off here.
fn context(name: &str) -> Result<Option<String>, String> {
    let (var, default) = name
        .split_once(":-")
        .map_or((name, None), |(var, default)| (var, Some(default)));

    match std::env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => match default {
            Some(default) => Ok(Some(default.to_owned())),
            None => Err(format!("${{{var}}} not set")),
        },
        Err(e) => Err(e.to_string()),
    }
}
