//! Configuration path utilities for rust-params.
//!
//! This module resolves the location of the parameter catalog file and
//! expands shell variables like `~` in paths.

/// Default path for the parameter catalog file
const DEFAULT_CATALOG_PATH: &str = "~/.rust-params/parameters.yml";

/// Environment variable that overrides the default catalog path
pub const CATALOG_PATH_ENV: &str = "RUST_PARAMS_CATALOG";

/// Resolves the catalog file path.
///
/// An explicit path wins over the environment override, which wins over the
/// default. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use rust_params_core::config::get_catalog_path;
///
/// let custom_path = get_catalog_path(Some("/path/to/parameters.yml"), None);
/// assert_eq!(custom_path, "/path/to/parameters.yml");
/// ```
#[must_use]
pub fn get_catalog_path(catalog_path_arg: Option<&str>, env_override: Option<&str>) -> String {
    let catalog_path = catalog_path_arg
        .or(env_override)
        .unwrap_or(DEFAULT_CATALOG_PATH);

    shellexpand::tilde(catalog_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_catalog_path_with_custom_path() {
        let result = get_catalog_path(Some("/custom/path/parameters.yml"), Some("/env.yml"));
        assert_eq!(result, "/custom/path/parameters.yml");
    }

    #[test]
    fn test_get_catalog_path_with_env_override() {
        let result = get_catalog_path(None, Some("/env/parameters.yml"));
        assert_eq!(result, "/env/parameters.yml");
    }

    #[test]
    fn test_get_catalog_path_with_none() {
        let result = get_catalog_path(None, None);
        // Should expand the tilde in the default path
        assert!(result.contains("parameters.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_catalog_path_with_tilde() {
        let result = get_catalog_path(Some("~/my-parameters.yml"), None);
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-parameters.yml"));
    }
}
