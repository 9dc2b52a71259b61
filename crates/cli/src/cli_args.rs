//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::Parser;

use crate::prompt::DEFAULT_MAX_ATTEMPTS;

/// Command-line arguments for the rust-params CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use rust_params_cli::cli_args::Args;
///
/// let args = Args::parse_from(["rp", "-p", "port=8080", "port"]);
/// assert_eq!(args.names, vec!["port".to_string()]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Path to the parameter catalog YAML.
    ///
    /// If not provided, `$RUST_PARAMS_CATALOG` is used, falling back to
    /// `~/.rust-params/parameters.yml`.
    #[arg(long, short = 'c')]
    pub catalog_path: Option<String>,

    /// Parameter values in the format key=value.
    ///
    /// Multiple values can be provided with repeated `-p` flags; repeating a
    /// multi-value parameter adds another item.
    ///
    /// # Examples
    /// ```bash
    /// rp -p environment=prod -p tags=web -p tags=eu
    /// ```
    #[arg(long = "param", short = 'p', action = clap::ArgAction::Append)]
    pub parameters: Vec<String>,

    /// Never prompt; missing values fall back to defaults.
    #[arg(long, short = 'n', action)]
    pub no_interaction: bool,

    /// Disable coloured prompts.
    #[arg(long, action)]
    pub no_color: bool,

    /// How many times a rejected answer is asked again (0 for no limit).
    #[arg(long, short = 'a', default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Print the resolved values as YAML instead of `name=value` lines.
    #[arg(long, short = 'y', action)]
    pub yaml: bool,

    /// Names of the parameters to resolve, in order.
    ///
    /// If not provided, every parameter of the catalog is resolved.
    pub names: Vec<String>,
}

impl Args {
    /// Prompting needs both permission and a terminal to read from.
    #[must_use]
    pub fn is_interactive(&self, stdin_is_terminal: bool) -> bool {
        !self.no_interaction && stdin_is_terminal
    }

    #[must_use]
    pub fn attempts_limit(&self) -> Option<usize> {
        (self.max_attempts > 0).then_some(self.max_attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["rp"]);

        assert!(args.catalog_path.is_none());
        assert!(args.parameters.is_empty());
        assert!(!args.no_interaction);
        assert!(!args.no_color);
        assert_eq!(args.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(!args.yaml);
        assert!(args.names.is_empty());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from([
            "rp",
            "-c",
            "/custom/parameters.yml",
            "-n",
            "-a",
            "5",
            "-y",
        ]);

        assert_eq!(
            args.catalog_path,
            Some("/custom/parameters.yml".to_string())
        );
        assert!(args.no_interaction);
        assert_eq!(args.max_attempts, 5);
        assert!(args.yaml);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "rp",
            "--catalog-path",
            "/custom/parameters.yml",
            "--no-interaction",
            "--no-color",
            "--max-attempts",
            "0",
            "--yaml",
        ]);

        assert_eq!(
            args.catalog_path,
            Some("/custom/parameters.yml".to_string())
        );
        assert!(args.no_interaction);
        assert!(args.no_color);
        assert_eq!(args.attempts_limit(), None);
        assert!(args.yaml);
    }

    #[test]
    fn test_args_named_parameters_and_names() {
        let args = Args::parse_from([
            "rp",
            "-p",
            "host=localhost",
            "--param",
            "tags=a",
            "host",
            "tags",
        ]);

        assert_eq!(args.parameters, vec!["host=localhost", "tags=a"]);
        assert_eq!(args.names, vec!["host", "tags"]);
    }

    #[test]
    fn test_is_interactive() {
        let args = Args::parse_from(["rp"]);
        assert!(args.is_interactive(true));
        assert!(!args.is_interactive(false));

        let args = Args::parse_from(["rp", "-n"]);
        assert!(!args.is_interactive(true));
    }

    #[test]
    fn test_attempts_limit() {
        let args = Args::parse_from(["rp"]);
        assert_eq!(args.attempts_limit(), Some(DEFAULT_MAX_ATTEMPTS));
    }
}
