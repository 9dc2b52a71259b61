//! Rust Params CLI Library
//!
//! This crate provides the command-line interface for rust-params. It loads a
//! parameter catalog, takes values from `-p key=value` flags, prompts for the
//! rest on the terminal, and prints the resolved values.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`prompt`]: Line-based terminal prompter with re-ask on rejection
//! - [`shaping`]: Coloured question rendering for capable terminals
//! - [`suggestions`]: "Did you mean" hints for unknown parameter names
//! - [`output`]: `name=value` and YAML output of resolved values
//!
//! # Examples
//!
//! ```bash
//! # Prompt for every parameter in the default catalog
//! rp
//!
//! # Supply some values, prompt for the rest
//! rp -p host=localhost host port
//!
//! # Never prompt, print YAML
//! rp --no-interaction --yaml
//! ```

pub mod cli_args;
pub mod output;
pub mod prompt;
pub mod shaping;
pub mod suggestions;
