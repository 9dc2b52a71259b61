//! Rust Params Core Library
//!
//! This crate resolves the runtime value of named command parameters that can
//! be supplied on the command line, taken from a default, or collected by
//! prompting the user, applying the same validation and normalization
//! whichever source the value came from.
//!
//! # Key Features
//!
//! - **Parameter Catalog**: Declarative parameter definitions, loadable from YAML
//! - **Option Store**: Session storage for supplied and resolved values
//! - **Resolver**: Single entry point combining stored values, defaults and prompts
//! - **Array Mode**: Collect any number of answers until an empty reply
//! - **Question Shaping**: Pluggable presentation of questions per environment
//!
//! # Examples
//!
//! ```
//! use rust_params_core::catalog::ParameterCatalog;
//! use rust_params_core::checks;
//! use rust_params_core::definitions::ParameterDefinition;
//! use rust_params_core::prompter::ScriptedPrompter;
//! use rust_params_core::question::Question;
//! use rust_params_core::resolver::ParameterResolver;
//! use rust_params_core::shaping::PlainShaper;
//! use rust_params_core::store::MemoryOptionStore;
//! use rust_params_core::value::Value;
//!
//! let port = Question::new("Port for {name}")
//!     .with_validator(checks::numeric())
//!     .with_normalizer(checks::to_integer());
//! let catalog = ParameterCatalog::from_definitions([
//!     ParameterDefinition::new("port", port).required(true),
//! ])?;
//!
//! let mut resolver = ParameterResolver::new(
//!     MemoryOptionStore::new(true),
//!     catalog,
//!     ScriptedPrompter::from_strings(["8080"]),
//!     Box::new(PlainShaper),
//! );
//!
//! assert_eq!(resolver.resolve("port")?, Some(Value::Integer(8080)));
//! # Ok::<(), rust_params_core::error::Error>(())
//! ```

pub mod catalog;
pub mod checks;
pub mod config;
pub mod definitions;
pub mod error;
pub mod file_handling;
pub mod prompter;
pub mod question;
pub mod resolver;
pub mod shaping;
pub mod store;
pub mod value;
