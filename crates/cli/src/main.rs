use std::env;
use std::io::{stdin, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use rust_params_core::config::{self, CATALOG_PATH_ENV};
use rust_params_core::error::{Error, Result};
use rust_params_core::file_handling;
use rust_params_core::resolver::ParameterResolver;
use rust_params_core::store::MemoryOptionStore;

use rust_params_cli::cli_args::Args;
use rust_params_cli::output;
use rust_params_cli::prompt::TerminalPrompter;
use rust_params_cli::shaping::{select_shaper, supports_styling};
use rust_params_cli::suggestions::closest_parameter;

fn execute() -> Result<ExitCode> {
    let args = Args::parse();

    let env_catalog_path = env::var(CATALOG_PATH_ENV).ok();
    let catalog_path =
        config::get_catalog_path(args.catalog_path.as_deref(), env_catalog_path.as_deref());
    debug!("Catalog path: `{}`", catalog_path);

    let catalog = file_handling::get_parameter_catalog(&catalog_path)?;

    let interactive = args.is_interactive(stdin().is_terminal());
    info!("Interactive session: {}", interactive);

    let store = MemoryOptionStore::from_assignments(&args.parameters, &catalog, interactive)?;

    let names: Vec<String> = if args.names.is_empty() {
        catalog.names().map(ToString::to_string).collect()
    } else {
        args.names.clone()
    };

    // Fail on unknown names before asking anything
    if let Some(unknown) = names.iter().find(|name| catalog.lookup(name).is_none()) {
        eprintln!("{}", Error::UnknownParameter(unknown.clone()));
        if let Some(suggestion) = closest_parameter(&catalog, unknown) {
            eprintln!("Did you mean `{suggestion}`?");
        }
        return Ok(ExitCode::FAILURE);
    }

    let styled = supports_styling(args.no_color);
    let prompter = TerminalPrompter::stdio()
        .with_max_attempts(args.attempts_limit())
        .with_styling(styled);

    let mut resolver = ParameterResolver::new(store, catalog, prompter, select_shaper(styled));
    let resolved = resolver.resolve_all(names.iter().map(String::as_str))?;

    let rendered = if args.yaml {
        output::format_yaml(&resolved)?
    } else {
        output::format_lines(&resolved)
    };
    print!("{rendered}");

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
