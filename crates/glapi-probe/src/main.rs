// glapi-probe — load a GL implementation and report dispatch coverage
//
// Opens the library, resolves a RemapTable against its directory (or the
// compiled-in layout), fills a fresh table from the library's exports and
// prints what was found.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use log::{info, warn};

use glapi_common::abi::strip_api_prefix;
use glapi_common::accessor::{BuildAddressing, Dispatch};
use glapi_common::config::{DebugFlags, DispatchConfig};
use glapi_common::entries::ENTRIES;
use glapi_common::remap::RemapTable;
use glapi_common::sanity::{self, FunctionProblem};
use glapi_loader::{populate_table, ProducerLibrary};

#[derive(Parser, Debug)]
#[command(name = "glapi-probe", about = "Report which GL entry points a library implements")]
struct Cli {
    /// GL implementation library to load
    #[arg(long)]
    library: PathBuf,
    /// Symbol prefix of the implementation's exports (overrides GLAPI_SYMBOL_PREFIX)
    #[arg(long)]
    prefix: Option<String>,
    /// Debug flags: calls, remap, install, all (overrides GLAPI_DEBUG)
    #[arg(long)]
    debug: Option<String>,
    /// Print every entry point the library does not implement
    #[arg(long)]
    list_missing: bool,
    /// Entry point that must be implemented; may be repeated
    #[arg(long = "require", value_name = "NAME")]
    require: Vec<String>,
}

/// Command-line settings take precedence over the environment.
fn layer_config(mut config: DispatchConfig, cli: &Cli) -> DispatchConfig {
    if let Some(prefix) = &cli.prefix {
        config.symbol_prefix = prefix.clone();
    }
    if let Some(debug) = &cli.debug {
        config.debug = DebugFlags::parse(debug);
    }
    config
}

/// Required names may be given with or without the API prefix.
fn required_names(cli: &Cli) -> Vec<&str> {
    cli.require
        .iter()
        .map(|n| strip_api_prefix(n).unwrap_or(n.as_str()))
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let cli = Cli::parse();
    let config = layer_config(DispatchConfig::from_env(), &cli);
    info!("Probing {} (prefix {:?})", cli.library.display(), config.symbol_prefix);

    // SAFETY: the user asked for this library to be loaded.
    let library = unsafe { ProducerLibrary::load(&cli.library) }
        .with_context(|| format!("Failed to load {}", cli.library.display()))?;
    if library.directory().is_none() {
        warn!("{} exports no dispatch directory; assuming the built-in layout", cli.library.display());
    }

    let (remap, resolve): (Arc<RemapTable>, _) = library
        .resolve_remap(&config)
        .context("Failed to resolve remap table")?;
    let dispatch = Dispatch::<BuildAddressing>::for_loader(&remap)
        .context("Failed to set up dispatch")?
        .with_flags(config.debug);

    let mut table = library.create_table(&config);
    let populated = populate_table(&dispatch, &mut table, &library, &config.symbol_prefix);
    let coverage = sanity::coverage(&dispatch, &table, ENTRIES);

    println!("library:   {}", library.path().display());
    println!("table:     {} slots", table.len());
    println!(
        "remap:     {} resolved, {} unresolved",
        resolve.resolved,
        resolve.unresolved.len()
    );
    println!(
        "populate:  {} filled ({} via alias)",
        populated.filled(),
        populated.via_alias.len()
    );
    println!("coverage:  {}", coverage);

    if cli.list_missing {
        for name in &coverage.missing {
            println!("missing    {}{}", config.symbol_prefix, name);
        }
        for name in &coverage.unaddressable {
            println!("no slot    {}{}", config.symbol_prefix, name);
        }
    }

    let problems = sanity::validate_functions(&dispatch, &table, &required_names(&cli));
    for p in &problems {
        match p {
            FunctionProblem::Unknown(n) => eprintln!("required {}: not a GL entry point", n),
            FunctionProblem::NotInstalled(n) => eprintln!("required {}: not implemented", n),
        }
    }
    if !problems.is_empty() {
        bail!("{} required entry point(s) unavailable", problems.len());
    }

    Ok(())
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_repeated_require() {
        let cli = Cli::try_parse_from([
            "glapi-probe",
            "--library",
            "/usr/lib/libGL.so.1",
            "--require",
            "glBindTexture",
            "--require",
            "NewList",
            "--list-missing",
        ])
        .expect("valid command line");
        assert!(cli.list_missing);
        assert_eq!(required_names(&cli), vec!["BindTexture", "NewList"]);
    }

    #[test]
    fn test_library_is_required() {
        assert!(Cli::try_parse_from(["glapi-probe"]).is_err());
    }

    #[test]
    fn test_cli_overrides_environment() {
        let cli = Cli::try_parse_from([
            "glapi-probe",
            "--library",
            "libGL.so",
            "--prefix",
            "mgl",
            "--debug",
            "calls",
        ])
        .expect("valid command line");
        let env = DispatchConfig::from_vars([("GLAPI_SYMBOL_PREFIX", "xgl"), ("GLAPI_DEBUG", "all")]);
        let config = layer_config(env, &cli);
        assert_eq!(config.symbol_prefix, "mgl");
        assert_eq!(config.debug, DebugFlags::CALLS);
    }

    #[test]
    fn test_environment_kept_without_flags() {
        let cli = Cli::try_parse_from(["glapi-probe", "--library", "libGL.so"]).expect("valid");
        let env = DispatchConfig::from_vars([("GLAPI_SYMBOL_PREFIX", "xgl")]);
        assert_eq!(layer_config(env, &cli).symbol_prefix, "xgl");
    }
}
