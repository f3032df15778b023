//! Clap command definition and config resolution for the server binary.

use std::path::{Path, PathBuf};

use clap::{value_parser, Arg, ArgMatches, Command};
use pokedex_core::Result;
use pokedex_server::ServerConfig;

/// Build the command-line interface.
pub fn build_cli() -> Command {
    Command::new("pokedex-server")
        .about("HTTP server for the in-memory Pokedex catalog")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Config file (default: ./pokedex.toml if present)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .help("Interface to bind (default: 127.0.0.1)"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .short('p')
                .help("Port to bind (default: 8000)")
                .value_parser(value_parser!(u16)),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .short('d')
                .help("Seed file, a JSON array of records (default: pokemon.json)")
                .value_parser(value_parser!(PathBuf)),
        )
}

/// Resolve the effective config: file values, then flag overrides.
pub fn resolve_config(matches: &ArgMatches, cwd: &Path) -> Result<ServerConfig> {
    let explicit = matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
    let mut config = ServerConfig::load(explicit, cwd)?;

    if let Some(host) = matches.get_one::<String>("host") {
        config.host = host.clone();
    }
    if let Some(port) = matches.get_one::<u16>("port") {
        config.port = *port;
    }
    if let Some(data) = matches.get_one::<PathBuf>("data") {
        config.data_file = data.clone();
    }
    Ok(config)
}
