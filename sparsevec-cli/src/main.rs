mod common;
mod decode;
mod encode;

use anyhow::Result;
use clap::{Command, arg};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "sparsevec";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Encode and decode pgvector sparsevec values in the Postgres text and binary wire formats.")
        .subcommand_required(true)
        .arg(arg!(-c --config <config> "Path to a registry config file (TOML)").global(true))
        .arg(arg!(--"log-level" <level> "Log level, overridden by RUST_LOG").global(true))
        .subcommand(encode::cli::create_encode_cli())
        .subcommand(decode::cli::create_decode_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // ENCODE
        //
        Some((encode::cli::ENCODE_CMD, matches)) => {
            let config = common::load_config(matches)?;
            common::init_logging(matches, &config)?;
            encode::handlers::run_encode(matches, &config)?;
        }

        //
        // DECODE
        //
        Some((decode::cli::DECODE_CMD, matches)) => {
            let config = common::load_config(matches)?;
            common::init_logging(matches, &config)?;
            decode::handlers::run_decode(matches, &config)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_global_args_reach_subcommand() {
        let matches = build_parser()
            .try_get_matches_from([
                "sparsevec",
                "decode",
                "--format",
                "text",
                "-c",
                "registry.toml",
                "{1:1}/2",
            ])
            .unwrap();

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, decode::cli::DECODE_CMD);
        assert_eq!(sub.get_one::<String>("config").map(String::as_str), Some("registry.toml"));
        assert_eq!(sub.get_one::<String>("format").map(String::as_str), Some("text"));
        assert!(!sub.get_flag("json"));
    }
}
