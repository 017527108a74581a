use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use garden::{
    detect_and_convert, encode, logic::url::DEFAULT_PLANNER_URL, parse, planner_link,
    schema::ModelDoc, ParsedGardenData,
};
use log::info;
use utoipa::OpenApi;

/// Decode, upgrade and re-encode garden planner save codes.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a save code or planner link into the garden model (JSON).
    Decode {
        /// Bare save code, or a link with a `layout` query parameter.
        input: String,
    },
    /// Upgrade a legacy save code to the current version.
    Convert { code: String },
    /// Encode a garden model (JSON) back into a save code.
    Encode {
        /// JSON file to read; standard input when omitted.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
    /// Produce a planner link for a save code or link.
    Link {
        input: String,
        /// Planner base URL the link points at.
        #[arg(long, env = "GARDEN_PLANNER_URL", default_value = DEFAULT_PLANNER_URL)]
        planner_url: String,
    },
    /// Print the OpenAPI schema of the garden model.
    Schema,
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    match cli.command {
        Command::Decode { input } => {
            let garden = parse(&input)?;
            info!(
                "decoded {}x{} garden with {} plants",
                garden.dimensions.rows, garden.dimensions.columns, garden.crop_summary.total_plants
            );
            Ok(to_json(&garden, cli.pretty)?)
        }
        Command::Convert { code } => {
            let converted = detect_and_convert(&code)?;
            info!("converted from {}", converted.original_version);
            Ok(to_json(&converted, cli.pretty)?)
        }
        Command::Encode { file } => {
            let json = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("reading standard input")?;
                    buf
                }
            };
            let garden: ParsedGardenData =
                serde_json::from_str(&json).context("parsing garden JSON")?;
            Ok(encode(&garden)?)
        }
        Command::Link { input, planner_url } => {
            let garden = parse(&input)?;
            Ok(planner_link(&garden, &planner_url)?)
        }
        Command::Schema => Ok(to_json(&ModelDoc::openapi(), cli.pretty)?),
    }
}

fn main() -> std::process::ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(output) => {
            println!("{output}");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::ExitCode::FAILURE
        }
    }
}
