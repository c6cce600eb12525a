use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use whad_inspect::{decode_frame, encode_json, list_kinds, render, InspectConfig};
use whad_proto::Domain;

#[derive(Parser, Debug)]
#[command(name = "whad-inspect", about = "Decode and build WHAD protocol frames")]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode hex frames and print them as JSON.
    Decode {
        #[arg(required = true)]
        frames: Vec<String>,
    },
    /// Build a frame from a message JSON document and print it as hex.
    Encode { json: String },
    /// List every message type the dispatcher knows.
    Kinds {
        #[arg(long)]
        domain: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("whad-inspect error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = InspectConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Decode { frames } => {
            for frame in frames {
                let decoded = decode_frame(&frame, &config)?;
                println!("{}", render(&decoded, &config)?);
            }
        }
        Command::Encode { json } => {
            println!("{}", encode_json(&json)?);
        }
        Command::Kinds { domain } => {
            let domain = domain
                .map(|name| {
                    Domain::from_name(&name).ok_or_else(|| anyhow!("unknown domain '{name}'"))
                })
                .transpose()?;
            println!("{}", render(&list_kinds(domain), &config)?);
        }
    }
    Ok(())
}
