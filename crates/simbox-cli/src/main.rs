// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! simbox CLI entrypoint.
//!
//! Loads a periodic simulation box from a JSON config (`--config`) or from
//! `--lx/--ly/--lz/--xy/--xz/--yz`, applies the requested operation and prints
//! a JSON report of the result to stdout. Logs go to stderr.
//!
//! # Usage
//! ```text
//! simbox [--config <file>] [--lx ..] [--verify] <inspect|scale|set-volume> [options]
//! ```
//!
//! The CLI exits with code `0` on success and non-zero on error.

// The CLI is expected to print to stdout.
#![allow(clippy::print_stdout)]

mod config;
mod report;

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use simbox_geom::{BoxConfig, BoxError, InMemoryMirror, MirroredBox, SimBox};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{BoxSource, ConfigService, FsConfigStore};
use crate::report::BoxReport;

#[derive(Parser, Debug)]
#[command(name = "simbox", author, version, about, long_about = None)]
struct Args {
    /// JSON box config (named parameters or a box matrix)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Edge length along x (overrides the config)
    #[arg(long, global = true, allow_hyphen_values = true)]
    lx: Option<f64>,

    /// Edge length along y (overrides the config)
    #[arg(long, global = true, allow_hyphen_values = true)]
    ly: Option<f64>,

    /// Edge length along z; 0 for a 2-D box (overrides the config)
    #[arg(long, global = true, allow_hyphen_values = true)]
    lz: Option<f64>,

    /// Tilt factor xy (overrides the config)
    #[arg(long, global = true, allow_hyphen_values = true)]
    xy: Option<f64>,

    /// Tilt factor xz (overrides the config)
    #[arg(long, global = true, allow_hyphen_values = true)]
    xz: Option<f64>,

    /// Tilt factor yz (overrides the config)
    #[arg(long, global = true, allow_hyphen_values = true)]
    yz: Option<f64>,

    /// Route the operation through an in-memory engine mirror and check it agrees
    #[arg(long, global = true)]
    verify: bool,

    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the box and its derived views
    Inspect,
    /// Multiply the edge lengths by a uniform or per-axis factor
    Scale {
        /// Uniform factor
        #[arg(long, conflicts_with = "factors", required_unless_present = "factors")]
        factor: Option<f64>,
        /// Per-axis factors, comma separated (sx,sy,sz)
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        factors: Option<Vec<f64>>,
    },
    /// Rescale uniformly to the given volume
    SetVolume {
        /// Target volume
        #[arg(long)]
        volume: f64,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let sim_box = load_box(&args)?;
    info!(%sim_box, "box loaded");

    let result = if args.verify {
        let mut mirrored = MirroredBox::new(sim_box, InMemoryMirror::new());
        apply(&args.command, |op| match op {
            Op::Scale(s) => mirrored.scale(s),
            Op::SetVolume(v) => mirrored.set_volume(v),
        })?;
        mirrored.verify().context("engine mirror disagrees with box")?;
        debug!(pushes = mirrored.mirror().pushes(), "mirror verified");
        *mirrored.sim_box()
    } else {
        let mut b = sim_box;
        apply(&args.command, |op| match op {
            Op::Scale(s) => b.scale(s),
            Op::SetVolume(v) => b.set_volume(v),
        })?;
        b
    };

    let report = BoxReport::from(&result);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level {level:?}"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn load_box(args: &Args) -> Result<SimBox> {
    let base = match &args.config {
        Some(path) => {
            let (store, key) = FsConfigStore::for_file(path);
            let source: BoxSource = ConfigService::new(store)
                .load(&key)
                .with_context(|| format!("failed to load box config {}", path.display()))?;
            Some(source.into_box().context("invalid box in config")?)
        }
        None => None,
    };

    let mut cfg = match base {
        Some(b) => b.to_config(),
        None => match (args.lx, args.ly, args.lz) {
            (Some(lx), Some(ly), Some(lz)) => BoxConfig::new(lx, ly, lz),
            _ => bail!("either --config or all of --lx, --ly and --lz are required"),
        },
    };
    let overrides = [
        (&mut cfg.lx, args.lx),
        (&mut cfg.ly, args.ly),
        (&mut cfg.lz, args.lz),
        (&mut cfg.xy, args.xy),
        (&mut cfg.xz, args.xz),
        (&mut cfg.yz, args.yz),
    ];
    for (field, value) in overrides {
        if let Some(v) = value {
            *field = v;
        }
    }
    Ok(SimBox::from_config(&cfg))
}

/// A mutating operation requested on the command line.
enum Op {
    Scale(Vec<f64>),
    SetVolume(f64),
}

fn apply<F>(command: &Command, mut run: F) -> Result<()>
where
    F: FnMut(Op) -> Result<(), BoxError>,
{
    let op = match command {
        Command::Inspect => return Ok(()),
        Command::Scale { factor, factors } => match (factor, factors) {
            (Some(s), _) => Op::Scale(vec![*s; 3]),
            (None, Some(s)) => Op::Scale(s.clone()),
            (None, None) => bail!("scale needs --factor or --factors"),
        },
        Command::SetVolume { volume } => Op::SetVolume(*volume),
    };
    run(op).context("box operation rejected")
}
