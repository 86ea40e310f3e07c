//! Sprite sheet utility.
//!
//! Provides three subcommands:
//! - `inspect`: parse one description and print its animations, or dump the
//!   parsed atlas as JSON.
//! - `play`: step one animation at a fixed tick and print each cel it lands on.
//! - `validate`: scan a directory for `.json` descriptions and parse every one.
//!
//! Parse options can be loaded from a TOML file with `--config`:
//!
//! ```toml
//! infinite_duration = 65535
//! required_tags = ["idle", "walk"]
//! ```

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use cel_rs::prelude::*;
use clap::{Args, Parser, Subcommand};
use log::{debug, info, warn};
use walkdir::WalkDir;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let config = load_config(cli.config.as_deref())?;
	match cli.command {
		Command::Inspect(opts) => run_inspect(opts, &config),
		Command::Play(opts) => run_play(opts, &config),
		Command::Validate(opts) => run_validate(opts, &config),
	}
}

#[derive(Parser)]
#[command(name = "atlas_utils")]
#[command(author = "cel-rs project")]
#[command(version)]
#[command(about = "Inspect, play and validate Aseprite sprite sheet descriptions", long_about = None)]
struct Cli {
	/// TOML file with parse options
	#[arg(short, long, value_name = "FILE", global = true, env = "CEL_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Print the animations of a single description
	Inspect(InspectArgs),
	/// Step through one animation and print every cel shown
	Play(PlayArgs),
	/// Parse every description under a directory
	Validate(ValidateArgs),
}

#[derive(Args)]
struct InspectArgs {
	/// Path to an Aseprite JSON description
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Dump the parsed atlas as JSON instead of a summary
	#[arg(long, default_value_t = false)]
	json: bool,
}

#[derive(Args)]
struct PlayArgs {
	/// Path to an Aseprite JSON description
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Animation to play
	#[arg(value_name = "TAG")]
	tag: String,

	/// Milliseconds per tick
	#[arg(short = 't', long, value_name = "MS", default_value_t = 1000.0 / 60.0)]
	tick: f64,

	/// Number of ticks to simulate
	#[arg(short = 'n', long, value_name = "COUNT", default_value_t = 60)]
	ticks: usize,
}

#[derive(Args)]
struct ValidateArgs {
	/// Directory containing Aseprite JSON descriptions
	#[arg(value_name = "DIR")]
	root: PathBuf,

	/// Recurse into sub-directories while scanning
	#[arg(short, long, default_value_t = false)]
	recursive: bool,
}

fn load_config(path: Option<&Path>) -> Result<ParseConfig> {
	let Some(path) = path else {
		return Ok(ParseConfig::default());
	};

	let config = config::Config::builder()
		.add_source(config::File::from(path))
		.build()
		.with_context(|| format!("Failed to read config {}", path.display()))?
		.try_deserialize::<ParseConfig>()
		.with_context(|| format!("Invalid config {}", path.display()))?;
	debug!("Loaded {config:?} from {}", path.display());
	Ok(config)
}

fn load_atlas(path: &Path, config: &ParseConfig) -> Result<Atlas> {
	let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
	Atlas::from_bytes_with_config(&bytes, config)
		.with_context(|| format!("Failed to parse {}", path.display()))
}

fn run_inspect(args: InspectArgs, config: &ParseConfig) -> Result<()> {
	let atlas = load_atlas(&args.file, config)?;

	if args.json {
		println!("{}", serde_json::to_string_pretty(&atlas)?);
		return Ok(());
	}

	println!("{atlas}");
	println!("  version: {}", atlas.version());
	for (name, animation) in atlas.animations() {
		println!(
			"  {name}: {} cels, {}, {}, {}",
			animation.cels().len(),
			animation.direction(),
			animation.duration(),
			animation.size()
		);
		for (index, cel) in animation.cels().iter().enumerate() {
			println!("    [{index}] {} for {}, {} slices", cel.bounds(), cel.duration(), cel.slices().len());
		}
	}
	Ok(())
}

fn run_play(args: PlayArgs, config: &ParseConfig) -> Result<()> {
	if !(args.tick.is_finite() && args.tick >= 0.0) {
		bail!("Tick must be a non-negative number of milliseconds, got {}", args.tick);
	}

	let atlas = load_atlas(&args.file, config)?;
	let Some(animation) = atlas.animation(&args.tag) else {
		let known: Vec<&str> = atlas.animations().keys().map(String::as_str).collect();
		bail!("No \"{}\" animation in {} (known: {})", args.tag, args.file.display(), known.join(", "));
	};

	info!("Playing \"{}\" ({}, {}) at {}ms per tick", args.tag, animation.direction(), animation.duration(), args.tick);

	let mut animator = Animator::new();
	let mut elapsed = 0.0;
	for tick in 0..args.ticks {
		let before = animator.index(animation);
		animator.advance(args.tick, animation);
		elapsed += args.tick;

		let index = animator.index(animation);
		let marker = if index == before {
			' '
		} else {
			'*'
		};
		println!(
			"{tick:>5} {elapsed:>10.3}ms {marker} cel {index} at {} (period {}, exposure {:.3}ms)",
			animator.cel(animation).bounds(),
			animator.period,
			animator.exposure
		);
	}
	Ok(())
}

fn run_validate(args: ValidateArgs, config: &ParseConfig) -> Result<()> {
	if !args.root.is_dir() {
		bail!("{} is not a directory", args.root.display());
	}

	let files = collect_json_files(&args.root, args.recursive);
	if files.is_empty() {
		println!("No .json files found under {}", args.root.display());
		return Ok(());
	}

	let mut failures = 0usize;
	for path in &files {
		match load_atlas(path, config) {
			Ok(atlas) => println!("OK   {} - {} animations", path.display(), atlas.animations().len()),
			Err(err) => {
				failures += 1;
				println!("FAIL {} - {err:#}", path.display());
			}
		}
	}

	println!("\n{} files, {} passed, {failures} failed", files.len(), files.len() - failures);
	if failures > 0 {
		bail!("Validation finished with errors");
	}
	Ok(())
}

fn collect_json_files(root: &Path, recursive: bool) -> Vec<PathBuf> {
	let max_depth = if recursive {
		usize::MAX
	} else {
		1
	};
	let mut files = Vec::new();

	for entry in WalkDir::new(root).max_depth(max_depth).follow_links(false) {
		let entry = match entry {
			Ok(entry) => entry,
			Err(err) => {
				warn!("{err}");
				continue;
			}
		};

		let is_json = entry.path().extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
		if entry.file_type().is_file() && is_json {
			files.push(entry.into_path());
		}
	}

	files.sort();
	files
}
