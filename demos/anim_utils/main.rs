//! Animation set utility.
//!
//! Provides three subcommands:
//! - `validate`: resolve every animation directory under a root (defaults to
//!   `default_data_dir` from the settings) and report failures.
//! - `inspect`: list the parts, versions, animations, blend directives and
//!   track lengths of a single animation directory.
//! - `play`: drive an animation player for a number of frames, print the
//!   timing of every part and optionally export every frame as PNG.
//!
//! Settings are read from `anim_utils.toml` (or the file given with
//! `--settings`) and `ANIM_UTILS_*` environment variables; command line flags
//! take precedence.

use std::{
	fs,
	path::{Path, PathBuf},
	rc::Rc,
};

use anyhow::{Context, Result, bail};
use bionicblue_rs::prelude::*;
use clap::{Args, Parser, Subcommand};
use log::{debug, info, warn};
use serde::Deserialize;

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let settings = Settings::load(cli.settings.as_deref())?;
	debug!("Settings: {settings:?}");

	match cli.command {
		Command::Validate(opts) => run_validate(opts, &settings),
		Command::Inspect(opts) => run_inspect(opts),
		Command::Play(opts) => run_play(opts, &settings),
	}
}

#[derive(Parser)]
#[command(name = "anim_utils")]
#[command(author = "bionicblue-rs project")]
#[command(version)]
#[command(about = "Validate, inspect and play animation sets", long_about = None)]
struct Cli {
	/// Settings file, without extension for format detection
	#[arg(long, value_name = "FILE", global = true)]
	settings: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Resolve every animation directory under a root
	Validate(ValidateArgs),
	/// Describe a single animation directory
	Inspect(InspectArgs),
	/// Play an animation and print or export its frames
	Play(PlayArgs),
}

#[derive(Args)]
struct ValidateArgs {
	/// Directory holding one sub-directory per animation set
	#[arg(value_name = "ROOT")]
	root: Option<PathBuf>,

	/// Fill parts without values or timing instead of failing
	#[arg(long, default_value_t = false)]
	lenient: bool,
}

#[derive(Args)]
struct InspectArgs {
	/// Animation directory
	#[arg(value_name = "DIR")]
	dir: PathBuf,

	/// Fill parts without values or timing instead of failing
	#[arg(long, default_value_t = false)]
	lenient: bool,
}

#[derive(Args)]
struct PlayArgs {
	/// Animation directory
	#[arg(value_name = "DIR")]
	dir: PathBuf,

	/// Animation to play
	#[arg(short, long, value_name = "NAME")]
	animation: String,

	/// Number of frames to draw
	#[arg(short, long, value_name = "COUNT", default_value_t = 8)]
	frames: usize,

	/// Surface versions to cycle through, comma separated
	#[arg(long, value_name = "VERSIONS", value_delimiter = ',')]
	versions: Vec<String>,

	/// Blend directives to apply after the first frame, comma separated
	#[arg(long, value_name = "DIRECTIVES", value_delimiter = ',')]
	blend: Vec<String>,

	/// Root anchor placed at the canvas center
	#[arg(long, value_name = "ANCHOR", default_value = "center")]
	anchor: Anchor,

	/// Write every frame as a PNG file into this directory
	#[arg(short, long, value_name = "DIR")]
	out: Option<PathBuf>,

	/// Canvas width, overrides the settings
	#[arg(long, value_name = "PIXELS")]
	width: Option<u32>,

	/// Canvas height, overrides the settings
	#[arg(long, value_name = "PIXELS")]
	height: Option<u32>,
}

/// Settings shared by every subcommand.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct Settings {
	canvas_width: u32,
	canvas_height: u32,
	background: String,
	default_data_dir: PathBuf,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			canvas_width: 64,
			canvas_height: 64,
			background: "#000000".to_string(),
			default_data_dir: PathBuf::from("data/animations"),
		}
	}
}

impl Settings {
	fn load(path: Option<&Path>) -> Result<Self> {
		let file = match path {
			Some(path) => config::File::from(path).required(true),
			None => config::File::with_name("anim_utils").required(false),
		};

		config::Config::builder()
			.add_source(file)
			.add_source(config::Environment::with_prefix("ANIM_UTILS"))
			.build()
			.and_then(config::Config::try_deserialize)
			.context("Failed to read settings")
	}

	fn background(&self) -> Result<Color> {
		self.background
			.parse()
			.with_context(|| format!("Invalid background color '{}'", self.background))
	}
}

fn process_config(lenient: bool) -> ProcessConfig {
	if lenient {
		ProcessConfig::lenient()
	} else {
		ProcessConfig::strict()
	}
}

fn run_validate(args: ValidateArgs, settings: &Settings) -> Result<()> {
	let root = args.root.unwrap_or_else(|| settings.default_data_dir.clone());
	if !root.is_dir() {
		bail!("{} is not a directory", root.display());
	}

	let mut dirs = Vec::new();
	for entry in fs::read_dir(&root).with_context(|| format!("Failed to read {}", root.display()))? {
		let path = entry?.path();
		if path.is_dir() {
			dirs.push(path);
		}
	}
	dirs.sort();

	if dirs.is_empty() {
		println!("No animation directories found under {}", root.display());
		return Ok(());
	}

	let config = process_config(args.lenient);
	let mut failures = 0;

	for dir in &dirs {
		match process_animation_dir(dir, &config) {
			Ok(data) => println!(
				"✓ {} - {} animations, {} parts, {} versions",
				dir.display(),
				data.animations().len(),
				data.parts().len(),
				data.versions().len()
			),
			Err(err) => {
				failures += 1;
				println!("✗ {} - {err}", dir.display());
			}
		}
	}

	println!("\n{} directories, {} failed", dirs.len(), failures);

	if failures > 0 {
		bail!("Validation finished with errors (see summary)");
	}

	Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
	let data = process_animation_dir(&args.dir, &process_config(args.lenient))
		.with_context(|| format!("Failed to load {}", args.dir.display()))?;

	println!("Animation set: {}", args.dir.display());

	println!("\nParts:");
	for part in data.parts() {
		println!(
			"  {:<16} size {}  art {}  anchorage {} -> {} {}",
			part.name,
			part.size,
			part.art_size,
			part.anchor_from,
			part.anchor_to,
			part.anchorage_offset
		);
	}

	println!("\nVersions: {}", data.versions().join(", "));

	println!("\nAnimations:");
	for anim in data.animations() {
		let part_name = |part: PartId| data.part(part).name.as_str();
		let order: Vec<_> = anim.structure.updating_order.iter().map(|&part| part_name(part)).collect();

		println!(
			"  {} (structure '{}', root '{}')",
			anim.name,
			anim.structure.name,
			part_name(anim.structure.root)
		);
		println!("    updating order: {}", order.join(", "));

		for track in &anim.tracks {
			println!(
				"    {:<16} surfaces {:?}  positions {:?}",
				part_name(track.part),
				track.timing.surface_indices.to_vec(),
				track.timing.position_indices.to_vec()
			);
		}

		let mut directives: Vec<_> = anim.blending.iter().collect();
		directives.sort();
		for (directive, &target) in directives {
			println!("    {directive} -> {}", data.animation(target).name);
		}
	}

	Ok(())
}

fn run_play(args: PlayArgs, settings: &Settings) -> Result<()> {
	let data = process_animation_dir(&args.dir, &ProcessConfig::default())
		.with_context(|| format!("Failed to load {}", args.dir.display()))?;

	let width = args.width.unwrap_or(settings.canvas_width);
	let height = args.height.unwrap_or(settings.canvas_height);
	let center = Vec2::new((width / 2) as i32, (height / 2) as i32);

	let mut player = AnimationPlayer::from_data(Rc::new(data), &args.animation, args.anchor, center)?;
	if !args.versions.is_empty() {
		player.set_custom_surface_cycling(&args.versions)?;
	}

	if let Some(out) = &args.out {
		fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;
	}

	let mut canvas = Canvas::new(width, height, settings.background()?);

	for frame in 0..args.frames {
		canvas.clear();
		player.draw(&mut canvas);

		let timing: Vec<_> = player
			.timing()
			.map(|(part, timing)| {
				format!(
					"{}[{}/{}]",
					player.data().part(part).name,
					timing.surface_indices.front(),
					timing.position_indices.front()
				)
			})
			.collect();
		println!(
			"frame {frame:>3}  {:<16} loops {:.2}  {}",
			player.anim_name(),
			player.main_timing().loops_no(),
			timing.join(" ")
		);

		if let Some(out) = &args.out {
			let path = out.join(format!("frame_{frame:03}.png"));
			canvas
				.image()
				.save(&path)
				.with_context(|| format!("Failed to write {}", path.display()))?;
		}

		if frame == 0 {
			for directive in &args.blend {
				let before = player.anim_name().to_string();
				player.blend(directive);
				if player.anim_name() == before {
					warn!("'{before}' has no blend directive '{directive}'");
				}
			}
		}
	}

	if let Some(out) = &args.out {
		info!("Wrote {} frames to {}", args.frames, out.display());
	}

	Ok(())
}
