#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	anyhow::{bail, Context},
	clap::{value_parser, Parser},
	const_format::formatcp,
	pbc2png::{decode, logging, renderWith, ColorMap, RenderOptions},
	std::{
		fs::{self, File},
		io::BufWriter,
		path::PathBuf,
	},
};

const LABEL_SCALE_WARNING: &str =
	formatcp!("Type not recommended for scale less than {}", RenderOptions::MIN_LABEL_SCALE);

/// Converts a pbc terrain grid into a PNG image.
#[derive(Parser)]
#[clap(version)]
struct Args {
	/// Input file.
	input: PathBuf,

	/// Draw grid.
	#[clap(short, long)]
	grid: bool,

	/// Scale.
	#[clap(short, long, default_value_t = 1, value_parser = value_parser!(u32).range(1..))]
	scale: u32,

	/// Draw tile type identifiers.
	#[clap(short = 't', long = "type")]
	drawTypes: bool,

	/// Output path; defaults to the input path with a .png extension.
	#[clap(short, long)]
	output: Option<PathBuf>,

	/// User specified colors in csv format. Not yet implemented.
	#[clap(short, long)]
	colormap: Option<PathBuf>,

	#[clap(short, long)]
	verbose: bool,
}

fn main() -> anyhow::Result<()> {
	let Args { input, grid, scale, drawTypes, output, colormap, verbose } = Args::parse();
	logging::init(verbose)?;
	if !input.is_file() {
		bail!("{input:?} does not exist.");
	}
	let options = RenderOptions { scale, drawGrid: grid, drawLabels: drawTypes };
	if options.drawLabels && !options.labelsLegible() {
		log::warn!("{LABEL_SCALE_WARNING}");
	}
	if let Some(colormap) = colormap {
		log::warn!("{colormap:?}: custom color maps are not yet implemented");
	}

	let document = {
		let bytes = fs::read(&input).with_context(|| format!("{input:?}"))?;
		decode(&bytes).with_context(|| format!("{input:?}"))?
	};
	log::info!("{input:?}: {}x{} tiles", document.width(), document.height());
	let image = renderWith(&document, &ColorMap::CURATED, &options);

	let output = output.unwrap_or_else(|| input.with_extension("png"));
	log::info!("Writing File: {}", output.display());
	let file = File::create(&output).with_context(|| format!("{output:?}"))?;
	image.writePNG(BufWriter::new(file)).with_context(|| format!("{output:?}"))?;
	Ok(())
}
