#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	clap::Parser,
	pbc2png::{decode, logging, ColorMap, TileType},
	std::{
		collections::HashMap,
		fs,
		io::{self, BufWriter, Write},
		path::PathBuf,
	},
};

fn main() -> anyhow::Result<()> {
	/// Counts how often each terrain code occurs across pbc files.
	#[derive(Parser)]
	struct Args {
		#[clap(required = true)]
		paths: Vec<PathBuf>,

		/// Only list codes without a curated color.
		#[clap(long)]
		unmappedOnly: bool,

		#[clap(short, long)]
		verbose: bool,
	}
	let Args { paths, unmappedOnly, verbose } = Args::parse();
	logging::init(verbose)?;

	let hashMap = &mut HashMap::<TileType, usize>::new();
	for path in &paths {
		let document = match fs::read(path).map_err(anyhow::Error::from).and_then(|bytes| Ok(decode(&bytes)?)) {
			Err(err) => {
				log::error!("{path:?}: {err}");
				continue;
			}
			Ok(ok) => ok,
		};
		log::info!("{path:?}: {} tiles", document.tiles().len());
		for tile in document.tiles() {
			for &tileType in tile.types.iter().flatten() {
				*hashMap.entry(tileType).or_default() += 1;
			}
		}
	}

	let colorMap = &ColorMap::CURATED;
	let mut keys = Vec::from_iter(hashMap.keys().copied()).into_boxed_slice();
	keys.sort_by_key(|&key| (hashMap[&key], key.code()));
	let stdout = &mut BufWriter::new(io::stdout().lock());
	for key in keys.iter() {
		let curated = colorMap.contains(key.code().into());
		if unmappedOnly && curated {
			continue;
		}
		writeln!(
			stdout,
			"{}\t{key}\t{}\t{}",
			key.code(),
			hashMap[key],
			if curated { "curated" } else { "fallback" }
		)?;
	}
	stdout.flush()?;
	Ok(())
}
