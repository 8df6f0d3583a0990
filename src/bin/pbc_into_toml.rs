#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	anyhow::Context,
	pbc2png::{decode, io_readToVec, logging, Header},
	serde::Serialize,
	std::io::{self, Write},
};

fn main() -> anyhow::Result<()> {
	logging::init(false)?;
	let document = decode(&io_readToVec(io::stdin()).context("stdin")?).context("stdin")?;

	#[derive(Serialize)]
	struct PbcTOML<'a> {
		header: &'a Header,

		#[serde(rename = "tile")]
		tiles: Vec<TileTOML>,
	}
	#[derive(Serialize)]
	struct TileTOML {
		row: usize,
		column: usize,
		codes: [[u8; 2]; 2],
		names: [[String; 2]; 2],
	}
	let tiles = document
		.rows()
		.enumerate()
		.flat_map(|(row, tiles)| {
			tiles.iter().enumerate().map(move |(column, tile)| TileTOML {
				row,
				column,
				codes: tile.types.map(|types| types.map(u8::from)),
				names: tile.types.map(|types| types.map(|tileType| tileType.to_string())),
			})
		})
		.collect();
	let toml = toml::to_string_pretty(&PbcTOML { header: &document.header, tiles })?;
	io::stdout().lock().write_all(toml.as_bytes())?;
	Ok(())
}
