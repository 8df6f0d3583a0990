#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

//! Decoder and rasterizer for `pbc` terrain grids.
//!
//! [`decode`] turns the raw bytes of a `.pbc` file into a [`Document`]; [`render`] turns a
//! [`Document`] into a [`RasterImage`] of colored sub-cells. Neither touches the file system
//! nor logs; the binaries in this package own that.

pub mod color;
pub mod font;
pub mod logging;
pub mod pbc;
pub mod raster;
pub mod tile_type;

pub use {
	color::{Color, ColorMap},
	pbc::{decode, DecodeError, Document, Header, Tile},
	raster::{render, renderWith, RasterImage, RenderOptions},
	tile_type::{nameOf, TileType},
};

use std::io::{self, Read};

pub fn io_readToVec(mut reader: impl Read) -> io::Result<Vec<u8>> {
	let mut vec = Vec::new();
	reader.read_to_end(&mut vec)?;
	Ok(vec)
}
