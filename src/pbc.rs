use {
	crate::TileType,
	byteorder::{ReadBytesExt, WriteBytesExt, LE},
	serde::{Deserialize, Serialize},
	std::io::{self, Read, Write},
	thiserror::Error,
};

pub const MAGIC: [u8; 4] = *b"pbc\0";
pub const HEADER_LEN: usize = MAGIC.len() + 4 * 4;
pub const RESERVED_LEN: usize = 48;
pub const TILE_LEN: usize = RESERVED_LEN + 4;

/// Sub-cell `[row, column]` positions in the order their codes appear on the wire.
pub const WIRE_ORDER: [[usize; 2]; 4] = [[0, 0], [0, 1], [1, 1], [1, 0]];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
	#[error("not a pbc file (magic bytes {found:02X?})")]
	BadMagic { found: [u8; 4] },
	#[error("unexpected end of pbc data")]
	Truncated,
	#[error("negative grid dimensions {width}x{height}")]
	NegativeDimension { width: i32, height: i32 },
}

impl From<io::Error> for DecodeError {
	// only ever reading from an in-memory slice, so the one failure left is running out of it
	fn from(_: io::Error) -> Self {
		Self::Truncated
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
	pub width: i32,
	pub height: i32,
	pub offsetX: u32,
	pub offsetY: u32,
}

/// One grid cell: a 2×2 block of terrain codes plus the height-map bytes that precede them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
	/// Indexed `[row][column]`.
	pub types: [[TileType; 2]; 2],
	/// Elevation layers, kept verbatim and never interpreted.
	pub reserved: [u8; RESERVED_LEN],
}

impl Tile {
	#[must_use]
	pub fn typeAt(&self, row: usize, column: usize) -> TileType {
		self.types[row][column]
	}

	fn read(reader: &mut impl Read) -> io::Result<Self> {
		let mut reserved = [0; RESERVED_LEN];
		reader.read_exact(&mut reserved)?;
		let mut types = [[TileType::Grass; 2]; 2];
		for [row, column] in WIRE_ORDER {
			types[row][column] = reader.read_u8()?.into();
		}
		Ok(Self { types, reserved })
	}

	fn write(&self, writer: &mut impl Write) -> io::Result<()> {
		writer.write_all(&self.reserved)?;
		for [row, column] in WIRE_ORDER {
			writer.write_u8(self.types[row][column].code())?;
		}
		Ok(())
	}
}

/// A decoded `.pbc` file: the header and its `height × width` tiles in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
	pub header: Header,
	tiles: Vec<Tile>,
}

impl Document {
	#[must_use]
	pub fn width(&self) -> usize {
		self.header.width as _
	}

	#[must_use]
	pub fn height(&self) -> usize {
		self.header.height as _
	}

	#[must_use]
	pub fn tile(&self, row: usize, column: usize) -> Option<&Tile> {
		if row < self.height() && column < self.width() {
			self.tiles.get(row * self.width() + column)
		} else {
			None
		}
	}

	/// All tiles, row by row.
	#[must_use]
	pub fn tiles(&self) -> &[Tile] {
		&self.tiles
	}

	pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
		self.tiles.chunks(self.width().max(1))
	}

	/// Re-emits the file this document was decoded from, minus any trailing bytes.
	#[must_use]
	pub fn encode(&self) -> Vec<u8> {
		let mut bytes = Vec::with_capacity(HEADER_LEN + self.tiles.len() * TILE_LEN);
		self.writeTo(&mut bytes).unwrap_or_else(|err| unreachable!("{err}"));
		bytes
	}

	pub fn writeTo(&self, writer: &mut impl Write) -> io::Result<()> {
		let Header { width, height, offsetX, offsetY } = self.header;
		writer.write_all(&MAGIC)?;
		writer.write_i32::<LE>(width)?;
		writer.write_i32::<LE>(height)?;
		writer.write_u32::<LE>(offsetX)?;
		writer.write_u32::<LE>(offsetY)?;
		for tile in &self.tiles {
			tile.write(writer)?;
		}
		Ok(())
	}
}

/// Parses a `.pbc` byte stream.
///
/// Layout, little-endian throughout: `"pbc\0"`, `width: i32`, `height: i32`, `offsetX: u32`,
/// `offsetY: u32`, then `height * width` tile records of 52 bytes each, row-major. A tile record
/// is 48 reserved bytes followed by four terrain codes for sub-cells (0,0), (0,1), (1,1), (1,0).
/// Bytes after the last tile are ignored.
///
/// # Errors
/// [`DecodeError::BadMagic`] if the leading bytes (up to four) are not `"pbc\0"`,
/// [`DecodeError::Truncated`] if the input ends before the header or the last tile does,
/// [`DecodeError::NegativeDimension`] if the header declares a negative width or height.
pub fn decode(bytes: &[u8]) -> Result<Document, DecodeError> {
	let cursor = &mut io::Cursor::new(bytes);
	let mut magic = [0; MAGIC.len()];
	// a short input is only truncated if what is there still reads as the magic
	let prefixLen = bytes.len().min(MAGIC.len());
	magic[..prefixLen].copy_from_slice(&bytes[..prefixLen]);
	if magic[..prefixLen] != MAGIC[..prefixLen] {
		return Err(DecodeError::BadMagic { found: magic });
	}
	cursor.read_exact(&mut magic)?;
	let header = Header {
		width: cursor.read_i32::<LE>()?,
		height: cursor.read_i32::<LE>()?,
		offsetX: cursor.read_u32::<LE>()?,
		offsetY: cursor.read_u32::<LE>()?,
	};
	let Header { width, height, .. } = header;
	let (Ok(columns), Ok(rows)) = (usize::try_from(width), usize::try_from(height)) else {
		return Err(DecodeError::NegativeDimension { width, height });
	};
	let numTiles = rows.checked_mul(columns).ok_or(DecodeError::Truncated)?;
	if numTiles.checked_mul(TILE_LEN).map_or(true, |tilesLen| tilesLen > bytes.len() - HEADER_LEN) {
		return Err(DecodeError::Truncated);
	}
	let mut tiles = Vec::with_capacity(numTiles);
	for _ in 0..numTiles {
		tiles.push(Tile::read(cursor)?);
	}
	Ok(Document { header, tiles })
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;

	pub(crate) fn pbcBytes(width: i32, height: i32, codes: &[[u8; 4]]) -> Vec<u8> {
		let mut bytes = MAGIC.to_vec();
		bytes.write_i32::<LE>(width).unwrap();
		bytes.write_i32::<LE>(height).unwrap();
		bytes.write_u32::<LE>(7).unwrap();
		bytes.write_u32::<LE>(9).unwrap();
		for (i, tileCodes) in codes.iter().enumerate() {
			bytes.extend((0..RESERVED_LEN).map(|j| (i + j) as u8));
			bytes.extend_from_slice(tileCodes);
		}
		bytes
	}

	#[test]
	fn decodes_header_fields() {
		let document = decode(&pbcBytes(2, 1, &[[0; 4], [1; 4]])).unwrap();
		assert_eq!(document.header, Header { width: 2, height: 1, offsetX: 7, offsetY: 9 });
		assert_eq!((document.width(), document.height()), (2, 1));
		assert_eq!(document.tiles().len(), 2);
	}

	#[test]
	fn codes_follow_wire_order() {
		let document = decode(&pbcBytes(1, 1, &[[0, 1, 3, 4]])).unwrap();
		let tile = document.tile(0, 0).unwrap();
		assert_eq!(tile.typeAt(0, 0), TileType::Grass);
		assert_eq!(tile.typeAt(0, 1), TileType::River);
		assert_eq!(tile.typeAt(1, 1), TileType::Stone);
		assert_eq!(tile.typeAt(1, 0), TileType::SandyBeach);
	}

	#[test]
	fn reserved_bytes_are_kept() {
		let document = decode(&pbcBytes(1, 2, &[[0; 4], [0; 4]])).unwrap();
		let second = document.tile(1, 0).unwrap();
		assert_eq!(second.reserved[0], 1);
		assert_eq!(second.reserved[RESERVED_LEN - 1], RESERVED_LEN as u8);
	}

	#[test]
	fn tiles_are_row_major() {
		let document = decode(&pbcBytes(3, 2, &[[0; 4], [1; 4], [2; 4], [3; 4], [4; 4], [5; 4]])).unwrap();
		let rows: Vec<_> = document.rows().collect();
		assert_eq!(rows.len(), 2);
		assert!(rows.iter().all(|row| row.len() == 3));
		assert_eq!(document.tile(1, 0).unwrap().typeAt(0, 0).code(), 3);
		assert_eq!(document.tile(0, 2).unwrap().typeAt(1, 1).code(), 2);
		assert_eq!(document.tile(2, 0), None);
		assert_eq!(document.tile(0, 3), None);
	}

	#[test]
	fn bad_magic_wins_over_everything_else() {
		for bytes in [
			&b"PBC\0"[..],
			&b"pbc\x01\x01\x00\x00\x00"[..],
			&b"png\0"[..],
			&b"xyzw"[..],
			&b"x"[..],
			&b"PNG"[..],
			&b"\x89P"[..],
			&b"pbx"[..],
		] {
			assert!(matches!(decode(bytes), Err(DecodeError::BadMagic { .. })), "{bytes:?}");
		}
		let mut bytes = pbcBytes(1, 1, &[[0; 4]]);
		bytes[3] = b'!';
		assert_eq!(decode(&bytes), Err(DecodeError::BadMagic { found: *b"pbc!" }));
		assert_eq!(decode(b"PN"), Err(DecodeError::BadMagic { found: *b"PN\0\0" }));
	}

	#[test]
	fn short_input_is_truncated() {
		assert_eq!(decode(b""), Err(DecodeError::Truncated));
		assert_eq!(decode(b"p"), Err(DecodeError::Truncated));
		assert_eq!(decode(b"pb"), Err(DecodeError::Truncated));
		assert_eq!(decode(b"pbc"), Err(DecodeError::Truncated));
		let full = pbcBytes(2, 2, &[[0; 4]; 4]);
		for len in [4, 8, HEADER_LEN - 1, HEADER_LEN, HEADER_LEN + TILE_LEN, full.len() - 1] {
			assert_eq!(decode(&full[..len]), Err(DecodeError::Truncated), "len {len}");
		}
		assert!(decode(&full).is_ok());
	}

	#[test]
	fn oversized_dimensions_do_not_allocate() {
		let bytes = pbcBytes(i32::MAX, i32::MAX, &[]);
		assert_eq!(decode(&bytes), Err(DecodeError::Truncated));
	}

	#[test]
	fn negative_dimensions_are_rejected() {
		assert_eq!(
			decode(&pbcBytes(-1, 1, &[])),
			Err(DecodeError::NegativeDimension { width: -1, height: 1 })
		);
		assert_eq!(
			decode(&pbcBytes(0, i32::MIN, &[])),
			Err(DecodeError::NegativeDimension { width: 0, height: i32::MIN })
		);
		let mut bytes = pbcBytes(-1, -1, &[]);
		bytes[0] = b'P';
		assert_eq!(decode(&bytes), Err(DecodeError::BadMagic { found: *b"Pbc\0" }));
	}

	#[test]
	fn empty_grid_decodes() {
		let document = decode(&pbcBytes(0, 5, &[])).unwrap();
		assert_eq!(document.height(), 5);
		assert!(document.tiles().is_empty());
	}

	#[test]
	fn trailing_bytes_are_ignored_and_dropped_on_encode() {
		let bytes = pbcBytes(1, 1, &[[5, 6, 7, 8]]);
		let mut padded = bytes.clone();
		padded.extend_from_slice(&[0xAA; 3]);
		let document = decode(&padded).unwrap();
		assert_eq!(document.encode(), bytes);
	}
}
