use {
	crate::{
		font::{self, GLYPH_HEIGHT},
		Color, ColorMap, Document, Tile,
	},
	png::{BitDepth, ColorType},
	std::io::Write,
};

/// Tightly packed 8-bit RGBA pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
	pub width: usize,
	pub height: usize,
	pub data: Vec<u8>,
}

const CHANNELS: usize = 4;

impl RasterImage {
	/// Fully transparent black canvas.
	#[must_use]
	pub fn fromWidthHeight(width: usize, height: usize) -> Self {
		Self { width, height, data: vec![0; width * height * CHANNELS] }
	}

	#[must_use]
	pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let i = (y * self.width + x) * CHANNELS;
		let [r, g, b, a]: [u8; CHANNELS] = self.data[i..i + CHANNELS].try_into().ok()?;
		Some(Color { r, g, b, a })
	}

	/// Fills `[x, x + width) × [y, y + height)`, clipped to the canvas.
	pub fn fillRectangle(&mut self, [x, y]: [usize; 2], [width, height]: [usize; 2], color: Color) {
		let (xEnd, yEnd) = ((x + width).min(self.width), (y + height).min(self.height));
		if x >= xEnd {
			return;
		}
		let rgba = color.toRgba();
		for row in y..yEnd {
			let rowStart = row * self.width;
			for pixel in self.data[(rowStart + x) * CHANNELS..(rowStart + xEnd) * CHANNELS].chunks_exact_mut(CHANNELS) {
				pixel.copy_from_slice(&rgba);
			}
		}
	}

	/// Encodes the canvas as an 8-bit RGBA PNG.
	///
	/// # Errors
	/// Whatever the `png` encoder or `writer` reports; dimensions past `u32::MAX` are
	/// [`png::EncodingError::LimitsExceeded`].
	pub fn writePNG(&self, writer: impl Write) -> Result<(), png::EncodingError> {
		let (Ok(width), Ok(height)) = (u32::try_from(self.width), u32::try_from(self.height)) else {
			return Err(png::EncodingError::LimitsExceeded);
		};
		let mut png = png::Encoder::new(writer, width, height);
		png.set_color(ColorType::Rgba);
		png.set_depth(BitDepth::Eight);
		let mut png = png.write_header()?;
		png.write_image_data(&self.data)?;
		png.finish()
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
	/// Edge of one sub-cell in pixels; must be at least 1.
	pub scale: u32,
	pub drawGrid: bool,
	pub drawLabels: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self { scale: 1, drawGrid: false, drawLabels: false }
	}
}

impl RenderOptions {
	/// Below this the label digits no longer fit their sub-cell.
	pub const MIN_LABEL_SCALE: u32 = 16;

	#[must_use]
	pub fn labelsLegible(&self) -> bool {
		self.scale >= Self::MIN_LABEL_SCALE
	}
}

/// Renders `document` with the curated [`ColorMap`].
///
/// The image is `width * scale * 2` by `height * scale * 2` pixels; every sub-cell becomes a
/// `scale × scale` square. `scale` must be at least 1.
#[must_use]
pub fn render(document: &Document, scale: u32, drawGrid: bool, drawLabels: bool) -> RasterImage {
	renderWith(document, &ColorMap::CURATED, &RenderOptions { scale, drawGrid, drawLabels })
}

#[must_use]
pub fn renderWith(document: &Document, colorMap: &ColorMap, options: &RenderOptions) -> RasterImage {
	debug_assert!(options.scale >= 1, "scale must be at least 1");
	let scale = options.scale as usize;
	let tileSize = scale * 2;
	let mut image = RasterImage::fromWidthHeight(document.width() * tileSize, document.height() * tileSize);
	let [lastColumn, lastRow] = [document.width().saturating_sub(1), document.height().saturating_sub(1)];
	for (row, tiles) in document.rows().enumerate() {
		for (column, tile) in tiles.iter().enumerate() {
			let origin = [column * tileSize, row * tileSize];
			drawTile(&mut image, origin, tile, colorMap, options);
			if options.drawGrid {
				drawBorder(&mut image, origin, tileSize, [column == lastColumn, row == lastRow]);
			}
		}
	}
	image
}

fn drawTile(image: &mut RasterImage, origin: [usize; 2], tile: &Tile, colorMap: &ColorMap, options: &RenderOptions) {
	let scale = options.scale as usize;
	for (row, types) in tile.types.iter().enumerate() {
		for (column, &tileType) in types.iter().enumerate() {
			let cellOrigin = [origin[0] + column * scale, origin[1] + row * scale];
			let fill = colorMap.colorOf(tileType.code().into());
			image.fillRectangle(cellOrigin, [scale, scale], fill);
			if options.drawLabels {
				drawLabel(image, cellOrigin, scale, &tileType.code().to_string(), fill.contrast());
			}
		}
	}
}

/// Top and left edges of the tile, plus the right and bottom ones on the last column and row.
/// Neighbours share a line, so the lattice stays one pixel wide.
fn drawBorder(image: &mut RasterImage, [x, y]: [usize; 2], tileSize: usize, [lastColumn, lastRow]: [bool; 2]) {
	image.fillRectangle([x, y], [tileSize, 1], Color::BLACK);
	image.fillRectangle([x, y], [1, tileSize], Color::BLACK);
	if lastColumn {
		image.fillRectangle([x + tileSize - 1, y], [1, tileSize], Color::BLACK);
	}
	if lastRow {
		image.fillRectangle([x, y + tileSize - 1], [tileSize, 1], Color::BLACK);
	}
}

/// Centers `text` in the `cellSize` square at `cellOrigin`, clipped to that square.
/// Glyphs lose their gap when the spaced text would not fit.
fn drawLabel(image: &mut RasterImage, cellOrigin: [usize; 2], cellSize: usize, text: &str, color: Color) {
	let glyphPixel = (cellSize / RenderOptions::MIN_LABEL_SCALE as usize).max(1);
	let spacing = usize::from(font::textDimensions(text, 1)[0] * glyphPixel <= cellSize);
	let [textWidth, textHeight] = font::textDimensions(text, spacing).map(|dimension| dimension * glyphPixel);
	debug_assert_eq!(textHeight, GLYPH_HEIGHT * glyphPixel);
	let offset = |textLen: usize| (cellSize as isize - textLen as isize).div_euclid(2);
	let [xOffset, yOffset] = [offset(textWidth), offset(textHeight)];
	font::forEachLitPixel(text, spacing, |x, y| {
		let [left, top] = [xOffset + (x * glyphPixel) as isize, yOffset + (y * glyphPixel) as isize];
		let [right, bottom] = [(left + glyphPixel as isize).min(cellSize as _), (top + glyphPixel as isize).min(cellSize as _)];
		let [left, top] = [left.max(0), top.max(0)];
		if left < right && top < bottom {
			image.fillRectangle(
				[cellOrigin[0] + left as usize, cellOrigin[1] + top as usize],
				[(right - left) as usize, (bottom - top) as usize],
				color,
			);
		}
	});
}
