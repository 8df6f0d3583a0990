//! 5×7 bitmap digits for terrain-code labels.

pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;

// one row per byte, MSB of the low 5 bits is the leftmost pixel
const DIGITS: [[u8; GLYPH_HEIGHT]; 10] = [
	[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
	[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
	[0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
	[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
	[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
	[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
	[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
	[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
	[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
	[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

#[must_use]
pub fn digitGlyph(digit: char) -> Option<&'static [u8; GLYPH_HEIGHT]> {
	digit.to_digit(10).map(|digit| &DIGITS[digit as usize])
}

/// Size in glyph pixels of `text` set with `spacing` blank columns between characters.
#[must_use]
pub fn textDimensions(text: &str, spacing: usize) -> [usize; 2] {
	let len = text.chars().count();
	[if len == 0 { 0 } else { len * (GLYPH_WIDTH + spacing) - spacing }, GLYPH_HEIGHT]
}

/// Calls `plot(x, y)` for every lit glyph pixel of `text`, in glyph-pixel coordinates.
/// Characters without a glyph advance the pen but draw nothing.
pub fn forEachLitPixel(text: &str, spacing: usize, mut plot: impl FnMut(usize, usize)) {
	for (i, c) in text.chars().enumerate() {
		let Some(glyph) = digitGlyph(c) else { continue };
		let x0 = i * (GLYPH_WIDTH + spacing);
		for (y, &row) in glyph.iter().enumerate() {
			for x in 0..GLYPH_WIDTH {
				if row >> (GLYPH_WIDTH - 1 - x) & 1 == 1 {
					plot(x0 + x, y);
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn digits_have_glyphs() {
		for c in '0'..='9' {
			let glyph = digitGlyph(c).unwrap();
			assert!(glyph.iter().any(|&row| row != 0), "{c}");
			assert!(glyph.iter().all(|&row| row < 1 << GLYPH_WIDTH), "{c}");
		}
		assert_eq!(digitGlyph('x'), None);
	}

	#[test]
	fn text_dimensions() {
		assert_eq!(textDimensions("", 1), [0, GLYPH_HEIGHT]);
		assert_eq!(textDimensions("7", 1), [5, GLYPH_HEIGHT]);
		assert_eq!(textDimensions("255", 1), [17, GLYPH_HEIGHT]);
		assert_eq!(textDimensions("255", 0), [15, GLYPH_HEIGHT]);
	}

	#[test]
	fn lit_pixels_stay_inside_text_box() {
		for spacing in [0, 1] {
			let [width, height] = textDimensions("108", spacing);
			let mut count = 0;
			forEachLitPixel("108", spacing, |x, y| {
				assert!(x < width && y < height);
				count += 1;
			});
			assert!(count > 0);
		}
	}

	#[test]
	fn one_is_a_vertical_stroke() {
		let mut columns = [0; GLYPH_WIDTH];
		forEachLitPixel("1", 1, |x, _| columns[x] += 1);
		assert_eq!(columns, [0, 2, 7, 1, 0]);
	}
}
