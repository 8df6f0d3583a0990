/// 8-bit RGBA color. Laid out in the same order as the pixels of a [`crate::RasterImage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl Color {
	pub const BLACK: Self = Self::fromArgb(255, 0, 0, 0);
	pub const WHITE: Self = Self::fromArgb(255, 255, 255, 255);

	#[must_use]
	pub const fn fromArgb(a: u8, r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a }
	}

	#[must_use]
	pub const fn toRgba(self) -> [u8; 4] {
		[self.r, self.g, self.b, self.a]
	}

	/// Relative luminance in `0.0..=1.0`. Alpha is ignored.
	#[must_use]
	pub fn luminance(self) -> f64 {
		(0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)) / 255.
	}

	/// Black on light colors, white on dark ones.
	#[must_use]
	pub fn contrast(self) -> Self {
		if self.luminance() > 0.5 {
			Self::BLACK
		} else {
			Self::WHITE
		}
	}
}

/// Sparse, read-only terrain code → color table.
///
/// Lookups for codes without an entry yield [`ColorMap::FALLBACK`], a sentinel that flags
/// terrain nobody has picked a display color for yet.
#[derive(Debug)]
pub struct ColorMap {
	// sorted by code
	entries: &'static [(u32, Color)],
}

impl ColorMap {
	pub const FALLBACK: Color = Color::fromArgb(255, 128, 0, 128);

	pub const CURATED: Self = Self {
		entries: &[
			(0, Color::fromArgb(255, 70, 120, 64)),
			(1, Color::fromArgb(255, 128, 215, 195)),
			(3, Color::fromArgb(255, 192, 192, 192)),
			(4, Color::fromArgb(255, 240, 230, 170)),
			(5, Color::fromArgb(255, 128, 215, 195)),
			(6, Color::fromArgb(255, 255, 128, 128)),
			(7, Color::fromArgb(255, 0, 0, 0)),
			(8, Color::fromArgb(255, 32, 32, 32)),
			(9, Color::fromArgb(255, 255, 0, 0)),
			(10, Color::fromArgb(255, 48, 48, 48)),
			(12, Color::fromArgb(255, 128, 215, 195)),
			(15, Color::fromArgb(255, 128, 215, 195)),
			(22, Color::fromArgb(255, 192, 255, 98)),
			(23, Color::fromArgb(255, 192, 155, 98)),
			(28, Color::fromArgb(255, 255, 0, 0)),
			(29, Color::fromArgb(255, 232, 222, 162)),
			(41, Color::fromArgb(255, 118, 122, 132)),
			(42, Color::fromArgb(255, 128, 133, 147)),
			(44, Color::fromArgb(255, 62, 112, 56)),
			(45, Color::fromArgb(255, 118, 122, 132)),
			(46, Color::fromArgb(255, 120, 207, 187)),
			(47, Color::fromArgb(255, 128, 128, 0)),
			(49, Color::fromArgb(255, 190, 98, 98)),
			(51, Color::fromArgb(255, 32, 152, 32)),
		],
	};

	#[must_use]
	pub fn colorOf(&self, code: u32) -> Color {
		self.get(code).unwrap_or(Self::FALLBACK)
	}

	/// The curated color, or `None` where [`Self::colorOf`] would fall back.
	#[must_use]
	pub fn get(&self, code: u32) -> Option<Color> {
		self.entries.binary_search_by_key(&code, |&(code, _)| code).ok().map(|i| self.entries[i].1)
	}

	#[must_use]
	pub fn contains(&self, code: u32) -> bool {
		self.get(code).is_some()
	}

	pub fn iter(&self) -> impl Iterator<Item = (u32, Color)> + '_ {
		self.entries.iter().copied()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn curated_entries_are_sorted_and_unique() {
		let codes: Vec<_> = ColorMap::CURATED.iter().map(|(code, _)| code).collect();
		assert!(codes.windows(2).all(|pair| pair[0] < pair[1]), "{codes:?}");
		assert_eq!(ColorMap::CURATED.len(), 24);
	}

	#[test]
	fn mapped_codes_use_curated_color() {
		let map = &ColorMap::CURATED;
		assert_eq!(map.colorOf(0), Color::fromArgb(255, 70, 120, 64));
		assert_eq!(map.colorOf(0).toRgba(), [70, 120, 64, 255]);
		assert_eq!(map.colorOf(51), Color::fromArgb(255, 32, 152, 32));
		assert_eq!(map.colorOf(7), Color::BLACK);
	}

	#[test]
	fn unmapped_codes_fall_back() {
		let map = &ColorMap::CURATED;
		for code in [2, 11, 50, 69, 70, 255, 1000] {
			assert_eq!(map.colorOf(code), Color::fromArgb(255, 128, 0, 128), "code {code}");
			assert!(!map.contains(code));
		}
	}

	#[test]
	fn contrast_follows_luminance() {
		assert_eq!(Color::WHITE.contrast(), Color::BLACK);
		assert_eq!(Color::BLACK.contrast(), Color::WHITE);
		// 0.299*240 + 0.587*230 + 0.114*170 = 226.19
		assert_eq!(Color::fromArgb(255, 240, 230, 170).contrast(), Color::BLACK);
		// 0.299*70 + 0.587*120 + 0.114*64 = 98.11
		assert_eq!(Color::fromArgb(255, 70, 120, 64).contrast(), Color::WHITE);
		assert_eq!(ColorMap::FALLBACK.contrast(), Color::WHITE);
	}

	#[test]
	fn luminance_ignores_alpha() {
		let opaque = Color::fromArgb(255, 10, 200, 30);
		let clear = Color { a: 0, ..opaque };
		assert!((opaque.luminance() - clear.luminance()).abs() < f64::EPSILON);
	}
}
