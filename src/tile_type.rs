use core::fmt;

macro_rules! tileTypes {
	( $( $code: literal => $variant: ident ),* $(,)? ) => {
		/// Terrain or material of one sub-cell.
		///
		/// Codes `0..=69` have a registered name. Any other byte is still a legal code on the wire
		/// and is kept as [`TileType::Unregistered`] so nothing is lost on the way to the renderer.
		/// Build values with [`TileType::fromCode`] (or `From<u8>`) so that a registered code is
		/// never wrapped in `Unregistered`.
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
		pub enum TileType {
			$( $variant, )*
			Unregistered(u8),
		}

		impl TileType {
			pub const REGISTERED: &'static [TileType] = &[ $( TileType::$variant, )* ];

			#[must_use]
			pub const fn fromCode(code: u8) -> Self {
				match code {
					$( $code => Self::$variant, )*
					_ => Self::Unregistered(code),
				}
			}

			#[must_use]
			pub const fn code(self) -> u8 {
				match self {
					$( Self::$variant => $code, )*
					Self::Unregistered(code) => code,
				}
			}

			#[must_use]
			pub const fn name(self) -> Option<&'static str> {
				match self {
					$( Self::$variant => Some(stringify!($variant)), )*
					Self::Unregistered(_) => None,
				}
			}
		}
	};
}

tileTypes! {
	0 => Grass,
	1 => River,
	2 => SoilHard,
	3 => Stone,
	4 => SandyBeach,
	5 => Sea,
	6 => TreeThick,
	7 => Null,
	8 => Building,
	9 => NoEdit,
	10 => Door0,
	11 => Camera,
	12 => Bracket,
	13 => AlternateBed,
	14 => Landing,
	15 => Uniform,
	16 => SoilSoft,
	17 => Marble,
	18 => CoatingFloor,
	19 => Gravel,
	20 => FallenLeaves,
	21 => Snow,
	22 => TreeThin,
	23 => Carpet,
	24 => Bald,
	25 => Iron,
	26 => RoadSoil,
	27 => RoadCobblestone,
	28 => Scolding,
	29 => Wavy,
	30 => Lugs,
	31 => RoadDark,
	32 => RoadSand,
	33 => RoadBrick,
	34 => RoadTree,
	35 => RoadTile,
	36 => RoadCobbling,
	37 => Imposing,
	38 => Sponge,
	39 => VinylSheet,
	40 => MyDesignFloor,
	41 => RockyPlace,
	42 => NoEntryRocky,
	43 => RockyWater,
	44 => Sandstone,
	45 => Pier,
	46 => NoWaves,
	47 => BuildingNoGrass,
	48 => IndoorGrass,
	49 => NoEditGrass,
	50 => Mud,
	51 => StoneGrass,
	52 => MyDesignOutdoor,
	53 => WaterPuddle,
	54 => MuseumWaterSurface,
	55 => RightRotationProhibited,
	56 => LeftRotationProhibited,
	57 => Disabled,
	58 => NoSoilHardEntry,
	59 => NoSandyBeachEntry,
	60 => WaterSand,
	61 => WaterGravel,
	62 => Lava,
	63 => IndoorSand,
	64 => NoSeaEntry,
	65 => DreamRoomOnly,
	66 => Embankment,
	67 => Custom0,
	68 => Custom1,
	69 => Custom2,
}

impl From<u8> for TileType {
	fn from(code: u8) -> Self {
		Self::fromCode(code)
	}
}

impl From<TileType> for u8 {
	fn from(tileType: TileType) -> Self {
		tileType.code()
	}
}

impl fmt::Display for TileType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.name() {
			Some(name) => f.write_str(name),
			None => write!(f, "Unregistered({})", self.code()),
		}
	}
}

/// Registered name of a terrain code, `None` for anything outside `0..=69`.
#[must_use]
pub fn nameOf(code: u32) -> Option<&'static str> {
	u8::try_from(code).ok().and_then(|code| TileType::fromCode(code).name())
}
