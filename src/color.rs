//! Color metadata name tables: range, primaries, transfer characteristic,
//! matrix, and chroma sample location.
//!
//! These are companions to the format catalog, not consumed by it: pure
//! value enums carrying the ITU-T H.273 / ISO 23091-2 code points, with
//! name lookups in both directions. Name matching is case-insensitive;
//! the canonical spellings follow the conventions used in format and
//! stream metadata ("tv"/"pc" for range, "bt709", "smpte2084", ...).

use alloc::string::String;

use crate::error::PixFmtError;

fn from_name_impl<T: Copy>(
    kind: &'static str,
    name: &str,
    table: &[(T, &'static str, &'static [&'static str])],
) -> Result<T, PixFmtError> {
    if name.is_empty() {
        return Err(PixFmtError::EmptyName);
    }
    for (value, canonical, aliases) in table {
        if canonical.eq_ignore_ascii_case(name)
            || aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
        {
            return Ok(*value);
        }
    }
    Err(PixFmtError::UnknownColorName {
        kind,
        name: String::from(name),
    })
}

const NO_ALIAS: &[&str] = &[];

// ── Color range ─────────────────────────────────────────────────────

/// How sample values map onto the nominal black-to-white range.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorRange {
    #[default]
    Unspecified = 0,
    /// Limited "broadcast" range (16..235 for 8-bit luma).
    Mpeg = 1,
    /// Full range (0..255 for 8-bit samples).
    Jpeg = 2,
}

impl ColorRange {
    const TABLE: &'static [(Self, &'static str, &'static [&'static str])] = &[
        (Self::Unspecified, "unknown", NO_ALIAS),
        (Self::Mpeg, "tv", &["mpeg", "limited"]),
        (Self::Jpeg, "pc", &["jpeg", "full"]),
    ];

    /// Canonical name of this range.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unspecified => "unknown",
            Self::Mpeg => "tv",
            Self::Jpeg => "pc",
        }
    }

    /// Look up a range by name or alias, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, PixFmtError> {
        from_name_impl("color range", name, Self::TABLE)
    }
}

// ── Color primaries ─────────────────────────────────────────────────

/// Chromaticity coordinates of the source primaries (H.273 § 8.1).
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorPrimaries {
    Reserved0 = 0,
    /// Rec. ITU-R BT.709; also sRGB.
    Bt709 = 1,
    #[default]
    Unspecified = 2,
    Reserved = 3,
    /// Rec. ITU-R BT.470 System M.
    Bt470m = 4,
    /// Rec. ITU-R BT.470 System B/G; 625-line PAL/SECAM.
    Bt470bg = 5,
    /// SMPTE 170M; 525-line NTSC.
    Smpte170m = 6,
    /// SMPTE 240M (functionally identical to 170M).
    Smpte240m = 7,
    /// Generic film with Illuminant C.
    Film = 8,
    /// Rec. ITU-R BT.2020 wide gamut.
    Bt2020 = 9,
    /// SMPTE ST 428-1 (CIE 1931 XYZ).
    Smpte428 = 10,
    /// SMPTE ST 431-2, DCI P3.
    Smpte431 = 11,
    /// SMPTE ST 432-1, Display P3.
    Smpte432 = 12,
    /// EBU Tech. 3213-E / JEDEC P22 phosphors.
    Ebu3213 = 22,
}

impl ColorPrimaries {
    const TABLE: &'static [(Self, &'static str, &'static [&'static str])] = &[
        (Self::Reserved0, "reserved", NO_ALIAS),
        (Self::Bt709, "bt709", NO_ALIAS),
        (Self::Unspecified, "unknown", NO_ALIAS),
        (Self::Reserved, "reserved", NO_ALIAS),
        (Self::Bt470m, "bt470m", NO_ALIAS),
        (Self::Bt470bg, "bt470bg", NO_ALIAS),
        (Self::Smpte170m, "smpte170m", NO_ALIAS),
        (Self::Smpte240m, "smpte240m", NO_ALIAS),
        (Self::Film, "film", NO_ALIAS),
        (Self::Bt2020, "bt2020", NO_ALIAS),
        (Self::Smpte428, "smpte428", &["smpte428_1"]),
        (Self::Smpte431, "smpte431", NO_ALIAS),
        (Self::Smpte432, "smpte432", NO_ALIAS),
        (Self::Ebu3213, "ebu3213", &["jedec-p22"]),
    ];

    /// Canonical name of these primaries.
    pub fn name(self) -> &'static str {
        match self {
            Self::Reserved0 | Self::Reserved => "reserved",
            Self::Bt709 => "bt709",
            Self::Unspecified => "unknown",
            Self::Bt470m => "bt470m",
            Self::Bt470bg => "bt470bg",
            Self::Smpte170m => "smpte170m",
            Self::Smpte240m => "smpte240m",
            Self::Film => "film",
            Self::Bt2020 => "bt2020",
            Self::Smpte428 => "smpte428",
            Self::Smpte431 => "smpte431",
            Self::Smpte432 => "smpte432",
            Self::Ebu3213 => "ebu3213",
        }
    }

    /// Look up primaries by name or alias, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, PixFmtError> {
        from_name_impl("color primaries", name, Self::TABLE)
    }
}

// ── Transfer characteristic ─────────────────────────────────────────

/// Opto-electronic transfer characteristic (H.273 § 8.2).
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorTransfer {
    Reserved0 = 0,
    /// Rec. ITU-R BT.709 / BT.1361.
    Bt709 = 1,
    #[default]
    Unspecified = 2,
    Reserved = 3,
    /// Assumed display gamma 2.2 (BT.470 System M).
    Gamma22 = 4,
    /// Assumed display gamma 2.8 (BT.470 System B/G).
    Gamma28 = 5,
    /// SMPTE 170M.
    Smpte170m = 6,
    /// SMPTE 240M.
    Smpte240m = 7,
    /// Linear light.
    Linear = 8,
    /// Logarithmic, 100:1 range.
    Log100 = 9,
    /// Logarithmic, 100*sqrt(10):1 range.
    Log316 = 10,
    /// IEC 61966-2-4 (xvYCC).
    Iec61966_2_4 = 11,
    /// Rec. ITU-R BT.1361 extended color gamut.
    Bt1361Ecg = 12,
    /// IEC 61966-2-1 (sRGB/sYCC).
    Iec61966_2_1 = 13,
    /// Rec. ITU-R BT.2020 for 10-bit systems.
    Bt2020_10 = 14,
    /// Rec. ITU-R BT.2020 for 12-bit systems.
    Bt2020_12 = 15,
    /// SMPTE ST 2084 perceptual quantizer (HDR10).
    Smpte2084 = 16,
    /// SMPTE ST 428-1.
    Smpte428 = 17,
    /// ARIB STD-B67 hybrid log-gamma.
    AribStdB67 = 18,
}

impl ColorTransfer {
    const TABLE: &'static [(Self, &'static str, &'static [&'static str])] = &[
        (Self::Reserved0, "reserved", NO_ALIAS),
        (Self::Bt709, "bt709", NO_ALIAS),
        (Self::Unspecified, "unknown", NO_ALIAS),
        (Self::Reserved, "reserved", NO_ALIAS),
        (Self::Gamma22, "bt470m", &["gamma22"]),
        (Self::Gamma28, "bt470bg", &["gamma28"]),
        (Self::Smpte170m, "smpte170m", NO_ALIAS),
        (Self::Smpte240m, "smpte240m", NO_ALIAS),
        (Self::Linear, "linear", NO_ALIAS),
        (Self::Log100, "log100", &["log"]),
        (Self::Log316, "log316", &["log_sqrt"]),
        (Self::Iec61966_2_4, "iec61966-2-4", &["iec61966_2_4"]),
        (Self::Bt1361Ecg, "bt1361e", &["bt1361"]),
        (Self::Iec61966_2_1, "iec61966-2-1", &["iec61966_2_1", "srgb"]),
        (Self::Bt2020_10, "bt2020-10", &["bt2020_10bit"]),
        (Self::Bt2020_12, "bt2020-12", &["bt2020_12bit"]),
        (Self::Smpte2084, "smpte2084", NO_ALIAS),
        (Self::Smpte428, "smpte428", &["smpte428_1"]),
        (Self::AribStdB67, "arib-std-b67", NO_ALIAS),
    ];

    /// Canonical name of this transfer characteristic.
    pub fn name(self) -> &'static str {
        match self {
            Self::Reserved0 | Self::Reserved => "reserved",
            Self::Bt709 => "bt709",
            Self::Unspecified => "unknown",
            Self::Gamma22 => "bt470m",
            Self::Gamma28 => "bt470bg",
            Self::Smpte170m => "smpte170m",
            Self::Smpte240m => "smpte240m",
            Self::Linear => "linear",
            Self::Log100 => "log100",
            Self::Log316 => "log316",
            Self::Iec61966_2_4 => "iec61966-2-4",
            Self::Bt1361Ecg => "bt1361e",
            Self::Iec61966_2_1 => "iec61966-2-1",
            Self::Bt2020_10 => "bt2020-10",
            Self::Bt2020_12 => "bt2020-12",
            Self::Smpte2084 => "smpte2084",
            Self::Smpte428 => "smpte428",
            Self::AribStdB67 => "arib-std-b67",
        }
    }

    /// Look up a transfer characteristic by name or alias,
    /// case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, PixFmtError> {
        from_name_impl("color transfer", name, Self::TABLE)
    }
}

// ── Color space (matrix coefficients) ───────────────────────────────

/// Matrix coefficients for deriving luma/chroma from RGB (H.273 § 8.3).
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Identity matrix: the samples are G, B, R (or X, Y, Z).
    Rgb = 0,
    /// Rec. ITU-R BT.709.
    Bt709 = 1,
    #[default]
    Unspecified = 2,
    Reserved = 3,
    /// US FCC Title 47.
    Fcc = 4,
    /// Rec. ITU-R BT.470 System B/G; BT.601 625-line.
    Bt470bg = 5,
    /// SMPTE 170M; BT.601 525-line.
    Smpte170m = 6,
    /// SMPTE 240M.
    Smpte240m = 7,
    /// YCgCo.
    Ycgco = 8,
    /// Rec. ITU-R BT.2020 non-constant luminance.
    Bt2020Ncl = 9,
    /// Rec. ITU-R BT.2020 constant luminance.
    Bt2020Cl = 10,
    /// SMPTE ST 2085 Y'D'zD'x.
    Smpte2085 = 11,
    /// Chromaticity-derived, non-constant luminance.
    ChromaDerivedNcl = 12,
    /// Chromaticity-derived, constant luminance.
    ChromaDerivedCl = 13,
    /// Rec. ITU-R BT.2100 ICtCp.
    Ictcp = 14,
}

impl ColorSpace {
    const TABLE: &'static [(Self, &'static str, &'static [&'static str])] = &[
        (Self::Rgb, "gbr", &["rgb"]),
        (Self::Bt709, "bt709", NO_ALIAS),
        (Self::Unspecified, "unknown", NO_ALIAS),
        (Self::Reserved, "reserved", NO_ALIAS),
        (Self::Fcc, "fcc", NO_ALIAS),
        (Self::Bt470bg, "bt470bg", NO_ALIAS),
        (Self::Smpte170m, "smpte170m", NO_ALIAS),
        (Self::Smpte240m, "smpte240m", NO_ALIAS),
        (Self::Ycgco, "ycgco", &["ycocg"]),
        (Self::Bt2020Ncl, "bt2020nc", &["bt2020_ncl"]),
        (Self::Bt2020Cl, "bt2020c", &["bt2020_cl"]),
        (Self::Smpte2085, "smpte2085", NO_ALIAS),
        (Self::ChromaDerivedNcl, "chroma-derived-nc", NO_ALIAS),
        (Self::ChromaDerivedCl, "chroma-derived-c", NO_ALIAS),
        (Self::Ictcp, "ictcp", NO_ALIAS),
    ];

    /// Canonical name of this color space.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rgb => "gbr",
            Self::Bt709 => "bt709",
            Self::Unspecified => "unknown",
            Self::Reserved => "reserved",
            Self::Fcc => "fcc",
            Self::Bt470bg => "bt470bg",
            Self::Smpte170m => "smpte170m",
            Self::Smpte240m => "smpte240m",
            Self::Ycgco => "ycgco",
            Self::Bt2020Ncl => "bt2020nc",
            Self::Bt2020Cl => "bt2020c",
            Self::Smpte2085 => "smpte2085",
            Self::ChromaDerivedNcl => "chroma-derived-nc",
            Self::ChromaDerivedCl => "chroma-derived-c",
            Self::Ictcp => "ictcp",
        }
    }

    /// Look up a color space by name or alias, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, PixFmtError> {
        from_name_impl("color space", name, Self::TABLE)
    }
}

// ── Chroma sample location ──────────────────────────────────────────

/// Spatial alignment of chroma samples relative to luma in subsampled
/// formats.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChromaLocation {
    #[default]
    Unspecified = 0,
    /// MPEG-2/4 and H.264 default for 4:2:0.
    Left = 1,
    /// JPEG, H.261, MPEG-1 4:2:0.
    Center = 2,
    /// DV 4:2:0.
    TopLeft = 3,
    Top = 4,
    BottomLeft = 5,
    Bottom = 6,
}

impl ChromaLocation {
    const TABLE: &'static [(Self, &'static str, &'static [&'static str])] = &[
        (Self::Unspecified, "unspecified", &["unknown"]),
        (Self::Left, "left", NO_ALIAS),
        (Self::Center, "center", NO_ALIAS),
        (Self::TopLeft, "topleft", NO_ALIAS),
        (Self::Top, "top", NO_ALIAS),
        (Self::BottomLeft, "bottomleft", NO_ALIAS),
        (Self::Bottom, "bottom", NO_ALIAS),
    ];

    /// Canonical name of this chroma location.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Left => "left",
            Self::Center => "center",
            Self::TopLeft => "topleft",
            Self::Top => "top",
            Self::BottomLeft => "bottomleft",
            Self::Bottom => "bottom",
        }
    }

    /// Look up a chroma location by name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, PixFmtError> {
        from_name_impl("chroma location", name, Self::TABLE)
    }

    /// The chroma sample position relative to the top-left luma sample,
    /// in 1/256 luma units. `None` for [`Unspecified`](Self::Unspecified).
    pub fn to_pos(self) -> Option<(u32, u32)> {
        match self {
            Self::Unspecified => None,
            Self::Left => Some((0, 128)),
            Self::Center => Some((128, 128)),
            Self::TopLeft => Some((0, 0)),
            Self::Top => Some((128, 0)),
            Self::BottomLeft => Some((0, 256)),
            Self::Bottom => Some((128, 256)),
        }
    }

    /// The location whose sample position is exactly `(x, y)` in 1/256
    /// luma units, or [`Unspecified`](Self::Unspecified) if none matches.
    pub fn from_pos(x: u32, y: u32) -> Self {
        match (x, y) {
            (0, 128) => Self::Left,
            (128, 128) => Self::Center,
            (0, 0) => Self::TopLeft,
            (128, 0) => Self::Top,
            (0, 256) => Self::BottomLeft,
            (128, 256) => Self::Bottom,
            _ => Self::Unspecified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_names_round_trip() {
        assert_eq!(ColorRange::Mpeg.name(), "tv");
        assert_eq!(ColorRange::from_name("tv").ok(), Some(ColorRange::Mpeg));
        assert_eq!(ColorRange::from_name("LIMITED").ok(), Some(ColorRange::Mpeg));
        assert_eq!(ColorRange::from_name("full").ok(), Some(ColorRange::Jpeg));
        assert!(matches!(
            ColorRange::from_name(""),
            Err(PixFmtError::EmptyName)
        ));
        assert!(matches!(
            ColorRange::from_name("studio"),
            Err(PixFmtError::UnknownColorName { kind: "color range", .. })
        ));
    }

    #[test]
    fn primaries_code_points() {
        assert_eq!(ColorPrimaries::Bt709 as u8, 1);
        assert_eq!(ColorPrimaries::Bt2020 as u8, 9);
        assert_eq!(ColorPrimaries::Ebu3213 as u8, 22);
        assert_eq!(
            ColorPrimaries::from_name("Bt2020").ok(),
            Some(ColorPrimaries::Bt2020)
        );
        assert_eq!(
            ColorPrimaries::from_name("jedec-p22").ok(),
            Some(ColorPrimaries::Ebu3213)
        );
        // Ambiguous "reserved" resolves to the lowest code point.
        assert_eq!(
            ColorPrimaries::from_name("reserved").ok(),
            Some(ColorPrimaries::Reserved0)
        );
    }

    #[test]
    fn transfer_names() {
        assert_eq!(ColorTransfer::Smpte2084.name(), "smpte2084");
        assert_eq!(
            ColorTransfer::from_name("arib-std-b67").ok(),
            Some(ColorTransfer::AribStdB67)
        );
        assert_eq!(
            ColorTransfer::from_name("sRGB").ok(),
            Some(ColorTransfer::Iec61966_2_1)
        );
        assert_eq!(ColorTransfer::AribStdB67 as u8, 18);
    }

    #[test]
    fn space_names() {
        assert_eq!(ColorSpace::Rgb.name(), "gbr");
        assert_eq!(ColorSpace::from_name("bt2020nc").ok(), Some(ColorSpace::Bt2020Ncl));
        assert_eq!(ColorSpace::from_name("YCoCg").ok(), Some(ColorSpace::Ycgco));
        assert_eq!(ColorSpace::Ictcp as u8, 14);
    }

    #[test]
    fn chroma_location_positions() {
        assert_eq!(ChromaLocation::Left.to_pos(), Some((0, 128)));
        assert_eq!(ChromaLocation::TopLeft.to_pos(), Some((0, 0)));
        assert_eq!(ChromaLocation::Bottom.to_pos(), Some((128, 256)));
        assert_eq!(ChromaLocation::Unspecified.to_pos(), None);
        for loc in [
            ChromaLocation::Left,
            ChromaLocation::Center,
            ChromaLocation::TopLeft,
            ChromaLocation::Top,
            ChromaLocation::BottomLeft,
            ChromaLocation::Bottom,
        ] {
            let (x, y) = loc.to_pos().unwrap();
            assert_eq!(ChromaLocation::from_pos(x, y), loc);
        }
        assert_eq!(ChromaLocation::from_pos(64, 64), ChromaLocation::Unspecified);
    }
}
