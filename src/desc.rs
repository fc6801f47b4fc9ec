//! Descriptor model: how the bits of a pixel are stored in the up to 4
//! data planes of an image.

use core::fmt;

use bitflags::bitflags;

use crate::error::PixFmtError;
use crate::format::PixelFormat;

bitflags! {
    /// Structural properties of a pixel format.
    ///
    /// Flags are descriptive metadata kept consistent with the component
    /// table by construction of the catalog; they are not derived from it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct FormatFlags: u16 {
        /// Multi-byte sample containers are stored big-endian.
        const BIG_ENDIAN = 1 << 0;
        /// Samples are indices into a 256-entry palette stored in plane 1.
        const PALETTE = 1 << 1;
        /// Component values are bit-packed end to end with no byte alignment.
        const BITSTREAM = 1 << 2;
        /// Opaque hardware surface; carries no plane layout.
        const HWACCEL = 1 << 3;
        /// At least one component lives outside the first data plane.
        const PLANAR = 1 << 4;
        /// Carries RGB-like data (as opposed to YUV/grayscale).
        const RGB = 1 << 5;
        /// Has an alpha component.
        const ALPHA = 1 << 7;
        /// Samples follow a Bayer mosaic pattern.
        const BAYER = 1 << 8;
        /// Samples are IEEE-754 floating point; precision follows the
        /// container size (16, 32, or 64 bits).
        const FLOAT = 1 << 9;
        /// Carries XYZ-like data (as opposed to YUV/RGB/grayscale).
        const XYZ = 1 << 10;
    }
}

/// How one component's samples are packed within their plane.
///
/// For [`BITSTREAM`](FormatFlags::BITSTREAM) formats, `step` and `offset`
/// are measured in bits instead of bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComponentDesc {
    /// Which of the up to 4 planes holds this component.
    pub plane: u8,
    /// Distance between the starts of two successive samples, in bytes.
    pub step: u16,
    /// Distance from the start of the pixel group to this component's
    /// container, in bytes. May be -1 for big-endian formats whose
    /// single-byte container sits one past the addressed byte.
    pub offset: i8,
    /// Low-order bits to discard after loading the container.
    pub shift: u8,
    /// Meaningful bits per sample (may be less than the container width).
    pub depth: u8,
}

/// Color family a format belongs to, derived from its flags and name.
/// Drives the colorspace arm of the loss computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ColorFamily {
    Unknown,
    Rgb,
    Gray,
    Yuv,
    /// Full-range "yuvj" legacy formats.
    YuvJpeg,
    Xyz,
}

/// Describes how pixel samples of one format are laid out in memory:
/// component count, chroma subsampling, flags, and the per-component
/// packing table.
///
/// Descriptors are static catalog data; every accessor is a pure read.
#[derive(Debug, PartialEq, Eq)]
pub struct PixFmtDescriptor {
    pub(crate) id: PixelFormat,
    pub(crate) name: &'static str,
    /// Comma-separated alternate names, if any.
    pub(crate) alias: Option<&'static str>,
    pub(crate) nb_components: u8,
    pub(crate) log2_chroma_w: u8,
    pub(crate) log2_chroma_h: u8,
    pub(crate) flags: FormatFlags,
    pub(crate) comp: [ComponentDesc; 4],
}

impl PixFmtDescriptor {
    /// The format this descriptor belongs to.
    pub fn id(&self) -> PixelFormat {
        self.id
    }

    /// Canonical short name, e.g. `"yuv420p"` or `"rgb24"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Comma-separated alternate names, if any (e.g. `"gray8,y8"`).
    pub fn alias(&self) -> Option<&'static str> {
        self.alias
    }

    /// Number of color/alpha components (0 for hardware surfaces).
    pub fn nb_components(&self) -> usize {
        usize::from(self.nb_components)
    }

    /// Base-2 log of the horizontal chroma subsampling factor
    /// (1 for 4:2:0 and 4:2:2, 0 for unsubsampled formats).
    pub fn log2_chroma_w(&self) -> u8 {
        self.log2_chroma_w
    }

    /// Base-2 log of the vertical chroma subsampling factor
    /// (1 for 4:2:0, 0 for 4:2:2 and unsubsampled formats).
    pub fn log2_chroma_h(&self) -> u8 {
        self.log2_chroma_h
    }

    /// Structural property flags.
    pub fn flags(&self) -> FormatFlags {
        self.flags
    }

    /// Packing description of the `i`-th component.
    ///
    /// `i` must be below 4; indices at or above
    /// [`nb_components`](Self::nb_components) yield a zeroed entry.
    pub fn component(&self, i: usize) -> Result<ComponentDesc, PixFmtError> {
        self.comp
            .get(i)
            .copied()
            .ok_or(PixFmtError::ComponentOutOfRange(i))
    }

    /// The components actually present, in component-index order
    /// (Y/R first, depending on the format family).
    pub fn components(&self) -> &[ComponentDesc] {
        &self.comp[..usize::from(self.nb_components)]
    }

    /// Meaningful bits per pixel, summed over all components and weighted
    /// by chroma subsampling. Ignores padding: yuv420p10le is 15, not 24.
    pub fn bits_per_pixel(&self) -> u32 {
        let log2_pixels = u32::from(self.log2_chroma_w) + u32::from(self.log2_chroma_h);
        let mut bits = 0u32;
        for (i, comp) in self.components().iter().enumerate() {
            // Chroma components are stored once per subsampled group.
            let s = if i == 1 || i == 2 { 0 } else { log2_pixels };
            bits += u32::from(comp.depth) << s;
        }
        bits >> log2_pixels
    }

    /// Bits per pixel including container padding and alignment, derived
    /// from the per-plane step sizes. Always at least
    /// [`bits_per_pixel`](Self::bits_per_pixel): yuv420p10le is 24.
    pub fn padded_bits_per_pixel(&self) -> u32 {
        let log2_pixels = u32::from(self.log2_chroma_w) + u32::from(self.log2_chroma_h);
        let mut steps = [0u32; 4];
        for (i, comp) in self.components().iter().enumerate() {
            let s = if i == 1 || i == 2 { 0 } else { log2_pixels };
            steps[usize::from(comp.plane)] = u32::from(comp.step) << s;
        }
        let mut bits: u32 = steps.iter().sum();
        if !self.flags.contains(FormatFlags::BITSTREAM) {
            bits *= 8;
        }
        bits >> log2_pixels
    }

    /// Whether at least one component lives outside plane 0.
    pub fn is_planar(&self) -> bool {
        self.flags.contains(FormatFlags::PLANAR)
    }

    /// Whether the format carries RGB-like data.
    pub fn is_rgb(&self) -> bool {
        self.flags.contains(FormatFlags::RGB)
    }

    /// Whether component values are bit-packed without byte alignment.
    pub fn is_bitstream(&self) -> bool {
        self.flags.contains(FormatFlags::BITSTREAM)
    }

    /// Whether samples are palette indices.
    pub fn has_palette(&self) -> bool {
        self.flags.contains(FormatFlags::PALETTE)
    }

    /// Whether the format has an alpha component.
    pub fn has_alpha(&self) -> bool {
        self.flags.contains(FormatFlags::ALPHA)
    }

    /// Whether this is an opaque hardware-surface token.
    pub fn is_hwaccel(&self) -> bool {
        self.flags.contains(FormatFlags::HWACCEL)
    }

    /// Whether samples are IEEE-754 floating point.
    pub fn is_float(&self) -> bool {
        self.flags.contains(FormatFlags::FLOAT)
    }

    /// Whether samples follow a Bayer mosaic.
    pub fn is_bayer(&self) -> bool {
        self.flags.contains(FormatFlags::BAYER)
    }

    pub(crate) fn color_family(&self) -> ColorFamily {
        if self.flags.contains(FormatFlags::PALETTE) {
            return ColorFamily::Rgb;
        }
        if self.nb_components == 1 || self.nb_components == 2 {
            return ColorFamily::Gray;
        }
        if self.name.starts_with("yuvj") {
            return ColorFamily::YuvJpeg;
        }
        if self.flags.contains(FormatFlags::XYZ) {
            return ColorFamily::Xyz;
        }
        if self.flags.contains(FormatFlags::RGB) {
            return ColorFamily::Rgb;
        }
        if self.nb_components == 0 {
            return ColorFamily::Unknown;
        }
        ColorFamily::Yuv
    }

    /// Minimum and maximum component depth, or `None` for formats with no
    /// components (hardware surfaces).
    pub(crate) fn depth_range(&self) -> Option<(u8, u8)> {
        let comps = self.components();
        let first = comps.first()?;
        let mut min = first.depth;
        let mut max = first.depth;
        for comp in &comps[1..] {
            min = min.min(comp.depth);
            max = max.max(comp.depth);
        }
        Some((min, max))
    }
}

impl fmt::Display for PixFmtDescriptor {
    /// Name, component count, and bits per pixel, column-aligned for
    /// format listings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<11} {:7} {:10}",
            self.name,
            self.nb_components,
            self.bits_per_pixel()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_per_pixel_subsampled() {
        // 4:2:0 weights chroma at a quarter of luma.
        assert_eq!(PixelFormat::Yuv420p.descriptor().bits_per_pixel(), 12);
        assert_eq!(PixelFormat::Yuv420p10le.descriptor().bits_per_pixel(), 15);
        assert_eq!(PixelFormat::Yuv422p.descriptor().bits_per_pixel(), 16);
        assert_eq!(PixelFormat::Yuv444p.descriptor().bits_per_pixel(), 24);
    }

    #[test]
    fn padded_bits_per_pixel_counts_containers() {
        assert_eq!(
            PixelFormat::Yuv420p10le.descriptor().padded_bits_per_pixel(),
            24
        );
        assert_eq!(PixelFormat::Rgb565le.descriptor().padded_bits_per_pixel(), 16);
        assert_eq!(PixelFormat::Rgb565le.descriptor().bits_per_pixel(), 16);
        assert_eq!(PixelFormat::Rgb555le.descriptor().bits_per_pixel(), 15);
        assert_eq!(PixelFormat::Rgb555le.descriptor().padded_bits_per_pixel(), 16);
        // Bitstream formats count bits directly.
        assert_eq!(PixelFormat::MonoBlack.descriptor().bits_per_pixel(), 1);
        assert_eq!(PixelFormat::MonoBlack.descriptor().padded_bits_per_pixel(), 1);
    }

    #[test]
    fn padded_never_below_raw() {
        for desc in PixFmtDescriptor::all() {
            assert!(
                desc.padded_bits_per_pixel() >= desc.bits_per_pixel(),
                "{}",
                desc.name()
            );
        }
    }

    #[test]
    fn component_index_bounds() {
        let desc = PixelFormat::Rgb24.descriptor();
        assert!(desc.component(0).is_ok());
        assert!(desc.component(3).is_ok());
        assert!(matches!(
            desc.component(4),
            Err(PixFmtError::ComponentOutOfRange(4))
        ));
        // Indices past nb_components are zeroed, not errors.
        assert_eq!(desc.component(3).ok(), Some(ComponentDesc::default()));
    }

    #[test]
    fn color_families() {
        assert_eq!(
            PixelFormat::Rgb24.descriptor().color_family(),
            ColorFamily::Rgb
        );
        assert_eq!(
            PixelFormat::Gray8.descriptor().color_family(),
            ColorFamily::Gray
        );
        assert_eq!(
            PixelFormat::Ya8.descriptor().color_family(),
            ColorFamily::Gray
        );
        assert_eq!(
            PixelFormat::Yuv420p.descriptor().color_family(),
            ColorFamily::Yuv
        );
        assert_eq!(
            PixelFormat::Yuvj420p.descriptor().color_family(),
            ColorFamily::YuvJpeg
        );
        assert_eq!(
            PixelFormat::Xyz12le.descriptor().color_family(),
            ColorFamily::Xyz
        );
        assert_eq!(
            PixelFormat::Pal8.descriptor().color_family(),
            ColorFamily::Rgb
        );
        assert_eq!(
            PixelFormat::Vaapi.descriptor().color_family(),
            ColorFamily::Unknown
        );
    }

    #[test]
    fn display_lists_name_and_bpp() {
        let s = alloc::format!("{}", PixelFormat::Rgb24.descriptor());
        assert!(s.starts_with("rgb24"));
        assert!(s.ends_with("24"));
    }
}
