//! Loss-based format negotiation: score what converting between two
//! formats would discard, and pick the better of two candidates.

use bitflags::bitflags;

use crate::desc::ColorFamily;
use crate::error::PixFmtError;
use crate::format::PixelFormat;

bitflags! {
    /// Categories of information lost (or wastefully gained) when
    /// converting from a source to a destination format.
    ///
    /// Bit positions weight the categories: when masks are compared as
    /// integers, losing resolution outweighs losing color quantization.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct LossFlags: u32 {
        /// The destination subsamples chroma more than the source.
        const RESOLUTION = 0x0001;
        /// The destination's component depth is lower than the source's.
        const DEPTH = 0x0002;
        /// The destination's color family (RGB/gray/YUV/XYZ) differs.
        const COLORSPACE = 0x0004;
        /// The source carries alpha the destination cannot represent.
        const ALPHA = 0x0008;
        /// The destination quantizes to a palette.
        const COLORQUANT = 0x0010;
        /// The destination is gray-only, discarding chroma entirely.
        const CHROMA = 0x0020;
        /// Informational: the destination subsamples less than the source.
        const EXCESS_RESOLUTION = 0x0040;
        /// Informational: the destination's depth exceeds the source's.
        const EXCESS_DEPTH = 0x0080;
    }
}

/// Compute the loss mask for converting `src` to `dst`.
///
/// `src_has_alpha` states whether the source image actually carries
/// meaningful alpha; only then does a destination without an alpha
/// component count as alpha loss. A hardware surface on either side
/// loses everything.
///
/// Pure function of the two descriptors and the flag; enabling
/// `src_has_alpha` never changes any bit other than [`ALPHA`](LossFlags::ALPHA).
pub fn loss(dst: PixelFormat, src: PixelFormat, src_has_alpha: bool) -> LossFlags {
    let src_desc = src.descriptor();
    let dst_desc = dst.descriptor();

    if src_desc.is_hwaccel() || dst_desc.is_hwaccel() {
        return LossFlags::all();
    }

    let src_family = src_desc.color_family();
    let dst_family = dst_desc.color_family();
    let mut loss = LossFlags::empty();

    if let (Some((src_min, src_max)), Some((dst_min, dst_max))) =
        (src_desc.depth_range(), dst_desc.depth_range())
    {
        if src_min > dst_min || src_max > dst_max {
            loss |= LossFlags::DEPTH;
        }
        if dst_min > src_min {
            loss |= LossFlags::EXCESS_DEPTH;
        }
    }

    if dst_desc.log2_chroma_w() > src_desc.log2_chroma_w()
        || dst_desc.log2_chroma_h() > src_desc.log2_chroma_h()
    {
        loss |= LossFlags::RESOLUTION;
    }
    if dst_desc.log2_chroma_w() < src_desc.log2_chroma_w()
        || dst_desc.log2_chroma_h() < src_desc.log2_chroma_h()
    {
        loss |= LossFlags::EXCESS_RESOLUTION;
    }

    let colorspace_kept = match dst_family {
        ColorFamily::Rgb => matches!(src_family, ColorFamily::Rgb | ColorFamily::Gray),
        ColorFamily::Gray => src_family == ColorFamily::Gray,
        ColorFamily::Yuv => src_family == ColorFamily::Yuv,
        ColorFamily::YuvJpeg => matches!(
            src_family,
            ColorFamily::YuvJpeg | ColorFamily::Yuv | ColorFamily::Gray
        ),
        _ => src_family == dst_family,
    };
    if !colorspace_kept {
        loss |= LossFlags::COLORSPACE;
    }

    if dst_family == ColorFamily::Gray && src_family != ColorFamily::Gray {
        loss |= LossFlags::CHROMA;
    }

    if src_has_alpha && !dst_desc.has_alpha() {
        loss |= LossFlags::ALPHA;
    }

    if dst_desc.has_palette() && !src_desc.has_palette() && src_family != ColorFamily::Gray {
        loss |= LossFlags::COLORQUANT;
    }

    loss
}

/// Pick the candidate destination format that loses less of `src`,
/// comparing the loss masks as unsigned integers (so higher-weighted
/// categories dominate) and preferring `dst1` on ties.
///
/// A `None` candidate yields the other one; both `None` fails with
/// [`PixFmtError::NoSuitableFormat`].
pub fn find_best(
    dst1: Option<PixelFormat>,
    dst2: Option<PixelFormat>,
    src: PixelFormat,
    src_has_alpha: bool,
) -> Result<(PixelFormat, LossFlags), PixFmtError> {
    match (dst1, dst2) {
        (None, None) => Err(PixFmtError::NoSuitableFormat),
        (Some(only), None) | (None, Some(only)) => Ok((only, loss(only, src, src_has_alpha))),
        (Some(first), Some(second)) => {
            let loss1 = loss(first, src, src_has_alpha);
            let loss2 = loss(second, src, src_has_alpha);
            if loss2.bits() < loss1.bits() {
                Ok((second, loss2))
            } else {
                Ok((first, loss1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_lossless() {
        assert_eq!(
            loss(PixelFormat::Yuv420p, PixelFormat::Yuv420p, false),
            LossFlags::empty()
        );
        assert_eq!(
            loss(PixelFormat::Rgba, PixelFormat::Rgba, true),
            LossFlags::empty()
        );
    }

    #[test]
    fn depth_and_excess_depth() {
        assert_eq!(
            loss(PixelFormat::Rgb565le, PixelFormat::Rgb24, false),
            LossFlags::DEPTH
        );
        assert_eq!(
            loss(PixelFormat::Rgb48le, PixelFormat::Rgb24, false),
            LossFlags::EXCESS_DEPTH
        );
    }

    #[test]
    fn resolution_and_colorspace() {
        assert_eq!(
            loss(PixelFormat::Yuv420p, PixelFormat::Rgb24, false),
            LossFlags::RESOLUTION | LossFlags::COLORSPACE
        );
        assert_eq!(
            loss(PixelFormat::Yuv444p, PixelFormat::Yuv420p, false),
            LossFlags::EXCESS_RESOLUTION
        );
        // RGB accepts gray sources without colorspace loss.
        assert_eq!(
            loss(PixelFormat::Rgb24, PixelFormat::Gray8, false),
            LossFlags::empty()
        );
    }

    #[test]
    fn gray_destination_loses_chroma() {
        let l = loss(PixelFormat::Gray8, PixelFormat::Yuv444p, false);
        assert!(l.contains(LossFlags::CHROMA));
        assert!(l.contains(LossFlags::COLORSPACE));
    }

    #[test]
    fn jpeg_range_yuv() {
        // Full-range into limited-range is a colorspace loss...
        assert!(
            loss(PixelFormat::Yuv420p, PixelFormat::Yuvj420p, false)
                .contains(LossFlags::COLORSPACE)
        );
        // ...but the reverse widening is not.
        assert_eq!(
            loss(PixelFormat::Yuvj420p, PixelFormat::Yuv420p, false),
            LossFlags::empty()
        );
    }

    #[test]
    fn alpha_flag_only_toggles_alpha_bit() {
        for (dst, src) in [
            (PixelFormat::Rgb24, PixelFormat::Rgba),
            (PixelFormat::Yuv420p, PixelFormat::Rgba),
            (PixelFormat::Gray8, PixelFormat::Yuva420p),
            (PixelFormat::Rgba, PixelFormat::Rgba),
        ] {
            let without = loss(dst, src, false);
            let with = loss(dst, src, true);
            assert!(!without.contains(LossFlags::ALPHA));
            assert_eq!(with.difference(without), LossFlags::ALPHA & with);
            assert_eq!(with & !LossFlags::ALPHA, without & !LossFlags::ALPHA);
        }
    }

    #[test]
    fn palette_destination_quantizes() {
        assert!(
            loss(PixelFormat::Pal8, PixelFormat::Rgb24, false).contains(LossFlags::COLORQUANT)
        );
        // Gray sources fit a palette without quantization loss.
        assert!(
            !loss(PixelFormat::Pal8, PixelFormat::Gray8, false).contains(LossFlags::COLORQUANT)
        );
    }

    #[test]
    fn hardware_surfaces_lose_everything() {
        assert_eq!(
            loss(PixelFormat::Vaapi, PixelFormat::Rgb24, false),
            LossFlags::all()
        );
        assert_eq!(
            loss(PixelFormat::Rgb24, PixelFormat::Cuda, false),
            LossFlags::all()
        );
    }

    #[test]
    fn find_best_prefers_lower_weighted_mask() {
        // Keeping RGB at a lower depth beats switching colorspace and
        // subsampling chroma.
        let (best, bits) = find_best(
            Some(PixelFormat::Rgb565le),
            Some(PixelFormat::Yuv420p),
            PixelFormat::Rgb24,
            false,
        )
        .unwrap();
        assert_eq!(best, PixelFormat::Rgb565le);
        assert_eq!(bits, LossFlags::DEPTH);
        // Order of candidates does not change the winner.
        let (best, _) = find_best(
            Some(PixelFormat::Yuv420p),
            Some(PixelFormat::Rgb565le),
            PixelFormat::Rgb24,
            false,
        )
        .unwrap();
        assert_eq!(best, PixelFormat::Rgb565le);
    }

    #[test]
    fn find_best_ties_prefer_first() {
        let (best, _) = find_best(
            Some(PixelFormat::Yuv422p),
            Some(PixelFormat::Yuv422p16le),
            PixelFormat::Yuv422p,
            false,
        )
        .unwrap();
        assert_eq!(best, PixelFormat::Yuv422p);

        let (best, _) = find_best(
            Some(PixelFormat::Bgr24),
            Some(PixelFormat::Rgb24),
            PixelFormat::Rgb24,
            false,
        )
        .unwrap();
        assert_eq!(best, PixelFormat::Bgr24);
    }

    #[test]
    fn find_best_with_missing_candidates() {
        let (best, _) = find_best(None, Some(PixelFormat::Rgb24), PixelFormat::Rgb24, false)
            .unwrap();
        assert_eq!(best, PixelFormat::Rgb24);
        assert!(matches!(
            find_best(None, None, PixelFormat::Rgb24, false),
            Err(PixFmtError::NoSuitableFormat)
        ));
    }
}
