//! The static descriptor catalog.
//!
//! One entry per [`PixelFormat`] variant, in enumeration order. Everything
//! here is plain data; the layout rules live in the builders and the
//! addressing logic lives in `line.rs`. Flags must be kept consistent with
//! the component tables by hand when adding entries.

use crate::desc::{ComponentDesc, FormatFlags, PixFmtDescriptor};
use crate::format::PixelFormat;

const BE: FormatFlags = FormatFlags::BIG_ENDIAN;
const PAL: FormatFlags = FormatFlags::PALETTE;
const BITSTREAM: FormatFlags = FormatFlags::BITSTREAM;
const PLANAR: FormatFlags = FormatFlags::PLANAR;
const RGB: FormatFlags = FormatFlags::RGB;
const ALPHA: FormatFlags = FormatFlags::ALPHA;
const BAYER: FormatFlags = FormatFlags::BAYER;
const FLOAT: FormatFlags = FormatFlags::FLOAT;
const XYZ: FormatFlags = FormatFlags::XYZ;
const NONE: FormatFlags = FormatFlags::empty();

const fn c(plane: u8, step: u16, offset: i8, shift: u8, depth: u8) -> ComponentDesc {
    ComponentDesc {
        plane,
        step,
        offset,
        shift,
        depth,
    }
}

/// Unused component slot.
const Z: ComponentDesc = c(0, 0, 0, 0, 0);

const fn desc(
    id: PixelFormat,
    name: &'static str,
    nb: u8,
    lw: u8,
    lh: u8,
    flags: FormatFlags,
    comp: [ComponentDesc; 4],
) -> PixFmtDescriptor {
    PixFmtDescriptor {
        id,
        name,
        alias: None,
        nb_components: nb,
        log2_chroma_w: lw,
        log2_chroma_h: lh,
        flags,
        comp,
    }
}

const fn desc_alias(
    id: PixelFormat,
    name: &'static str,
    alias: &'static str,
    nb: u8,
    lw: u8,
    lh: u8,
    flags: FormatFlags,
    comp: [ComponentDesc; 4],
) -> PixFmtDescriptor {
    PixFmtDescriptor {
        id,
        name,
        alias: Some(alias),
        nb_components: nb,
        log2_chroma_w: lw,
        log2_chroma_h: lh,
        flags,
        comp,
    }
}

/// Planar YUV: one component per plane, identical step/shift/depth.
const fn yuv(
    id: PixelFormat,
    name: &'static str,
    lw: u8,
    lh: u8,
    step: u16,
    shift: u8,
    depth: u8,
    extra: FormatFlags,
) -> PixFmtDescriptor {
    desc(
        id,
        name,
        3,
        lw,
        lh,
        extra.union(PLANAR),
        [
            c(0, step, 0, shift, depth),
            c(1, step, 0, shift, depth),
            c(2, step, 0, shift, depth),
            Z,
        ],
    )
}

/// Planar YUV plus an alpha plane.
const fn yuva(
    id: PixelFormat,
    name: &'static str,
    lw: u8,
    lh: u8,
    step: u16,
    depth: u8,
    extra: FormatFlags,
) -> PixFmtDescriptor {
    desc(
        id,
        name,
        4,
        lw,
        lh,
        extra.union(PLANAR).union(ALPHA),
        [
            c(0, step, 0, 0, depth),
            c(1, step, 0, 0, depth),
            c(2, step, 0, 0, depth),
            c(3, step, 0, 0, depth),
        ],
    )
}

/// Planar RGB in G/B/R plane order; component order stays R, G, B.
const fn gbr(
    id: PixelFormat,
    name: &'static str,
    step: u16,
    shift: u8,
    depth: u8,
    extra: FormatFlags,
) -> PixFmtDescriptor {
    desc(
        id,
        name,
        3,
        0,
        0,
        extra.union(PLANAR).union(RGB),
        [
            c(2, step, 0, shift, depth),
            c(0, step, 0, shift, depth),
            c(1, step, 0, shift, depth),
            Z,
        ],
    )
}

/// Planar RGB plus an alpha plane.
const fn gbra(
    id: PixelFormat,
    name: &'static str,
    step: u16,
    depth: u8,
    extra: FormatFlags,
) -> PixFmtDescriptor {
    desc(
        id,
        name,
        4,
        0,
        0,
        extra.union(PLANAR).union(RGB).union(ALPHA),
        [
            c(2, step, 0, 0, depth),
            c(0, step, 0, 0, depth),
            c(1, step, 0, 0, depth),
            c(3, step, 0, 0, depth),
        ],
    )
}

const fn gray(
    id: PixelFormat,
    name: &'static str,
    step: u16,
    depth: u8,
    extra: FormatFlags,
) -> PixFmtDescriptor {
    desc(id, name, 1, 0, 0, extra, [c(0, step, 0, 0, depth), Z, Z, Z])
}

const fn gray_alias(
    id: PixelFormat,
    name: &'static str,
    alias: &'static str,
    step: u16,
    depth: u8,
    extra: FormatFlags,
) -> PixFmtDescriptor {
    desc_alias(
        id,
        name,
        alias,
        1,
        0,
        0,
        extra,
        [c(0, step, 0, 0, depth), Z, Z, Z],
    )
}

/// Interleaved gray + alpha in one plane.
const fn ya(
    id: PixelFormat,
    name: &'static str,
    step: u16,
    aoff: i8,
    depth: u8,
    extra: FormatFlags,
) -> PixFmtDescriptor {
    desc(
        id,
        name,
        2,
        0,
        0,
        extra.union(ALPHA),
        [c(0, step, 0, 0, depth), c(0, step, aoff, 0, depth), Z, Z],
    )
}

/// Packed RGB with byte-aligned channels at the given offsets.
const fn rgb_pack(
    id: PixelFormat,
    name: &'static str,
    step: u16,
    ro: i8,
    go: i8,
    bo: i8,
    depth: u8,
    extra: FormatFlags,
) -> PixFmtDescriptor {
    desc(
        id,
        name,
        3,
        0,
        0,
        extra.union(RGB),
        [
            c(0, step, ro, 0, depth),
            c(0, step, go, 0, depth),
            c(0, step, bo, 0, depth),
            Z,
        ],
    )
}

/// Packed RGBA with byte-aligned channels at the given offsets.
const fn rgba_pack(
    id: PixelFormat,
    name: &'static str,
    step: u16,
    ro: i8,
    go: i8,
    bo: i8,
    ao: i8,
    depth: u8,
    extra: FormatFlags,
) -> PixFmtDescriptor {
    desc(
        id,
        name,
        4,
        0,
        0,
        extra.union(RGB).union(ALPHA),
        [
            c(0, step, ro, 0, depth),
            c(0, step, go, 0, depth),
            c(0, step, bo, 0, depth),
            c(0, step, ao, 0, depth),
        ],
    )
}

/// Semi-planar 8-bit: Y plane plus one interleaved chroma plane.
const fn semi8(
    id: PixelFormat,
    name: &'static str,
    lw: u8,
    lh: u8,
    uoff: i8,
    voff: i8,
) -> PixFmtDescriptor {
    desc(
        id,
        name,
        3,
        lw,
        lh,
        PLANAR,
        [
            c(0, 1, 0, 0, 8),
            c(1, 2, uoff, 0, 8),
            c(1, 2, voff, 0, 8),
            Z,
        ],
    )
}

/// Semi-planar with 16-bit containers (NV20/P0xx/P2xx/P4xx families).
const fn semi16(
    id: PixelFormat,
    name: &'static str,
    lw: u8,
    lh: u8,
    shift: u8,
    depth: u8,
    extra: FormatFlags,
) -> PixFmtDescriptor {
    desc(
        id,
        name,
        3,
        lw,
        lh,
        extra.union(PLANAR),
        [
            c(0, 2, 0, shift, depth),
            c(1, 4, 0, shift, depth),
            c(1, 4, 2, shift, depth),
            Z,
        ],
    )
}

/// Bayer mosaic; effective depths per channel are halved/quartered by the
/// 2x2 pattern.
const fn bayer(
    id: PixelFormat,
    name: &'static str,
    step: u16,
    dlo: u8,
    dhi: u8,
    extra: FormatFlags,
) -> PixFmtDescriptor {
    desc(
        id,
        name,
        3,
        0,
        0,
        extra.union(RGB).union(BAYER),
        [
            c(0, step, 0, 0, dlo),
            c(0, step, 0, 0, dhi),
            c(0, step, 0, 0, dlo),
            Z,
        ],
    )
}

/// Opaque hardware surface: a name and the flag, no layout.
const fn hw(id: PixelFormat, name: &'static str) -> PixFmtDescriptor {
    desc(id, name, 0, 0, 0, FormatFlags::HWACCEL, [Z, Z, Z, Z])
}

use crate::format::PixelFormat as P;

pub(crate) static DESCRIPTORS: [PixFmtDescriptor; PixelFormat::COUNT] = [
    yuv(P::Yuv420p, "yuv420p", 1, 1, 1, 0, 8, NONE),
    desc(P::Yuyv422, "yuyv422", 3, 1, 0, NONE, [c(0, 2, 0, 0, 8), c(0, 4, 1, 0, 8), c(0, 4, 3, 0, 8), Z]),
    rgb_pack(P::Rgb24, "rgb24", 3, 0, 1, 2, 8, NONE),
    rgb_pack(P::Bgr24, "bgr24", 3, 2, 1, 0, 8, NONE),
    yuv(P::Yuv422p, "yuv422p", 1, 0, 1, 0, 8, NONE),
    yuv(P::Yuv444p, "yuv444p", 0, 0, 1, 0, 8, NONE),
    yuv(P::Yuv410p, "yuv410p", 2, 2, 1, 0, 8, NONE),
    yuv(P::Yuv411p, "yuv411p", 2, 0, 1, 0, 8, NONE),
    gray_alias(P::Gray8, "gray", "gray8,y8", 1, 8, NONE),
    desc(P::MonoWhite, "monowhite", 1, 0, 0, BITSTREAM, [c(0, 1, 0, 0, 1), Z, Z, Z]),
    desc(P::MonoBlack, "monoblack", 1, 0, 0, BITSTREAM, [c(0, 1, 0, 0, 1), Z, Z, Z]),
    desc(P::Pal8, "pal8", 1, 0, 0, PAL.union(ALPHA), [c(0, 1, 0, 0, 8), Z, Z, Z]),
    yuv(P::Yuvj420p, "yuvj420p", 1, 1, 1, 0, 8, NONE),
    yuv(P::Yuvj422p, "yuvj422p", 1, 0, 1, 0, 8, NONE),
    yuv(P::Yuvj444p, "yuvj444p", 0, 0, 1, 0, 8, NONE),
    desc(P::Uyvy422, "uyvy422", 3, 1, 0, NONE, [c(0, 2, 1, 0, 8), c(0, 4, 0, 0, 8), c(0, 4, 2, 0, 8), Z]),
    desc(P::Uyyvyy411, "uyyvyy411", 3, 2, 0, NONE, [c(0, 6, 1, 0, 8), c(0, 6, 0, 0, 8), c(0, 6, 3, 0, 8), Z]),
    desc(P::Bgr8, "bgr8", 3, 0, 0, RGB, [c(0, 1, 0, 0, 3), c(0, 1, 0, 3, 3), c(0, 1, 0, 6, 2), Z]),
    desc(P::Bgr4, "bgr4", 3, 0, 0, BITSTREAM.union(RGB), [c(0, 4, 3, 0, 1), c(0, 4, 1, 0, 2), c(0, 4, 0, 0, 1), Z]),
    desc(P::Bgr4Byte, "bgr4_byte", 3, 0, 0, RGB, [c(0, 1, 0, 0, 1), c(0, 1, 0, 1, 2), c(0, 1, 0, 3, 1), Z]),
    desc(P::Rgb8, "rgb8", 3, 0, 0, RGB, [c(0, 1, 0, 5, 3), c(0, 1, 0, 2, 3), c(0, 1, 0, 0, 2), Z]),
    desc(P::Rgb4, "rgb4", 3, 0, 0, BITSTREAM.union(RGB), [c(0, 4, 0, 0, 1), c(0, 4, 1, 0, 2), c(0, 4, 3, 0, 1), Z]),
    desc(P::Rgb4Byte, "rgb4_byte", 3, 0, 0, RGB, [c(0, 1, 0, 3, 1), c(0, 1, 0, 1, 2), c(0, 1, 0, 0, 1), Z]),
    semi8(P::Nv12, "nv12", 1, 1, 0, 1),
    semi8(P::Nv21, "nv21", 1, 1, 1, 0),
    rgba_pack(P::Argb, "argb", 4, 1, 2, 3, 0, 8, NONE),
    rgba_pack(P::Rgba, "rgba", 4, 0, 1, 2, 3, 8, NONE),
    rgba_pack(P::Abgr, "abgr", 4, 3, 2, 1, 0, 8, NONE),
    rgba_pack(P::Bgra, "bgra", 4, 2, 1, 0, 3, 8, NONE),
    gray_alias(P::Gray16be, "gray16be", "y16be", 2, 16, BE),
    gray_alias(P::Gray16le, "gray16le", "y16le", 2, 16, NONE),
    yuv(P::Yuv440p, "yuv440p", 0, 1, 1, 0, 8, NONE),
    yuv(P::Yuvj440p, "yuvj440p", 0, 1, 1, 0, 8, NONE),
    yuva(P::Yuva420p, "yuva420p", 1, 1, 1, 8, NONE),
    rgb_pack(P::Rgb48be, "rgb48be", 6, 0, 2, 4, 16, BE),
    rgb_pack(P::Rgb48le, "rgb48le", 6, 0, 2, 4, 16, NONE),
    desc(P::Rgb565be, "rgb565be", 3, 0, 0, RGB.union(BE), [c(0, 2, -1, 3, 5), c(0, 2, 0, 5, 6), c(0, 2, 0, 0, 5), Z]),
    desc(P::Rgb565le, "rgb565le", 3, 0, 0, RGB, [c(0, 2, 1, 3, 5), c(0, 2, 0, 5, 6), c(0, 2, 0, 0, 5), Z]),
    desc(P::Rgb555be, "rgb555be", 3, 0, 0, RGB.union(BE), [c(0, 2, -1, 2, 5), c(0, 2, 0, 5, 5), c(0, 2, 0, 0, 5), Z]),
    desc(P::Rgb555le, "rgb555le", 3, 0, 0, RGB, [c(0, 2, 1, 2, 5), c(0, 2, 0, 5, 5), c(0, 2, 0, 0, 5), Z]),
    desc(P::Bgr565be, "bgr565be", 3, 0, 0, RGB.union(BE), [c(0, 2, 0, 0, 5), c(0, 2, 0, 5, 6), c(0, 2, -1, 3, 5), Z]),
    desc(P::Bgr565le, "bgr565le", 3, 0, 0, RGB, [c(0, 2, 0, 0, 5), c(0, 2, 0, 5, 6), c(0, 2, 1, 3, 5), Z]),
    desc(P::Bgr555be, "bgr555be", 3, 0, 0, RGB.union(BE), [c(0, 2, 0, 0, 5), c(0, 2, 0, 5, 5), c(0, 2, -1, 2, 5), Z]),
    desc(P::Bgr555le, "bgr555le", 3, 0, 0, RGB, [c(0, 2, 0, 0, 5), c(0, 2, 0, 5, 5), c(0, 2, 1, 2, 5), Z]),
    hw(P::Vaapi, "vaapi"),
    yuv(P::Yuv420p16le, "yuv420p16le", 1, 1, 2, 0, 16, NONE),
    yuv(P::Yuv420p16be, "yuv420p16be", 1, 1, 2, 0, 16, BE),
    yuv(P::Yuv422p16le, "yuv422p16le", 1, 0, 2, 0, 16, NONE),
    yuv(P::Yuv422p16be, "yuv422p16be", 1, 0, 2, 0, 16, BE),
    yuv(P::Yuv444p16le, "yuv444p16le", 0, 0, 2, 0, 16, NONE),
    yuv(P::Yuv444p16be, "yuv444p16be", 0, 0, 2, 0, 16, BE),
    hw(P::Dxva2Vld, "dxva2_vld"),
    desc(P::Rgb444le, "rgb444le", 3, 0, 0, RGB, [c(0, 2, 1, 0, 4), c(0, 2, 0, 4, 4), c(0, 2, 0, 0, 4), Z]),
    desc(P::Rgb444be, "rgb444be", 3, 0, 0, RGB.union(BE), [c(0, 2, -1, 0, 4), c(0, 2, 0, 4, 4), c(0, 2, 0, 0, 4), Z]),
    desc(P::Bgr444le, "bgr444le", 3, 0, 0, RGB, [c(0, 2, 0, 0, 4), c(0, 2, 0, 4, 4), c(0, 2, 1, 0, 4), Z]),
    desc(P::Bgr444be, "bgr444be", 3, 0, 0, RGB.union(BE), [c(0, 2, 0, 0, 4), c(0, 2, 0, 4, 4), c(0, 2, -1, 0, 4), Z]),
    desc_alias(P::Ya8, "ya8", "gray8a", 2, 0, 0, ALPHA, [c(0, 2, 0, 0, 8), c(0, 2, 1, 0, 8), Z, Z]),
    rgb_pack(P::Bgr48be, "bgr48be", 6, 4, 2, 0, 16, BE),
    rgb_pack(P::Bgr48le, "bgr48le", 6, 4, 2, 0, 16, NONE),
    yuv(P::Yuv420p9be, "yuv420p9be", 1, 1, 2, 0, 9, BE),
    yuv(P::Yuv420p9le, "yuv420p9le", 1, 1, 2, 0, 9, NONE),
    yuv(P::Yuv420p10be, "yuv420p10be", 1, 1, 2, 0, 10, BE),
    yuv(P::Yuv420p10le, "yuv420p10le", 1, 1, 2, 0, 10, NONE),
    yuv(P::Yuv422p10be, "yuv422p10be", 1, 0, 2, 0, 10, BE),
    yuv(P::Yuv422p10le, "yuv422p10le", 1, 0, 2, 0, 10, NONE),
    yuv(P::Yuv444p9be, "yuv444p9be", 0, 0, 2, 0, 9, BE),
    yuv(P::Yuv444p9le, "yuv444p9le", 0, 0, 2, 0, 9, NONE),
    yuv(P::Yuv444p10be, "yuv444p10be", 0, 0, 2, 0, 10, BE),
    yuv(P::Yuv444p10le, "yuv444p10le", 0, 0, 2, 0, 10, NONE),
    yuv(P::Yuv422p9be, "yuv422p9be", 1, 0, 2, 0, 9, BE),
    yuv(P::Yuv422p9le, "yuv422p9le", 1, 0, 2, 0, 9, NONE),
    desc_alias(P::Gbrp, "gbrp", "gbr24p", 3, 0, 0, PLANAR.union(RGB), [c(2, 1, 0, 0, 8), c(0, 1, 0, 0, 8), c(1, 1, 0, 0, 8), Z]),
    gbr(P::Gbrp9be, "gbrp9be", 2, 0, 9, BE),
    gbr(P::Gbrp9le, "gbrp9le", 2, 0, 9, NONE),
    gbr(P::Gbrp10be, "gbrp10be", 2, 0, 10, BE),
    gbr(P::Gbrp10le, "gbrp10le", 2, 0, 10, NONE),
    gbr(P::Gbrp16be, "gbrp16be", 2, 0, 16, BE),
    gbr(P::Gbrp16le, "gbrp16le", 2, 0, 16, NONE),
    yuva(P::Yuva422p, "yuva422p", 1, 0, 1, 8, NONE),
    yuva(P::Yuva444p, "yuva444p", 0, 0, 1, 8, NONE),
    yuva(P::Yuva420p9be, "yuva420p9be", 1, 1, 2, 9, BE),
    yuva(P::Yuva420p9le, "yuva420p9le", 1, 1, 2, 9, NONE),
    yuva(P::Yuva422p9be, "yuva422p9be", 1, 0, 2, 9, BE),
    yuva(P::Yuva422p9le, "yuva422p9le", 1, 0, 2, 9, NONE),
    yuva(P::Yuva444p9be, "yuva444p9be", 0, 0, 2, 9, BE),
    yuva(P::Yuva444p9le, "yuva444p9le", 0, 0, 2, 9, NONE),
    yuva(P::Yuva420p10be, "yuva420p10be", 1, 1, 2, 10, BE),
    yuva(P::Yuva420p10le, "yuva420p10le", 1, 1, 2, 10, NONE),
    yuva(P::Yuva422p10be, "yuva422p10be", 1, 0, 2, 10, BE),
    yuva(P::Yuva422p10le, "yuva422p10le", 1, 0, 2, 10, NONE),
    yuva(P::Yuva444p10be, "yuva444p10be", 0, 0, 2, 10, BE),
    yuva(P::Yuva444p10le, "yuva444p10le", 0, 0, 2, 10, NONE),
    yuva(P::Yuva420p16be, "yuva420p16be", 1, 1, 2, 16, BE),
    yuva(P::Yuva420p16le, "yuva420p16le", 1, 1, 2, 16, NONE),
    yuva(P::Yuva422p16be, "yuva422p16be", 1, 0, 2, 16, BE),
    yuva(P::Yuva422p16le, "yuva422p16le", 1, 0, 2, 16, NONE),
    yuva(P::Yuva444p16be, "yuva444p16be", 0, 0, 2, 16, BE),
    yuva(P::Yuva444p16le, "yuva444p16le", 0, 0, 2, 16, NONE),
    hw(P::Vdpau, "vdpau"),
    desc(P::Xyz12le, "xyz12le", 3, 0, 0, XYZ, [c(0, 6, 0, 4, 12), c(0, 6, 2, 4, 12), c(0, 6, 4, 4, 12), Z]),
    desc(P::Xyz12be, "xyz12be", 3, 0, 0, XYZ.union(BE), [c(0, 6, 0, 4, 12), c(0, 6, 2, 4, 12), c(0, 6, 4, 4, 12), Z]),
    semi8(P::Nv16, "nv16", 1, 0, 0, 1),
    semi16(P::Nv20le, "nv20le", 1, 0, 0, 10, NONE),
    semi16(P::Nv20be, "nv20be", 1, 0, 0, 10, BE),
    rgba_pack(P::Rgba64be, "rgba64be", 8, 0, 2, 4, 6, 16, BE),
    rgba_pack(P::Rgba64le, "rgba64le", 8, 0, 2, 4, 6, 16, NONE),
    rgba_pack(P::Bgra64be, "bgra64be", 8, 4, 2, 0, 6, 16, BE),
    rgba_pack(P::Bgra64le, "bgra64le", 8, 4, 2, 0, 6, 16, NONE),
    desc(P::Yvyu422, "yvyu422", 3, 1, 0, NONE, [c(0, 2, 0, 0, 8), c(0, 4, 3, 0, 8), c(0, 4, 1, 0, 8), Z]),
    ya(P::Ya16be, "ya16be", 4, 2, 16, BE),
    ya(P::Ya16le, "ya16le", 4, 2, 16, NONE),
    gbra(P::Gbrap, "gbrap", 1, 8, NONE),
    gbra(P::Gbrap16be, "gbrap16be", 2, 16, BE),
    gbra(P::Gbrap16le, "gbrap16le", 2, 16, NONE),
    hw(P::Qsv, "qsv"),
    hw(P::Mmal, "mmal"),
    hw(P::D3d11vaVld, "d3d11va_vld"),
    hw(P::Cuda, "cuda"),
    rgb_pack(P::Xrgb, "0rgb", 4, 1, 2, 3, 8, NONE),
    rgb_pack(P::Rgbx, "rgb0", 4, 0, 1, 2, 8, NONE),
    rgb_pack(P::Xbgr, "0bgr", 4, 3, 2, 1, 8, NONE),
    rgb_pack(P::Bgrx, "bgr0", 4, 2, 1, 0, 8, NONE),
    yuv(P::Yuv420p12be, "yuv420p12be", 1, 1, 2, 0, 12, BE),
    yuv(P::Yuv420p12le, "yuv420p12le", 1, 1, 2, 0, 12, NONE),
    yuv(P::Yuv420p14be, "yuv420p14be", 1, 1, 2, 0, 14, BE),
    yuv(P::Yuv420p14le, "yuv420p14le", 1, 1, 2, 0, 14, NONE),
    yuv(P::Yuv422p12be, "yuv422p12be", 1, 0, 2, 0, 12, BE),
    yuv(P::Yuv422p12le, "yuv422p12le", 1, 0, 2, 0, 12, NONE),
    yuv(P::Yuv422p14be, "yuv422p14be", 1, 0, 2, 0, 14, BE),
    yuv(P::Yuv422p14le, "yuv422p14le", 1, 0, 2, 0, 14, NONE),
    yuv(P::Yuv444p12be, "yuv444p12be", 0, 0, 2, 0, 12, BE),
    yuv(P::Yuv444p12le, "yuv444p12le", 0, 0, 2, 0, 12, NONE),
    yuv(P::Yuv444p14be, "yuv444p14be", 0, 0, 2, 0, 14, BE),
    yuv(P::Yuv444p14le, "yuv444p14le", 0, 0, 2, 0, 14, NONE),
    gbr(P::Gbrp12be, "gbrp12be", 2, 0, 12, BE),
    gbr(P::Gbrp12le, "gbrp12le", 2, 0, 12, NONE),
    gbr(P::Gbrp14be, "gbrp14be", 2, 0, 14, BE),
    gbr(P::Gbrp14le, "gbrp14le", 2, 0, 14, NONE),
    yuv(P::Yuvj411p, "yuvj411p", 2, 0, 1, 0, 8, NONE),
    bayer(P::BayerBggr8, "bayer_bggr8", 1, 2, 4, NONE),
    bayer(P::BayerRggb8, "bayer_rggb8", 1, 2, 4, NONE),
    bayer(P::BayerGbrg8, "bayer_gbrg8", 1, 2, 4, NONE),
    bayer(P::BayerGrbg8, "bayer_grbg8", 1, 2, 4, NONE),
    bayer(P::BayerBggr16le, "bayer_bggr16le", 2, 4, 8, NONE),
    bayer(P::BayerBggr16be, "bayer_bggr16be", 2, 4, 8, BE),
    bayer(P::BayerRggb16le, "bayer_rggb16le", 2, 4, 8, NONE),
    bayer(P::BayerRggb16be, "bayer_rggb16be", 2, 4, 8, BE),
    bayer(P::BayerGbrg16le, "bayer_gbrg16le", 2, 4, 8, NONE),
    bayer(P::BayerGbrg16be, "bayer_gbrg16be", 2, 4, 8, BE),
    bayer(P::BayerGrbg16le, "bayer_grbg16le", 2, 4, 8, NONE),
    bayer(P::BayerGrbg16be, "bayer_grbg16be", 2, 4, 8, BE),
    yuv(P::Yuv440p10le, "yuv440p10le", 0, 1, 2, 0, 10, NONE),
    yuv(P::Yuv440p10be, "yuv440p10be", 0, 1, 2, 0, 10, BE),
    yuv(P::Yuv440p12le, "yuv440p12le", 0, 1, 2, 0, 12, NONE),
    yuv(P::Yuv440p12be, "yuv440p12be", 0, 1, 2, 0, 12, BE),
    desc(P::Ayuv64le, "ayuv64le", 4, 0, 0, ALPHA, [c(0, 8, 2, 0, 16), c(0, 8, 4, 0, 16), c(0, 8, 6, 0, 16), c(0, 8, 0, 0, 16)]),
    desc(P::Ayuv64be, "ayuv64be", 4, 0, 0, ALPHA.union(BE), [c(0, 8, 2, 0, 16), c(0, 8, 4, 0, 16), c(0, 8, 6, 0, 16), c(0, 8, 0, 0, 16)]),
    hw(P::VideoToolbox, "videotoolbox_vld"),
    semi16(P::P010le, "p010le", 1, 1, 6, 10, NONE),
    semi16(P::P010be, "p010be", 1, 1, 6, 10, BE),
    gbra(P::Gbrap12be, "gbrap12be", 2, 12, BE),
    gbra(P::Gbrap12le, "gbrap12le", 2, 12, NONE),
    gbra(P::Gbrap10be, "gbrap10be", 2, 10, BE),
    gbra(P::Gbrap10le, "gbrap10le", 2, 10, NONE),
    hw(P::MediaCodec, "mediacodec"),
    gray(P::Gray12be, "gray12be", 2, 12, BE),
    gray(P::Gray12le, "gray12le", 2, 12, NONE),
    gray(P::Gray10be, "gray10be", 2, 10, BE),
    gray(P::Gray10le, "gray10le", 2, 10, NONE),
    semi16(P::P016le, "p016le", 1, 1, 0, 16, NONE),
    semi16(P::P016be, "p016be", 1, 1, 0, 16, BE),
    hw(P::D3d11, "d3d11"),
    gray(P::Gray9be, "gray9be", 2, 9, BE),
    gray(P::Gray9le, "gray9le", 2, 9, NONE),
    gbr(P::Gbrpf32be, "gbrpf32be", 4, 0, 32, FLOAT.union(BE)),
    gbr(P::Gbrpf32le, "gbrpf32le", 4, 0, 32, FLOAT),
    gbra(P::Gbrapf32be, "gbrapf32be", 4, 32, FLOAT.union(BE)),
    gbra(P::Gbrapf32le, "gbrapf32le", 4, 32, FLOAT),
    hw(P::DrmPrime, "drm_prime"),
    hw(P::OpenCl, "opencl"),
    gray(P::Gray14be, "gray14be", 2, 14, BE),
    gray(P::Gray14le, "gray14le", 2, 14, NONE),
    gray_alias(P::Grayf32be, "grayf32be", "yf32be", 4, 32, FLOAT.union(BE)),
    gray_alias(P::Grayf32le, "grayf32le", "yf32le", 4, 32, FLOAT),
    yuva(P::Yuva422p12be, "yuva422p12be", 1, 0, 2, 12, BE),
    yuva(P::Yuva422p12le, "yuva422p12le", 1, 0, 2, 12, NONE),
    yuva(P::Yuva444p12be, "yuva444p12be", 0, 0, 2, 12, BE),
    yuva(P::Yuva444p12le, "yuva444p12le", 0, 0, 2, 12, NONE),
    semi8(P::Nv24, "nv24", 0, 0, 0, 1),
    semi8(P::Nv42, "nv42", 0, 0, 1, 0),
    hw(P::Vulkan, "vulkan"),
    desc(P::Y210be, "y210be", 3, 1, 0, BE, [c(0, 4, 0, 6, 10), c(0, 8, 2, 6, 10), c(0, 8, 6, 6, 10), Z]),
    desc(P::Y210le, "y210le", 3, 1, 0, NONE, [c(0, 4, 0, 6, 10), c(0, 8, 2, 6, 10), c(0, 8, 6, 6, 10), Z]),
    desc(P::X2Rgb10le, "x2rgb10le", 3, 0, 0, RGB, [c(0, 4, 2, 4, 10), c(0, 4, 1, 2, 10), c(0, 4, 0, 0, 10), Z]),
    desc(P::X2Rgb10be, "x2rgb10be", 3, 0, 0, RGB.union(BE), [c(0, 4, 0, 4, 10), c(0, 4, 0, 10, 10), c(0, 4, 2, 0, 10), Z]),
    desc(P::X2Bgr10le, "x2bgr10le", 3, 0, 0, RGB, [c(0, 4, 0, 0, 10), c(0, 4, 1, 2, 10), c(0, 4, 2, 4, 10), Z]),
    desc(P::X2Bgr10be, "x2bgr10be", 3, 0, 0, RGB.union(BE), [c(0, 4, 2, 0, 10), c(0, 4, 0, 10, 10), c(0, 4, 0, 4, 10), Z]),
    semi16(P::P210be, "p210be", 1, 0, 6, 10, BE),
    semi16(P::P210le, "p210le", 1, 0, 6, 10, NONE),
    semi16(P::P410be, "p410be", 0, 0, 6, 10, BE),
    semi16(P::P410le, "p410le", 0, 0, 6, 10, NONE),
    semi16(P::P216be, "p216be", 1, 0, 0, 16, BE),
    semi16(P::P216le, "p216le", 1, 0, 0, 16, NONE),
    semi16(P::P416be, "p416be", 0, 0, 0, 16, BE),
    semi16(P::P416le, "p416le", 0, 0, 0, 16, NONE),
    desc(P::Vuya, "vuya", 4, 0, 0, ALPHA, [c(0, 4, 2, 0, 8), c(0, 4, 1, 0, 8), c(0, 4, 0, 0, 8), c(0, 4, 3, 0, 8)]),
    rgba_pack(P::Rgbaf16be, "rgbaf16be", 8, 0, 2, 4, 6, 16, FLOAT.union(BE)),
    rgba_pack(P::Rgbaf16le, "rgbaf16le", 8, 0, 2, 4, 6, 16, FLOAT),
    desc(P::Vuyx, "vuyx", 3, 0, 0, NONE, [c(0, 4, 2, 0, 8), c(0, 4, 1, 0, 8), c(0, 4, 0, 0, 8), Z]),
    semi16(P::P012le, "p012le", 1, 1, 4, 12, NONE),
    semi16(P::P012be, "p012be", 1, 1, 4, 12, BE),
    desc(P::Y212be, "y212be", 3, 1, 0, BE, [c(0, 4, 0, 4, 12), c(0, 8, 2, 4, 12), c(0, 8, 6, 4, 12), Z]),
    desc(P::Y212le, "y212le", 3, 1, 0, NONE, [c(0, 4, 0, 4, 12), c(0, 8, 2, 4, 12), c(0, 8, 6, 4, 12), Z]),
    desc(P::Xv30be, "xv30be", 3, 0, 0, BITSTREAM.union(BE), [c(0, 32, 10, 0, 10), c(0, 32, 0, 0, 10), c(0, 32, 20, 0, 10), Z]),
    desc(P::Xv30le, "xv30le", 3, 0, 0, NONE, [c(0, 4, 1, 2, 10), c(0, 4, 0, 0, 10), c(0, 4, 2, 4, 10), Z]),
    desc(P::Xv36be, "xv36be", 3, 0, 0, BE, [c(0, 8, 2, 4, 12), c(0, 8, 0, 4, 12), c(0, 8, 4, 4, 12), Z]),
    desc(P::Xv36le, "xv36le", 3, 0, 0, NONE, [c(0, 8, 2, 4, 12), c(0, 8, 0, 4, 12), c(0, 8, 4, 4, 12), Z]),
    rgb_pack(P::Rgbf32be, "rgbf32be", 12, 0, 4, 8, 32, FLOAT.union(BE)),
    rgb_pack(P::Rgbf32le, "rgbf32le", 12, 0, 4, 8, 32, FLOAT),
    rgba_pack(P::Rgbaf32be, "rgbaf32be", 16, 0, 4, 8, 12, 32, FLOAT.union(BE)),
    rgba_pack(P::Rgbaf32le, "rgbaf32le", 16, 0, 4, 8, 12, 32, FLOAT),
    semi16(P::P212be, "p212be", 1, 0, 4, 12, BE),
    semi16(P::P212le, "p212le", 1, 0, 4, 12, NONE),
    semi16(P::P412be, "p412be", 0, 0, 4, 12, BE),
    semi16(P::P412le, "p412le", 0, 0, 4, 12, NONE),
    gbra(P::Gbrap14be, "gbrap14be", 2, 14, BE),
    gbra(P::Gbrap14le, "gbrap14le", 2, 14, NONE),
    hw(P::D3d12, "d3d12"),
    desc(P::Ayuv, "ayuv", 4, 0, 0, ALPHA, [c(0, 4, 1, 0, 8), c(0, 4, 2, 0, 8), c(0, 4, 3, 0, 8), c(0, 4, 0, 0, 8)]),
    desc(P::Uyva, "uyva", 4, 0, 0, ALPHA, [c(0, 4, 1, 0, 8), c(0, 4, 0, 0, 8), c(0, 4, 2, 0, 8), c(0, 4, 3, 0, 8)]),
    desc(P::Vyu444, "vyu444", 3, 0, 0, NONE, [c(0, 3, 1, 0, 8), c(0, 3, 2, 0, 8), c(0, 3, 0, 0, 8), Z]),
    desc(P::V30xbe, "v30xbe", 3, 0, 0, BITSTREAM.union(BE), [c(0, 32, 12, 0, 10), c(0, 32, 2, 0, 10), c(0, 32, 22, 0, 10), Z]),
    desc(P::V30xle, "v30xle", 3, 0, 0, NONE, [c(0, 4, 1, 4, 10), c(0, 4, 0, 2, 10), c(0, 4, 2, 6, 10), Z]),
    rgb_pack(P::Rgbf16be, "rgbf16be", 6, 0, 2, 4, 16, FLOAT.union(BE)),
    rgb_pack(P::Rgbf16le, "rgbf16le", 6, 0, 2, 4, 16, FLOAT),
    rgba_pack(P::Rgba128be, "rgba128be", 16, 0, 4, 8, 12, 32, BE),
    rgba_pack(P::Rgba128le, "rgba128le", 16, 0, 4, 8, 12, 32, NONE),
    rgb_pack(P::Rgb96be, "rgb96be", 12, 0, 4, 8, 32, BE),
    rgb_pack(P::Rgb96le, "rgb96le", 12, 0, 4, 8, 32, NONE),
    desc(P::Y216be, "y216be", 3, 1, 0, BE, [c(0, 4, 0, 0, 16), c(0, 8, 2, 0, 16), c(0, 8, 6, 0, 16), Z]),
    desc(P::Y216le, "y216le", 3, 1, 0, NONE, [c(0, 4, 0, 0, 16), c(0, 8, 2, 0, 16), c(0, 8, 6, 0, 16), Z]),
    desc(P::Xv48be, "xv48be", 3, 0, 0, BE, [c(0, 8, 2, 0, 16), c(0, 8, 0, 0, 16), c(0, 8, 4, 0, 16), Z]),
    desc(P::Xv48le, "xv48le", 3, 0, 0, NONE, [c(0, 8, 2, 0, 16), c(0, 8, 0, 0, 16), c(0, 8, 4, 0, 16), Z]),
    gbr(P::Gbrpf16be, "gbrpf16be", 2, 0, 16, FLOAT.union(BE)),
    gbr(P::Gbrpf16le, "gbrpf16le", 2, 0, 16, FLOAT),
    gbra(P::Gbrapf16be, "gbrapf16be", 2, 16, FLOAT.union(BE)),
    gbra(P::Gbrapf16le, "gbrapf16le", 2, 16, FLOAT),
    gray(P::Grayf16be, "grayf16be", 2, 16, FLOAT.union(BE)),
    gray(P::Grayf16le, "grayf16le", 2, 16, FLOAT),
    hw(P::AmfSurface, "amf_surface"),
    gray(P::Gray32be, "gray32be", 4, 32, BE),
    gray(P::Gray32le, "gray32le", 4, 32, NONE),
    ya(P::Yaf32be, "yaf32be", 8, 4, 32, FLOAT.union(BE)),
    ya(P::Yaf32le, "yaf32le", 8, 4, 32, FLOAT),
    ya(P::Yaf16be, "yaf16be", 4, 2, 16, FLOAT.union(BE)),
    ya(P::Yaf16le, "yaf16le", 4, 2, 16, FLOAT),
    gbra(P::Gbrap32be, "gbrap32be", 4, 32, BE),
    gbra(P::Gbrap32le, "gbrap32le", 4, 32, NONE),
    yuv(P::Yuv444p10msbbe, "yuv444p10msbbe", 0, 0, 2, 6, 10, BE),
    yuv(P::Yuv444p10msble, "yuv444p10msble", 0, 0, 2, 6, 10, NONE),
    yuv(P::Yuv444p12msbbe, "yuv444p12msbbe", 0, 0, 2, 4, 12, BE),
    yuv(P::Yuv444p12msble, "yuv444p12msble", 0, 0, 2, 4, 12, NONE),
    gbr(P::Gbrp10msbbe, "gbrp10msbbe", 2, 6, 10, BE),
    gbr(P::Gbrp10msble, "gbrp10msble", 2, 6, 10, NONE),
    gbr(P::Gbrp12msbbe, "gbrp12msbbe", 2, 4, 12, BE),
    gbr(P::Gbrp12msble, "gbrp12msble", 2, 4, 12, NONE),
    hw(P::Ohcodec, "ohcodec"),
];

impl PixFmtDescriptor {
    /// All catalog descriptors, in ascending enumeration order.
    pub fn all() -> impl Iterator<Item = &'static PixFmtDescriptor> {
        DESCRIPTORS.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn table_order_matches_enumeration() {
        for (i, d) in DESCRIPTORS.iter().enumerate() {
            assert_eq!(d.id() as usize, i, "{} out of order", d.name());
        }
    }

    #[test]
    fn names_and_aliases_are_unique() {
        let mut seen = BTreeSet::new();
        for d in DESCRIPTORS.iter() {
            assert!(seen.insert(d.name()), "duplicate name {}", d.name());
            for alias in d.alias().iter().flat_map(|a| a.split(',')) {
                assert!(seen.insert(alias), "duplicate alias {alias}");
            }
        }
    }

    #[test]
    fn component_fields_in_range() {
        for d in DESCRIPTORS.iter() {
            assert!(d.nb_components() <= 4, "{}", d.name());
            for comp in d.components() {
                assert!(comp.plane < 4, "{}", d.name());
                assert!(comp.depth >= 1, "{}", d.name());
                assert!(comp.step >= 1, "{}", d.name());
            }
        }
    }

    #[test]
    fn planar_flag_matches_plane_usage() {
        for d in DESCRIPTORS.iter() {
            if d.is_hwaccel() {
                assert_eq!(d.nb_components(), 0, "{}", d.name());
                continue;
            }
            let spans_planes = d.components().iter().any(|comp| comp.plane != 0);
            assert_eq!(d.is_planar(), spans_planes, "{}", d.name());
        }
    }

    #[test]
    fn plane_indices_are_contiguous() {
        for d in DESCRIPTORS.iter() {
            let mut used = [false; 4];
            for comp in d.components() {
                used[usize::from(comp.plane)] = true;
            }
            let count = used.iter().filter(|&&u| u).count();
            let highest = used.iter().rposition(|&u| u).map_or(0, |i| i + 1);
            assert_eq!(count, highest, "{} has plane gaps", d.name());
        }
    }

    #[test]
    fn endian_pairs_share_layout() {
        for d in DESCRIPTORS.iter() {
            let Ok(sibling) = d.id().swap_endianness() else {
                continue;
            };
            let s = sibling.descriptor();
            assert_eq!(d.nb_components(), s.nb_components(), "{}", d.name());
            assert_eq!(d.log2_chroma_w(), s.log2_chroma_w(), "{}", d.name());
            assert_eq!(d.log2_chroma_h(), s.log2_chroma_h(), "{}", d.name());
            assert_eq!(d.bits_per_pixel(), s.bits_per_pixel(), "{}", d.name());
            assert_ne!(
                d.flags().contains(FormatFlags::BIG_ENDIAN),
                s.flags().contains(FormatFlags::BIG_ENDIAN),
                "{}",
                d.name()
            );
        }
    }

    #[test]
    fn bitstream_steps_are_bit_counts() {
        for d in DESCRIPTORS.iter().filter(|d| d.is_bitstream()) {
            for comp in d.components() {
                assert!(comp.step <= 32, "{}", d.name());
                assert!(comp.shift == 0, "{}", d.name());
            }
        }
    }
}
