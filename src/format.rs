//! Pixel format identifiers and per-format queries.
//!
//! Each variant names one catalog entry. Discriminants are dense from 0 in
//! catalog order and are stable: new formats are appended, existing values
//! never change meaning.

use alloc::string::String;
use core::fmt;

use crate::catalog;
use crate::desc::PixFmtDescriptor;
use crate::error::PixFmtError;

/// A pixel format known to the catalog.
///
/// The variant itself carries no behavior; it is a key into the static
/// descriptor table. An unknown/absent format is expressed as
/// `Option<PixelFormat>` at API boundaries.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Planar YUV 4:2:0, 8-bit samples.
    Yuv420p,
    /// Packed YUV 4:2:2, byte order Y0 Cb Y1 Cr.
    Yuyv422,
    /// Packed RGB, 8 bits per channel, byte order R G B.
    Rgb24,
    /// Packed RGB, 8 bits per channel, byte order B G R.
    Bgr24,
    /// Planar YUV 4:2:2, 8-bit samples.
    Yuv422p,
    /// Planar YUV 4:4:4, 8-bit samples.
    Yuv444p,
    /// Planar YUV 4:1:0, 8-bit samples.
    Yuv410p,
    /// Planar YUV 4:1:1, 8-bit samples.
    Yuv411p,
    /// Single channel, 8-bit gray. Catalog name `gray`.
    Gray8,
    /// 1 bit per pixel, bit-packed msb first; 0 is white.
    MonoWhite,
    /// 1 bit per pixel, bit-packed msb first; 0 is black.
    MonoBlack,
    /// 8-bit indices into a 256-entry BGRA palette stored in plane 1.
    Pal8,
    /// Planar YUV 4:2:0, full range (legacy JPEG variant).
    Yuvj420p,
    /// Planar YUV 4:2:2, full range (legacy JPEG variant).
    Yuvj422p,
    /// Planar YUV 4:4:4, full range (legacy JPEG variant).
    Yuvj444p,
    /// Packed YUV 4:2:2, byte order Cb Y0 Cr Y1.
    Uyvy422,
    /// Packed YUV 4:1:1, byte order Cb Y0 Y1 Cr Y2 Y3.
    Uyyvyy411,
    /// Packed RGB 2:3:3 in one byte, msb-to-lsb B G R.
    Bgr8,
    /// Packed RGB 1:2:1 bitstream, two pixels per byte, msb-to-lsb B G R.
    Bgr4,
    /// Packed RGB 1:2:1 in one byte, msb-to-lsb B G R.
    Bgr4Byte,
    /// Packed RGB 3:3:2 in one byte, msb-to-lsb R G B.
    Rgb8,
    /// Packed RGB 1:2:1 bitstream, two pixels per byte, msb-to-lsb R G B.
    Rgb4,
    /// Packed RGB 1:2:1 in one byte, msb-to-lsb R G B.
    Rgb4Byte,
    /// Semi-planar YUV 4:2:0: Y plane plus interleaved Cb/Cr plane.
    Nv12,
    /// As [`Nv12`](Self::Nv12) with Cb and Cr swapped.
    Nv21,
    /// Packed ARGB, 8 bits per channel.
    Argb,
    /// Packed RGBA, 8 bits per channel.
    Rgba,
    /// Packed ABGR, 8 bits per channel.
    Abgr,
    /// Packed BGRA, 8 bits per channel.
    Bgra,
    /// Single channel, 16-bit gray, big-endian.
    Gray16be,
    /// Single channel, 16-bit gray, little-endian.
    Gray16le,
    /// Planar YUV 4:4:0, 8-bit samples.
    Yuv440p,
    /// Planar YUV 4:4:0, full range (legacy JPEG variant).
    Yuvj440p,
    /// Planar YUV 4:2:0 with an alpha plane, 8-bit samples.
    Yuva420p,
    /// Packed RGB, 16 bits per channel, big-endian.
    Rgb48be,
    /// Packed RGB, 16 bits per channel, little-endian.
    Rgb48le,
    /// Packed RGB 5:6:5 in 16 bits, big-endian.
    Rgb565be,
    /// Packed RGB 5:6:5 in 16 bits, little-endian.
    Rgb565le,
    /// Packed RGB 5:5:5 in 16 bits (msb unused), big-endian.
    Rgb555be,
    /// Packed RGB 5:5:5 in 16 bits (msb unused), little-endian.
    Rgb555le,
    /// Packed BGR 5:6:5 in 16 bits, big-endian.
    Bgr565be,
    /// Packed BGR 5:6:5 in 16 bits, little-endian.
    Bgr565le,
    /// Packed BGR 5:5:5 in 16 bits (msb unused), big-endian.
    Bgr555be,
    /// Packed BGR 5:5:5 in 16 bits (msb unused), little-endian.
    Bgr555le,
    /// Hardware surface (VA-API).
    Vaapi,
    /// Planar YUV 4:2:0, 16-bit samples, little-endian.
    Yuv420p16le,
    /// Planar YUV 4:2:0, 16-bit samples, big-endian.
    Yuv420p16be,
    /// Planar YUV 4:2:2, 16-bit samples, little-endian.
    Yuv422p16le,
    /// Planar YUV 4:2:2, 16-bit samples, big-endian.
    Yuv422p16be,
    /// Planar YUV 4:4:4, 16-bit samples, little-endian.
    Yuv444p16le,
    /// Planar YUV 4:4:4, 16-bit samples, big-endian.
    Yuv444p16be,
    /// Hardware surface (DXVA2).
    Dxva2Vld,
    /// Packed RGB 4:4:4 in 16 bits (msb unused), little-endian.
    Rgb444le,
    /// Packed RGB 4:4:4 in 16 bits (msb unused), big-endian.
    Rgb444be,
    /// Packed BGR 4:4:4 in 16 bits (msb unused), little-endian.
    Bgr444le,
    /// Packed BGR 4:4:4 in 16 bits (msb unused), big-endian.
    Bgr444be,
    /// 8-bit gray plus 8-bit alpha, interleaved.
    Ya8,
    /// Packed BGR, 16 bits per channel, big-endian.
    Bgr48be,
    /// Packed BGR, 16 bits per channel, little-endian.
    Bgr48le,
    /// Planar YUV 4:2:0, 9-bit samples in 16-bit containers, big-endian.
    Yuv420p9be,
    /// Planar YUV 4:2:0, 9-bit samples in 16-bit containers, little-endian.
    Yuv420p9le,
    /// Planar YUV 4:2:0, 10-bit samples in 16-bit containers, big-endian.
    Yuv420p10be,
    /// Planar YUV 4:2:0, 10-bit samples in 16-bit containers, little-endian.
    Yuv420p10le,
    /// Planar YUV 4:2:2, 10-bit samples, big-endian.
    Yuv422p10be,
    /// Planar YUV 4:2:2, 10-bit samples, little-endian.
    Yuv422p10le,
    /// Planar YUV 4:4:4, 9-bit samples, big-endian.
    Yuv444p9be,
    /// Planar YUV 4:4:4, 9-bit samples, little-endian.
    Yuv444p9le,
    /// Planar YUV 4:4:4, 10-bit samples, big-endian.
    Yuv444p10be,
    /// Planar YUV 4:4:4, 10-bit samples, little-endian.
    Yuv444p10le,
    /// Planar YUV 4:2:2, 9-bit samples, big-endian.
    Yuv422p9be,
    /// Planar YUV 4:2:2, 9-bit samples, little-endian.
    Yuv422p9le,
    /// Planar RGB, 8-bit samples, plane order G B R.
    Gbrp,
    /// Planar RGB, 9-bit samples, big-endian.
    Gbrp9be,
    /// Planar RGB, 9-bit samples, little-endian.
    Gbrp9le,
    /// Planar RGB, 10-bit samples, big-endian.
    Gbrp10be,
    /// Planar RGB, 10-bit samples, little-endian.
    Gbrp10le,
    /// Planar RGB, 16-bit samples, big-endian.
    Gbrp16be,
    /// Planar RGB, 16-bit samples, little-endian.
    Gbrp16le,
    /// Planar YUV 4:2:2 with an alpha plane, 8-bit samples.
    Yuva422p,
    /// Planar YUV 4:4:4 with an alpha plane, 8-bit samples.
    Yuva444p,
    /// Planar YUV 4:2:0 with alpha, 9-bit samples, big-endian.
    Yuva420p9be,
    /// Planar YUV 4:2:0 with alpha, 9-bit samples, little-endian.
    Yuva420p9le,
    /// Planar YUV 4:2:2 with alpha, 9-bit samples, big-endian.
    Yuva422p9be,
    /// Planar YUV 4:2:2 with alpha, 9-bit samples, little-endian.
    Yuva422p9le,
    /// Planar YUV 4:4:4 with alpha, 9-bit samples, big-endian.
    Yuva444p9be,
    /// Planar YUV 4:4:4 with alpha, 9-bit samples, little-endian.
    Yuva444p9le,
    /// Planar YUV 4:2:0 with alpha, 10-bit samples, big-endian.
    Yuva420p10be,
    /// Planar YUV 4:2:0 with alpha, 10-bit samples, little-endian.
    Yuva420p10le,
    /// Planar YUV 4:2:2 with alpha, 10-bit samples, big-endian.
    Yuva422p10be,
    /// Planar YUV 4:2:2 with alpha, 10-bit samples, little-endian.
    Yuva422p10le,
    /// Planar YUV 4:4:4 with alpha, 10-bit samples, big-endian.
    Yuva444p10be,
    /// Planar YUV 4:4:4 with alpha, 10-bit samples, little-endian.
    Yuva444p10le,
    /// Planar YUV 4:2:0 with alpha, 16-bit samples, big-endian.
    Yuva420p16be,
    /// Planar YUV 4:2:0 with alpha, 16-bit samples, little-endian.
    Yuva420p16le,
    /// Planar YUV 4:2:2 with alpha, 16-bit samples, big-endian.
    Yuva422p16be,
    /// Planar YUV 4:2:2 with alpha, 16-bit samples, little-endian.
    Yuva422p16le,
    /// Planar YUV 4:4:4 with alpha, 16-bit samples, big-endian.
    Yuva444p16be,
    /// Planar YUV 4:4:4 with alpha, 16-bit samples, little-endian.
    Yuva444p16le,
    /// Hardware surface (VDPAU).
    Vdpau,
    /// Packed XYZ, 12-bit samples in 16-bit containers, little-endian.
    Xyz12le,
    /// Packed XYZ, 12-bit samples in 16-bit containers, big-endian.
    Xyz12be,
    /// Semi-planar YUV 4:2:2: Y plane plus interleaved Cb/Cr plane.
    Nv16,
    /// Semi-planar YUV 4:2:2, 10-bit samples, little-endian.
    Nv20le,
    /// Semi-planar YUV 4:2:2, 10-bit samples, big-endian.
    Nv20be,
    /// Packed RGBA, 16 bits per channel, big-endian.
    Rgba64be,
    /// Packed RGBA, 16 bits per channel, little-endian.
    Rgba64le,
    /// Packed BGRA, 16 bits per channel, big-endian.
    Bgra64be,
    /// Packed BGRA, 16 bits per channel, little-endian.
    Bgra64le,
    /// Packed YUV 4:2:2, byte order Y0 Cr Y1 Cb.
    Yvyu422,
    /// 16-bit gray plus 16-bit alpha, big-endian.
    Ya16be,
    /// 16-bit gray plus 16-bit alpha, little-endian.
    Ya16le,
    /// Planar RGB with an alpha plane, 8-bit samples.
    Gbrap,
    /// Planar RGB with alpha, 16-bit samples, big-endian.
    Gbrap16be,
    /// Planar RGB with alpha, 16-bit samples, little-endian.
    Gbrap16le,
    /// Hardware surface (Intel Quick Sync Video).
    Qsv,
    /// Hardware surface (MMAL).
    Mmal,
    /// Hardware surface (Direct3D 11 video decoder, legacy API).
    D3d11vaVld,
    /// Hardware surface (CUDA device memory).
    Cuda,
    /// Packed RGB in 32 bits, leading byte unused. Catalog name `0rgb`.
    Xrgb,
    /// Packed RGB in 32 bits, trailing byte unused. Catalog name `rgb0`.
    Rgbx,
    /// Packed BGR in 32 bits, leading byte unused. Catalog name `0bgr`.
    Xbgr,
    /// Packed BGR in 32 bits, trailing byte unused. Catalog name `bgr0`.
    Bgrx,
    /// Planar YUV 4:2:0, 12-bit samples, big-endian.
    Yuv420p12be,
    /// Planar YUV 4:2:0, 12-bit samples, little-endian.
    Yuv420p12le,
    /// Planar YUV 4:2:0, 14-bit samples, big-endian.
    Yuv420p14be,
    /// Planar YUV 4:2:0, 14-bit samples, little-endian.
    Yuv420p14le,
    /// Planar YUV 4:2:2, 12-bit samples, big-endian.
    Yuv422p12be,
    /// Planar YUV 4:2:2, 12-bit samples, little-endian.
    Yuv422p12le,
    /// Planar YUV 4:2:2, 14-bit samples, big-endian.
    Yuv422p14be,
    /// Planar YUV 4:2:2, 14-bit samples, little-endian.
    Yuv422p14le,
    /// Planar YUV 4:4:4, 12-bit samples, big-endian.
    Yuv444p12be,
    /// Planar YUV 4:4:4, 12-bit samples, little-endian.
    Yuv444p12le,
    /// Planar YUV 4:4:4, 14-bit samples, big-endian.
    Yuv444p14be,
    /// Planar YUV 4:4:4, 14-bit samples, little-endian.
    Yuv444p14le,
    /// Planar RGB, 12-bit samples, big-endian.
    Gbrp12be,
    /// Planar RGB, 12-bit samples, little-endian.
    Gbrp12le,
    /// Planar RGB, 14-bit samples, big-endian.
    Gbrp14be,
    /// Planar RGB, 14-bit samples, little-endian.
    Gbrp14le,
    /// Planar YUV 4:1:1, full range (legacy JPEG variant).
    Yuvj411p,
    /// Bayer mosaic BGGR, 8-bit samples.
    BayerBggr8,
    /// Bayer mosaic RGGB, 8-bit samples.
    BayerRggb8,
    /// Bayer mosaic GBRG, 8-bit samples.
    BayerGbrg8,
    /// Bayer mosaic GRBG, 8-bit samples.
    BayerGrbg8,
    /// Bayer mosaic BGGR, 16-bit samples, little-endian.
    BayerBggr16le,
    /// Bayer mosaic BGGR, 16-bit samples, big-endian.
    BayerBggr16be,
    /// Bayer mosaic RGGB, 16-bit samples, little-endian.
    BayerRggb16le,
    /// Bayer mosaic RGGB, 16-bit samples, big-endian.
    BayerRggb16be,
    /// Bayer mosaic GBRG, 16-bit samples, little-endian.
    BayerGbrg16le,
    /// Bayer mosaic GBRG, 16-bit samples, big-endian.
    BayerGbrg16be,
    /// Bayer mosaic GRBG, 16-bit samples, little-endian.
    BayerGrbg16le,
    /// Bayer mosaic GRBG, 16-bit samples, big-endian.
    BayerGrbg16be,
    /// Planar YUV 4:4:0, 10-bit samples, little-endian.
    Yuv440p10le,
    /// Planar YUV 4:4:0, 10-bit samples, big-endian.
    Yuv440p10be,
    /// Planar YUV 4:4:0, 12-bit samples, little-endian.
    Yuv440p12le,
    /// Planar YUV 4:4:0, 12-bit samples, big-endian.
    Yuv440p12be,
    /// Packed AYUV, 16 bits per channel, little-endian.
    Ayuv64le,
    /// Packed AYUV, 16 bits per channel, big-endian.
    Ayuv64be,
    /// Hardware surface (VideoToolbox).
    VideoToolbox,
    /// Semi-planar YUV 4:2:0, 10-bit samples in the high bits, little-endian.
    P010le,
    /// Semi-planar YUV 4:2:0, 10-bit samples in the high bits, big-endian.
    P010be,
    /// Planar RGB with alpha, 12-bit samples, big-endian.
    Gbrap12be,
    /// Planar RGB with alpha, 12-bit samples, little-endian.
    Gbrap12le,
    /// Planar RGB with alpha, 10-bit samples, big-endian.
    Gbrap10be,
    /// Planar RGB with alpha, 10-bit samples, little-endian.
    Gbrap10le,
    /// Hardware surface (MediaCodec).
    MediaCodec,
    /// Single channel, 12-bit gray, big-endian.
    Gray12be,
    /// Single channel, 12-bit gray, little-endian.
    Gray12le,
    /// Single channel, 10-bit gray, big-endian.
    Gray10be,
    /// Single channel, 10-bit gray, little-endian.
    Gray10le,
    /// Semi-planar YUV 4:2:0, 16-bit samples, little-endian.
    P016le,
    /// Semi-planar YUV 4:2:0, 16-bit samples, big-endian.
    P016be,
    /// Hardware surface (Direct3D 11 texture).
    D3d11,
    /// Single channel, 9-bit gray, big-endian.
    Gray9be,
    /// Single channel, 9-bit gray, little-endian.
    Gray9le,
    /// Planar RGB, 32-bit float samples, big-endian.
    Gbrpf32be,
    /// Planar RGB, 32-bit float samples, little-endian.
    Gbrpf32le,
    /// Planar RGB with alpha, 32-bit float samples, big-endian.
    Gbrapf32be,
    /// Planar RGB with alpha, 32-bit float samples, little-endian.
    Gbrapf32le,
    /// Hardware surface (DRM PRIME buffers).
    DrmPrime,
    /// Hardware surface (OpenCL images).
    OpenCl,
    /// Single channel, 14-bit gray, big-endian.
    Gray14be,
    /// Single channel, 14-bit gray, little-endian.
    Gray14le,
    /// Single channel, 32-bit float gray, big-endian.
    Grayf32be,
    /// Single channel, 32-bit float gray, little-endian.
    Grayf32le,
    /// Planar YUV 4:2:2 with alpha, 12-bit samples, big-endian.
    Yuva422p12be,
    /// Planar YUV 4:2:2 with alpha, 12-bit samples, little-endian.
    Yuva422p12le,
    /// Planar YUV 4:4:4 with alpha, 12-bit samples, big-endian.
    Yuva444p12be,
    /// Planar YUV 4:4:4 with alpha, 12-bit samples, little-endian.
    Yuva444p12le,
    /// Semi-planar YUV 4:4:4: Y plane plus interleaved Cb/Cr plane.
    Nv24,
    /// As [`Nv24`](Self::Nv24) with Cb and Cr swapped.
    Nv42,
    /// Hardware surface (Vulkan images).
    Vulkan,
    /// Packed YUV 4:2:2 in 16-bit containers, 10 bits in the high bits, big-endian.
    Y210be,
    /// Packed YUV 4:2:2 in 16-bit containers, 10 bits in the high bits, little-endian.
    Y210le,
    /// Packed RGB 10:10:10 in 32 bits (2 msb unused), little-endian.
    X2Rgb10le,
    /// Packed RGB 10:10:10 in 32 bits (2 msb unused), big-endian.
    X2Rgb10be,
    /// Packed BGR 10:10:10 in 32 bits (2 msb unused), little-endian.
    X2Bgr10le,
    /// Packed BGR 10:10:10 in 32 bits (2 msb unused), big-endian.
    X2Bgr10be,
    /// Semi-planar YUV 4:2:2, 10-bit samples in the high bits, big-endian.
    P210be,
    /// Semi-planar YUV 4:2:2, 10-bit samples in the high bits, little-endian.
    P210le,
    /// Semi-planar YUV 4:4:4, 10-bit samples in the high bits, big-endian.
    P410be,
    /// Semi-planar YUV 4:4:4, 10-bit samples in the high bits, little-endian.
    P410le,
    /// Semi-planar YUV 4:2:2, 16-bit samples, big-endian.
    P216be,
    /// Semi-planar YUV 4:2:2, 16-bit samples, little-endian.
    P216le,
    /// Semi-planar YUV 4:4:4, 16-bit samples, big-endian.
    P416be,
    /// Semi-planar YUV 4:4:4, 16-bit samples, little-endian.
    P416le,
    /// Packed 4:4:4, byte order V U Y A.
    Vuya,
    /// Packed RGBA, 16-bit float samples, big-endian.
    Rgbaf16be,
    /// Packed RGBA, 16-bit float samples, little-endian.
    Rgbaf16le,
    /// Packed 4:4:4, byte order V U Y X (fourth byte unused).
    Vuyx,
    /// Semi-planar YUV 4:2:0, 12-bit samples in the high bits, little-endian.
    P012le,
    /// Semi-planar YUV 4:2:0, 12-bit samples in the high bits, big-endian.
    P012be,
    /// Packed YUV 4:2:2 in 16-bit containers, 12 bits in the high bits, big-endian.
    Y212be,
    /// Packed YUV 4:2:2 in 16-bit containers, 12 bits in the high bits, little-endian.
    Y212le,
    /// Packed XVYU 4:4:4 in 32 bits, 10 bits per channel, big-endian.
    Xv30be,
    /// Packed XVYU 4:4:4 in 32 bits, 10 bits per channel, little-endian.
    Xv30le,
    /// Packed XVYU 4:4:4, 12 bits per channel in 16-bit containers, big-endian.
    Xv36be,
    /// Packed XVYU 4:4:4, 12 bits per channel in 16-bit containers, little-endian.
    Xv36le,
    /// Packed RGB, 32-bit float samples, big-endian.
    Rgbf32be,
    /// Packed RGB, 32-bit float samples, little-endian.
    Rgbf32le,
    /// Packed RGBA, 32-bit float samples, big-endian.
    Rgbaf32be,
    /// Packed RGBA, 32-bit float samples, little-endian.
    Rgbaf32le,
    /// Semi-planar YUV 4:2:2, 12-bit samples in the high bits, big-endian.
    P212be,
    /// Semi-planar YUV 4:2:2, 12-bit samples in the high bits, little-endian.
    P212le,
    /// Semi-planar YUV 4:4:4, 12-bit samples in the high bits, big-endian.
    P412be,
    /// Semi-planar YUV 4:4:4, 12-bit samples in the high bits, little-endian.
    P412le,
    /// Planar RGB with alpha, 14-bit samples, big-endian.
    Gbrap14be,
    /// Planar RGB with alpha, 14-bit samples, little-endian.
    Gbrap14le,
    /// Hardware surface (Direct3D 12 resources).
    D3d12,
    /// Packed 4:4:4, byte order A Y U V.
    Ayuv,
    /// Packed 4:4:4, byte order U Y V A.
    Uyva,
    /// Packed 4:4:4, byte order V Y U.
    Vyu444,
    /// Packed VYUX 4:4:4 in 32 bits, 10 bits per channel, big-endian.
    V30xbe,
    /// Packed VYUX 4:4:4 in 32 bits, 10 bits per channel, little-endian.
    V30xle,
    /// Packed RGB, 16-bit float samples, big-endian.
    Rgbf16be,
    /// Packed RGB, 16-bit float samples, little-endian.
    Rgbf16le,
    /// Packed RGBA, 32 bits per channel, big-endian.
    Rgba128be,
    /// Packed RGBA, 32 bits per channel, little-endian.
    Rgba128le,
    /// Packed RGB, 32 bits per channel, big-endian.
    Rgb96be,
    /// Packed RGB, 32 bits per channel, little-endian.
    Rgb96le,
    /// Packed YUV 4:2:2 in 16-bit containers, big-endian.
    Y216be,
    /// Packed YUV 4:2:2 in 16-bit containers, little-endian.
    Y216le,
    /// Packed XVYU 4:4:4, 16 bits per channel, big-endian.
    Xv48be,
    /// Packed XVYU 4:4:4, 16 bits per channel, little-endian.
    Xv48le,
    /// Planar RGB, 16-bit float samples, big-endian.
    Gbrpf16be,
    /// Planar RGB, 16-bit float samples, little-endian.
    Gbrpf16le,
    /// Planar RGB with alpha, 16-bit float samples, big-endian.
    Gbrapf16be,
    /// Planar RGB with alpha, 16-bit float samples, little-endian.
    Gbrapf16le,
    /// Single channel, 16-bit float gray, big-endian.
    Grayf16be,
    /// Single channel, 16-bit float gray, little-endian.
    Grayf16le,
    /// Hardware surface (AMF).
    AmfSurface,
    /// Single channel, 32-bit gray, big-endian.
    Gray32be,
    /// Single channel, 32-bit gray, little-endian.
    Gray32le,
    /// 32-bit float gray plus 32-bit float alpha, big-endian.
    Yaf32be,
    /// 32-bit float gray plus 32-bit float alpha, little-endian.
    Yaf32le,
    /// 16-bit float gray plus 16-bit float alpha, big-endian.
    Yaf16be,
    /// 16-bit float gray plus 16-bit float alpha, little-endian.
    Yaf16le,
    /// Planar RGB with alpha, 32 bits per channel, big-endian.
    Gbrap32be,
    /// Planar RGB with alpha, 32 bits per channel, little-endian.
    Gbrap32le,
    /// Planar YUV 4:4:4, 10-bit samples in the high bits, big-endian.
    Yuv444p10msbbe,
    /// Planar YUV 4:4:4, 10-bit samples in the high bits, little-endian.
    Yuv444p10msble,
    /// Planar YUV 4:4:4, 12-bit samples in the high bits, big-endian.
    Yuv444p12msbbe,
    /// Planar YUV 4:4:4, 12-bit samples in the high bits, little-endian.
    Yuv444p12msble,
    /// Planar RGB, 10-bit samples in the high bits, big-endian.
    Gbrp10msbbe,
    /// Planar RGB, 10-bit samples in the high bits, little-endian.
    Gbrp10msble,
    /// Planar RGB, 12-bit samples in the high bits, big-endian.
    Gbrp12msbbe,
    /// Planar RGB, 12-bit samples in the high bits, little-endian.
    Gbrp12msble,
    /// Hardware surface (OpenHarmony codec).
    Ohcodec,
}

impl PixelFormat {
    /// Number of formats in the catalog.
    pub(crate) const COUNT: usize = 267;

    /// The layout descriptor for this format.
    pub fn descriptor(self) -> &'static PixFmtDescriptor {
        &catalog::DESCRIPTORS[self as usize]
    }

    /// Canonical short name, e.g. `"yuv420p"`.
    pub fn name(self) -> &'static str {
        self.descriptor().name()
    }

    /// All formats, in ascending catalog order.
    pub fn all() -> impl Iterator<Item = PixelFormat> {
        catalog::DESCRIPTORS.iter().map(|d| d.id)
    }

    /// Look up a format by name or alias (case-sensitive exact match).
    ///
    /// A name without an endianness suffix resolves to the variant matching
    /// the target's native byte order, so `"rgb565"` finds `"rgb565le"` on
    /// little-endian targets.
    pub fn from_name(name: &str) -> Result<PixelFormat, PixFmtError> {
        if name.is_empty() {
            return Err(PixFmtError::EmptyName);
        }
        if let Some(fmt) = lookup_exact(name) {
            return Ok(fmt);
        }
        let ne = if cfg!(target_endian = "big") { "be" } else { "le" };
        let suffixed = alloc::format!("{name}{ne}");
        lookup_exact(&suffixed).ok_or_else(|| PixFmtError::NotFound(String::from(name)))
    }

    /// Horizontal and vertical chroma subsampling shifts (base-2 log).
    pub fn chroma_sub_sample(self) -> (u8, u8) {
        let desc = self.descriptor();
        (desc.log2_chroma_w, desc.log2_chroma_h)
    }

    /// Number of distinct data planes referenced by this format's
    /// components (1 for packed formats, up to 4 for planar-with-alpha).
    pub fn count_planes(self) -> usize {
        let mut used = [false; 4];
        for comp in self.descriptor().components() {
            used[usize::from(comp.plane)] = true;
        }
        used.iter().filter(|&&u| u).count()
    }

    /// The format with the opposite byte order and otherwise identical
    /// layout, found by swapping the name's `le`/`be` suffix.
    pub fn swap_endianness(self) -> Result<PixelFormat, PixFmtError> {
        let name = self.name();
        let swapped = if let Some(stem) = name.strip_suffix("be") {
            alloc::format!("{stem}le")
        } else if let Some(stem) = name.strip_suffix("le") {
            alloc::format!("{stem}be")
        } else {
            return Err(PixFmtError::NoEndianSibling(name));
        };
        lookup_exact(&swapped).ok_or(PixFmtError::NoEndianSibling(name))
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn lookup_exact(name: &str) -> Option<PixelFormat> {
    catalog::DESCRIPTORS.iter().find_map(|d| {
        let hit = d.name == name
            || d.alias
                .is_some_and(|aliases| aliases.split(',').any(|a| a == name));
        hit.then_some(d.id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trip_all_formats() {
        for fmt in PixelFormat::all() {
            assert_eq!(PixelFormat::from_name(fmt.name()).ok(), Some(fmt));
        }
    }

    #[test]
    fn from_name_aliases() {
        assert_eq!(PixelFormat::from_name("gray").ok(), Some(PixelFormat::Gray8));
        assert_eq!(PixelFormat::from_name("gray8").ok(), Some(PixelFormat::Gray8));
        assert_eq!(PixelFormat::from_name("y8").ok(), Some(PixelFormat::Gray8));
        assert_eq!(PixelFormat::from_name("gbr24p").ok(), Some(PixelFormat::Gbrp));
        assert_eq!(PixelFormat::from_name("gray8a").ok(), Some(PixelFormat::Ya8));
    }

    #[test]
    fn from_name_native_endian_suffix() {
        let expected = if cfg!(target_endian = "big") {
            PixelFormat::Rgb565be
        } else {
            PixelFormat::Rgb565le
        };
        assert_eq!(PixelFormat::from_name("rgb565").ok(), Some(expected));
    }

    #[test]
    fn from_name_failures() {
        assert!(matches!(
            PixelFormat::from_name(""),
            Err(PixFmtError::EmptyName)
        ));
        assert!(matches!(
            PixelFormat::from_name("no_such_format"),
            Err(PixFmtError::NotFound(_))
        ));
        // Case-sensitive.
        assert!(PixelFormat::from_name("RGB24").is_err());
    }

    #[test]
    fn chroma_sub_sample_shifts() {
        assert_eq!(PixelFormat::Yuv420p10le.chroma_sub_sample(), (1, 1));
        assert_eq!(PixelFormat::Yuv422p.chroma_sub_sample(), (1, 0));
        assert_eq!(PixelFormat::Yuv440p.chroma_sub_sample(), (0, 1));
        assert_eq!(PixelFormat::Yuv410p.chroma_sub_sample(), (2, 2));
        assert_eq!(PixelFormat::Rgb24.chroma_sub_sample(), (0, 0));
    }

    #[test]
    fn plane_counts() {
        assert_eq!(PixelFormat::Rgb24.count_planes(), 1);
        assert_eq!(PixelFormat::Nv12.count_planes(), 2);
        assert_eq!(PixelFormat::Yuv420p.count_planes(), 3);
        assert_eq!(PixelFormat::Yuva444p16le.count_planes(), 4);
        assert_eq!(PixelFormat::Pal8.count_planes(), 1);
    }

    #[test]
    fn swap_endianness_pairs() {
        assert_eq!(
            PixelFormat::Gray16le.swap_endianness().ok(),
            Some(PixelFormat::Gray16be)
        );
        assert_eq!(
            PixelFormat::Yuv420p10be.swap_endianness().ok(),
            Some(PixelFormat::Yuv420p10le)
        );
        assert!(matches!(
            PixelFormat::Rgb24.swap_endianness(),
            Err(PixFmtError::NoEndianSibling("rgb24"))
        ));
    }

    #[test]
    fn swap_endianness_is_an_involution() {
        for fmt in PixelFormat::all() {
            if let Ok(sib) = fmt.swap_endianness() {
                assert_eq!(sib.swap_endianness().ok(), Some(fmt), "{}", fmt.name());
            }
        }
    }

    #[test]
    fn display_uses_catalog_name() {
        assert_eq!(alloc::format!("{}", PixelFormat::Yuv420p), "yuv420p");
        assert_eq!(alloc::format!("{}", PixelFormat::Xrgb), "0rgb");
    }
}
