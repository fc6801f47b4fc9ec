//! # zenpixfmt
//!
//! Pixel format descriptors: given a [`PixelFormat`], answer structural
//! questions about its memory layout — component count, plane count, bit
//! depths and offsets, chroma subsampling — and read or write horizontal
//! runs of component samples against raw, strided plane memory.
//!
//! The catalog covers 260+ formats: planar and packed YUV at 8–16 bits in
//! both endiannesses, packed and planar RGB(A) families, sub-byte bitstream
//! formats, palette indexing, Bayer mosaics, XYZ, float sample formats, and
//! opaque hardware-surface tokens.
//!
//! ## Non-Goals
//!
//! - Pixel *conversion* (colorspace transforms, scaling, resampling) —
//!   that belongs in a conversion layer built on top of these descriptors
//! - Image container parsing
//! - Interpreting hardware surfaces (those formats carry no plane layout)
//!
//! ## Usage
//!
//! ```
//! use zenpixfmt::{PixelFormat, PlaneRef, read_image_line};
//!
//! let fmt = PixelFormat::from_name("rgb24")?;
//! let desc = fmt.descriptor();
//! assert_eq!(desc.bits_per_pixel(), 24);
//! assert_eq!(fmt.count_planes(), 1);
//!
//! // Read the red component of the first two pixels of a 2x1 image.
//! let data = [10u8, 20, 30, 11, 21, 31];
//! let planes = [
//!     PlaneRef::new(&data, 6),
//!     PlaneRef::empty(),
//!     PlaneRef::empty(),
//!     PlaneRef::empty(),
//! ];
//! let mut red = [0u16; 2];
//! read_image_line(&mut red, &planes, desc, 0, 0, 0, false)?;
//! assert_eq!(red, [10, 11]);
//! # Ok::<(), zenpixfmt::PixFmtError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod catalog;
mod color;
mod desc;
mod error;
mod format;
mod line;
mod loss;

// Re-exports
pub use color::{ChromaLocation, ColorPrimaries, ColorRange, ColorSpace, ColorTransfer};
pub use desc::{ComponentDesc, FormatFlags, PixFmtDescriptor};
pub use error::PixFmtError;
pub use format::PixelFormat;
pub use line::{
    PlaneMut, PlaneRef, read_image_line, read_image_line32, write_image_line, write_image_line32,
};
pub use loss::{LossFlags, find_best, loss};

/// Size in bytes of the palette stored at the start of plane 1 of palette
/// formats (256 entries of 4 bytes each).
pub const PALETTE_SIZE: usize = 1024;

/// Number of entries in the palette of palette formats.
pub const PALETTE_COUNT: usize = 256;

/// Maximum number of data planes an image can use.
pub const MAX_PLANES: usize = 4;
