//! Line engine properties across the whole catalog: write-then-read
//! idempotence, endianness siblings, palette indirection, and the
//! reference rgb24 fixture.

use zenpixfmt::{
    read_image_line, write_image_line, PixFmtDescriptor, PixelFormat, PlaneMut, PlaneRef,
};

const STRIDE: usize = 128;
const PLANE_BYTES: usize = 512;

fn refs(bufs: &[[u8; PLANE_BYTES]; 4]) -> [PlaneRef<'_>; 4] {
    let [b0, b1, b2, b3] = bufs;
    [
        PlaneRef::new(b0, STRIDE),
        PlaneRef::new(b1, STRIDE),
        PlaneRef::new(b2, STRIDE),
        PlaneRef::new(b3, STRIDE),
    ]
}

fn muts(bufs: &mut [[u8; PLANE_BYTES]; 4]) -> [PlaneMut<'_>; 4] {
    let [b0, b1, b2, b3] = bufs;
    [
        PlaneMut::new(b0, STRIDE),
        PlaneMut::new(b1, STRIDE),
        PlaneMut::new(b2, STRIDE),
        PlaneMut::new(b3, STRIDE),
    ]
}

#[test]
fn rgb24_reference_fixture() {
    let row = [10u8, 20, 30, 11, 21, 31, 12, 22, 32, 13, 23, 33];
    let planes = [
        PlaneRef::new(&row, 12),
        PlaneRef::empty(),
        PlaneRef::empty(),
        PlaneRef::empty(),
    ];
    let mut out = [0u16; 4];
    read_image_line(
        &mut out,
        &planes,
        PixelFormat::Rgb24.descriptor(),
        0,
        0,
        0,
        false,
    )
    .unwrap();
    assert_eq!(out, [10, 11, 12, 13]);
}

#[test]
fn write_then_read_is_identity_for_low_depths() {
    // Every catalog format, every component with depth <= 8, extreme
    // sample values, on a zeroed buffer.
    for desc in PixFmtDescriptor::all() {
        if desc.is_hwaccel() {
            continue;
        }
        for c in 0..desc.nb_components() {
            let depth = desc.component(c).unwrap().depth;
            if depth > 8 {
                continue;
            }
            let max = (1u16 << depth) - 1;
            for value in [0u16, max] {
                let mut bufs = [[0u8; PLANE_BYTES]; 4];
                let src = [value; 5];
                {
                    let mut planes = muts(&mut bufs);
                    write_image_line(&src, &mut planes, desc, 1, 1, c).unwrap();
                }
                let planes = refs(&bufs);
                let mut out = [0u16; 5];
                read_image_line(&mut out, &planes, desc, 1, 1, c, false).unwrap();
                assert_eq!(out, src, "{} component {c} value {value}", desc.name());
            }
        }
    }
}

#[test]
fn write_then_read_is_identity_for_wide_depths() {
    // 9..16-bit components with a value that exercises both container
    // bytes.
    for desc in PixFmtDescriptor::all() {
        if desc.is_hwaccel() || desc.is_bitstream() {
            continue;
        }
        for c in 0..desc.nb_components() {
            let depth = desc.component(c).unwrap().depth;
            if !(9..=16).contains(&depth) {
                continue;
            }
            let value = ((1u32 << depth) - 1) as u16 ^ 0x2A;
            let mut bufs = [[0u8; PLANE_BYTES]; 4];
            let src = [value; 3];
            {
                let mut planes = muts(&mut bufs);
                write_image_line(&src, &mut planes, desc, 0, 0, c).unwrap();
            }
            let planes = refs(&bufs);
            let mut out = [0u16; 3];
            read_image_line(&mut out, &planes, desc, 0, 0, c, false).unwrap();
            assert_eq!(out, src, "{} component {c}", desc.name());
        }
    }
}

#[test]
fn endian_siblings_agree_after_container_swap() {
    // Writing through the little-endian descriptor and byte-swapping each
    // 16-bit container yields the big-endian sibling's bytes.
    for fmt in [
        PixelFormat::Gray16le,
        PixelFormat::Ya16le,
        PixelFormat::Rgb48le,
        PixelFormat::Yuv420p10le,
        PixelFormat::Rgb565le,
    ] {
        let desc = fmt.descriptor();
        let sibling = fmt.swap_endianness().unwrap().descriptor();

        let mut bufs = [[0u8; PLANE_BYTES]; 4];
        for c in 0..desc.nb_components() {
            let depth = desc.component(c).unwrap().depth;
            let src = [(1u16 << (depth - 1)) | 1; 4];
            let mut planes = muts(&mut bufs);
            write_image_line(&src, &mut planes, desc, 0, 0, c).unwrap();
        }

        let mut swapped = bufs;
        for plane in &mut swapped {
            for pair in plane.chunks_exact_mut(2) {
                pair.swap(0, 1);
            }
        }

        let le_planes = refs(&bufs);
        let be_planes = refs(&swapped);
        for c in 0..desc.nb_components() {
            let mut from_le = [0u16; 4];
            let mut from_be = [0u16; 4];
            read_image_line(&mut from_le, &le_planes, desc, 0, 0, c, false).unwrap();
            read_image_line(&mut from_be, &be_planes, sibling, 0, 0, c, false).unwrap();
            assert_eq!(from_le, from_be, "{} component {c}", desc.name());
        }
    }
}

#[test]
fn palette_indirection_reads_all_four_channels() {
    let mut index_plane = [0u8; PLANE_BYTES];
    index_plane[..3].copy_from_slice(&[2, 0, 2]);
    let mut palette_plane = [0u8; PLANE_BYTES];
    // Entry 0 and entry 2, 4 bytes each.
    palette_plane[..4].copy_from_slice(&[1, 2, 3, 4]);
    palette_plane[8..12].copy_from_slice(&[41, 42, 43, 44]);

    let planes = [
        PlaneRef::new(&index_plane, STRIDE),
        PlaneRef::new(&palette_plane, 0),
        PlaneRef::empty(),
        PlaneRef::empty(),
    ];
    let desc = PixelFormat::Pal8.descriptor();
    for (c, expected) in [
        (0usize, [41u16, 1, 41]),
        (1, [42, 2, 42]),
        (2, [43, 3, 43]),
        (3, [44, 4, 44]),
    ] {
        let mut out = [0u16; 3];
        read_image_line(&mut out, &planes, desc, 0, 0, c, true).unwrap();
        assert_eq!(out, expected, "palette channel {c}");
    }
}

#[test]
fn interior_window_leaves_surroundings_untouched() {
    // Writing a window at (x=2, y=1) must not disturb other bytes.
    let desc = PixelFormat::Rgb24.descriptor();
    let mut bufs = [[0u8; PLANE_BYTES]; 4];
    bufs[0].fill(0xEE);
    {
        let mut planes = muts(&mut bufs);
        write_image_line(&[1, 2], &mut planes, desc, 2, 1, 1).unwrap();
    }
    // Green bytes of pixels 2 and 3 in row 1.
    assert_eq!(bufs[0][STRIDE + 7], 1);
    assert_eq!(bufs[0][STRIDE + 10], 2);
    let untouched = bufs[0]
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != STRIDE + 7 && i != STRIDE + 10)
        .all(|(_, &b)| b == 0xEE);
    assert!(untouched);
}
