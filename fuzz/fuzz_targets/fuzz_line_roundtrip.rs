#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpixfmt::{
    read_image_line, write_image_line, PixFmtDescriptor, PixelFormat, PlaneMut, PlaneRef,
};

const STRIDE: usize = 1 << 12;
const PLANE_BYTES: usize = STRIDE * 8;

fuzz_target!(|data: &[u8]| {
    // byte 0: format selector, 1: component, 2: x, 3: y, 4: width,
    // rest: sample values. Coordinates are clamped so every format's
    // addressing stays inside the fixed plane buffers.
    if data.len() < 5 {
        return;
    }
    let formats: Vec<PixelFormat> = PixelFormat::all().collect();
    let desc: &PixFmtDescriptor =
        formats[usize::from(data[0]) % formats.len()].descriptor();
    let c = usize::from(data[1]) % 4;
    let x = usize::from(data[2]);
    let y = usize::from(data[3]) % 4;
    let w = usize::from(data[4]) % 64;

    let src: Vec<u16> = (0..w)
        .map(|i| {
            let lo = data.get(5 + 2 * i).copied().unwrap_or(0);
            let hi = data.get(6 + 2 * i).copied().unwrap_or(0);
            u16::from_le_bytes([lo, hi])
        })
        .collect();

    let mut bufs = vec![[0u8; PLANE_BYTES]; 4];
    {
        let [b0, b1, b2, b3] = &mut bufs[..] else {
            unreachable!()
        };
        let mut planes = [
            PlaneMut::new(b0, STRIDE),
            PlaneMut::new(b1, STRIDE),
            PlaneMut::new(b2, STRIDE),
            PlaneMut::new(b3, STRIDE),
        ];
        if write_image_line(&src, &mut planes, desc, x, y, c).is_err() {
            return;
        }
    }

    let planes = [
        PlaneRef::new(&bufs[0], STRIDE),
        PlaneRef::new(&bufs[1], STRIDE),
        PlaneRef::new(&bufs[2], STRIDE),
        PlaneRef::new(&bufs[3], STRIDE),
    ];
    let mut out = vec![0u16; w];
    read_image_line(&mut out, &planes, desc, x, y, c, false).unwrap();

    // Whatever was written masked to the component depth must come back.
    let depth = desc.component(c).unwrap().depth;
    if depth <= 16 {
        let mask = if depth >= 16 { u16::MAX } else { (1 << depth) - 1 };
        for (got, sent) in out.iter().zip(src.iter()) {
            assert_eq!(*got, sent & mask);
        }
    }
});
