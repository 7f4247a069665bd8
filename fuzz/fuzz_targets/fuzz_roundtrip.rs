#![no_main]
use libfuzzer_sys::fuzz_target;
use zenseif::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let Ok(decoded) = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };
    let Some(first) = decoded.first() else { return };

    for encoding in [SeifEncoding::Rgba, SeifEncoding::Argb] {
        let Ok(reencoded) = EncodeRequest::new(encoding).encode(
            first.pixels(),
            first.width,
            first.height,
            PixelLayout::Rgba8,
            enough::Unstoppable,
        ) else {
            return;
        };
        let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
            panic!("re-encoded data failed to decode");
        };

        assert_eq!(first.pixels(), decoded2[0].pixels(), "roundtrip pixel mismatch");
        assert_eq!(first.width, decoded2[0].width);
        assert_eq!(first.height, decoded2[0].height);
    }
});
