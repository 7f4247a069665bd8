#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Probe, decode, and header-only parse must never panic
    let _ = zenseif::ImageInfo::from_bytes(data);
    let _ = zenseif::SeifHeader::parse(data);

    let limits = zenseif::Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    if let Ok(images) = zenseif::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    {
        for image in &images {
            assert_eq!(
                image.pixels().len(),
                image.width as usize * image.height as usize * 4
            );
        }
    }
});
