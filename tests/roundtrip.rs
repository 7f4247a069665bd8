use enough::Unstoppable;
use zenseif::*;

#[test]
fn rgba_roundtrip_2x2() {
    let w = 2;
    let h = 2;
    let pixels = vec![
        255, 0, 0, 255, // red
        0, 255, 0, 128, // green semi-transparent
        0, 0, 255, 0, // blue transparent
        128, 128, 128, 255, // gray
    ];

    let encoded = EncodeRequest::rgba()
        .encode(&pixels, w, h, PixelLayout::Rgba8, Unstoppable)
        .unwrap();
    assert_eq!(&encoded[0..4], b"SEIF");
    assert_eq!(
        encoded.len(),
        seif::HEADER_SIZE + seif::CHUNK_HEADER_SIZE + pixels.len()
    );

    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].width, w);
    assert_eq!(decoded[0].height, h);
    assert_eq!(decoded[0].layout(), PixelLayout::Rgba8);
    assert_eq!(decoded[0].pixels(), &pixels[..]);
}

#[test]
fn argb_roundtrip_keeps_alpha() {
    let pixels = vec![
        10, 20, 30, 40, 50, 60, 70, 80, //
        90, 100, 110, 120, 130, 140, 150, 160, //
        170, 180, 190, 200, 210, 220, 230, 240,
    ];

    let encoded = EncodeRequest::argb()
        .encode(&pixels, 2, 3, PixelLayout::Rgba8, Unstoppable)
        .unwrap();
    // First stored pixel is alpha-first
    let payload = &encoded[seif::HEADER_SIZE + seif::CHUNK_HEADER_SIZE..];
    assert_eq!(&payload[..4], &[40, 10, 20, 30]);

    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded[0].pixels(), &pixels[..]);
}

#[test]
fn rgb_roundtrip_from_rgb8_is_opaque() {
    let w = 3;
    let h = 2;
    let pixels = vec![
        255, 0, 0, 0, 255, 0, 0, 0, 255, // row 0: R G B
        128, 128, 128, 64, 64, 64, 0, 0, 0, // row 1: gray dark black
    ];

    let encoded = EncodeRequest::rgb()
        .encode(&pixels, w, h, PixelLayout::Rgb8, Unstoppable)
        .unwrap();
    let header = SeifHeader::parse(&encoded).unwrap();
    assert_eq!(header.encoding, SeifEncoding::Rgb);
    assert_eq!(header.chunk_size, w * h);

    let decoded = decode(&encoded, Unstoppable).unwrap();
    let expected: Vec<u8> = pixels
        .chunks_exact(3)
        .flat_map(|p| [p[0], p[1], p[2], 255])
        .collect();
    assert_eq!(decoded[0].pixels(), &expected[..]);
}

#[test]
fn rgb_encoding_drops_alpha() {
    let pixels = vec![1, 2, 3, 4, 5, 6, 7, 8];
    let encoded = encode_seif(
        &pixels,
        2,
        1,
        PixelLayout::Rgba8,
        SeifEncoding::Rgb,
        Unstoppable,
    )
    .unwrap();
    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded[0].pixels(), &[1, 2, 3, 255, 5, 6, 7, 255]);
}

#[test]
fn header_fields_survive_encoding() {
    let pixels = vec![0u8; 4];
    let encoded = EncodeRequest::rgba()
        .with_flags(0xDEAD_BEEF)
        .with_signature(*b"test-sig")
        .encode(&pixels, 1, 1, PixelLayout::Rgba8, Unstoppable)
        .unwrap();

    let header = DecodeRequest::new(&encoded).header().unwrap();
    assert_eq!(header.flags, 0xDEAD_BEEF);
    assert_eq!(header.meta.signature, *b"test-sig");
    assert_eq!(header.signature(), b"test-sig");
    assert_eq!(header.chunk_count, 1);
}

#[test]
fn default_signature_is_nul_terminated() {
    let encoded = EncodeRequest::rgb()
        .encode(&[0, 0, 0], 1, 1, PixelLayout::Rgb8, Unstoppable)
        .unwrap();
    let header = SeifHeader::parse(&encoded).unwrap();
    assert_eq!(header.meta.signature, DEFAULT_SIGNATURE);
    assert_eq!(header.signature(), b"zenseif");
}

#[test]
fn empty_image_roundtrip() {
    let encoded = EncodeRequest::rgba()
        .encode(&[], 0, 0, PixelLayout::Rgba8, Unstoppable)
        .unwrap();
    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.len(), 1);
    assert!(decoded[0].pixels().is_empty());
}

#[test]
fn image_info_probe() {
    let pixels = vec![255u8; 6]; // 1x2 RGB
    let encoded = EncodeRequest::rgb()
        .encode(&pixels, 1, 2, PixelLayout::Rgb8, Unstoppable)
        .unwrap();

    let info = ImageInfo::from_bytes(&encoded).unwrap();
    assert_eq!(info.width(), 1);
    assert_eq!(info.height(), 2);
    assert_eq!(info.header.encoding, SeifEncoding::Rgb);
    assert_eq!(
        info.chunks,
        vec![ChunkInfo {
            index: 0,
            offset: seif::HEADER_SIZE as u64,
            width: 1,
            height: 2,
        }]
    );

    let text = info.to_string();
    assert!(text.starts_with("[HEADER]:"));
    assert!(text.contains(" - [CHUNK 0]:\n    - width: 1\n    - height: 2"));
}

#[test]
fn limits_reject_large() {
    let pixels = vec![255u8; 6];
    let encoded = EncodeRequest::rgb()
        .encode(&pixels, 1, 2, PixelLayout::Rgb8, Unstoppable)
        .unwrap();

    let limits = Limits {
        max_pixels: Some(1), // only 1 pixel allowed
        ..Default::default()
    };

    let result = DecodeRequest::new(&encoded)
        .with_limits(&limits)
        .decode(Unstoppable);
    match result.unwrap_err() {
        SeifError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn memory_limit_counts_rgba_output() {
    // 2x2 RGB: 12 payload bytes, 16 output bytes
    let encoded = EncodeRequest::rgb()
        .encode(&[7u8; 12], 2, 2, PixelLayout::Rgb8, Unstoppable)
        .unwrap();

    let tight = Limits {
        max_memory_bytes: Some(15),
        ..Default::default()
    };
    assert!(matches!(
        DecodeRequest::new(&encoded)
            .with_limits(&tight)
            .decode(Unstoppable),
        Err(SeifError::LimitExceeded(_))
    ));

    let enough_mem = Limits {
        max_memory_bytes: Some(16),
        ..Default::default()
    };
    assert!(
        DecodeRequest::new(&encoded)
            .with_limits(&enough_mem)
            .decode(Unstoppable)
            .is_ok()
    );
}

#[test]
fn encoder_rejects_short_input() {
    let result = EncodeRequest::rgba().encode(&[0u8; 15], 2, 2, PixelLayout::Rgba8, Unstoppable);
    match result.unwrap_err() {
        SeifError::BufferTooSmall { needed, actual } => {
            assert_eq!(needed, 16);
            assert_eq!(actual, 15);
        }
        other => panic!("expected BufferTooSmall, got {other:?}"),
    }
}

#[test]
fn encoder_rejects_pixel_count_beyond_u32() {
    let result = EncodeRequest::rgb().encode(&[], 65536, 65536, PixelLayout::Rgb8, Unstoppable);
    assert!(matches!(
        result,
        Err(SeifError::DimensionsTooLarge {
            width: 65536,
            height: 65536
        })
    ));
}

#[cfg(feature = "rgb")]
#[test]
fn typed_rgba_view() {
    let pixels = vec![1, 2, 3, 4, 5, 6, 7, 8];
    let encoded = EncodeRequest::rgba()
        .encode(&pixels, 2, 1, PixelLayout::Rgba8, Unstoppable)
        .unwrap();
    let decoded = decode(&encoded, Unstoppable).unwrap();
    let typed = decoded[0].as_pixels();
    assert_eq!(typed.len(), 2);
    assert_eq!(typed[1], rgb::RGBA8::new(5, 6, 7, 8));
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_view_has_image_dimensions() {
    let pixels = vec![0u8; 3 * 2 * 4];
    let encoded = EncodeRequest::argb()
        .encode(&pixels, 3, 2, PixelLayout::Rgba8, Unstoppable)
        .unwrap();
    let decoded = decode(&encoded, Unstoppable).unwrap();
    let img = decoded[0].as_imgref();
    assert_eq!(img.width(), 3);
    assert_eq!(img.height(), 2);
    assert_eq!(decoded[0].to_imgvec().buf().len(), 6);
}
