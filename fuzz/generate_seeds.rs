#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn seif(encoding: u32, width: u32, height: u32, count: u32, size: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = b"SEIF".to_vec();
    out.extend_from_slice(&0u32.to_le_bytes()); // flags
    out.extend_from_slice(&encoding.to_le_bytes());
    out.extend_from_slice(b"fuzzseed");
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&count.to_le_bytes());
    out.extend_from_slice(&size.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes()); // chunk header
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(payload);
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // RGB 2x2
    let rgb = seif(0, 2, 2, 1, 4, b"\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80");
    fs::write(format!("{dir}/rgb_2x2.seif"), rgb).unwrap();

    // RGBA 1x2
    let rgba = seif(1, 1, 2, 1, 2, b"\x10\x20\x30\x40\x50\x60\x70\x80");
    fs::write(format!("{dir}/rgba_1x2.seif"), rgba).unwrap();

    // ARGB 1x1
    let argb = seif(2, 1, 1, 1, 1, b"\xff\x10\x20\x30");
    fs::write(format!("{dir}/argb_1x1.seif"), argb).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_magic.bin"), b"SEIF").unwrap();
    fs::write(format!("{dir}/two_chunks.bin"), seif(1, 1, 1, 2, 1, b"\0\0\0\0")).unwrap();
    fs::write(format!("{dir}/short_payload.bin"), seif(0, 10, 10, 1, 100, &[0; 10])).unwrap();
    fs::write(format!("{dir}/bad_encoding.bin"), seif(7, 1, 1, 1, 1, &[0; 4])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
