//! Audio fixtures synthesized on disk for tag codec tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging once per test binary
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Small JPEG-looking payload used as cover art
pub const COVER_A: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x01];
pub const COVER_B: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x08, b'E', b'x', b'i', b'f', 0x02];

// =============================================================================
// MP3
// =============================================================================

/// Write an MP3 made of a few silent MPEG-1 Layer III frames, without any tag
pub fn write_mp3(dir: &Path, name: &str) -> PathBuf {
    // 128 kbps, 44.1 kHz, no padding: 417 bytes per frame
    let mut data = Vec::new();
    for _ in 0..4 {
        data.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x64]);
        data.extend(std::iter::repeat(0u8).take(413));
    }

    let path = dir.join(name);
    std::fs::write(&path, data).unwrap();
    path
}

// =============================================================================
// Ogg Opus
// =============================================================================

const SERIAL: u32 = 0x5347_5447;
const PRE_SKIP: u16 = 312;

/// Ogg page CRC: polynomial 0x04C11DB7, zero init, no reflection
pub fn ogg_crc(data: &[u8]) -> u32 {
    let mut crc = 0u32;
    for &byte in data {
        crc ^= u32::from(byte) << 24;
        for _ in 0..8 {
            crc = if crc & 0x8000_0000 == 0 {
                crc << 1
            } else {
                (crc << 1) ^ 0x04C1_1DB7
            };
        }
    }
    crc
}

/// One Ogg page carrying exactly one complete packet
fn ogg_page(header_type: u8, granule: u64, sequence: u32, packet: &[u8]) -> Vec<u8> {
    let mut lacing = vec![255u8; packet.len() / 255];
    lacing.push((packet.len() % 255) as u8);

    let mut page = Vec::with_capacity(27 + lacing.len() + packet.len());
    page.extend_from_slice(b"OggS");
    page.push(0); // version
    page.push(header_type);
    page.extend_from_slice(&granule.to_le_bytes());
    page.extend_from_slice(&SERIAL.to_le_bytes());
    page.extend_from_slice(&sequence.to_le_bytes());
    page.extend_from_slice(&[0; 4]); // checksum placeholder
    page.push(u8::try_from(lacing.len()).unwrap());
    page.extend_from_slice(&lacing);
    page.extend_from_slice(packet);

    let crc = ogg_crc(&page);
    page[22..26].copy_from_slice(&crc.to_le_bytes());
    page
}

fn opus_head() -> Vec<u8> {
    let mut head = Vec::with_capacity(19);
    head.extend_from_slice(b"OpusHead");
    head.push(1); // version
    head.push(2); // channels
    head.extend_from_slice(&PRE_SKIP.to_le_bytes());
    head.extend_from_slice(&48_000u32.to_le_bytes());
    head.extend_from_slice(&0i16.to_le_bytes()); // output gain
    head.push(0); // channel mapping family
    head
}

fn opus_tags(comments: &[(&str, &str)]) -> Vec<u8> {
    let vendor = b"songtag-fixture";

    let mut tags = Vec::new();
    tags.extend_from_slice(b"OpusTags");
    tags.extend_from_slice(&u32::try_from(vendor.len()).unwrap().to_le_bytes());
    tags.extend_from_slice(vendor);
    tags.extend_from_slice(&u32::try_from(comments.len()).unwrap().to_le_bytes());
    for (key, value) in comments {
        let comment = format!("{key}={value}");
        tags.extend_from_slice(&u32::try_from(comment.len()).unwrap().to_le_bytes());
        tags.extend_from_slice(comment.as_bytes());
    }
    tags
}

/// Write a one-second Ogg Opus stream with the given Vorbis comments
pub fn write_opus(dir: &Path, name: &str, comments: &[(&str, &str)]) -> PathBuf {
    let mut data = Vec::new();
    data.extend(ogg_page(0x02, 0, 0, &opus_head()));
    data.extend(ogg_page(0x00, 0, 1, &opus_tags(comments)));
    // One 20 ms CELT frame's worth of (silent) payload
    data.extend(ogg_page(
        0x04,
        48_000 + u64::from(PRE_SKIP),
        2,
        &[0xFC, 0xFF, 0xFE],
    ));

    let path = dir.join(name);
    std::fs::write(&path, data).unwrap();
    path
}

/// Whether the file contains the given bytes anywhere
pub fn file_contains(path: &Path, needle: &[u8]) -> bool {
    let data = std::fs::read(path).unwrap();
    data.windows(needle.len()).any(|window| window == needle)
}
