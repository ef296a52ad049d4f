//! Hand-crafted little-endian TIFF fixtures.
//!
//! Small enough to assemble byte by byte: an 8-byte header, one pixel of
//! strip data, then the IFD chain.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;
const TYPE_UNDEFINED: u16 = 7;

pub struct IfdEntry {
    tag: u16,
    kind: u16,
    count: u32,
    value: [u8; 4],
}

pub fn short(tag: u16, value: u16) -> IfdEntry {
    IfdEntry {
        tag,
        kind: TYPE_SHORT,
        count: 1,
        value: (value as u32).to_le_bytes(),
    }
}

pub fn long(tag: u16, value: u32) -> IfdEntry {
    IfdEntry {
        tag,
        kind: TYPE_LONG,
        count: 1,
        value: value.to_le_bytes(),
    }
}

pub fn undefined(tag: u16, value: [u8; 4]) -> IfdEntry {
    IfdEntry {
        tag,
        kind: TYPE_UNDEFINED,
        count: 4,
        value,
    }
}

/// Entries of a minimal valid single-strip 1x1 grayscale image.
pub fn baseline_ifd() -> Vec<IfdEntry> {
    vec![
        short(256, 1),  // ImageWidth
        short(257, 1),  // ImageLength
        short(258, 8),  // BitsPerSample
        short(259, 1),  // Compression: none
        short(262, 1),  // PhotometricInterpretation: BlackIsZero
        long(273, 8),   // StripOffsets: the single pixel byte
        short(277, 1),  // SamplesPerPixel
        short(278, 1),  // RowsPerStrip
        long(279, 1),   // StripByteCounts
    ]
}

/// Assembles a classic little-endian TIFF from the given directories.
pub fn build_tiff(directories: Vec<Vec<IfdEntry>>) -> Vec<u8> {
    assert!(!directories.is_empty(), "a TIFF needs at least one IFD");

    let mut out = Vec::new();
    out.extend_from_slice(b"II");
    out.extend_from_slice(&42u16.to_le_bytes());

    // First IFD follows the header, the pixel byte and one pad byte.
    let mut ifd_offset: u32 = 10;
    out.extend_from_slice(&ifd_offset.to_le_bytes());
    out.push(0x00); // pixel data, offset 8
    out.push(0x00); // pad so the IFD starts on a word boundary

    let last = directories.len() - 1;
    for (index, mut entries) in directories.into_iter().enumerate() {
        // Entries must be sorted by tag ID.
        entries.sort_by_key(|entry| entry.tag);

        let size = 2 + 12 * entries.len() as u32 + 4;
        let next = if index == last { 0 } else { ifd_offset + size };

        out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
        for entry in &entries {
            out.extend_from_slice(&entry.tag.to_le_bytes());
            out.extend_from_slice(&entry.kind.to_le_bytes());
            out.extend_from_slice(&entry.count.to_le_bytes());
            out.extend_from_slice(&entry.value);
        }
        out.extend_from_slice(&next.to_le_bytes());
        ifd_offset = next;
    }

    out
}

/// A flattened, uncompressed TIFF the importer accepts.
pub fn minimal_tiff() -> Vec<u8> {
    build_tiff(vec![baseline_ifd()])
}

/// A TIFF carrying an `ImageSourceData` block, as Photoshop writes when the
/// layer stack is kept.
pub fn layered_tiff() -> Vec<u8> {
    let mut ifd = baseline_ifd();
    ifd.push(undefined(37724, *b"Adob"));
    build_tiff(vec![ifd])
}

/// A TIFF with a horizontal-differencing `Predictor` tag.
pub fn predictor_tiff() -> Vec<u8> {
    let mut ifd = baseline_ifd();
    ifd.push(short(317, 2));
    build_tiff(vec![ifd])
}

/// Writes `bytes` under `dir` and returns the full path.
pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("write fixture");
    path
}
