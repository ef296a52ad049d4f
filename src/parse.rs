use std::io::{Read, Seek};

use tiff::decoder::{Decoder, Limits};
use tiff::tags::Tag;
use tiff::TiffError;

use crate::tags::KNOWN_TAGS;

/// Read-only view of a parsed TIFF: the directory chain with, per
/// directory, the well-known fields present in it.
///
/// Built once per checked file and discarded after the verdict; never shared
/// across files. Byte-order handling and IFD traversal happen inside the
/// `tiff` crate.
#[derive(Debug, Clone)]
pub struct ParsedTiff {
    pub directories: Vec<TagDirectory>,
}

/// One IFD's worth of recognized fields, in enumeration order.
#[derive(Debug, Clone)]
pub struct TagDirectory {
    pub fields: Vec<TagField>,
}

/// A single tagged field: numeric ID plus canonical name. Value payloads
/// are out of scope for the compatibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagField {
    pub id: u16,
    pub name: &'static str,
}

impl ParsedTiff {
    /// Parses the directory chain out of a random-access byte source.
    ///
    /// Each directory is enumerated by probing every tag in the registry,
    /// so fields come back in registry order; callers must not rely on any
    /// particular ordering. Decoder limits are lifted: an `ImageSourceData`
    /// payload routinely exceeds the default value-size limit.
    pub fn from_reader<R: Read + Seek>(source: R) -> Result<Self, TiffError> {
        let mut decoder = Decoder::new(source)?.with_limits(Limits::unlimited());

        let mut directories = Vec::new();
        loop {
            directories.push(read_directory(&mut decoder)?);
            if !decoder.more_images() {
                break;
            }
            decoder.next_image()?;
        }

        Ok(Self { directories })
    }
}

fn read_directory<R: Read + Seek>(decoder: &mut Decoder<R>) -> Result<TagDirectory, TiffError> {
    let mut fields = Vec::new();
    for &(id, name) in KNOWN_TAGS {
        if decoder.find_tag(Tag::from_u16_exhaustive(id))?.is_some() {
            fields.push(TagField { id, name });
        }
    }
    Ok(TagDirectory { fields })
}
