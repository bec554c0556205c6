//! Fujifilm maker note tag walking
//!
//! A Fujifilm maker note is a little-endian TIFF-style IFD preceded by a
//! 12-byte header:
//!
//! ```text
//! 0..8    "FUJIFILM"
//! 8..12   u32 offset of the IFD, relative to the start of the block
//! IFD     u16 entry count, then 12-byte entries:
//!         u16 tag, u16 field type, u32 component count, 4-byte value or offset
//! ```
//!
//! Payloads of four bytes or fewer are stored inline in the entry; longer
//! payloads live at an offset that is also relative to the start of the block.

use byteorder::{ByteOrder, LittleEndian};
use log::trace;

use crate::error::{FilmsimError, Result};

use super::tags::{
    component_size, tag_name, IFD_ENTRY_LEN, MAKER_NOTE_SIGNATURE, TYPE_ASCII, TYPE_BYTE,
    TYPE_DOUBLE, TYPE_FLOAT, TYPE_LONG, TYPE_RATIONAL, TYPE_SBYTE, TYPE_SHORT, TYPE_SLONG,
    TYPE_SRATIONAL, TYPE_SSHORT, TYPE_UNDEFINED,
};

/// Walks the tags of a vendor maker note block
///
/// Implementations call `visit` once per tag carrying numeric values, in
/// whatever order the tags are found, and never after `walk` returns.
/// A block that is structurally invalid must be reported as an error.
pub trait TagWalker {
    type Error;

    fn walk(
        &self,
        bytes: &[u8],
        visit: &mut dyn FnMut(u16, &[i64]),
    ) -> std::result::Result<(), Self::Error>;
}

/// Tag walker for Fujifilm maker notes
#[derive(Debug, Clone, Copy, Default)]
pub struct FujifilmMakerNote;

impl TagWalker for FujifilmMakerNote {
    type Error = FilmsimError;

    fn walk(&self, bytes: &[u8], visit: &mut dyn FnMut(u16, &[i64])) -> Result<()> {
        if bytes.len() < MAKER_NOTE_SIGNATURE.len()
            || &bytes[..MAKER_NOTE_SIGNATURE.len()] != MAKER_NOTE_SIGNATURE
        {
            return Err(FilmsimError::InvalidSignature);
        }

        let ifd_offset =
            LittleEndian::read_u32(take(bytes, MAKER_NOTE_SIGNATURE.len(), 4)?) as usize;
        let entry_count = LittleEndian::read_u16(take(bytes, ifd_offset, 2)?) as usize;
        trace!(
            "Maker note: {} bytes, IFD at {:#x} with {} entries",
            bytes.len(),
            ifd_offset,
            entry_count
        );

        for index in 0..entry_count {
            let entry_offset = ifd_offset + 2 + index * IFD_ENTRY_LEN;
            let entry = take(bytes, entry_offset, IFD_ENTRY_LEN)?;

            let tag = LittleEndian::read_u16(&entry[0..2]);
            let field_type = LittleEndian::read_u16(&entry[2..4]);
            let count = LittleEndian::read_u32(&entry[4..8]) as usize;

            if matches!(field_type, TYPE_ASCII | TYPE_FLOAT | TYPE_DOUBLE) || count == 0 {
                trace!("Skipping non-integer tag {:#06x} (type {})", tag, field_type);
                continue;
            }
            let Some(size) = component_size(field_type) else {
                trace!("Skipping tag {:#06x} with unknown type {}", tag, field_type);
                continue;
            };

            let total = count
                .checked_mul(size)
                .ok_or_else(|| FilmsimError::InvalidEntry {
                    tag,
                    reason: format!("{} components of {} bytes overflow", count, size),
                })?;

            let payload = if total <= 4 {
                &entry[8..8 + total]
            } else {
                let offset = LittleEndian::read_u32(&entry[8..12]) as usize;
                take(bytes, offset, total)?
            };

            let values = decode_values(field_type, payload);
            trace!(
                "Tag {:#06x} ({}): {:?}",
                tag,
                tag_name(tag).unwrap_or("unknown"),
                values
            );
            visit(tag, &values);
        }

        Ok(())
    }
}

/// A tag reported by a [`TagWalker`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct MakerNoteTag {
    pub tag: u16,
    pub values: Vec<i64>,
}

impl MakerNoteTag {
    /// Returns the tag name, if known
    pub fn name(&self) -> Option<&'static str> {
        tag_name(self.tag)
    }
}

/// Collects every tag reported by a walker, in walk order
pub fn collect_tags<W: TagWalker>(
    walker: &W,
    bytes: &[u8],
) -> std::result::Result<Vec<MakerNoteTag>, W::Error> {
    let mut tags = Vec::new();
    walker.walk(bytes, &mut |tag, values| {
        tags.push(MakerNoteTag {
            tag,
            values: values.to_vec(),
        })
    })?;
    Ok(tags)
}

/// Returns `len` bytes starting at `offset`, or a truncation error
fn take(bytes: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    offset
        .checked_add(len)
        .and_then(|end| bytes.get(offset..end))
        .ok_or(FilmsimError::Truncated {
            offset,
            needed: len,
            len: bytes.len(),
        })
}

/// Decodes an integer payload; rationals yield numerator, denominator pairs
fn decode_values(field_type: u16, payload: &[u8]) -> Vec<i64> {
    match field_type {
        TYPE_BYTE | TYPE_UNDEFINED => payload.iter().map(|&b| i64::from(b)).collect(),
        TYPE_SBYTE => payload.iter().map(|&b| i64::from(b as i8)).collect(),
        TYPE_SHORT => payload
            .chunks_exact(2)
            .map(|c| i64::from(LittleEndian::read_u16(c)))
            .collect(),
        TYPE_SSHORT => payload
            .chunks_exact(2)
            .map(|c| i64::from(LittleEndian::read_i16(c)))
            .collect(),
        TYPE_LONG | TYPE_RATIONAL => payload
            .chunks_exact(4)
            .map(|c| i64::from(LittleEndian::read_u32(c)))
            .collect(),
        TYPE_SLONG | TYPE_SRATIONAL => payload
            .chunks_exact(4)
            .map(|c| i64::from(LittleEndian::read_i32(c)))
            .collect(),
        _ => Vec::new(),
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::MakerNoteBuilder;
    use super::*;
    use crate::extraction::tags::{
        FILM_MODE, MAKER_NOTE_HEADER_LEN, SATURATION, SHARPNESS, TYPE_ASCII, TYPE_BYTE,
        TYPE_RATIONAL, TYPE_SSHORT,
    };

    #[test]
    fn test_walk_inline_short() {
        let note = MakerNoteBuilder::new()
            .short(SATURATION, &[0x500])
            .short(FILM_MODE, &[0x600])
            .build();

        let tags = collect_tags(&FujifilmMakerNote, &note).unwrap();
        assert_eq!(
            tags,
            vec![
                MakerNoteTag {
                    tag: SATURATION,
                    values: vec![0x500]
                },
                MakerNoteTag {
                    tag: FILM_MODE,
                    values: vec![0x600]
                },
            ]
        );
        assert_eq!(tags[0].name(), Some("Saturation"));
    }

    #[test]
    fn test_walk_out_of_line_shorts() {
        let note = MakerNoteBuilder::new()
            .short(SHARPNESS, &[3])
            .short(FILM_MODE, &[0x800, 0x1, 0x2])
            .build();

        let tags = collect_tags(&FujifilmMakerNote, &note).unwrap();
        assert_eq!(tags[1].values, vec![0x800, 0x1, 0x2]);
    }

    #[test]
    fn test_walk_signed_and_rational() {
        let rational: Vec<u8> = [1u32, 3u32].iter().flat_map(|v| v.to_le_bytes()).collect();
        let note = MakerNoteBuilder::new()
            .entry(0x1050, TYPE_SSHORT, 1, (-2i16).to_le_bytes().to_vec())
            .entry(0x1051, TYPE_RATIONAL, 1, rational)
            .entry(0x1052, TYPE_BYTE, 3, vec![7, 8, 9])
            .build();

        let tags = collect_tags(&FujifilmMakerNote, &note).unwrap();
        assert_eq!(tags[0].values, vec![-2]);
        assert_eq!(tags[1].values, vec![1, 3]);
        assert_eq!(tags[2].values, vec![7, 8, 9]);
    }

    #[test]
    fn test_walk_skips_ascii() {
        let note = MakerNoteBuilder::new()
            .entry(0x0010, TYPE_ASCII, 8, b"X-T5\0\0\0\0".to_vec())
            .short(FILM_MODE, &[0x700])
            .build();

        let tags = collect_tags(&FujifilmMakerNote, &note).unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].tag, FILM_MODE);
    }

    #[test]
    fn test_walk_empty_ifd() {
        let note = MakerNoteBuilder::new().build();
        assert!(collect_tags(&FujifilmMakerNote, &note).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_missing_signature() {
        let result = collect_tags(&FujifilmMakerNote, b"NIKON\0\x02\x10\0\0");
        assert!(matches!(result, Err(FilmsimError::InvalidSignature)));

        let result = collect_tags(&FujifilmMakerNote, b"");
        assert!(matches!(result, Err(FilmsimError::InvalidSignature)));
    }

    #[test]
    fn test_rejects_truncated_header() {
        let result = collect_tags(&FujifilmMakerNote, b"FUJIFILM\x0c\0");
        assert!(matches!(
            result,
            Err(FilmsimError::Truncated {
                offset: 8,
                needed: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_truncated_ifd() {
        let mut note = MakerNoteBuilder::new()
            .short(SATURATION, &[0x300])
            .short(FILM_MODE, &[0x000])
            .build();
        // Cut the second entry in half
        note.truncate(MAKER_NOTE_HEADER_LEN + 2 + IFD_ENTRY_LEN + 6);

        let result = collect_tags(&FujifilmMakerNote, &note);
        assert!(matches!(result, Err(FilmsimError::Truncated { .. })));
    }

    #[test]
    fn test_rejects_payload_past_end() {
        let mut note = MakerNoteBuilder::new()
            .short(FILM_MODE, &[0x800, 0x800, 0x800])
            .build();
        note.truncate(note.len() - 2);

        let result = collect_tags(&FujifilmMakerNote, &note);
        assert!(matches!(result, Err(FilmsimError::Truncated { needed: 6, .. })));
    }
}
