//! Signature validation for mhfdat.bin.

use rengoku_common::BinaryReader;

use crate::layout::DatLayout;
use crate::{Error, Result};

/// Check the three signature words at their fixed offsets.
///
/// Must pass before any further parsing of the file. Pure check, no side
/// effects; the first mismatching word is reported with expected and actual
/// values.
pub fn validate_signature(data: &[u8], layout: &DatLayout) -> Result<()> {
    let reader = BinaryReader::new(data);
    for &(offset, expected) in &layout.signature {
        let actual = reader.read_u32_at(offset).map_err(|_| Error::Truncated {
            offset,
            needed: 4,
            len: data.len(),
        })?;
        if actual != expected {
            return Err(Error::FormatMismatch {
                offset,
                expected,
                actual,
            });
        }
    }
    Ok(())
}
