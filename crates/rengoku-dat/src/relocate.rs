//! Block relocation and in-place rewriting.
//!
//! This is the only code that mutates pointer and counter metadata. A save
//! serializes an edited table into a contiguous block, then either appends it
//! at an aligned end-of-file offset (patching the pointer field that
//! references the block) or overwrites the original fixed-capacity region.
//! Relocate-to-end is the right policy whenever the serialized size can vary:
//! the original regions carry no growth slack, so growing in place would
//! trample whatever follows.

use rengoku_common::patch::{extend_zeros, pad_to_alignment, write_bytes_at, write_u16_at, write_u32_at};
use rengoku_common::BinaryReader;

use crate::{Error, Result};

/// Where an edited block is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Append at an aligned end-of-file offset and patch the pointer field.
    RelocateToEnd,
    /// Overwrite the original region; fails if the block outgrows it.
    OverwriteInPlace,
}

/// Description of one relocatable block: which pointer field references it
/// and the write-policy constants that govern it.
#[derive(Debug, Clone, Copy)]
pub struct BlockSpec {
    /// Absolute offset of the u32 pointer field referencing the block.
    pub pointer_offset: usize,
    /// End-of-file alignment for relocated writes.
    pub alignment: usize,
    /// Zero bytes appended after a relocated block.
    pub trailing_padding: usize,
    /// Fixed capacity of the original region, for in-place writes.
    pub capacity: Option<usize>,
}

/// Where a written block ended up, and how much padding surrounds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelocationPlan {
    /// Absolute offset of the written block.
    pub block_offset: usize,
    /// Zero bytes inserted before the block to reach the alignment boundary.
    pub alignment_padding: usize,
    /// Zero bytes appended after the block.
    pub trailing_padding: usize,
}

/// Write `block` into `buf` under `policy` and patch the pointer field.
///
/// The buffer is only mutated once the write is known to succeed; on error it
/// is returned untouched.
pub fn write_block(
    buf: &mut Vec<u8>,
    spec: &BlockSpec,
    block: &[u8],
    policy: WritePolicy,
) -> Result<RelocationPlan> {
    if spec.pointer_offset + 4 > buf.len() {
        return Err(Error::Truncated {
            offset: spec.pointer_offset,
            needed: 4,
            len: buf.len(),
        });
    }

    match policy {
        WritePolicy::RelocateToEnd => {
            let alignment_padding = pad_to_alignment(buf, spec.alignment);
            let block_offset = buf.len();
            buf.extend_from_slice(block);
            extend_zeros(buf, spec.trailing_padding);
            write_u32_at(buf, spec.pointer_offset, block_offset as u32)?;
            Ok(RelocationPlan {
                block_offset,
                alignment_padding,
                trailing_padding: spec.trailing_padding,
            })
        }
        WritePolicy::OverwriteInPlace => {
            // Regions that admit in-place writes declare their fixed capacity;
            // without one the block must exactly fill its original footprint.
            let capacity = spec.capacity.unwrap_or(block.len());
            if block.len() > capacity {
                return Err(Error::BlockTooLarge {
                    size: block.len(),
                    capacity,
                });
            }

            let reader = BinaryReader::new(buf);
            let block_offset = reader.read_u32_at(spec.pointer_offset)? as usize;
            if block_offset + capacity > buf.len() {
                return Err(Error::Truncated {
                    offset: block_offset,
                    needed: capacity,
                    len: buf.len(),
                });
            }

            write_bytes_at(buf, block_offset, block)?;
            // Zero the slack up to the region's fixed capacity.
            buf[block_offset + block.len()..block_offset + capacity].fill(0);
            Ok(RelocationPlan {
                block_offset,
                alignment_padding: 0,
                trailing_padding: 0,
            })
        }
    }
}

/// Patch a u16 counter field at `base + index * 2`, clamped to the field's
/// representable range.
pub fn patch_counter_u16(buf: &mut [u8], base: usize, index: usize, value: usize) -> Result<()> {
    let clamped = value.min(u16::MAX as usize) as u16;
    write_u16_at(buf, base + index * 2, clamped)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: BlockSpec = BlockSpec {
        pointer_offset: 0x10,
        alignment: 0x10,
        trailing_padding: 0,
        capacity: None,
    };

    #[test]
    fn test_relocate_alignment() {
        let mut buf = vec![0xAAu8; 0x123];
        let block = [0xBBu8; 0x20];
        let plan = write_block(&mut buf, &SPEC, &block, WritePolicy::RelocateToEnd).unwrap();

        assert_eq!(plan.block_offset, 0x130);
        assert_eq!(plan.alignment_padding, 0x0D);
        // Gap between the old end and the block is zeroed.
        assert!(buf[0x123..0x130].iter().all(|&b| b == 0));
        assert_eq!(&buf[0x130..0x150], &block);
        // Pointer field references the new block.
        assert_eq!(
            &buf[0x10..0x14],
            &0x130u32.to_le_bytes(),
        );
    }

    #[test]
    fn test_relocate_trailing_padding() {
        let mut buf = vec![0u8; 0x40];
        let spec = BlockSpec {
            trailing_padding: 0x400,
            ..SPEC
        };
        let plan = write_block(&mut buf, &spec, &[1, 2, 3, 4], WritePolicy::RelocateToEnd).unwrap();
        assert_eq!(plan.block_offset, 0x40);
        assert_eq!(buf.len(), 0x40 + 4 + 0x400);
        assert!(buf[0x44..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_in_place_zero_fills_slack() {
        let mut buf = vec![0xCCu8; 0x100];
        // Pointer at 0x10 references a 0x40-byte region at 0x80.
        buf[0x10..0x14].copy_from_slice(&0x80u32.to_le_bytes());
        let spec = BlockSpec {
            capacity: Some(0x40),
            ..SPEC
        };
        let plan =
            write_block(&mut buf, &spec, &[0xEE; 0x10], WritePolicy::OverwriteInPlace).unwrap();

        assert_eq!(plan.block_offset, 0x80);
        assert!(buf[0x80..0x90].iter().all(|&b| b == 0xEE));
        assert!(buf[0x90..0xC0].iter().all(|&b| b == 0));
        // Bytes outside the region are untouched.
        assert!(buf[0xC0..].iter().all(|&b| b == 0xCC));
        assert_eq!(buf.len(), 0x100);
    }

    #[test]
    fn test_in_place_too_large_leaves_buffer_untouched() {
        let mut buf = vec![0xCCu8; 0x100];
        buf[0x10..0x14].copy_from_slice(&0x80u32.to_le_bytes());
        let before = buf.clone();
        let spec = BlockSpec {
            capacity: Some(0x40),
            ..SPEC
        };
        match write_block(&mut buf, &spec, &[0u8; 0x41], WritePolicy::OverwriteInPlace) {
            Err(Error::BlockTooLarge { size, capacity }) => {
                assert_eq!(size, 0x41);
                assert_eq!(capacity, 0x40);
            }
            other => panic!("expected BlockTooLarge, got {:?}", other),
        }
        assert_eq!(buf, before);
    }

    #[test]
    fn test_counter_clamps() {
        let mut buf = vec![0u8; 0x20];
        patch_counter_u16(&mut buf, 0x08, 2, 70_000).unwrap();
        assert_eq!(&buf[0x0C..0x0E], &0xFFFFu16.to_le_bytes());
        patch_counter_u16(&mut buf, 0x08, 4, 42).unwrap();
        assert_eq!(&buf[0x10..0x12], &42u16.to_le_bytes());
    }
}
