//! mhfdat.bin file handling.

use std::fs;
use std::path::Path;

use rengoku_common::patch::write_bytes_at;
use rengoku_common::BinaryReader;

use crate::layout::{DatLayout, DAT_LAYOUT};
use crate::records::{CatShopEntry, DataCounters, MedalShopEntry, MonsterPoints};
use crate::relocate::{patch_counter_u16, write_block, BlockSpec, RelocationPlan, WritePolicy};
use crate::sentinel::{build_run, cat_shop_item_count, medal_shop_item_count, read_run};
use crate::signature::validate_signature;
use crate::{Error, Result};

/// A parsed mhfdat.bin.
///
/// Holds the original file bytes as the save template plus owned, editable
/// record collections. Editing happens on the collections; a save clones the
/// template, serializes the collections back through the relocation writer,
/// and returns or writes the new buffer. The template itself is never
/// mutated, so the input file and output file can always differ.
#[derive(Debug, Clone)]
pub struct DatFile {
    buffer: Vec<u8>,
    layout: DatLayout,
    monster_points: Vec<MonsterPoints>,
    counters: Option<DataCounters>,
    cat_shop: Vec<CatShopEntry>,
    medal_shop: Vec<MedalShopEntry>,
    monster_ptr: u32,
}

impl DatFile {
    /// Read and parse an mhfdat file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::parse(fs::read(path)?)
    }

    /// Parse mhfdat data from bytes, using the standard layout.
    pub fn parse(data: Vec<u8>) -> Result<Self> {
        Self::parse_with_layout(data, DAT_LAYOUT)
    }

    /// Parse mhfdat data against a caller-supplied layout table.
    pub fn parse_with_layout(data: Vec<u8>, layout: DatLayout) -> Result<Self> {
        validate_signature(&data, &layout)?;

        let monster_ptr = read_pointer(&data, layout.monster_ptr)?;
        let counters_ptr = read_pointer(&data, layout.counters_ptr)?;
        let cat_ptr = read_pointer(&data, layout.cat_shop_ptr)?;
        let medal_ptr = read_pointer(&data, layout.medal_shop_ptr)?;

        let monster_points = read_monster_points(&data, monster_ptr, layout.monster_capacity);

        // A zero or out-of-range counters pointer is tolerated at parse time;
        // saves that need the block fail with MissingCounters instead.
        let counters_ptr = counters_ptr as usize;
        let counters = if counters_ptr != 0 && counters_ptr + DataCounters::SIZE <= data.len() {
            let mut reader = BinaryReader::new_at(&data, counters_ptr);
            Some(DataCounters::read(&mut reader)?)
        } else {
            None
        };

        let cat_shop = read_run(&data, cat_ptr)?;
        let medal_shop = read_run(&data, medal_ptr)?;

        Ok(Self {
            buffer: data,
            layout,
            monster_points,
            counters,
            cat_shop,
            medal_shop,
            monster_ptr,
        })
    }

    /// Get the template bytes this file was parsed from.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Get the layout table in effect.
    pub fn layout(&self) -> &DatLayout {
        &self.layout
    }

    /// Get the original monster-points table pointer.
    pub fn monster_ptr(&self) -> u32 {
        self.monster_ptr
    }

    /// Get the monster-points rows.
    pub fn monster_points(&self) -> &[MonsterPoints] {
        &self.monster_points
    }

    /// Get mutable access to the monster-points rows.
    pub fn monster_points_mut(&mut self) -> &mut Vec<MonsterPoints> {
        &mut self.monster_points
    }

    /// Get the counters block, if the file had a usable pointer to one.
    pub fn counters(&self) -> Option<&DataCounters> {
        self.counters.as_ref()
    }

    /// Get mutable access to the counters block.
    pub fn counters_mut(&mut self) -> Option<&mut DataCounters> {
        self.counters.as_mut()
    }

    /// Get the cat-shop rows.
    pub fn cat_shop(&self) -> &[CatShopEntry] {
        &self.cat_shop
    }

    /// Get mutable access to the cat-shop rows.
    pub fn cat_shop_mut(&mut self) -> &mut Vec<CatShopEntry> {
        &mut self.cat_shop
    }

    /// Get the medal-shop rows.
    pub fn medal_shop(&self) -> &[MedalShopEntry] {
        &self.medal_shop
    }

    /// Get mutable access to the medal-shop rows.
    pub fn medal_shop_mut(&mut self) -> &mut Vec<MedalShopEntry> {
        &mut self.medal_shop
    }

    /// Serialize the monster-points rows into a block padded to the
    /// relocation alignment.
    fn monster_block(&self) -> Vec<u8> {
        let mut block = Vec::with_capacity(self.monster_points.len() * MonsterPoints::SIZE);
        for row in &self.monster_points {
            block.extend_from_slice(&row.to_bytes());
        }
        let padded = rengoku_common::patch::align_up(block.len(), self.layout.monster_align);
        block.resize(padded, 0);
        block
    }

    /// Write the monster-points table and the counters block into `buf`.
    ///
    /// `RelocateToEnd` appends the block at an aligned EOF offset and patches
    /// the table pointer; `OverwriteInPlace` rewrites the original region and
    /// fails with [`Error::BlockTooLarge`] if the rows no longer fit its
    /// fixed capacity. The counters block (road entries and friends) is
    /// always written back at its recorded offset.
    pub fn write_monster_points(
        &self,
        buf: &mut Vec<u8>,
        policy: WritePolicy,
    ) -> Result<RelocationPlan> {
        let counters = self.counters.ok_or(Error::MissingCounters)?;
        let spec = BlockSpec {
            pointer_offset: self.layout.monster_ptr,
            alignment: self.layout.monster_align,
            trailing_padding: self.layout.end_padding,
            capacity: Some(self.layout.monster_capacity),
        };
        let plan = write_block(buf, &spec, &self.monster_block(), policy)?;
        write_bytes_at(buf, counters.offset, &counters.to_bytes())?;
        Ok(plan)
    }

    /// Write the cat-shop run into `buf`.
    ///
    /// The run is always relocated (its size varies with edits), the pointer
    /// field is patched, and the item counter inside DataCounters is set to
    /// the derived non-zero-id count, clamped to u16.
    pub fn write_cat_shop(&self, buf: &mut Vec<u8>) -> Result<RelocationPlan> {
        let counters = self.counters.ok_or(Error::MissingCounters)?;
        let spec = BlockSpec {
            pointer_offset: self.layout.cat_shop_ptr,
            alignment: self.layout.cat_shop_align,
            trailing_padding: self.layout.end_padding,
            capacity: None,
        };
        let plan = write_block(buf, &spec, &build_run(&self.cat_shop), WritePolicy::RelocateToEnd)?;
        patch_counter_u16(
            buf,
            counters.offset,
            self.layout.cat_counter_index,
            cat_shop_item_count(&self.cat_shop),
        )?;
        Ok(plan)
    }

    /// Write the medal-shop run into `buf`.
    ///
    /// The entry counter lives in a separate block found through the extra
    /// counters pointer; a zero or unreadable pointer there fails the save
    /// with [`Error::MissingCounters`].
    pub fn write_medal_shop(&self, buf: &mut Vec<u8>) -> Result<RelocationPlan> {
        let spec = BlockSpec {
            pointer_offset: self.layout.medal_shop_ptr,
            alignment: self.layout.medal_shop_align,
            trailing_padding: self.layout.end_padding,
            capacity: None,
        };
        let plan = write_block(
            buf,
            &spec,
            &build_run(&self.medal_shop),
            WritePolicy::RelocateToEnd,
        )?;

        let reader = BinaryReader::new(buf);
        let extra_ptr = reader
            .read_u32_at(self.layout.extra_counters_ptr)
            .map_err(|_| Error::MissingCounters)? as usize;
        if extra_ptr == 0 {
            return Err(Error::MissingCounters);
        }
        patch_counter_u16(
            buf,
            extra_ptr,
            self.layout.medal_counter_index,
            medal_shop_item_count(&self.medal_shop),
        )?;
        Ok(plan)
    }

    /// Build the complete output file: template copy plus every edited
    /// section written back through the relocation engine.
    ///
    /// `policy` selects how the monster-points block is placed; the shop runs
    /// always relocate. Nothing is written to disk here, so a failed section
    /// leaves no partial file behind.
    pub fn to_bytes(&self, policy: WritePolicy) -> Result<Vec<u8>> {
        let mut buf = self.buffer.clone();
        self.write_monster_points(&mut buf, policy)?;
        self.write_cat_shop(&mut buf)?;
        self.write_medal_shop(&mut buf)?;
        Ok(buf)
    }

    /// Build the output in memory and write it to `path` in one step.
    ///
    /// The template is never overwritten implicitly; writing back to the
    /// input path is the caller's explicit choice.
    pub fn save<P: AsRef<Path>>(&self, path: P, policy: WritePolicy) -> Result<()> {
        let bytes = self.to_bytes(policy)?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

/// Read a u32 pointer field, reporting a truncated file on failure.
fn read_pointer(data: &[u8], offset: usize) -> Result<u32> {
    BinaryReader::new(data)
        .read_u32_at(offset)
        .map_err(|_| Error::Truncated {
            offset,
            needed: 4,
            len: data.len(),
        })
}

/// Walk the monster-points region, stopping at the first terminator row or
/// the end of the fixed-capacity region.
fn read_monster_points(data: &[u8], start: u32, capacity: usize) -> Vec<MonsterPoints> {
    let start = start as usize;
    if start == 0 || start >= data.len() {
        return Vec::new();
    }

    let end = start.saturating_add(capacity).min(data.len());
    let mut reader = BinaryReader::new_at(data, start);
    let mut rows = Vec::new();
    while reader.position() + MonsterPoints::SIZE <= end {
        // Reads inside the bounds-checked window cannot fail.
        let Ok(row) = MonsterPoints::read(&mut reader) else {
            break;
        };
        if row.is_terminator() {
            break;
        }
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_monster_points_stops_at_terminator() {
        let mut data = vec![0u8; 0x40];
        let rows = [
            MonsterPoints {
                monster_id: 11,
                monster_flag: 0,
                base_points: 100,
                level1_points: 0,
                level2_points: 0,
                level3_points: 0,
                level4_points: 0,
                level5_points: 0,
                offset: None,
            },
            MonsterPoints {
                monster_id: 200, // out of range, terminates
                monster_flag: 0,
                base_points: 0,
                level1_points: 0,
                level2_points: 0,
                level3_points: 0,
                level4_points: 0,
                level5_points: 0,
                offset: None,
            },
        ];
        for (i, row) in rows.iter().enumerate() {
            data[0x10 + i * 16..0x10 + (i + 1) * 16].copy_from_slice(&row.to_bytes());
        }

        let parsed = read_monster_points(&data, 0x10, 0x1000);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].monster_id, 11);
        assert_eq!(parsed[0].offset, Some(0x10));
    }

    #[test]
    fn test_read_monster_points_zero_pointer() {
        let data = vec![0u8; 0x40];
        assert!(read_monster_points(&data, 0, 0x1000).is_empty());
    }
}
