//! Fixed-width record codecs for mhfdat.bin.
//!
//! Each record type carries its byte width as a constant, decodes with a
//! [`BinaryReader`], and encodes back to exactly that width. Decoding never
//! validates field values, only buffer length; identifier fields stay plain
//! integers (name translation is a display-layer concern).

use rengoku_common::{BinaryReader, Result};

/// Highest monster id the points table accepts; rows beyond it terminate the
/// table walk.
pub const MAX_MONSTER_ID: u16 = rengoku_common::monsters::MAX_MONSTER_ID;

/// One row of the monster-points table: 16 bytes, eight u16 fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterPoints {
    pub monster_id: u16,
    pub monster_flag: u16,
    pub base_points: u16,
    pub level1_points: u16,
    pub level2_points: u16,
    pub level3_points: u16,
    pub level4_points: u16,
    pub level5_points: u16,
    /// Absolute file offset this row was read from; `None` for rows created
    /// in memory. Informational only - the block is rebuilt on save.
    pub offset: Option<usize>,
}

impl MonsterPoints {
    /// Byte width of one row.
    pub const SIZE: usize = 16;

    /// Read one row at the reader's current position.
    pub fn read(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let offset = reader.position();
        Ok(Self {
            monster_id: reader.read_u16()?,
            monster_flag: reader.read_u16()?,
            base_points: reader.read_u16()?,
            level1_points: reader.read_u16()?,
            level2_points: reader.read_u16()?,
            level3_points: reader.read_u16()?,
            level4_points: reader.read_u16()?,
            level5_points: reader.read_u16()?,
            offset: Some(offset),
        })
    }

    /// Encode to the fixed 16-byte representation.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        for (i, field) in [
            self.monster_id,
            self.monster_flag,
            self.base_points,
            self.level1_points,
            self.level2_points,
            self.level3_points,
            self.level4_points,
            self.level5_points,
        ]
        .into_iter()
        .enumerate()
        {
            out[i * 2..i * 2 + 2].copy_from_slice(&field.to_le_bytes());
        }
        out
    }

    /// Whether this row terminates the table walk.
    pub fn is_terminator(&self) -> bool {
        self.monster_id == 0 || self.monster_id > MAX_MONSTER_ID
    }
}

/// The DataCounters block: 10 bytes, five u16 fields.
///
/// Index 2 is the cat-shop item counter, index 4 the road-entry counter; the
/// rest are unidentified but preserved through round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataCounters {
    pub unk1: u16,
    pub unk2: u16,
    pub cat_shop_items: u16,
    pub unk4: u16,
    pub road_entries: u16,
    /// Absolute file offset of the block (from the counters pointer).
    pub offset: usize,
}

impl DataCounters {
    /// Byte width of the block.
    pub const SIZE: usize = 10;

    /// Read the block at the reader's current position.
    pub fn read(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let offset = reader.position();
        Ok(Self {
            unk1: reader.read_u16()?,
            unk2: reader.read_u16()?,
            cat_shop_items: reader.read_u16()?,
            unk4: reader.read_u16()?,
            road_entries: reader.read_u16()?,
            offset,
        })
    }

    /// Encode to the fixed 10-byte representation.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        for (i, field) in [
            self.unk1,
            self.unk2,
            self.cat_shop_items,
            self.unk4,
            self.road_entries,
        ]
        .into_iter()
        .enumerate()
        {
            out[i * 2..i * 2 + 2].copy_from_slice(&field.to_le_bytes());
        }
        out
    }
}

/// One cat-shop row.
///
/// On disk this is 16 bytes: item_id (u16), liveness word (u32), pad (u16),
/// item_id2 (u16), second liveness word (u32), pad (u16). Only the two item
/// ids are meaningful; the liveness words and pads are normalized on encode,
/// so the in-memory record keeps just the ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatShopEntry {
    pub item_id: u16,
    pub item_id2: u16,
    /// Absolute file offset this row was read from; `None` for new rows.
    pub offset: Option<usize>,
}

impl CatShopEntry {
    /// Create a new in-memory row.
    pub fn new(item_id: u16, item_id2: u16) -> Self {
        Self {
            item_id,
            item_id2,
            offset: None,
        }
    }
}

/// One medal-shop row.
///
/// On disk this is 12 bytes: item (u16), random (u16), quantity (u8), three
/// zero-pad bytes, price (u16), trailing zero-pad u16. A zero item field is
/// the run terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedalShopEntry {
    pub item: u16,
    pub random: u16,
    pub quantity: u8,
    pub price: u16,
    /// Absolute file offset this row was read from; `None` for new rows.
    pub offset: Option<usize>,
}

impl MedalShopEntry {
    /// Create a new in-memory row.
    pub fn new(item: u16, random: u16, quantity: u8, price: u16) -> Self {
        Self {
            item,
            random,
            quantity,
            price,
            offset: None,
        }
    }
}
