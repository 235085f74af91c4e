//! Fixed-width record codecs for rengoku_data.bin.
//!
//! Road records never move or resize, so every record keeps the absolute
//! offset it was read from and is written back to exactly that span.

use rengoku_common::{BinaryReader, Result};

/// One road-mode header: 24 bytes, six u32 fields.
///
/// Carries the counts and absolute pointers for one edition mode's floor
/// stats and spawn tables. Two of these exist per file (multi and solo) at
/// fixed offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadModeHeader {
    pub floor_stats_count: u32,
    pub spawn_count_count: u32,
    pub spawn_table_pointers_count: u32,
    pub floor_stats_pointer: u32,
    pub spawn_table_pointers: u32,
    pub spawn_count_pointers: u32,
    /// Absolute file offset of the header itself.
    pub offset: usize,
}

impl RoadModeHeader {
    /// Byte width of the header.
    pub const SIZE: usize = 24;

    /// Read the header at the reader's current position.
    pub fn read(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let offset = reader.position();
        Ok(Self {
            floor_stats_count: reader.read_u32()?,
            spawn_count_count: reader.read_u32()?,
            spawn_table_pointers_count: reader.read_u32()?,
            floor_stats_pointer: reader.read_u32()?,
            spawn_table_pointers: reader.read_u32()?,
            spawn_count_pointers: reader.read_u32()?,
            offset,
        })
    }

    /// Encode to the fixed 24-byte representation.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        for (i, field) in [
            self.floor_stats_count,
            self.spawn_count_count,
            self.spawn_table_pointers_count,
            self.floor_stats_pointer,
            self.spawn_table_pointers,
            self.spawn_count_pointers,
        ]
        .into_iter()
        .enumerate()
        {
            out[i * 4..i * 4 + 4].copy_from_slice(&field.to_le_bytes());
        }
        out
    }
}

/// One spawn-table row: 32 bytes, eight u32 fields.
///
/// The monster-id fields index the external monster name table; the codec
/// stores them as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnEntry {
    pub first_monster_id: u32,
    pub first_monster_variant: u32,
    pub second_monster_id: u32,
    pub second_monster_variant: u32,
    pub monster_stat_table: u32,
    pub map_zone_override: u32,
    pub spawn_weighting: u32,
    pub additional_flag: u32,
    /// Absolute file offset this row is written back to.
    pub offset: usize,
}

impl SpawnEntry {
    /// Byte width of one row.
    pub const SIZE: usize = 32;

    /// Read one row at the reader's current position.
    pub fn read(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let offset = reader.position();
        Ok(Self {
            first_monster_id: reader.read_u32()?,
            first_monster_variant: reader.read_u32()?,
            second_monster_id: reader.read_u32()?,
            second_monster_variant: reader.read_u32()?,
            monster_stat_table: reader.read_u32()?,
            map_zone_override: reader.read_u32()?,
            spawn_weighting: reader.read_u32()?,
            additional_flag: reader.read_u32()?,
            offset,
        })
    }

    /// Encode to the fixed 32-byte representation.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        for (i, field) in [
            self.first_monster_id,
            self.first_monster_variant,
            self.second_monster_id,
            self.second_monster_variant,
            self.monster_stat_table,
            self.map_zone_override,
            self.spawn_weighting,
            self.additional_flag,
        ]
        .into_iter()
        .enumerate()
        {
            out[i * 4..i * 4 + 4].copy_from_slice(&field.to_le_bytes());
        }
        out
    }
}

/// One floor-stats row: 24 bytes, four u32 fields around two f32 point
/// multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorStats {
    pub floor_number: u32,
    pub spawn_table_used: u32,
    pub unk0: u32,
    pub point_multi1: f32,
    pub point_multi2: f32,
    pub final_loop: u32,
    /// Absolute file offset this row is written back to.
    pub offset: usize,
}

impl FloorStats {
    /// Byte width of one row.
    pub const SIZE: usize = 24;

    /// Read one row at the reader's current position.
    pub fn read(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let offset = reader.position();
        Ok(Self {
            floor_number: reader.read_u32()?,
            spawn_table_used: reader.read_u32()?,
            unk0: reader.read_u32()?,
            point_multi1: reader.read_f32()?,
            point_multi2: reader.read_f32()?,
            final_loop: reader.read_u32()?,
            offset,
        })
    }

    /// Encode to the fixed 24-byte representation.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..4].copy_from_slice(&self.floor_number.to_le_bytes());
        out[4..8].copy_from_slice(&self.spawn_table_used.to_le_bytes());
        out[8..12].copy_from_slice(&self.unk0.to_le_bytes());
        out[12..16].copy_from_slice(&self.point_multi1.to_le_bytes());
        out[16..20].copy_from_slice(&self.point_multi2.to_le_bytes());
        out[20..24].copy_from_slice(&self.final_loop.to_le_bytes());
        out
    }
}
