//! rengoku_data.bin file handling.

use std::fs;
use std::path::Path;

use rengoku_common::patch::write_bytes_at;
use rengoku_common::BinaryReader;

use crate::records::{FloorStats, RoadModeHeader, SpawnEntry};
use crate::{Error, Result};

/// Absolute offset of the multiplayer road-mode header.
pub const MULTI_HEADER_OFFSET: usize = 0x14;

/// Absolute offset of the solo road-mode header.
pub const SOLO_HEADER_OFFSET: usize = 0x2C;

/// One edition mode's tables: ordered spawn groups plus floor stats.
///
/// Group order selects which spawn pool a floor draws from, so it is
/// preserved exactly through edit and save. Counts are fixed at parse time -
/// the mutable accessors hand out slices, never growable vectors, because
/// every record is written back to the span it was read from.
#[derive(Debug, Clone)]
pub struct RoadMode {
    header: RoadModeHeader,
    spawn_tables: Vec<Vec<SpawnEntry>>,
    floor_stats: Vec<FloorStats>,
}

impl RoadMode {
    /// Get the mode header.
    pub fn header(&self) -> &RoadModeHeader {
        &self.header
    }

    /// Get the spawn groups in source order.
    pub fn spawn_tables(&self) -> &[Vec<SpawnEntry>] {
        &self.spawn_tables
    }

    /// Get mutable access to one spawn group's rows.
    pub fn spawn_table_mut(&mut self, group: usize) -> Option<&mut [SpawnEntry]> {
        self.spawn_tables.get_mut(group).map(|g| g.as_mut_slice())
    }

    /// Iterate over every spawn group's rows mutably.
    pub fn spawn_tables_mut(&mut self) -> impl Iterator<Item = &mut [SpawnEntry]> {
        self.spawn_tables.iter_mut().map(|g| g.as_mut_slice())
    }

    /// Get the floor-stats rows.
    pub fn floor_stats(&self) -> &[FloorStats] {
        &self.floor_stats
    }

    /// Get mutable access to the floor-stats rows.
    pub fn floor_stats_mut(&mut self) -> &mut [FloorStats] {
        &mut self.floor_stats
    }
}

/// A parsed rengoku_data.bin.
///
/// Holds the original bytes as the save template plus both edition modes.
/// Every table sits at a fixed position with a fixed element count, so a
/// save patches each record back into its original span and touches nothing
/// else - no pointers or counters change.
#[derive(Debug, Clone)]
pub struct RoadFile {
    buffer: Vec<u8>,
    multi: RoadMode,
    solo: RoadMode,
}

impl RoadFile {
    /// Read and parse a rengoku_data file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::parse(fs::read(path)?)
    }

    /// Parse rengoku_data bytes.
    pub fn parse(data: Vec<u8>) -> Result<Self> {
        let multi = read_mode(&data, MULTI_HEADER_OFFSET)?;
        let solo = read_mode(&data, SOLO_HEADER_OFFSET)?;
        Ok(Self {
            buffer: data,
            multi,
            solo,
        })
    }

    /// Get the template bytes this file was parsed from.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Get the multiplayer mode tables.
    pub fn multi(&self) -> &RoadMode {
        &self.multi
    }

    /// Get mutable access to the multiplayer mode tables.
    pub fn multi_mut(&mut self) -> &mut RoadMode {
        &mut self.multi
    }

    /// Get the solo mode tables.
    pub fn solo(&self) -> &RoadMode {
        &self.solo
    }

    /// Get mutable access to the solo mode tables.
    pub fn solo_mut(&mut self) -> &mut RoadMode {
        &mut self.solo
    }

    /// Build the output file: template copy with every record patched back
    /// into its recorded span.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = self.buffer.clone();
        write_mode(&mut buf, &self.multi)?;
        write_mode(&mut buf, &self.solo)?;
        Ok(buf)
    }

    /// Build the output in memory and write it to `path` in one step.
    ///
    /// The template is never overwritten implicitly.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

/// Read one mode's header and follow its pointer tables.
fn read_mode(data: &[u8], header_offset: usize) -> Result<RoadMode> {
    if header_offset + RoadModeHeader::SIZE > data.len() {
        return Err(Error::Truncated {
            offset: header_offset,
            needed: RoadModeHeader::SIZE,
            len: data.len(),
        });
    }
    let mut reader = BinaryReader::new_at(data, header_offset);
    let header = RoadModeHeader::read(&mut reader)?;

    // Parallel pointer and count arrays select each spawn group.
    let mut spawn_tables = Vec::with_capacity(header.spawn_table_pointers_count as usize);
    for i in 0..header.spawn_table_pointers_count as usize {
        let table_ptr = read_u32_field(data, header.spawn_table_pointers as usize + i * 4)?;
        let entry_count = read_u32_field(data, header.spawn_count_pointers as usize + i * 4)?;
        spawn_tables.push(read_spawn_group(data, table_ptr, entry_count)?);
    }

    let mut floor_stats = Vec::with_capacity(header.floor_stats_count as usize);
    let mut reader = BinaryReader::new_at(data, header.floor_stats_pointer as usize);
    for _ in 0..header.floor_stats_count {
        let offset = reader.position();
        let stats = FloorStats::read(&mut reader).map_err(|_| Error::Truncated {
            offset,
            needed: FloorStats::SIZE,
            len: data.len(),
        })?;
        floor_stats.push(stats);
    }

    Ok(RoadMode {
        header,
        spawn_tables,
        floor_stats,
    })
}

/// Read one spawn group of `count` rows at `start`.
fn read_spawn_group(data: &[u8], start: u32, count: u32) -> Result<Vec<SpawnEntry>> {
    let mut reader = BinaryReader::new_at(data, start as usize);
    let mut group = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let offset = reader.position();
        let entry = SpawnEntry::read(&mut reader).map_err(|_| Error::Truncated {
            offset,
            needed: SpawnEntry::SIZE,
            len: data.len(),
        })?;
        group.push(entry);
    }
    Ok(group)
}

/// Patch every record of one mode back into its recorded span.
fn write_mode(buf: &mut [u8], mode: &RoadMode) -> Result<()> {
    for group in &mode.spawn_tables {
        for entry in group {
            write_record(buf, entry.offset, &entry.to_bytes())?;
        }
    }
    for stats in &mode.floor_stats {
        write_record(buf, stats.offset, &stats.to_bytes())?;
    }
    Ok(())
}

fn write_record(buf: &mut [u8], offset: usize, bytes: &[u8]) -> Result<()> {
    write_bytes_at(buf, offset, bytes).map_err(|_| Error::Truncated {
        offset,
        needed: bytes.len(),
        len: buf.len(),
    })
}

fn read_u32_field(data: &[u8], offset: usize) -> Result<u32> {
    BinaryReader::new(data)
        .read_u32_at(offset)
        .map_err(|_| Error::Truncated {
            offset,
            needed: 4,
            len: data.len(),
        })
}
