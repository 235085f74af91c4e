//! Sentinel-terminated record runs.
//!
//! The two shop tables are variable-length runs of fixed-width records with
//! no stored count: records are live while a designated field holds the live
//! value, and the first record failing that test terminates the run (and is
//! not part of the data). Encoding normalizes liveness and padding fields,
//! then emits exactly one terminator record after the last live row.

use rengoku_common::BinaryReader;

use crate::records::{CatShopEntry, MedalShopEntry};
use crate::Result;

/// Live marker for cat-shop rows.
pub const CAT_SHOP_SENTINEL: u32 = 0xFFFF_FFFF;

/// A fixed-width record that participates in a sentinel-terminated run.
pub trait SentinelRecord: Sized {
    /// Byte width of one record, terminator included.
    const SIZE: usize;

    /// Decode one record at the reader's position. Returns `None` when the
    /// record fails the liveness test (the run terminator).
    fn decode(reader: &mut BinaryReader<'_>) -> Result<Option<Self>>;

    /// Append the normalized live encoding of this record.
    fn encode_live(&self, out: &mut Vec<u8>);

    /// Append one all-zero terminator record.
    fn encode_terminator(out: &mut Vec<u8>) {
        out.resize(out.len() + Self::SIZE, 0);
    }
}

/// Read a run starting at `start`.
///
/// A zero or out-of-bounds start pointer yields an empty run - "no shop
/// present" is a valid state, not an error. The walk also stops when fewer
/// than one record's worth of bytes remain.
pub fn read_run<T: SentinelRecord>(data: &[u8], start: u32) -> Result<Vec<T>> {
    let start = start as usize;
    if start == 0 || start + T::SIZE > data.len() {
        return Ok(Vec::new());
    }

    let mut reader = BinaryReader::new_at(data, start);
    let mut rows = Vec::new();
    while reader.remaining() >= T::SIZE {
        match T::decode(&mut reader)? {
            Some(row) => rows.push(row),
            None => break,
        }
    }
    Ok(rows)
}

/// Serialize live rows followed by exactly one terminator record.
pub fn build_run<T: SentinelRecord>(rows: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity((rows.len() + 1) * T::SIZE);
    for row in rows {
        row.encode_live(&mut out);
    }
    T::encode_terminator(&mut out);
    out
}

impl SentinelRecord for CatShopEntry {
    const SIZE: usize = 16;

    fn decode(reader: &mut BinaryReader<'_>) -> Result<Option<Self>> {
        let offset = reader.position();
        let item_id = reader.read_u16()?;
        let live = reader.read_u32()?;
        reader.advance(2); // pad
        let item_id2 = reader.read_u16()?;
        reader.advance(6); // second liveness word + pad
        if live != CAT_SHOP_SENTINEL {
            return Ok(None);
        }
        Ok(Some(Self {
            item_id,
            item_id2,
            offset: Some(offset),
        }))
    }

    fn encode_live(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.item_id.to_le_bytes());
        out.extend_from_slice(&CAT_SHOP_SENTINEL.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&self.item_id2.to_le_bytes());
        out.extend_from_slice(&CAT_SHOP_SENTINEL.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
    }
}

impl SentinelRecord for MedalShopEntry {
    const SIZE: usize = 12;

    fn decode(reader: &mut BinaryReader<'_>) -> Result<Option<Self>> {
        let offset = reader.position();
        let item = reader.read_u16()?;
        let random = reader.read_u16()?;
        let quantity = reader.read_u8()?;
        reader.advance(3); // pad bytes
        let price = reader.read_u16()?;
        reader.advance(2); // trailing pad
        if item == 0 {
            return Ok(None);
        }
        Ok(Some(Self {
            item,
            random,
            quantity,
            price,
            offset: Some(offset),
        }))
    }

    fn encode_live(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.item.to_le_bytes());
        out.extend_from_slice(&self.random.to_le_bytes());
        out.push(self.quantity);
        out.extend_from_slice(&[0u8; 3]);
        out.extend_from_slice(&self.price.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
    }
}

/// Cat-shop item counter rule: non-zero ids across both columns of every
/// live row, so a row contributes 0, 1, or 2.
pub fn cat_shop_item_count(rows: &[CatShopEntry]) -> usize {
    rows.iter()
        .map(|r| usize::from(r.item_id != 0) + usize::from(r.item_id2 != 0))
        .sum()
}

/// Medal-shop counter rule: live rows whose item field is non-zero.
pub fn medal_shop_item_count(rows: &[MedalShopEntry]) -> usize {
    rows.iter().filter(|r| r.item != 0).count()
}
