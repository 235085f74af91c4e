//! File layout constants for mhfdat.bin.
//!
//! All pointer-field offsets, alignments, and padding sizes live in one
//! [`DatLayout`] table that is passed into the write engine, so a format
//! revision with shifted offsets only needs a new table, not new engine code.
//! The values are protocol constants recovered from the target game client
//! and must be reproduced exactly for it to accept the output.

/// A signature word: absolute offset plus the little-endian u32 expected there.
pub type SignatureWord = (usize, u32);

/// Fixed offsets and write-policy constants for one mhfdat revision.
#[derive(Debug, Clone, Copy)]
pub struct DatLayout {
    /// Signature words checked before any parse.
    pub signature: [SignatureWord; 3],
    /// Pointer to the DataCounters block (5 x u16).
    pub counters_ptr: usize,
    /// Pointer to the cat-shop entry run.
    pub cat_shop_ptr: usize,
    /// Pointer to the monster-points table.
    pub monster_ptr: usize,
    /// Pointer to the medal-shop entry run.
    pub medal_shop_ptr: usize,
    /// Pointer to the extra counters block (u16 array).
    pub extra_counters_ptr: usize,
    /// Fixed byte capacity of the monster-points region.
    pub monster_capacity: usize,
    /// EOF alignment when relocating the monster block.
    pub monster_align: usize,
    /// EOF alignment when relocating the cat-shop run.
    pub cat_shop_align: usize,
    /// EOF alignment when relocating the medal-shop run.
    pub medal_shop_align: usize,
    /// Zero padding appended after any relocated block.
    pub end_padding: usize,
    /// u16 index of the cat-shop item counter inside DataCounters.
    pub cat_counter_index: usize,
    /// u16 index of the medal-shop entry counter inside the extra counters.
    pub medal_counter_index: usize,
}

/// Layout of the mhfdat.bin revision this crate targets.
pub const DAT_LAYOUT: DatLayout = DatLayout {
    signature: [(0x00, 0x1A66_686D), (0x04, 0x0000_0059), (0x0C, 0x0000_0BC8)],
    counters_ptr: 0xB04,
    cat_shop_ptr: 0xB10,
    monster_ptr: 0xB20,
    medal_shop_ptr: 0x948,
    extra_counters_ptr: 0x910,
    monster_capacity: 0x1000,
    monster_align: 0x10,
    cat_shop_align: 0x10,
    medal_shop_align: 0x20,
    end_padding: 0x400,
    cat_counter_index: 2,
    medal_counter_index: 7,
};
