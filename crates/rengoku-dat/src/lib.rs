//! mhfdat.bin parser and relocation writer for Monster Hunter Frontier.
//!
//! mhfdat.bin is a large blob holding, among other things, the monster
//! points table, a counters block, and the cat- and medal-shop inventories,
//! all reached through absolute pointer fields at fixed offsets. This crate
//! parses those tables into owned record collections and writes edited
//! collections back without disturbing unrelated bytes: variable-size tables
//! are relocated to an aligned end-of-file block with their pointer and
//! counter fields patched, fixed-capacity tables can be rewritten in place.
//!
//! # Example
//!
//! ```no_run
//! use rengoku_dat::{CatShopEntry, DatFile, WritePolicy};
//!
//! let mut dat = DatFile::open("mhfdat.bin")?;
//! println!("monster rows: {}", dat.monster_points().len());
//!
//! // Add a cat-shop row, then save a modified copy. The shop run is
//! // relocated and its pointer and counter fields are patched.
//! dat.cat_shop_mut().push(CatShopEntry::new(500, 0));
//! dat.save("mhfdat_out.bin", WritePolicy::RelocateToEnd)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod file;
mod layout;
mod records;
mod relocate;
mod sentinel;
mod signature;

pub mod interchange;

pub use error::{Error, Result};
pub use file::DatFile;
pub use layout::{DatLayout, DAT_LAYOUT};
pub use records::{CatShopEntry, DataCounters, MedalShopEntry, MonsterPoints};
pub use relocate::{
    patch_counter_u16, write_block, BlockSpec, RelocationPlan, WritePolicy,
};
pub use sentinel::{
    build_run, cat_shop_item_count, medal_shop_item_count, read_run, SentinelRecord,
    CAT_SHOP_SENTINEL,
};
pub use signature::validate_signature;
