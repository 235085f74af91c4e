//! Rengoku - Monster Hunter Frontier binary data editing library.
//!
//! This crate provides a unified interface to the Rengoku library ecosystem
//! for editing Frontier's raw (decompressed) game-data files.
//!
//! # Crates
//!
//! - [`rengoku_common`] - Common utilities (binary reading, buffer patching, monster table)
//! - [`rengoku_dat`] - `mhfdat.bin` shops, monster points, and the relocation writer
//! - [`rengoku_road`] - `rengoku_data.bin` Hunting Road spawn tables
//!
//! # Example
//!
//! ```no_run
//! use rengoku::prelude::*;
//!
//! // Open the shop/points blob and list the cat shop.
//! let dat = DatFile::open("mhfdat.bin")?;
//! for entry in dat.cat_shop() {
//!     println!("{} / {}", entry.item_id, entry.item_id2);
//! }
//!
//! // Open the Hunting Road data and show spawn candidates by name.
//! let road = RoadFile::open("rengoku_data.bin")?;
//! for group in road.multi().spawn_tables() {
//!     for spawn in group {
//!         let name = monsters::name(spawn.first_monster_id as u16).unwrap_or("?");
//!         println!("{name} @ weight {}", spawn.spawn_weighting);
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use rengoku_common as common;
pub use rengoku_dat as dat;
pub use rengoku_road as road;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use rengoku_common::{monsters, BinaryReader};
    pub use rengoku_dat::{
        CatShopEntry, DatFile, DataCounters, MedalShopEntry, MonsterPoints, WritePolicy,
    };
    pub use rengoku_road::{FloorStats, RoadFile, RoadMode, SpawnEntry};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
