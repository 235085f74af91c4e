//! Hunting Road spawn data (rengoku_data.bin) parser and rewriter.
//!
//! The file carries two edition modes (multiplayer and solo), each with a
//! fixed header pointing at floor-stat arrays and ordered spawn groups. All
//! tables live at fixed positions with fixed counts, so edits are written
//! back record-by-record into the original spans - the one format here that
//! never relocates anything.
//!
//! # Example
//!
//! ```no_run
//! use rengoku_road::RoadFile;
//!
//! let mut road = RoadFile::open("rengoku_data.bin")?;
//! println!("multi spawn groups: {}", road.multi().spawn_tables().len());
//!
//! // Boost every spawn weighting on the first multiplayer group.
//! if let Some(group) = road.multi_mut().spawn_table_mut(0) {
//!     for entry in group {
//!         entry.spawn_weighting += 10;
//!     }
//! }
//! road.save("rengoku_data_out.bin")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod file;
mod records;

pub use error::{Error, Result};
pub use file::{RoadFile, RoadMode, MULTI_HEADER_OFFSET, SOLO_HEADER_OFFSET};
pub use records::{FloorStats, RoadModeHeader, SpawnEntry};
