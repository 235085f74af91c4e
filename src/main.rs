//! Rengoku CLI - Command-line tool for editing Monster Hunter Frontier data.
//!
//! This is the main entry point for the Rengoku command-line application.
//! It drives the format crates through their public interfaces: the core
//! stores plain identifiers, and this layer translates them to monster names
//! for display and back for edits.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use rengoku::dat::interchange;
use rengoku::prelude::*;

/// Rengoku - Monster Hunter Frontier binary data editor
#[derive(Parser)]
#[command(name = "rengoku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the tables in an mhfdat.bin file
    DatInfo {
        /// Path to mhfdat.bin (raw, not compressed)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Re-save an mhfdat.bin file, relocating edited tables
    DatSave {
        /// Path to the template mhfdat.bin
        #[arg(short, long)]
        input: PathBuf,

        /// Output file; never the template implicitly
        #[arg(short, long)]
        output: PathBuf,

        /// Overwrite the monster-points region in place instead of
        /// relocating it to end-of-file
        #[arg(long)]
        in_place: bool,
    },

    /// Export the cat shop to a JSON document
    CatshopExport {
        /// Path to mhfdat.bin
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Import the cat shop from a JSON document and save a new mhfdat.bin
    CatshopImport {
        /// Path to the template mhfdat.bin
        #[arg(short, long)]
        input: PathBuf,

        /// JSON document produced by catshop-export
        #[arg(short, long)]
        json: PathBuf,

        /// Output mhfdat.bin
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Export the medal shop to a JSON document
    MedalshopExport {
        /// Path to mhfdat.bin
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Import the medal shop from a JSON document and save a new mhfdat.bin
    MedalshopImport {
        /// Path to the template mhfdat.bin
        #[arg(short, long)]
        input: PathBuf,

        /// JSON document produced by medalshop-export
        #[arg(short, long)]
        json: PathBuf,

        /// Output mhfdat.bin
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Summarize the spawn tables in a rengoku_data.bin file
    RoadInfo {
        /// Path to rengoku_data.bin (raw, not compressed)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Edit one spawn row in a rengoku_data.bin file and save a copy
    RoadSetSpawn {
        /// Path to the template rengoku_data.bin
        #[arg(short, long)]
        input: PathBuf,

        /// Output rengoku_data.bin
        #[arg(short, long)]
        output: PathBuf,

        /// Edit the solo tables instead of multiplayer
        #[arg(long)]
        solo: bool,

        /// Spawn group index
        #[arg(short, long)]
        group: usize,

        /// Row index within the group
        #[arg(short = 'r', long)]
        row: usize,

        /// First monster, by name or decimal id
        #[arg(long)]
        first: Option<String>,

        /// Second monster, by name or decimal id
        #[arg(long)]
        second: Option<String>,

        /// Spawn weighting
        #[arg(long)]
        weighting: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::DatInfo { input } => dat_info(&input),
        Commands::DatSave {
            input,
            output,
            in_place,
        } => dat_save(&input, &output, in_place),
        Commands::CatshopExport { input, output } => catshop_export(&input, &output),
        Commands::CatshopImport {
            input,
            json,
            output,
        } => catshop_import(&input, &json, &output),
        Commands::MedalshopExport { input, output } => medalshop_export(&input, &output),
        Commands::MedalshopImport {
            input,
            json,
            output,
        } => medalshop_import(&input, &json, &output),
        Commands::RoadInfo { input } => road_info(&input),
        Commands::RoadSetSpawn {
            input,
            output,
            solo,
            group,
            row,
            first,
            second,
            weighting,
        } => road_set_spawn(&input, &output, solo, group, row, first, second, weighting),
    }
}

fn open_dat(input: &PathBuf) -> Result<DatFile> {
    DatFile::open(input).with_context(|| format!("failed to parse {}", input.display()))
}

/// Small road files are almost always still compressed; refuse early with a
/// useful message instead of walking garbage pointers.
fn open_road(input: &PathBuf) -> Result<RoadFile> {
    let size = fs::metadata(input)
        .with_context(|| format!("failed to read {}", input.display()))?
        .len();
    if size < 10 * 1024 {
        bail!(
            "{} is only {size} bytes; it looks compressed or truncated - decompress it first",
            input.display()
        );
    }
    RoadFile::open(input).with_context(|| format!("failed to parse {}", input.display()))
}

fn dat_info(input: &PathBuf) -> Result<()> {
    let dat = open_dat(input)?;

    println!("{}", input.display());
    println!("  monster points: {} rows", dat.monster_points().len());
    match dat.counters() {
        Some(c) => println!(
            "  counters @ {:#x}: cat shop items={}, road entries={}",
            c.offset, c.cat_shop_items, c.road_entries
        ),
        None => println!("  counters: missing"),
    }
    println!("  cat shop: {} rows", dat.cat_shop().len());
    println!("  medal shop: {} rows", dat.medal_shop().len());

    for row in dat.monster_points().iter().take(10) {
        let name = monsters::name(row.monster_id).unwrap_or("?");
        println!(
            "    {:<24} base={:<6} L1={:<6} L5={}",
            name, row.base_points, row.level1_points, row.level5_points
        );
    }
    if dat.monster_points().len() > 10 {
        println!("    ... {} more", dat.monster_points().len() - 10);
    }
    Ok(())
}

fn dat_save(input: &PathBuf, output: &PathBuf, in_place: bool) -> Result<()> {
    let dat = open_dat(input)?;
    let policy = if in_place {
        WritePolicy::OverwriteInPlace
    } else {
        WritePolicy::RelocateToEnd
    };
    dat.save(output, policy)
        .with_context(|| format!("failed to save {}", output.display()))?;
    println!("Saved {}", output.display());
    Ok(())
}

fn catshop_export(input: &PathBuf, output: &PathBuf) -> Result<()> {
    let dat = open_dat(input)?;
    let json = interchange::cat_shop_to_json(dat.cat_shop())?;
    fs::write(output, json).with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "Exported {} cat shop rows to {}",
        dat.cat_shop().len(),
        output.display()
    );
    Ok(())
}

fn catshop_import(input: &PathBuf, json: &PathBuf, output: &PathBuf) -> Result<()> {
    let mut dat = open_dat(input)?;
    let text =
        fs::read_to_string(json).with_context(|| format!("failed to read {}", json.display()))?;
    let rows = interchange::cat_shop_from_json(&text)?;
    println!("Importing {} cat shop rows", rows.len());
    *dat.cat_shop_mut() = rows;
    dat.save(output, WritePolicy::RelocateToEnd)
        .with_context(|| format!("failed to save {}", output.display()))?;
    println!("Saved {}", output.display());
    Ok(())
}

fn medalshop_export(input: &PathBuf, output: &PathBuf) -> Result<()> {
    let dat = open_dat(input)?;
    let json = interchange::medal_shop_to_json(dat.medal_shop())?;
    fs::write(output, json).with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "Exported {} medal shop rows to {}",
        dat.medal_shop().len(),
        output.display()
    );
    Ok(())
}

fn medalshop_import(input: &PathBuf, json: &PathBuf, output: &PathBuf) -> Result<()> {
    let mut dat = open_dat(input)?;
    let text =
        fs::read_to_string(json).with_context(|| format!("failed to read {}", json.display()))?;
    let rows = interchange::medal_shop_from_json(&text)?;
    println!("Importing {} medal shop rows", rows.len());
    *dat.medal_shop_mut() = rows;
    dat.save(output, WritePolicy::RelocateToEnd)
        .with_context(|| format!("failed to save {}", output.display()))?;
    println!("Saved {}", output.display());
    Ok(())
}

fn road_info(input: &PathBuf) -> Result<()> {
    let road = open_road(input)?;

    println!("{}", input.display());
    for (label, mode) in [("multi", road.multi()), ("solo", road.solo())] {
        println!(
            "  {label}: {} spawn groups, {} floor stats",
            mode.spawn_tables().len(),
            mode.floor_stats().len()
        );
        for (i, group) in mode.spawn_tables().iter().enumerate() {
            print!("    group {i}:");
            for spawn in group {
                let name = monsters::name(spawn.first_monster_id as u16).unwrap_or("?");
                print!(" {name}(w{})", spawn.spawn_weighting);
            }
            println!();
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn road_set_spawn(
    input: &PathBuf,
    output: &PathBuf,
    solo: bool,
    group: usize,
    row: usize,
    first: Option<String>,
    second: Option<String>,
    weighting: Option<u32>,
) -> Result<()> {
    let mut road = open_road(input)?;

    let mode = if solo { road.solo_mut() } else { road.multi_mut() };
    let table = mode
        .spawn_table_mut(group)
        .with_context(|| format!("no spawn group {group}"))?;
    let spawn = table
        .get_mut(row)
        .with_context(|| format!("no row {row} in spawn group {group}"))?;

    if let Some(name) = first {
        spawn.first_monster_id = u32::from(monsters::resolve(&name)?);
    }
    if let Some(name) = second {
        spawn.second_monster_id = u32::from(monsters::resolve(&name)?);
    }
    if let Some(w) = weighting {
        spawn.spawn_weighting = w;
    }

    road.save(output)
        .with_context(|| format!("failed to save {}", output.display()))?;
    println!("Saved {}", output.display());
    Ok(())
}
