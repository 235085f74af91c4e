//! Plain JSON interchange for the shop tables.
//!
//! Used for backup and restore outside the binary format. Only the logical
//! fields travel; liveness and padding are re-normalized on the way back in,
//! so a round trip reproduces the same logical rows rather than identical
//! bytes.

use serde::{Deserialize, Serialize};

use crate::records::{CatShopEntry, MedalShopEntry};
use crate::Result;

#[derive(Debug, Serialize, Deserialize)]
struct CatShopDoc {
    #[serde(default)]
    entries: Vec<CatShopRow>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CatShopRow {
    #[serde(default)]
    item_id: u16,
    #[serde(default)]
    item_id2: u16,
}

#[derive(Debug, Serialize, Deserialize)]
struct MedalShopDoc {
    #[serde(default)]
    entries: Vec<MedalShopRow>,
}

#[derive(Debug, Serialize, Deserialize)]
struct MedalShopRow {
    #[serde(default)]
    item: u16,
    #[serde(default)]
    flag1: u16,
    #[serde(default)]
    flag2: u8,
    #[serde(default)]
    price: u16,
}

/// Render cat-shop rows as a pretty-printed JSON document.
pub fn cat_shop_to_json(rows: &[CatShopEntry]) -> Result<String> {
    let doc = CatShopDoc {
        entries: rows
            .iter()
            .map(|r| CatShopRow {
                item_id: r.item_id,
                item_id2: r.item_id2,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse cat-shop rows back from their JSON document.
pub fn cat_shop_from_json(json: &str) -> Result<Vec<CatShopEntry>> {
    let doc: CatShopDoc = serde_json::from_str(json)?;
    Ok(doc
        .entries
        .into_iter()
        .map(|r| CatShopEntry::new(r.item_id, r.item_id2))
        .collect())
}

/// Render medal-shop rows as a pretty-printed JSON document.
pub fn medal_shop_to_json(rows: &[MedalShopEntry]) -> Result<String> {
    let doc = MedalShopDoc {
        entries: rows
            .iter()
            .map(|r| MedalShopRow {
                item: r.item,
                flag1: r.random,
                flag2: r.quantity,
                price: r.price,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse medal-shop rows back from their JSON document.
pub fn medal_shop_from_json(json: &str) -> Result<Vec<MedalShopEntry>> {
    let doc: MedalShopDoc = serde_json::from_str(json)?;
    Ok(doc
        .entries
        .into_iter()
        .map(|r| MedalShopEntry::new(r.item, r.flag1, r.flag2, r.price))
        .collect())
}
