//! Whole-file round trips over a synthetic rengoku_data buffer.

use rengoku_road::{Error, RoadFile, MULTI_HEADER_OFFSET, SOLO_HEADER_OFFSET};

fn put_u32(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn put_f32(data: &mut [u8], offset: usize, value: f32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

// Multi tables.
const MULTI_STP: usize = 0x80; // spawn table pointer array (2 entries)
const MULTI_SCP: usize = 0x90; // spawn count array
const MULTI_FLOORS: usize = 0x100; // 2 floor stats
const MULTI_GROUP0: usize = 0x200; // 2 spawn entries
const MULTI_GROUP1: usize = 0x300; // 1 spawn entry

// Solo tables.
const SOLO_STP: usize = 0xA0;
const SOLO_SCP: usize = 0xB0;
const SOLO_FLOORS: usize = 0x400; // 1 floor stat
const SOLO_GROUP0: usize = 0x500; // 1 spawn entry

fn put_header(
    data: &mut [u8],
    at: usize,
    floors: (u32, usize),
    groups: u32,
    stp: usize,
    scp: usize,
) {
    put_u32(data, at, floors.0);
    put_u32(data, at + 4, groups);
    put_u32(data, at + 8, groups);
    put_u32(data, at + 12, floors.1 as u32);
    put_u32(data, at + 16, stp as u32);
    put_u32(data, at + 20, scp as u32);
}

fn put_spawn(data: &mut [u8], at: usize, first: u32, second: u32, weighting: u32) {
    put_u32(data, at, first);
    put_u32(data, at + 4, 1);
    put_u32(data, at + 8, second);
    put_u32(data, at + 12, 0);
    put_u32(data, at + 16, 3);
    put_u32(data, at + 20, 0);
    put_u32(data, at + 24, weighting);
    put_u32(data, at + 28, 0);
}

fn put_floor(data: &mut [u8], at: usize, number: u32, multi1: f32) {
    put_u32(data, at, number);
    put_u32(data, at + 4, 1);
    put_u32(data, at + 8, 0);
    put_f32(data, at + 12, multi1);
    put_f32(data, at + 16, 1.0);
    put_u32(data, at + 20, 0);
}

fn make_road() -> Vec<u8> {
    let mut data = vec![0u8; 0x600];

    put_header(
        &mut data,
        MULTI_HEADER_OFFSET,
        (2, MULTI_FLOORS),
        2,
        MULTI_STP,
        MULTI_SCP,
    );
    put_header(
        &mut data,
        SOLO_HEADER_OFFSET,
        (1, SOLO_FLOORS),
        1,
        SOLO_STP,
        SOLO_SCP,
    );

    put_u32(&mut data, MULTI_STP, MULTI_GROUP0 as u32);
    put_u32(&mut data, MULTI_STP + 4, MULTI_GROUP1 as u32);
    put_u32(&mut data, MULTI_SCP, 2);
    put_u32(&mut data, MULTI_SCP + 4, 1);

    put_u32(&mut data, SOLO_STP, SOLO_GROUP0 as u32);
    put_u32(&mut data, SOLO_SCP, 1);

    put_spawn(&mut data, MULTI_GROUP0, 11, 54, 60);
    put_spawn(&mut data, MULTI_GROUP0 + 32, 77, 0, 40);
    put_spawn(&mut data, MULTI_GROUP1, 2, 0, 100);
    put_spawn(&mut data, SOLO_GROUP0, 33, 0, 50);

    put_floor(&mut data, MULTI_FLOORS, 1, 1.5);
    put_floor(&mut data, MULTI_FLOORS + 24, 2, 2.0);
    put_floor(&mut data, SOLO_FLOORS, 1, 1.0);

    data
}

#[test]
fn parse_preserves_group_order() {
    let road = RoadFile::parse(make_road()).unwrap();

    let multi = road.multi();
    assert_eq!(multi.header().spawn_table_pointers_count, 2);
    assert_eq!(multi.spawn_tables().len(), 2);
    assert_eq!(multi.spawn_tables()[0].len(), 2);
    assert_eq!(multi.spawn_tables()[1].len(), 1);
    assert_eq!(multi.spawn_tables()[0][0].first_monster_id, 11);
    assert_eq!(multi.spawn_tables()[0][1].first_monster_id, 77);
    assert_eq!(multi.spawn_tables()[1][0].first_monster_id, 2);
    assert_eq!(multi.spawn_tables()[0][0].offset, MULTI_GROUP0);

    assert_eq!(multi.floor_stats().len(), 2);
    assert_eq!(multi.floor_stats()[0].point_multi1, 1.5);
    assert_eq!(multi.floor_stats()[1].floor_number, 2);

    let solo = road.solo();
    assert_eq!(solo.spawn_tables().len(), 1);
    assert_eq!(solo.spawn_tables()[0][0].first_monster_id, 33);
    assert_eq!(solo.floor_stats().len(), 1);
}

#[test]
fn save_rewrites_only_record_spans() {
    let mut road = RoadFile::parse(make_road()).unwrap();

    road.multi_mut().spawn_table_mut(0).unwrap()[1].spawn_weighting = 75;
    road.multi_mut().floor_stats_mut()[0].point_multi1 = 3.25;
    road.solo_mut().spawn_table_mut(0).unwrap()[0].second_monster_id = 14;

    let out = road.to_bytes().unwrap();
    assert_eq!(out.len(), road.buffer().len());

    // Edited fields landed in their original spans.
    assert_eq!(
        &out[MULTI_GROUP0 + 32 + 24..MULTI_GROUP0 + 32 + 28],
        &75u32.to_le_bytes()
    );
    assert_eq!(
        &out[MULTI_FLOORS + 12..MULTI_FLOORS + 16],
        &3.25f32.to_le_bytes()
    );
    assert_eq!(
        &out[SOLO_GROUP0 + 8..SOLO_GROUP0 + 12],
        &14u32.to_le_bytes()
    );

    // Bytes outside record spans are untouched: headers and pointer arrays
    // compare equal to the template.
    assert_eq!(&out[..MULTI_FLOORS], &road.buffer()[..MULTI_FLOORS]);

    // A fresh parse of the output sees the edits, in order.
    let back = RoadFile::parse(out).unwrap();
    assert_eq!(back.multi().spawn_tables()[0][1].spawn_weighting, 75);
    assert_eq!(back.multi().floor_stats()[0].point_multi1, 3.25);
    assert_eq!(back.solo().spawn_tables()[0][0].second_monster_id, 14);
}

#[test]
fn unedited_round_trip_is_byte_identical() {
    let road = RoadFile::parse(make_road()).unwrap();
    let out = road.to_bytes().unwrap();
    assert_eq!(out, road.buffer());
}

#[test]
fn truncated_spawn_table_is_an_error() {
    let mut data = make_road();
    // Point the solo group past the end of the buffer.
    put_u32(&mut data, SOLO_STP, 0x5F0);
    match RoadFile::parse(data) {
        Err(Error::Truncated { offset, needed, .. }) => {
            assert_eq!(offset, 0x5F0);
            assert_eq!(needed, 32);
        }
        other => panic!("expected Truncated, got {:?}", other),
    }
}

#[test]
fn short_file_is_an_error() {
    let data = vec![0u8; 0x20];
    assert!(matches!(
        RoadFile::parse(data),
        Err(Error::Truncated { .. })
    ));
}
