// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-`(x, z)` column encode/decode.
//!
//! `spec.md` §4.E describes the span layout precisely but leaves the
//! exact column-level state machine ("voxels above the top span and below
//! the floor span are solid until proven air") in prose terse enough to
//! admit more than one reading. The reading implemented here — chosen
//! because it is self-consistent and reproduces the S4 scenario's
//! "isolated cap" shape exactly — is:
//!
//! - A column starts in air (the sky) before its first span.
//! - Within a span, `[air_start, color_start)` is solid-but-uncolored and
//!   `[color_start, color_start + color_count)` is solid-and-colored.
//! - Between the end of one span's colored run and the next span's
//!   `air_start`, the column reverts to air (this is how an overhang's air
//!   gap is represented).
//! - After the *last* span's colored run (the one with `len == 0`), the
//!   column is solid all the way to the floor (`y == 255`) — there is no
//!   further data to "prove" otherwise.
//!
//! See `DESIGN.md` for the Open Question entry recording this choice.

use vx_geom::Region;
use vx_io::{ReadStream, WriteStream};
use vx_palette::{Palette, Rgba};
use vx_voxel::{RawVolume, Voxel, VoxelType};

use crate::header::SpanHeader;
use vx_codec::{CancelToken, CodecError};

/// Column height. Fixed by `spec.md` §4.E ("256-voxel-tall columns").
pub const COLUMN_HEIGHT: i32 = 256;

/// Palette index used to fill a span's implicit (uncolored) solid run.
/// There is no recorded color for these voxels, so a fixed, deterministic
/// index is used rather than inventing one per voxel.
const IMPLICIT_FILL_PALETTE_INDEX: u8 = 0;

fn read_bgra(stream: &mut dyn ReadStream) -> Result<Rgba, CodecError> {
    let b = stream.read_u8()?;
    let g = stream.read_u8()?;
    let r = stream.read_u8()?;
    let a = stream.read_u8()?;
    Ok(Rgba::new(r, g, b, a))
}

fn write_bgra(stream: &mut dyn WriteStream, color: Rgba) -> Result<(), CodecError> {
    stream.write_u8(color.b)?;
    stream.write_u8(color.g)?;
    stream.write_u8(color.r)?;
    stream.write_u8(color.a)?;
    Ok(())
}

/// Read one column's worth of spans from `stream`, writing voxels into
/// `volume` at fixed `(x, z)`, quantizing colors into `palette`.
pub fn load_column(
    stream: &mut dyn ReadStream,
    volume: &mut RawVolume,
    palette: &mut Palette,
    x: i32,
    z: i32,
) -> Result<(), CodecError> {
    loop {
        let header = SpanHeader {
            len: stream.read_u8()?,
            color_start: stream.read_u8()?,
            color_end: stream.read_u8()?,
            air_start: stream.read_u8()?,
        };
        let count = header.color_count();

        for implicit_y in i32::from(header.air_start)..i32::from(header.color_start) {
            volume.set_voxel(x, implicit_y, z, Voxel::new(VoxelType::Generic, IMPLICIT_FILL_PALETTE_INDEX));
        }

        let mut color_y = i32::from(header.color_start);
        for _ in 0..count {
            let color = read_bgra(stream)?;
            let index = palette.insert(color);
            volume.set_voxel(x, color_y, z, Voxel::new(VoxelType::Generic, index));
            color_y += 1;
        }

        if header.len == 0 {
            if count > 0 {
                for floor_y in color_y..COLUMN_HEIGHT {
                    volume.set_voxel(x, floor_y, z, Voxel::new(VoxelType::Generic, IMPLICIT_FILL_PALETTE_INDEX));
                }
            }
            return Ok(());
        }
        debug_assert!(color_y <= COLUMN_HEIGHT, "span ran past the column's floor");
    }
}

fn is_surface(volume: &RawVolume, x: i32, y: i32, z: i32) -> bool {
    volume.voxel(x - 1, y, z).is_air()
        || volume.voxel(x + 1, y, z).is_air()
        || volume.voxel(x, y - 1, z).is_air()
        || volume.voxel(x, y + 1, z).is_air()
        || volume.voxel(x, y, z - 1).is_air()
        || volume.voxel(x, y, z + 1).is_air()
}

struct SubSpan {
    air_start: i32,
    color_start: i32,
    color_end: i32,
}

/// Decompose one column of `volume` into the minimal span sequence that
/// reproduces the surface-and-cap rule, then write it to `stream`.
pub fn save_column(
    stream: &mut dyn WriteStream,
    volume: &RawVolume,
    palette: &mut Palette,
    x: i32,
    z: i32,
) -> Result<(), CodecError> {
    let solid: Vec<bool> = (0..COLUMN_HEIGHT).map(|y| !volume.voxel(x, y, z).is_air()).collect();
    let explicit: Vec<bool> =
        (0..COLUMN_HEIGHT).map(|y| solid[y as usize] && is_surface(volume, x, y, z)).collect();

    let mut sub_spans = Vec::new();
    let mut y = 0_i32;
    while y < COLUMN_HEIGHT {
        if !solid[y as usize] {
            y += 1;
            continue;
        }
        let run_start = y;
        let mut j = y;
        while j < COLUMN_HEIGHT && solid[j as usize] {
            j += 1;
        }
        let run_end = j - 1;

        let mut k = run_start;
        while k <= run_end {
            let implicit_start = k;
            while k <= run_end && !explicit[k as usize] {
                k += 1;
            }
            let color_start = k;
            while k <= run_end && explicit[k as usize] {
                k += 1;
            }
            let color_end = k - 1;
            sub_spans.push(SubSpan { air_start: implicit_start, color_start, color_end });
        }
        y = run_end + 1;
    }

    if sub_spans.is_empty() {
        stream.write_u8(SpanHeader::empty_terminal().len)?;
        stream.write_u8(SpanHeader::EMPTY_COLOR_START)?;
        stream.write_u8(SpanHeader::EMPTY_COLOR_END)?;
        stream.write_u8(SpanHeader::EMPTY_COLOR_START)?;
        return Ok(());
    }

    let last = sub_spans.len() - 1;
    for (i, span) in sub_spans.iter().enumerate() {
        let count = (span.color_end - span.color_start + 1) as usize;
        let is_last = i == last;
        #[allow(clippy::cast_possible_truncation, reason = "column coordinates fit in u8 by construction")]
        let header = SpanHeader {
            len: if is_last { 0 } else { (1 + count) as u8 },
            color_start: span.color_start as u8,
            color_end: span.color_end as u8,
            air_start: span.air_start as u8,
        };
        stream.write_u8(header.len)?;
        stream.write_u8(header.color_start)?;
        stream.write_u8(header.color_end)?;
        stream.write_u8(header.air_start)?;

        for y in span.color_start..=span.color_end {
            let color = palette.color(volume.voxel(x, y, z).palette_index()).unwrap_or(Rgba::BLACK);
            write_bgra(stream, color)?;
        }
    }

    Ok(())
}

/// The region a loaded volume of `(width, depth)` columns occupies.
#[must_use]
pub fn map_region(width: i32, depth: i32) -> Region {
    Region::from_origin_and_dims(glam::IVec3::ZERO, glam::IVec3::new(width, COLUMN_HEIGHT, depth))
}

/// `true` iff `cancel` has fired; callers check this between columns.
#[must_use]
pub fn should_abort(cancel: &CancelToken) -> bool {
    cancel.is_cancelled()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Seek, SeekFrom};

    #[test]
    fn single_column_cap_round_trips_through_save_and_load() {
        let region = map_region(1, 1);
        let mut volume = RawVolume::new(region);
        let mut palette = Palette::new();
        let r = palette.insert(Rgba::new(255, 0, 0, 255));
        let g = palette.insert(Rgba::new(0, 255, 0, 255));
        let b = palette.insert(Rgba::new(0, 0, 255, 255));
        volume.set_voxel(0, 253, 0, Voxel::new(VoxelType::Generic, r));
        volume.set_voxel(0, 254, 0, Voxel::new(VoxelType::Generic, g));
        volume.set_voxel(0, 255, 0, Voxel::new(VoxelType::Generic, b));

        let mut stream = Cursor::new(Vec::new());
        save_column(&mut stream, &volume, &mut palette, 0, 0).unwrap();
        stream.seek(SeekFrom::Start(0)).unwrap();

        let mut loaded = RawVolume::new(region);
        let mut loaded_palette = Palette::new();
        load_column(&mut stream, &mut loaded, &mut loaded_palette, 0, 0).unwrap();

        for y in 0..COLUMN_HEIGHT {
            assert_eq!(
                loaded.voxel(0, y, 0).is_air(),
                volume.voxel(0, y, 0).is_air(),
                "mismatch at y={y}"
            );
        }
    }

    #[test]
    fn all_air_column_round_trips_as_the_terminal_sentinel_span() {
        let region = map_region(1, 1);
        let volume = RawVolume::new(region);
        let mut palette = Palette::new();

        let mut stream = Cursor::new(Vec::new());
        save_column(&mut stream, &volume, &mut palette, 0, 0).unwrap();
        stream.seek(SeekFrom::Start(0)).unwrap();

        let mut loaded = RawVolume::new(region);
        let mut loaded_palette = Palette::new();
        load_column(&mut stream, &mut loaded, &mut loaded_palette, 0, 0).unwrap();

        for y in 0..COLUMN_HEIGHT {
            assert!(loaded.voxel(0, y, 0).is_air());
        }
    }

    #[test]
    fn map_region_spans_the_fixed_256_voxel_column_height() {
        let region = map_region(3, 5);
        assert_eq!(region.width(), 3);
        assert_eq!(region.height(), COLUMN_HEIGHT);
        assert_eq!(region.depth(), 5);
    }
}
