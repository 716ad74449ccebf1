use rayon::prelude::*;

use crate::core::data::field::Field;

fn pack_byte(cells: &[bool]) -> u8 {
    cells
        .iter()
        .enumerate()
        .filter(|&(_, &member)| member)
        .fold(0u8, |byte, (bit, _)| byte | (1 << bit))
}

/// Packs the field into `ceil(len / 8)` bytes, least significant bit first:
/// bit `j` of byte `b` carries cell `8·b + j`. Trailing bits of the last
/// byte are zero.
#[must_use]
pub fn marshal_bitmap(field: &Field) -> Vec<u8> {
    field.as_slice().chunks(8).map(pack_byte).collect()
}

/// Same output as [`marshal_bitmap`], packed on the rayon pool in runs of
/// `bytes_per_task` bytes.
#[must_use]
pub fn marshal_bitmap_parallel(field: &Field, bytes_per_task: usize) -> Vec<u8> {
    let cells_per_task = bytes_per_task.max(1) * 8;

    field
        .as_slice()
        .par_chunks(cells_per_task)
        .flat_map_iter(|run| run.chunks(8).map(pack_byte))
        .collect()
}
