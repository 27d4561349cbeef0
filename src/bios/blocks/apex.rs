//! ### Apex block locator
//!
//! An Apex block is a single 256 byte sector.  Blocks are numbered sequentially
//! across the disk, 16 per track, so the track is found by simple division, while
//! the position within the track has to pass through a sector map (see `bios::skew`).

use log::trace;

/// Bytes in an Apex block, this is also the sector size
pub const BLOCK_SIZE: usize = 256;
/// Blocks on a 35 track 5.25 inch disk
pub const BLOCK_COUNT: usize = 560;
/// Blocks on one track
pub const BLOCKS_PER_TRACK: usize = 16;

/// Get the [track,sector] in the image that holds `block`.  The sector is numbered in the
/// order the image stores sectors.  The `sector_map` must have `BLOCKS_PER_TRACK` elements,
/// usually it comes from `skew::logical_map`.
pub fn ts_from_apex_block(block: usize,sector_map: &[usize]) -> [usize;2] {
    let track = block / BLOCKS_PER_TRACK;
    let sector = sector_map[block % BLOCKS_PER_TRACK];
    trace!("locate apex block {}: track {}, sector {}",block,track,sector);
    [track,sector]
}

/// Get the byte offset into the image of `block`.
/// The track number is not affected by the interleave, only the position within the track.
pub fn offset_from_apex_block(block: usize,sector_map: &[usize]) -> usize {
    let [track,sector] = ts_from_apex_block(block,sector_map);
    (track * BLOCKS_PER_TRACK + sector) * BLOCK_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bios::skew;
    use std::collections::HashSet;

    fn dos_map() -> Vec<usize> {
        skew::logical_map(skew::Interleave::Pascal,skew::Interleave::Dos33).expect("bad table")
    }

    #[test]
    fn directory_and_storage_offsets() {
        let map = dos_map();
        assert_eq!(offset_from_apex_block(0,&map),0);
        assert_eq!(offset_from_apex_block(9,&map),6*256);
        assert_eq!(offset_from_apex_block(12,&map),3*256);
        assert_eq!(offset_from_apex_block(15,&map),15*256);
        assert_eq!(offset_from_apex_block(17,&map),30*256);
        assert_eq!(ts_from_apex_block(17,&map),[1,14]);
    }

    #[test]
    fn offsets_are_injective() {
        let map = dos_map();
        let mut seen: HashSet<usize> = HashSet::new();
        for block in 0..BLOCK_COUNT {
            let offset = offset_from_apex_block(block,&map);
            assert_eq!(offset % BLOCK_SIZE,0);
            assert!(offset < BLOCK_SIZE*BLOCK_COUNT);
            assert!(seen.insert(offset),"block {} collides at offset {}",block,offset);
        }
        assert_eq!(seen.len(),BLOCK_COUNT);
    }

    #[test]
    fn prodos_order_is_sequential() {
        let map = skew::logical_map(skew::Interleave::Pascal,skew::Interleave::Pascal).expect("bad table");
        for block in 0..BLOCK_COUNT {
            assert_eq!(offset_from_apex_block(block,&map),block*BLOCK_SIZE);
        }
    }
}
