//! ## Support for DSK images (DSK,DO,PO)
//!
//! DSK images are a simple sequential dump of the already-decoded sector data.
//! If the sector sequence is ordered as in DOS 3.3, we have a DO variant, if it
//! is ordered as in ProDOS we have a PO variant.  Apex disks are almost always
//! found as DO images, since that is what most imaging tools produce for 16 sector disks.
//! N.b. the ordering cannot be verified from the image itself.

use log::{trace,debug,error};
use crate::img;
use crate::bios::skew;
use crate::bios::blocks::apex;
use crate::DYNERR;

const SECTOR_SIZE: usize = apex::BLOCK_SIZE;
const SECTORS: usize = apex::BLOCKS_PER_TRACK;
const TRACKS: usize = 35;

pub fn file_extensions() -> Vec<String> {
    vec!["dsk".to_string(),"do".to_string(),"po".to_string()]
}

/// Wrapper for DSK data.
pub struct Dsk {
    order: img::DiskImageType,
    sector_map: Vec<usize>,
    data: Vec<u8>
}

impl Dsk {
    /// Create the image from bytes, with sectors in the given `order`.
    /// Anything other than a 35 track, 16 sector disk is refused before any further work is done.
    pub fn from_bytes(data: &[u8],order: img::DiskImageType) -> Result<Self,DYNERR> {
        if data.len() != TRACKS*SECTORS*SECTOR_SIZE {
            error!("wrong image size, expected {}, got {}",TRACKS*SECTORS*SECTOR_SIZE,data.len());
            return Err(Box::new(img::Error::ImageSizeMismatch));
        }
        let image_interleave = match order {
            img::DiskImageType::DO => skew::Interleave::Dos33,
            img::DiskImageType::PO => skew::Interleave::Pascal
        };
        let sector_map = skew::logical_map(skew::Interleave::Pascal,image_interleave)?;
        debug!("{} image, sector map {:?}",order,sector_map);
        Ok(Self {
            order,
            sector_map,
            data: data.to_vec()
        })
    }
    /// Byte offset of an Apex block within the image.
    /// Block numbers beyond the disk are a caller error, use `read_block` for a checked access.
    pub fn block_offset(&self,block: usize) -> usize {
        apex::offset_from_apex_block(block,&self.sector_map)
    }
}

impl img::DiskImage for Dsk {
    fn track_count(&self) -> usize {
        TRACKS
    }
    fn byte_capacity(&self) -> usize {
        self.data.len()
    }
    fn what_am_i(&self) -> img::DiskImageType {
        self.order
    }
    fn file_extensions(&self) -> Vec<String> {
        file_extensions()
    }
    fn read_block(&self,block: usize) -> Result<Vec<u8>,DYNERR> {
        if block >= apex::BLOCK_COUNT {
            error!("block {} is beyond the end of the disk",block);
            return Err(Box::new(img::Error::BlockRange));
        }
        let offset = self.block_offset(block);
        trace!("read block {} at offset {}",block,offset);
        Ok(self.data[offset..offset+SECTOR_SIZE].to_vec())
    }
    fn to_bytes(&self) -> Vec<u8> {
        self.data.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::img::DiskImage;

    #[test]
    fn size_is_checked() {
        let short = vec![0;TRACKS*SECTORS*SECTOR_SIZE-1];
        match Dsk::from_bytes(&short,img::DiskImageType::DO) {
            Ok(_) => panic!("short image was accepted"),
            Err(e) => assert!(matches!(e.downcast_ref::<img::Error>(),Some(img::Error::ImageSizeMismatch)))
        }
        let long = vec![0;TRACKS*SECTORS*SECTOR_SIZE+1];
        assert!(Dsk::from_bytes(&long,img::DiskImageType::PO).is_err());
    }

    #[test]
    fn read_tagged_blocks() {
        // tag each sector of the image with its position
        let mut data = vec![0;TRACKS*SECTORS*SECTOR_SIZE];
        for i in 0..TRACKS*SECTORS {
            data[i*SECTOR_SIZE] = (i % 256) as u8;
            data[i*SECTOR_SIZE+1] = (i / 256) as u8;
        }
        let img = Dsk::from_bytes(&data,img::DiskImageType::DO).expect("bad image");
        assert_eq!(img.read_block(9).expect("read failed")[0..2],[6,0]);
        assert_eq!(img.read_block(17).expect("read failed")[0..2],[30,0]);
        assert_eq!(img.read_block(559).expect("read failed")[0..2],[47,2]);
        assert!(img.read_block(560).is_err());
        let img = Dsk::from_bytes(&data,img::DiskImageType::PO).expect("bad image");
        assert_eq!(img.read_block(17).expect("read failed")[0..2],[17,0]);
        assert_eq!(img.to_bytes(),data);
    }
}
