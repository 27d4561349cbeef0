// Synthetic Apex disk images for the integration tests
#![allow(dead_code)]

use a2apex::bios::skew::{logical_map,Interleave};
use a2apex::bios::blocks::apex::{offset_from_apex_block,BLOCK_SIZE,BLOCK_COUNT};

pub struct Entry {
    pub slot: usize,
    pub name: &'static [u8;11],
    pub status: u8,
    pub first: u16,
    pub last: u16,
    pub date: u16
}

pub struct ImageBuilder {
    data: Vec<u8>,
    map: Vec<usize>,
    primary: Vec<u8>,
    backup: Vec<u8>
}

impl ImageBuilder {
    /// `image_order` is the order sectors are stored in the image, DOS 3.3 for a DO image
    pub fn new(image_order: Interleave) -> Self {
        Self {
            data: vec![0;BLOCK_SIZE*BLOCK_COUNT],
            map: logical_map(Interleave::Pascal,image_order).expect("bad skew"),
            primary: vec![0;1024],
            backup: vec![0;1024]
        }
    }
    pub fn block(&mut self,block: usize,dat: &[u8]) -> &mut Self {
        let offset = offset_from_apex_block(block,&self.map);
        self.data[offset..offset+dat.len()].copy_from_slice(dat);
        self
    }
    fn put_entry(dir: &mut Vec<u8>,e: &Entry) {
        let i = e.slot;
        dir[i*11..(i+1)*11].copy_from_slice(e.name);
        dir[528+i] = e.status;
        dir[576+2*i..578+2*i].copy_from_slice(&u16::to_le_bytes(e.first));
        dir[672+2*i..674+2*i].copy_from_slice(&u16::to_le_bytes(e.last));
        dir[920+2*i..922+2*i].copy_from_slice(&u16::to_le_bytes(e.date));
    }
    pub fn entry(&mut self,e: Entry) -> &mut Self {
        Self::put_entry(&mut self.primary,&e);
        self
    }
    pub fn backup_entry(&mut self,e: Entry) -> &mut Self {
        Self::put_entry(&mut self.backup,&e);
        self
    }
    pub fn volume(&mut self,title: &[u8],number: u16,date: u16) -> &mut Self {
        self.primary[856..856+title.len()].copy_from_slice(title);
        self.primary[916..918].copy_from_slice(&u16::to_le_bytes(number));
        self.primary[918..920].copy_from_slice(&u16::to_le_bytes(date));
        self
    }
    pub fn build(&mut self) -> Vec<u8> {
        let primary = self.primary.clone();
        let backup = self.backup.clone();
        for i in 0..4 {
            self.block(9+i,&primary[i*256..(i+1)*256]);
            self.block(13+i,&backup[i*256..(i+1)*256]);
        }
        self.data.clone()
    }
}

/// Binary data in block 17, the second block has an EOF marker that must be kept
pub fn rescod_blocks() -> (Vec<u8>,Vec<u8>) {
    let mut b17 = hex::decode("a9008d30c04c0008").expect("bad hex");
    b17.resize(256,0xea);
    let mut b18 = vec![0x1a;4];
    b18.resize(256,0x60);
    (b17,b18)
}

/// Standard test disk:
/// * slot 0 `HELLO   TXT` at block 30, "hi" then EOF
/// * slot 1 unused, but with a name
/// * slot 2 `RESCOD  SYS` at blocks 17-18, binary
/// * slot 3 `LONG    TXT` at blocks 20-21, EOF in the second block
/// * backup directory has only `OLD     TXT` at block 40
pub fn sample_image(image_order: Interleave) -> Vec<u8> {
    let (b17,b18) = rescod_blocks();
    ImageBuilder::new(image_order)
        .volume(b"APEX TEST",7,549)
        .entry(Entry { slot: 0, name: b"HELLO   TXT", status: 1, first: 30, last: 30, date: 0 })
        .entry(Entry { slot: 1, name: b"GHOST   TXT", status: 0, first: 25, last: 25, date: 0 })
        .entry(Entry { slot: 2, name: b"RESCOD  SYS", status: 0x80, first: 17, last: 18, date: 549 })
        .entry(Entry { slot: 3, name: b"LONG    TXT", status: 1, first: 20, last: 21, date: 549 })
        .backup_entry(Entry { slot: 0, name: b"OLD     TXT", status: 1, first: 40, last: 40, date: 549 })
        .block(30,b"hi\x1a")
        .block(25,b"boo")
        .block(17,&b17)
        .block(18,&b18)
        .block(20,&[b'A';256])
        .block(21,b"BC\x1aDEF")
        .block(40,b"old\x1a")
        .build()
}

pub const SAMPLE_CATALOG: &str = "filename     start  size  date     
------------ ----- ----- ----------
HELLO   .TXT    30     1 1976.00.00
RESCOD  .SYS    17     2 1977.01.05
LONG    .TXT    20     2 1977.01.05
";
