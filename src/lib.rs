//! # `a2apex` main library
//! 
//! This library reads Apple II disk images that use the Apex file system, and
//! reconstitutes the files stored on them.
//! 
//! ## Architecture
//! 
//! Disk image operations are built around two trait objects:
//! * `img::DiskImage` maps logical blocks to positions in the image, does not try to interpret a file system
//! * `fs::DiskFS` imposes a file system on the blocks
//! 
//! When a `DiskFS` object is created it takes ownership of some `DiskImage`.
//! It then uses this owned image as storage.  Images are never modified.
//! 
//! ## Sector Skews
//! 
//! Apex numbers its blocks using the same 2:1 ascending interleave as the Pascal
//! file system, while most disk images store sectors in DOS 3.3 order.  The permutation
//! tables and the means of combining them are in `bios::skew`.
//! 
//! ## Disk Images
//! 
//! Only 35 track, 16 sector, 5.25 inch disks are supported, as sequential sector dumps
//! (DSK, DO, PO).  The image must be exactly 143360 bytes.

pub mod fs;
pub mod bios;
pub mod img;
pub mod commands;

use img::DiskImage;
use fs::DiskFS;
use std::io::Read;
use std::fmt::Write;
use std::str::FromStr;
use log::info;

pub type DYNERR = Box<dyn std::error::Error>;
pub type STDRESULT = Result<(),Box<dyn std::error::Error>>;

/// Given a bytestream return a disk image without any file system.
/// Optional `maybe_ext` selects the sector order, `po` means ProDOS order, anything else DOS 3.3 order.
/// N.b. the ordering cannot be determined from the data itself.
pub fn create_img_from_bytestream(disk_img_data: &[u8],maybe_ext: Option<&str>) -> Result<Box<dyn DiskImage>,DYNERR> {
    let ext = match maybe_ext {
        Some(x) => x.to_string().to_lowercase(),
        None => "".to_string()
    };
    let order = match img::DiskImageType::from_str(&ext) {
        Ok(typ) => typ,
        Err(_) => img::DiskImageType::DO
    };
    let img = img::dsk::Dsk::from_bytes(disk_img_data,order)?;
    info!("opened {} image, {} tracks, {} bytes",img.what_am_i(),img.track_count(),img.byte_capacity());
    Ok(Box::new(img))
}

/// Given a bytestream return a DiskFS, or Err if the bytestream cannot be interpreted.
/// Optional `maybe_ext` is used as in `create_img_from_bytestream`.
/// Apex has no signature to test for, so any image of the right size is accepted.
pub fn create_fs_from_bytestream(disk_img_data: &[u8],maybe_ext: Option<&str>) -> Result<Box<dyn DiskFS>,DYNERR> {
    let img = create_img_from_bytestream(disk_img_data,maybe_ext)?;
    Ok(Box::new(fs::apex::Disk::from_img(img)))
}

/// Calls `create_fs_from_bytestream` getting the bytes from stdin.
/// The image is assumed to be in DOS 3.3 order.
pub fn create_fs_from_stdin() -> Result<Box<dyn DiskFS>,DYNERR> {
    let mut disk_img_data = Vec::new();
    match std::io::stdin().read_to_end(&mut disk_img_data) {
        Ok(_n) => create_fs_from_bytestream(&disk_img_data,None),
        Err(e) => Err(Box::new(e))
    }
}

/// Calls `create_fs_from_bytestream` getting the bytes from a file.
/// The pathname must already be in the right format for the file system.
/// File extension will be used to select the sector order if it is known.
pub fn create_fs_from_file(img_path: &str) -> Result<Box<dyn DiskFS>,DYNERR> {
    match std::fs::read(img_path) {
        Ok(disk_img_data) => {
            let mut maybe_ext = img_path.split('.').last();
            if let Some(ext) = maybe_ext {
                if !img::dsk::file_extensions().contains(&ext.to_lowercase()) {
                    maybe_ext = None;
                }
            }
            create_fs_from_bytestream(&disk_img_data,maybe_ext)
        },
        Err(e) => Err(Box::new(e))
    }
}

/// Exit status for an error that ended the program.
/// Wrong image size gives 2, a bad permutation table gives 3, anything else 1.
pub fn exit_status(e: &DYNERR) -> u8 {
    if let Some(img::Error::ImageSizeMismatch) = e.downcast_ref::<img::Error>() {
        return 2;
    }
    if e.downcast_ref::<bios::Error>().is_some() {
        return 3;
    }
    1
}

/// Format bytes as rows of 16, giving the address, the hex values, the bytes as ascii,
/// and the bytes as ascii with the high bit stripped (the usual Apple II text).
/// Bytes that cannot be shown are replaced by `.`.
pub fn hex_dump(start_addr: usize,dat: &[u8]) -> String {
    let mut ans = String::new();
    for (row,chunk) in dat.chunks(16).enumerate() {
        let pad = 16 - chunk.len();
        let pos: String = chunk.iter().map(|b| match *b {
            x if x>=32 && x<127 => x as char,
            _ => '.'
        }).collect();
        let neg: String = chunk.iter().map(|b| match *b {
            x if x>=160 && x<255 => (x - 128) as char,
            _ => '.'
        }).collect();
        let _ = write!(&mut ans,"{:04X} : ",start_addr + 16*row);
        for b in chunk {
            let _ = write!(&mut ans,"{:02X} ",b);
        }
        ans += &"   ".repeat(pad);
        let _ = writeln!(&mut ans,"|+| {}{} |-| {}",pos," ".repeat(pad),neg);
    }
    ans
}

/// Display binary to stdout using `hex_dump`
pub fn display_block(start_addr: usize,block: &[u8]) {
    print!("{}",hex_dump(start_addr,block));
}

#[test]
fn exit_codes() {
    let e: DYNERR = Box::new(img::Error::ImageSizeMismatch);
    assert_eq!(exit_status(&e),2);
    let e: DYNERR = Box::new(bios::Error::PermutationDuplicate);
    assert_eq!(exit_status(&e),3);
    let e: DYNERR = Box::new(fs::apex::types::Error::NoFile);
    assert_eq!(exit_status(&e),1);
    let e: DYNERR = Box::new(std::io::Error::new(std::io::ErrorKind::NotFound,"missing"));
    assert_eq!(exit_status(&e),1);
}

#[test]
fn wrong_size_is_reported() {
    match create_fs_from_bytestream(&vec![0;143359],None) {
        Ok(_) => panic!("short image was accepted"),
        Err(e) => assert_eq!(exit_status(&e),2)
    }
}

#[test]
fn hex_rows() {
    let mut dat = b"HELLO".to_vec();
    dat.extend_from_slice(&[0xc8,0xc9,0x00,0xff]);
    dat.resize(20,0x41);
    let expected = [
        "0100 : 48 45 4C 4C 4F C8 C9 00 FF 41 41 41 41 41 41 41 |+| HELLO....AAAAAAA |-| .....HI.........\n".to_string(),
        format!("0110 : 41 41 41 41 {}|+| AAAA{} |-| ....\n"," ".repeat(36)," ".repeat(12))
    ].concat();
    assert_eq!(hex_dump(0x100,&dat),expected);
    assert_eq!(hex_dump(0,&[]),"");
}
