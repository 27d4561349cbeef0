//! # File System Module
//!
//! File system modules handle interactions with directories and files.  There is a sub-module for
//! each supported file system, at present only Apex.
//!
//! File systems are represented by the `DiskFS` trait.  The trait object takes ownership of
//! some disk image, which it uses as storage.  The disk image is never modified, the file system
//! only reads blocks and hands file data back to the caller, or writes it to the host.
//!
//! Sector skews are not handled here.  Transformation of a block number to a position in the
//! disk image is handled within the `img` module, with the tables kept in the `bios` module.

pub mod apex;

use std::path::Path;
use std::str::FromStr;
use crate::commands::ItemType;
use crate::{STDRESULT,DYNERR};

/// Enumerates file system errors.  The `Display` trait will print equivalent long message.
#[derive(thiserror::Error,Debug)]
pub enum Error {
    #[error("unknown ordering of directory entries")]
    UnknownOrder
}

/// Order in which directory entries are listed and extracted.
#[derive(PartialEq,Eq,Clone,Copy,Debug,Default)]
pub enum EntryOrder {
    /// order of the directory slots
    #[default]
    Slot,
    /// ascending starting block, slot order breaks ties
    Start
}

impl FromStr for EntryOrder {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self,Self::Err> {
        match s {
            "slot" => Ok(Self::Slot),
            "start" => Ok(Self::Start),
            _ => Err(Error::UnknownOrder)
        }
    }
}

/// Selects the copy of the directory and the order of its entries.
/// The default is the primary directory in slot order.
#[derive(PartialEq,Eq,Clone,Copy,Debug,Default)]
pub struct View {
    pub backup: bool,
    pub order: EntryOrder
}

/// Abstract file system interface.  Presumed to own an underlying DiskImage.
/// Disk images are only read, so nothing here needs to be saved afterwards.
pub trait DiskFS {
    /// Select the directory copy and ordering used by the other operations
    fn set_view(&mut self,view: View);
    /// List all the files on disk to standard output
    fn catalog_to_stdout(&mut self) -> STDRESULT;
    /// Get the directory, including volume information, as a JSON string
    fn tree(&mut self,indent: Option<u16>) -> Result<String,DYNERR>;
    /// Read a file from the disk, `name` can be given as in the catalog or as on the host.
    /// Returns (type,data), where text files are already cut at the EOF marker.
    fn read_file(&mut self,name: &str) -> Result<(ItemType,Vec<u8>),DYNERR>;
    /// Write every file on the disk into the host directory `dest`.
    /// Returns the host names of the files written, in the order they were written.
    fn extract(&mut self,dest: &Path) -> Result<Vec<String>,DYNERR>;
    /// Get a native file system allocation unit
    fn read_block(&mut self,num: &str) -> Result<(u16,Vec<u8>),DYNERR>;
}
