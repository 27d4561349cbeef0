//! # Disk Image Module
//! 
//! Disk images are represented by objects implementing the `DiskImage` trait.
//! The object type is usually named for the disk image type that it handles, e.g., `Dsk`.
//! 
//! ## Relation to File Systems
//! 
//! The `DiskImage` trait object serves as the underlying storage for `fs` modules.
//! The `fs` modules work by reading blocks from the disk image.
//! The task of mapping blocks to sectors happens in submodules of `img`, with
//! the aid of `bios::blocks`, but never with any help from `fs`.
//! 
//! ## Sector Skews
//! 
//! The actual skew tables are maintained separately in `bios::skew`.
//! An Apex block passes through two tables on its way into a DOS ordered image:
//! the Apex (Pascal) logical to physical table, and then the physical to DOS logical table.
//! The composed table is worked out once, when the image is created.

pub mod dsk;

use std::fmt;
use std::str::FromStr;
use crate::DYNERR;

/// Enumerates disk image errors.  The `Display` trait will print equivalent long message.
#[derive(thiserror::Error,Debug)]
pub enum Error {
    #[error("unknown image type")]
    UnknownImageType,
    #[error("image size did not match the request")]
    ImageSizeMismatch,
    #[error("block is beyond the end of the disk")]
    BlockRange
}

/// Enumerates the ways sectors can be ordered within a DSK image.
#[derive(PartialEq,Eq,Clone,Copy,Debug)]
pub enum DiskImageType {
    /// sectors in DOS 3.3 logical order
    DO,
    /// sectors in ProDOS (equivalently Pascal or Apex) logical order
    PO
}

impl FromStr for DiskImageType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self,Self::Err> {
        match s {
            "do" | "dsk" => Ok(Self::DO),
            "po" => Ok(Self::PO),
            _ => Err(Error::UnknownImageType)
        }
    }
}

impl fmt::Display for DiskImageType {
    fn fmt(&self,f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DO => write!(f,"do"),
            Self::PO => write!(f,"po")
        }
    }
}

/// The main trait for working with a disk image.
/// The corresponding trait object serves as storage for `DiskFS`.
/// Images are read-only, the bytes are fixed once the object is created.
pub trait DiskImage {
    /// Get the count of formatted tracks.
    fn track_count(&self) -> usize;
    /// Get the integrated storage capacity of the formatted tracks.
    fn byte_capacity(&self) -> usize;
    fn what_am_i(&self) -> DiskImageType;
    fn file_extensions(&self) -> Vec<String>;
    /// Find the file system block and return the data or an error.
    fn read_block(&self,block: usize) -> Result<Vec<u8>,DYNERR>;
    /// Get the image bytes exactly as they would be stored on the host.
    fn to_bytes(&self) -> Vec<u8>;
}
