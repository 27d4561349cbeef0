//! # BIOS module
//! 
//! This module is a place for any middleware we may require
//! between the `fs` and `img` modules.  It is named in analogy
//! with the CP/M concept of a BIOS as being (in part) a layer between
//! the BDOS and the physical disk.
//! 
//! All the sector skewing tables are kept in this module, along with the
//! arithmetic that locates a file system block within a disk image.

pub mod skew;
pub mod blocks;

/// Enumerates BIOS errors.  The `Display` trait will print equivalent long message.
#[derive(thiserror::Error,Debug)]
pub enum Error {
    #[error("skew table element out of range")]
    PermutationRange,
    #[error("skew table elements not unique")]
    PermutationDuplicate,
    #[error("skew tables not the same length")]
    PermutationLength
}
