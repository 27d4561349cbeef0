//! # Block Locators
//! 
//! Each submodule takes the allocation unit of some file system and locates it
//! within the sector data of a disk image.

pub mod apex;
