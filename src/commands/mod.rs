//! # CLI Subcommands
//! 
//! Contains modules that run the subcommands.
//! `catalog` and `tree` are simple enough to run directly from `main.rs`.

pub mod get;
pub mod extract;
pub mod dump;
pub mod completions;

use std::str::FromStr;
use log::info;
use crate::fs::{DiskFS,View,EntryOrder};
use crate::DYNERR;

#[derive(thiserror::Error,Debug)]
pub enum CommandError {
    #[error("Command could not be interpreted")]
    InvalidCommand,
    #[error("File not found")]
    FileNotFound
}

/// Kind of data returned by `DiskFS::read_file`.
/// For Apex this is inferred from the file name extension.
#[derive(PartialEq,Clone,Copy,Debug)]
pub enum ItemType {
    Binary,
    Text
}

/// Open the disk image named by `--dimg`, or read it from stdin if the option is absent,
/// then apply the directory view options that the subcommand supports.
pub fn open_disk(cmd: &clap::ArgMatches) -> Result<Box<dyn DiskFS>,DYNERR> {
    let mut disk = match cmd.get_one::<String>("dimg") {
        Some(path_to_img) => crate::create_fs_from_file(path_to_img)?,
        None => {
            if atty::is(atty::Stream::Stdin) {
                log::error!("no disk image, use `--dimg` or pipe the image in");
                return Err(Box::new(CommandError::InvalidCommand));
            }
            crate::create_fs_from_stdin()?
        }
    };
    let mut view = View::default();
    if let Ok(Some(backup)) = cmd.try_get_one::<bool>("backup") {
        view.backup = *backup;
    }
    if let Ok(Some(order)) = cmd.try_get_one::<String>("sort") {
        view.order = EntryOrder::from_str(order)?;
    }
    if view != View::default() {
        info!("using {:?}",view);
    }
    disk.set_view(view);
    Ok(disk)
}
