use clap;
use std::path::Path;
use log::{info,error};
use super::CommandError;
use crate::STDRESULT;

/// Print the catalog, then write every file into the output directory, listing each as it goes.
pub fn extract(cmd: &clap::ArgMatches) -> STDRESULT {
    let dest = match cmd.get_one::<String>("output") {
        Some(dir) => Path::new(dir),
        None => Path::new(".")
    };
    if !dest.is_dir() {
        error!("output directory {} does not exist",dest.display());
        return Err(Box::new(CommandError::FileNotFound));
    }
    let mut disk = super::open_disk(cmd)?;
    disk.catalog_to_stdout()?;
    let written = disk.extract(dest)?;
    for name in &written {
        println!("{}",name);
    }
    info!("extracted {} files to {}",written.len(),dest.display());
    Ok(())
}
