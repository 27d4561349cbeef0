use clap;
use std::io::Write;
use log::info;
use super::ItemType;
use crate::STDRESULT;

/// Write one file to stdout.  If stdout is the console, binary files are shown as a hex dump.
pub fn get(cmd: &clap::ArgMatches) -> STDRESULT {
    let src_name = match cmd.get_one::<String>("file") {
        Some(name) => name,
        None => return Err(Box::new(super::CommandError::InvalidCommand))
    };
    let mut disk = super::open_disk(cmd)?;
    let (typ,object) = disk.read_file(src_name)?;
    info!("{} has {} bytes",src_name,object.len());
    if atty::is(atty::Stream::Stdout) && typ==ItemType::Binary {
        crate::display_block(0,&object);
    } else {
        std::io::stdout().write_all(&object)?;
    }
    Ok(())
}
