use clap;
use crate::STDRESULT;

/// Hex dump of a single logical block, the row labels give the byte offset within the block
pub fn dump(cmd: &clap::ArgMatches) -> STDRESULT {
    let block = match cmd.get_one::<String>("block") {
        Some(b) => b,
        None => return Err(Box::new(super::CommandError::InvalidCommand))
    };
    let mut disk = super::open_disk(cmd)?;
    let (start_addr,buf) = disk.read_block(block)?;
    crate::display_block(start_addr as usize,&buf);
    Ok(())
}
