use std::fmt;

pub use crate::bios::blocks::apex::{BLOCK_SIZE,BLOCK_COUNT};

/// Most files a directory can hold
pub const FILES_PER_DIR: usize = 48;
/// Bytes in a raw file name, 8 for the base and 3 for the extension
pub const NAME_LEN: usize = 11;
pub const BASE_LEN: usize = 8;
/// Blocks holding the primary directory
pub const PRIMARY_DIR_BLOCKS: [usize;4] = [9,10,11,12];
/// Blocks holding the backup directory
pub const BACKUP_DIR_BLOCKS: [usize;4] = [13,14,15,16];
/// Bytes in the directory, i.e., 4 blocks
pub const DIR_SIZE: usize = 1024;
/// Year that corresponds to a packed year field of 0
pub const EPOCH_YEAR: u16 = 1976;
/// Ctrl-Z marks the end of a text file
pub const EOF_MARKER: u8 = 0x1a;
/// Host file name extensions that mark binary files, anything else is text
pub const BINARY_EXTENSIONS: [&str;5] = [".bin",".i2l",".obj",".sav",".sys"];

/// Enumerates Apex errors.  The `Display` trait will print the long message.
#[derive(thiserror::Error,Debug)]
pub enum Error {
    #[error("no file")]
    NoFile,
    #[error("file name cannot be used on the host")]
    BadTitle,
    #[error("file extends beyond the end of the disk")]
    BlockRange
}

/// Classes of files, as inferred from the extension.
/// The class decides whether an EOF marker ends the file.
#[derive(PartialEq,Eq,Clone,Copy,Debug)]
pub enum FileClass {
    Text,
    Binary
}

impl FileClass {
    /// Classify a file using its host name (or any name, case is ignored)
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        match BINARY_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            true => Self::Binary,
            false => Self::Text
        }
    }
}

impl fmt::Display for FileClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f,"text"),
            Self::Binary => write!(f,"binary")
        }
    }
}

/// Date as packed into 16 bits by Apex, counting years from 1976.
/// Fields are kept exactly as found, there is no check that the date exists on the calendar.
#[derive(PartialEq,Eq,Clone,Copy,Debug)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8
}

impl Date {
    pub fn unpack(packed: u16) -> Self {
        Self {
            year: EPOCH_YEAR + (packed >> 9),
            month: ((packed >> 5) & 15) as u8,
            day: (packed & 31) as u8
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,"{:04}.{:02}.{:02}",self.year,self.month,self.day)
    }
}

#[test]
fn unpack_dates() {
    assert_eq!(Date::unpack(0).to_string(),"1976.00.00");
    assert_eq!(Date::unpack(549).to_string(),"1977.01.05");
    // out of range fields pass through
    let odd = Date::unpack((3 << 9) + (15 << 5) + 31);
    assert_eq!((odd.year,odd.month,odd.day),(1979,15,31));
    assert_eq!(Date::unpack(0xffff).year,1976+127);
}

#[test]
fn classify() {
    assert_eq!(FileClass::from_name("rescod.sys"),FileClass::Binary);
    assert_eq!(FileClass::from_name("PROG.BIN"),FileClass::Binary);
    assert_eq!(FileClass::from_name("a.i2l"),FileClass::Binary);
    assert_eq!(FileClass::from_name("game.sav"),FileClass::Binary);
    assert_eq!(FileClass::from_name("lib.obj"),FileClass::Binary);
    assert_eq!(FileClass::from_name("hello.txt"),FileClass::Text);
    assert_eq!(FileClass::from_name("data.pdq"),FileClass::Text);
    assert_eq!(FileClass::from_name("bin"),FileClass::Text);
}
