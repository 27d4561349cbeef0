//! # Submodule with Apex directory elements
//!
//! The Apex directory occupies 4 blocks, and rather than packing each file's record
//! together, it keeps parallel arrays, one for each field.  We read the whole thing as a
//! fixed little-endian structure using `binrw`, and then gather the fields of each slot
//! into a `DirectoryEntry`.

use binrw::BinRead;
use binrw::io::Cursor;
use log::trace;
use crate::DYNERR;
use super::types::*;

/// Raw directory, as found on disk
#[derive(BinRead,Debug,Clone)]
#[br(little)]
pub struct Directory {
    pub names: [[u8;NAME_LEN];FILES_PER_DIR],
    /// 0 = unused, <128 closed, >127 tentative
    pub status: [u8;FILES_PER_DIR],
    pub first_block: [u16;FILES_PER_DIR],
    pub last_block: [u16;FILES_PER_DIR],
    pub reserved: [u8;74],
    pub prdev: u8,
    pub pmaxb: u16,
    pub prname: [u8;NAME_LEN],
    pub title: [u8;60],
    pub volume: u16,
    pub dir_date: u16,
    pub file_date: [u16;FILES_PER_DIR],
    pub flags: [u8;8]
}

/// One slot of the directory with all its fields gathered
#[derive(Clone,Copy,Debug)]
pub struct DirectoryEntry {
    pub slot: usize,
    pub name: [u8;NAME_LEN],
    pub status: u8,
    pub first_block: u16,
    pub last_block: u16,
    pub date: Date
}

/// Bytes map one to one onto characters, there is no encoding.
/// Bytes above 0x7F become the Latin-1 character of the same value, so a host file name
/// will hold the UTF-8 encoding of that character rather than the raw byte.
fn bytes_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| *b as char).collect()
}

impl Directory {
    /// Interpret the concatenated directory blocks
    pub fn from_bytes(dat: &[u8]) -> Result<Self,DYNERR> {
        let mut curs = Cursor::new(dat);
        Ok(Self::read(&mut curs)?)
    }
    /// The slot has a file in it
    pub fn is_active(&self,slot: usize) -> bool {
        self.status[slot] != 0
    }
    /// Get the fields of one slot, whether in use or not
    pub fn entry(&self,slot: usize) -> DirectoryEntry {
        DirectoryEntry {
            slot,
            name: self.names[slot],
            status: self.status[slot],
            first_block: self.first_block[slot],
            last_block: self.last_block[slot],
            date: Date::unpack(self.file_date[slot])
        }
    }
    /// Get all slots that are in use, in slot order
    pub fn entries(&self) -> Vec<DirectoryEntry> {
        let mut ans = Vec::new();
        for slot in 0..FILES_PER_DIR {
            if self.is_active(slot) {
                trace!("slot {} status {:02X}",slot,self.status[slot]);
                ans.push(self.entry(slot));
            }
        }
        ans
    }
    /// Volume title with trailing blanks and nulls removed
    pub fn title(&self) -> String {
        bytes_to_string(&self.title).trim_end_matches(|c: char| c==' ' || c=='\0').to_string()
    }
    pub fn prname(&self) -> String {
        bytes_to_string(&self.prname).trim_end_matches(|c: char| c==' ' || c=='\0').to_string()
    }
}

impl DirectoryEntry {
    /// Name as shown in listings, base and extension joined by a dot, padding included
    pub fn name(&self) -> String {
        bytes_to_string(&self.name[0..BASE_LEN]) + "." + &bytes_to_string(&self.name[BASE_LEN..NAME_LEN])
    }
    /// Name to use on the host, lower case with the padding removed
    pub fn host_name(&self) -> String {
        self.name().to_ascii_lowercase().replace(' ',"")
    }
    /// Blocks spanned by the file, can be 0 or negative on a damaged disk
    pub fn size(&self) -> i32 {
        self.last_block as i32 - self.first_block as i32 + 1
    }
    pub fn class(&self) -> FileClass {
        FileClass::from_name(&self.host_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put_entry(dat: &mut [u8],slot: usize,name: &[u8;NAME_LEN],status: u8,first: u16,last: u16,date: u16) {
        dat[slot*NAME_LEN..(slot+1)*NAME_LEN].copy_from_slice(name);
        dat[528+slot] = status;
        dat[576+2*slot..578+2*slot].copy_from_slice(&u16::to_le_bytes(first));
        dat[672+2*slot..674+2*slot].copy_from_slice(&u16::to_le_bytes(last));
        dat[920+2*slot..922+2*slot].copy_from_slice(&u16::to_le_bytes(date));
    }

    #[test]
    fn layout() {
        let mut dat = vec![0;DIR_SIZE];
        put_entry(&mut dat,0,b"RESCOD  SYS",1,17,25,549);
        put_entry(&mut dat,1,b"GHOST   TXT",0,30,31,0);
        put_entry(&mut dat,47,b"HELLO   TXT",0x80,40,40,0);
        dat[856..862].copy_from_slice(b"SYSTEM");
        dat[916..918].copy_from_slice(&u16::to_le_bytes(254));
        dat[918..920].copy_from_slice(&u16::to_le_bytes(549));
        dat[1016] = 0xaa;
        let dir = Directory::from_bytes(&dat).expect("could not parse");
        let entries = dir.entries();
        assert_eq!(entries.len(),2);
        assert_eq!(entries[0].slot,0);
        assert_eq!(entries[0].name(),"RESCOD  .SYS");
        assert_eq!(entries[0].host_name(),"rescod.sys");
        assert_eq!(entries[0].class(),FileClass::Binary);
        assert_eq!(entries[0].size(),9);
        assert_eq!(entries[0].date.to_string(),"1977.01.05");
        assert_eq!(entries[1].slot,47);
        assert_eq!(entries[1].class(),FileClass::Text);
        assert_eq!(dir.title(),"SYSTEM");
        assert_eq!(dir.volume,254);
        assert_eq!(Date::unpack(dir.dir_date).to_string(),"1977.01.05");
        assert_eq!(dir.flags[0],0xaa);
    }

    #[test]
    fn malformed_size() {
        let mut dat = vec![0;DIR_SIZE];
        put_entry(&mut dat,3,b"BROKEN  TXT",1,40,38,0);
        let dir = Directory::from_bytes(&dat).expect("could not parse");
        assert_eq!(dir.entries()[0].size(),-1);
    }

    #[test]
    fn high_bytes_in_names() {
        let mut dat = vec![0;DIR_SIZE];
        put_entry(&mut dat,0,b"CAF\xc9    TXT",1,20,20,0);
        let dir = Directory::from_bytes(&dat).expect("could not parse");
        let entry = dir.entries()[0];
        assert_eq!(entry.name(),"CAF\u{c9}    .TXT");
        assert_eq!(entry.host_name(),"caf\u{c9}.txt");
        assert_eq!(entry.host_name().len(),9);
    }

    #[test]
    fn short_directory() {
        assert!(Directory::from_bytes(&vec![0;DIR_SIZE-1]).is_err());
    }
}
