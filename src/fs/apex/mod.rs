//! ## Apex file system module
//!
//! Apex is a 6502 operating system whose disks hold a single flat directory of up to 48
//! files, each stored in a contiguous run of 256 byte blocks.  This module reads the
//! directory and reconstitutes files so they can be written to the host.
//!
//! Disk blocks are laid out as follows:
//! * 0-8 boot
//! * 9-12 primary directory
//! * 13-16 backup directory
//! * 17 onward file storage, starting with the resident code (RESCOD.SYS)
//!
//! There is no record of the exact length of a file.  Text files end at the first Ctrl-Z,
//! binary files are taken to fill all their blocks.  Whether a file is binary is inferred
//! from the extension.

pub mod types;
pub mod directory;

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;
use log::{trace,debug,info,warn,error};
use types::*;
use directory::*;
use super::{View,EntryOrder};
use crate::img;
use crate::commands::ItemType;
use crate::{STDRESULT,DYNERR};

const CATALOG_HEADER: [&str;2] = [
    "filename     start  size  date     ",
    "------------ ----- ----- ----------"
];

/// Load directory structure from a borrowed disk image.
/// Apex has no signature, any 1024 bytes are taken as a directory.
fn get_directory(img: &Box<dyn img::DiskImage>,backup: bool) -> Result<Directory,DYNERR> {
    let blocks = match backup {
        true => BACKUP_DIR_BLOCKS,
        false => PRIMARY_DIR_BLOCKS
    };
    // gather up all the directory blocks in a contiguous buffer, since the
    // parallel arrays cross block boundaries.
    let mut buf: Vec<u8> = Vec::new();
    for iblock in blocks {
        let mut temp = img.read_block(iblock)?;
        buf.append(&mut temp);
    }
    Directory::from_bytes(&buf)
}

/// Host names are joined to the output directory, so they must not be able to leave it.
fn is_host_name_valid(s: &str) -> bool {
    if s.is_empty() || s=="." || s==".." {
        return false;
    }
    for c in s.chars() {
        if c=='/' || c=='\\' || c=='\0' {
            debug!("bad host name character codepoint {}",c as u32);
            return false;
        }
    }
    true
}

/// Put a name in the form used on the host, accepts names as they appear in the catalog
fn normalize_name(s: &str) -> String {
    s.to_ascii_lowercase().replace(' ',"")
}

/// The primary interface for disk operations.
pub struct Disk {
    img: Box<dyn img::DiskImage>,
    view: View
}

impl Disk {
    /// Create a disk file system using the given image as storage.
    /// The DiskFS takes ownership of the image.
    pub fn from_img(img: Box<dyn img::DiskImage>) -> Self {
        Self {
            img,
            view: View::default()
        }
    }
    fn get_directory(&self) -> Result<Directory,DYNERR> {
        get_directory(&self.img,self.view.backup)
    }
    /// Get the active directory entries, ordered according to the view
    pub fn entries(&self) -> Result<Vec<DirectoryEntry>,DYNERR> {
        let mut ans = self.get_directory()?.entries();
        if self.view.order==EntryOrder::Start {
            // stable, so slot order is kept among equal starts
            ans.sort_by_key(|entry| entry.first_block);
        }
        Ok(ans)
    }
    /// Catalog as a string, two header lines followed by one line per file
    pub fn catalog(&self) -> Result<String,DYNERR> {
        let mut ans = String::new();
        for line in CATALOG_HEADER {
            ans += line;
            ans += "\n";
        }
        for entry in self.entries()? {
            ans += &format!("{:>11} {:>5} {:>5} {}\n",entry.name(),entry.first_block,entry.size(),entry.date);
        }
        Ok(ans)
    }
    /// Gather the blocks of a file.  Text files stop short of the first EOF marker,
    /// binary files are kept whole.
    pub fn reconstitute(&self,entry: &DirectoryEntry) -> Result<Vec<u8>,DYNERR> {
        let class = entry.class();
        let mut ans: Vec<u8> = Vec::new();
        if entry.size() < 1 {
            warn!("{} has no blocks, first {} last {}",entry.name(),entry.first_block,entry.last_block);
            return Ok(ans);
        }
        let beg = entry.first_block as usize;
        let end = entry.last_block as usize + 1;
        if end > BLOCK_COUNT {
            error!("{} runs from block {} to {}, past the end of the disk",entry.name(),beg,end-1);
            return Err(Box::new(Error::BlockRange));
        }
        debug!("reading {} as {}, blocks {} to {}",entry.name(),class,beg,end-1);
        for iblock in beg..end {
            let buf = self.img.read_block(iblock)?;
            if class==FileClass::Text {
                if let Some(eof) = buf.iter().position(|x| *x==EOF_MARKER) {
                    trace!("EOF in block {} at byte {}",iblock,eof);
                    ans.extend_from_slice(&buf[0..eof]);
                    return Ok(ans);
                }
            }
            ans.extend_from_slice(&buf);
        }
        Ok(ans)
    }
    /// Find the first entry matching the name, in the order of the view
    fn get_file_entry(&self,name: &str) -> Result<Option<DirectoryEntry>,DYNERR> {
        let key = normalize_name(name);
        for entry in self.entries()? {
            if entry.host_name()==key {
                return Ok(Some(entry));
            }
        }
        Ok(None)
    }
}

impl super::DiskFS for Disk {
    fn set_view(&mut self,view: View) {
        debug!("directory view {:?}",view);
        self.view = view;
    }
    fn catalog_to_stdout(&mut self) -> STDRESULT {
        print!("{}",self.catalog()?);
        Ok(())
    }
    fn tree(&mut self,indent: Option<u16>) -> Result<String,DYNERR> {
        let dir = self.get_directory()?;
        let mut root = json::JsonValue::new_object();
        root["file_system"] = json::JsonValue::String("apex".to_string());
        root["image"] = json::JsonValue::String(self.img.what_am_i().to_string());
        root["directory"] = json::JsonValue::String(match self.view.backup {
            true => "backup".to_string(),
            false => "primary".to_string()
        });
        root["volume"] = json::JsonValue::new_object();
        root["volume"]["title"] = json::JsonValue::String(dir.title());
        root["volume"]["number"] = json::JsonValue::Number(dir.volume.into());
        root["volume"]["date"] = json::JsonValue::String(Date::unpack(dir.dir_date).to_string());
        root["volume"]["prdev"] = json::JsonValue::Number(dir.prdev.into());
        root["volume"]["pmaxb"] = json::JsonValue::Number(dir.pmaxb.into());
        root["volume"]["prname"] = json::JsonValue::String(dir.prname());
        let mut files = json::JsonValue::new_array();
        for entry in self.entries()? {
            let mut obj = json::JsonValue::new_object();
            obj["slot"] = json::JsonValue::Number(entry.slot.into());
            obj["name"] = json::JsonValue::String(entry.name());
            obj["host_name"] = json::JsonValue::String(entry.host_name());
            obj["class"] = json::JsonValue::String(entry.class().to_string());
            obj["first_block"] = json::JsonValue::Number(entry.first_block.into());
            obj["last_block"] = json::JsonValue::Number(entry.last_block.into());
            obj["size"] = json::JsonValue::Number(entry.size().into());
            obj["date"] = json::JsonValue::String(entry.date.to_string());
            files.push(obj)?;
        }
        root["files"] = files;
        if let Some(spaces) = indent {
            Ok(json::stringify_pretty(root,spaces))
        } else {
            Ok(json::stringify(root))
        }
    }
    fn read_file(&mut self,name: &str) -> Result<(ItemType,Vec<u8>),DYNERR> {
        match self.get_file_entry(name)? {
            Some(entry) => {
                let typ = match entry.class() {
                    FileClass::Text => ItemType::Text,
                    FileClass::Binary => ItemType::Binary
                };
                Ok((typ,self.reconstitute(&entry)?))
            },
            None => {
                error!("{} not found",name);
                Err(Box::new(Error::NoFile))
            }
        }
    }
    fn extract(&mut self,dest: &Path) -> Result<Vec<String>,DYNERR> {
        let mut ans: Vec<String> = Vec::new();
        let mut written: HashSet<String> = HashSet::new();
        for entry in self.entries()? {
            let host_name = entry.host_name();
            if !is_host_name_valid(&host_name) {
                error!("slot {}: {}, skipping `{}`",entry.slot,Error::BadTitle,host_name);
                continue;
            }
            let dat = match self.reconstitute(&entry) {
                Ok(dat) => dat,
                Err(e) => {
                    error!("slot {}: {}, skipping `{}`",entry.slot,e,host_name);
                    continue;
                }
            };
            if !written.insert(host_name.clone()) {
                warn!("`{}` appears more than once, the earlier file is overwritten",host_name);
            }
            std::fs::write(dest.join(&host_name),&dat)?;
            info!("wrote {} ({} bytes, {})",host_name,dat.len(),entry.class());
            ans.push(host_name);
        }
        Ok(ans)
    }
    fn read_block(&mut self,num: &str) -> Result<(u16,Vec<u8>),DYNERR> {
        match usize::from_str(num) {
            Ok(block) => {
                match self.img.read_block(block) {
                    Ok(buf) => Ok((0,buf)),
                    Err(e) => Err(e)
                }
            },
            Err(e) => Err(Box::new(e))
        }
    }
}
