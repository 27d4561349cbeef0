//! ## Sector Skewing Module
//!
//! This contains the sector skew tables for 16 sector 5.25 inch disks, and the
//! permutation arithmetic needed to move between them.
//!
//! A skew table maps a logical sector (the index) to a physical sector (the value).
//! The tables are kept as literal constants because they record the choices made by
//! each operating system, they do not follow from a formula.
//!
//! The Apex file system uses the same 2:1 ascending interleave as Apple Pascal.
//! A DSK image, on the other hand, is usually a dump of sectors in DOS 3.3 logical order.
//! In order to find an Apex sector in such an image we go from Apex logical sector to
//! physical sector, and then from physical sector to DOS logical sector, i.e., the
//! image position is obtained by composing one table with the inverse of another.

use std::fmt;
use log::{trace,debug,error};
use super::Error;

/// Number of sectors on a track for all the interleaves in this module
pub const SECTORS_PER_TRACK: usize = 16;

/// Translate DOS 3.3 logical sector to physical sector (2:1 descending)
pub const DOS_LSEC_TO_PSEC: [usize;16] = [0,13,11,9,7,5,3,1,14,12,10,8,6,4,2,15];
/// Translate Pascal (and Apex) logical sector to physical sector (2:1 ascending)
pub const PASCAL_LSEC_TO_PSEC: [usize;16] = [0,2,4,6,8,10,12,14,1,3,5,7,9,11,13,15];
/// Translate CP/M logical sector to physical sector (3:1 ascending)
pub const CPM_LSEC_TO_PSEC: [usize;16] = [0,3,6,9,12,15,2,5,8,11,14,1,4,7,10,13];

/// Invert a permutation table.
/// Fails if any element is out of range, or if any element is repeated, since then
/// the table is not a bijection.
pub fn invert(table: &[usize]) -> Result<Vec<usize>,Error> {
    let mut ans: Vec<Option<usize>> = vec![None;table.len()];
    for i in 0..table.len() {
        if table[i] >= table.len() {
            error!("skew table element {} is {}, but table length is {}",i,table[i],table.len());
            return Err(Error::PermutationRange);
        }
        if ans[table[i]].is_some() {
            error!("skew table value {} appears more than once",table[i]);
            return Err(Error::PermutationDuplicate);
        }
        ans[table[i]] = Some(i);
    }
    // every slot is filled once the checks above pass
    Ok(ans.into_iter().flatten().collect())
}

/// Compose two permutation tables, the result applies `table1` and then `table2`,
/// i.e., `ans[i] = table2[table1[i]]`.
pub fn compose(table1: &[usize],table2: &[usize]) -> Result<Vec<usize>,Error> {
    if table1.len() != table2.len() {
        error!("cannot compose skew tables with lengths {} and {}",table1.len(),table2.len());
        return Err(Error::PermutationLength);
    }
    let mut ans: Vec<usize> = Vec::with_capacity(table1.len());
    for i in 0..table1.len() {
        match table2.get(table1[i]) {
            Some(x) => ans.push(*x),
            None => {
                error!("skew table element {} is {}, out of range",i,table1[i]);
                return Err(Error::PermutationRange);
            }
        }
    }
    Ok(ans)
}

/// Enumerates the known sector interleaves of 16 sector disks.
#[derive(PartialEq,Eq,Clone,Copy,Debug)]
pub enum Interleave {
    /// DOS 3.3, 2:1 descending
    Dos33,
    /// Apple Pascal, ProDOS, and Apex, 2:1 ascending
    Pascal,
    /// CP/M, 3:1 ascending
    Cpm
}

impl Interleave {
    /// Table taking logical sectors to physical sectors
    pub fn to_phys(&self) -> &'static [usize;SECTORS_PER_TRACK] {
        match self {
            Self::Dos33 => &DOS_LSEC_TO_PSEC,
            Self::Pascal => &PASCAL_LSEC_TO_PSEC,
            Self::Cpm => &CPM_LSEC_TO_PSEC
        }
    }
    /// Table taking physical sectors to logical sectors
    pub fn from_phys(&self) -> Result<Vec<usize>,Error> {
        invert(self.to_phys())
    }
}

impl fmt::Display for Interleave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dos33 => write!(f,"DOS 3.3 (2:1 descending)"),
            Self::Pascal => write!(f,"Pascal (2:1 ascending)"),
            Self::Cpm => write!(f,"CP/M (3:1 ascending)")
        }
    }
}

/// Table taking a `source` logical sector to the `target` logical sector that occupies
/// the same physical sector.  If an image stores sectors in `target` order, this is how
/// we find a `source` sector in the image.
pub fn logical_map(source: Interleave,target: Interleave) -> Result<Vec<usize>,Error> {
    debug!("mapping {} sectors onto {} sectors",source,target);
    let ans = compose(source.to_phys(),&target.from_phys()?)?;
    trace!("sector map {:?}",ans);
    Ok(ans)
}
