//! Directory listing entries.

use bitflags::bitflags;

/// Longest entry name, in bytes.
pub const MAX_NAME_LEN: usize = 31;

bitflags! {
    /// Attributes of a listing entry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct EntryFlags: u8 {
        /// Entry is a directory.
        const DIRECTORY = 1 << 0;
    }
}

/// One read-only entry of a static directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DirEntry {
    name: &'static str,
    size: u32,
    flags: EntryFlags,
}

impl DirEntry {
    /// Creates an entry in a `const` table.
    ///
    /// Names longer than [`MAX_NAME_LEN`] fail const evaluation.
    pub const fn new(name: &'static str, size: u32, flags: EntryFlags) -> Self {
        assert!(name.len() <= MAX_NAME_LEN, "entry name too long");
        Self { name, size, flags }
    }

    /// Creates a regular file entry.
    pub const fn file(name: &'static str, size: u32) -> Self {
        Self::new(name, size, EntryFlags::empty())
    }

    /// Creates a directory entry. Directories report a size of zero.
    pub const fn directory(name: &'static str) -> Self {
        Self::new(name, 0, EntryFlags::DIRECTORY)
    }

    /// Entry name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Size in bytes.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Entry attributes.
    pub fn flags(&self) -> EntryFlags {
        self.flags
    }

    /// Whether this entry is a directory.
    pub fn is_directory(&self) -> bool {
        self.flags.contains(EntryFlags::DIRECTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_flag() {
        let boot = DirEntry::directory("boot");
        assert!(boot.is_directory());
        assert_eq!(boot.size(), 0);

        let cfg = DirEntry::file("grub.cfg", 256);
        assert!(!cfg.is_directory());
        assert_eq!(cfg.size(), 256);
        assert_eq!(cfg.name(), "grub.cfg");
    }

    #[test]
    fn test_new_accepts_max_length() {
        const NAME: &str = "abcdefghijklmnopqrstuvwxyz01234";
        const ENTRY: DirEntry = DirEntry::new(NAME, 1, EntryFlags::empty());
        assert_eq!(NAME.len(), MAX_NAME_LEN);
        assert_eq!(ENTRY.name(), NAME);
    }

    #[test]
    #[should_panic(expected = "entry name too long")]
    fn test_new_rejects_long_name() {
        let name = "abcdefghijklmnopqrstuvwxyz012345";
        let _ = DirEntry::new(name, 1, EntryFlags::empty());
    }
}
