//! Static directory listing.
//!
//! There is no filesystem driver; the shell only ever reads this table.

use lumen_common::DirEntry;

/// Entries shown by `ls`, in listing order.
pub static ROOT_LISTING: [DirEntry; 5] = [
    DirEntry::file("kernel.elf", 102400),
    DirEntry::directory("boot"),
    DirEntry::file("grub.cfg", 256),
    DirEntry::file("readme.txt", 42),
    DirEntry::file("passwords", 12),
];
