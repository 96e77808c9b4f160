//! Types shared between the Lumen kernel and its hardware backends.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod entry;
pub mod error;

pub use entry::{DirEntry, EntryFlags, MAX_NAME_LEN};
pub use error::LineError;
