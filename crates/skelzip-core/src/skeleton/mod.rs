//! Skeleton archive creation.
//!
//! Walks directory trees and writes a zip whose entries keep names and sizes
//! but hold only zero bytes.

pub mod archiver;
pub mod atomic;
pub mod config;
pub mod progress;
pub mod timestamp;
pub mod walker;

pub use archiver::DirectoryArchiver;
pub use atomic::write_atomic;
pub use config::SkeletonConfig;
pub use progress::PrintProgress;
pub use walker::EntryKind;
pub use walker::SkeletonEntry;
pub use walker::SkeletonWalker;
