//! I/O utilities for skeleton archive operations.

pub mod zero;

pub use zero::ZEROES;
pub use zero::ZeroFillReader;
