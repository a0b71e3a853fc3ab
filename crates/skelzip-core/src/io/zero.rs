//! Endless source of zero bytes.
//!
//! Skeleton entries keep the declared size of the file they stand for, but
//! their content comes from [`ZeroFillReader`] bounded with [`Read::take`].

use std::io::Read;

/// Shared zero source.
///
/// The reader holds no state, so a single instance serves every entry.
pub static ZEROES: ZeroFillReader = ZeroFillReader;

/// Reader that fills every buffer it is given with zero bytes.
///
/// Reads never fail and never report end of stream, so callers must bound
/// how much they draw, typically through [`Read::take`].
///
/// `Read` is also implemented for `&ZeroFillReader`, the same way the standard
/// library does for `&File`, which lets the [`ZEROES`] static be used
/// directly.
///
/// # Examples
///
/// ```
/// use skelzip_core::io::ZEROES;
/// use std::io::Read;
///
/// let mut content = Vec::new();
/// (&ZEROES).take(5).read_to_end(&mut content)?;
///
/// assert_eq!(content, [0u8; 5]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroFillReader;

impl ZeroFillReader {
    /// Returns a reader yielding exactly `size` zero bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use skelzip_core::io::ZeroFillReader;
    /// use std::io::Read;
    ///
    /// let mut sink = Vec::new();
    /// let copied = std::io::copy(&mut ZeroFillReader::bounded(3), &mut sink)?;
    ///
    /// assert_eq!(copied, 3);
    /// assert_eq!(sink, [0, 0, 0]);
    /// # Ok::<(), std::io::Error>(())
    /// ```
    #[must_use]
    pub fn bounded(size: u64) -> std::io::Take<&'static Self> {
        (&ZEROES).take(size)
    }
}

impl Read for &ZeroFillReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        buf.fill(0);
        Ok(buf.len())
    }
}

impl Read for ZeroFillReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        (&*self).read(buf)
    }
}
