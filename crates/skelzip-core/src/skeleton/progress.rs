//! Line-per-entry progress output.

use crate::ProgressCallback;
use std::io::Write;
use std::path::Path;

/// Prints the walked path of every visited entry, one per line.
///
/// This is the plain progress stream of the command-line tool. Write errors
/// are ignored; progress output never fails a build.
///
/// # Examples
///
/// ```
/// use skelzip_core::ProgressCallback;
/// use skelzip_core::skeleton::PrintProgress;
/// use std::path::Path;
///
/// let mut progress = PrintProgress::new(Vec::new());
/// progress.on_entry_start(Path::new("root/a.txt"), 1);
///
/// assert_eq!(progress.into_inner(), b"root/a.txt\n");
/// ```
#[derive(Debug)]
pub struct PrintProgress<W> {
    out: W,
}

impl PrintProgress<std::io::Stdout> {
    /// Creates a printer writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> PrintProgress<W> {
    /// Creates a printer writing to `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ProgressCallback for PrintProgress<W> {
    fn on_entry_start(&mut self, path: &Path, _depth: usize) {
        let _ = writeln!(self.out, "{}", path.display());
    }

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {
        let _ = self.out.flush();
    }
}
