//! Source and destination resolution for the file layer.
//!
//! - [`open_src_file`]: path string to a boxed [`Read`], handling the
//!   `"stdin"` sentinel and rejecting directories.
//! - [`open_dst_file`]: path string to a [`DstFile`], handling the
//!   `"stdout"` and null-device sentinels and enforcing the overwrite policy
//!   from [`Prefs`].

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::config::IO_BUFFER_SIZE;
use crate::displaylevel;
use crate::io::prefs::Prefs;

/// Sentinel: read from standard input.
pub const STDIN_MARK: &str = "stdin";

/// Sentinel: write to standard output.
pub const STDOUT_MARK: &str = "stdout";

/// Sentinel: discard output.
#[cfg(windows)]
pub const NUL_MARK: &str = "nul";
#[cfg(not(windows))]
pub const NUL_MARK: &str = "/dev/null";

#[inline]
pub fn is_special_path(path: &str) -> bool {
    path == STDIN_MARK || path == STDOUT_MARK || path == NUL_MARK
}

/// Opens `path` for reading.
///
/// Directories are refused with [`io::ErrorKind::InvalidInput`].
pub fn open_src_file(path: &str) -> io::Result<Box<dyn Read>> {
    if path == STDIN_MARK {
        displaylevel!(4, "Using stdin for input\n");
        return Ok(Box::new(io::stdin().lock()));
    }

    if Path::new(path).is_dir() {
        displaylevel!(1, "{}: is a directory -- ignored\n", path);
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: is a directory", path),
        ));
    }

    let f = File::open(path).map_err(|e| {
        displaylevel!(1, "{}: {}\n", path, e);
        e
    })?;
    Ok(Box::new(BufReader::with_capacity(IO_BUFFER_SIZE, f)))
}

/// A destination produced by [`open_dst_file`].
pub struct DstFile {
    inner: Box<dyn Write>,
    /// `true` for a real file on disk (not stdout, not the null device).
    pub is_regular: bool,
}

impl Write for DstFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Opens `path` for writing.
///
/// An existing regular file is replaced only when `prefs.overwrite` is set;
/// otherwise the call fails with [`io::ErrorKind::AlreadyExists`].
pub fn open_dst_file(path: &str, prefs: &Prefs) -> io::Result<DstFile> {
    if path == STDOUT_MARK {
        displaylevel!(4, "Using stdout for output\n");
        return Ok(DstFile { inner: Box::new(io::stdout().lock()), is_regular: false });
    }

    if path == NUL_MARK {
        return Ok(DstFile { inner: Box::new(io::sink()), is_regular: false });
    }

    if !prefs.overwrite && Path::new(path).exists() {
        displaylevel!(1, "{} already exists; not overwritten\n", path);
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{}: already exists; not overwritten", path),
        ));
    }

    let f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| {
            displaylevel!(1, "{}: {}\n", path, e);
            e
        })?;
    Ok(DstFile {
        inner: Box::new(BufWriter::with_capacity(IO_BUFFER_SIZE, f)),
        is_regular: true,
    })
}
