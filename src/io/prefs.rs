// prefs.rs: Decompression preferences shared by the stream and file layers.

use crate::config::default_nb_workers;
use crate::dispatch::DEFAULT_METHOD;

/// Tunable parameters for stream and file decompression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefs {
    /// Compression-method identifier, looked up in the decoder registry.
    /// Default: `-lz5-`.
    pub method: String,
    /// Decoded size recorded by the archive, if known.  Output is cut at
    /// this length and a shorter stream is an error.  Default: `None`.
    pub expected_size: Option<u64>,
    /// Overwrite existing destination files. Default: false.
    pub overwrite: bool,
    /// Decode but discard output. Default: false.
    pub test_mode: bool,
    /// Copy the source modification time onto regular output files. Default: true.
    pub keep_mtime: bool,
    /// Files decompressed concurrently by the multi-file path.
    /// Default: [`default_nb_workers`].
    pub nb_workers: usize,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            method: DEFAULT_METHOD.to_owned(),
            expected_size: None,
            overwrite: false,
            test_mode: false,
            keep_mtime: true,
            nb_workers: default_nb_workers(),
        }
    }
}

impl Prefs {
    pub fn set_method(&mut self, method: &str) -> &mut Self {
        self.method = method.to_owned();
        self
    }

    pub fn set_expected_size(&mut self, size: Option<u64>) -> &mut Self {
        self.expected_size = size;
        self
    }

    pub fn set_overwrite(&mut self, yes: bool) -> &mut Self {
        self.overwrite = yes;
        self
    }

    pub fn set_test_mode(&mut self, yes: bool) -> &mut Self {
        self.test_mode = yes;
        self
    }

    pub fn set_keep_mtime(&mut self, yes: bool) -> &mut Self {
        self.keep_mtime = yes;
        self
    }

    pub fn set_nb_workers(&mut self, n: usize) -> &mut Self {
        self.nb_workers = n;
        self
    }
}
