use crate::{emit::FileWriter, source::DirSource};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

///
/// GenConfig
///
/// Host-facing configuration for one generation pass: where the schema
/// sources live and where artifacts land.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GenConfig {
    pub root: PathBuf,
    pub out_dir: PathBuf,
}

impl GenConfig {
    #[must_use]
    pub const fn new(root: PathBuf, out_dir: PathBuf) -> Self {
        Self { root, out_dir }
    }

    #[must_use]
    pub fn source(&self) -> DirSource {
        DirSource::new(&self.root)
    }

    #[must_use]
    pub fn writer(&self) -> FileWriter {
        FileWriter::new(&self.out_dir)
    }
}
