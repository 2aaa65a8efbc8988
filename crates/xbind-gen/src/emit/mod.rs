mod rust;

pub use rust::render;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;
use xbind_schema::{builder::BuilderFn, types::TypePath};

///
/// EmitError
///

#[derive(Debug, ThisError)]
pub enum EmitError {
    #[error("failed to render builder for '{path}': {message}")]
    Render { path: TypePath, message: String },

    #[error("failed to write '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

///
/// Artifact
///
/// One rendered source artifact: the builder for one record, plus the
/// provenance of the declaration it was generated from so hosts can track
/// regeneration dependencies.
///

#[derive(Clone, Debug)]
pub struct Artifact {
    pub path: TypePath,
    pub provenance: PathBuf,
    pub source: String,
}

///
/// Emitter
///
/// The emission backend: accepts one synthesized builder per record and
/// persists it however the host requires. The driver never inspects the
/// textual form.
///

pub trait Emitter {
    fn submit(&mut self, builder: &BuilderFn, provenance: &Path) -> Result<(), EmitError>;
}

///
/// MemorySink
///
/// Collects rendered artifacts in memory. Used by tests and by hosts that
/// post-process artifacts themselves.
///

#[derive(Debug, Default)]
pub struct MemorySink {
    pub artifacts: Vec<Artifact>,
}

impl MemorySink {
    #[must_use]
    pub fn find(&self, path: &TypePath) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.path == *path)
    }
}

impl Emitter for MemorySink {
    fn submit(&mut self, builder: &BuilderFn, provenance: &Path) -> Result<(), EmitError> {
        let source = render(builder)?;

        self.artifacts.push(Artifact {
            path: builder.owner.clone(),
            provenance: provenance.to_path_buf(),
            source,
        });

        Ok(())
    }
}

///
/// FileWriter
///
/// Writes one file per record under `out_dir`, the package mapped to
/// directories and the file named after the record's simple name. Rerunning
/// on unchanged input rewrites byte-identical files.
///

#[derive(Clone, Debug)]
pub struct FileWriter {
    out_dir: PathBuf,
}

impl FileWriter {
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Target file for a record identity: `<out_dir>/<package dirs>/<Name>.rs`.
    #[must_use]
    pub fn target(&self, path: &TypePath) -> PathBuf {
        let mut target = self.out_dir.clone();
        if !path.package.is_empty() {
            for segment in path.package.split('.') {
                target.push(segment);
            }
        }
        target.push(format!("{}.rs", path.name));

        target
    }
}

impl Emitter for FileWriter {
    fn submit(&mut self, builder: &BuilderFn, _provenance: &Path) -> Result<(), EmitError> {
        let source = render(builder)?;
        let target = self.target(&builder.owner);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|err| EmitError::Io {
                path: parent.to_path_buf(),
                source: err,
            })?;
        }
        fs::write(&target, source).map_err(|err| EmitError::Io {
            path: target.clone(),
            source: err,
        })?;

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_maps_package_to_directories() {
        let writer = FileWriter::new("/out");
        let target = writer.target(&TypePath::new("a.b.c", "Document"));

        assert_eq!(target, PathBuf::from("/out/a/b/c/Document.rs"));
    }

    #[test]
    fn target_handles_empty_packages() {
        let writer = FileWriter::new("/out");
        let target = writer.target(&TypePath::new("", "Document"));

        assert_eq!(target, PathBuf::from("/out/Document.rs"));
    }
}
