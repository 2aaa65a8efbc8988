use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

///
/// SourceError
///

#[derive(Debug, ThisError)]
pub enum SourceError {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

///
/// Declaration
///
/// One top-level item yielded by the metadata source, together with the
/// package it was declared in and the file it came from. The adapter decides
/// whether it is a binding type at all.
///

#[derive(Clone, Debug)]
pub struct Declaration {
    pub package: String,
    pub item: syn::Item,
    pub provenance: PathBuf,
}

///
/// MetadataSource
///
/// Capability the driver queries for the declarations of one generation
/// run. Input is assumed valid and already parseable; anything else is a
/// source error, not a schema error.
///

pub trait MetadataSource {
    fn declarations(&self) -> Result<Vec<Declaration>, SourceError>;
}

///
/// DirSource
///
/// Walks a root directory of `.rs` schema files. The package of a file is
/// its dot-joined path relative to the root, extension stripped, so
/// `a/b/c.rs` declares types in package `a.b.c`. The walk is sorted, which
/// keeps reruns deterministic.
///

#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn collect_files(&self, dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SourceError> {
        let entries = fs::read_dir(dir).map_err(|source| SourceError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .collect();
        paths.sort();

        for path in paths {
            if path.is_dir() {
                self.collect_files(&path, files)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }

        Ok(())
    }

    fn package_of(&self, file: &Path) -> String {
        let relative = file.strip_prefix(&self.root).unwrap_or(file);
        let mut segments: Vec<String> = relative
            .parent()
            .into_iter()
            .flat_map(Path::components)
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        if let Some(stem) = relative.file_stem() {
            segments.push(stem.to_string_lossy().into_owned());
        }

        segments.join(".")
    }
}

impl MetadataSource for DirSource {
    fn declarations(&self) -> Result<Vec<Declaration>, SourceError> {
        let mut files = Vec::new();
        self.collect_files(&self.root, &mut files)?;

        let mut declarations = Vec::new();
        for path in files {
            let text = fs::read_to_string(&path).map_err(|source| SourceError::Io {
                path: path.clone(),
                source,
            })?;
            let file = syn::parse_file(&text).map_err(|err| SourceError::Parse {
                path: path.clone(),
                message: err.to_string(),
            })?;

            let package = self.package_of(&path);
            declarations.extend(file.items.into_iter().map(|item| Declaration {
                package: package.clone(),
                item,
                provenance: path.clone(),
            }));
        }

        Ok(declarations)
    }
}

///
/// StaticSource
///
/// In-memory source for hosts that already hold their declarations, and for
/// tests.
///

#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    pub declarations: Vec<Declaration>,
}

impl StaticSource {
    #[must_use]
    pub const fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }
}

impl MetadataSource for StaticSource {
    fn declarations(&self) -> Result<Vec<Declaration>, SourceError> {
        Ok(self.declarations.clone())
    }
}

///
/// TESTS
///
