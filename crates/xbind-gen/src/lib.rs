pub mod adapt;
pub mod config;
pub mod driver;
pub mod emit;
pub mod source;
pub mod trace;

use crate::{adapt::AdaptError, emit::EmitError, source::SourceError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        adapt::adapt,
        config::GenConfig,
        driver::{Driver, RecordFailure, RunReport},
        emit::{Artifact, Emitter, FileWriter, MemorySink},
        source::{Declaration, DirSource, MetadataSource, StaticSource},
        trace::{NullTrace, TraceEvent, TraceSink},
    };
    pub use serde::{Deserialize, Serialize};
    pub use xbind_schema::prelude::*;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Adapt(#[from] AdaptError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    Schema(#[from] xbind_schema::Error),

    #[error(transparent)]
    Source(#[from] SourceError),
}

impl From<xbind_schema::singleton::ClassifyError> for Error {
    fn from(err: xbind_schema::singleton::ClassifyError) -> Self {
        Self::Schema(err.into())
    }
}

impl From<xbind_schema::builder::SynthesizeError> for Error {
    fn from(err: xbind_schema::builder::SynthesizeError) -> Self {
        Self::Schema(err.into())
    }
}

/// Run one full generation pass for `config`, writing artifacts to disk.
pub fn generate(config: &config::GenConfig) -> Result<driver::RunReport, Error> {
    let source = config.source();
    let mut writer = config.writer();

    driver::Driver::new(&source, &mut writer).run()
}
