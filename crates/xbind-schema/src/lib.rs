pub mod builder;
pub mod node;
pub mod singleton;
pub mod types;
pub mod validate;

/// Maximum length for type identifiers.
pub const MAX_TYPE_NAME_LEN: usize = 64;

/// Maximum length for property identifiers.
pub const MAX_PROPERTY_NAME_LEN: usize = 64;

use crate::{builder::SynthesizeError, singleton::ClassifyError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        builder::{Assignment, BuilderFn, Param, ParamType, ValueSource, synthesize},
        node::{Enumeration, Node, Property, PropertyList, Record},
        singleton::SingletonEnums,
        types::TypePath,
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Synthesize(#[from] SynthesizeError),
}
