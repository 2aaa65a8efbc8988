mod r#enum;
mod record;

pub use self::r#enum::*;
pub use self::record::*;

use crate::prelude::*;

///
/// Node
///
/// One classified binding declaration. Declarations carrying only the
/// structural-binding marker are records; those additionally carrying the
/// enumeration marker are enumerations. Anything else is not a node.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Node {
    Record(Record),
    Enumeration(Enumeration),
}

impl Node {
    /// Identity of the underlying declaration.
    #[must_use]
    pub const fn path(&self) -> &TypePath {
        match self {
            Self::Record(record) => &record.path,
            Self::Enumeration(enumeration) => &enumeration.path,
        }
    }
}
