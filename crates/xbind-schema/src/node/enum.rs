use crate::prelude::*;

///
/// Enumeration
///
/// An enumeration binding type: an identity plus the identities of its
/// declared constants, in declaration order. Each member identity addresses
/// the constant itself, not the enumeration type.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Enumeration {
    pub path: TypePath,
    pub members: Vec<TypePath>,
}

impl Enumeration {
    #[must_use]
    pub const fn new(path: TypePath, members: Vec<TypePath>) -> Self {
        Self { path, members }
    }

    /// Build an enumeration from member idents declared on `path`.
    #[must_use]
    pub fn with_members<I, S>(path: TypePath, idents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members = idents.into_iter().map(|ident| path.member(ident)).collect();

        Self { path, members }
    }

    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }
}

///
/// TESTS
///
