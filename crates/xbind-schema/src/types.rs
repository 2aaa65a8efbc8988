use crate::prelude::*;
use std::fmt;
use std::str::FromStr;

///
/// TypePath
///
/// Fully-qualified identity of a type: a dotted package plus a simple name.
/// Equality, ordering and hashing are structural on the qualified form, so a
/// TypePath can serve as a map key across a generation run.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct TypePath {
    pub package: String,
    pub name: String,
}

impl TypePath {
    #[must_use]
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// The dotted qualified form, `a.b.c.Document`.
    #[must_use]
    pub fn qualified(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// Identity of a named constant declared inside this type.
    ///
    /// Enumeration members are addressed this way: the member's package is
    /// the qualified form of the enumeration itself.
    #[must_use]
    pub fn member(&self, ident: impl Into<String>) -> Self {
        Self {
            package: self.qualified(),
            name: ident.into(),
        }
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.package, self.name)
        }
    }
}

///
/// ParseTypePathError
///

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseTypePathError {
    #[error("type path is empty")]
    Empty,

    #[error("type path '{0}' contains an empty segment")]
    EmptySegment(String),
}

impl FromStr for TypePath {
    type Err = ParseTypePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseTypePathError::Empty);
        }
        if s.split('.').any(str::is_empty) {
            return Err(ParseTypePathError::EmptySegment(s.to_string()));
        }

        match s.rsplit_once('.') {
            Some((package, name)) => Ok(Self::new(package, name)),
            None => Ok(Self::new("", s)),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_round_trips_through_from_str() {
        let path: TypePath = "a.b.c.Document".parse().unwrap();

        assert_eq!(path.package, "a.b.c");
        assert_eq!(path.name, "Document");
        assert_eq!(path.qualified(), "a.b.c.Document");
        assert_eq!(path.to_string().parse::<TypePath>().unwrap(), path);
    }

    #[test]
    fn bare_name_has_empty_package() {
        let path: TypePath = "Document".parse().unwrap();

        assert_eq!(path.package, "");
        assert_eq!(path.qualified(), "Document");
    }

    #[test]
    fn rejects_empty_and_degenerate_paths() {
        assert_eq!("".parse::<TypePath>(), Err(ParseTypePathError::Empty));
        assert!(matches!(
            "a..b".parse::<TypePath>(),
            Err(ParseTypePathError::EmptySegment(_))
        ));
    }

    #[test]
    fn member_identity_nests_under_the_qualified_type() {
        let code = TypePath::new("a.b.c", "Code");
        let member = code.member("SE_CRET");

        assert_eq!(member.package, "a.b.c.Code");
        assert_eq!(member.name, "SE_CRET");
        assert_eq!(member.qualified(), "a.b.c.Code.SE_CRET");
    }

    #[test]
    fn ordering_is_structural_on_the_qualified_form() {
        let a = TypePath::new("a.b", "Alpha");
        let b = TypePath::new("a.b", "Beta");

        assert!(a < b);
        assert_eq!(a, TypePath::new("a.b", "Alpha"));
    }
}
