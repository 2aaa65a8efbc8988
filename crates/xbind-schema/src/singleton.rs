use crate::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error as ThisError;

///
/// ClassifyError
///

#[derive(Debug, ThisError)]
pub enum ClassifyError {
    #[error("enumeration identity '{0}' declared more than once")]
    DuplicateIdentity(TypePath),
}

///
/// SingletonEnums
///
/// Lookup from an enumeration identity to its sole member, populated only
/// for enumerations with exactly one member. Built once per generation run,
/// before any synthesis consumes it, and read-only afterwards.
///
/// Zero-member enumerations are indexed separately so a required property of
/// such a type can be rejected instead of guessed at.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct SingletonEnums {
    sole: BTreeMap<TypePath, TypePath>,
    empty: BTreeSet<TypePath>,
}

impl SingletonEnums {
    /// Classify the full enumeration set of one generation run.
    ///
    /// Two declarations resolving to the same identity is a hard error; the
    /// reference system let the later one win by map-insertion accident.
    pub fn classify<'a, I>(enumerations: I) -> Result<Self, ClassifyError>
    where
        I: IntoIterator<Item = &'a Enumeration>,
    {
        let mut lookup = Self::default();
        let mut seen = BTreeSet::new();

        for enumeration in enumerations {
            if !seen.insert(enumeration.path.clone()) {
                return Err(ClassifyError::DuplicateIdentity(enumeration.path.clone()));
            }

            match enumeration.members.as_slice() {
                [sole] => {
                    lookup.sole.insert(enumeration.path.clone(), sole.clone());
                }
                [] => {
                    lookup.empty.insert(enumeration.path.clone());
                }
                _ => {}
            }
        }

        Ok(lookup)
    }

    /// The sole member of `ty`, if `ty` is a singleton enumeration.
    #[must_use]
    pub fn sole_member(&self, ty: &TypePath) -> Option<&TypePath> {
        self.sole.get(ty)
    }

    #[must_use]
    pub fn contains(&self, ty: &TypePath) -> bool {
        self.sole.contains_key(ty)
    }

    /// Whether `ty` is a known zero-member enumeration.
    #[must_use]
    pub fn is_empty_enumeration(&self, ty: &TypePath) -> bool {
        self.empty.contains(ty)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sole.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sole.is_empty()
    }
}

///
/// TESTS
///
