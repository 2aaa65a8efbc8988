use crate::prelude::*;
use std::slice::Iter;

///
/// Record
///
/// A non-enumeration binding type: an identity plus its data properties in
/// declaration order. Built fresh from the metadata source on every
/// generation run; never mutated afterwards.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Record {
    pub path: TypePath,
    pub properties: PropertyList,
}

impl Record {
    #[must_use]
    pub fn new(path: TypePath, properties: Vec<Property>) -> Self {
        Self {
            path,
            properties: PropertyList { properties },
        }
    }
}

///
/// PropertyList
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PropertyList {
    pub properties: Vec<Property>,
}

impl PropertyList {
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.ident == ident)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Property> {
        self.properties.iter()
    }

    /// The required subset, in declaration order.
    ///
    /// Every downstream ordering (parameter list, assignment list) derives
    /// from the order this iterator yields.
    pub fn required(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.required)
    }
}

impl<'a> IntoIterator for &'a PropertyList {
    type Item = &'a Property;
    type IntoIter = Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

///
/// Property
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Property {
    pub ident: String,
    pub ty: TypePath,

    /// Derived from the element-binding annotation; absence of the
    /// annotation, or an unset flag, means optional.
    pub required: bool,
}

impl Property {
    #[must_use]
    pub fn new(ident: impl Into<String>, ty: TypePath, required: bool) -> Self {
        Self {
            ident: ident.into(),
            ty,
            required,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(name: &str) -> TypePath {
        TypePath::new("a.b.c", name)
    }

    #[test]
    fn required_preserves_declaration_order() {
        let record = Record::new(
            ty("Document"),
            vec![
                Property::new("a", ty("A"), true),
                Property::new("b", ty("B"), false),
                Property::new("c", ty("C"), true),
                Property::new("d", ty("D"), true),
            ],
        );

        let idents: Vec<_> = record.properties.required().map(|p| p.ident.as_str()).collect();
        assert_eq!(idents, ["a", "c", "d"]);
    }

    #[test]
    fn required_is_empty_when_nothing_is_required() {
        let record = Record::new(
            ty("DocumentNoneRequired"),
            vec![
                Property::new("name", ty("Name"), false),
                Property::new("age", ty("Age"), false),
            ],
        );

        assert_eq!(record.properties.required().count(), 0);
        assert_eq!(record.properties.len(), 2);
    }

    #[test]
    fn records_serialize_for_host_inspection() {
        let record = Record::new(ty("Document"), vec![Property::new("name", ty("Name"), true)]);
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"required\":true"));
        assert!(json.contains("\"Document\""));
    }

    #[test]
    fn get_finds_properties_by_ident() {
        let record = Record::new(ty("Document"), vec![Property::new("name", ty("Name"), true)]);

        assert!(record.properties.get("name").is_some());
        assert!(record.properties.get("missing").is_none());
    }
}
