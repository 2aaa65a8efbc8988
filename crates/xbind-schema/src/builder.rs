use crate::prelude::*;
use thiserror::Error as ThisError;

/// Ident of the trailing configuration parameter on every builder.
pub const CONFIGURE_IDENT: &str = "configure";

///
/// SynthesizeError
///

#[derive(Debug, ThisError)]
pub enum SynthesizeError {
    #[error(
        "required property '{property}' on '{owner}' has zero-member enumeration type '{ty}'"
    )]
    EmptyEnumRequired {
        owner: TypePath,
        property: String,
        ty: TypePath,
    },
}

///
/// BuilderFn
///
/// The synthesized description of one builder function, handed as-is to the
/// emission backend. `params` holds the required-field parameters in
/// declaration order; `configure` is the trailing configuration parameter
/// and is always present, always defaulted to a no-op.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BuilderFn {
    pub owner: TypePath,
    pub params: Vec<Param>,
    pub assignments: Vec<Assignment>,
    pub configure: Param,
}

impl BuilderFn {
    /// The full signature, required-field parameters first, configuration
    /// parameter last.
    pub fn signature(&self) -> impl Iterator<Item = &Param> {
        self.params.iter().chain(std::iter::once(&self.configure))
    }
}

///
/// Param
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Param {
    pub ident: String,
    pub ty: ParamType,
    pub has_default: bool,
}

///
/// ParamType
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum ParamType {
    /// A plain value of the named type.
    Path(TypePath),

    /// A callback receiving the constructed instance, returning nothing.
    Configure(TypePath),
}

///
/// Assignment
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Assignment {
    pub ident: String,
    pub source: ValueSource,
}

///
/// ValueSource
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum ValueSource {
    /// Reference to the builder parameter of the same name.
    Param(String),

    /// Literal reference to the sole member of a singleton enumeration.
    Member(TypePath),
}

/// Synthesize the builder function for one record.
///
/// Required fields whose type is a singleton enumeration consume no
/// parameter; their assignment references the sole member directly. The
/// assignment list always follows the declaration order of the required
/// fields, never the parameter list. A record with no required fields
/// yields a builder whose only parameter is `configure`.
pub fn synthesize(
    record: &Record,
    singletons: &SingletonEnums,
) -> Result<BuilderFn, SynthesizeError> {
    let mut params = Vec::new();
    let mut assignments = Vec::new();

    for property in record.properties.required() {
        if let Some(member) = singletons.sole_member(&property.ty) {
            assignments.push(Assignment {
                ident: property.ident.clone(),
                source: ValueSource::Member(member.clone()),
            });
            continue;
        }

        if singletons.is_empty_enumeration(&property.ty) {
            return Err(SynthesizeError::EmptyEnumRequired {
                owner: record.path.clone(),
                property: property.ident.clone(),
                ty: property.ty.clone(),
            });
        }

        params.push(Param {
            ident: property.ident.clone(),
            ty: ParamType::Path(property.ty.clone()),
            has_default: false,
        });
        assignments.push(Assignment {
            ident: property.ident.clone(),
            source: ValueSource::Param(property.ident.clone()),
        });
    }

    let configure = Param {
        ident: CONFIGURE_IDENT.to_string(),
        ty: ParamType::Configure(record.path.clone()),
        has_default: true,
    };

    Ok(BuilderFn {
        owner: record.path.clone(),
        params,
        assignments,
        configure,
    })
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

    fn string_ty() -> TypePath {
        TypePath::new("std", "String")
    }

    fn no_singletons() -> SingletonEnums {
        SingletonEnums::default()
    }

    #[test]
    fn one_required_property_becomes_one_parameter() {
        let record = Record::new(
            ty("Document"),
            vec![
                Property::new("name", string_ty(), true),
                Property::new("age", TypePath::new("std", "i32"), false),
            ],
        );

        let builder = synthesize(&record, &no_singletons()).unwrap();

        assert_eq!(builder.params.len(), 1);
        assert_eq!(builder.params[0].ident, "name");
        assert!(!builder.params[0].has_default);
        assert_eq!(builder.assignments.len(), 1);
        assert_eq!(
            builder.assignments[0].source,
            ValueSource::Param("name".to_string())
        );
    }

    #[test]
    fn zero_required_properties_leave_only_configure() {
        let record = Record::new(
            ty("DocumentNoneRequired"),
            vec![
                Property::new("name", string_ty(), false),
                Property::new("age", TypePath::new("std", "i32"), false),
            ],
        );

        let builder = synthesize(&record, &no_singletons()).unwrap();

        assert!(builder.params.is_empty());
        assert!(builder.assignments.is_empty());
        assert_eq!(builder.signature().count(), 1);
        assert_eq!(builder.configure.ident, CONFIGURE_IDENT);
        assert!(builder.configure.has_default);
    }

    #[test]
    fn multi_member_enumeration_keeps_its_parameter() {
        let enums = [Enumeration::with_members(ty("Agree"), ["Y", "N"])];
        let singletons = SingletonEnums::classify(&enums).unwrap();
        let record = Record::new(ty("Document"), vec![Property::new("agree", ty("Agree"), true)]);

        let builder = synthesize(&record, &singletons).unwrap();

        assert_eq!(builder.params.len(), 1);
        assert_eq!(builder.params[0].ident, "agree");
        assert_eq!(
            builder.assignments[0].source,
            ValueSource::Param("agree".to_string())
        );
    }

    #[test]
    fn singleton_enumeration_field_is_omitted_from_parameters() {
        let enums = [Enumeration::with_members(ty("Code"), ["SE_CRET"])];
        let singletons = SingletonEnums::classify(&enums).unwrap();
        let record = Record::new(ty("Document"), vec![Property::new("code", ty("Code"), true)]);

        let builder = synthesize(&record, &singletons).unwrap();

        assert!(builder.params.is_empty());
        assert_eq!(builder.assignments.len(), 1);
        assert_eq!(
            builder.assignments[0].source,
            ValueSource::Member(ty("Code").member("SE_CRET"))
        );
    }

    #[test]
    fn assignments_follow_declaration_order_not_parameter_order() {
        let enums = [Enumeration::with_members(ty("Code"), ["SE_CRET"])];
        let singletons = SingletonEnums::classify(&enums).unwrap();
        let record = Record::new(
            ty("Document"),
            vec![
                Property::new("code", ty("Code"), true),
                Property::new("name", string_ty(), true),
                Property::new("backup_code", ty("Code"), true),
            ],
        );

        let builder = synthesize(&record, &singletons).unwrap();

        // Only `name` consumed a parameter, yet the assignments interleave
        // exactly as the fields were declared.
        assert_eq!(builder.params.len(), 1);
        let idents: Vec<_> = builder.assignments.iter().map(|a| a.ident.as_str()).collect();
        assert_eq!(idents, ["code", "name", "backup_code"]);
    }

    #[test]
    fn record_typed_required_fields_are_never_omitted() {
        // Records are not subject to singleton omission, only enumerations.
        let record = Record::new(
            ty("Document"),
            vec![Property::new("attachment", ty("Attachment"), true)],
        );

        let builder = synthesize(&record, &no_singletons()).unwrap();

        assert_eq!(builder.params.len(), 1);
        assert_eq!(builder.params[0].ident, "attachment");
    }

    #[test]
    fn required_zero_member_enumeration_is_an_error() {
        let enums = [Enumeration::with_members(ty("Empty"), Vec::<String>::new())];
        let singletons = SingletonEnums::classify(&enums).unwrap();
        let record = Record::new(ty("Document"), vec![Property::new("kind", ty("Empty"), true)]);

        let err = synthesize(&record, &singletons).unwrap_err();
        assert!(matches!(err, SynthesizeError::EmptyEnumRequired { .. }));
    }

    #[test]
    fn synthesis_is_idempotent() {
        let enums = [Enumeration::with_members(ty("Code"), ["SE_CRET"])];
        let singletons = SingletonEnums::classify(&enums).unwrap();
        let record = Record::new(
            ty("Document"),
            vec![
                Property::new("name", string_ty(), true),
                Property::new("code", ty("Code"), true),
            ],
        );

        let first = synthesize(&record, &singletons).unwrap();
        let second = synthesize(&record, &singletons).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn parameter_idents_are_unique_per_required_field() {
        let record = Record::new(
            ty("Document"),
            vec![
                Property::new("name", string_ty(), true),
                Property::new("title", string_ty(), true),
            ],
        );

        let builder = synthesize(&record, &no_singletons()).unwrap();

        let mut idents: Vec<_> = builder.signature().map(|p| p.ident.clone()).collect();
        assert_eq!(idents, ["name", "title", "configure"]);
        idents.dedup();
        assert_eq!(idents.len(), 3);
    }
}
