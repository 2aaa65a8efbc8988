use crate::{prelude::*, source::Declaration};
use darling::FromAttributes;
use thiserror::Error as ThisError;
use xbind_schema::validate::{validate_property_ident, validate_type_name};

///
/// AdaptError
///
/// Failures here are per-declaration: the driver reports them against the
/// originating record and carries on with the rest of the batch.
///

#[derive(Debug, ThisError)]
pub enum AdaptError {
    #[error("record '{owner}': property '{ident}' has an unsupported type")]
    UnresolvableType { owner: TypePath, ident: String },

    #[error("'{owner}': invalid element binding on '{ident}': {message}")]
    Attribute {
        owner: TypePath,
        ident: String,
        message: String,
    },

    #[error("'{owner}': {message}")]
    Declaration { owner: TypePath, message: String },
}

///
/// XmlElementAttr
///
/// Per-property element binding, `#[xml_element(name = "...", required)]`.
/// Absence of the attribute, or an unset flag, means optional.
///

#[derive(Debug, Default, FromAttributes)]
#[darling(attributes(xml_element))]
struct XmlElementAttr {
    #[darling(default)]
    name: Option<String>,

    #[darling(default)]
    required: bool,
}

/// Identity of a declaration, if it is a named struct or enum.
#[must_use]
pub fn declaration_path(declaration: &Declaration) -> Option<TypePath> {
    let ident = match &declaration.item {
        syn::Item::Struct(item) => &item.ident,
        syn::Item::Enum(item) => &item.ident,
        _ => return None,
    };

    Some(TypePath::new(&declaration.package, ident.to_string()))
}

/// Classify one declaration into a record or enumeration node.
///
/// A declaration without the `#[xml_type]` marker is not a candidate type
/// and is skipped entirely; that is the expected outcome, not an error.
/// A marked declaration is an enumeration iff it additionally carries
/// `#[xml_enum]`, otherwise a record.
pub fn adapt(declaration: &Declaration) -> Result<Option<Node>, AdaptError> {
    let (attrs, path) = match (&declaration.item, declaration_path(declaration)) {
        (syn::Item::Struct(item), Some(path)) => (&item.attrs, path),
        (syn::Item::Enum(item), Some(path)) => (&item.attrs, path),
        _ => return Ok(None),
    };

    if !has_marker(attrs, "xml_type") {
        return Ok(None);
    }

    validate_type_name(&path.name).map_err(|message| AdaptError::Declaration {
        owner: path.clone(),
        message,
    })?;

    let node = if has_marker(attrs, "xml_enum") {
        Node::Enumeration(adapt_enumeration(&declaration.item, path)?)
    } else {
        Node::Record(adapt_record(&declaration.item, path)?)
    };

    Ok(Some(node))
}

fn has_marker(attrs: &[syn::Attribute], marker: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(marker))
}

fn adapt_record(item: &syn::Item, path: TypePath) -> Result<Record, AdaptError> {
    let syn::Item::Struct(item) = item else {
        // A marked non-struct without the enumeration marker has no data
        // properties to enumerate.
        return Ok(Record::new(path, Vec::new()));
    };

    let fields = match &item.fields {
        syn::Fields::Named(named) => &named.named,
        syn::Fields::Unit => return Ok(Record::new(path, Vec::new())),
        syn::Fields::Unnamed(_) => {
            return Err(AdaptError::Declaration {
                owner: path,
                message: "binding records must have named fields".to_string(),
            });
        }
    };

    let mut properties = Vec::new();
    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();

        validate_property_ident(&ident).map_err(|message| AdaptError::Attribute {
            owner: path.clone(),
            ident: ident.clone(),
            message,
        })?;

        let element =
            XmlElementAttr::from_attributes(&field.attrs).map_err(|err| AdaptError::Attribute {
                owner: path.clone(),
                ident: ident.clone(),
                message: err.to_string(),
            })?;

        if element.name.as_deref() == Some("") {
            return Err(AdaptError::Attribute {
                owner: path.clone(),
                ident,
                message: "element name is empty".to_string(),
            });
        }

        let ty = resolve_type(&path.package, &field.ty).ok_or_else(|| {
            AdaptError::UnresolvableType {
                owner: path.clone(),
                ident: ident.clone(),
            }
        })?;

        properties.push(Property::new(ident, ty, element.required));
    }

    Ok(Record::new(path, properties))
}

fn adapt_enumeration(item: &syn::Item, path: TypePath) -> Result<Enumeration, AdaptError> {
    let syn::Item::Enum(item) = item else {
        // Degenerate: the enumeration marker on a non-enum declares no
        // members. Downstream treats it like any zero-member enumeration.
        return Ok(Enumeration::new(path, Vec::new()));
    };

    let mut members = Vec::new();
    for variant in &item.variants {
        if !matches!(variant.fields, syn::Fields::Unit) {
            return Err(AdaptError::Declaration {
                owner: path,
                message: format!("enumeration member '{}' must be a unit variant", variant.ident),
            });
        }

        members.push(path.member(variant.ident.to_string()));
    }

    Ok(Enumeration::new(path, members))
}

/// Resolve a property type to a concrete identity.
///
/// Bare idents resolve to the declaring package unless they are language
/// primitives, which live in the `std` package space. Multi-segment paths
/// map their leading segments to a dotted package. One level of `Option`
/// wrapping is transparent; anything else generic is unresolvable.
fn resolve_type(package: &str, ty: &syn::Type) -> Option<TypePath> {
    let syn::Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }

    let segments = &type_path.path.segments;
    let last = segments.last()?;

    match &last.arguments {
        syn::PathArguments::None => {}
        syn::PathArguments::AngleBracketed(args)
            if last.ident == "Option" && args.args.len() == 1 =>
        {
            if let syn::GenericArgument::Type(inner) = &args.args[0] {
                return resolve_type(package, inner);
            }
            return None;
        }
        _ => return None,
    }

    let name = last.ident.to_string();
    if segments.len() == 1 {
        if is_primitive(&name) {
            Some(TypePath::new("std", name))
        } else {
            Some(TypePath::new(package, name))
        }
    } else {
        let package = segments
            .iter()
            .take(segments.len() - 1)
            .map(|segment| segment.ident.to_string())
            .collect::<Vec<_>>()
            .join(".");

        Some(TypePath::new(package, name))
    }
}

fn is_primitive(name: &str) -> bool {
    matches!(
        name,
        "String"
            | "str"
            | "bool"
            | "char"
            | "i8"
            | "i16"
            | "i32"
            | "i64"
            | "i128"
            | "isize"
            | "u8"
            | "u16"
            | "u32"
            | "u64"
            | "u128"
            | "usize"
            | "f32"
            | "f64"
    )
}

///
/// TESTS
///
