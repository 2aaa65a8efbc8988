use crate::emit::EmitError;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use xbind_schema::builder::{BuilderFn, ParamType, ValueSource};
use xbind_schema::types::TypePath;

/// Render one builder function as formatted Rust source.
///
/// The artifact shape is fixed: a single top-level function named after the
/// record, taking the synthesized parameters in order plus the trailing
/// configuration callback, constructing a default instance, assigning every
/// required field in assignment order, invoking the callback, and returning
/// the instance. Rendering the same builder twice yields identical text.
pub fn render(builder: &BuilderFn) -> Result<String, EmitError> {
    let owner = format_ident!("{}", builder.owner.name);
    let owner_package = builder.owner.package.as_str();

    let params = builder.signature().map(|param| {
        let ident = format_ident!("{}", param.ident);
        match &param.ty {
            ParamType::Path(ty) => {
                let ty = type_tokens(ty, owner_package);
                quote!(#ident: #ty)
            }
            ParamType::Configure(ty) => {
                let ty = type_tokens(ty, owner_package);
                quote!(#ident: impl FnOnce(&mut #ty))
            }
        }
    });

    let assignments = builder.assignments.iter().map(|assignment| {
        let ident = format_ident!("{}", assignment.ident);
        let value = match &assignment.source {
            ValueSource::Param(param) => {
                let param = format_ident!("{}", param);
                quote!(#param)
            }
            ValueSource::Member(member) => member_tokens(member, owner_package),
        };

        quote!(value.#ident = #value;)
    });

    let configure = format_ident!("{}", builder.configure.ident);

    let tokens = quote! {
        #[allow(non_snake_case)]
        pub fn #owner(#(#params),*) -> #owner {
            let mut value = #owner::default();
            #(#assignments)*
            #configure(&mut value);
            value
        }
    };

    format(&builder.owner, tokens)
}

fn format(path: &TypePath, tokens: TokenStream) -> Result<String, EmitError> {
    let file = syn::parse2::<syn::File>(tokens).map_err(|err| EmitError::Render {
        path: path.clone(),
        message: err.to_string(),
    })?;

    Ok(prettyplease::unparse(&file))
}

/// Tokens for a type reference as seen from the owner's package.
///
/// Same-package types and `std` primitives render as bare idents; anything
/// else renders as a full path with the dotted package mapped to segments.
fn type_tokens(ty: &TypePath, owner_package: &str) -> TokenStream {
    let name = format_ident!("{}", ty.name);

    if ty.package.is_empty() || ty.package == owner_package || ty.package == "std" {
        quote!(#name)
    } else {
        let segments = ty.package.split('.').map(|s| format_ident!("{}", s));
        quote!(#(#segments)::*::#name)
    }
}

/// Tokens for a literal reference to an enumeration member.
///
/// The member's package is the qualified enumeration identity; seen from the
/// owner's package, `a.b.c.Code.SE_CRET` renders as `Code::SE_CRET`.
fn member_tokens(member: &TypePath, owner_package: &str) -> TokenStream {
    let local = member
        .package
        .strip_prefix(owner_package)
        .and_then(|rest| rest.strip_prefix('.'))
        .filter(|_| !owner_package.is_empty())
        .unwrap_or(&member.package);

    let segments = local.split('.').map(|s| format_ident!("{}", s));
    let name = format_ident!("{}", member.name);

    quote!(#(#segments)::*::#name)
}

///
/// TESTS
///
