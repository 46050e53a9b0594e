//! Named record types.

use sdkgen_codegen::{
    BuildError,
    ast::{InterfaceDeclaration, InterfaceProperty, JsDoc},
};
use sdkgen_plan::TypeDescriptor;

use super::require;

/// Build an interface with one property per field; optionality is mirrored.
pub fn build_type(ty: &TypeDescriptor) -> Result<InterfaceDeclaration, BuildError> {
    require(&ty.name, "type", "name")?;

    let mut decl = InterfaceDeclaration::new(&ty.name);
    if let Some(description) = &ty.description {
        decl.doc = Some(JsDoc::text(description));
    }
    for (j, field) in ty.fields.iter().enumerate() {
        let entity = format!("types.{}.fields[{}]", ty.name, j);
        require(&field.name, &entity, "name")?;
        require(&field.ty, &entity, "type")?;

        let mut property = InterfaceProperty::new(&field.name, &field.ty);
        property.optional = field.optional;
        property.doc = field.description.clone();
        decl = decl.property(property);
    }
    Ok(decl)
}
