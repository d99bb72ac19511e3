//! OpenAPI representation of metric factors.

use crate::Factor;
use serde_json::json;
use utoipa::openapi::{
    ObjectBuilder, RefOr, Schema, Type, extensions::ExtensionsBuilder, schema::SchemaType,
};

/// A string schema listing the codes of a factor, and their labels as
/// `x-enum-descriptions`.
pub fn factor_schema<F: Factor>() -> RefOr<Schema> {
    let codes = F::VARIANTS.iter().map(|v| v.code()).collect::<Vec<_>>();
    let labels = F::VARIANTS.iter().map(|v| v.label()).collect::<Vec<_>>();

    Schema::Object(
        ObjectBuilder::new()
            .schema_type(SchemaType::Type(Type::String))
            .description(Some(format!("CVSS v2 {} ({})", F::NAME, F::GROUP)))
            .enum_values(Some(codes))
            .extensions(Some(
                ExtensionsBuilder::new()
                    .add("x-enum-descriptions", json!(labels))
                    .build(),
            ))
            .build(),
    )
    .into()
}
