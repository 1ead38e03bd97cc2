//! JSON Schema loading for catalog documents.
//!
//! The catalog schema ships inside the binary. Callers load it once, check the
//! declared `schema_version` against the allowed set, and validate raw
//! documents before deserializing them into typed records.

use anyhow::{Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::collections::BTreeSet;

/// Catalog document version understood by this build.
pub const CATALOG_SCHEMA_VERSION: &str = "monkey_catalog_v1";

const EMBEDDED_CATALOG_SCHEMA: &str = include_str!("../schema/monkey_catalog.schema.json");

/// Result of loading and compiling a JSON Schema.
pub(crate) struct SchemaLoadResult {
    pub schema_version: String,
    pub compiled: JSONSchema,
}

/// Controls how schemas are checked before compilation.
pub(crate) struct SchemaLoadOptions<'a> {
    /// Where to find the schema_version const inside the schema payload.
    pub schema_version_pointer: &'a str,
    /// Allowed schema_version values; enforced when present.
    pub allowed_versions: Option<&'a BTreeSet<String>>,
}

impl Default for SchemaLoadOptions<'_> {
    fn default() -> Self {
        Self {
            schema_version_pointer: "/properties/schema_version/const",
            allowed_versions: None,
        }
    }
}

/// Parse and compile a schema from its JSON text.
///
/// `label` names the schema in error messages.
pub(crate) fn load_json_schema(
    source: &str,
    label: &str,
    options: SchemaLoadOptions<'_>,
) -> Result<SchemaLoadResult> {
    let schema_value: Value =
        serde_json::from_str(source).map_err(|err| anyhow!("parsing schema {label}: {err}"))?;

    let schema_version = extract_schema_version(&schema_value, options.schema_version_pointer)
        .ok_or_else(|| anyhow!("schema {label} missing schema_version const"))?;

    if let Some(allowed) = options.allowed_versions {
        if !allowed.contains(&schema_version) {
            bail!(
                "schema_version '{}' not in allowed set {:?}",
                schema_version,
                allowed
            );
        }
    }

    let compiled = JSONSchema::compile(&schema_value)
        .map_err(|err| anyhow!("compiling schema {label}: {err}"))?;

    Ok(SchemaLoadResult {
        schema_version,
        compiled,
    })
}

/// Load the embedded catalog schema, pinned to [`CATALOG_SCHEMA_VERSION`].
pub(crate) fn catalog_schema() -> Result<SchemaLoadResult> {
    let allowed = BTreeSet::from_iter([CATALOG_SCHEMA_VERSION.to_string()]);
    load_json_schema(
        EMBEDDED_CATALOG_SCHEMA,
        "monkey_catalog.schema.json",
        SchemaLoadOptions {
            allowed_versions: Some(&allowed),
            ..Default::default()
        },
    )
}

/// Validate a raw document, joining every schema error into one message.
pub(crate) fn validate_document(
    schema: &SchemaLoadResult,
    document: &Value,
    label: &str,
) -> Result<()> {
    if let Err(errors) = schema.compiled.validate(document) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!("catalog {label} failed schema validation:\n{details}");
    }
    Ok(())
}

fn extract_schema_version(schema: &Value, pointer: &str) -> Option<String> {
    let version = schema.pointer(pointer).and_then(Value::as_str)?;
    if version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Some(version.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embedded_schema_compiles_with_pinned_version() {
        let schema = catalog_schema().expect("embedded schema loads");
        assert_eq!(schema.schema_version, CATALOG_SCHEMA_VERSION);
    }

    #[test]
    fn unknown_schema_version_is_rejected() {
        let allowed = BTreeSet::from_iter(["monkey_catalog_v1".to_string()]);
        let source = r#"{"properties": {"schema_version": {"const": "monkey_catalog_v9"}}}"#;
        let err = load_json_schema(
            source,
            "fixture",
            SchemaLoadOptions {
                allowed_versions: Some(&allowed),
                ..Default::default()
            },
        )
        .err()
        .expect("version outside allowed set");
        assert!(err.to_string().contains("monkey_catalog_v9"));
    }

    #[test]
    fn schema_without_version_const_fails() {
        let err = load_json_schema(r#"{"type": "object"}"#, "fixture", Default::default())
            .err()
            .expect("missing const");
        assert!(err.to_string().contains("missing schema_version"));
    }

    #[test]
    fn document_errors_are_reported_together() {
        let schema = catalog_schema().unwrap();
        let document = json!({
            "schema_version": "monkey_catalog_v1",
            "species": [{"name": "", "location": "Nowhere"}]
        });
        let err = validate_document(&schema, &document, "fixture")
            .err()
            .expect("invalid document");
        let message = err.to_string();
        assert!(message.contains("failed schema validation"));
        assert!(message.lines().count() > 2, "expected several errors: {message}");
    }

    #[test]
    fn negative_population_is_rejected() {
        let schema = catalog_schema().unwrap();
        let document = json!({
            "schema_version": "monkey_catalog_v1",
            "species": [{
                "name": "Baboon",
                "location": "Africa",
                "details": "",
                "population": -5,
                "latitude": 0.0,
                "longitude": 0.0
            }]
        });
        assert!(validate_document(&schema, &document, "fixture").is_err());
    }
}
