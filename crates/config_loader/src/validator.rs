//! Config validation
//!
//! Rules:
//! - every catalog store has a non-empty id and url
//! - recipe fields satisfy their declared ranges
//! - the url template contains `{year}`
//! - start_year <= end_year
//!
//! Duplicate store ids are reported as warnings, not errors: lookup is
//! first-match and callers may rely on that.

use std::collections::HashSet;

use contracts::{Catalog, ContractError, RecipeBlueprint, YEAR_PLACEHOLDER};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Validate a catalog
///
/// Returns the first error encountered, or Ok(()).
pub fn validate_catalog(catalog: &Catalog) -> Result<(), ContractError> {
    catalog.validate().map_err(to_contract_error)
}

/// Validate a recipe blueprint
pub fn validate_recipe(blueprint: &RecipeBlueprint) -> Result<(), ContractError> {
    blueprint.validate().map_err(to_contract_error)?;
    validate_url_template(blueprint)?;
    validate_year_range(blueprint)?;
    Ok(())
}

/// Non-fatal catalog issues
pub fn catalog_warnings(catalog: &Catalog) -> Vec<String> {
    let mut warnings = Vec::new();

    if catalog.stores.is_empty() {
        warnings.push("catalog has no stores - every lookup will miss".to_string());
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for store in &catalog.stores {
        if !seen.insert(store.id.as_str()) && reported.insert(store.id.as_str()) {
            warnings.push(format!(
                "duplicate store id '{}' - lookup uses the first entry",
                store.id
            ));
        }
    }

    warnings
}

fn validate_url_template(blueprint: &RecipeBlueprint) -> Result<(), ContractError> {
    if !blueprint.source.url_template.contains(YEAR_PLACEHOLDER) {
        return Err(ContractError::config_validation(
            "source.url_template",
            format!(
                "url_template must contain {YEAR_PLACEHOLDER}, got '{}'",
                blueprint.source.url_template
            ),
        ));
    }
    Ok(())
}

fn validate_year_range(blueprint: &RecipeBlueprint) -> Result<(), ContractError> {
    let source = &blueprint.source;
    if source.start_year > source.end_year {
        return Err(ContractError::config_validation(
            "source.start_year / source.end_year",
            format!(
                "start_year ({}) must be <= end_year ({})",
                source.start_year, source.end_year
            ),
        ));
    }
    Ok(())
}

/// Flatten `ValidationErrors` to the first error by field path
fn to_contract_error(errors: ValidationErrors) -> ContractError {
    let mut flat = Vec::new();
    flatten_errors("", &errors, &mut flat);
    flat.sort();

    match flat.into_iter().next() {
        Some((field, message)) => ContractError::config_validation(field, message),
        None => ContractError::config_validation("<root>", errors.to_string()),
    }
}

fn flatten_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<(String, String)>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed '{}' check", error.code));
                    out.push((path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(inner) => flatten_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (idx, inner) in items {
                    flatten_errors(&format!("{path}[{idx}]"), inner, out);
                }
            }
        }
    }
}
