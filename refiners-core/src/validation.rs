use std::collections::HashSet;

use crate::models::RefinerDocument;

/// Check a refiner document for inconsistencies the panel would not notice
/// Returns Ok(()) if consistent, or Err(Vec<String>) with one message per problem
pub fn validate_refiners(document: &RefinerDocument) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();
    let mut facet_names = HashSet::new();

    for filter in &document.available_filters {
        if filter.filter_name.trim().is_empty() {
            problems.push("Refiner names cannot be empty".to_string());
        }

        if !facet_names.insert(filter.filter_name.as_str()) {
            problems.push(format!("Refiner '{}' is listed more than once", filter.filter_name));
        }

        // Duplicate tokens make checkboxes check and uncheck together
        let mut tokens = HashSet::new();
        for value in &filter.values {
            if !tokens.insert(value.token.as_str()) {
                problems.push(format!(
                    "Refiner '{}' has duplicate token: '{}'",
                    filter.filter_name, value.token
                ));
            }
        }
    }

    for config in &document.refiners_configuration {
        if !facet_names.contains(config.refiner_name.as_str()) {
            problems.push(format!(
                "Configuration for '{}' does not match any available refiner",
                config.refiner_name
            ));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}
