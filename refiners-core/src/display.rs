use crate::models::{RefinementFilter, RefinementValue, RefinerConfiguration};

/// Resolve the header text for a facet
/// The first configuration entry for the facet wins; an empty override falls back to the raw name
pub fn resolve_display_name<'a>(
    filter_name: &'a str,
    configuration: &'a [RefinerConfiguration],
) -> &'a str {
    configuration
        .iter()
        .find(|config| config.refiner_name == filter_name)
        .and_then(|config| config.display_value.as_deref())
        .filter(|display| !display.is_empty())
        .unwrap_or(filter_name)
}

/// Checkbox label in the form "<value> (<count>)"
pub fn format_value_label(value: &RefinementValue) -> String {
    format!("{} ({})", value.value, value.count)
}

/// Summarize a selection for display, one clause per facet in selection order
/// Values of the same facet are joined with OR, facets with "; "
pub fn format_active_filters(
    selected: &[RefinementFilter],
    configuration: &[RefinerConfiguration],
) -> String {
    let mut clauses: Vec<(&str, Vec<&str>)> = Vec::new();

    for filter in selected {
        match clauses
            .iter_mut()
            .find(|(name, _)| *name == filter.filter_name)
        {
            Some((_, values)) => values.push(filter.value.value.as_str()),
            None => clauses.push((
                filter.filter_name.as_str(),
                vec![filter.value.value.as_str()],
            )),
        }
    }

    clauses
        .iter()
        .map(|(name, values)| {
            format!(
                "{}: {}",
                resolve_display_name(name, configuration),
                values.join(" OR ")
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}
