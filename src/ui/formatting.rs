use refiners_core::PanelView;
use slint::{ModelRc, SharedString, VecModel};
use std::rc::Rc;

use crate::{CheckboxRow, GroupRow};

/// Convert the panel view into rows for the grouped list
pub fn create_group_rows(view: &PanelView) -> Vec<GroupRow> {
    view.groups
        .iter()
        .map(|group| {
            let items: Vec<CheckboxRow> = group
                .items
                .iter()
                .map(|item| CheckboxRow {
                    label: SharedString::from(item.label.as_str()),
                    checked: item.checked,
                })
                .collect();

            GroupRow {
                key: group.key as i32,
                name: SharedString::from(group.name.as_str()),
                collapsed: group.is_collapsed,
                items: ModelRc::from(Rc::new(VecModel::from(items))),
            }
        })
        .collect()
}

/// Status line after the panel reported a selection
pub fn format_filter_count(count: usize) -> String {
    match count {
        0 => "All filters removed".to_string(),
        1 => "1 filter applied".to_string(),
        n => format!("{} filters applied", n),
    }
}

/// Status line after a file was loaded
pub fn format_load_status(facets: usize, warnings: usize) -> String {
    let noun = if facets == 1 { "refiner" } else { "refiners" };
    match warnings {
        0 => format!("Loaded {} {}", facets, noun),
        1 => format!("Loaded {} {} with 1 warning", facets, noun),
        n => format!("Loaded {} {} with {} warnings", facets, noun, n),
    }
}
