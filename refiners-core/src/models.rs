use serde::{Deserialize, Serialize};

/// A candidate value of a facet together with its result count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementValue {
    #[serde(rename = "RefinementValue")]
    pub value: String,
    #[serde(rename = "RefinementToken")]
    pub token: String,
    #[serde(rename = "RefinementCount", default)]
    pub count: u64,
}

impl RefinementValue {
    pub fn new(value: impl Into<String>, token: impl Into<String>, count: u64) -> Self {
        Self {
            value: value.into(),
            token: token.into(),
            count,
        }
    }
}

/// A facet name paired with one of its values; the unit of selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementFilter {
    #[serde(rename = "FilterName")]
    pub filter_name: String,
    #[serde(rename = "Value")]
    pub value: RefinementValue,
}

impl RefinementFilter {
    pub fn new(filter_name: impl Into<String>, value: RefinementValue) -> Self {
        Self {
            filter_name: filter_name.into(),
            value,
        }
    }

    /// Token identifying this filter within a selection
    pub fn token(&self) -> &str {
        &self.value.token
    }
}

/// A facet and its ordered candidate values as returned by the search backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableFilter {
    #[serde(rename = "FilterName")]
    pub filter_name: String,
    #[serde(rename = "Values", default)]
    pub values: Vec<RefinementValue>,
}

impl AvailableFilter {
    /// Build the selectable filter for the value at `index`
    pub fn refinement(&self, index: usize) -> Option<RefinementFilter> {
        self.values
            .get(index)
            .map(|value| RefinementFilter::new(&self.filter_name, value.clone()))
    }
}

/// Display settings for one refiner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinerConfiguration {
    #[serde(rename = "refinerName")]
    pub refiner_name: String,
    #[serde(
        rename = "displayValue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_value: Option<String>,
}

/// On-disk bundle of refiner results and their configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinerDocument {
    #[serde(rename = "availableFilters", default)]
    pub available_filters: Vec<AvailableFilter>,
    #[serde(rename = "refinersConfiguration", default)]
    pub refiners_configuration: Vec<RefinerConfiguration>,
}
