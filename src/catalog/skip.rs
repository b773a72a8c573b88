//! Skip record as returned by the catalog endpoint
//!
//! Records are read-only once fetched. Optional prices and locations are kept as
//! `Option` and rendered with a placeholder by the display helpers below.

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder for an absent location field
pub const LOCATION_PLACEHOLDER: &str = "N/A";

/// Placeholder for an absent monetary or percentage field
pub const AMOUNT_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skip {
    pub id: u64,
    pub size: u32,
    #[serde(default)]
    pub price_before_vat: Option<f64>,
    #[serde(default)]
    pub vat: Option<f64>,
    #[serde(default)]
    pub transport_cost: Option<f64>,
    #[serde(default)]
    pub per_tonne_cost: Option<f64>,
    pub hire_period_days: u32,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub postcode: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub area: Option<String>,
    #[serde(default)]
    pub allowed_on_road: bool,
    #[serde(default)]
    pub allows_heavy_waste: bool,
    #[serde(default)]
    pub forbidden: bool,
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

impl Skip {
    /// Card heading, e.g. "6 Yard"
    pub fn size_label(&self) -> String {
        format!("{} Yard", self.size)
    }

    /// Detail heading, e.g. "6-Yard Skip"
    pub fn title(&self) -> String {
        format!("{}-Yard Skip", self.size)
    }

    pub fn price_label(&self) -> String {
        format_currency(self.price_before_vat)
    }

    pub fn hire_period_label(&self) -> String {
        format!("{} days", self.hire_period_days)
    }

    pub fn vat_label(&self) -> String {
        match self.vat {
            Some(vat) => format!("{}%", vat),
            None => AMOUNT_PLACEHOLDER.to_string(),
        }
    }

    pub fn postcode_label(&self) -> &str {
        self.postcode.as_deref().unwrap_or(LOCATION_PLACEHOLDER)
    }

    pub fn area_label(&self) -> &str {
        self.area.as_deref().unwrap_or(LOCATION_PLACEHOLDER)
    }

    pub fn transport_cost_label(&self) -> String {
        format_currency(self.transport_cost)
    }

    pub fn per_tonne_cost_label(&self) -> String {
        format_currency(self.per_tonne_cost)
    }

    pub fn road_label(&self) -> &'static str {
        if self.allowed_on_road {
            "Allowed on Road"
        } else {
            "Not Allowed on Road"
        }
    }

    pub fn heavy_waste_label(&self) -> &'static str {
        if self.allows_heavy_waste {
            "Allows Heavy Waste"
        } else {
            "No Heavy Waste"
        }
    }
}

/// Formats a pound amount, or the placeholder when absent
pub fn format_currency(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("£{}", value),
        None => AMOUNT_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
#[path = "skip_tests.rs"]
mod skip_tests;
