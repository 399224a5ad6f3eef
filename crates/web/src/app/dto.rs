//! The item form DTO and binder-level coercion.
//!
//! Binding is distinct from validation: binding turns raw submitted text into
//! typed fields, and a field that cannot be coerced is a *binding* failure
//! reported per field. Any binding failure short-circuits straight to the
//! re-rendered form without running the semantic validator.

use serde::Deserialize;

use itemservice_items::{Finding, Item, ItemDraft};

/// Raw form fields exactly as submitted (urlencoded text).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub quantity: String,
}

impl ItemForm {
    /// Pre-populate the form from a persisted item (edit flow).
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.map(|p| p.to_string()).unwrap_or_default(),
            quantity: item.quantity.map(|q| q.to_string()).unwrap_or_default(),
        }
    }

    /// Coerce the raw fields into a draft.
    ///
    /// Blank numeric input coerces to `None` (absence is the validator's
    /// business, not a type error). Unparseable input yields one
    /// `typeMismatch` finding per offending field, carrying the raw text.
    pub fn bind(&self) -> Result<ItemDraft, Vec<Finding>> {
        let mut failures = Vec::new();

        let price = bind_i64("price", &self.price, &mut failures);
        let quantity = bind_i64("quantity", &self.quantity, &mut failures);

        if failures.is_empty() {
            Ok(ItemDraft::new(self.name.clone(), price, quantity))
        } else {
            Err(failures)
        }
    }
}

fn bind_i64(field: &'static str, raw: &str, failures: &mut Vec<Finding>) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => {
            failures.push(Finding::field(field, "typeMismatch").with_rejected(raw));
            None
        }
    }
}
