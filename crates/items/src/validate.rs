//! Item validation rules.
//!
//! The validator is a pure function over a draft: it never panics, never
//! mutates its input, and runs every rule unconditionally so that multiple
//! findings can coexist in one pass. Findings come back in rule order:
//! name, price, quantity, then the cross-field total.

use crate::finding::Finding;
use crate::item::ItemDraft;

/// Inclusive lower bound for `price`.
pub const PRICE_MIN: i64 = 1_000;
/// Inclusive upper bound for `price`.
pub const PRICE_MAX: i64 = 1_000_000;
/// `quantity >= QUANTITY_LIMIT` is rejected: 9999 itself is invalid, even
/// though the message reads "maximum 9999 allowed". Do not "fix" the boundary
/// without a product decision.
pub const QUANTITY_LIMIT: i64 = 9_999;
/// Minimum allowed value of `price * quantity`.
pub const TOTAL_MIN: i64 = 10_000;

/// Capability trait: a record type that knows how to validate itself.
///
/// Validation is registered against the concrete record type; there is no
/// runtime "supports this type" dispatch.
pub trait Validate {
    /// Produce the ordered findings for this record. Empty means valid.
    fn validate(&self) -> Vec<Finding>;
}

impl Validate for ItemDraft {
    fn validate(&self) -> Vec<Finding> {
        let mut findings = Vec::new();

        if self.name.trim().is_empty() {
            findings.push(Finding::field("name", "required"));
        }

        match self.price {
            Some(p) if (PRICE_MIN..=PRICE_MAX).contains(&p) => {}
            _ => findings.push(Finding::field("price", "range").with_args([PRICE_MIN, PRICE_MAX])),
        }

        match self.quantity {
            Some(q) if q < QUANTITY_LIMIT => {}
            _ => findings.push(Finding::field("quantity", "max").with_args([QUANTITY_LIMIT])),
        }

        if let (Some(price), Some(quantity)) = (self.price, self.quantity) {
            // The multiply can overflow on extreme input; saturate, never panic.
            let total = price.saturating_mul(quantity);
            if total < TOTAL_MIN {
                findings.push(Finding::form("totalPriceMin").with_args([TOTAL_MIN, total]));
            }
        }

        findings
    }
}
