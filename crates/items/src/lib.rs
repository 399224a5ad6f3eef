//! `itemservice-items` — the item record and its validation rules.
//!
//! Validity is a *post-hoc* property here: an [`ItemDraft`] can always be
//! constructed, and the validator reports what is wrong with it as an ordered
//! list of [`Finding`]s rather than refusing construction.

pub mod finding;
pub mod item;
pub mod messages;
pub mod validate;

pub use finding::{Finding, FindingScope};
pub use item::{Item, ItemDraft};
pub use validate::Validate;
