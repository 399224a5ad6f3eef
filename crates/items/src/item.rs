use serde::{Deserialize, Serialize};

use itemservice_core::{Entity, ItemId};

/// A persisted item.
///
/// No invariants are enforced at construction; whether the record is *valid*
/// is decided by the validator, not by the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: Option<i64>,
    pub quantity: Option<i64>,
}

impl Item {
    /// Attach a repository-assigned id to a draft.
    pub fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            quantity: draft.quantity,
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A candidate item as submitted by a form, before it has an identity.
///
/// All fields are optional in spirit: `name` may be blank and the numeric
/// fields may be absent. The draft stays transient until validation yields
/// zero findings and the repository assigns an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub price: Option<i64>,
    pub quantity: Option<i64>,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, price: Option<i64>, quantity: Option<i64>) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}

impl From<Item> for ItemDraft {
    /// Strip the identity off a persisted item (edit flows re-validate the
    /// draft, not the stored record).
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}
