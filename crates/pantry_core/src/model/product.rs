//! Product domain model.
//!
//! # Responsibility
//! - Define the persisted product record and its text/wire renderings.
//! - Provide the patch type used for partial updates.
//!
//! # Invariants
//! - `id` is assigned by storage at insert time and never reused while
//!   the row exists.
//! - `name` and `price` are always present on a persisted record.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Storage-assigned identifier of a catalog row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProductId = i64;

/// One persisted catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Primary key, assigned by SQLite at insert time.
    pub id: ProductId,
    /// Display name of the product.
    pub name: String,
    /// Price as a plain integer amount; no currency unit is tracked.
    pub price: i64,
}

impl Display for Product {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product(id={}, name={}, price={})",
            self.id, self.name, self.price
        )
    }
}

/// Partial update for one product record.
///
/// A field set to `Some` is written as-is, including `Some(0)` and empty
/// strings; `None` leaves the stored value unchanged. This makes "no
/// change" distinguishable from a deliberate zero or empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<i64>,
}

impl ProductPatch {
    /// Returns the empty patch; applying it is a no-op.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement price.
    pub fn with_price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }

    /// Returns `self` applied on top of `current`.
    pub fn apply_to(&self, current: &Product) -> Product {
        Product {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            price: self.price.unwrap_or(current.price),
        }
    }
}
