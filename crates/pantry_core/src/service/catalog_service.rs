//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD and bulk entry points for catalog callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - The service layer remains storage-agnostic.

use crate::db::DbResult;
use crate::model::product::{Product, ProductId, ProductPatch};
use crate::repo::product_repo::ProductRepository;
use log::info;

/// Fixed seed rows inserted by [`CatalogService::seed_defaults`].
pub const DEFAULT_PRODUCTS: &[(&str, i64)] = &[
    ("Sugar", 32),
    ("Sult", 19),
    ("Bread", 20),
    ("Butter", 62),
    ("Milk", 32),
];

/// Use-case service wrapper for product catalog operations.
pub struct CatalogService<R: ProductRepository> {
    repo: R,
}

impl<R: ProductRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new product and returns it with its assigned id.
    pub fn create_product(&self, name: &str, price: i64) -> DbResult<Product> {
        self.repo.create(name, price)
    }

    /// Gets one product by id. `None` means no such product.
    pub fn get_product(&self, id: ProductId) -> DbResult<Option<Product>> {
        self.repo.get(id)
    }

    /// Applies a partial update and returns the updated product, or
    /// `None` when the id does not exist.
    pub fn update_product(&self, id: ProductId, patch: &ProductPatch) -> DbResult<Option<Product>> {
        self.repo.update(id, patch)
    }

    /// Deletes one product by id. `true` exactly when a row was removed.
    pub fn delete_product(&self, id: ProductId) -> DbResult<bool> {
        self.repo.delete(id)
    }

    /// Lists every product in the catalog.
    pub fn list_products(&self) -> DbResult<Vec<Product>> {
        self.repo.list_all()
    }

    /// Removes every product and returns how many rows were deleted.
    pub fn delete_all_products(&self) -> DbResult<usize> {
        let deleted = self.repo.delete_all()?;
        info!("event=catalog_wipe module=service status=ok deleted={deleted}");
        Ok(deleted)
    }

    /// Inserts the fixed default rows and returns the created records.
    ///
    /// # Contract
    /// - Insertion is unconditional; there is no dedup check, so calling
    ///   this twice yields duplicate names under fresh ids.
    pub fn seed_defaults(&self) -> DbResult<Vec<Product>> {
        let mut created = Vec::with_capacity(DEFAULT_PRODUCTS.len());
        for (name, price) in DEFAULT_PRODUCTS {
            created.push(self.repo.create(name, *price)?);
        }
        info!(
            "event=catalog_seed module=service status=ok inserted={}",
            created.len()
        );
        Ok(created)
    }
}
