//! Product repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `product` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `create` never reuses the id of a live row.
//! - Partial updates rewrite only the fields carried by the patch.

use crate::db::DbResult;
use crate::model::product::{Product, ProductId, ProductPatch};
use rusqlite::{params, Connection, Row};

const PRODUCT_SELECT_SQL: &str = "SELECT id, name, price FROM product";

/// Repository interface for product CRUD operations.
pub trait ProductRepository {
    /// Inserts a new row and returns the created record with its
    /// storage-assigned id. Name and price are stored as given; the
    /// caller is responsible for any semantic checks.
    fn create(&self, name: &str, price: i64) -> DbResult<Product>;

    /// Looks a row up by primary key. `None` means no such row.
    fn get(&self, id: ProductId) -> DbResult<Option<Product>>;

    /// Applies `patch` to the row with the given id and returns the
    /// updated record, or `None` when the row does not exist.
    fn update(&self, id: ProductId, patch: &ProductPatch) -> DbResult<Option<Product>>;

    /// Removes the row with the given id. `true` exactly when a row was
    /// deleted.
    fn delete(&self, id: ProductId) -> DbResult<bool>;

    /// Returns every row, ordered by id.
    fn list_all(&self) -> DbResult<Vec<Product>>;

    /// Removes every row and returns how many were deleted.
    fn delete_all(&self) -> DbResult<usize>;
}

/// SQLite-backed product repository borrowing the caller's connection.
pub struct SqliteProductRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProductRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProductRepository for SqliteProductRepository<'_> {
    fn create(&self, name: &str, price: i64) -> DbResult<Product> {
        self.conn.execute(
            "INSERT INTO product (name, price) VALUES (?1, ?2);",
            params![name, price],
        )?;

        Ok(Product {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            price,
        })
    }

    fn get(&self, id: ProductId) -> DbResult<Option<Product>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PRODUCT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_product_row(row)?));
        }

        Ok(None)
    }

    fn update(&self, id: ProductId, patch: &ProductPatch) -> DbResult<Option<Product>> {
        let Some(current) = self.get(id)? else {
            return Ok(None);
        };

        let updated = patch.apply_to(&current);
        self.conn.execute(
            "UPDATE product SET name = ?1, price = ?2 WHERE id = ?3;",
            params![updated.name, updated.price, id],
        )?;

        Ok(Some(updated))
    }

    fn delete(&self, id: ProductId) -> DbResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM product WHERE id = ?1;", params![id])?;
        Ok(changed > 0)
    }

    fn list_all(&self) -> DbResult<Vec<Product>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PRODUCT_SELECT_SQL} ORDER BY id;"))?;

        let mut rows = stmt.query([])?;
        let mut products = Vec::new();
        while let Some(row) = rows.next()? {
            products.push(parse_product_row(row)?);
        }

        Ok(products)
    }

    fn delete_all(&self) -> DbResult<usize> {
        let changed = self.conn.execute("DELETE FROM product;", [])?;
        Ok(changed)
    }
}

fn parse_product_row(row: &Row<'_>) -> DbResult<Product> {
    Ok(Product {
        id: row.get("id")?,
        name: row.get("name")?,
        price: row.get("price")?,
    })
}
