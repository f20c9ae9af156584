//! Database module: pool setup and SQL repositories.
//!
//! - `repo`: SQL-only functions that map rows into `crate::model` entities.
//! - `SqliteStore`: the [`PropertyStore`] backed by those functions.
//!
//! External modules should import from `rental_home::db`; the repository API
//! is re-exported here.

pub mod repo;

pub use repo::*;

use crate::model::{Property, PropertyFilter, PropertyImage};
use crate::store::PropertyStore;
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: Pool,
}

impl SqliteStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyStore for SqliteStore {
    async fn get_all(&self, filter: &PropertyFilter) -> Result<Vec<Property>> {
        repo::list_properties(&self.pool, filter).await
    }

    async fn get_property_images(&self, property_id: i64) -> Result<Vec<PropertyImage>> {
        repo::property_images(&self.pool, property_id).await
    }
}
