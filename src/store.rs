use anyhow::Result;
use async_trait::async_trait;

use crate::model::{Property, PropertyFilter, PropertyImage};

/// Read access to listings. The homepage only ever goes through this seam.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    async fn get_all(&self, filter: &PropertyFilter) -> Result<Vec<Property>>;

    /// Images for one property, primary first.
    async fn get_property_images(&self, property_id: i64) -> Result<Vec<PropertyImage>>;
}
