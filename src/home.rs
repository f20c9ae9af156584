//! Data for the homepage: the featured and recent listing sets, each with its
//! primary image resolved.
use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::config::{Config, Home, Site};
use crate::model::{Property, PropertyFilter, PropertyImage};
use crate::store::PropertyStore;

/// A property paired with the image source its card should show.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub property: Property,
    pub image_src: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeData {
    pub featured: Vec<Listing>,
    pub recent: Vec<Listing>,
}

/// What the loader needs from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeSettings {
    pub featured_limit: u32,
    pub recent_limit: u32,
    pub upload_path: String,
    pub placeholder_image: String,
}

impl HomeSettings {
    pub fn new(site: &Site, home: &Home) -> Self {
        Self {
            featured_limit: home.featured_limit,
            recent_limit: home.recent_limit,
            upload_path: site.upload_path.clone(),
            placeholder_image: site.placeholder_image.clone(),
        }
    }
}

impl From<&Config> for HomeSettings {
    fn from(cfg: &Config) -> Self {
        Self::new(&cfg.site, &cfg.home)
    }
}

/// Upload-prefixed path of the first image, or the placeholder when there is none.
pub fn primary_image_src(images: &[PropertyImage], upload_path: &str, placeholder: &str) -> String {
    match images.first() {
        Some(img) => format!("{}{}", upload_path, img.image_path),
        None => placeholder.to_string(),
    }
}

#[instrument(skip_all)]
pub async fn load_home(store: &dyn PropertyStore, settings: &HomeSettings) -> Result<HomeData> {
    let featured = store
        .get_all(&PropertyFilter::featured_available(settings.featured_limit))
        .await
        .context("failed to load featured properties")?;
    let featured = attach_images(store, featured, settings).await?;

    let recent = store
        .get_all(&PropertyFilter::available_newest(settings.recent_limit))
        .await
        .context("failed to load recent properties")?;
    let recent = attach_images(store, recent, settings).await?;

    debug!(
        featured = featured.len(),
        recent = recent.len(),
        "homepage listings loaded"
    );
    Ok(HomeData { featured, recent })
}

async fn attach_images(
    store: &dyn PropertyStore,
    properties: Vec<Property>,
    settings: &HomeSettings,
) -> Result<Vec<Listing>> {
    let mut out = Vec::with_capacity(properties.len());
    for property in properties {
        let images = store
            .get_property_images(property.id)
            .await
            .with_context(|| format!("failed to load images for property {}", property.id))?;
        let image_src =
            primary_image_src(&images, &settings.upload_path, &settings.placeholder_image);
        out.push(Listing {
            property,
            image_src,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn image(path: &str) -> PropertyImage {
        PropertyImage {
            id: 1,
            property_id: 1,
            image_path: path.into(),
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn placeholder_when_no_images() {
        assert_eq!(
            primary_image_src(&[], "/uploads/", "/img/none.jpg"),
            "/img/none.jpg"
        );
    }

    #[test]
    fn first_image_wins() {
        let images = vec![image("p1/front.jpg"), image("p1/back.jpg")];
        assert_eq!(
            primary_image_src(&images, "/uploads/", "/img/none.jpg"),
            "/uploads/p1/front.jpg"
        );
    }
}
