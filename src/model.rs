use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Studio,
    Room,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Villa,
        PropertyType::Studio,
        PropertyType::Room,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Villa => "villa",
            PropertyType::Studio => "studio",
            PropertyType::Room => "room",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Villa => "Villa",
            PropertyType::Studio => "Studio",
            PropertyType::Room => "Room",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "apartment" => Some(PropertyType::Apartment),
            "house" => Some(PropertyType::House),
            "villa" => Some(PropertyType::Villa),
            "studio" => Some(PropertyType::Studio),
            "room" => Some(PropertyType::Room),
            _ => None,
        }
    }
}

/// Display label for a stored type code. Codes outside the table are shown as-is.
pub fn type_label(code: &str) -> &str {
    match PropertyType::parse(code) {
        Some(kind) => kind.label(),
        None => code,
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    Unavailable,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Unavailable => "unavailable",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "available" => Some(PropertyStatus::Available),
            "unavailable" => Some(PropertyStatus::Unavailable),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub city: String,
    /// Raw type code as stored; see [`PropertyType::parse`].
    pub property_type: String,
    pub price: f64,
    pub rooms: i64,
    pub bathrooms: i64,
    pub surface: f64,
    pub status: PropertyStatus,
    pub featured: bool,
    pub created_at: NaiveDateTime,
}

impl Property {
    pub fn type_label(&self) -> &str {
        type_label(&self.property_type)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyImage {
    pub id: i64,
    pub property_id: i64,
    pub image_path: String,
    pub created_at: NaiveDateTime,
}

/// Fields for a property row about to be inserted.
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub title: String,
    pub city: String,
    pub property_type: String,
    pub price: f64,
    pub rooms: i64,
    pub bathrooms: i64,
    pub surface: f64,
    pub status: PropertyStatus,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
}

/// Optional criteria for a listing query. Unset fields do not filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropertyFilter {
    pub status: Option<PropertyStatus>,
    pub featured: Option<bool>,
    pub city: Option<String>,
    pub property_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[serde(default)]
    pub sort: SortOrder,
    pub limit: Option<u32>,
}

impl PropertyFilter {
    /// Available, featured listings, newest first.
    pub fn featured_available(limit: u32) -> Self {
        Self {
            status: Some(PropertyStatus::Available),
            featured: Some(true),
            sort: SortOrder::Newest,
            limit: Some(limit),
            ..Default::default()
        }
    }

    /// Available listings, newest first.
    pub fn available_newest(limit: u32) -> Self {
        Self {
            status: Some(PropertyStatus::Available),
            sort: SortOrder::Newest,
            limit: Some(limit),
            ..Default::default()
        }
    }
}
