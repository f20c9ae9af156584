use crate::model::{
    NewProperty, Property, PropertyFilter, PropertyImage, PropertyStatus, SortOrder,
};
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDateTime;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteRow};
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use std::str::FromStr;
use tracing::instrument;

pub type Pool = SqlitePool;

const PROPERTY_COLUMNS: &str =
    "id, title, city, property_type, price, rooms, bathrooms, surface, status, featured, created_at";

pub async fn init_pool(database_url: &str) -> Result<Pool> {
    let normalized = prepare_sqlite_url(database_url)?;
    let options = SqliteConnectOptions::from_str(&normalized)
        .with_context(|| format!("invalid database url {}", normalized))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(options).await?;
    Ok(pool)
}

/// If using a file-backed SQLite URL, expand a leading `~/` and ensure the parent
/// directory exists. Leaves in-memory URLs untouched. Returns possibly-updated URL.
fn prepare_sqlite_url(url: &str) -> Result<String> {
    if !url.starts_with("sqlite:") || url.starts_with("sqlite::memory") {
        return Ok(url.to_string());
    }

    let rest = &url["sqlite:".len()..];
    let path_with_query = rest.strip_prefix("//").unwrap_or(rest);

    let (path_part, query_part) = match path_with_query.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path_with_query, None),
    };

    if path_part.is_empty() {
        return Ok(url.to_string());
    }

    let expanded_path = match (path_part.strip_prefix("~/"), std::env::var("HOME")) {
        (Some(rest), Ok(home)) => format!("{}/{}", home.trim_end_matches('/'), rest),
        _ => path_part.to_string(),
    };

    if let Some(parent) = std::path::Path::new(&expanded_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }
    }

    let mut rebuilt = String::from("sqlite://");
    rebuilt.push_str(&expanded_path);
    if let Some(q) = query_part {
        rebuilt.push('?');
        rebuilt.push_str(q);
    }
    Ok(rebuilt)
}

pub async fn run_migrations(pool: &Pool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

fn map_property(row: &SqliteRow) -> Result<Property> {
    let status: String = row.try_get("status")?;
    let status = PropertyStatus::parse(&status)
        .ok_or_else(|| anyhow!("unknown property status '{}'", status))?;
    Ok(Property {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        city: row.try_get("city")?,
        property_type: row.try_get("property_type")?,
        price: row.try_get("price")?,
        rooms: row.try_get("rooms")?,
        bathrooms: row.try_get("bathrooms")?,
        surface: row.try_get("surface")?,
        status,
        featured: row.try_get("featured")?,
        created_at: row.try_get::<NaiveDateTime, _>("created_at")?,
    })
}

/// Listing query. Every `Some` criterion narrows the result; text criteria
/// that are blank after trimming are ignored.
#[instrument(skip_all)]
pub async fn list_properties(pool: &Pool, filter: &PropertyFilter) -> Result<Vec<Property>> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
        "SELECT {} FROM properties WHERE 1 = 1",
        PROPERTY_COLUMNS
    ));

    if let Some(status) = filter.status {
        qb.push(" AND status = ").push_bind(status.as_str());
    }
    if let Some(featured) = filter.featured {
        qb.push(" AND featured = ").push_bind(featured);
    }
    if let Some(city) = non_blank(filter.city.as_deref()) {
        qb.push(" AND city LIKE ")
            .push_bind(format!("%{}%", escape_like(city)))
            .push(" ESCAPE '\\'");
    }
    if let Some(code) = non_blank(filter.property_type.as_deref()) {
        qb.push(" AND property_type = ").push_bind(code.to_string());
    }
    if let Some(min) = filter.min_price {
        qb.push(" AND price >= ").push_bind(min);
    }
    if let Some(max) = filter.max_price {
        qb.push(" AND price <= ").push_bind(max);
    }

    qb.push(match filter.sort {
        SortOrder::Newest => " ORDER BY datetime(created_at) DESC, id DESC",
        SortOrder::PriceAsc => " ORDER BY price ASC, id ASC",
        SortOrder::PriceDesc => " ORDER BY price DESC, id ASC",
    });

    if let Some(limit) = filter.limit {
        qb.push(" LIMIT ").push_bind(i64::from(limit));
    }

    let rows = qb.build().fetch_all(pool).await?;
    rows.iter().map(map_property).collect()
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Make user text literal inside a `LIKE ... ESCAPE '\'` pattern.
fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Images for one property in insertion order; the first is the primary image.
#[instrument(skip_all)]
pub async fn property_images(pool: &Pool, property_id: i64) -> Result<Vec<PropertyImage>> {
    let rows = sqlx::query(
        "SELECT id, property_id, image_path, created_at FROM property_images WHERE property_id = ? ORDER BY id ASC",
    )
    .bind(property_id)
    .fetch_all(pool)
    .await?;
    rows.iter()
        .map(|row| {
            Ok(PropertyImage {
                id: row.try_get("id")?,
                property_id: row.try_get("property_id")?,
                image_path: row.try_get("image_path")?,
                created_at: row.try_get::<NaiveDateTime, _>("created_at")?,
            })
        })
        .collect()
}

#[instrument(skip_all)]
pub async fn insert_property(pool: &Pool, p: &NewProperty) -> Result<i64> {
    let rec = sqlx::query(
        "INSERT INTO properties (title, city, property_type, price, rooms, bathrooms, surface, status, featured) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&p.title)
    .bind(&p.city)
    .bind(&p.property_type)
    .bind(p.price)
    .bind(p.rooms)
    .bind(p.bathrooms)
    .bind(p.surface)
    .bind(p.status.as_str())
    .bind(p.featured)
    .fetch_one(pool)
    .await?;
    Ok(rec.get::<i64, _>("id"))
}

#[instrument(skip_all)]
pub async fn insert_property_image(pool: &Pool, property_id: i64, image_path: &str) -> Result<i64> {
    let rec = sqlx::query(
        "INSERT INTO property_images (property_id, image_path) VALUES (?, ?) RETURNING id",
    )
    .bind(property_id)
    .bind(image_path)
    .fetch_one(pool)
    .await?;
    Ok(rec.get::<i64, _>("id"))
}
