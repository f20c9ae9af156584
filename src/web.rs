use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::config::{Config, Site};
use crate::home::{self, HomeSettings};
use crate::render;
use crate::store::PropertyStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PropertyStore>,
    pub site: Site,
    pub home: HomeSettings,
}

impl AppState {
    pub fn new(store: Arc<dyn PropertyStore>, cfg: &Config) -> Self {
        Self {
            store,
            site: cfg.site.clone(),
            home: HomeSettings::from(cfg),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home_page(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let data = home::load_home(state.store.as_ref(), &state.home).await?;
    Ok(Html(render::render_home_page(&state.site, &data)))
}

/// Data-layer failure surfaced to the client as a bare 500.
#[derive(Debug)]
pub struct WebError(anyhow::Error);

impl<E> From<E> for WebError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!(err = ?self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::model::{Property, PropertyFilter, PropertyImage};
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    struct BrokenStore;

    #[async_trait]
    impl PropertyStore for BrokenStore {
        async fn get_all(&self, _filter: &PropertyFilter) -> Result<Vec<Property>> {
            Err(anyhow!("database is gone"))
        }

        async fn get_property_images(&self, _property_id: i64) -> Result<Vec<PropertyImage>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn store_failure_is_500() {
        let cfg: Config = serde_yaml::from_str(config::example()).unwrap();
        let app = router(AppState::new(Arc::new(BrokenStore), &cfg));
        let res = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Internal Server Error");
    }
}
