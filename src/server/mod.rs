//! HTTP surface over the catalog.
//!
//! Form submissions redirect back to the listing on success. Validation
//! failures answer `400`, storage failures `500`.

use std::net::SocketAddr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde_json::json;
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::error::{RecipeError, Result};
use crate::recipe::{parse_recipe_id, NewRecipe, Recipe};

/// Error returned by handlers, paired with the message shown for server faults.
pub struct ApiError {
    error: RecipeError,
    context: &'static str,
}

impl ApiError {
    fn new(context: &'static str) -> impl FnOnce(RecipeError) -> Self {
        move |error| Self { error, context }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.error.is_validation() {
            return (StatusCode::BAD_REQUEST, self.error.to_string()).into_response();
        }

        error!("{}: {}", self.context, self.error);
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{}.", self.context)).into_response()
    }
}

/// Build the application router.
pub fn router(catalog: Catalog) -> Router {
    Router::new()
        .route("/", get(list_recipes))
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route("/recipes/{id}/delete", post(delete_recipe))
        .route("/health", get(health))
        .with_state(catalog)
}

/// Serve until Ctrl-C.
pub async fn serve(catalog: Catalog, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Recipe box is running at http://{}", listener.local_addr()?);

    axum::serve(listener, router(catalog))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_recipes(
    State(catalog): State<Catalog>,
) -> std::result::Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = catalog
        .list_recipes()
        .await
        .map_err(ApiError::new("Failed to load recipes"))?;
    Ok(Json(recipes))
}

async fn create_recipe(
    State(catalog): State<Catalog>,
    Form(input): Form<NewRecipe>,
) -> std::result::Result<Redirect, ApiError> {
    catalog
        .create_recipe(&input)
        .await
        .map_err(ApiError::new("Failed to save recipe"))?;
    Ok(Redirect::to("/"))
}

async fn delete_recipe(
    State(catalog): State<Catalog>,
    Path(raw_id): Path<String>,
) -> std::result::Result<Redirect, ApiError> {
    let id = parse_recipe_id(&raw_id)
        .map_err(RecipeError::from)
        .map_err(ApiError::new("Failed to delete recipe"))?;
    catalog
        .delete_recipe(id)
        .await
        .map_err(ApiError::new("Failed to delete recipe"))?;
    Ok(Redirect::to("/"))
}
