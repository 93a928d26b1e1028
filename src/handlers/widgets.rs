use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};
use crate::{
    errors::ApiError,
    handlers::AppState,
    services::widgets::{NewWidget, WidgetUpdate},
};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

// Request DTOs

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWidgetRequest {
    #[validate(length(
        min = 3,
        max = 100,
        message = "Name must be between 3 and 100 characters"
    ))]
    #[schema(example = "Widget von Hammersmark")]
    pub name: String,

    #[validate(length(
        min = 5,
        max = 1000,
        message = "Description must be between 5 and 1000 characters"
    ))]
    #[schema(example = "A widget description")]
    pub description: String,

    #[validate(custom = "validate_price")]
    #[schema(value_type = f64, example = 10.00)]
    pub price: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateWidgetRequest {
    /// Accepted for payload compatibility but never applied; the stored name
    /// is immutable.
    #[schema(example = "ignored")]
    pub name: Option<String>,

    #[validate(length(
        min = 5,
        max = 1000,
        message = "Description must be between 5 and 1000 characters"
    ))]
    #[schema(example = "An updated widget description")]
    pub description: String,

    #[validate(custom = "validate_price")]
    #[schema(value_type = f64, example = 12.50)]
    pub price: Decimal,
}

/// Price constraints: [1.00, 20000.00], at most 2 fractional digits.
fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.normalize().scale() > 2 {
        let mut err = ValidationError::new("price_scale");
        err.message = Some("Price must be a number with up to 2 decimal places".into());
        return Err(err);
    }
    if *price < dec!(1.00) {
        let mut err = ValidationError::new("price_min");
        err.message = Some("Price must be at least 1".into());
        return Err(err);
    }
    if *price > dec!(20000.00) {
        let mut err = ValidationError::new("price_max");
        err.message = Some("Price must be less than or equal to 20,000".into());
        return Err(err);
    }
    Ok(())
}

// Handler functions

/// Get all widgets
#[utoipa::path(
    get,
    path = "/v1/widgets",
    responses(
        (status = 200, description = "Successful retrieval", body = [crate::dto::WidgetDto]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "widgets"
)]
pub async fn get_all_widgets(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let widgets = state
        .widgets
        .get_all_widgets()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(widgets))
}

/// Create a new widget
#[utoipa::path(
    post,
    path = "/v1/widgets",
    request_body = CreateWidgetRequest,
    responses(
        (status = 201, description = "Widget created", body = crate::dto::WidgetDto),
        (status = 400, description = "Validation failure or duplicate name", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "widgets"
)]
pub async fn create_widget(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateWidgetRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let created = state
        .widgets
        .create_widget(NewWidget {
            name: payload.name,
            description: payload.description,
            price: payload.price,
        })
        .await
        .map_err(map_service_error)?;

    Ok(created_response(created))
}

/// Get a widget by name
#[utoipa::path(
    get,
    path = "/v1/widgets/{name}",
    params(("name" = String, Path, description = "Name of the widget to be obtained")),
    responses(
        (status = 200, description = "Successful retrieval", body = crate::dto::WidgetDto),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "widgets"
)]
pub async fn get_widget_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let widget = state
        .widgets
        .get_widget_by_name(&name)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(widget))
}

/// Update a widget's description and price
#[utoipa::path(
    put,
    path = "/v1/widgets/{name}",
    params(("name" = String, Path, description = "Name of the widget to be updated")),
    request_body = UpdateWidgetRequest,
    responses(
        (status = 200, description = "Widget updated", body = crate::dto::WidgetDto),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "widgets"
)]
pub async fn update_widget(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(payload): Json<UpdateWidgetRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let updated = state
        .widgets
        .update_widget(
            &name,
            WidgetUpdate {
                description: payload.description,
                price: payload.price,
            },
        )
        .await
        .map_err(map_service_error)?;

    Ok(success_response(updated))
}

/// Delete a widget by name
#[utoipa::path(
    delete,
    path = "/v1/widgets/{name}",
    params(("name" = String, Path, description = "Name of the widget to be deleted")),
    responses(
        (status = 204, description = "Widget deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "widgets"
)]
pub async fn delete_widget(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .widgets
        .delete_widget(&name)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

pub fn widget_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_all_widgets).post(create_widget))
        .route(
            "/:name",
            get(get_widget_by_name)
                .put(update_widget)
                .delete(delete_widget),
        )
}
