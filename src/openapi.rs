use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Widget API",
        description = "A CRUD REST service for managing widgets."
    ),
    paths(
        crate::handlers::widgets::get_all_widgets,
        crate::handlers::widgets::create_widget,
        crate::handlers::widgets::get_widget_by_name,
        crate::handlers::widgets::update_widget,
        crate::handlers::widgets::delete_widget,
    ),
    components(schemas(
        crate::dto::WidgetDto,
        crate::handlers::widgets::CreateWidgetRequest,
        crate::handlers::widgets::UpdateWidgetRequest,
        crate::errors::ErrorResponse,
    )),
    tags(
        (name = "widgets", description = "Widget management endpoints")
    )
)]
pub struct ApiDoc;

/// Swagger UI mounted at /api-docs, serving the document at
/// /api-docs/openapi.json.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}
