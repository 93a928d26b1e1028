use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::widget;

/// API-facing view of a widget. Identical to the entity minus the surrogate
/// identity, which is never exposed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WidgetDto {
    #[schema(example = "Widget von Hammersmark")]
    pub name: String,
    #[schema(example = "A widget description")]
    pub description: String,
    /// Serialized as a JSON number, matching the wire format clients expect.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    #[schema(value_type = f64, example = 10.00)]
    pub price: Decimal,
}

impl From<widget::Model> for WidgetDto {
    fn from(model: widget::Model) -> Self {
        Self {
            name: model.name,
            description: model.description,
            price: model.price,
        }
    }
}
