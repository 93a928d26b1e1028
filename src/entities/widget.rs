use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Widget entity
///
/// `name` carries a database unique index and serves as the external lookup
/// key; `id` is a surrogate that never leaves the persistence layer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "widgets")]
pub struct Model {
    /// Surrogate primary key, assigned by the store on insert
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i64,

    /// Widget name, unique across all records, immutable after create
    #[sea_orm(unique)]
    pub name: String,

    /// Widget description
    pub description: String,

    /// Widget price, DECIMAL(7,2)
    #[sea_orm(column_type = "Decimal(Some((7, 2)))")]
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
