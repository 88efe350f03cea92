use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, order_detail};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    #[default]
    #[sea_orm(string_value = "REGISTERED")]
    Registered,
    #[sea_orm(string_value = "UNREGISTERED")]
    Unregistered,
    /// Listed but not yet on sale.
    #[sea_orm(string_value = "WAITING")]
    Waiting,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub status: ItemStatus,
    pub name: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub price: Decimal,
    pub brand_name: Option<String>,
    pub registered_at: Option<DateTimeWithTimeZone>,
    pub unregistered_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { OrderDetail }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::OrderDetail => Entity::has_many(order_detail::Entity).into() }
    }
}

impl Related<order_detail::Entity> for Entity {
    fn to() -> RelationDef { Relation::OrderDetail.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Prices are stored as non-negative decimals.
pub fn validate_price(field: &str, price: Decimal) -> Result<(), errors::ModelError> {
    if price < Decimal::ZERO {
        return Err(errors::ModelError::Validation(format!("{field} must not be negative")));
    }
    Ok(())
}
