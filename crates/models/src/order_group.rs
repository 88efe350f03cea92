use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, item, order_detail, user};

/// How the lines of an order group are shipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// ship everything together
    #[default]
    #[sea_orm(string_value = "ALL")]
    All,
    /// ship each line on its own
    #[sea_orm(string_value = "EACH")]
    Each,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub status: String,
    pub order_type: OrderType,
    pub rev_address: String,
    pub rev_name: String,
    pub payment_type: String,
    pub total_price: Decimal,
    pub total_quantity: i32,
    pub order_at: Option<DateTimeWithTimeZone>,
    pub arrival_date: Option<Date>,
    pub user_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { User, OrderDetail }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::OrderDetail => Entity::has_many(order_detail::Entity).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<order_detail::Entity> for Entity {
    fn to() -> RelationDef { Relation::OrderDetail.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_totals(total_price: Decimal, total_quantity: i32) -> Result<(), errors::ModelError> {
    item::validate_price("total_price", total_price)?;
    if total_quantity < 0 {
        return Err(errors::ModelError::Validation("total_quantity must not be negative".into()));
    }
    Ok(())
}
