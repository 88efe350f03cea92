use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, item, order_group};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_detail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub status: String,
    pub arrival_date: Option<DateTimeWithTimeZone>,
    pub quantity: i32,
    pub total_price: Decimal,
    pub order_group_id: i64,
    pub item_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { OrderGroup, Item }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::OrderGroup => Entity::belongs_to(order_group::Entity)
                .from(Column::OrderGroupId)
                .to(order_group::Column::Id)
                .into(),
            Relation::Item => Entity::belongs_to(item::Entity).from(Column::ItemId).to(item::Column::Id).into(),
        }
    }
}

impl Related<order_group::Entity> for Entity {
    fn to() -> RelationDef { Relation::OrderGroup.def() }
}

impl Related<item::Entity> for Entity {
    fn to() -> RelationDef { Relation::Item.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_line(quantity: i32, total_price: Decimal) -> Result<(), errors::ModelError> {
    if quantity < 0 {
        return Err(errors::ModelError::Validation("quantity must not be negative".into()));
    }
    item::validate_price("total_price", total_price)
}
