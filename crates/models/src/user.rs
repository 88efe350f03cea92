use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::order_group;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[default]
    #[sea_orm(string_value = "REGISTERED")]
    Registered,
    #[sea_orm(string_value = "UNREGISTERED")]
    Unregistered,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub account: String,
    pub password: String,
    pub status: UserStatus,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub registered_at: Option<DateTimeWithTimeZone>,
    pub unregistered_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    OrderGroup,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::OrderGroup => Entity::has_many(order_group::Entity).into() }
    }
}

impl Related<order_group::Entity> for Entity {
    fn to() -> RelationDef { Relation::OrderGroup.def() }
}

impl ActiveModelBehavior for ActiveModel {}
