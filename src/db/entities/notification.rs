use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub notification_id: i32,
    #[sea_orm(indexed)]
    pub task_id: Option<i32>,
    #[sea_orm(indexed)]
    pub user_id: Option<i32>,
    pub message: String,
    #[sea_orm(indexed)]
    pub timestamp: DateTimeWithTimeZone,
}

impl ActiveModelBehavior for ActiveModel {}
