use sea_orm::entity::prelude::*;

// No foreign key on task_id; comments survive deletion of their task.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub comment_id: i32,
    pub content: String,
    pub timestamp: DateTimeWithTimeZone,
    #[sea_orm(indexed)]
    pub task_id: i32,
    #[sea_orm(indexed)]
    pub user_id: i32,
}

impl ActiveModelBehavior for ActiveModel {}
