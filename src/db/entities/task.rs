use sea_orm::entity::prelude::*;

use super::enums::{TaskPriority, TaskStatus};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub task_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub deadline: Date,
    #[sea_orm(indexed)]
    pub user_id: i32,
    #[sea_orm(indexed)]
    pub tasklist_id: Option<i32>,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub updated_at: DateTimeWithTimeZone,
    #[sea_orm(belongs_to, from = "user_id", to = "user_id")]
    pub assignee: HasOne<super::user::Entity>,
    #[sea_orm(belongs_to, from = "tasklist_id", to = "tasklist_id")]
    pub task_list: HasOne<super::task_list::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
