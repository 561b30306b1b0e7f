//! Training entity for database

use sea_orm::entity::prelude::*;

/// Activity type as stored in the `activity_type` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ActivityType {
    #[sea_orm(string_value = "RUNNING")]
    Running,
    #[sea_orm(string_value = "CYCLING")]
    Cycling,
    #[sea_orm(string_value = "WALKING")]
    Walking,
    #[sea_orm(string_value = "SWIMMING")]
    Swimming,
    #[sea_orm(string_value = "TENNIS")]
    Tennis,
}

/// Training model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trainings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Owner; cleared when the user is deleted
    pub user_id: Option<i64>,

    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub activity_type: ActivityType,

    /// Kilometres
    #[sea_orm(column_type = "Double")]
    pub distance: f64,

    /// Kilometres per hour
    #[sea_orm(column_type = "Double")]
    pub average_speed: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
