use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "appeal")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub discord_id: String,
    #[sea_orm(unique)]
    pub action_log_id: i32,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub status: String,
    pub reviewed_by: Option<String>,
    pub created_at: DateTimeUtc,
    pub reviewed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::action_log::Entity",
        from = "Column::ActionLogId",
        to = "super::action_log::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ActionLog,
}

impl Related<super::action_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActionLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
