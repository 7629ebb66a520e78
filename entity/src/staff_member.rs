use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "staff_member")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_id: String,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub active: bool,
    pub minecraft_nick: Option<String>,
    pub banner_url: Option<String>,
    pub warn_count: i32,
    pub balance: i64,
    pub last_withdraw_at: Option<DateTimeUtc>,
    pub loa_until: Option<DateTimeUtc>,
    pub loa_reason: Option<String>,
    pub synced_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::staff_member_role::Entity")]
    StaffMemberRole,
}

impl Related<super::staff_member_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StaffMemberRole.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
