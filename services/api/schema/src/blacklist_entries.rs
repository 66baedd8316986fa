use sea_orm::entity::prelude::*;

/// Blacklist record maintained through the dashboard. At least one of
/// {phone, instagram} is present; phone values are unique across entries.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blacklist_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    #[sea_orm(unique)]
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub reason: String,
    pub created_by: i32,
    pub updated_by: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    CreatedByUser,
}

impl ActiveModelBehavior for ActiveModel {}
