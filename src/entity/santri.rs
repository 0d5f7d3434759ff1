//! Santri entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "santri")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nama: String,
    pub kelas: i32,
    pub jenis_kelamin: String,
    pub total_hafalan: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::setoran::Entity")]
    Setoran,
}

impl Related<super::setoran::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Setoran.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
