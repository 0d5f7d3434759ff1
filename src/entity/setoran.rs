//! Setoran entity
//!
//! `tanggal` and `created_at` are epoch seconds; `archived_at` is null while
//! the row is active and set once by the archival workflow.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "setoran")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub santri_id: i64,
    pub tanggal: i64,
    pub juz: i32,
    pub surat: String,
    pub awal_ayat: i32,
    pub akhir_ayat: i32,
    pub kelancaran: i32,
    pub tajwid: i32,
    pub tahsin: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub catatan: Option<String>,
    pub diuji_oleh: String,
    pub created_at: i64,
    pub archived_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::santri::Entity",
        from = "Column::SantriId",
        to = "super::santri::Column::Id"
    )]
    Santri,
}

impl Related<super::santri::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Santri.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
