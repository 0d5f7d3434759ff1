//! Archive manifest entity
//!
//! One row per completed migration run; immutable after insert.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "setoran_archives")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub archive_name: String,
    pub google_sheet_id: String,
    pub google_sheet_url: String,
    pub period_start: i64,
    pub period_end: i64,
    pub total_records: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
