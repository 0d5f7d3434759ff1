//! SeaORM entity definitions
//!
//! These entities mirror the database schema and are separate from the
//! business models in `models`. The storage layer runs CRUD against them and
//! converts rows into business models at the boundary.

pub mod prelude;

pub mod santri;
pub mod setoran;
pub mod setoran_archives;
