//! Convenience re-exports for the storage layer

pub use super::santri::{ActiveModel as SantriActiveModel, Entity as Santri, Model as SantriModel};
pub use super::setoran::{
    ActiveModel as SetoranActiveModel, Entity as Setoran, Model as SetoranModel,
};
pub use super::setoran_archives::{
    ActiveModel as SetoranArchiveActiveModel, Entity as SetoranArchives,
    Model as SetoranArchiveModel,
};
