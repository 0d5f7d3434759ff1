pub mod achievements;
pub mod archives;
pub mod santri;
pub mod setoran;

pub use achievements::AchievementService;
pub use archives::ArchiveService;
pub use santri::SantriService;
pub use setoran::SetoranService;
