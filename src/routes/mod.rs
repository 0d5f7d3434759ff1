pub mod achievements;

pub mod archives;

pub mod santri;

pub mod setoran;

pub mod system;

pub use achievements::configure_achievement_routes;
pub use archives::configure_archive_routes;
pub use santri::configure_santri_routes;
pub use setoran::configure_setoran_routes;
pub use system::configure_system_routes;
