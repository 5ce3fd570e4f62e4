mod bump;
mod config;
mod init;
mod sync;

pub use bump::BumpArgs;
pub use bump::handle_bump;
pub use bump::handle_increment;
pub use config::ConfigArgs;
pub use config::handle_config;
pub use init::InitArgs;
pub use init::handle_init;
pub use sync::SyncArgs;
pub use sync::handle_sync;
