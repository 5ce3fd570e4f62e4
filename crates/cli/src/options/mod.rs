mod format_options;
mod sync_options;

pub use format_options::FormatOptions;
pub use sync_options::SyncFlags;
