mod detect_indent;
mod display_result;
mod get_config;
mod manifest;
mod resolve_path;
pub mod semver;

pub use detect_indent::detect_indent;
pub use display_result::display_sync_result;
pub use get_config::{CONFIG_FILE_NAME, get_config, get_config_path, load_config};
pub use manifest::{read_manifest_version, write_manifest_version};
pub use resolve_path::resolve_path;
pub use semver::{
    compare_versions, format_version, increment_version, is_valid_semver, next_version,
    parse_version,
};
