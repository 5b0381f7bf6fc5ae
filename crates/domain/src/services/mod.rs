//! Business logic services.

pub mod credentials;
pub mod directory;
pub mod reports;

/// Horizontal rule used by the plain-text export formats.
pub(crate) const EXPORT_RULE: &str = "==========================================";

/// Timestamp format stamped into generated exports.
pub(crate) const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";
