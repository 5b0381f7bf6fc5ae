//! Domain models for the sales portal.

pub mod branding;
pub mod credentials;
pub mod dashboard;
pub mod features;
pub mod preset;
pub mod report;
pub mod tenant;

pub use branding::Branding;
pub use credentials::{Credential, CredentialBundle, Role};
pub use features::Features;
pub use preset::Preset;
pub use tenant::Tenant;
