//! Clean Recent Autostart
//!
//! Login-time launch registration, owned by the OS and reached through an
//! injected [`AutostartCapability`]. The controller never reports a state
//! it has not read back from the platform.

mod capability;
mod controller;
mod error;

pub use capability::{AutostartCapability, MemoryAutostart};
pub use controller::{AutostartController, StatusMessage};
pub use error::{AutostartOperation, PlatformServiceError};

pub type Result<T> = std::result::Result<T, PlatformServiceError>;
