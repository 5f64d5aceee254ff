pub mod capabilities;
pub mod config;
pub mod error;
pub mod merge;
pub mod normalize;
pub mod paths;
pub mod proxy;
pub mod record;

pub use capabilities::{CapabilitiesPayload, CapabilityMap};
pub use config::{Config, DeprecationMode};
pub use error::{Error, Result};
pub use merge::merge;
pub use normalize::{normalize, DeprecationNotice};
pub use paths::Paths;
pub use proxy::{Proxy, ProxyType};
pub use record::{OptionRecord, VendorBlock};
