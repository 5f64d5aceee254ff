//! Session-creation plumbing: option assembly, legacy capability
//! upgrade, and the transport seam.

pub mod session;
pub mod transport;

pub use session::{SessionBuilder, SessionRequest};
pub use transport::SessionTransport;
