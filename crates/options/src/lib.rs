//! Browser-specific option sets.
//!
//! Each builder configures one browser and reduces to the same
//! [`OptionRecord`] shape through [`BrowserOptions`], which is all the
//! capability merger depends on. New browsers plug in by implementing
//! the trait; the merge logic never changes.

pub mod chrome;
pub mod common;
pub mod edge;
pub mod firefox;
pub mod ie;
pub mod safari;

use capmatch_core::OptionRecord;

/// A browser-specific option set that can express itself as an option
/// record. Object-safe, so callers can mix browsers in one session
/// request.
pub trait BrowserOptions: Send + Sync {
    /// Browser identity announced to the remote end, if any.
    fn browser_name(&self) -> Option<&str>;

    /// Vendor-extension key this option set writes its block under.
    fn vendor_key(&self) -> Option<&'static str>;

    /// Reduce to the record shape consumed by the merger.
    fn to_record(&self) -> OptionRecord;
}

pub use chrome::ChromeOptions;
pub use common::{CommonOptions, PageLoadStrategy, PromptBehavior};
pub use edge::EdgeOptions;
pub use firefox::FirefoxOptions;
pub use ie::IeOptions;
pub use safari::SafariOptions;
