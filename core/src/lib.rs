pub mod api;
pub mod dealer;
pub mod error;
pub mod params;
pub mod recovery;
pub mod scheme;
pub mod share;

pub use api::{recover_secret, share_secret};
pub use error::{Result, SharingError};
pub use params::SharingParams;
pub use scheme::ShamirScheme;
pub use share::Share;
