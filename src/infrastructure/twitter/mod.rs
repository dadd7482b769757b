//! Status update client signed with OAuth 1.0a.

pub mod client;
pub mod error;
pub mod oauth;

pub use client::TwitterAnnouncer;
pub use error::TwitterError;
pub use oauth::OAuthSigner;
