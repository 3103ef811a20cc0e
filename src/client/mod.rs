//! HTTP clients for the two consumers of the API: the admin dashboard and the public site.

mod admin;
mod error;
mod public;
mod token_store;
mod transport;

pub use admin::{AdminClient, AdminSession, AdminView};
pub use error::ClientError;
pub use public::{HomePart, HomeView, PublicClient};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
pub use transport::ApiClient;
