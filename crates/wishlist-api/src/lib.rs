pub mod auth;
pub mod error;
pub mod extract;
pub mod items;
pub mod middleware;
pub mod password;
pub mod routes;
pub mod shares;
pub mod wishlists;

pub use auth::{AppState, AppStateInner, Authenticator, UserIdTokens};
pub use error::{ApiError, AuthError};
pub use password::{HashParams, Passwords};
pub use routes::router;
