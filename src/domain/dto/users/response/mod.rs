pub mod user_response;
pub mod oauth_response;

pub use user_response::{CreateUserResponse, LoginResponse, UserResponse};
pub use oauth_response::{OAuthLoginUrlResponse, OAuthTokenResponse};
