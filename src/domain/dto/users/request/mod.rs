pub mod auth_request;
pub mod create_user_request;

pub use auth_request::{LocalLoginRequest, OAuthCallbackQuery};
pub use create_user_request::CreateUserRequest;
