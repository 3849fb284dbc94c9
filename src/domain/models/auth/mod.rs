pub mod auth_outcome;

pub use auth_outcome::{AuthFailure, AuthOutcome, Credentials};
