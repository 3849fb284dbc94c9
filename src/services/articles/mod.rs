pub mod tag_service;

pub use tag_service::{TagService, TAG_PAGE_SIZE};
