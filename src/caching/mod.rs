//! Redis 연결 모듈

pub mod redis;
