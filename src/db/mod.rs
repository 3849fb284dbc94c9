//! Database Connection Management Module
//!
//! MongoDB 연결을 담당합니다. 연결 정보는 [`StoreConfig`]에서 읽습니다.
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::new().await?;
//! let users = MongoUserRepository::new(Arc::new(database));
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::config::StoreConfig;

/// MongoDB 데이터베이스 연결 래퍼
///
/// 리포지토리들은 생성 시점에 이 래퍼에서 컬렉션 핸들을 받아 갑니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 새 MongoDB 연결을 만들고 `ping`으로 연결 상태를 확인합니다.
    ///
    /// ## 환경 변수
    /// - `MONGODB_URI` (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME` (기본값: "tagboard_dev")
    pub async fn new() -> Result<Self, mongodb::error::Error> {
        let mongodb_uri = StoreConfig::mongodb_uri();
        let database_name = StoreConfig::database_name();

        let mut client_options = ClientOptions::parse(&mongodb_uri).await?;
        client_options.app_name = Some("tagboard".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// 실제 MongoDB 작업을 위한 `mongodb::Database` 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
