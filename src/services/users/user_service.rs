//! # 사용자 서비스
//!
//! 로컬 회원가입과 세션 토큰의 사용자 조회를 담당합니다. 외부 프로바이더
//! 사용자는 전략이 첫 로그인 때 만들기 때문에 여기서 다루지 않습니다.

use std::sync::Arc;
use bcrypt::hash;
use mongodb::bson::oid::ObjectId;
use validator::Validate;
use crate::{
    config::PasswordConfig,
    domain::dto::users::request::CreateUserRequest,
    domain::entities::users::user::User,
    errors::{AppError, ErrorContext},
    repositories::users::{UserCriteria, UserStore},
};

pub struct UserService {
    users: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self::with_cost(users, PasswordConfig::bcrypt_cost())
    }

    pub fn with_cost(users: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// 로컬 사용자 등록
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 검증 실패
    /// * `AppError::ConflictError` - 어떤 프로바이더든 같은 이메일의 사용자가 이미 있음
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    pub async fn register(&self, request: CreateUserRequest) -> Result<User, AppError> {
        request.validate()?;

        let criteria = UserCriteria::Email(request.email.clone());
        if self.users.find_one(&criteria).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new_local(request.name, request.email, request.username, password_hash);
        let created = self.users.create(user).await?;

        log::info!("✅ 새 로컬 사용자 등록: {}", created.id_string().unwrap_or_default());

        Ok(created)
    }

    /// 세션 토큰의 `sub`로 사용자 조회
    pub async fn find_by_id(&self, id: &str) -> Result<User, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.users
            .find_one(&UserCriteria::Id(object_id))
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }
}
