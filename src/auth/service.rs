use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::password::{hash_password, validate_password, verify_password};
use crate::auth::{
    AuthError, AuthResponse, JwtService, LoginRequest, RefreshTokenRequest, RegisterRequest,
    TokenResponse, UserInfo, UserSession,
};
use crate::storage::JsonFileStore;

/// Stored user record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AuthService {
    jwt_service: JwtService,
    users: Arc<JsonFileStore<User>>,
}

impl AuthService {
    pub fn new(users: Arc<JsonFileStore<User>>, jwt_secret: &str) -> Self {
        Self {
            jwt_service: JwtService::new(jwt_secret),
            users,
        }
    }

    /// Register a new user
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AuthError> {
        if !request.email.contains('@') {
            return Err(AuthError::EmailValidation(
                "Email address is not valid".to_string(),
            ));
        }
        validate_password(&request.password).map_err(AuthError::PasswordValidation)?;

        if self.get_user_by_email(&request.email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: request.email,
            password_hash: hash_password(&request.password)?,
            created_at: now,
            updated_at: now,
        };
        self.users.append(user.clone()).await?;

        self.auth_response(user)
    }

    /// Login user
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        let user = self
            .get_user_by_email(&request.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        self.auth_response(user)
    }

    /// Exchange a refresh token for a fresh access token
    pub async fn refresh_token(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<TokenResponse, AuthError> {
        let session = self.jwt_service.extract_user_session(&request.refresh_token)?;

        // The subject must still exist in the user store
        let user = self
            .get_user_by_email(&session.email)
            .await?
            .filter(|u| u.id == session.user_id)
            .ok_or(AuthError::InvalidToken)?;

        let access_token = self.jwt_service.create_access_token(user.id, &user.email)?;

        Ok(TokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt_service.access_token_expires_in_seconds(),
        })
    }

    /// Validate a bearer token and return the session it carries
    pub async fn validate_session(&self, token: &str) -> Result<UserSession, AuthError> {
        self.jwt_service.extract_user_session(token)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        Ok(self.users.find_one(|u| u.email == email).await?)
    }

    fn auth_response(&self, user: User) -> Result<AuthResponse, AuthError> {
        let (access_token, refresh_token) =
            self.jwt_service.create_token_pair(user.id, &user.email)?;

        Ok(AuthResponse {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt_service.access_token_expires_in_seconds(),
            user: UserInfo {
                id: user.id,
                email: user.email,
                created_at: user.created_at,
                updated_at: user.updated_at,
            },
        })
    }
}
