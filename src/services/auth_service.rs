//! Authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::Config,
    db::repositories::{SessionRepository, UserRepository},
    error::{AppError, AppResult},
    models::{Role, User},
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub name: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user. The role is fixed here and never changes.
    pub async fn register(
        pool: &PgPool,
        name: &str,
        email: &str,
        password: &str,
        role: &str,
        location: &str,
        phone: Option<&str>,
    ) -> AppResult<User> {
        let role = Role::parse(role)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown role: {role}")))?;

        // Check if email exists
        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        // Hash password
        let password_hash = Self::hash_password(password)?;

        // Create user
        let user =
            UserRepository::create(pool, name, email, &password_hash, role, location, phone)
                .await?;

        Ok(user)
    }

    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        config: &Config,
        email: &str,
        password: &str,
    ) -> AppResult<(User, String, String, i64)> {
        // Find user
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // Verify password
        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        // Generate tokens
        let (access_token, expires_in) = Self::generate_access_token(&user, config)?;
        let refresh_token = Self::generate_refresh_token();

        // Persist refresh token
        let expires_at = Utc::now() + Duration::days(config.jwt.refresh_token_expiry_days);
        SessionRepository::create(pool, &user.id, &refresh_token, expires_at).await?;

        Ok((user, access_token, refresh_token, expires_in))
    }

    /// Refresh access token, rotating the refresh token
    pub async fn refresh_token(
        pool: &PgPool,
        config: &Config,
        refresh_token: &str,
    ) -> AppResult<(String, String, i64)> {
        let session = SessionRepository::find_by_token(pool, refresh_token)
            .await?
            .ok_or(AppError::InvalidToken)?;

        if session.is_expired() {
            SessionRepository::delete(pool, &session.id).await?;
            return Err(AppError::TokenExpired);
        }

        let user = UserRepository::find_by_id(pool, &session.user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        // Rotate: delete the old session, issue a new pair
        SessionRepository::delete(pool, &session.id).await?;

        let (access_token, expires_in) = Self::generate_access_token(&user, config)?;
        let new_refresh_token = Self::generate_refresh_token();

        let expires_at = Utc::now() + Duration::days(config.jwt.refresh_token_expiry_days);
        SessionRepository::create(pool, &user.id, &new_refresh_token, expires_at).await?;

        Ok((access_token, new_refresh_token, expires_in))
    }

    /// Logout (invalidate refresh tokens)
    pub async fn logout(
        pool: &PgPool,
        user_id: &Uuid,
        refresh_token: Option<&str>,
        all_sessions: bool,
    ) -> AppResult<()> {
        if all_sessions {
            SessionRepository::delete_all_for_user(pool, user_id).await?;
        } else if let Some(token) = refresh_token {
            if let Some(session) = SessionRepository::find_by_token(pool, token).await? {
                if session.user_id == *user_id {
                    SessionRepository::delete(pool, &session.id).await?;
                }
            }
        }

        Ok(())
    }

    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, user_id: &Uuid) -> AppResult<Option<User>> {
        UserRepository::find_by_id(pool, user_id).await
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Hash password using Argon2
    fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Generate access token
    fn generate_access_token(user: &User, config: &Config) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(config.jwt.expiry_hours);
        let expires_in = config.jwt.expiry_hours * 3600;

        let claims = Claims {
            sub: user.id.to_string(),
            name: user.name.clone(),
            role: user.role,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }

    /// Generate refresh token
    fn generate_refresh_token() -> String {
        Uuid::new_v4().to_string()
    }
}
