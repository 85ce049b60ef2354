// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;

use crate::{common::error::AppError, models::auth::Claims};

pub const ADMIN_ROLE: &str = "Administrador";

/// Login de usuário único, configurado no ambiente.
/// Não há tabela de usuários: a senha existe apenas como hash bcrypt.
#[derive(Clone)]
pub struct AuthService {
    username: Arc<str>,
    password_hash: Arc<str>,
    jwt_secret: Arc<str>,
    token_ttl_hours: i64,
}

impl AuthService {
    pub fn new(
        username: String,
        password_hash: String,
        jwt_secret: String,
        token_ttl_hours: i64,
    ) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            jwt_secret: jwt_secret.into(),
            token_ttl_hours,
        }
    }

    /// Gera o hash da senha em texto puro (fora do runtime async) e monta o serviço.
    pub async fn from_plain_password(
        username: String,
        password: String,
        cost: u32,
        jwt_secret: String,
        token_ttl_hours: i64,
    ) -> Result<Self, AppError> {
        let password_hash = tokio::task::spawn_blocking(move || hash(&password, cost))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        Ok(Self::new(username, password_hash, jwt_secret, token_ttl_hours))
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        if username != &*self.username {
            return Err(AppError::InvalidCredentials);
        }

        let password_clone = password.to_owned();
        let password_hash_clone = Arc::clone(&self.password_hash);

        // Executa a verificação em um thread separado
        let is_password_valid = tokio::task::spawn_blocking(move || {
            verify(&password_clone, &password_hash_clone)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(username, "login realizado");
        self.create_token(username, ADMIN_ROLE)
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        Ok(token_data.claims)
    }

    fn create_token(&self, username: &str, role: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::hours(self.token_ttl_hours);

        let claims = Claims {
            sub: username.to_string(),
            role: role.to_string(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )?)
    }
}
