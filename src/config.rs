// src/config.rs

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::{env, str::FromStr, time::Duration};

use crate::{
    db::Storage,
    models::{
        endereco::Endereco,
        frota::{Moto, NotaFiscal, StatusMoto, TipoMoto},
        motociclista::Motociclista,
        movimentacao::{HistoricoLocalizacao, LocalizacaoMoto, StatusOperacao},
        organizacao::{Filial, Patio, ZonaPatio},
    },
    services::{auth::AuthService, crud_service::CrudService},
};

const DEFAULT_JWT_SECRET: &str = "ChaveSuperSecreta123456789";

// Configurações lidas do ambiente (.env incluso)
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub run_migrations: bool,
    pub bind_addr: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub auth_username: String,
    pub auth_password: String,
    pub auth_password_hash: Option<String>,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                tracing::warn!("⚠️ JWT_SECRET não definido, usando a chave padrão de desenvolvimento.");
                DEFAULT_JWT_SECRET.to_string()
            }
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 5)?,
            db_acquire_timeout: Duration::from_secs(parse_var("DB_ACQUIRE_TIMEOUT_SECS", 3)?),
            run_migrations: parse_var("RUN_MIGRATIONS", true)?,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            jwt_secret,
            jwt_expiration_hours: parse_var("JWT_EXPIRATION_HOURS", 1)?,
            auth_username: env::var("AUTH_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            auth_password: env::var("AUTH_PASSWORD").unwrap_or_else(|_| "12345".to_string()),
            auth_password_hash: env::var("AUTH_PASSWORD_HASH").ok(),
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Valor inválido para {}: '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub auth_service: AuthService,

    pub enderecos: CrudService<Endereco>,
    pub filiais: CrudService<Filial>,
    pub patios: CrudService<Patio>,
    pub zonas_patio: CrudService<ZonaPatio>,
    pub motos: CrudService<Moto>,
    pub motociclistas: CrudService<Motociclista>,
    pub localizacoes: CrudService<LocalizacaoMoto>,
    pub historicos: CrudService<HistoricoLocalizacao>,
    pub notas_fiscais: CrudService<NotaFiscal>,
    pub status_moto: CrudService<StatusMoto>,
    pub status_operacao: CrudService<StatusOperacao>,
    pub tipos_moto: CrudService<TipoMoto>,
}

impl AppState {
    pub async fn new(settings: &Settings) -> anyhow::Result<Self> {
        let storage = match &settings.database_url {
            Some(database_url) => {
                // Conecta ao banco de dados, usando '?' para propagar erros
                let db_pool = PgPoolOptions::new()
                    .max_connections(settings.db_max_connections)
                    .acquire_timeout(settings.db_acquire_timeout)
                    .connect(database_url)
                    .await
                    .context("Falha ao conectar ao banco de dados")?;

                tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
                Storage::Postgres(db_pool)
            }
            None => {
                tracing::warn!("⚠️ DATABASE_URL não definida, usando armazenamento em memória.");
                Storage::Memory
            }
        };

        let auth_service = match &settings.auth_password_hash {
            Some(hash) => AuthService::new(
                settings.auth_username.clone(),
                hash.clone(),
                settings.jwt_secret.clone(),
                settings.jwt_expiration_hours,
            ),
            None => {
                AuthService::from_plain_password(
                    settings.auth_username.clone(),
                    settings.auth_password.clone(),
                    bcrypt::DEFAULT_COST,
                    settings.jwt_secret.clone(),
                    settings.jwt_expiration_hours,
                )
                .await?
            }
        };

        Ok(Self::with_storage(storage, auth_service))
    }

    /// Monta o gráfico de dependências sobre um armazenamento já pronto.
    pub fn with_storage(storage: Storage, auth_service: AuthService) -> Self {
        Self {
            enderecos: CrudService::new(storage.store_for()),
            filiais: CrudService::new(storage.store_for()),
            patios: CrudService::new(storage.store_for()),
            zonas_patio: CrudService::new(storage.store_for()),
            motos: CrudService::new(storage.store_for()),
            motociclistas: CrudService::new(storage.store_for()),
            localizacoes: CrudService::new(storage.store_for()),
            historicos: CrudService::new(storage.store_for()),
            notas_fiscais: CrudService::new(storage.store_for()),
            status_moto: CrudService::new(storage.store_for()),
            status_operacao: CrudService::new(storage.store_for()),
            tipos_moto: CrudService::new(storage.store_for()),
            storage,
            auth_service,
        }
    }
}
