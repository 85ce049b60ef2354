// src/db/store.rs

use async_trait::async_trait;

use crate::{common::error::AppError, db::resource::SearchTerm};

/// Operações de armazenamento que o CRUD genérico precisa, por recurso.
#[async_trait]
pub trait RecordStore<T>: Send + Sync {
    /// Coleção completa, na ordem do armazenamento.
    async fn list(&self) -> Result<Vec<T>, AppError>;

    async fn find(&self, id: i64) -> Result<Option<T>, AppError>;

    async fn search(&self, term: &SearchTerm) -> Result<Vec<T>, AppError>;

    /// Persiste o registro. Um `id` já preenchido é respeitado.
    async fn insert(&self, record: T) -> Result<T, AppError>;

    /// Substitui todos os campos. `None` quando o ID não existe.
    async fn replace(&self, id: i64, record: T) -> Result<Option<T>, AppError>;

    async fn remove(&self, id: i64) -> Result<bool, AppError>;
}
