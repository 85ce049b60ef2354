// src/services/crud_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::{RecordStore, Resource, SearchTerm},
};

/// CRUD genérico: o mesmo contrato para todos os recursos.
///
/// Falhas do armazenamento em criar/atualizar/excluir são logadas e
/// devolvidas como `AppError::OperationFailed`, sem retentativa.
pub struct CrudService<T> {
    store: Arc<dyn RecordStore<T>>,
}

impl<T> Clone for CrudService<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T: Resource> CrudService<T> {
    pub fn new(store: Arc<dyn RecordStore<T>>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<T>, AppError> {
        self.store.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<T>, AppError> {
        self.store.find(id).await
    }

    pub async fn search(&self, term: &SearchTerm) -> Result<Vec<T>, AppError> {
        self.store.search(term).await
    }

    pub async fn create(&self, record: T) -> Result<T, AppError> {
        let created = self
            .store
            .insert(record)
            .await
            .map_err(|e| AppError::operation_failed("criar", T::NAME, e))?;

        tracing::info!(resource = T::NAME, id = ?created.id(), "registro criado");
        Ok(created)
    }

    pub async fn update(&self, id: i64, record: T) -> Result<Option<T>, AppError> {
        self.store
            .replace(id, record)
            .await
            .map_err(|e| AppError::operation_failed("atualizar", T::NAME, e))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let deleted = self
            .store
            .remove(id)
            .await
            .map_err(|e| AppError::operation_failed("excluir", T::NAME, e))?;

        if deleted {
            tracing::info!(resource = T::NAME, id, "registro excluído");
        }
        Ok(deleted)
    }
}
