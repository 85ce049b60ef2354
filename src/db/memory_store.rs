// src/db/memory_store.rs

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::{
    common::error::AppError,
    db::{
        resource::{Resource, SearchTerm},
        store::RecordStore,
    },
};

struct Table<T> {
    records: BTreeMap<i64, T>,
    next_id: i64,
}

/// Armazenamento em memória, usado sem `DATABASE_URL` e nos testes.
///
/// Os registros ficam ordenados pelo ID, que é atribuído em sequência
/// a partir de 1 quando o cliente não informa um.
pub struct MemoryStore<T> {
    table: RwLock<Table<T>>,
}

impl<T: Resource> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl<T: Resource> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Resource> RecordStore<T> for MemoryStore<T> {
    async fn list(&self) -> Result<Vec<T>, AppError> {
        let table = self.table.read().await;
        Ok(table.records.values().cloned().collect())
    }

    async fn find(&self, id: i64) -> Result<Option<T>, AppError> {
        let table = self.table.read().await;
        Ok(table.records.get(&id).cloned())
    }

    async fn search(&self, term: &SearchTerm) -> Result<Vec<T>, AppError> {
        let table = self.table.read().await;
        Ok(table
            .records
            .values()
            .filter(|record| record.matches(term))
            .cloned()
            .collect())
    }

    async fn insert(&self, mut record: T) -> Result<T, AppError> {
        let mut table = self.table.write().await;

        // Com a sequência no teto (i64::MAX), o próximo ID automático
        // colide com o existente e falha como chave duplicada.
        let id = record.id().unwrap_or(table.next_id);
        if table.records.contains_key(&id) {
            return Err(AppError::UniqueConstraintViolation(format!(
                "{} com ID {} já existe.",
                T::NAME,
                id
            )));
        }

        table.next_id = table.next_id.max(id.saturating_add(1));
        record.set_id(id);
        table.records.insert(id, record.clone());

        Ok(record)
    }

    async fn replace(&self, id: i64, mut record: T) -> Result<Option<T>, AppError> {
        let mut table = self.table.write().await;

        match table.records.get_mut(&id) {
            Some(stored) => {
                record.set_id(id);
                *stored = record.clone();
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: i64) -> Result<bool, AppError> {
        let mut table = self.table.write().await;
        Ok(table.records.remove(&id).is_some())
    }
}
