pub mod resource;
pub use resource::{Resource, SearchField, SearchKind, SearchTerm};
pub mod store;
pub use store::RecordStore;
pub mod pg_store;
pub use pg_store::PgStore;
pub mod memory_store;
pub use memory_store::MemoryStore;

use sqlx::PgPool;
use std::sync::Arc;

use crate::common::error::AppError;

// De onde vêm os repositórios de cada recurso.
#[derive(Clone)]
pub enum Storage {
    Postgres(PgPool),
    Memory,
}

impl Storage {
    /// Cria o repositório de um recurso sobre este armazenamento.
    pub fn store_for<T: Resource>(&self) -> Arc<dyn RecordStore<T>> {
        match self {
            Storage::Postgres(pool) => Arc::new(PgStore::<T>::new(pool.clone())),
            Storage::Memory => Arc::new(MemoryStore::<T>::new()),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Storage::Postgres(_) => "postgres",
            Storage::Memory => "memory",
        }
    }

    /// Consulta simples para a verificação de prontidão.
    pub async fn ping(&self) -> Result<(), AppError> {
        match self {
            Storage::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
                Ok(())
            }
            Storage::Memory => Ok(()),
        }
    }
}
