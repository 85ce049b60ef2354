// src/db/pg_store.rs

use async_trait::async_trait;
use sqlx::{PgPool, Postgres};
use std::marker::PhantomData;

use crate::{
    common::error::AppError,
    db::{
        resource::{Resource, SearchKind, SearchTerm},
        store::RecordStore,
    },
};

// SQL montado uma única vez a partir do catálogo de colunas do recurso.
#[derive(Debug, Clone)]
struct Statements {
    select_all: String,
    select_one: String,
    search: String,
    insert: String,
    insert_with_id: String,
    sync_identity: String,
    update: String,
    delete: String,
}

impl Statements {
    fn for_resource<T: Resource>() -> Self {
        let table = T::TABLE;
        let columns = T::COLUMNS.join(", ");
        let count = T::COLUMNS.len();

        let placeholders = |from: usize, to: usize| {
            (from..=to)
                .map(|i| format!("${}", i))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let assignments = T::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ${}", column, i + 1))
            .collect::<Vec<_>>()
            .join(", ");

        let search = match T::SEARCH.kind {
            SearchKind::Text => format!(
                "SELECT * FROM {} WHERE POSITION(LOWER($1) IN LOWER({})) > 0 ORDER BY id",
                table,
                T::SEARCH.column
            ),
            SearchKind::Reference => format!(
                "SELECT * FROM {} WHERE {} = $1 ORDER BY id",
                table,
                T::SEARCH.column
            ),
        };

        Self {
            select_all: format!("SELECT * FROM {} ORDER BY id", table),
            select_one: format!("SELECT * FROM {} WHERE id = $1", table),
            search,
            insert: format!(
                "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
                table,
                columns,
                placeholders(1, count)
            ),
            insert_with_id: format!(
                "INSERT INTO {} (id, {}) VALUES ({}) RETURNING *",
                table,
                columns,
                placeholders(1, count + 1)
            ),
            // IDs informados pelo cliente não avançam a sequência da identidade.
            sync_identity: format!(
                "SELECT setval(pg_get_serial_sequence('{0}', 'id'), GREATEST((SELECT MAX(id) FROM {0}), 1))",
                table
            ),
            update: format!(
                "UPDATE {} SET {} WHERE id = ${} RETURNING *",
                table,
                assignments,
                count + 1
            ),
            delete: format!("DELETE FROM {} WHERE id = $1", table),
        }
    }
}

/// Repositório Postgres genérico, um por recurso.
pub struct PgStore<T> {
    pool: PgPool,
    sql: Statements,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> PgStore<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            sql: Statements::for_resource::<T>(),
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Resource> RecordStore<T> for PgStore<T> {
    async fn list(&self) -> Result<Vec<T>, AppError> {
        let records = sqlx::query_as::<Postgres, T>(&self.sql.select_all)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    async fn find(&self, id: i64) -> Result<Option<T>, AppError> {
        let record = sqlx::query_as::<Postgres, T>(&self.sql.select_one)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    async fn search(&self, term: &SearchTerm) -> Result<Vec<T>, AppError> {
        let query = sqlx::query_as::<Postgres, T>(&self.sql.search);
        let query = match term {
            SearchTerm::Text(text) => query.bind(text.clone()),
            SearchTerm::Reference(id) => query.bind(*id),
        };

        let records = query.fetch_all(&self.pool).await?;
        Ok(records)
    }

    async fn insert(&self, record: T) -> Result<T, AppError> {
        match record.id() {
            Some(id) => {
                // INSERT e ajuste da sequência são atômicos: se o setval falhar,
                // o registro não fica gravado.
                let mut tx = self.pool.begin().await?;

                let query = sqlx::query_as::<Postgres, T>(&self.sql.insert_with_id).bind(id);
                let inserted = record
                    .bind_fields(query)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(|e| insert_error::<T>(e, Some(id)))?;

                sqlx::query(&self.sql.sync_identity)
                    .execute(&mut *tx)
                    .await?;

                tx.commit().await?;
                Ok(inserted)
            }
            None => {
                let query = sqlx::query_as::<Postgres, T>(&self.sql.insert);
                record
                    .bind_fields(query)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| insert_error::<T>(e, None))
            }
        }
    }

    async fn replace(&self, id: i64, record: T) -> Result<Option<T>, AppError> {
        let query = record
            .bind_fields(sqlx::query_as::<Postgres, T>(&self.sql.update))
            .bind(id);

        let updated = query.fetch_optional(&self.pool).await?;
        Ok(updated)
    }

    async fn remove(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(&self.sql.delete)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Converte violação de chave primária em um erro mais amigável
fn insert_error<T: Resource>(e: sqlx::Error, requested_id: Option<i64>) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::UniqueConstraintViolation(format!(
                "{} com ID {} já existe.",
                T::NAME,
                requested_id.map_or_else(|| "?".to_string(), |id| id.to_string())
            ));
        }
    }
    e.into()
}
