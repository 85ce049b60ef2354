// src/db/resource.rs

use serde::{de::DeserializeOwned, Serialize};
use sqlx::{postgres::{PgArguments, PgRow}, query::QueryAs, FromRow, Postgres};
use std::fmt;
use validator::Validate;

/// Consulta `query_as` do Postgres já tipada para o recurso.
pub type PgQueryAs<'q, T> = QueryAs<'q, Postgres, T, PgArguments>;

// Gênero gramatical do nome do recurso, usado nas mensagens de erro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    fn found(self) -> &'static str {
        match self {
            Gender::Masculine => "encontrado",
            Gender::Feminine => "encontrada",
        }
    }

    fn none(self) -> &'static str {
        match self {
            Gender::Masculine => "Nenhum",
            Gender::Feminine => "Nenhuma",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Contém, sem diferenciar maiúsculas/minúsculas.
    Text,
    /// Igualdade exata com o ID de outro recurso.
    Reference,
}

/// Descreve o endpoint `/porX?param=` de um recurso.
#[derive(Debug, Clone, Copy)]
pub struct SearchField {
    pub route: &'static str,
    pub param: &'static str,
    pub column: &'static str,
    /// Complemento da mensagem de busca vazia, ex: "com nome", "para a cidade".
    pub label: &'static str,
    pub kind: SearchKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTerm {
    Text(String),
    Reference(i64),
}

impl SearchTerm {
    /// Converte o valor cru da query string conforme o tipo da busca.
    pub fn parse(field: &SearchField, raw: &str) -> Option<Self> {
        match field.kind {
            SearchKind::Text => Some(SearchTerm::Text(raw.to_string())),
            SearchKind::Reference => raw.trim().parse().ok().map(SearchTerm::Reference),
        }
    }

    pub fn matches_text(&self, value: &str) -> bool {
        match self {
            SearchTerm::Text(term) => value.to_lowercase().contains(&term.to_lowercase()),
            SearchTerm::Reference(_) => false,
        }
    }

    pub fn matches_reference(&self, value: i64) -> bool {
        matches!(self, SearchTerm::Reference(id) if *id == value)
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchTerm::Text(term) => write!(f, "'{}'", term),
            SearchTerm::Reference(id) => write!(f, "{}", id),
        }
    }
}

/// Um registro persistível que o CRUD genérico sabe servir.
///
/// Cada recurso declara sua rota, sua tabela e as colunas (fora o `id`)
/// na mesma ordem em que `bind_fields` faz os binds.
pub trait Resource:
    Serialize
    + DeserializeOwned
    + Validate
    + Clone
    + Send
    + Sync
    + Unpin
    + for<'r> FromRow<'r, PgRow>
    + 'static
{
    /// Segmento da URL em `/api/v1/<ROUTE>`.
    const ROUTE: &'static str;
    /// Nome legível, ex: "Endereço".
    const NAME: &'static str;
    const GENDER: Gender;
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
    const SEARCH: SearchField;
    /// Nome curto usado quando a busca não encontra nada (padrão: `NAME` em minúsculas).
    const SEARCH_MISS_NAME: Option<&'static str> = None;
    const DELETE_REQUIRES_AUTH: bool = false;

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;

    fn matches(&self, term: &SearchTerm) -> bool;
}

pub fn not_found_message<T: Resource>(id: i64) -> String {
    format!("{} com ID {} não {}.", T::NAME, id, T::GENDER.found())
}

pub fn search_miss_message<T: Resource>(term: &SearchTerm) -> String {
    let name = T::SEARCH_MISS_NAME
        .map(str::to_string)
        .unwrap_or_else(|| T::NAME.to_lowercase());

    format!(
        "{} {} {} {} {}.",
        T::GENDER.none(),
        name,
        T::GENDER.found(),
        T::SEARCH.label,
        term
    )
}

pub fn resource_path<T: Resource>(id: i64) -> String {
    format!("/api/v1/{}/{}", T::ROUTE, id)
}
