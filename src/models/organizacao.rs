// src/models/organizacao.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::{
    common::validation::{validate_flag, validate_not_negative},
    db::resource::{Gender, PgQueryAs, Resource, SearchField, SearchKind, SearchTerm},
};

// --- 1. Filiais ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Filial {
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "O nome é obrigatório (até 100 caracteres)."))]
    pub nome: String,

    #[validate(length(min = 14, max = 18, message = "O CNPJ deve ter entre 14 e 18 caracteres."))]
    pub cnpj: String,

    #[validate(length(max = 20, message = "O telefone aceita até 20 caracteres."))]
    pub telefone: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_flag"))]
    pub ativo: String,

    pub id_endereco: i64,
}

impl Resource for Filial {
    const ROUTE: &'static str = "ControllerFilial";
    const NAME: &'static str = "Filial";
    const GENDER: Gender = Gender::Feminine;
    const TABLE: &'static str = "filiais";
    const COLUMNS: &'static [&'static str] =
        &["nome", "cnpj", "telefone", "email", "ativo", "id_endereco"];
    const SEARCH: SearchField = SearchField {
        route: "porNome",
        param: "nome",
        column: "nome",
        label: "com nome",
        kind: SearchKind::Text,
    };

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.nome.clone())
            .bind(self.cnpj.clone())
            .bind(self.telefone.clone())
            .bind(self.email.clone())
            .bind(self.ativo.clone())
            .bind(self.id_endereco)
    }

    fn matches(&self, term: &SearchTerm) -> bool {
        term.matches_text(&self.nome)
    }
}

// --- 2. Pátios ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Patio {
    pub id: Option<i64>,

    pub id_filial: i64,

    #[validate(length(min = 1, max = 100, message = "O nome é obrigatório (até 100 caracteres)."))]
    pub nome: String,

    #[validate(custom(function = "validate_not_negative"))]
    pub area_m2: Decimal,

    #[validate(range(min = 0, message = "A capacidade não pode ser negativa."))]
    pub capacidade: i32,

    #[validate(custom(function = "validate_flag"))]
    pub ativo: String,
}

impl Resource for Patio {
    const ROUTE: &'static str = "ControllerPatio";
    const NAME: &'static str = "Pátio";
    const GENDER: Gender = Gender::Masculine;
    const TABLE: &'static str = "patios";
    const COLUMNS: &'static [&'static str] =
        &["id_filial", "nome", "area_m2", "capacidade", "ativo"];
    const SEARCH: SearchField = SearchField {
        route: "porNome",
        param: "nome",
        column: "nome",
        label: "com nome",
        kind: SearchKind::Text,
    };

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.id_filial)
            .bind(self.nome.clone())
            .bind(self.area_m2)
            .bind(self.capacidade)
            .bind(self.ativo.clone())
    }

    fn matches(&self, term: &SearchTerm) -> bool {
        term.matches_text(&self.nome)
    }
}

// --- 3. Zonas do pátio ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ZonaPatio {
    pub id: Option<i64>,

    pub id_patio: i64,

    #[validate(length(min = 1, max = 100, message = "O nome da zona é obrigatório (até 100 caracteres)."))]
    pub nome_zona: String,

    // Ex: "ESTACIONAMENTO", "MANUTENCAO"
    #[validate(length(min = 1, max = 50, message = "O tipo da zona é obrigatório (até 50 caracteres)."))]
    pub tipo_zona: String,

    #[validate(range(min = 0, message = "A capacidade não pode ser negativa."))]
    pub capacidade: i32,
}

impl Resource for ZonaPatio {
    const ROUTE: &'static str = "ControllerZonaPatio";
    const NAME: &'static str = "Zona de pátio";
    const GENDER: Gender = Gender::Feminine;
    const TABLE: &'static str = "zonas_patio";
    const COLUMNS: &'static [&'static str] = &["id_patio", "nome_zona", "tipo_zona", "capacidade"];
    const SEARCH: SearchField = SearchField {
        route: "porNome",
        param: "nomeZona",
        column: "nome_zona",
        label: "com nome",
        kind: SearchKind::Text,
    };
    const SEARCH_MISS_NAME: Option<&'static str> = Some("zona");

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.id_patio)
            .bind(self.nome_zona.clone())
            .bind(self.tipo_zona.clone())
            .bind(self.capacidade)
    }

    fn matches(&self, term: &SearchTerm) -> bool {
        term.matches_text(&self.nome_zona)
    }
}
