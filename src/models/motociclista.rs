// src/models/motociclista.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::{
    common::validation::validate_flag,
    db::resource::{Gender, PgQueryAs, Resource, SearchField, SearchKind, SearchTerm},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Motociclista {
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "O nome é obrigatório (até 100 caracteres)."))]
    pub nome: String,

    #[validate(length(min = 11, max = 14, message = "O CPF deve ter entre 11 e 14 caracteres."))]
    pub cpf: String,

    #[validate(length(min = 1, max = 20, message = "A CNH é obrigatória (até 20 caracteres)."))]
    pub cnh: String,

    pub data_validade_cnh: NaiveDate,

    #[validate(length(max = 20, message = "O telefone aceita até 20 caracteres."))]
    pub telefone: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    pub data_cadastro: DateTime<Utc>,

    #[validate(custom(function = "validate_flag"))]
    pub ativo: String,

    pub id_endereco: Option<i64>,
}

impl Resource for Motociclista {
    const ROUTE: &'static str = "ControllerMotociclista";
    const NAME: &'static str = "Motociclista";
    const GENDER: Gender = Gender::Masculine;
    const TABLE: &'static str = "motociclistas";
    const COLUMNS: &'static [&'static str] = &[
        "nome",
        "cpf",
        "cnh",
        "data_validade_cnh",
        "telefone",
        "email",
        "data_cadastro",
        "ativo",
        "id_endereco",
    ];
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
            .bind(self.cpf.clone())
            .bind(self.cnh.clone())
            .bind(self.data_validade_cnh)
            .bind(self.telefone.clone())
            .bind(self.email.clone())
            .bind(self.data_cadastro)
            .bind(self.ativo.clone())
            .bind(self.id_endereco)
    }

    fn matches(&self, term: &SearchTerm) -> bool {
        term.matches_text(&self.nome)
    }
}
