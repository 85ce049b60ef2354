// src/models/endereco.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::db::resource::{Gender, PgQueryAs, Resource, SearchField, SearchKind, SearchTerm};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Endereco {
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 150, message = "O logradouro é obrigatório (até 150 caracteres)."))]
    pub logradouro: String,

    #[validate(length(min = 1, max = 10, message = "O número é obrigatório (até 10 caracteres)."))]
    pub numero: String,

    #[validate(length(max = 100, message = "O complemento aceita até 100 caracteres."))]
    pub complemento: Option<String>,

    #[validate(length(min = 1, max = 100, message = "O bairro é obrigatório (até 100 caracteres)."))]
    pub bairro: String,

    #[validate(length(min = 1, max = 9, message = "O CEP é obrigatório (até 9 caracteres)."))]
    pub cep: String,

    #[validate(length(min = 1, max = 100, message = "A cidade é obrigatória (até 100 caracteres)."))]
    pub cidade: String,

    #[validate(length(equal = 2, message = "O estado deve ser a sigla com 2 letras."))]
    pub estado: String,

    #[validate(length(min = 1, max = 50, message = "O país é obrigatório (até 50 caracteres)."))]
    pub pais: String,
}

impl Resource for Endereco {
    const ROUTE: &'static str = "ControllerEndereco";
    const NAME: &'static str = "Endereço";
    const GENDER: Gender = Gender::Masculine;
    const TABLE: &'static str = "enderecos";
    const COLUMNS: &'static [&'static str] = &[
        "logradouro",
        "numero",
        "complemento",
        "bairro",
        "cep",
        "cidade",
        "estado",
        "pais",
    ];
    const SEARCH: SearchField = SearchField {
        route: "porCidade",
        param: "cidade",
        column: "cidade",
        label: "para a cidade",
        kind: SearchKind::Text,
    };
    // Único DELETE protegido por token na API.
    const DELETE_REQUIRES_AUTH: bool = true;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.logradouro.clone())
            .bind(self.numero.clone())
            .bind(self.complemento.clone())
            .bind(self.bairro.clone())
            .bind(self.cep.clone())
            .bind(self.cidade.clone())
            .bind(self.estado.clone())
            .bind(self.pais.clone())
    }

    fn matches(&self, term: &SearchTerm) -> bool {
        term.matches_text(&self.cidade)
    }
}
