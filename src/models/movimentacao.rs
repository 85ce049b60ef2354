// src/models/movimentacao.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::{
    common::validation::validate_not_negative,
    db::resource::{Gender, PgQueryAs, Resource, SearchField, SearchKind, SearchTerm},
};

// Busca compartilhada pelos dois recursos de posição da moto.
const POR_ID_MOTO: SearchField = SearchField {
    route: "porIdMoto",
    param: "idMoto",
    column: "id_moto",
    label: "para a moto com ID",
    kind: SearchKind::Reference,
};

// --- 1. Localização atual da moto ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LocalizacaoMoto {
    pub id: Option<i64>,

    pub id_moto: i64,
    pub id_zona: i64,

    pub data_hora_entrada: NaiveDateTime,

    // Vazio enquanto a moto continua na zona.
    pub data_hora_saida: Option<NaiveDateTime>,
}

impl Resource for LocalizacaoMoto {
    const ROUTE: &'static str = "ControllerLocalizacao";
    const NAME: &'static str = "Localização de moto";
    const GENDER: Gender = Gender::Feminine;
    const TABLE: &'static str = "localizacoes_moto";
    const COLUMNS: &'static [&'static str] =
        &["id_moto", "id_zona", "data_hora_entrada", "data_hora_saida"];
    const SEARCH: SearchField = POR_ID_MOTO;
    const SEARCH_MISS_NAME: Option<&'static str> = Some("localização");

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.id_moto)
            .bind(self.id_zona)
            .bind(self.data_hora_entrada)
            .bind(self.data_hora_saida)
    }

    fn matches(&self, term: &SearchTerm) -> bool {
        term.matches_reference(self.id_moto)
    }
}

// --- 2. Histórico de movimentação ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HistoricoLocalizacao {
    pub id: Option<i64>,

    pub id_moto: i64,
    pub id_motociclista: i64,
    pub id_zona_patio: i64,

    pub data_hora_saida: NaiveDateTime,
    pub data_hora_entrada: Option<NaiveDateTime>,

    #[validate(custom(function = "validate_not_negative"))]
    pub km_rodados: Decimal,

    pub id_status_operacao: i64,
}

impl Resource for HistoricoLocalizacao {
    const ROUTE: &'static str = "ControllerHistoricoLocalizacao";
    const NAME: &'static str = "Histórico";
    const GENDER: Gender = Gender::Masculine;
    const TABLE: &'static str = "historicos_localizacao";
    const COLUMNS: &'static [&'static str] = &[
        "id_moto",
        "id_motociclista",
        "id_zona_patio",
        "data_hora_saida",
        "data_hora_entrada",
        "km_rodados",
        "id_status_operacao",
    ];
    const SEARCH: SearchField = POR_ID_MOTO;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.id_moto)
            .bind(self.id_motociclista)
            .bind(self.id_zona_patio)
            .bind(self.data_hora_saida)
            .bind(self.data_hora_entrada)
            .bind(self.km_rodados)
            .bind(self.id_status_operacao)
    }

    fn matches(&self, term: &SearchTerm) -> bool {
        term.matches_reference(self.id_moto)
    }
}

// --- 3. Status de operação (tipo da movimentação) ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StatusOperacao {
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 50, message = "A descrição é obrigatória (até 50 caracteres)."))]
    pub descricao: String,

    // Ex: "ENTRADA", "SAIDA"
    #[validate(length(min = 1, max = 20, message = "O tipo de movimentação é obrigatório (até 20 caracteres)."))]
    pub tipo_movimentacao: String,
}

impl Resource for StatusOperacao {
    const ROUTE: &'static str = "ControllerStatusOperacao";
    const NAME: &'static str = "Status de operação";
    const GENDER: Gender = Gender::Masculine;
    const TABLE: &'static str = "status_operacao";
    const COLUMNS: &'static [&'static str] = &["descricao", "tipo_movimentacao"];
    const SEARCH: SearchField = SearchField {
        route: "porDescricao",
        param: "descricao",
        column: "descricao",
        label: "com descrição",
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
            .bind(self.descricao.clone())
            .bind(self.tipo_movimentacao.clone())
    }

    fn matches(&self, term: &SearchTerm) -> bool {
        term.matches_text(&self.descricao)
    }
}
