// src/models/frota.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::{
    common::validation::{validate_flag, validate_not_negative},
    db::resource::{Gender, PgQueryAs, Resource, SearchField, SearchKind, SearchTerm},
};

// --- 1. Motos ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Moto {
    pub id: Option<i64>,

    pub id_tipo: i64,
    pub id_status: i64,

    #[validate(length(min = 7, max = 8, message = "A placa deve ter 7 ou 8 caracteres."))]
    pub placa: String,

    #[validate(length(min = 1, max = 100, message = "O modelo é obrigatório (até 100 caracteres)."))]
    pub modelo: String,

    #[validate(range(min = 1900, max = 2100, message = "Ano de fabricação inválido."))]
    pub ano_fabricacao: i32,

    #[validate(range(min = 1900, max = 2100, message = "Ano do modelo inválido."))]
    pub ano_modelo: i32,

    #[validate(length(max = 17, message = "O chassi aceita até 17 caracteres."))]
    pub chassi: Option<String>,

    #[validate(range(min = 0, message = "A cilindrada não pode ser negativa."))]
    pub cilindrada: i32,

    #[validate(length(max = 30, message = "A cor aceita até 30 caracteres."))]
    pub cor: Option<String>,

    pub data_aquisicao: Option<NaiveDate>,

    #[validate(custom(function = "validate_not_negative"))]
    pub valor_aquisicao: Decimal,

    // Nota fiscal de compra, quando já lançada.
    pub id_nota_fiscal: Option<i64>,
}

impl Resource for Moto {
    const ROUTE: &'static str = "ControllerMoto";
    const NAME: &'static str = "Moto";
    const GENDER: Gender = Gender::Feminine;
    const TABLE: &'static str = "motos";
    const COLUMNS: &'static [&'static str] = &[
        "id_tipo",
        "id_status",
        "placa",
        "modelo",
        "ano_fabricacao",
        "ano_modelo",
        "chassi",
        "cilindrada",
        "cor",
        "data_aquisicao",
        "valor_aquisicao",
        "id_nota_fiscal",
    ];
    const SEARCH: SearchField = SearchField {
        route: "porPlaca",
        param: "placa",
        column: "placa",
        label: "com placa",
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
            .bind(self.id_tipo)
            .bind(self.id_status)
            .bind(self.placa.clone())
            .bind(self.modelo.clone())
            .bind(self.ano_fabricacao)
            .bind(self.ano_modelo)
            .bind(self.chassi.clone())
            .bind(self.cilindrada)
            .bind(self.cor.clone())
            .bind(self.data_aquisicao)
            .bind(self.valor_aquisicao)
            .bind(self.id_nota_fiscal)
    }

    fn matches(&self, term: &SearchTerm) -> bool {
        term.matches_text(&self.placa)
    }
}

// --- 2. Tipos de moto ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TipoMoto {
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 50, message = "A descrição é obrigatória (até 50 caracteres)."))]
    pub descricao: String,

    #[validate(length(min = 1, max = 50, message = "A categoria é obrigatória (até 50 caracteres)."))]
    pub categoria: String,
}

impl Resource for TipoMoto {
    const ROUTE: &'static str = "ControllerTipoMoto";
    const NAME: &'static str = "Tipo de moto";
    const GENDER: Gender = Gender::Masculine;
    const TABLE: &'static str = "tipos_moto";
    const COLUMNS: &'static [&'static str] = &["descricao", "categoria"];
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
            .bind(self.categoria.clone())
    }

    fn matches(&self, term: &SearchTerm) -> bool {
        term.matches_text(&self.descricao)
    }
}

// --- 3. Status de moto ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StatusMoto {
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 50, message = "A descrição é obrigatória (até 50 caracteres)."))]
    pub descricao: String,

    #[validate(custom(function = "validate_flag"))]
    pub disponivel: String,
}

impl Resource for StatusMoto {
    const ROUTE: &'static str = "ControllerStatusMoto";
    const NAME: &'static str = "Status de moto";
    const GENDER: Gender = Gender::Masculine;
    const TABLE: &'static str = "status_moto";
    const COLUMNS: &'static [&'static str] = &["descricao", "disponivel"];
    // A rota chama-se "porNome", mas filtra pela descrição.
    const SEARCH: SearchField = SearchField {
        route: "porNome",
        param: "nome",
        column: "descricao",
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
            .bind(self.descricao.clone())
            .bind(self.disponivel.clone())
    }

    fn matches(&self, term: &SearchTerm) -> bool {
        term.matches_text(&self.descricao)
    }
}

// --- 4. Notas fiscais ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NotaFiscal {
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 20, message = "O número é obrigatório (até 20 caracteres)."))]
    pub numero: String,

    #[validate(length(min = 1, max = 5, message = "A série é obrigatória (até 5 caracteres)."))]
    pub serie: String,

    #[validate(length(min = 1, max = 5, message = "O modelo é obrigatório (até 5 caracteres)."))]
    pub modelo: String,

    #[validate(length(equal = 44, message = "A chave de acesso deve ter 44 caracteres."))]
    pub chave_acesso: String,

    pub data_emissao: NaiveDate,

    #[validate(custom(function = "validate_not_negative"))]
    pub valor_total: Decimal,

    #[validate(length(min = 1, max = 100, message = "O fornecedor é obrigatório (até 100 caracteres)."))]
    pub fornecedor: String,

    #[validate(length(min = 14, max = 18, message = "O CNPJ do fornecedor deve ter entre 14 e 18 caracteres."))]
    pub cnpj_fornecedor: String,
}

impl Resource for NotaFiscal {
    const ROUTE: &'static str = "ControllerNotaFiscal";
    const NAME: &'static str = "Nota fiscal";
    const GENDER: Gender = Gender::Feminine;
    const TABLE: &'static str = "notas_fiscais";
    const COLUMNS: &'static [&'static str] = &[
        "numero",
        "serie",
        "modelo",
        "chave_acesso",
        "data_emissao",
        "valor_total",
        "fornecedor",
        "cnpj_fornecedor",
    ];
    const SEARCH: SearchField = SearchField {
        route: "porNumero",
        param: "numero",
        column: "numero",
        label: "com número",
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
            .bind(self.numero.clone())
            .bind(self.serie.clone())
            .bind(self.modelo.clone())
            .bind(self.chave_acesso.clone())
            .bind(self.data_emissao)
            .bind(self.valor_total)
            .bind(self.fornecedor.clone())
            .bind(self.cnpj_fornecedor.clone())
    }

    fn matches(&self, term: &SearchTerm) -> bool {
        term.matches_text(&self.numero)
    }
}
