pub mod auth;
pub mod endereco;
pub mod envelope;
pub mod frota;
pub mod motociclista;
pub mod movimentacao;
pub mod organizacao;
