pub mod auth;
pub mod crud_service;
