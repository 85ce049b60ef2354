// src/routes.rs

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    config::AppState,
    db::Resource,
    handlers::{self, crud::resource_router},
    services::{auth::AuthService, crud_service::CrudService},
};

pub const API_PREFIX: &str = "/api/v1";

fn mount<T: Resource>(router: Router, service: CrudService<T>, auth_service: &AuthService) -> Router {
    router.nest(
        &format!("{}/{}", API_PREFIX, T::ROUTE),
        resource_router(service, auth_service.clone()),
    )
}

/// Monta a aplicação inteira: os doze recursos, login e health checks.
pub fn build_router(state: AppState) -> Router {
    let AppState {
        storage,
        auth_service,
        enderecos,
        filiais,
        patios,
        zonas_patio,
        motos,
        motociclistas,
        localizacoes,
        historicos,
        notas_fiscais,
        status_moto,
        status_operacao,
        tipos_moto,
    } = state;

    let auth_routes = Router::new()
        .route("/login", post(handlers::auth::login))
        .with_state(auth_service.clone());

    let health_routes = Router::new()
        .route("/live", get(handlers::health::live))
        .route("/ready", get(handlers::health::ready))
        .with_state(storage);

    let mut app = Router::new()
        .nest(&format!("{}/Auth", API_PREFIX), auth_routes)
        .nest(&format!("{}/Health", API_PREFIX), health_routes);

    app = mount(app, enderecos, &auth_service);
    app = mount(app, filiais, &auth_service);
    app = mount(app, patios, &auth_service);
    app = mount(app, zonas_patio, &auth_service);
    app = mount(app, motos, &auth_service);
    app = mount(app, motociclistas, &auth_service);
    app = mount(app, localizacoes, &auth_service);
    app = mount(app, historicos, &auth_service);
    app = mount(app, notas_fiscais, &auth_service);
    app = mount(app, status_moto, &auth_service);
    app = mount(app, status_operacao, &auth_service);
    app = mount(app, tipos_moto, &auth_service);

    app.layer(TraceLayer::new_for_http())
}
