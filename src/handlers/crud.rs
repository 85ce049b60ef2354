// src/handlers/crud.rs

use axum::{
    extract::State,
    http::{header, StatusCode},
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use std::collections::HashMap;

use crate::{
    common::error::AppError,
    db::{
        resource::{not_found_message, resource_path, search_miss_message},
        Resource, SearchKind, SearchTerm,
    },
    middleware::{
        auth::{auth_guard, AuthenticatedUser},
        json::ValidatedJson,
        params::{ApiPath, ApiQuery},
    },
    models::envelope::{ItemEnvelope, ListEnvelope, Pagination},
    services::{auth::AuthService, crud_service::CrudService},
};

/// As seis rotas de um recurso, montadas sobre o serviço genérico.
pub fn resource_router<T: Resource>(service: CrudService<T>, auth_service: AuthService) -> Router {
    let delete_route = if T::DELETE_REQUIRES_AUTH {
        delete(remove::<T>).route_layer(axum_middleware::from_fn_with_state(
            auth_service,
            auth_guard,
        ))
    } else {
        delete(remove::<T>)
    };

    Router::new()
        .route("/", get(list::<T>).post(create::<T>))
        .route(&format!("/{}", T::SEARCH.route), get(search::<T>))
        .route(
            "/{id}",
            get(get_by_id::<T>).put(update::<T>).merge(delete_route),
        )
        .with_state(service)
}

// GET /api/v1/<Recurso>?limit=&offset=
pub async fn list<T: Resource>(
    State(service): State<CrudService<T>>,
    ApiQuery(page): ApiQuery<Pagination>,
) -> Result<Json<ListEnvelope<T>>, AppError> {
    // A coleção inteira é carregada: o total precisa refletir tudo.
    let records = service.get_all().await?;

    Ok(Json(ListEnvelope::paginate(records, page)))
}

// GET /api/v1/<Recurso>/{id}
pub async fn get_by_id<T: Resource>(
    State(service): State<CrudService<T>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ItemEnvelope<T>>, AppError> {
    let record = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(not_found_message::<T>(id)))?;

    Ok(Json(ItemEnvelope::with_links(record, &resource_path::<T>(id))))
}

// GET /api/v1/<Recurso>/por<Campo>?<campo>=
// Sem envelope nem paginação: devolve a lista crua.
pub async fn search<T: Resource>(
    State(service): State<CrudService<T>>,
    ApiQuery(params): ApiQuery<HashMap<String, String>>,
) -> Result<Json<Vec<T>>, AppError> {
    let field = T::SEARCH;

    let raw = params.get(field.param).ok_or_else(|| {
        AppError::BadRequest(format!("O parâmetro '{}' é obrigatório.", field.param))
    })?;

    let term = SearchTerm::parse(&field, raw).ok_or_else(|| {
        let expected = match field.kind {
            SearchKind::Reference => "um ID numérico",
            SearchKind::Text => "um texto",
        };
        AppError::BadRequest(format!("O parâmetro '{}' deve ser {}.", field.param, expected))
    })?;

    let results = service.search(&term).await?;
    if results.is_empty() {
        return Err(AppError::NotFound(search_miss_message::<T>(&term)));
    }

    Ok(Json(results))
}

// POST /api/v1/<Recurso>
pub async fn create<T: Resource>(
    State(service): State<CrudService<T>>,
    ValidatedJson(payload): ValidatedJson<T>,
) -> Result<impl IntoResponse, AppError> {
    let created = service.create(payload).await?;

    let id = created
        .id()
        .ok_or_else(|| anyhow::anyhow!("{} criado sem ID", T::NAME))?;
    let location = resource_path::<T>(id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location.clone())],
        Json(ItemEnvelope::with_links(created, &location)),
    ))
}

// PUT /api/v1/<Recurso>/{id}
// Substituição completa; a resposta é o registro sem envelope.
pub async fn update<T: Resource>(
    State(service): State<CrudService<T>>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(payload): ValidatedJson<T>,
) -> Result<Json<T>, AppError> {
    if payload.id() != Some(id) {
        return Err(AppError::BadRequest(
            "ID da URL não bate com o objeto.".to_string(),
        ));
    }

    let updated = service
        .update(id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound(not_found_message::<T>(id)))?;

    Ok(Json(updated))
}

// DELETE /api/v1/<Recurso>/{id}
pub async fn remove<T: Resource>(
    State(service): State<CrudService<T>>,
    ApiPath(id): ApiPath<i64>,
    user: Option<AuthenticatedUser>,
) -> Result<StatusCode, AppError> {
    if !service.delete(id).await? {
        return Err(AppError::NotFound(not_found_message::<T>(id)));
    }

    if let Some(AuthenticatedUser(claims)) = user {
        tracing::info!(resource = T::NAME, id, user = %claims.sub, "exclusão autenticada");
    }

    Ok(StatusCode::NO_CONTENT)
}
