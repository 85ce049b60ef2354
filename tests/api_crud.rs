mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{build_app, send};

fn patio(nome: &str) -> Value {
    json!({
        "idFilial": 1,
        "nome": nome,
        "areaM2": 1500.5,
        "capacidade": 120,
        "ativo": "S"
    })
}

#[tokio::test]
async fn create_returns_201_with_location_and_links() -> anyhow::Result<()> {
    let app = build_app().await?;

    let created = send(&app, "POST", "/api/v1/ControllerPatio", Some(patio("Central")), None).await?;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.location.as_deref(), Some("/api/v1/ControllerPatio/1"));
    assert_eq!(created.body["data"]["id"], 1);
    assert_eq!(created.body["data"]["nome"], "Central");

    let links = created.body["links"].as_array().cloned().unwrap_or_default();
    let rels: Vec<_> = links.iter().map(|l| l["rel"].as_str().unwrap_or("")).collect();
    assert_eq!(rels, ["self", "update", "delete"]);
    assert!(links.iter().all(|l| l["href"] == "/api/v1/ControllerPatio/1"));

    let fetched = send(&app, "GET", "/api/v1/ControllerPatio/1", None, None).await?;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"], created.body["data"]);
    Ok(())
}

#[tokio::test]
async fn list_reports_the_total_before_slicing() -> anyhow::Result<()> {
    let app = build_app().await?;
    for nome in ["A", "B", "C"] {
        send(&app, "POST", "/api/v1/ControllerPatio", Some(patio(nome)), None).await?;
    }

    let page = send(&app, "GET", "/api/v1/ControllerPatio?limit=2&offset=1", None, None).await?;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body["total"], 3);
    assert_eq!(page.body["limit"], 2);
    assert_eq!(page.body["offset"], 1);
    let names: Vec<_> = page.body["data"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .iter()
        .map(|p| p["nome"].as_str().unwrap_or("").to_string())
        .collect();
    assert_eq!(names, ["B", "C"]);

    let defaults = send(&app, "GET", "/api/v1/ControllerPatio", None, None).await?;
    assert_eq!(defaults.body["limit"], 10);
    assert_eq!(defaults.body["offset"], 0);
    assert_eq!(defaults.body["data"].as_array().map(Vec::len), Some(3));

    let beyond = send(&app, "GET", "/api/v1/ControllerPatio?offset=10", None, None).await?;
    assert_eq!(beyond.body["total"], 3);
    assert_eq!(beyond.body["data"], json!([]));

    let negative = send(&app, "GET", "/api/v1/ControllerPatio?limit=-1", None, None).await?;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn malformed_query_and_path_use_the_json_error_shape() -> anyhow::Result<()> {
    let app = build_app().await?;

    let bad_limit = send(&app, "GET", "/api/v1/ControllerPatio?limit=x", None, None).await?;
    assert_eq!(bad_limit.status, StatusCode::BAD_REQUEST);
    assert!(bad_limit.body["error"].is_string(), "{}", bad_limit.body);

    for method in ["GET", "DELETE"] {
        let bad_id = send(&app, method, "/api/v1/ControllerPatio/abc", None, None).await?;
        assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
        assert!(bad_id.body["error"].is_string(), "{}", bad_id.body);
    }

    let mut body = patio("Central");
    body["id"] = json!(1);
    let bad_put = send(&app, "PUT", "/api/v1/ControllerPatio/um", Some(body), None).await?;
    assert_eq!(bad_put.status, StatusCode::BAD_REQUEST);
    assert!(bad_put.body["error"].is_string(), "{}", bad_put.body);
    Ok(())
}

#[tokio::test]
async fn missing_record_is_404_with_a_readable_message() -> anyhow::Result<()> {
    let app = build_app().await?;

    let response = send(&app, "GET", "/api/v1/ControllerEndereco/7", None, None).await?;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Endereço com ID 7 não encontrado.");

    let response = send(&app, "GET", "/api/v1/ControllerFilial/3", None, None).await?;
    assert_eq!(response.body["error"], "Filial com ID 3 não encontrada.");
    Ok(())
}

#[tokio::test]
async fn update_replaces_the_record_and_returns_it_bare() -> anyhow::Result<()> {
    let app = build_app().await?;
    send(&app, "POST", "/api/v1/ControllerPatio", Some(patio("Antigo")), None).await?;

    let mut body = patio("Renomeado");
    body["id"] = json!(1);
    body["capacidade"] = json!(80);

    let updated = send(&app, "PUT", "/api/v1/ControllerPatio/1", Some(body), None).await?;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["id"], 1);
    assert_eq!(updated.body["nome"], "Renomeado");
    assert_eq!(updated.body["capacidade"], 80);
    assert!(updated.body.get("data").is_none());

    let fetched = send(&app, "GET", "/api/v1/ControllerPatio/1", None, None).await?;
    assert_eq!(fetched.body["data"]["nome"], "Renomeado");
    Ok(())
}

#[tokio::test]
async fn update_rejects_mismatched_ids_and_unknown_records() -> anyhow::Result<()> {
    let app = build_app().await?;
    send(&app, "POST", "/api/v1/ControllerPatio", Some(patio("Central")), None).await?;

    let mut body = patio("Outro");
    body["id"] = json!(2);
    let mismatch = send(&app, "PUT", "/api/v1/ControllerPatio/1", Some(body.clone()), None).await?;
    assert_eq!(mismatch.status, StatusCode::BAD_REQUEST);
    assert_eq!(mismatch.body["error"], "ID da URL não bate com o objeto.");

    // Divergência vence mesmo quando o ID da URL não existe.
    let mismatch_missing = send(&app, "PUT", "/api/v1/ControllerPatio/77", Some(body.clone()), None).await?;
    assert_eq!(mismatch_missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(mismatch_missing.body["error"], "ID da URL não bate com o objeto.");

    let missing = send(&app, "PUT", "/api/v1/ControllerPatio/2", Some(body), None).await?;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "Pátio com ID 2 não encontrado.");

    // Sem id no corpo também não bate com a URL.
    let without_id = send(&app, "PUT", "/api/v1/ControllerPatio/1", Some(patio("x")), None).await?;
    assert_eq!(without_id.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn delete_then_get_is_404() -> anyhow::Result<()> {
    let app = build_app().await?;
    send(&app, "POST", "/api/v1/ControllerPatio", Some(patio("Central")), None).await?;

    let deleted = send(&app, "DELETE", "/api/v1/ControllerPatio/1", None, None).await?;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert_eq!(deleted.body, Value::Null);

    let fetched = send(&app, "GET", "/api/v1/ControllerPatio/1", None, None).await?;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);

    let again = send(&app, "DELETE", "/api/v1/ControllerPatio/1", None, None).await?;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn text_search_is_case_insensitive_containment() -> anyhow::Result<()> {
    let app = build_app().await?;
    for nome in ["Central", "Central Expandido", "Zona Norte"] {
        send(&app, "POST", "/api/v1/ControllerPatio", Some(patio(nome)), None).await?;
    }

    let hits = send(&app, "GET", "/api/v1/ControllerPatio/porNome?nome=central", None, None).await?;
    assert_eq!(hits.status, StatusCode::OK);
    let names: Vec<_> = hits
        .body
        .as_array()
        .cloned()
        .unwrap_or_default()
        .iter()
        .map(|p| p["nome"].as_str().unwrap_or("").to_string())
        .collect();
    assert_eq!(names, ["Central", "Central Expandido"]);

    let miss = send(&app, "GET", "/api/v1/ControllerPatio/porNome?nome=Sul", None, None).await?;
    assert_eq!(miss.status, StatusCode::NOT_FOUND);
    assert_eq!(miss.body["error"], "Nenhum pátio encontrado com nome 'Sul'.");

    let no_param = send(&app, "GET", "/api/v1/ControllerPatio/porNome", None, None).await?;
    assert_eq!(no_param.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn reference_search_matches_the_moto_id_exactly() -> anyhow::Result<()> {
    let app = build_app().await?;
    let localizacao = |id_moto: i64| {
        json!({
            "idMoto": id_moto,
            "idZona": 1,
            "dataHoraEntrada": "2024-05-01T08:30:00",
            "dataHoraSaida": null
        })
    };
    for id_moto in [4, 14, 4] {
        let created = send(&app, "POST", "/api/v1/ControllerLocalizacao", Some(localizacao(id_moto)), None).await?;
        assert_eq!(created.status, StatusCode::CREATED);
    }

    let hits = send(&app, "GET", "/api/v1/ControllerLocalizacao/porIdMoto?idMoto=4", None, None).await?;
    assert_eq!(hits.status, StatusCode::OK);
    assert_eq!(hits.body.as_array().map(Vec::len), Some(2));

    let miss = send(&app, "GET", "/api/v1/ControllerLocalizacao/porIdMoto?idMoto=1", None, None).await?;
    assert_eq!(miss.status, StatusCode::NOT_FOUND);
    assert_eq!(
        miss.body["error"],
        "Nenhuma localização encontrada para a moto com ID 1."
    );

    let not_a_number = send(&app, "GET", "/api/v1/ControllerLocalizacao/porIdMoto?idMoto=abc", None, None).await?;
    assert_eq!(not_a_number.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn invalid_payloads_are_400() -> anyhow::Result<()> {
    let app = build_app().await?;

    let mut body = patio("Central");
    body["ativo"] = json!("X");
    body["capacidade"] = json!(-1);
    let invalid = send(&app, "POST", "/api/v1/ControllerPatio", Some(body), None).await?;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.body["error"], "Um ou mais campos são inválidos.");
    assert!(invalid.body["details"].get("ativo").is_some());
    assert!(invalid.body["details"].get("capacidade").is_some());

    let missing_field = send(
        &app,
        "POST",
        "/api/v1/ControllerTipoMoto",
        Some(json!({ "descricao": "Scooter" })),
        None,
    )
    .await?;
    assert_eq!(missing_field.status, StatusCode::BAD_REQUEST);

    // Nada foi gravado.
    let list = send(&app, "GET", "/api/v1/ControllerPatio", None, None).await?;
    assert_eq!(list.body["total"], 0);
    Ok(())
}

#[tokio::test]
async fn client_supplied_ids_are_kept() -> anyhow::Result<()> {
    let app = build_app().await?;
    let tipo = |id: Option<i64>| json!({ "id": id, "descricao": "Scooter", "categoria": "Urbana" });

    let explicit = send(&app, "POST", "/api/v1/ControllerTipoMoto", Some(tipo(Some(5))), None).await?;
    assert_eq!(explicit.status, StatusCode::CREATED);
    assert_eq!(explicit.location.as_deref(), Some("/api/v1/ControllerTipoMoto/5"));

    let generated = send(&app, "POST", "/api/v1/ControllerTipoMoto", Some(tipo(None)), None).await?;
    assert_eq!(generated.body["data"]["id"], 6);

    let at_the_limit = send(&app, "POST", "/api/v1/ControllerTipoMoto", Some(tipo(Some(i64::MAX))), None).await?;
    assert_eq!(at_the_limit.status, StatusCode::CREATED);
    assert_eq!(at_the_limit.body["data"]["id"], i64::MAX);

    let duplicate = send(&app, "POST", "/api/v1/ControllerTipoMoto", Some(tipo(Some(5))), None).await?;
    assert_eq!(duplicate.status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = duplicate.body["error"].as_str().unwrap_or_default();
    assert!(message.starts_with("Erro ao criar Tipo de moto:"), "{message}");
    Ok(())
}
