use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::{rngs::OsRng, RngCore};
use tempfile::TempDir;
use tower::ServiceExt;

use financas_server::{api::app_router, build_state, config::Config};

// Config is built directly instead of through env vars so tests can run in
// parallel without clobbering each other's process environment.
fn test_config(tmp: &TempDir) -> Config {
    let mut secret_bytes = [0u8; 32];
    OsRng.fill_bytes(&mut secret_bytes);
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().into_owned(),
        jwt_secret: BASE64.encode(secret_bytes),
        token_ttl: Duration::from_secs(3600),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
    }
}

async fn build_test_router() -> (axum::Router, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = test_config(&tmp);
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

async fn read_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn register(app: &axum::Router, nome: &str, email: &str, password: &str) -> Response<Body> {
    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/auth/register",
            None,
            serde_json::json!({ "nome": nome, "email": email, "password": password }),
        ))
        .await
        .unwrap()
}

async fn login(app: &axum::Router, email: &str, password: &str) -> Response<Body> {
    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            serde_json::json!({ "email": email, "password": password }),
        ))
        .await
        .unwrap()
}

async fn register_and_login(app: &axum::Router, email: &str) -> String {
    let response = register(app, "Teste", email, "correct-horse-battery").await;
    assert_eq!(response.status(), 201);
    let response = login(app, email, "correct-horse-battery").await;
    assert_eq!(response.status(), 200);
    let body = read_json(response).await;
    body["accessToken"].as_str().unwrap().to_string()
}

async fn create_categoria(app: &axum::Router, token: &str, nome: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/categorias",
            Some(token),
            serde_json::json!({ "nome": nome, "tipo": "DESPESA" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    read_json(response).await
}

#[tokio::test]
async fn health_is_public_but_entities_are_not() {
    let (app, _tmp) = build_test_router().await;

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/healthz", None))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    for uri in [
        "/api/v1/categorias",
        "/api/v1/despesas",
        "/api/v1/contas",
        "/api/v1/lancamentos",
        "/api/v1/extrato",
    ] {
        let response = app.clone().oneshot(get_request(uri, None)).await.unwrap();
        assert_eq!(response.status(), 401, "{uri} should require auth");
    }
}

#[tokio::test]
async fn register_login_and_access_with_bearer() {
    let (app, _tmp) = build_test_router().await;

    let response = register(&app, "Maria", "maria@example.com", "correct-horse-battery").await;
    assert_eq!(response.status(), 201);
    let created = read_json(response).await;
    assert_eq!(created["email"], "maria@example.com");
    assert!(created.get("passwordHash").is_none());

    // Same email again is a conflict
    let response = register(&app, "Maria", "maria@example.com", "correct-horse-battery").await;
    assert_eq!(response.status(), 409);

    // Short passwords are rejected before any user is created
    let response = register(&app, "Zeca", "zeca@example.com", "curta").await;
    assert_eq!(response.status(), 400);

    let response = login(&app, "maria@example.com", "wrong-password").await;
    assert_eq!(response.status(), 401);

    let response = login(&app, "maria@example.com", "correct-horse-battery").await;
    assert_eq!(response.status(), 200);
    let body = read_json(response).await;
    assert_eq!(body["tokenType"], "Bearer");
    let token = body["accessToken"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/auth/me", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let me = read_json(response).await;
    assert_eq!(me["email"], "maria@example.com");

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/categorias", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(read_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn session_cookie_grants_access() {
    let (app, _tmp) = build_test_router().await;

    let response = register(&app, "Ana", "ana@example.com", "correct-horse-battery").await;
    assert_eq!(response.status(), 201);

    let response = login(&app, "ana@example.com", "correct-horse-battery").await;
    assert_eq!(response.status(), 200);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("financas_session="));
    assert!(set_cookie.contains("HttpOnly"));
    let cookie = set_cookie.split(';').next().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/categorias")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    // A garbage cookie is rejected
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/categorias")
                .header(header::COOKIE, "financas_session=not-a-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn categoria_crud_and_soft_delete() {
    let (app, _tmp) = build_test_router().await;
    let token = register_and_login(&app, "crud@example.com").await;

    let categoria = create_categoria(&app, &token, "Moradia").await;
    let categoria_id = categoria["id"].as_str().unwrap().to_string();
    assert_eq!(categoria["ativo"], true);

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/categorias/{categoria_id}"),
            Some(&token),
            serde_json::json!({ "nome": "Casa", "tipo": "DESPESA", "ativo": false }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated = read_json(response).await;
    assert_eq!(updated["nome"], "Casa");
    assert_eq!(updated["ativo"], false);

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/categorias?ativo=false", Some(&token)))
        .await
        .unwrap();
    let inactive = read_json(response).await;
    assert_eq!(inactive.as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/v1/categorias/{categoria_id}"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    // Soft-deleted rows disappear from both list and get
    let response = app
        .clone()
        .oneshot(get_request("/api/v1/categorias", Some(&token)))
        .await
        .unwrap();
    assert_eq!(read_json(response).await, serde_json::json!([]));

    let response = app
        .clone()
        .oneshot(get_request(
            &format!("/api/v1/categorias/{categoria_id}"),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn despesa_validation_and_categoria_reference() {
    let (app, _tmp) = build_test_router().await;
    let token = register_and_login(&app, "despesas@example.com").await;

    let categoria = create_categoria(&app, &token, "Contas da casa").await;
    let categoria_id = categoria["id"].as_str().unwrap().to_string();

    // Unknown categoria is a validation failure, not a 500
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/despesas",
            Some(&token),
            serde_json::json!({
                "categoriaId": "nao-existe",
                "nome": "Luz",
                "valorEstimado": 180.0,
                "diaVencimento": 10
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    // Day out of range
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/despesas",
            Some(&token),
            serde_json::json!({
                "categoriaId": categoria_id,
                "nome": "Luz",
                "valorEstimado": 180.0,
                "diaVencimento": 32
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/despesas",
            Some(&token),
            serde_json::json!({
                "categoriaId": categoria_id,
                "nome": "Luz",
                "valorEstimado": 180.0,
                "diaVencimento": 10,
                "mensal": true
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let despesa = read_json(response).await;
    assert_eq!(despesa["nome"], "Luz");
    assert_eq!(despesa["mensal"], true);
}

#[tokio::test]
async fn pagar_lancamento_fills_payment_fields() {
    let (app, _tmp) = build_test_router().await;
    let token = register_and_login(&app, "pagar@example.com").await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/lancamentos",
            Some(&token),
            serde_json::json!({
                "tipo": "DESPESA",
                "descricao": "Aluguel agosto",
                "valor": 1500.0,
                "dataVencimento": "2026-08-05"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let lancamento = read_json(response).await;
    let lancamento_id = lancamento["id"].as_str().unwrap().to_string();
    assert_eq!(lancamento["status"], "PENDENTE");
    assert!(lancamento["valorPago"].is_null());

    // Empty body pays the full amount dated today
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(format!("/api/v1/lancamentos/{lancamento_id}/pagar"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let pago = read_json(response).await;
    assert_eq!(pago["status"], "PAGO");
    assert_eq!(pago["valorPago"], 1500.0);
    assert!(!pago["dataPagamento"].is_null());

    // Paying a lancamento that does not exist is a 404
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/lancamentos/nao-existe/pagar")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

async fn create_lancamento_json(
    app: &axum::Router,
    token: &str,
    body: serde_json::Value,
) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/lancamentos",
            Some(token),
            body,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    read_json(response).await
}

#[tokio::test]
async fn update_to_pago_stamps_payment_fields() {
    let (app, _tmp) = build_test_router().await;
    let token = register_and_login(&app, "atualizar@example.com").await;

    let lancamento = create_lancamento_json(
        &app,
        &token,
        serde_json::json!({
            "tipo": "DESPESA",
            "descricao": "Condominio",
            "valor": 640.0,
            "dataVencimento": "2026-08-08"
        }),
    )
    .await;
    let lancamento_id = lancamento["id"].as_str().unwrap().to_string();

    // A plain update to PAGO without payment fields still fills both
    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/lancamentos/{lancamento_id}"),
            Some(&token),
            serde_json::json!({
                "tipo": "DESPESA",
                "descricao": "Condominio",
                "valor": 640.0,
                "dataVencimento": "2026-08-08",
                "status": "PAGO"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated = read_json(response).await;
    assert_eq!(updated["status"], "PAGO");
    assert_eq!(updated["valorPago"], 640.0);
    assert!(!updated["dataPagamento"].is_null());
}

#[tokio::test]
async fn lancamento_list_filters_by_conta_categoria_and_status() {
    let (app, _tmp) = build_test_router().await;
    let token = register_and_login(&app, "filtros@example.com").await;

    let categoria = create_categoria(&app, &token, "Moradia").await;
    let categoria_id = categoria["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/contas",
            Some(&token),
            serde_json::json!({ "nome": "Banco", "tipoConta": "CORRENTE" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let conta = read_json(response).await;
    let conta_id = conta["id"].as_str().unwrap().to_string();

    create_lancamento_json(
        &app,
        &token,
        serde_json::json!({
            "tipo": "DESPESA",
            "descricao": "Aluguel",
            "valor": 1500.0,
            "dataVencimento": "2026-08-05",
            "contaId": conta_id,
            "categoriaId": categoria_id
        }),
    )
    .await;
    let avulso = create_lancamento_json(
        &app,
        &token,
        serde_json::json!({
            "tipo": "DESPESA",
            "descricao": "Farmacia",
            "valor": 80.0,
            "dataVencimento": "2026-08-12"
        }),
    )
    .await;
    create_lancamento_json(
        &app,
        &token,
        serde_json::json!({
            "tipo": "RECEITA",
            "descricao": "Salario",
            "valor": 5000.0,
            "dataVencimento": "2026-08-01",
            "contaId": conta_id
        }),
    )
    .await;

    // Pay the standalone one so a PAGO row exists
    let avulso_id = avulso["id"].as_str().unwrap().to_string();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(format!("/api/v1/lancamentos/{avulso_id}/pagar"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let list = |uri: String| {
        let app = app.clone();
        let token = token.clone();
        async move {
            let response = app
                .oneshot(get_request(&uri, Some(&token)))
                .await
                .unwrap();
            assert_eq!(response.status(), 200);
            read_json(response).await
        }
    };

    let por_conta = list(format!("/api/v1/lancamentos?contaId={conta_id}")).await;
    assert_eq!(por_conta.as_array().unwrap().len(), 2);

    let por_categoria = list(format!("/api/v1/lancamentos?categoriaId={categoria_id}")).await;
    let por_categoria = por_categoria.as_array().unwrap();
    assert_eq!(por_categoria.len(), 1);
    assert_eq!(por_categoria[0]["descricao"], "Aluguel");

    let pagos = list("/api/v1/lancamentos?status=PAGO".to_string()).await;
    let pagos = pagos.as_array().unwrap();
    assert_eq!(pagos.len(), 1);
    assert_eq!(pagos[0]["descricao"], "Farmacia");

    let receitas = list("/api/v1/lancamentos?tipo=RECEITA".to_string()).await;
    let receitas = receitas.as_array().unwrap();
    assert_eq!(receitas.len(), 1);
    assert_eq!(receitas[0]["descricao"], "Salario");
}

#[tokio::test]
async fn conta_crud_and_soft_delete() {
    let (app, _tmp) = build_test_router().await;
    let token = register_and_login(&app, "contas@example.com").await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/contas",
            Some(&token),
            serde_json::json!({ "nome": "Carteira", "tipoConta": "CARTEIRA" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let conta = read_json(response).await;
    let conta_id = conta["id"].as_str().unwrap().to_string();
    assert_eq!(conta["ativo"], true);

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/contas/{conta_id}"),
            Some(&token),
            serde_json::json!({ "nome": "Poupanca", "tipoConta": "POUPANCA", "ativo": false }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated = read_json(response).await;
    assert_eq!(updated["nome"], "Poupanca");
    assert_eq!(updated["tipoConta"], "POUPANCA");
    assert_eq!(updated["ativo"], false);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/v1/contas/{conta_id}"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/contas", Some(&token)))
        .await
        .unwrap();
    assert_eq!(read_json(response).await, serde_json::json!([]));

    let response = app
        .clone()
        .oneshot(get_request(
            &format!("/api/v1/contas/{conta_id}"),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn fonte_renda_crud_and_validation() {
    let (app, _tmp) = build_test_router().await;
    let token = register_and_login(&app, "renda@example.com").await;

    // Day out of range is rejected
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/fontes-renda",
            Some(&token),
            serde_json::json!({ "nome": "Salario", "valorEstimado": 5000.0, "diaRecebimento": 0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/fontes-renda",
            Some(&token),
            serde_json::json!({
                "nome": "Salario",
                "valorEstimado": 5000.0,
                "diaRecebimento": 5,
                "mensal": true
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let fonte = read_json(response).await;
    let fonte_id = fonte["id"].as_str().unwrap().to_string();
    assert_eq!(fonte["mensal"], true);

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/fontes-renda/{fonte_id}"),
            Some(&token),
            serde_json::json!({
                "nome": "Salario liquido",
                "valorEstimado": 4600.0,
                "diaRecebimento": 6,
                "mensal": true,
                "ativo": true
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated = read_json(response).await;
    assert_eq!(updated["nome"], "Salario liquido");
    assert_eq!(updated["diaRecebimento"], 6);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/v1/fontes-renda/{fonte_id}"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/fontes-renda", Some(&token)))
        .await
        .unwrap();
    assert_eq!(read_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn email_is_normalized_for_login() {
    let (app, _tmp) = build_test_router().await;

    let response = register(&app, "Maria", "  Maria@Example.com ", "correct-horse-battery").await;
    assert_eq!(response.status(), 201);
    let created = read_json(response).await;
    assert_eq!(created["email"], "maria@example.com");

    // Login with the canonical form succeeds
    let response = login(&app, "maria@example.com", "correct-horse-battery").await;
    assert_eq!(response.status(), 200);

    // And with yet another casing of the same address
    let response = login(&app, "MARIA@example.COM", "correct-horse-battery").await;
    assert_eq!(response.status(), 200);

    // Re-registering a different casing is still a duplicate
    let response = register(&app, "Maria", "MARIA@EXAMPLE.COM", "correct-horse-battery").await;
    assert_eq!(response.status(), 409);
}

#[tokio::test]
async fn users_cannot_see_each_other() {
    let (app, _tmp) = build_test_router().await;
    let token_a = register_and_login(&app, "alice@example.com").await;
    let token_b = register_and_login(&app, "bruno@example.com").await;

    let categoria = create_categoria(&app, &token_a, "Transporte").await;
    let categoria_id = categoria["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/categorias", Some(&token_b)))
        .await
        .unwrap();
    assert_eq!(read_json(response).await, serde_json::json!([]));

    let response = app
        .clone()
        .oneshot(get_request(
            &format!("/api/v1/categorias/{categoria_id}"),
            Some(&token_b),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn extrato_groups_and_summarizes() {
    let (app, _tmp) = build_test_router().await;
    let token = register_and_login(&app, "extrato@example.com").await;

    for (descricao, tipo, valor, data) in [
        ("Salario", "RECEITA", 5000.0, "2026-07-01"),
        ("Aluguel", "DESPESA", 1500.0, "2026-07-05"),
        ("Internet", "DESPESA", 120.0, "2026-07-20"),
    ] {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/v1/lancamentos",
                Some(&token),
                serde_json::json!({
                    "tipo": tipo,
                    "descricao": descricao,
                    "valor": valor,
                    "dataVencimento": data
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), 201);
    }

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/extrato?ano=2026&mes=7", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let extrato = read_json(response).await;
    let grupos = extrato.as_array().unwrap();
    assert_eq!(grupos.len(), 1);
    assert_eq!(grupos[0]["ano"], 2026);
    assert_eq!(grupos[0]["mes"], 7);
    assert_eq!(grupos[0]["lancamentos"].as_array().unwrap().len(), 3);
    assert_eq!(grupos[0]["total"], 6620.0);
    assert_eq!(grupos[0]["totalPago"], 0.0);

    let response = app
        .clone()
        .oneshot(get_request(
            "/api/v1/relatorios/resumo-mensal?meses=3",
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let resumo = read_json(response).await;
    assert_eq!(resumo.as_array().unwrap().len(), 3);

    let response = app
        .clone()
        .oneshot(get_request(
            "/api/v1/relatorios/por-categoria?ano=2026&mes=7",
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let por_categoria = read_json(response).await;
    // All three entries are uncategorized, so they land in a single group
    assert_eq!(por_categoria.as_array().unwrap().len(), 1);
    assert_eq!(por_categoria[0]["quantidade"], 3);
}
