//! Company endpoints against a real database. `sqlx::test` creates a fresh database
//! per test, so `DATABASE_URL` must point at a server that allows creating them.

mod common;

use axum::http::{Method, StatusCode};
use common::{seeded_app, send};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = false)]
async fn lists_every_company_by_code(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let (status, body) = send(&app, Method::GET, "/companies", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "companies": [
                { "code": "apple", "name": "Apple Computer" },
                { "code": "ibm", "name": "IBM" }
            ]
        })
    );
}

#[sqlx::test(migrations = false)]
async fn reads_company_with_invoice_ids(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let (status, body) = send(&app, Method::GET, "/companies/apple", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "company": {
                "code": "apple",
                "name": "Apple Computer",
                "description": "Maker of OSX.",
                "invoices": [1, 2, 3]
            }
        })
    );
}

#[sqlx::test(migrations = false)]
async fn unknown_company_is_404(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let (status, body) = send(&app, Method::GET, "/companies/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[sqlx::test(migrations = false)]
async fn created_company_reads_back_without_invoices(pool: PgPool) {
    let app = seeded_app(&pool).await;
    sqlx::query("DELETE FROM companies WHERE code = 'apple'")
        .execute(&pool)
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/companies",
        Some(json!({ "code": "apple", "name": "Apple", "description": "Tech" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "company": { "code": "apple", "name": "Apple", "description": "Tech" } })
    );

    let (status, body) = send(&app, Method::GET, "/companies/apple", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "company": { "code": "apple", "name": "Apple", "description": "Tech", "invoices": [] }
        })
    );
}

#[sqlx::test(migrations = false)]
async fn duplicate_code_is_rejected(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/companies",
        Some(json!({ "code": "ibm", "name": "Another IBM", "description": null })),
    )
    .await;

    assert!(!status.is_success());
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "database_error");
}

#[sqlx::test(migrations = false)]
async fn update_changes_fields_but_not_code(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/companies/ibm",
        Some(json!({ "name": "International Business Machines", "description": "Still blue." })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "company": {
                "code": "ibm",
                "name": "International Business Machines",
                "description": "Still blue."
            }
        })
    );
    let (_, body) = send(&app, Method::GET, "/companies/ibm", None).await;
    assert_eq!(body["company"]["invoices"], json!([4]));
}

#[sqlx::test(migrations = false)]
async fn update_unknown_company_is_404(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/companies/nope",
        Some(json!({ "name": "Nope", "description": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = false)]
async fn second_delete_is_404(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let (status, body) = send(&app, Method::DELETE, "/companies/ibm", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "deleted" }));

    let (status, _) = send(&app, Method::DELETE, "/companies/ibm", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = false)]
async fn deleting_company_removes_its_invoices(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let (status, _) = send(&app, Method::DELETE, "/companies/ibm", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, "/invoices/4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
