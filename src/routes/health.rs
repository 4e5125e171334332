use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// API index
///
/// Lists the available endpoints so the root URL is self-describing.
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "taskhive CRUD + Auth API",
        "version": env!("CARGO_PKG_VERSION"),
        "auth_endpoints": [
            "POST /api/auth/register - Register",
            "POST /api/auth/login    - Login (obtain a token)"
        ],
        "task_endpoints": [
            "GET    /api/tasks           - All tasks",
            "GET    /api/tasks?completed= - Filter by status",
            "GET    /api/tasks?search=   - Search",
            "GET    /api/tasks/{id}      - Task by id",
            "POST   /api/tasks           - Create",
            "PUT    /api/tasks/{id}      - Update",
            "DELETE /api/tasks/{id}      - Delete"
        ]
    }))
}

/// Health check endpoint
///
/// Returns the current status of the API and timestamp.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now()
    }))
}
