use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{TaskInput, TaskListResponse, TaskQuery, TaskResponse},
    registry::TaskRegistry,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

/// The id segment is taken as a raw string so a non-integer id maps to a
/// 400 instead of the framework's default path-mismatch handling.
fn parse_task_id(raw: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid task id".into()))
}

/// Retrieves the authenticated user's tasks.
///
/// ## Query Parameters:
/// - `search` (optional): case-insensitive substring match on title or
///   description. Takes precedence over `completed` when both are given.
/// - `completed` (optional): filters tasks by their completion flag.
///
/// With neither parameter, all of the user's tasks are returned. Order is
/// unspecified.
#[get("")]
pub async fn list_tasks(
    registry: web::Data<TaskRegistry>,
    query_params: web::Query<TaskQuery>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = match (&query_params.search, query_params.completed) {
        (Some(search), _) => registry.search(user.id, search),
        (None, Some(completed)) => registry.list_by_completion(user.id, completed),
        (None, None) => registry.list(user.id),
    };

    Ok(HttpResponse::Ok().json(TaskListResponse {
        success: true,
        message: format!("Found {} tasks", tasks.len()),
        data: tasks,
    }))
}

/// Creates a new task owned by the authenticated user.
///
/// ## Request Body:
/// - `title`: required, must not be blank.
/// - `description`: required, may be empty.
/// - `completed` (optional): defaults to false.
///
/// ## Responses:
/// - `201 Created`: the new task, with its assigned id.
/// - `400 Bad Request`: blank title.
/// - `401 Unauthorized`: missing or invalid token.
#[post("")]
pub async fn create_task(
    registry: web::Data<TaskRegistry>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = registry.create(user.id, task_data.into_inner())?;

    Ok(HttpResponse::Created().json(TaskResponse {
        success: true,
        message: "Task created".to_string(),
        data: Some(task),
    }))
}

/// Retrieves one of the authenticated user's tasks by id.
///
/// A task owned by a different user is reported as `404 Not Found`, the
/// same as a task that does not exist.
#[get("/{id}")]
pub async fn get_task(
    registry: web::Data<TaskRegistry>,
    task_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let id = parse_task_id(&task_id)?;

    let task = registry
        .get(user.id, id)
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    Ok(HttpResponse::Ok().json(TaskResponse {
        success: true,
        message: "Task found".to_string(),
        data: Some(task),
    }))
}

/// Updates a task owned by the authenticated user.
///
/// Replaces title, description and completed; id and owner never change.
/// Misses follow the same owner-blind 404 rule as fetching by id.
#[put("/{id}")]
pub async fn update_task(
    registry: web::Data<TaskRegistry>,
    task_id: web::Path<String>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let id = parse_task_id(&task_id)?;

    let task = registry.update(user.id, id, task_data.into_inner())?;

    Ok(HttpResponse::Ok().json(TaskResponse {
        success: true,
        message: "Task updated".to_string(),
        data: Some(task),
    }))
}

/// Deletes a task owned by the authenticated user.
///
/// Owner-blind like the other operations: deleting another user's task
/// reports `404 Not Found`.
#[delete("/{id}")]
pub async fn delete_task(
    registry: web::Data<TaskRegistry>,
    task_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let id = parse_task_id(&task_id)?;

    if !registry.delete(user.id, id) {
        return Err(AppError::NotFound("Task not found".into()));
    }

    Ok(HttpResponse::Ok().json(TaskResponse {
        success: true,
        message: "Task deleted".to_string(),
        data: None,
    }))
}
