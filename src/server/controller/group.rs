//! Staff group management.
//!
//! The manager and delivery crew groups expose the same three operations. The public
//! handlers fix the role and share the private implementations below.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{AddGroupMemberDto, GroupMemberDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{GroupMember, Role},
        service::group::GroupService,
        state::AppState,
    },
};

/// Tag for grouping group management endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

const DENIAL_MESSAGE: &str = "Only managers can manage groups";

/// List the members of the "Manager" group.
///
/// # Access Control
/// - `Manager` - Only managers can manage groups
#[utoipa::path(
    get,
    path = "/api/groups/manager/users",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved managers", body = Vec<GroupMemberDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_managers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    get_members(&state, &session, Role::Manager).await
}

/// Add a user to the "Manager" group by username.
///
/// # Returns
/// - `201 Created` - User was added
/// - `200 OK` - User was already a manager
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller is not a manager
/// - `404 Not Found` - No user has that username
#[utoipa::path(
    post,
    path = "/api/groups/manager/users",
    tag = GROUP_TAG,
    request_body = AddGroupMemberDto,
    responses(
        (status = 201, description = "User added to group", body = MessageDto),
        (status = 200, description = "User was already a member", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_manager(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddGroupMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    add_member(&state, &session, Role::Manager, payload).await
}

/// Remove a user from the "Manager" group.
#[utoipa::path(
    delete,
    path = "/api/groups/manager/users/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User removed from group", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "User not found or not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_manager(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    remove_member(&state, &session, Role::Manager, id).await
}

/// List the members of the "Delivery crew" group.
///
/// # Access Control
/// - `Manager` - Only managers can manage groups
#[utoipa::path(
    get,
    path = "/api/delivery-crew/users",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved delivery crew", body = Vec<GroupMemberDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_delivery_crew(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    get_members(&state, &session, Role::DeliveryCrew).await
}

/// Add a user to the "Delivery crew" group by username.
#[utoipa::path(
    post,
    path = "/api/delivery-crew/users",
    tag = GROUP_TAG,
    request_body = AddGroupMemberDto,
    responses(
        (status = 201, description = "User added to group", body = MessageDto),
        (status = 200, description = "User was already a member", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_delivery_crew(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddGroupMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    add_member(&state, &session, Role::DeliveryCrew, payload).await
}

/// Remove a user from the "Delivery crew" group.
#[utoipa::path(
    delete,
    path = "/api/delivery-crew/users/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User removed from group", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "User not found or not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_delivery_crew(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    remove_member(&state, &session, Role::DeliveryCrew, id).await
}

async fn get_members(
    state: &AppState,
    session: &Session,
    role: Role,
) -> Result<(StatusCode, Json<Vec<GroupMemberDto>>), AppError> {
    let _ = AuthGuard::new(&state.db, session)
        .denial_message(DENIAL_MESSAGE)
        .require(&[Permission::Manager])
        .await?;

    let members = GroupService::new(&state.db).get_members(role).await?;

    Ok((
        StatusCode::OK,
        Json(members.into_iter().map(GroupMember::into_dto).collect()),
    ))
}

async fn add_member(
    state: &AppState,
    session: &Session,
    role: Role,
    payload: AddGroupMemberDto,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    let _ = AuthGuard::new(&state.db, session)
        .denial_message(DENIAL_MESSAGE)
        .require(&[Permission::Manager])
        .await?;

    let added = GroupService::new(&state.db)
        .add_member(role, &payload.username)
        .await?;

    Ok(if added {
        (StatusCode::CREATED, Json(MessageDto::new("User added to group")))
    } else {
        (StatusCode::OK, Json(MessageDto::new("User is already in the group")))
    })
}

async fn remove_member(
    state: &AppState,
    session: &Session,
    role: Role,
    user_id: i32,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    let _ = AuthGuard::new(&state.db, session)
        .denial_message(DENIAL_MESSAGE)
        .require(&[Permission::Manager])
        .await?;

    GroupService::new(&state.db)
        .remove_member(role, user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("User removed from group"))))
}
