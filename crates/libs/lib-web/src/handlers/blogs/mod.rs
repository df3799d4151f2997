//! # Blog Post Handlers
//!
//! HTTP request handlers for blog post CRUD.
//!
//! All routes here sit behind the authentication gateway; the authenticated
//! identity arrives as a [`CurrentUser`] extension. Reads are open to any
//! authenticated user. Mutations enforce the ownership policy: the post must
//! exist, and the caller must be its author, checked in that order so a
//! non-owner probing a missing id still sees 404 rather than 403.

use axum::{
    extract::{Extension, Json, Path, State},
    http::StatusCode,
};
use lib_core::{
    dto::{CreatePostRequest, DeleteResponse, PostResponse, UpdatePostRequest, UserInfo},
    model::store::models::{PostForCreate, PostForUpdate, PostWithAuthor},
    model::store::PostRepository,
    AppError, DbPool,
};
use lib_utils::time::format_time;
use lib_utils::validation::validate_not_empty;
use tracing::{debug, info, instrument, warn};

use crate::middleware::CurrentUser;

fn to_response(post: PostWithAuthor) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        image_url: post.image_url,
        author: UserInfo {
            id: post.author_id.to_string(),
            name: post.author_name,
            email: post.author_email,
        },
        created_at: format_time(post.created_at),
        updated_at: format_time(post.updated_at),
    }
}

/// Create a new post owned by the authenticated user.
///
/// # Returns
///
/// * `201` with the created post
/// * `400 MissingFields` when title or content is absent/empty
#[instrument(skip_all, fields(user_id = current.user_id))]
pub async fn create_post(
    State(pool): State<DbPool>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    if validate_not_empty(&req.title, "title").is_err()
        || validate_not_empty(&req.content, "content").is_err()
    {
        warn!("[BLOG] Missing fields on create");
        return Err(AppError::MissingFields(
            "title and content are required".to_string(),
        ));
    }

    let post = PostRepository::create(
        &pool,
        PostForCreate {
            title: req.title,
            content: req.content,
            image_url: req.image_url,
            author_id: current.user_id,
        },
    )
    .await?;

    info!("[BLOG] Post {} created by user {}", post.id, current.user_id);

    let with_author = PostRepository::find_with_author(&pool, post.id)
        .await?
        .ok_or_else(|| AppError::Internal("created post vanished".to_string()))?;

    Ok((StatusCode::CREATED, Json(to_response(with_author))))
}

/// List all posts, newest first. Any authenticated user may read any post.
pub async fn list_posts(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let posts = PostRepository::list_with_authors(&pool).await?;

    debug!("[BLOG] Listing {} posts", posts.len());

    Ok(Json(posts.into_iter().map(to_response).collect()))
}

/// Fetch a single post by id.
pub async fn get_post(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<PostResponse>, AppError> {
    let post = PostRepository::find_with_author(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id}")))?;

    Ok(Json(to_response(post)))
}

/// Partially update a post. Owner only.
///
/// Fields absent from the body are left unchanged; absence means "no
/// change", never "clear to empty".
#[instrument(skip_all, fields(user_id = current.user_id, post_id = id))]
pub async fn update_post(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<UpdatePostRequest>,
) -> Result<Json<PostResponse>, AppError> {
    let post = PostRepository::find_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id}")))?;

    if post.author_id != current.user_id {
        warn!(
            "[BLOG] User {} may not update post {} owned by {}",
            current.user_id, id, post.author_id
        );
        return Err(AppError::Forbidden(format!(
            "post {id} belongs to another user"
        )));
    }

    let mut post_data = PostForUpdate::new();
    if let Some(title) = req.title {
        post_data = post_data.title(title);
    }
    if let Some(content) = req.content {
        post_data = post_data.content(content);
    }
    if let Some(image_url) = req.image_url {
        post_data = post_data.image_url(image_url);
    }

    PostRepository::update(&pool, id, post_data).await?;

    info!("[BLOG] Post {} updated by user {}", id, current.user_id);

    let with_author = PostRepository::find_with_author(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id}")))?;

    Ok(Json(to_response(with_author)))
}

/// Delete a post. Owner only.
#[instrument(skip_all, fields(user_id = current.user_id, post_id = id))]
pub async fn delete_post(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<DeleteResponse>, AppError> {
    let post = PostRepository::find_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id}")))?;

    if post.author_id != current.user_id {
        warn!(
            "[BLOG] User {} may not delete post {} owned by {}",
            current.user_id, id, post.author_id
        );
        return Err(AppError::Forbidden(format!(
            "post {id} belongs to another user"
        )));
    }

    PostRepository::delete(&pool, id).await?;

    info!("[BLOG] Post {} deleted by user {}", id, current.user_id);

    Ok(Json(DeleteResponse {
        message: "Deleted".to_string(),
    }))
}

#[cfg(test)]
mod tests;
