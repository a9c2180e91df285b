use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{comments, photos, social_medias, users};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/login", post(users::login))
        .route("/users/register", post(users::register))
        .route("/users", put(users::update).delete(users::delete))
        .route("/photos", get(photos::list).post(photos::create))
        .route("/photos/:id", put(photos::update).delete(photos::delete))
        .route("/comments", get(comments::list).post(comments::create))
        .route("/comments/:id", put(comments::update).delete(comments::delete))
        .route(
            "/socialmedias",
            get(social_medias::list).post(social_medias::create),
        )
        .route(
            "/socialmedias/:id",
            put(social_medias::update).delete(social_medias::delete),
        )
}
