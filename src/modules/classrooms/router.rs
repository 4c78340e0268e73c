use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::classrooms::controller::{
    create_classroom, delete_classroom, get_classroom, get_classrooms, get_large_classrooms,
    update_classroom, uppercase_classrooms,
};
use crate::state::AppState;

pub fn init_classrooms_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_classroom).get(get_classrooms))
        .route("/large", get(get_large_classrooms))
        .route("/actions/uppercase", post(uppercase_classrooms))
        .route(
            "/{id}",
            get(get_classroom)
                .put(update_classroom)
                .delete(delete_classroom),
        )
}
