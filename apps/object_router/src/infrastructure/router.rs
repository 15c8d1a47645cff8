use axum::{
    Router,
    routing::{get, put},
};

use crate::infrastructure::{
    adapters::controllers::{
        admin_controller::{delete_instance, put_instance, ring_snapshot},
        object_controller::{get_object, ping, put_object},
    },
    app_state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/objects/{id}", get(get_object).put(put_object))
        .route(
            "/admin/instances/{instance_ref}",
            put(put_instance).delete(delete_instance),
        )
        .route("/admin/ring", get(ring_snapshot))
        .with_state(state)
}
