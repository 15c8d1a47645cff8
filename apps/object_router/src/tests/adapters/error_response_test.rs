#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use std::time::Duration;

    use crate::core::domain::models::{AppError, BlobStoreError};
    use crate::infrastructure::adapters::controllers::error_response::status_of;

    #[test]
    fn unavailable_owner_and_missing_object_are_not_found() {
        for err in [
            AppError::InstanceNotAccessible("10.0.0.2:9000".into()),
            AppError::NoAvailableNode,
            AppError::from(BlobStoreError::NotFound("obj".into())),
            AppError::UnknownInstance("c1".into()),
        ] {
            assert_eq!(status_of(&err), StatusCode::NOT_FOUND, "{err:?}");
        }
    }

    #[test]
    fn remaining_errors_map_to_their_status() {
        assert_eq!(
            status_of(&AppError::BadRequest("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(&AppError::Timeout(Duration::from_secs(1))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(&AppError::from(BlobStoreError::Unavailable("down".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_carries_status() {
        let response = AppError::NoAvailableNode.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::Timeout(Duration::from_millis(5)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
