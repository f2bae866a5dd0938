use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::crud::{EntityError, ErrorBody};

/// `EntityError` as an HTTP response with an `ErrorBody` JSON payload
#[derive(Debug)]
pub struct ApiError(pub EntityError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            EntityError::NotFound { .. } | EntityError::UnknownKind(_) => StatusCode::NOT_FOUND,
            EntityError::DuplicateId { .. } => StatusCode::CONFLICT,
            EntityError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<EntityError> for ApiError {
    fn from(err: EntityError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorBody::from(&self.0))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::crud::ValidationErrors;

    #[test]
    fn test_status_codes() {
        let cases = [
            (EntityError::not_found("Course", "COURSE999"), StatusCode::NOT_FOUND),
            (EntityError::UnknownKind("spaceships".into()), StatusCode::NOT_FOUND),
            (EntityError::duplicate_id("Course", "COURSE101"), StatusCode::CONFLICT),
            (
                EntityError::Validation(ValidationErrors::new()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).into_response().status(), status);
        }
    }
}
