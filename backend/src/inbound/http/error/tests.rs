//! Tests for HTTP error mapping.

use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("x"), StatusCode::BAD_REQUEST)]
#[case(Error::duplicate("x"), StatusCode::BAD_REQUEST)]
#[case(Error::invalid_credentials("x"), StatusCode::UNAUTHORIZED)]
#[case(Error::unauthorized("x"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("x"), StatusCode::NOT_FOUND)]
#[case(Error::internal("x"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn body_of(response: HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON parses")
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("user store lock poisoned")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "secret": "x" }));

    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert_eq!(header.as_deref(), Some(TRACE_ID));

    let body = body_of(response).await;
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["mensagem"], REDACTED_MESSAGE);
    assert_eq!(body["traceId"], expected_trace_id);
    assert!(body.get("details").is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let error = Error::not_found("Contato não encontrado.").with_details(json!({ "id": "abc" }));

    let response = ResponseError::error_response(&error);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());

    let body = body_of(response).await;
    assert_eq!(
        body,
        json!({
            "code": "not_found",
            "mensagem": "Contato não encontrado.",
            "details": { "id": "abc" },
        })
    );
}

#[rstest]
#[case(JsonPayloadError::ContentType, "unsupported_content_type")]
#[case(JsonPayloadError::Overflow { limit: 1 }, "payload_too_large")]
#[actix_web::test]
async fn json_errors_become_invalid_requests(
    #[case] payload_error: JsonPayloadError,
    #[case] reason: &str,
) {
    let request = TestRequest::default().to_http_request();

    let err = json_error_handler(payload_error, &request);
    let response = err.error_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_of(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], reason);
}
