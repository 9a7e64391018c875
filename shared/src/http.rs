//! HTTP helpers for Lambda functions.

use lambda_http::{Body, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Create a JSON response with the given status code and data.
///
/// CORS is fully open: the API is fronted by a public CloudFront-hosted UI.
pub fn json_response<T: Serialize>(status: u16, data: &T) -> Result<Response<Body>, lambda_http::Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "*")
        .header("Access-Control-Allow-Headers", "*")
        .body(Body::from(serde_json::to_string(data)?))?)
}

/// Empty 204 response for CORS preflight requests.
pub fn preflight_response() -> Result<Response<Body>, lambda_http::Error> {
    Ok(Response::builder()
        .status(204)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "*")
        .header("Access-Control-Allow-Headers", "*")
        .body(Body::Empty)?)
}

/// Parse request body as JSON, returning a ready 400 response on failure.
///
/// Returns `Ok(Ok(T))` on successful parse, `Ok(Err(Response))` on parse error (400),
/// or `Err(lambda_http::Error)` on serialization failure.
pub fn parse_json_body<T: DeserializeOwned>(body: &Body) -> Result<Result<T, Response<Body>>, lambda_http::Error> {
    match serde_json::from_slice(body.as_ref()) {
        Ok(parsed) => Ok(Ok(parsed)),
        Err(e) => {
            let response = json_response(
                400,
                &serde_json::json!({ "error": format!("Invalid request body: {}", e) }),
            )?;
            Ok(Err(response))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChatRequest, ChatResponse};

    #[test]
    fn test_json_response_shape() {
        let response = json_response(200, &ChatResponse { response: "hi".to_string() }).unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Content-Type"], "application/json");
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
        let body = std::str::from_utf8(response.body().as_ref()).unwrap();
        assert_eq!(body, r#"{"response":"hi"}"#);
    }

    #[test]
    fn test_parse_json_body() {
        let body = Body::from(r#"{"message":"hello"}"#);
        let parsed: ChatRequest = parse_json_body(&body).unwrap().unwrap();
        assert_eq!(parsed.message, "hello");

        let bad = Body::from("not json");
        let result = parse_json_body::<ChatRequest>(&bad).unwrap();
        let response = result.expect_err("parse should fail");
        assert_eq!(response.status(), 400);
    }

    #[test]
    fn test_preflight_response() {
        let response = preflight_response().unwrap();
        assert_eq!(response.status(), 204);
        assert_eq!(response.headers()["Access-Control-Allow-Methods"], "*");
    }
}
