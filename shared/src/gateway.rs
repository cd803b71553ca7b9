//! Helpers around the API Gateway proxy integration types.

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use http::{HeaderMap, HeaderValue};
use query_map::QueryMap;
use serde_json::Value;
use std::collections::HashMap;

/// JSON content type plus permissive CORS for `GET`.
pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET"));
    headers
}

pub fn json_response(status_code: u16, body: &Value) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: i64::from(status_code),
        headers: json_headers(),
        body: Some(Body::Text(body.to_string())),
        ..Default::default()
    }
}

/// Builds a proxy request carrying only the given query string.
pub fn request_with_query<I, K, V>(params: I) -> ApiGatewayProxyRequest
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let params: HashMap<String, String> = params
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();

    ApiGatewayProxyRequest {
        query_string_parameters: QueryMap::from(params),
        ..Default::default()
    }
}

/// Text of a response body; empty for a missing or binary body.
pub fn body_text(response: &ApiGatewayProxyResponse) -> &str {
    match &response.body {
        Some(Body::Text(text)) => text,
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn proxy_event(query: Value) -> Value {
        json!({
            "resource": "/",
            "path": "/",
            "httpMethod": "GET",
            "headers": { "Accept": "*/*" },
            "multiValueHeaders": { "Accept": ["*/*"] },
            "queryStringParameters": query,
            "multiValueQueryStringParameters": null,
            "pathParameters": null,
            "stageVariables": null,
            "requestContext": {
                "accountId": "123456789012",
                "resourceId": "abc123",
                "stage": "prod",
                "requestId": "c6af9ac6-7b61-11e6-9a41-93e8deadbeef",
                "identity": { "sourceIp": "127.0.0.1" },
                "resourcePath": "/",
                "httpMethod": "GET",
                "apiId": "1234567890",
                "protocol": "HTTP/1.1"
            },
            "body": null,
            "isBase64Encoded": false
        })
    }

    #[test]
    fn reads_query_from_proxy_event() {
        let request: ApiGatewayProxyRequest =
            serde_json::from_value(proxy_event(json!({ "number": "42" }))).unwrap();

        assert_eq!(request.query_string_parameters.first("number"), Some("42"));
        assert_eq!(request.query_string_parameters.first("other"), None);
    }

    #[test]
    fn null_query_is_empty() {
        let request: ApiGatewayProxyRequest =
            serde_json::from_value(proxy_event(Value::Null)).unwrap();

        assert_eq!(request.query_string_parameters.first("number"), None);
    }

    #[test]
    fn response_carries_fixed_headers() {
        let response = json_response(400, &json!({ "error": "nope" }));

        assert_eq!(response.status_code, 400);
        assert_eq!(response.headers.len(), 4);
        assert_eq!(response.headers[CONTENT_TYPE], "application/json");
        assert_eq!(response.headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(response.headers[ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
        assert_eq!(response.headers[ACCESS_CONTROL_ALLOW_METHODS], "GET");
        assert_eq!(body_text(&response), r#"{"error":"nope"}"#);
    }

    #[test]
    fn response_serializes_in_proxy_shape() {
        let response = json_response(200, &json!({}));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["body"], "{}");
        assert_eq!(value["headers"]["content-type"], "application/json");
    }

    #[test]
    fn request_with_query_builds_map() {
        let request = request_with_query([("number", "7")]);

        assert_eq!(request.query_string_parameters.first("number"), Some("7"));
    }
}
