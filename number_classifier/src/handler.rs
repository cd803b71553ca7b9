use crate::engine::{classify, Classification, ParsedNumber};
use crate::error::ClassifyError;
use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use shared::gateway::json_response;
use tracing::{error, info, warn};

const NUMBER_PARAM: &str = "number";

// 2^63, the first integral f64 past i64::MAX.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Runs one request through parsing and classification and always yields a
/// response; failures become 4xx/5xx bodies.
pub fn handle(request: &ApiGatewayProxyRequest) -> ApiGatewayProxyResponse {
    let result = classify_request(request).and_then(|classification| {
        serde_json::to_value(&classification).map_err(|e| ClassifyError::Internal(e.to_string()))
    });

    match result {
        Ok(body) => {
            info!("Classified {} | Status: 200", body["number"]);
            json_response(200, &body)
        }
        Err(err) => {
            let status = err.status_code();
            match &err {
                ClassifyError::Internal(message) => error!("Internal error: {}", message),
                _ => warn!("Rejected input: {} | Status: {}", err, status),
            }
            json_response(status, &err.body())
        }
    }
}

pub fn classify_request(
    request: &ApiGatewayProxyRequest,
) -> Result<Classification, ClassifyError> {
    let raw = match request.query_string_parameters.first(NUMBER_PARAM) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(ClassifyError::MissingInput),
    };

    let (value, parsed) = parse(raw)?;
    Ok(classify(value, parsed))
}

pub fn parse(raw: &str) -> Result<(f64, ParsedNumber), ClassifyError> {
    let value = strip_digit_separators(raw.trim())
        .and_then(|digits| digits.parse::<f64>().ok())
        .ok_or_else(|| ClassifyError::InvalidFormat(raw.to_string()))?;

    if !value.is_finite() || value.fract() != 0.0 {
        return Ok((value, ParsedNumber::Real(value)));
    }

    if value < -I64_UPPER || value >= I64_UPPER {
        return Err(ClassifyError::Internal(format!(
            "{} is outside the supported integer range",
            raw
        )));
    }

    Ok((value, ParsedNumber::Integer(value as i64)))
}

/// Drops `_` separators, which are only valid with a digit on both sides.
fn strip_digit_separators(raw: &str) -> Option<String> {
    if !raw.contains('_') {
        return Some(raw.to_string());
    }

    let bytes = raw.as_bytes();
    let mut stripped = String::with_capacity(raw.len());
    for (i, c) in raw.char_indices() {
        if c != '_' {
            stripped.push(c);
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }

    Some(stripped)
}
