// 📐 Request validation - bridge accumulated field errors into a 400
//
// An upstream step (e.g. `check_query`) attaches a `ValidationReport` to the
// request extensions. `validate_request` then either answers 400 with
// `{"errors": [...]}` or hands the request on untouched.

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// FIELD ERRORS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Query,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FieldError {
    pub fn new(location: Location, field: &str, message: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.into(),
            location,
            value: None,
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }
}

/// Field errors accumulated for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn array(&self) -> &[FieldError] {
        &self.errors
    }
}

impl Extend<FieldError> for ValidationReport {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl From<Vec<FieldError>> for ValidationReport {
    fn from(errors: Vec<FieldError>) -> Self {
        ValidationReport { errors }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    errors: &'a [FieldError],
}

// ============================================================================
// ADAPTER
// ============================================================================

/// Terminal 400 when the attached report has errors, otherwise pass-through.
pub async fn validate_request(req: Request, next: Next) -> Response {
    if let Some(report) = req.extensions().get::<ValidationReport>() {
        if !report.is_empty() {
            tracing::debug!(errors = report.len(), path = %req.uri().path(), "rejecting invalid request");
            let body = ErrorBody {
                errors: report.array(),
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    }

    next.run(req).await
}

// ============================================================================
// QUERY RULES (upstream producer)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Present and not blank. A missing optional field skips its other rules.
    Required,
    Email,
    PositiveNumber,
    OneOf(Vec<String>),
}

impl Rule {
    pub fn one_of(values: &[&str]) -> Self {
        Rule::OneOf(values.iter().map(|v| v.to_string()).collect())
    }

    fn check(&self, value: &str) -> Option<String> {
        match self {
            Rule::Required => None,
            Rule::Email => (!looks_like_email(value)).then(|| "must be a valid email address".to_string()),
            Rule::PositiveNumber => match value.trim().parse::<f64>() {
                Ok(n) if n.is_finite() && n > 0.0 => None,
                _ => Some("must be a positive number".to_string()),
            },
            Rule::OneOf(allowed) => (!allowed.iter().any(|a| a == value))
                .then(|| format!("must be one of: {}", allowed.join(", "))),
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

/// Per-field rules checked against the query string.
#[derive(Debug, Clone, Default)]
pub struct QueryRules {
    fields: Vec<(String, Vec<Rule>)>,
}

impl QueryRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push((name.to_string(), rules.into_iter().collect()));
        self
    }

    /// Every failure, in field order. At most one error per field.
    pub fn check(&self, params: &HashMap<String, String>) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for (name, rules) in &self.fields {
            let value = params.get(name).filter(|v| !v.trim().is_empty());
            let Some(value) = value else {
                if rules.contains(&Rule::Required) {
                    errors.push(FieldError::new(Location::Query, name, "is required"));
                }
                continue;
            };

            if let Some(message) = rules.iter().find_map(|rule| rule.check(value)) {
                errors.push(FieldError::new(Location::Query, name, message).with_value(value));
            }
        }

        errors
    }
}

/// Append query-rule failures to the request's report; never responds itself.
pub async fn check_query(State(rules): State<Arc<QueryRules>>, mut req: Request, next: Next) -> Response {
    let params = Query::<HashMap<String, String>>::try_from_uri(req.uri())
        .map(|Query(params)| params)
        .unwrap_or_default();
    let found = rules.check(&params);

    let mut report = req
        .extensions_mut()
        .remove::<ValidationReport>()
        .unwrap_or_default();
    report.extend(found);
    req.extensions_mut().insert(report);

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        middleware::{from_fn, from_fn_with_state},
        routing::get,
        Router,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    fn app(hits: Arc<AtomicUsize>) -> Router {
        let rules = QueryRules::new()
            .field("amount", [Rule::Required, Rule::PositiveNumber])
            .field("type", [Rule::Required, Rule::one_of(&["INCOME", "EXPENSE"])])
            .field("email", [Rule::Email]);

        Router::new()
            .route(
                "/transactions",
                get(move || {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        "ok"
                    }
                }),
            )
            .layer(from_fn(validate_request))
            .layer(from_fn_with_state(Arc::new(rules), check_query))
    }

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get_request(uri: &str) -> Request {
        axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_passes_through_once() {
        let hits = Arc::new(AtomicUsize::new(0));

        let resp = app(hits.clone())
            .oneshot(get_request("/transactions?amount=25.5&type=EXPENSE"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn test_invalid_request_short_circuits() {
        let hits = Arc::new(AtomicUsize::new(0));

        let resp = app(hits.clone())
            .oneshot(get_request("/transactions?amount=-5&email=nope"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        let body = body_json(resp).await;
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0]["field"], "amount");
        assert_eq!(errors[0]["message"], "must be a positive number");
        assert_eq!(errors[0]["value"], "-5");
        assert_eq!(errors[1]["field"], "type");
        assert_eq!(errors[1]["message"], "is required");
        assert_eq!(errors[2]["field"], "email");
        assert_eq!(errors[2]["location"], "query");
    }

    #[tokio::test]
    async fn test_upstream_errors_are_kept() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut req = get_request("/transactions?amount=10&type=INCOME");
        req.extensions_mut().insert(ValidationReport::from(vec![FieldError::new(
            Location::Body,
            "description",
            "is required",
        )]));

        let resp = app(hits.clone()).oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        let body = body_json(resp).await;
        assert_eq!(body["errors"].as_array().unwrap().len(), 1);
        assert_eq!(body["errors"][0]["location"], "body");
    }

    #[tokio::test]
    async fn test_no_report_attached_passes_through() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let app = Router::new()
            .route(
                "/",
                get(move || {
                    let counter = counter.clone();
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        StatusCode::NO_CONTENT
                    }
                }),
            )
            .layer(from_fn(validate_request));

        let resp = app.oneshot(get_request("/")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_rules() {
        assert!(looks_like_email("demo@finexp.com"));
        assert!(!looks_like_email("demo@finexp"));
        assert!(!looks_like_email("@finexp.com"));
        assert!(!looks_like_email("a@b@c.com"));

        assert!(Rule::PositiveNumber.check("0").is_some());
        assert!(Rule::PositiveNumber.check("NaN").is_some());
        assert!(Rule::PositiveNumber.check("0.01").is_none());
        assert!(Rule::one_of(&["MONTHLY"]).check("WEEKLY").is_some());
    }

    #[test]
    fn test_optional_field_skipped_when_absent() {
        let rules = QueryRules::new().field("email", [Rule::Email]);
        assert!(rules.check(&HashMap::new()).is_empty());

        let mut params = HashMap::new();
        params.insert("email".to_string(), "   ".to_string());
        assert!(rules.check(&params).is_empty());
    }
}
