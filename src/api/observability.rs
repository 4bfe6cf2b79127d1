//! Request logging and catalog metrics.
//!
//! Every routed request runs inside a `request` span. Bulk replaces record
//! their outcome on that span (see `services::associations`), so the
//! "request finished" event carries how many links were changed.

use crate::api::AppState;
use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, field, info, info_span};
use uuid::Uuid;

/// Prometheus text exposition of the process metrics.
#[utoipa::path(
    get,
    path = "/api/metrics",
    tag = "system",
    responses(
        (status = 200, description = "Prometheus metrics", body = String, content_type = "text/plain")
    )
)]
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus_handle.as_ref().map_or_else(
        || "Metrics not enabled or failed to initialize".to_string(),
        metrics_exporter_prometheus::PrometheusHandle::render,
    )
}

/// Catalog labels derived from a matched route template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteLabels<'a> {
    /// First path segment below `/api`: `characters`, `movies`, `system`...
    pub resource: &'a str,
    /// Relationship segment after `{id}`, e.g. `movies` for
    /// `/franchises/{id}/movies`. `none` for plain entity routes.
    pub relation: &'a str,
}

const UNMATCHED: RouteLabels<'static> = RouteLabels {
    resource: "unmatched",
    relation: "none",
};

impl<'a> RouteLabels<'a> {
    #[must_use]
    pub fn from_route(route: &'a str) -> Self {
        let route = route.strip_prefix("/api").unwrap_or(route);
        let mut segments = route.split('/').filter(|s| !s.is_empty());

        let Some(resource) = segments.next() else {
            return Self {
                resource: "root",
                relation: "none",
            };
        };

        let relation = match (segments.next(), segments.next()) {
            (Some("{id}"), Some(relation)) => relation,
            _ => "none",
        };

        Self { resource, relation }
    }
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let method = req.method().to_string();
    let uri = req.uri().path().to_string();

    // Templates keep label cardinality bounded; raw paths never become labels
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string());
    let labels = route
        .as_deref()
        .map_or(UNMATCHED, RouteLabels::from_route);
    let resource = labels.resource.to_string();
    let relation = labels.relation.to_string();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %uri,
        route = route.as_deref().unwrap_or("unmatched"),
        resource = %resource,
        relation = %relation,
        replace.linked = field::Empty,
        replace.detached = field::Empty,
        replace.ignored = field::Empty,
    );

    async move {
        let response = next.run(req).await;

        let elapsed = start.elapsed();
        let status = response.status().as_u16();

        let metric_labels = [
            ("method", method),
            ("resource", resource),
            ("relation", relation),
            ("status", status.to_string()),
        ];

        metrics::counter!("http_requests_total", &metric_labels).increment(1);
        metrics::histogram!("http_request_duration_seconds", &metric_labels)
            .record(elapsed.as_secs_f64());

        info!(
            event = "http_request_finished",
            duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            status_code = status,
            "Request finished"
        );

        response
    }
    .instrument(span)
    .await
}
