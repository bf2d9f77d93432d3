//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method
//! validation, path resolution and dispatching.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::{self, Route};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::IF_MODIFIED_SINCE;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Raw request target, path plus query
    pub target: String,
    pub is_head: bool,
    pub if_modified_since: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: Option<SocketAddr>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, _) = req.into_parts();
    let method = parts.method;
    let ctx = RequestContext {
        target: parts
            .uri
            .path_and_query()
            .map_or_else(|| parts.uri.path().to_string(), |pq| pq.as_str().to_string()),
        is_head: method == Method::HEAD,
        if_modified_since: parts
            .headers
            .get(IF_MODIFIED_SINCE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
    };

    let response = match method {
        Method::GET | Method::HEAD => route_request(&ctx, &state).await,
        Method::OPTIONS => http::build_options_response(),
        _ => {
            logger::log_warning(&format!("Unsupported method: {method}"));
            http::build_501_response()
        }
    };

    if state.access_log() {
        let mut entry = AccessLogEntry::new(
            peer_addr.map_or_else(|| "-".to_string(), |a| a.ip().to_string()),
            method.to_string(),
            ctx.target.clone(),
        );
        entry.http_version = format!("{:?}", parts.version);
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        logger::log_access(&entry);
    }

    Ok(response)
}

/// Resolve the target and dispatch to the matching response
async fn route_request(ctx: &RequestContext, state: &AppState) -> Response<Full<Bytes>> {
    let site = state.site();
    let route = routing::resolve(&ctx.target, site, &state.probe);
    match route {
        Route::Redirect { location } => http::build_redirect_response(&location),
        Route::NotFound => http::build_404_response(ctx.is_head),
        Route::Serve { .. } | Route::ServeWithVersion { .. } => {
            // Versioned targets keep their `?v=` query, the file lookup ignores it
            let target = route.request_target().unwrap_or_default();
            static_files::serve(
                ctx,
                state.document_root(),
                &site.mount_prefix,
                &site.index_file,
                &target,
            )
            .await
        }
    }
}
