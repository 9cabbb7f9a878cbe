//! `tiny_http` server adapter
//!
//! Handles routing, body parsing, and response conversion for `tiny_http`.
//! Routing itself works on plain strings so it can be exercised without a
//! socket; see [`route`].

use std::io::Cursor;
use std::sync::Arc;
use std::thread;

use log::{debug, error, info};
use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::api::{
    self, ApiError, ApiResponse, AttemptRequest, CreateQuizRequest, LoginRequest,
    RegisterCadetRequest, RegisterInstitutionRequest,
};
use crate::registry::Registry;

/// A rendered response: status code and JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// JSON body
    pub body: String,
}

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Serve the API on `addr` until the listener fails
///
/// `workers` threads share one listener and one registry.
pub fn serve(registry: Arc<Registry>, addr: &str, workers: usize) -> anyhow::Result<()> {
    let server =
        Arc::new(Server::http(addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?);
    info!("Listening on http://{addr} with {} worker(s)", workers.max(1));

    let handles = (0..workers.max(1))
        .map(|i| {
            let server = Arc::clone(&server);
            let registry = Arc::clone(&registry);
            thread::Builder::new()
                .name(format!("ncc-quiz-worker-{i}"))
                .spawn(move || worker_loop(&server, &registry))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for handle in handles {
        handle.join().map_err(|_| anyhow::anyhow!("worker thread panicked"))?;
    }
    Ok(())
}

fn worker_loop(server: &Server, registry: &Registry) {
    loop {
        match server.recv() {
            Ok(mut request) => {
                let response = handle_api_request(registry, &mut request);
                if let Err(e) = request.respond(response) {
                    debug!("Failed to send response: {e}");
                }
            },
            Err(e) => {
                error!("Listener failed: {e}");
                break;
            },
        }
    }
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle one `tiny_http` request against the registry
pub fn handle_api_request(registry: &Registry, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let method = request.method().clone();
    let url = request.url().to_string();

    let mut body = String::new();
    let reply = match request.as_reader().read_to_string(&mut body) {
        Ok(_) => route(registry, &method, &url, &body),
        Err(e) => error_reply(&ApiError::bad_request(format!("Failed to read request body: {e}"))),
    };

    debug!("{method} {url} -> {}", reply.status);
    into_response(reply)
}

/// Map a method, URL and body to a handler and render its result
///
/// Accepts both `/api/v1/...` and `/api/...`. Query strings are ignored and
/// path segments are percent-decoded.
pub fn route(registry: &Registry, method: &Method, url: &str, body: &str) -> Reply {
    let path = url.split('?').next().unwrap_or_default();
    let api_path = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"))
        .unwrap_or(path);

    let segments = match decode_segments(api_path) {
        Ok(segments) => segments,
        Err(e) => return error_reply(&e),
    };
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

    match (method, segments.as_slice()) {
        // Institutions
        (Method::Post, ["institutions", "login"]) => {
            with_body(body, |req: LoginRequest| api::institution_login(registry, &req))
        },
        (Method::Post, ["institutions"]) => with_body(body, |req: RegisterInstitutionRequest| {
            api::register_institution(registry, &req)
        }),
        (Method::Get, ["institutions"]) => result_reply(api::list_institutions(registry)),
        (Method::Get, ["institutions", phone]) => {
            result_reply(api::institution_dashboard(registry, phone))
        },
        (Method::Post, ["institutions", phone, "quizzes"]) => {
            with_body(body, |req: CreateQuizRequest| api::create_quiz(registry, phone, &req))
        },

        // Cadets
        (Method::Post, ["cadets", "login"]) => {
            with_body(body, |req: LoginRequest| api::cadet_login(registry, &req))
        },
        (Method::Post, ["cadets"]) => {
            with_body(body, |req: RegisterCadetRequest| api::register_cadet(registry, &req))
        },
        (Method::Get, ["cadets", phone]) => result_reply(api::cadet_dashboard(registry, phone)),
        (Method::Get, ["cadets", phone, "quizzes"]) => {
            result_reply(api::list_open_quizzes(registry, phone))
        },
        (Method::Post, ["cadets", phone, "attempts"]) => {
            with_body(body, |req: AttemptRequest| api::submit_attempt(registry, phone, &req))
        },

        // Quizzes and reporting
        (Method::Get, ["quizzes", name]) => result_reply(api::get_quiz(registry, name)),
        (Method::Get, ["leaderboard"]) => result_reply(api::get_leaderboard(registry)),
        (Method::Get, ["stats"]) => result_reply(api::get_stats(registry)),

        // 404 for unknown API routes
        _ => error_reply(&ApiError::not_found(format!(
            "API endpoint not found: {method} {api_path}"
        ))),
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

fn decode_segments(path: &str) -> Result<Vec<String>, ApiError> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            urlencoding::decode(s)
                .map(|decoded| decoded.into_owned())
                .map_err(|e| ApiError::bad_request(format!("Invalid path encoding: {e}")))
        })
        .collect()
}

/// Parse a JSON body and pass it to a handler
fn with_body<B, T, F>(body: &str, handler: F) -> Reply
where
    B: DeserializeOwned,
    T: Serialize,
    F: FnOnce(B) -> Result<T, ApiError>,
{
    match serde_json::from_str::<B>(body) {
        Ok(req) => result_reply(handler(req)),
        Err(e) => error_reply(&ApiError::bad_request(format!("Invalid JSON: {e}"))),
    }
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to a reply
fn result_reply<T: Serialize>(result: Result<T, ApiError>) -> Reply {
    match result {
        Ok(data) => json_reply(&ApiResponse::success(data), 200),
        Err(e) => error_reply(&e),
    }
}

/// Create an error reply with the appropriate status code
fn error_reply(error: &ApiError) -> Reply {
    let response = ApiResponse::<()>::error(error);
    json_reply(&response, error.status_code())
}

fn json_reply<T: Serialize>(data: &T, status: u16) -> Reply {
    let body = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    Reply { status, body }
}

fn into_response(reply: Reply) -> Response<Cursor<Vec<u8>>> {
    let response =
        Response::from_data(reply.body.into_bytes()).with_status_code(StatusCode(reply.status));
    match Header::from_bytes("Content-Type", "application/json") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
