use std::io::Cursor;

use log::{error, warn};
use serde::Deserialize;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::grid::render_png;
use crate::render::render_page;
use crate::state::PlaygroundState;

type HttpResponse = Response<Cursor<Vec<u8>>>;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn bytes_response(status: u16, content_type: &str, bytes: Vec<u8>) -> HttpResponse {
    let len = bytes.len();
    Response::new(
        StatusCode(status),
        vec![
            Header::from_bytes(b"Content-Type", content_type.as_bytes()).unwrap(),
            Header::from_bytes(b"Cache-Control", b"no-store").unwrap(),
        ],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn html_response(body: String) -> HttpResponse {
    bytes_response(200, "text/html; charset=utf-8", body.into_bytes())
}

pub fn png_response(bytes: Vec<u8>) -> HttpResponse {
    bytes_response(200, "image/png", bytes)
}

pub fn json_response(body: String) -> HttpResponse {
    bytes_response(200, "application/json", body.into_bytes())
}

pub fn no_content() -> HttpResponse {
    bytes_response(204, "text/plain", Vec::new())
}

pub fn bad_request(reason: &str) -> HttpResponse {
    warn!("rejected request: {reason}");
    bytes_response(400, "text/plain; charset=utf-8", reason.as_bytes().to_vec())
}

pub fn server_error(reason: &str) -> HttpResponse {
    error!("{reason}");
    bytes_response(500, "text/plain; charset=utf-8", reason.as_bytes().to_vec())
}

pub fn not_found() -> HttpResponse {
    bytes_response(404, "text/plain", b"404 Not Found".to_vec())
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body of `POST /points`: a point in plane coordinates and its class.
#[derive(Debug, Deserialize)]
struct PointRequest {
    x: f64,
    y: f64,
    class: usize,
}

fn read_body(request: &mut Request) -> std::io::Result<String> {
    let mut body = String::new();
    request.as_reader().read_to_string(&mut body)?;
    Ok(body)
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Handles one request to completion. Requests are served one at a time,
/// so a training slice never overlaps with rendering or a command.
pub fn dispatch(mut request: Request, state: &mut PlaygroundState) {
    let method = request.method().clone();
    let url = request.url().to_owned();
    let path = url.split('?').next().unwrap_or("").to_owned();

    let response = match (method, path.as_str()) {
        (Method::Get, "/") => html_response(render_page(state)),

        (Method::Get, "/grid.png") => match render_png(state) {
            Ok(bytes) => png_response(bytes),
            Err(e) => server_error(&format!("grid rendering failed: {e}")),
        },

        (Method::Post, "/frame") => match state.frame() {
            Ok(report) => match serde_json::to_string(&report) {
                Ok(json) => json_response(json),
                Err(e) => server_error(&e.to_string()),
            },
            Err(e) => server_error(&format!("training slice failed: {e}")),
        },

        (Method::Post, "/points") => handle_add_point(&mut request, state),

        (Method::Post, "/undo") => {
            state.undo();
            no_content()
        }

        (Method::Post, "/reset") => match state.reset() {
            Ok(()) => no_content(),
            Err(e) => server_error(&e.to_string()),
        },

        (Method::Post, "/mode") => {
            state.toggle_mode();
            no_content()
        }

        _ => not_found(),
    };

    if let Err(e) = request.respond(response) {
        warn!("failed to send response for {url}: {e}");
    }
}

fn handle_add_point(request: &mut Request, state: &mut PlaygroundState) -> HttpResponse {
    let body = match read_body(request) {
        Ok(body) => body,
        Err(e) => return bad_request(&format!("unreadable body: {e}")),
    };
    let point: PointRequest = match serde_json::from_str(&body) {
        Ok(point) => point,
        Err(e) => return bad_request(&format!("malformed point: {e}")),
    };
    match state.add_point(point.x, point.y, point.class) {
        Ok(()) => no_content(),
        Err(e) => bad_request(&e.to_string()),
    }
}
