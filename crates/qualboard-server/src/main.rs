use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Serves the built wasm bundle and reverse-proxies the backend API and the
/// auth provider under one origin, so the front end never deals with CORS.
#[derive(Clone)]
struct AppState {
    client: reqwest::Client,
    api_base: String,
    auth_base: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let api_base =
        std::env::var("API_BASE").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    let auth_base = std::env::var("AUTH_BASE")
        .unwrap_or_else(|_| "http://127.0.0.1:3000/api/auth".to_string());
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "./dist".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3005".to_string());

    let state = AppState {
        client: reqwest::Client::new(),
        api_base,
        auth_base,
    };

    let app = Router::new()
        .route("/api/{*path}", any(proxy_api))
        .route("/auth/{*path}", any(proxy_auth))
        .fallback_service(ServeDir::new(&static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Server listening on {}", addr);
    tracing::info!("Serving static files from {}", static_dir);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn proxy_api(State(state): State<AppState>, req: Request) -> Response {
    forward(&state.client, &state.api_base, "/api", req).await
}

async fn proxy_auth(State(state): State<AppState>, req: Request) -> Response {
    forward(&state.client, &state.auth_base, "/auth", req).await
}

// Headers that matter to the two upstreams; everything else is dropped.
const FORWARDED_HEADERS: &[&str] = &["authorization", "content-type", "cookie"];

async fn forward(client: &reqwest::Client, base: &str, prefix: &str, req: Request) -> Response {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("");
    let rest = path_and_query.strip_prefix(prefix).unwrap_or(path_and_query);
    let url = format!("{}{}", base, rest);

    let method = match reqwest::Method::from_bytes(req.method().as_str().as_bytes()) {
        Ok(m) => m,
        Err(_) => return (StatusCode::METHOD_NOT_ALLOWED, "unsupported method").into_response(),
    };
    let headers = req.headers().clone();
    let body = match axum::body::to_bytes(req.into_body(), 1024 * 1024).await {
        Ok(bytes) => bytes,
        Err(_) => return (StatusCode::BAD_REQUEST, "invalid request body").into_response(),
    };

    let mut upstream = client.request(method, &url);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(*name).and_then(|v| v.to_str().ok()) {
            upstream = upstream.header(*name, value);
        }
    }
    if !body.is_empty() {
        upstream = upstream.body(body.to_vec());
    }

    let resp = match upstream.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("upstream request to {} failed: {}", url, e);
            return (StatusCode::BAD_GATEWAY, "upstream unavailable").into_response();
        }
    };

    let status =
        StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    // Session cookies from the auth provider must survive the hop.
    let set_cookies: Vec<String> = resp
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_owned))
        .collect();

    let bytes = match resp.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("reading upstream response from {} failed: {}", url, e);
            return (StatusCode::BAD_GATEWAY, "upstream read failed").into_response();
        }
    };

    let mut builder = Response::builder().status(status);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    for cookie in set_cookies {
        builder = builder.header("set-cookie", cookie);
    }
    builder
        .body(Body::from(bytes))
        .unwrap_or_else(|_| StatusCode::BAD_GATEWAY.into_response())
}
