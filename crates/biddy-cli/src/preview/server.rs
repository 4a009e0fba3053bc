use std::{
    io,
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    sync::Arc,
    time::Instant,
};

use axum::{
    Router,
    extract::State,
    handler::HandlerWithoutStateExt,
    http::{StatusCode, header},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use biddy::{
    bootstrap::mount, build::SHELL_FILE, content::ContentStore, errors::BiddyError,
    page::render_app, view::ViewState,
};
use tokio::{fs, net::TcpSocket};
use tracing::{Level, debug, error};

use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::server_utils::{CustomOnResponse, find_open_port, log_server_start, record_uri};

pub const PORT: u16 = 4173;

pub struct PreviewOptions {
    pub dist_dir: PathBuf,
    pub content_dir: PathBuf,
    pub port: u16,
    /// Listen on every interface instead of localhost only.
    pub host: bool,
}

struct PreviewState {
    dist_dir: PathBuf,
    content_dir: PathBuf,
}

async fn handle_404(dist_dir: PathBuf) -> Response {
    let content = fs::read_to_string(dist_dir.join("404.html"))
        .await
        .unwrap_or_else(|_| "Not found".to_string());

    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        content,
    )
        .into_response()
}

/// The page shell, with the application mounted into it when it wasn't prerendered.
async fn render_index(state: &PreviewState) -> Result<String, BiddyError> {
    let shell = fs::read_to_string(state.dist_dir.join(SHELL_FILE)).await?;

    let (mode, html) = mount(&shell, || {
        let content = ContentStore::load(&state.content_dir)?;
        Ok::<_, BiddyError>(render_app(&content, ViewState::default()))
    })?;
    debug!(name: "preview", "index mounted in {:?} mode", mode);

    Ok(html)
}

async fn index(State(state): State<Arc<PreviewState>>) -> Response {
    match render_index(&state).await {
        Ok(html) => Html(html).into_response(),
        Err(BiddyError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            handle_404(state.dist_dir.clone()).await
        }
        Err(err) => {
            error!(name: "preview", "{}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

fn router(dist_dir: PathBuf, content_dir: PathBuf) -> Router {
    let not_found_dir = dist_dir.clone();
    let service = (move || handle_404(not_found_dir.clone())).into_service();
    let serve_dir = ServeDir::new(&dist_dir).not_found_service(service);

    let state = Arc::new(PreviewState {
        dist_dir,
        content_dir,
    });

    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .fallback_service(serve_dir)
        .with_state(state)
        .layer(middleware::from_fn(record_uri))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(CustomOnResponse),
        )
}

pub async fn start_preview_web_server(options: PreviewOptions) -> io::Result<()> {
    let start_time = Instant::now();

    let addr = if options.host {
        IpAddr::from([0, 0, 0, 0])
    } else {
        IpAddr::from([127, 0, 0, 1])
    };

    let port = find_open_port(&addr, options.port)?;
    let socket = TcpSocket::new_v4()?;
    let _ = socket.set_reuseaddr(true);

    socket.bind(SocketAddr::new(addr, port))?;
    let listener = socket.listen(1024)?;
    let local_addr = listener.local_addr()?;

    debug!("listening on {}", local_addr);

    let router = router(options.dist_dir, options.content_dir);

    log_server_start(start_time, options.host, local_addr);

    axum::serve(listener, router.into_make_service()).await
}
