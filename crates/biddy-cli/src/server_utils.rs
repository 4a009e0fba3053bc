use axum::{body::Body, extract::Request, http::Uri, middleware::Next, response::Response};
use biddy::logging::{FormatElapsedTimeOptions, format_elapsed_time};
use colored::Colorize;
use local_ip_address::local_ip;
use std::{
    io,
    net::{IpAddr, SocketAddr},
    time::{Duration, Instant},
};
use tokio::net::TcpSocket;
use tower_http::trace::OnResponse;
use tracing::{Span, debug, info};

pub fn log_server_start(start_time: Instant, host: bool, addr: SocketAddr) {
    info!(name: "SKIP_FORMAT", "");
    let elapsed_time = format_elapsed_time(start_time.elapsed(), &FormatElapsedTimeOptions::default());
    info!(name: "SKIP_FORMAT", "{} {}", "Biddy 🎻".bold().bright_green(), format!("preview server started in {}", elapsed_time));
    info!(name: "SKIP_FORMAT", "");

    let port = addr.port();
    let url = format!("\x1b]8;;http://localhost:{port}\x1b\\http://localhost:{port}\x1b]8;;\x1b\\")
        .bold()
        .underline()
        .bright_blue();
    let network_url = if host {
        match local_ip() {
            Ok(local_ip) => format!(
                "\x1b]8;;http://{local_ip}:{port}\x1b\\http://{local_ip}:{port}\x1b]8;;\x1b\\"
            )
            .bold()
            .underline()
            .bright_magenta(),
            Err(_) => "Could not determine the local network address".yellow(),
        }
    } else {
        "Use --host to expose the server to your network".dimmed()
    };
    info!(name: "SKIP_FORMAT", "  {}    {}", "Local".bold(), url);
    info!(name: "SKIP_FORMAT", "  {}  {}", "Network".bold(), network_url);
    info!(name: "SKIP_FORMAT", "");

    info!(name: "server", "{}", "waiting for requests...".dimmed());
}

/// Copies the request URI into the response so [`CustomOnResponse`] can log it.
pub async fn record_uri(request: Request, next: Next) -> Response {
    let uri = request.uri().clone();
    let mut response = next.run(request).await;
    response.extensions_mut().insert(uri);
    response
}

#[derive(Clone, Debug)]
pub struct CustomOnResponse;

impl OnResponse<Body> for CustomOnResponse {
    fn on_response(self, response: &Response<Body>, latency: Duration, _span: &Span) {
        let status = response.status();

        if status.is_informational() {
            return;
        }

        let status = if status.is_server_error() {
            status.to_string().red()
        } else if status.is_client_error() {
            status.to_string().yellow()
        } else {
            status.to_string().green()
        };

        let uri = response
            .extensions()
            .get::<Uri>()
            .map(ToString::to_string)
            .unwrap_or_default()
            .bold();

        let latency = format_elapsed_time(latency, &FormatElapsedTimeOptions::default());

        info!(name: "", "{} {} {}", status, uri, latency);
    }
}

/// First port from `starting_port` upwards that can be bound on `address`.
pub fn find_open_port(address: &IpAddr, starting_port: u16) -> io::Result<u16> {
    for port in starting_port..=u16::MAX {
        let socket = TcpSocket::new_v4()?;
        match socket.bind(SocketAddr::new(*address, port)) {
            Ok(_) => {
                debug!("Found open port: {}", port);
                return Ok(port);
            }
            Err(_) => {
                debug!(
                    "Port {} is already in use or failed to bind, trying next one",
                    port
                );
            }
        }
    }

    Err(io::Error::new(
        io::ErrorKind::AddrInUse,
        format!("No open port from {} upwards", starting_port),
    ))
}
