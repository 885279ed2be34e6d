//! Network server command handler
//!
//! Serves the line protocol over TCP to one client at a time. The registry
//! lives for the whole server run, so state accumulated by one client is
//! visible to the next.

use logger::{debug, info, warn};
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use uni_registry::config::Config;
use uni_registry::protocol;
use uni_registry::Registry;

/// Bind to the configured address and serve clients sequentially
///
/// Runs until the process is interrupted.
///
/// # Errors
/// Returns an error if the listener cannot bind to the configured address
pub fn run(config: &Config) -> std::io::Result<()> {
    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&address)?;
    info!("Server listening on {address}");
    println!("Server listening on {address}. Press Ctrl+C to stop.");

    let mut registry = Registry::new();

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let peer = stream
                    .peer_addr()
                    .map_or_else(|_| "unknown".to_string(), |addr| addr.to_string());
                info!("Client connected: {peer}");
                if let Err(e) = serve_client(&mut registry, stream) {
                    warn!("Client {peer} dropped: {e}");
                }
                info!("Client disconnected: {peer}");
            }
            Err(e) => warn!("Failed to accept connection: {e}"),
        }
    }

    Ok(())
}

/// Serve one client until it quits or the connection drops
fn serve_client(registry: &mut Registry, stream: TcpStream) -> std::io::Result<()> {
    let mut writer = stream.try_clone()?;
    let reader = BufReader::new(stream);

    for line in reader.lines() {
        let line = line?;
        debug!("Request: {line}");
        let reply = protocol::handle_line(registry, &line);
        debug!("Reply: {}", reply.line);
        writer.write_all(reply.line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        if reply.disconnect {
            break;
        }
    }

    Ok(())
}
