use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.listen_addr()).await?;
    info!("Server started, visit localhost:{}", cfg.port);

    serve(listener, Arc::from(cfg.doc_root.as_path())).await
}

/// Accepts connections forever, handling each on its own task.
///
/// A failed accept or a failed connection is logged and the loop keeps going.
pub async fn serve(listener: TcpListener, doc_root: Arc<Path>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to accept connection");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let doc_root = Arc::clone(&doc_root);
        tokio::spawn(async move {
            let conn = Connection::new(socket, doc_root);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
