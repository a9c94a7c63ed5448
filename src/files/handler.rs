use std::path::Path;

use chrono::Utc;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::files::resolve::resolve;
use crate::http::date::to_http_precision;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::http::writer::write_response;

/// Size of the chunks a GET body is copied in.
pub const TRANSFER_BUFFER_SIZE: usize = 1024;

/// Writes the response for `request` to `out` and flushes it.
///
/// Returns the status that was sent. An error means the stream failed part
/// way and should be dropped; nothing more can be sent to the client.
pub async fn respond<W>(request: &Request, doc_root: &Path, out: &mut W) -> anyhow::Result<StatusCode>
where
    W: AsyncWrite + Unpin,
{
    match (&request.method, request.path.as_deref()) {
        (Method::Head, Some(path)) => head(request, doc_root, path, out).await,
        (Method::Get, Some(path)) => get(doc_root, path, out).await,
        (Method::Unsupported(_), _) => send(Response::not_implemented(), out).await,
        // Malformed, or a GET/HEAD that somehow lost its path
        _ => send(Response::bad_request(), out).await,
    }
}

/// Headers only. The one place If-Modified-Since is honoured.
async fn head<W>(request: &Request, doc_root: &Path, path: &str, out: &mut W) -> anyhow::Result<StatusCode>
where
    W: AsyncWrite + Unpin,
{
    let Some((_, meta)) = open_regular_file(doc_root, path).await else {
        return send(Response::not_found(), out).await;
    };

    let now = Utc::now();
    let last_modified = to_http_precision(meta.modified()?);

    let response = match request.if_modified_since {
        Some(since) if last_modified <= since => Response::not_modified(now),
        _ => Response::file_headers(now, last_modified, meta.len()),
    };
    send(response, out).await
}

/// Streams the raw file bytes with no status line or headers in front of them.
/// If-Modified-Since is not consulted.
async fn get<W>(doc_root: &Path, path: &str, out: &mut W) -> anyhow::Result<StatusCode>
where
    W: AsyncWrite + Unpin,
{
    let Some((mut file, _)) = open_regular_file(doc_root, path).await else {
        return send(Response::not_found(), out).await;
    };

    let mut buf = [0u8; TRANSFER_BUFFER_SIZE];
    loop {
        let n = file.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        out.write_all(&buf[..n]).await?;
    }
    out.flush().await?;

    Ok(StatusCode::Ok)
}

async fn open_regular_file(doc_root: &Path, path: &str) -> Option<(File, std::fs::Metadata)> {
    let resolved = resolve(doc_root, path).await?;
    let file = File::open(&resolved).await.ok()?;
    let meta = file.metadata().await.ok()?;
    meta.is_file().then_some((file, meta))
}

async fn send<W>(response: Response, out: &mut W) -> anyhow::Result<StatusCode>
where
    W: AsyncWrite + Unpin,
{
    write_response(&response, out).await?;
    Ok(response.status)
}
