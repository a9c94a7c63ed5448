use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};
use tokio::net::TcpStream;

use crate::files::handler::respond;
use crate::http::parser::parse_request;
use crate::http::request::Request;

/// Upper bound on the bytes read before the blank line, terminators included.
pub const MAX_HEADER_BYTES: usize = 8192;

/// The header block ran past [`MAX_HEADER_BYTES`] without a blank line.
#[derive(Debug)]
pub struct HeaderTooLarge;

impl fmt::Display for HeaderTooLarge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request headers exceed {} bytes", MAX_HEADER_BYTES)
    }
}

impl std::error::Error for HeaderTooLarge {}

/// One request, one response, then the stream is closed.
///
/// `Connection` flags on the request are recorded but never keep the
/// stream open.
pub struct Connection<S = TcpStream> {
    stream: BufReader<S>,
    doc_root: Arc<Path>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Responding(Request),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, doc_root: Arc<Path>) -> Self {
        Self {
            stream: BufReader::new(stream),
            doc_root,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    let req = match read_header_lines(&mut self.stream).await {
                        Ok(lines) => parse_request(&lines),
                        Err(e) if e.is::<HeaderTooLarge>() => {
                            tracing::warn!(error = %e, "Rejecting oversized request");
                            Request::malformed()
                        }
                        Err(e) => return Err(e),
                    };
                    self.state = ConnectionState::Responding(req);
                }

                ConnectionState::Responding(req) => {
                    let status = respond(&req, &self.doc_root, &mut self.stream).await?;
                    tracing::info!(
                        method = ?req.method,
                        path = req.path.as_deref().unwrap_or("-"),
                        status = status.as_u16(),
                        keep_alive = req.wants_persistent,
                        "Request served"
                    );
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => break,
            }
        }

        self.stream.shutdown().await?;
        Ok(())
    }
}

/// Reads lines up to the first blank line or end of stream.
///
/// Accepts both `\r\n` and bare `\n` terminators; terminators are stripped.
/// Bytes that are not UTF-8 are replaced rather than rejected, so the parser
/// always gets to decide. Fails with [`HeaderTooLarge`] once more than
/// [`MAX_HEADER_BYTES`] have been read without reaching the blank line.
pub async fn read_header_lines<R>(reader: &mut R) -> anyhow::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = Vec::new();
    let mut consumed = 0;

    loop {
        let remaining = MAX_HEADER_BYTES - consumed;
        if remaining == 0 {
            return Err(HeaderTooLarge.into());
        }

        let mut raw = Vec::new();
        let n = (&mut *reader)
            .take(remaining as u64)
            .read_until(b'\n', &mut raw)
            .await?;
        if n == 0 {
            // Client closed before the blank line
            break;
        }
        consumed += n;

        if !raw.ends_with(b"\n") && consumed == MAX_HEADER_BYTES {
            return Err(HeaderTooLarge.into());
        }

        let decoded = String::from_utf8_lossy(&raw);
        let line = decoded.trim_end_matches(|c: char| c == '\r' || c == '\n');
        if line.is_empty() {
            break;
        }
        lines.push(line.to_string());
    }

    Ok(lines)
}
