use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Served in place of a directory.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Maps a request path onto the document root.
///
/// The path is appended to the root textually, so `/a.html` under `/site`
/// becomes `/site/a.html` rather than replacing the root. A path naming a
/// directory resolves to the `index.html` inside it. Paths containing a `..`
/// segment resolve to `None`.
///
/// The returned path is not checked for existence beyond the directory test.
pub async fn resolve(doc_root: &Path, request_path: &str) -> Option<PathBuf> {
    if request_path.split(['/', '\\']).any(|segment| segment == "..") {
        return None;
    }

    let mut joined = OsString::from(doc_root.as_os_str());
    if !request_path.starts_with('/') {
        joined.push("/");
    }
    joined.push(request_path);
    let path = PathBuf::from(joined);

    let is_dir = tokio::fs::metadata(&path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);

    if is_dir {
        Some(path.join(DEFAULT_DOCUMENT))
    } else {
        Some(path)
    }
}
