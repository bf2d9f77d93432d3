//! Static file serving module
//!
//! Maps a resolved request target to a file under the document root and
//! builds the response for it.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, path};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Serve a target relative to the document root
///
/// Directories are served through their index file when requested with a
/// trailing slash, listed when they have none, and redirected to the
/// slashed form otherwise.
pub async fn serve(
    ctx: &RequestContext,
    root: &Path,
    mount_prefix: &str,
    index_file: &str,
    target: &str,
) -> Response<Full<Bytes>> {
    let (path_only, query) = path::split_target(target);
    let mut file_path = path::join_under(root, target);

    let mut metadata = match fs::metadata(&file_path).await {
        Ok(m) => m,
        Err(e) => return io_error_response(ctx, &file_path, &e),
    };

    if metadata.is_dir() {
        if !path_only.ends_with('/') {
            let location = match query {
                Some(q) => format!("{}{path_only}/?{q}", mount_prefix.trim_end_matches('/')),
                None => format!("{}{path_only}/", mount_prefix.trim_end_matches('/')),
            };
            return http::build_moved_permanently_response(&location);
        }
        let index_path = file_path.join(index_file);
        metadata = match fs::metadata(&index_path).await {
            Ok(m) if m.is_file() => m,
            Ok(_) => return list_directory(ctx, &file_path, path_only).await,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return list_directory(ctx, &file_path, path_only).await;
            }
            Err(e) => return io_error_response(ctx, &index_path, &e),
        };
        file_path = index_path;
    }

    let modified = metadata.modified().map_or(0, cache::unix_secs);
    let last_modified = cache::http_date(modified);
    if cache::not_modified_since(ctx.if_modified_since.as_deref(), modified) {
        return http::build_304_response(&last_modified);
    }

    match fs::read(&file_path).await {
        Ok(content) => http::build_file_response(
            Bytes::from(content),
            mime::content_type_for(&file_path),
            &last_modified,
            ctx.is_head,
        ),
        Err(e) => io_error_response(ctx, &file_path, &e),
    }
}

/// HTML listing of a directory without an index file
///
/// Entries are sorted case-insensitively; subdirectories get a trailing `/`.
/// An unreadable directory is answered 404.
async fn list_directory(
    ctx: &RequestContext,
    dir: &Path,
    url_path: &str,
) -> Response<Full<Bytes>> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) => {
            logger::log_warning(&format!("Failed to list directory '{}': {e}", dir.display()));
            return http::build_404_response(ctx.is_head);
        }
    };

    let mut names = Vec::new();
    while let Ok(Some(entry)) = entries.next_entry().await {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await.is_ok_and(|t| t.is_dir()) {
            name.push('/');
        }
        names.push(name);
    }
    names.sort_by_key(|name| name.to_lowercase());

    let html = render_listing(&path::percent_decode(url_path), &names);
    http::response::build_html_response(html, ctx.is_head)
}

fn render_listing(display_path: &str, names: &[String]) -> String {
    let title = html_escape::encode_text(display_path);
    let mut html = format!(
        "<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Directory listing for {title}</title>\n</head>\n<body>\n\
         <h1>Directory listing for {title}</h1>\n<hr>\n<ul>\n"
    );
    for name in names {
        let href = match name.strip_suffix('/') {
            Some(dir) => format!("{}/", urlencoding::encode(dir)),
            None => urlencoding::encode(name).into_owned(),
        };
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            html_escape::encode_double_quoted_attribute(&href),
            html_escape::encode_text(name)
        ));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

/// Missing files are a plain 404, anything else is logged and answered 500
fn io_error_response(
    ctx: &RequestContext,
    file_path: &Path,
    err: &std::io::Error,
) -> Response<Full<Bytes>> {
    if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) {
        return http::build_404_response(ctx.is_head);
    }
    logger::log_error(&format!(
        "Failed to read file '{}': {err}",
        file_path.display()
    ));
    http::build_500_response(ctx.is_head)
}
