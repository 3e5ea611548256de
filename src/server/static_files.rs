// SPDX-License-Identifier: MIT
// server/static_files.rs — directory-aware static file handler.
//
// Serves the embedded bundle with conventional static-file semantics:
// content types from the registry, ETag / Last-Modified conditionals,
// single byte ranges, directory index documents, HEAD.

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, TimeZone, Utc};

use crate::{assets, mime};

pub async fn serve(method: Method, uri: Uri, headers: HeaderMap) -> Response {
    let Some((key, file)) = assets::lookup(uri.path()) else {
        return (StatusCode::NOT_FOUND, "404 page not found").into_response();
    };

    let etag = format!("\"{}\"", hex::encode(file.metadata.sha256_hash()));
    let last_modified = file
        .metadata
        .last_modified()
        .and_then(|secs| Utc.timestamp_opt(secs as i64, 0).single());

    if not_modified(&headers, &etag, last_modified) {
        let mut response = StatusCode::NOT_MODIFIED.into_response();
        set_header(&mut response, header::ETAG, &etag);
        return response;
    }

    let data = file.data;
    let total = data.len() as u64;

    let mut response = match byte_range(&headers, &method, total) {
        ByteRange::Full if method == Method::HEAD => {
            let mut response = StatusCode::OK.into_response();
            set_header(&mut response, header::CONTENT_LENGTH, &total.to_string());
            response
        }
        ByteRange::Full => Body::from(data.into_owned()).into_response(),
        ByteRange::Partial(start, end) => {
            let slice = data[start as usize..=end as usize].to_vec();
            let mut response = (StatusCode::PARTIAL_CONTENT, Body::from(slice)).into_response();
            set_header(
                &mut response,
                header::CONTENT_RANGE,
                &format!("bytes {start}-{end}/{total}"),
            );
            response
        }
        ByteRange::Unsatisfiable => {
            let mut response = StatusCode::RANGE_NOT_SATISFIABLE.into_response();
            set_header(
                &mut response,
                header::CONTENT_RANGE,
                &format!("bytes */{total}"),
            );
            return response;
        }
    };

    set_header(&mut response, header::CONTENT_TYPE, mime::content_type(&key));
    set_header(&mut response, header::ACCEPT_RANGES, "bytes");
    set_header(&mut response, header::ETAG, &etag);
    if let Some(modified) = last_modified {
        set_header(&mut response, header::LAST_MODIFIED, &http_date(modified));
    }
    response
}

/// `If-None-Match` wins over `If-Modified-Since` when both are present.
fn not_modified(headers: &HeaderMap, etag: &str, last_modified: Option<DateTime<Utc>>) -> bool {
    if let Some(if_none_match) = header_str(headers, header::IF_NONE_MATCH) {
        return if_none_match == "*"
            || if_none_match
                .split(',')
                .any(|tag| tag.trim().trim_start_matches("W/") == etag);
    }
    let (Some(if_modified_since), Some(modified)) =
        (header_str(headers, header::IF_MODIFIED_SINCE), last_modified)
    else {
        return false;
    };
    match DateTime::parse_from_rfc2822(if_modified_since) {
        Ok(since) => modified.timestamp() <= since.timestamp(),
        Err(_) => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteRange {
    Full,
    Partial(u64, u64),
    Unsatisfiable,
}

fn byte_range(headers: &HeaderMap, method: &Method, total: u64) -> ByteRange {
    if *method != Method::GET {
        return ByteRange::Full;
    }
    match header_str(headers, header::RANGE) {
        Some(spec) => parse_range(spec, total),
        None => ByteRange::Full,
    }
}

// Single-range `bytes=` specs only; anything unparseable (or a multi-range
// request) is answered with the full representation instead.
fn parse_range(spec: &str, total: u64) -> ByteRange {
    let Some(ranges) = spec.strip_prefix("bytes=") else {
        return ByteRange::Full;
    };
    if ranges.contains(',') {
        return ByteRange::Full;
    }
    let range = ranges.trim();
    if let Some(suffix) = range.strip_prefix('-') {
        // bytes=-n: the final n bytes
        let Ok(n) = suffix.parse::<u64>() else {
            return ByteRange::Full;
        };
        if n == 0 || total == 0 {
            return ByteRange::Unsatisfiable;
        }
        return ByteRange::Partial(total.saturating_sub(n), total - 1);
    }
    let Some((start, end)) = range.split_once('-') else {
        return ByteRange::Full;
    };
    let Ok(start) = start.parse::<u64>() else {
        return ByteRange::Full;
    };
    if start >= total {
        return ByteRange::Unsatisfiable;
    }
    let end = if end.is_empty() {
        total - 1
    } else {
        match end.parse::<u64>() {
            Ok(end) if end >= start => end.min(total - 1),
            _ => return ByteRange::Full,
        }
    };
    ByteRange::Partial(start, end)
}

fn http_date(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

fn header_str(headers: &HeaderMap, name: HeaderName) -> Option<&str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn set_header(response: &mut Response, name: HeaderName, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        response.headers_mut().insert(name, value);
    }
}
