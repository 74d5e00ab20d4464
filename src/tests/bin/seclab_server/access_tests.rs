use axum::http::HeaderValue;

use super::*;

fn headers_with_auth(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(value).expect("header value"),
    );
    headers
}

#[test]
fn bearer_token_extracts_token() {
    let headers = headers_with_auth("Bearer abc.def.ghi");
    assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
}

#[test]
fn bearer_scheme_is_case_insensitive() {
    assert_eq!(
        bearer_token(&headers_with_auth("bearer abc.def.ghi")),
        Some("abc.def.ghi")
    );
    assert_eq!(
        bearer_token(&headers_with_auth("BEARER  abc.def.ghi ")),
        Some("abc.def.ghi")
    );
}

#[test]
fn bearer_token_missing_header_is_none() {
    assert_eq!(bearer_token(&HeaderMap::new()), None);
}

#[test]
fn bearer_token_rejects_other_schemes_and_empty_values() {
    assert_eq!(bearer_token(&headers_with_auth("Basic YWRtaW46cHc=")), None);
    assert_eq!(bearer_token(&headers_with_auth("abc.def.ghi")), None);
    assert_eq!(bearer_token(&headers_with_auth("Bearerabc.def.ghi")), None);
    assert_eq!(bearer_token(&headers_with_auth("Bearer ")), None);
    assert_eq!(bearer_token(&headers_with_auth("Bearer    ")), None);
}
