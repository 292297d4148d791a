//! Original-URI construction for post-login return.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

/// Strip `origin` from an absolute `href`, leaving path, query and fragment.
///
/// Hrefs that are already relative, or that point at another origin, are
/// returned unchanged.
#[must_use]
pub fn to_relative_url(href: &str, origin: &str) -> String {
    let origin = origin.trim_end_matches('/');
    match href.strip_prefix(origin) {
        Some("") => "/".to_owned(),
        Some(rest) if rest.starts_with(['/', '?', '#']) => {
            if rest.starts_with('/') { rest.to_owned() } else { format!("/{rest}") }
        }
        _ => href.to_owned(),
    }
}

/// Rebuild the relative URL from router location parts.
///
/// `search` and `hash` are accepted with or without their leading `?`/`#`.
#[must_use]
pub fn original_uri(pathname: &str, search: &str, hash: &str) -> String {
    let mut uri = if pathname.starts_with('/') { pathname.to_owned() } else { format!("/{pathname}") };
    let search = search.trim_start_matches('?');
    if !search.is_empty() {
        uri.push('?');
        uri.push_str(search);
    }
    let hash = hash.trim_start_matches('#');
    if !hash.is_empty() {
        uri.push('#');
        uri.push_str(hash);
    }
    uri
}
