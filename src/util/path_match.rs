//! Compiled route path patterns.
//!
//! Patterns use the router's path syntax: `/users/:id`, `/docs/*`. Matching is
//! exact against the whole pathname; empty segments (repeated or trailing
//! slashes) are ignored on both sides.

#[cfg(test)]
#[path = "path_match_test.rs"]
mod path_match_test;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param,
    Splat,
}

/// A path pattern ready to test pathnames against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
    case_sensitive: bool,
}

impl PathPattern {
    #[must_use]
    pub fn new(path: &str, case_sensitive: bool) -> Self {
        let raw: Vec<&str> = split_segments(path).collect();
        let last = raw.len().saturating_sub(1);
        let segments = raw
            .iter()
            .enumerate()
            .map(|(i, seg)| match *seg {
                "*" if i == last => Segment::Splat,
                s if s.len() > 1 && s.starts_with(':') => Segment::Param,
                s => Segment::Static(s.to_owned()),
            })
            .collect();
        Self { segments, case_sensitive }
    }

    #[must_use]
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Whether `pathname` (no query or hash) matches this pattern.
    #[must_use]
    pub fn matches(&self, pathname: &str) -> bool {
        let mut parts = split_segments(pathname);
        for segment in &self.segments {
            match segment {
                Segment::Splat => return true,
                Segment::Param => {
                    if parts.next().is_none() {
                        return false;
                    }
                }
                Segment::Static(expected) => {
                    let Some(actual) = parts.next() else {
                        return false;
                    };
                    let equal = if self.case_sensitive {
                        actual == expected
                    } else {
                        actual.eq_ignore_ascii_case(expected)
                    };
                    if !equal {
                        return false;
                    }
                }
            }
        }
        parts.next().is_none()
    }
}

/// Match result for a guard with an optional path; no path always matches.
#[must_use]
pub fn route_matches(pattern: Option<&PathPattern>, pathname: &str) -> bool {
    pattern.is_none_or(|p| p.matches(pathname))
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|seg| !seg.is_empty())
}
