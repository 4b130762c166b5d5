//! Typed URL construction for API paths.
//!
//! Identifiers (session ids, job names, tenant ids, secret paths) are
//! validated and pushed as individual path segments, so `/`, `?`, `#` and
//! spaces are percent-encoded instead of changing which resource is hit.

use url::Url;

use crate::error::ClientError;

/// A validated API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    /// Parse a profile base URL such as `https://api.example.com` or
    /// `https://gateway.example.com/cortex/`.
    ///
    /// Any existing base path is kept; query and fragment are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the URL does not parse, is not
    /// http(s), or cannot carry a path.
    pub fn parse(base: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidUrl {
            url: base.to_string(),
            reason,
        };

        let mut url = Url::parse(base.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| invalid("URL cannot carry a path".into()))?
            .pop_if_empty();

        Ok(Self { base: url })
    }

    /// Start a path under this endpoint.
    #[must_use]
    pub fn path(&self) -> PathBuilder<'_> {
        PathBuilder {
            endpoint: self,
            segments: Vec::new(),
        }
    }
}

/// Accumulates path segments under an [`Endpoint`].
#[derive(Debug)]
pub struct PathBuilder<'a> {
    endpoint: &'a Endpoint,
    segments: Vec<String>,
}

impl PathBuilder<'_> {
    /// Append a fixed API path segment.
    #[must_use]
    pub fn fixed(mut self, segment: &'static str) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Append a caller-supplied identifier as a single escaped segment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidIdentifier`] for blank identifiers and
    /// for `.` / `..`.
    pub fn id(mut self, kind: &'static str, value: &str) -> Result<Self, ClientError> {
        validate_identifier(kind, value)?;
        self.segments.push(value.to_string());
        Ok(self)
    }

    /// Append a `/`-separated identifier as one escaped segment per piece.
    ///
    /// Empty pieces (leading, trailing, or doubled slashes) are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidIdentifier`] if no piece remains or a
    /// piece is `.` / `..`.
    pub fn nested_id(mut self, kind: &'static str, value: &str) -> Result<Self, ClientError> {
        let pieces: Vec<&str> = value.split('/').filter(|piece| !piece.is_empty()).collect();
        if pieces.is_empty() {
            return Err(ClientError::InvalidIdentifier {
                kind,
                value: value.to_string(),
                reason: "must not be empty",
            });
        }
        for piece in pieces {
            validate_identifier(kind, piece).map_err(|_| ClientError::InvalidIdentifier {
                kind,
                value: value.to_string(),
                reason: "must not contain '.' or '..' segments",
            })?;
            self.segments.push(piece.to_string());
        }
        Ok(self)
    }

    /// Produce the final URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base cannot carry a path.
    pub fn build(self) -> Result<Url, ClientError> {
        let mut url = self.endpoint.base.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl {
                url: self.endpoint.base.to_string(),
                reason: "URL cannot carry a path".into(),
            })?
            .extend(&self.segments);
        Ok(url)
    }
}

fn validate_identifier(kind: &'static str, value: &str) -> Result<(), ClientError> {
    let reason = if value.trim().is_empty() {
        "must not be empty"
    } else if value == "." || value == ".." {
        "must not be '.' or '..'"
    } else {
        return Ok(());
    };

    Err(ClientError::InvalidIdentifier {
        kind,
        value: value.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sessions_url(base: &str, id: &str) -> String {
        Endpoint::parse(base)
            .expect("base parses")
            .path()
            .fixed("v2")
            .fixed("sessions")
            .id("session id", id)
            .expect("id accepted")
            .build()
            .expect("url builds")
            .to_string()
    }

    #[test]
    fn appends_to_bare_host() {
        assert_eq!(
            sessions_url("https://api.example.com", "abc-123"),
            "https://api.example.com/v2/sessions/abc-123"
        );
    }

    #[test]
    fn keeps_base_path_and_ignores_trailing_slash() {
        assert_eq!(
            sessions_url("https://gw.example.com/cortex/", "abc"),
            "https://gw.example.com/cortex/v2/sessions/abc"
        );
        assert_eq!(
            sessions_url("https://gw.example.com/cortex", "abc"),
            "https://gw.example.com/cortex/v2/sessions/abc"
        );
    }

    #[test]
    fn drops_query_and_fragment_from_base() {
        assert_eq!(
            sessions_url("https://api.example.com/?debug=1#top", "abc"),
            "https://api.example.com/v2/sessions/abc"
        );
    }

    #[test]
    fn escapes_path_breaking_characters() {
        assert_eq!(
            sessions_url("https://api.example.com", "a/b?c#d e"),
            "https://api.example.com/v2/sessions/a%2Fb%3Fc%23d%20e"
        );
    }

    #[test]
    fn rejects_blank_and_dot_identifiers() {
        let endpoint = Endpoint::parse("https://api.example.com").expect("base parses");
        for bad in ["", "   ", ".", ".."] {
            let err = endpoint.path().id("session id", bad).unwrap_err();
            assert!(
                matches!(err, ClientError::InvalidIdentifier { kind: "session id", .. }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn nested_id_splits_on_slashes() {
        let url = Endpoint::parse("https://api.example.com")
            .expect("base parses")
            .path()
            .fixed("v2")
            .fixed("tenants")
            .fixed("secrets")
            .nested_id("secret path", "/team//db password/")
            .expect("path accepted")
            .build()
            .expect("url builds");
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v2/tenants/secrets/team/db%20password"
        );
    }

    #[test]
    fn nested_id_rejects_traversal_and_empty() {
        let endpoint = Endpoint::parse("https://api.example.com").expect("base parses");
        assert!(endpoint.path().nested_id("secret path", "a/../b").is_err());
        assert!(endpoint.path().nested_id("secret path", "///").is_err());
    }

    #[test]
    fn rejects_unusable_base_urls() {
        for bad in ["not a url", "ftp://files.example.com", "mailto:ops@example.com"] {
            assert!(
                matches!(Endpoint::parse(bad), Err(ClientError::InvalidUrl { .. })),
                "{bad:?} should be rejected"
            );
        }
    }
}
