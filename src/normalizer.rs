//! The normalization pipeline and the views derived from it.
//!
//! Stages run strictly in order over one parsed [`Url`]:
//! scheme sniffing, host, auth and port, path, query, fragment. The URL is
//! serialized once, after which the scheme and Unicode host rewrites work on
//! the string because `url` does not allow every scheme change in place.

use tracing::debug;
use url::Url;

use crate::error::{NormalizeError, Result};
use crate::types::{Config, Options};
use crate::url::{fragment, host, path, protocol, query};

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
struct Canonical {
    /// Final canonical string.
    serialized: String,
    /// ASCII hostname after canonicalization.
    host: String,
}

fn canonicalize(input: &str, config: &Config) -> Result<Canonical> {
    // Add the default scheme or reject scheme-like prefixes
    let input = input.trim();
    let with_scheme = protocol::ensure_scheme(input, &config.default_protocol)?;

    // Parse the URL, then validate the scheme early
    let mut url = Url::parse(&with_scheme)?;
    protocol::check_protocol(url.scheme(), config)?;

    // Trim dots, drop www, require two labels
    let canonical_host = host::canonicalize_host(url.host_str().unwrap_or_default(), config.keep_www)?;
    if url.host_str() != Some(canonical_host.as_str()) {
        url.set_host(Some(canonical_host.as_str()))?;
    }

    // Credentials and port
    if !config.keep_auth {
        url.set_username("")
            .and_then(|()| url.set_password(None))
            .map_err(|()| NormalizeError::InvalidUrl("cannot clear credentials".to_string()))?;
    }
    if !config.keep_port {
        url.set_port(None)
            .map_err(|()| NormalizeError::InvalidUrl("cannot clear port".to_string()))?;
    }

    // Decode, drop index files, collapse slashes
    let canonical_path = path::canonicalize_path(url.path(), config.keep_directory_index);
    url.set_path(&canonical_path);

    // Clean up separators, filter and sort
    let canonical_query = url.query().and_then(|q| query::canonicalize_query(q, config));
    url.set_query(canonical_query.as_deref());

    // Text fragments
    let canonical_fragment = url
        .fragment()
        .and_then(|f| fragment::canonicalize_fragment(f, config));
    url.set_fragment(canonical_fragment.as_deref());

    let scheme = url.scheme().to_string();
    let ascii_host = url.host_str().unwrap_or_default().to_string();

    // Serialize once; everything below is string rewriting
    let mut serialized = path::strip_trailing_slash(String::from(url));

    // Unicode host while the scheme prefix still marks the authority
    if config.unicode_domain {
        serialized = host::unicode_display(&serialized, &ascii_host);
    }
    serialized = protocol::rewrite_protocol(serialized, &scheme, config);

    Ok(Canonical {
        serialized,
        host: ascii_host,
    })
}

/// Normalize a URL-like string, reporting why it was rejected.
///
/// # Examples
///
/// ```
/// use urlcanon::{normalize_or_fail, NormalizeError, Options};
///
/// let url = normalize_or_fail("www.example.com/foo//bar/../baz?b=2&a=1#tag", &Options::new())?;
/// assert_eq!(url, "https://example.com/foo/baz?a=1&b=2#tag");
///
/// let err = normalize_or_fail("localhost", &Options::new()).unwrap_err();
/// assert!(matches!(err, NormalizeError::InvalidDomain(_)));
/// # Ok::<(), urlcanon::NormalizeError>(())
/// ```
pub fn normalize_or_fail(url: &str, options: &Options) -> Result<String> {
    canonicalize(url, &options.resolve()).map(|canonical| canonical.serialized)
}

/// Normalize a URL-like string, returning `None` on any failure.
///
/// # Examples
///
/// ```
/// use urlcanon::{normalize, Options};
///
/// assert_eq!(normalize("EXAMPLE.com:443/", &Options::new()).as_deref(), Some("https://example.com"));
/// assert_eq!(normalize("data:abc", &Options::new()), None);
/// ```
pub fn normalize(url: &str, options: &Options) -> Option<String> {
    normalize_or_fail(url, options)
        .inspect_err(|err| debug!(url, error = %err, "normalization failed"))
        .ok()
}

/// Hostname of the URL after normalization with default options.
pub fn extract_domain_or_fail(url: &str) -> Result<String> {
    canonicalize(url, &Config::default()).map(|canonical| canonical.host)
}

/// Hostname of the URL, or `None` if it cannot be normalized.
///
/// # Examples
///
/// ```
/// use urlcanon::extract_domain;
///
/// assert_eq!(extract_domain("https://user:@www.example.com/foo").as_deref(), Some("example.com"));
/// assert_eq!(extract_domain("localhost"), None);
/// ```
pub fn extract_domain(url: &str) -> Option<String> {
    extract_domain_or_fail(url)
        .inspect_err(|err| debug!(url, error = %err, "domain extraction failed"))
        .ok()
}

/// Normalize without the `scheme://` prefix, reporting failures.
pub fn humanize_or_fail(url: &str, options: &Options) -> Result<String> {
    normalize_or_fail(url, &options.merge(&Options::new().with_keep_protocol(false)))
}

/// Normalize without the `scheme://` prefix.
///
/// # Examples
///
/// ```
/// use urlcanon::{humanize, Options};
///
/// assert_eq!(
///     humanize("example.com:443/foo/index.html?a=2&a=1#tag", &Options::new()).as_deref(),
///     Some("example.com/foo/index.html?a=2&a=1#tag")
/// );
/// ```
pub fn humanize(url: &str, options: &Options) -> Option<String> {
    humanize_or_fail(url, options)
        .inspect_err(|err| debug!(url, error = %err, "humanization failed"))
        .ok()
}

/// A normalizer bound to base options.
///
/// Per-call overrides are merged on top of the base; neither is modified.
/// Cloning is cheap and the value can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    base: Options,
}

impl Normalizer {
    pub fn new(base: Options) -> Self {
        Self { base }
    }

    /// The options every call starts from.
    pub fn base(&self) -> &Options {
        &self.base
    }

    pub fn normalize(&self, url: &str, overrides: &Options) -> Option<String> {
        normalize(url, &self.base.merge(overrides))
    }

    pub fn normalize_or_fail(&self, url: &str, overrides: &Options) -> Result<String> {
        normalize_or_fail(url, &self.base.merge(overrides))
    }

    pub fn humanize(&self, url: &str, overrides: &Options) -> Option<String> {
        humanize(url, &self.base.merge(overrides))
    }
}

/// Bind base options, returning a reusable [`Normalizer`].
///
/// # Examples
///
/// ```
/// use urlcanon::{bind, Options};
///
/// let normalizer = bind(Options::new().with_keep_www(true));
/// assert_eq!(normalizer.normalize("www.example.com", &Options::new()).as_deref(), Some("https://www.example.com"));
/// assert_eq!(
///     normalizer.normalize("www.example.com", &Options::new().with_keep_www(false)).as_deref(),
///     Some("https://example.com")
/// );
/// ```
pub fn bind(base: Options) -> Normalizer {
    Normalizer::new(base)
}
