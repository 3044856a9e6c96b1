//! Normalization options and the resolved configuration they produce.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

/// Scheme assumed when the input carries none.
pub const DEFAULT_PROTOCOL: &str = "https";

/// Predicate deciding whether a query parameter survives normalization.
///
/// Receives the decoded key and value; returning `false` drops the pair.
#[derive(Clone)]
pub struct QueryFilter(Arc<dyn Fn(&str, &str) -> bool + Send + Sync>);

impl QueryFilter {
    /// Wrap a closure as a query filter.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        QueryFilter(Arc::new(f))
    }

    /// Returns true if the pair should be kept.
    pub fn keep(&self, key: &str, value: &str) -> bool {
        (self.0)(key, value)
    }
}

impl fmt::Debug for QueryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("QueryFilter(..)")
    }
}

/// Caller-facing normalization options.
///
/// Every field is optional; `None` falls back to the default listed on the
/// corresponding [`Config`] field. Options deserialize from camelCase keys
/// (`keepWWW`, `sortQueryParams`, ...) and also accept the short names
/// `www`, `auth`, `port`, `index`, `search`, `sortSearch`, `fragment`,
/// `textFragment`, `protocol`, `customProtocol` and `unicode`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub default_protocol: Option<String>,
    #[serde(alias = "customProtocol")]
    pub allow_custom_protocol: Option<bool>,
    pub force_protocol: Option<String>,
    #[serde(alias = "protocol")]
    pub keep_protocol: Option<bool>,
    #[serde(rename = "keepWWW", alias = "www")]
    pub keep_www: Option<bool>,
    #[serde(alias = "auth")]
    pub keep_auth: Option<bool>,
    #[serde(alias = "port")]
    pub keep_port: Option<bool>,
    #[serde(alias = "index")]
    pub keep_directory_index: Option<bool>,
    #[serde(alias = "search")]
    pub keep_query_params: Option<bool>,
    #[serde(alias = "sortSearch")]
    pub sort_query_params: Option<bool>,
    #[serde(skip)]
    pub filter_query_params: Option<QueryFilter>,
    #[serde(alias = "fragment")]
    pub keep_hash: Option<bool>,
    #[serde(alias = "textFragment")]
    pub keep_text_fragment: Option<bool>,
    #[serde(alias = "unicode")]
    pub unicode_domain: Option<bool>,
}

impl Options {
    /// Empty options; every toggle takes its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.default_protocol = Some(protocol.into());
        self
    }

    pub fn with_allow_custom_protocol(mut self, allow: bool) -> Self {
        self.allow_custom_protocol = Some(allow);
        self
    }

    pub fn with_force_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.force_protocol = Some(protocol.into());
        self
    }

    pub fn with_keep_protocol(mut self, keep: bool) -> Self {
        self.keep_protocol = Some(keep);
        self
    }

    pub fn with_keep_www(mut self, keep: bool) -> Self {
        self.keep_www = Some(keep);
        self
    }

    pub fn with_keep_auth(mut self, keep: bool) -> Self {
        self.keep_auth = Some(keep);
        self
    }

    pub fn with_keep_port(mut self, keep: bool) -> Self {
        self.keep_port = Some(keep);
        self
    }

    pub fn with_keep_directory_index(mut self, keep: bool) -> Self {
        self.keep_directory_index = Some(keep);
        self
    }

    pub fn with_keep_query_params(mut self, keep: bool) -> Self {
        self.keep_query_params = Some(keep);
        self
    }

    pub fn with_sort_query_params(mut self, sort: bool) -> Self {
        self.sort_query_params = Some(sort);
        self
    }

    pub fn with_filter_query_params<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        self.filter_query_params = Some(QueryFilter::new(filter));
        self
    }

    pub fn with_keep_hash(mut self, keep: bool) -> Self {
        self.keep_hash = Some(keep);
        self
    }

    pub fn with_keep_text_fragment(mut self, keep: bool) -> Self {
        self.keep_text_fragment = Some(keep);
        self
    }

    pub fn with_unicode_domain(mut self, unicode: bool) -> Self {
        self.unicode_domain = Some(unicode);
        self
    }

    /// Merge `overrides` on top of `self`, producing a new value.
    ///
    /// Any field set in `overrides` wins; neither input is modified.
    pub fn merge(&self, overrides: &Options) -> Options {
        Options {
            default_protocol: overrides
                .default_protocol
                .clone()
                .or_else(|| self.default_protocol.clone()),
            allow_custom_protocol: overrides.allow_custom_protocol.or(self.allow_custom_protocol),
            force_protocol: overrides
                .force_protocol
                .clone()
                .or_else(|| self.force_protocol.clone()),
            keep_protocol: overrides.keep_protocol.or(self.keep_protocol),
            keep_www: overrides.keep_www.or(self.keep_www),
            keep_auth: overrides.keep_auth.or(self.keep_auth),
            keep_port: overrides.keep_port.or(self.keep_port),
            keep_directory_index: overrides.keep_directory_index.or(self.keep_directory_index),
            keep_query_params: overrides.keep_query_params.or(self.keep_query_params),
            sort_query_params: overrides.sort_query_params.or(self.sort_query_params),
            filter_query_params: overrides
                .filter_query_params
                .clone()
                .or_else(|| self.filter_query_params.clone()),
            keep_hash: overrides.keep_hash.or(self.keep_hash),
            keep_text_fragment: overrides.keep_text_fragment.or(self.keep_text_fragment),
            unicode_domain: overrides.unicode_domain.or(self.unicode_domain),
        }
    }

    /// Fill in defaults and produce the configuration used by the pipeline.
    pub fn resolve(&self) -> Config {
        let defaults = Config::default();
        Config {
            default_protocol: self
                .default_protocol
                .as_deref()
                .map(str::to_ascii_lowercase)
                .unwrap_or(defaults.default_protocol),
            allow_custom_protocol: self
                .allow_custom_protocol
                .unwrap_or(defaults.allow_custom_protocol),
            force_protocol: self.force_protocol.clone(),
            keep_protocol: self.keep_protocol.unwrap_or(defaults.keep_protocol),
            keep_www: self.keep_www.unwrap_or(defaults.keep_www),
            keep_auth: self.keep_auth.unwrap_or(defaults.keep_auth),
            keep_port: self.keep_port.unwrap_or(defaults.keep_port),
            keep_directory_index: self
                .keep_directory_index
                .unwrap_or(defaults.keep_directory_index),
            keep_query_params: self.keep_query_params.unwrap_or(defaults.keep_query_params),
            sort_query_params: self.sort_query_params.unwrap_or(defaults.sort_query_params),
            filter_query_params: self.filter_query_params.clone(),
            keep_hash: self.keep_hash.unwrap_or(defaults.keep_hash),
            keep_text_fragment: self.keep_text_fragment.unwrap_or(defaults.keep_text_fragment),
            unicode_domain: self.unicode_domain.unwrap_or(defaults.unicode_domain),
        }
    }
}

/// Fully resolved configuration, read-only for the duration of one call.
#[derive(Debug, Clone)]
pub struct Config {
    /// Scheme prepended when the input has none (`https`).
    pub default_protocol: String,
    /// Accept schemes other than http, https and the default (`false`).
    pub allow_custom_protocol: bool,
    /// Rewrite the final scheme; skips scheme validation when set.
    pub force_protocol: Option<String>,
    /// Keep `scheme://` in the output (`true`).
    pub keep_protocol: bool,
    /// Keep a leading `www` label on three-label hosts (`false`).
    pub keep_www: bool,
    /// Keep username and password (`false`).
    pub keep_auth: bool,
    /// Keep an explicit non-default port (`true`).
    pub keep_port: bool,
    /// Keep a trailing `index.<ext>` path segment (`true`).
    pub keep_directory_index: bool,
    /// Keep the query string at all (`true`).
    pub keep_query_params: bool,
    /// Sort query parameters by key (`true`).
    pub sort_query_params: bool,
    /// Drop query parameters the predicate rejects.
    pub filter_query_params: Option<QueryFilter>,
    /// Keep the fragment (`true`).
    pub keep_hash: bool,
    /// Keep a `:~:text=` text fragment directive (`false`).
    pub keep_text_fragment: bool,
    /// Render the hostname in Unicode instead of punycode (`false`).
    pub unicode_domain: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_protocol: DEFAULT_PROTOCOL.to_string(),
            allow_custom_protocol: false,
            force_protocol: None,
            keep_protocol: true,
            keep_www: false,
            keep_auth: false,
            keep_port: true,
            keep_directory_index: true,
            keep_query_params: true,
            sort_query_params: true,
            filter_query_params: None,
            keep_hash: true,
            keep_text_fragment: false,
            unicode_domain: false,
        }
    }
}
