//! urlcanon - Deterministic URL normalization
//!
//! This crate turns arbitrary user-supplied URL-like strings into a single
//! canonical, comparable form, and derives two views from it: the bare
//! domain and a "humanized" string without the scheme.
//!
//! # Quick Start
//!
//! ```
//! use urlcanon::{normalize, extract_domain, humanize, Options};
//!
//! let options = Options::new();
//!
//! assert_eq!(normalize("example.com", &options).as_deref(), Some("https://example.com"));
//! assert_eq!(normalize("www.example.com", &options).as_deref(), Some("https://example.com"));
//! assert_eq!(
//!     normalize("example.com/foo//bar/../baz?b=2&a=1#tag", &options).as_deref(),
//!     Some("https://example.com/foo/baz?a=1&b=2#tag")
//! );
//!
//! assert_eq!(extract_domain("https://user:@example.com").as_deref(), Some("example.com"));
//! assert_eq!(humanize("https://www.example.com/", &options).as_deref(), Some("example.com"));
//! ```
//!
//! # Pipeline
//!
//! | Stage      | Effect |
//! |------------|--------|
//! | protocol   | Prepend the default scheme, reject `data:`-like prefixes, validate the scheme |
//! | host       | Trim dots, drop `www` from three-label hosts, require two labels |
//! | auth/port  | Clear credentials and explicit ports when configured |
//! | path       | Decode escapes, drop `index.<ext>`, collapse slashes |
//! | query      | Clean separators, filter and sort parameters |
//! | fragment   | Drop the fragment or its `:~:text=` directive |
//! | rewrite    | Render the host in Unicode, force or strip the scheme |
//!
//! # Options
//!
//! Every option is independent and defaults to the value documented on
//! [`Config`]. Options can be built in code or deserialized:
//!
//! ```
//! use urlcanon::{normalize, Options};
//!
//! let options = Options::new().with_force_protocol("sftp");
//! assert_eq!(normalize("https://example.com", &options).as_deref(), Some("sftp://example.com"));
//!
//! let options = Options::new().with_default_protocol("ftp");
//! assert_eq!(normalize("example.com", &options).as_deref(), Some("ftp://example.com"));
//! ```
//!
//! # Error Handling
//!
//! The `_or_fail` functions return `Result<T, NormalizeError>`:
//!
//! - `UnsupportedProtocol` for `data:`, `mailto:` or `user:pass@host` input
//! - `InvalidProtocol` for schemes outside http, https and the default
//! - `InvalidDomain` for hosts with fewer than two labels, such as `localhost`
//! - `InvalidUrl` when the URL parser rejects the input
//!
//! The other entry points return `None` instead.

// Re-export the entry points
pub use normalizer::{
    bind, extract_domain, extract_domain_or_fail, humanize, humanize_or_fail, normalize,
    normalize_or_fail, Normalizer,
};

// Re-export public types
pub use error::{NormalizeError, Result};
pub use types::{Config, Options, QueryFilter, DEFAULT_PROTOCOL};

// Module declarations
pub mod error;
pub mod normalizer;
pub mod types;
pub mod url;
