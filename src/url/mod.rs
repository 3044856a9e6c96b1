//! URL canonicalization stages.
//!
//! Each module owns one part of the URL:
//! - Scheme detection, validation and post-serialization rewriting
//! - Hostname trimming, `www` removal and Unicode display
//! - Path decoding, directory index removal and slash collapsing
//! - Query separator cleanup, filtering and sorting
//! - Fragment and text fragment removal
//! - Best-effort percent decoding shared by the stages above

pub mod decode;
pub mod fragment;
pub mod host;
pub mod path;
pub mod protocol;
pub mod query;

// Re-export main functionality
pub use decode::{decode_component, decode_uri, or_keep, DecodeError};
pub use fragment::{canonicalize_fragment, strip_text_fragment};
pub use host::{canonicalize_host, unicode_display};
pub use path::{canonicalize_path, collapse_slashes, strip_directory_index, strip_trailing_slash};
pub use protocol::{check_protocol, ensure_scheme, has_scheme, has_scheme_like_prefix, rewrite_protocol};
pub use query::canonicalize_query;
