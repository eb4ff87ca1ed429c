#![forbid(unsafe_code)]

//! SVG path geometry extraction for interactive map views (headless).
//!
//! Walks an SVG document, tracks nested `<g>` transform scopes, and decodes
//! each `<path>`'s `d` string into line/curve segments plus an anchor-point
//! bounding box. The result is an immutable [`Document`] snapshot the host
//! view renders, zooms and hit-tests; this crate draws no pixels and does no
//! layout.
//!
//! Design goals:
//! - deterministic single-pass construction (build, then publish read-only)
//! - best-effort extraction: a malformed path command degrades locally,
//!   never failing the whole map
//! - only the attributes that drive shape rendering are read (`id`, `title`,
//!   `className`, `d`, `transform`); everything else is ignored

pub mod document;
pub mod error;
pub mod geom;
pub mod path;
pub mod scan;
pub mod transform;

pub use document::{Document, DocumentWalker, ElementAttributes};
pub use error::{Error, Result};
pub use path::{PathElement, PathSegment};
