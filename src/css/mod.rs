//! Font CSS parsing and rewriting.
//!
//! # Data Flow
//! ```text
//! family query parameters
//!     → family.rs (spec strings → FamilySpec)
//!
//! upstream CSS text
//!     → font_face.rs (parse into FontFace records)
//!     → transform.rs (fold FamilySpecs over the records;
//!                     unicode_range.rs does the interval math)
//!     → font_face.rs (generate rewritten CSS)
//! ```
//!
//! # Design Decisions
//! - Everything here is pure and synchronous; the handler owns all I/O
//! - Transformations build new records instead of mutating shared state

pub mod family;
pub mod font_face;
pub mod transform;
pub mod unicode_range;

pub use family::FamilySpec;
pub use font_face::{generate_css, parse_css, FontFace};
pub use transform::transform;
