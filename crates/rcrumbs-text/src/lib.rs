#![forbid(unsafe_code)]

//! Terminal text host for breadcrumb trails.

pub mod container;
pub mod width;

pub use container::{DEFAULT_SEPARATOR, ListNode, TextContainer};
pub use width::{ELLIPSIS, display_width, truncate_to_width, truncate_with_ellipsis};
