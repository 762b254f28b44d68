//! DOM helpers over the [`Element`](actionreel_protocols::Element) trait.

mod html;
mod memory;
mod traversal;

pub use html::outer_html;
pub use memory::{MemoryDom, MemoryElement};
pub use traversal::{
    ancestors, closest, closest_tag, collapse_whitespace, descendants, find_by_id,
    label_text_for, root, same_tag_position, truncate_chars,
};
