//! XML node helpers: navigation, path queries, and serialization.

mod select;
mod serialize;
mod utils;

pub use select::select;
pub use serialize::{node_to_string, save_to_file, structurally_equal};
pub use utils::{
    element_children, find_child, find_children, get_attribute, get_tag_name, get_text, has_tag,
};
