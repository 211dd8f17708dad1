mod navaid_search;
mod warp_plugin;

pub use navaid_search::{Destination, NavSearch, SearchError, SearchHit};
pub use warp_plugin::WarpPlugin;
