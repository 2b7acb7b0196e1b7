//! Business logic for shortening and resolving URLs.

mod helpers;
mod urls;

pub use helpers::generate_short_code;
pub use urls::{parse_target_url, resolve_url, shorten_url};
