mod create_or_search;
mod delete;
mod get_all;

pub use self::create_or_search::*;
pub use self::delete::*;
pub use self::get_all::*;
