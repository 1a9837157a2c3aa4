mod paginate;

pub use self::paginate::*;
