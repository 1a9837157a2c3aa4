mod next_question;

pub use self::next_question::*;
