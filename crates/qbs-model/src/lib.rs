pub mod filter;
pub mod question;
pub mod taxonomy;

pub use filter::FilterSet;
pub use question::Question;
pub use taxonomy::{Chapter, Class, Metadata, QuestionLevel, QuestionType, Subject, Topic};
