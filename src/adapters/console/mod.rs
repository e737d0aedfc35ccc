//! Console adapter - interactive command-line questionnaire.

mod session;

pub use session::{parse_field, parse_yes_no, ConsoleError, ConsoleSession, ListedLevels};
