pub mod advisor;
pub mod parse;

pub use advisor::{Advisor, Reply};
pub use parse::parse_input;
