pub mod config;
pub mod cursor;
pub mod lexeme;
pub mod markup;
pub mod state;

pub use config::ParserConfig;
pub use markup::MarkupParser;
pub use state::{LexState, ParserState};
