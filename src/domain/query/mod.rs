//! Feature search query language

mod decode;
mod node;
mod parser;

pub use decode::{decode_query, DecodeError};
pub use node::{SearchNode, SearchTerm};
pub use parser::{QueryParseError, QueryParser, SimpleQueryParser};
