pub mod parser;

pub use parser::{
    render_snippet, Diagnostic, ParseError, Parser, ParserConfig, DEFAULT_MAX_DEPTH,
};


// Integration tests are in the tests/ directory
