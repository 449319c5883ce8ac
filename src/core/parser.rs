use crate::core::source::SourceText;
use crate::errors::{parse_error, ReadmeError};
use log::trace;
use rustpython_parser::ast::Suite;
use rustpython_parser::Parse;

/// Parse Python source code into AST
pub fn parse_python(source: &str) -> Result<Suite, ReadmeError> {
    let ast = Suite::parse(source, "<module>").map_err(|e| {
        let offset = usize::from(e.offset);
        let index = SourceText::new(source);
        parse_error(
            e.error.to_string(),
            Some(index.line_index(offset) + 1),
            Some(index.column(offset) + 1),
        )
    })?;

    trace!("Python AST: {:#?}", ast);

    Ok(ast)
}
