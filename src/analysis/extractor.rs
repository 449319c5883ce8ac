//! Structure extraction: every class and function of a Python module as a
//! flat list of [`DeclarationRecord`]s.
//!
//! The walk is split in two so that methods are emitted exactly once: the
//! suite walk records classes and free functions and descends into function
//! and compound-statement bodies, while each class iterates its own direct
//! members. The suite walk never looks for functions inside a class body.

use crate::analysis::comments::scan_preceding_comments;
use crate::analysis::declaration::Declaration;
use crate::analysis::record::{DeclarationKind, DeclarationRecord};
use crate::analysis::signature::format_signature;
use crate::core::options::ExtractOptions;
use crate::core::parser;
use crate::core::source::SourceText;
use crate::errors::ReadmeError;
use log::debug;
use rustpython_parser::ast::{self, ExceptHandler, Stmt};

/// Extract declarations with the default options
pub fn extract(source: &str) -> Result<Vec<DeclarationRecord>, ReadmeError> {
    extract_with_options(source, &ExtractOptions::default())
}

/// Extract declarations from Python source.
///
/// # Errors
///
/// Returns [`ReadmeError::ParseError`] if `source` is not valid Python
pub fn extract_with_options(
    source: &str,
    options: &ExtractOptions,
) -> Result<Vec<DeclarationRecord>, ReadmeError> {
    let suite = parser::parse_python(source)?;
    let text = SourceText::new(source);

    let mut extractor = Extractor::new(&text, options);
    extractor.walk_suite(&suite);

    debug!(
        "Extracted {} declarations ({} classes)",
        extractor.records.len(),
        extractor.records.iter().filter(|r| r.is_class()).count()
    );

    Ok(extractor.records)
}

/// Build the record for one function declaration.
///
/// The docstring wins; otherwise the comment block directly above the
/// declaration is used, and the placeholder when there is none.
pub fn extract_function(declaration: &Declaration, source: &SourceText) -> DeclarationRecord {
    let line_index = declaration.keyword_line(source);
    let description = declaration
        .docstring()
        .or_else(|| preceding_comments(source, line_index));

    DeclarationRecord::function(
        declaration.name(),
        format_signature(declaration),
        description,
        line_index + 1,
    )
}

fn preceding_comments(source: &SourceText, line_index: usize) -> Option<String> {
    let comments = scan_preceding_comments(source.lines(), line_index);
    if comments.is_empty() {
        None
    } else {
        Some(comments.join("\n"))
    }
}

struct Extractor<'s, 'o> {
    source: &'s SourceText<'s>,
    options: &'o ExtractOptions,
    records: Vec<DeclarationRecord>,
}

impl<'s, 'o> Extractor<'s, 'o> {
    fn new(source: &'s SourceText<'s>, options: &'o ExtractOptions) -> Self {
        Self {
            source,
            options,
            records: Vec::new(),
        }
    }

    fn walk_suite(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.walk_stmt(stmt);
        }
    }

    fn walk_stmt(&mut self, stmt: &Stmt) {
        match Declaration::from_stmt(stmt) {
            Some(decl) if decl.kind() == DeclarationKind::Class => self.visit_class(&decl),
            Some(decl) => {
                self.records.push(extract_function(&decl, self.source));
                self.walk_suite(decl.body());
            }
            None => {
                for body in nested_bodies(stmt) {
                    self.walk_suite(body);
                }
            }
        }
    }

    fn visit_class(&mut self, class: &Declaration) {
        let line_index = class.keyword_line(self.source);
        let mut description = class.docstring();
        if description.is_none() && self.options.class_comment_fallback {
            description = preceding_comments(self.source, line_index);
        }
        self.records
            .push(DeclarationRecord::class(class.name(), description, line_index + 1));

        let members = class
            .body()
            .iter()
            .filter_map(Declaration::from_stmt)
            .filter(|member| member.kind() == DeclarationKind::Function);
        for member in members {
            self.records.push(extract_function(&member, self.source));
        }

        // Members are already recorded; only look inside them from here on.
        for stmt in class.body() {
            match Declaration::from_stmt(stmt) {
                Some(member) if member.kind() == DeclarationKind::Function => {
                    self.walk_suite(member.body())
                }
                _ => self.walk_stmt(stmt),
            }
        }
    }
}

/// Statement bodies nested inside a compound statement
fn nested_bodies(stmt: &Stmt) -> Vec<&[Stmt]> {
    match stmt {
        Stmt::If(ast::StmtIf { body, orelse, .. })
        | Stmt::For(ast::StmtFor { body, orelse, .. })
        | Stmt::AsyncFor(ast::StmtAsyncFor { body, orelse, .. })
        | Stmt::While(ast::StmtWhile { body, orelse, .. }) => {
            vec![body.as_slice(), orelse.as_slice()]
        }
        Stmt::With(ast::StmtWith { body, .. })
        | Stmt::AsyncWith(ast::StmtAsyncWith { body, .. }) => vec![body.as_slice()],
        Stmt::Try(ast::StmtTry {
            body,
            handlers,
            orelse,
            finalbody,
            ..
        })
        | Stmt::TryStar(ast::StmtTryStar {
            body,
            handlers,
            orelse,
            finalbody,
            ..
        }) => {
            let mut bodies = vec![body.as_slice()];
            bodies.extend(handlers.iter().map(|handler| match handler {
                ExceptHandler::ExceptHandler(h) => h.body.as_slice(),
            }));
            bodies.push(orelse.as_slice());
            bodies.push(finalbody.as_slice());
            bodies
        }
        Stmt::Match(ast::StmtMatch { cases, .. }) => {
            cases.iter().map(|case| case.body.as_slice()).collect()
        }
        _ => Vec::new(),
    }
}
