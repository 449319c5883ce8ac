//! A typed view over the class and function statements of the Python AST.

use crate::analysis::record::DeclarationKind;
use crate::core::source::SourceText;
use rustpython_parser::ast::{self, Constant, Expr, Ranged, Stmt};

/// A class or function definition site
#[derive(Debug, Clone, Copy)]
pub enum Declaration<'a> {
    Class(&'a ast::StmtClassDef),
    Function(&'a ast::StmtFunctionDef),
    AsyncFunction(&'a ast::StmtAsyncFunctionDef),
}

impl<'a> Declaration<'a> {
    /// View `stmt` as a declaration, if it is one
    pub fn from_stmt(stmt: &'a Stmt) -> Option<Self> {
        match stmt {
            Stmt::ClassDef(classdef) => Some(Declaration::Class(classdef)),
            Stmt::FunctionDef(fundef) => Some(Declaration::Function(fundef)),
            Stmt::AsyncFunctionDef(fundef) => Some(Declaration::AsyncFunction(fundef)),
            _ => None,
        }
    }

    pub fn kind(&self) -> DeclarationKind {
        match *self {
            Declaration::Class(_) => DeclarationKind::Class,
            Declaration::Function(_) | Declaration::AsyncFunction(_) => DeclarationKind::Function,
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            Declaration::Class(classdef) => classdef.name.as_str(),
            Declaration::Function(fundef) => fundef.name.as_str(),
            Declaration::AsyncFunction(fundef) => fundef.name.as_str(),
        }
    }

    pub fn body(&self) -> &'a [Stmt] {
        match *self {
            Declaration::Class(classdef) => &classdef.body,
            Declaration::Function(fundef) => &fundef.body,
            Declaration::AsyncFunction(fundef) => &fundef.body,
        }
    }

    pub fn decorators(&self) -> &'a [Expr] {
        match *self {
            Declaration::Class(classdef) => &classdef.decorator_list,
            Declaration::Function(fundef) => &fundef.decorator_list,
            Declaration::AsyncFunction(fundef) => &fundef.decorator_list,
        }
    }

    /// Positional-only and regular positional parameter names, in order.
    /// Classes have none.
    pub fn parameters(&self) -> Vec<&'a str> {
        let args: &'a ast::Arguments = match *self {
            Declaration::Class(_) => return Vec::new(),
            Declaration::Function(fundef) => &fundef.args,
            Declaration::AsyncFunction(fundef) => &fundef.args,
        };

        args.posonlyargs
            .iter()
            .chain(args.args.iter())
            .map(|arg| arg.def.arg.as_str())
            .collect()
    }

    /// Zero-based line of the `def`/`class` keyword. Decorators sit above
    /// this line and are not part of it.
    pub fn keyword_line(&self, source: &SourceText) -> usize {
        let own = match *self {
            Declaration::Class(classdef) => classdef.range.start(),
            Declaration::Function(fundef) => fundef.range.start(),
            Declaration::AsyncFunction(fundef) => fundef.range.start(),
        };
        let own_line = source.line_index(usize::from(own));

        let Some(last_decorator) = self.decorators().last() else {
            return own_line;
        };
        let after_decorators = source.line_index(usize::from(last_decorator.end())) + 1;
        if own_line >= after_decorators {
            return own_line;
        }

        // The statement range includes the decorators; skip the comment and
        // blank lines between the last decorator and the keyword.
        let lines = source.lines();
        (after_decorators..lines.len())
            .find(|&index| {
                let line = lines[index].trim();
                !line.is_empty() && !line.starts_with('#')
            })
            .unwrap_or(own_line)
    }

    /// The attached docstring, cleaned of its indentation. Empty docstrings
    /// count as absent.
    pub fn docstring(&self) -> Option<String> {
        let Some(Stmt::Expr(ast::StmtExpr { value, .. })) = self.body().first() else {
            return None;
        };

        match value.as_ref() {
            Expr::Constant(ast::ExprConstant {
                value: Constant::Str(text),
                ..
            }) => Some(clean_docstring(text)).filter(|doc| !doc.is_empty()),
            _ => None,
        }
    }
}

/// Normalize docstring indentation the way Python's `inspect.cleandoc`
/// does: expand tabs, strip the first line's leading whitespace, remove the
/// common indentation of the remaining lines, and drop empty lines at both
/// ends.
pub fn clean_docstring(raw: &str) -> String {
    let expanded = expand_tabs(raw);
    let mut lines: Vec<String> = expanded.split('\n').map(str::to_string).collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim_start().is_empty())
        .map(|line| line.chars().count() - line.trim_start().chars().count())
        .min();

    lines[0] = lines[0].trim_start().to_string();
    if let Some(margin) = margin {
        for line in lines.iter_mut().skip(1) {
            *line = line.chars().skip(margin).collect();
        }
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    while lines.first().is_some_and(|line| line.is_empty()) {
        lines.remove(0);
    }

    lines.join("\n")
}

/// Replace tabs with spaces up to the next multiple-of-8 column
fn expand_tabs(text: &str) -> String {
    const TAB_SIZE: usize = 8;

    let mut output = String::with_capacity(text.len());
    let mut column = 0;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let width = TAB_SIZE - column % TAB_SIZE;
                output.extend(std::iter::repeat(' ').take(width));
                column += width;
            }
            '\n' | '\r' => {
                output.push(ch);
                column = 0;
            }
            _ => {
                output.push(ch);
                column += 1;
            }
        }
    }
    output
}
