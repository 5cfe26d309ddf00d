//! The routes document of a nested feature.
//!
//! A routes file is modelled as four parts instead of being spliced as raw
//! text:
//!
//! ```text
//! import { Routes } from '@angular/router';              ┐ imports
//! import { ListComponent } from './list/feature/...';    ┘
//!
//! export const ORDERS_ROUTES: Routes = [                   declaration
//!   { path: 'list', component: ListComponent },            entries
//! ];                                                       trailer
//! ```
//!
//! Lines already present in a document are carried verbatim, blank lines and
//! trailing whitespace included, so merging a child never rewrites earlier
//! entries. The only lines dropped are whitespace-only lines directly after
//! the array's `[` and directly before its `]`. Imports and entries only ever
//! grow at the end, in call order; duplicates are accepted.

use crate::domain::{error::DomainError, naming::NameForms};

/// A parsed routes file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutesDocument {
    /// Every line up to and including the last import statement.
    imports: Vec<String>,
    /// Text after the import block up to and including the array's `[`.
    declaration: String,
    /// Lines inside the route array, verbatim.
    body: Vec<String>,
    /// The array's closing `]` and everything after it.
    trailer: String,
}

impl RoutesDocument {
    /// Parse routes source text.
    ///
    /// # Errors
    ///
    /// [`DomainError::MalformedRoutes`] when the route array's opening `[` or
    /// closing `]` cannot be found.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let import_end = import_block_end(text);
        let (head, rest) = text.split_at(import_end);

        let open = array_open(rest).ok_or_else(|| DomainError::MalformedRoutes {
            reason: "route array opening '[' not found".into(),
        })?;
        let (declaration, after_open) = rest.split_at(open + 1);

        let close = after_open
            .rfind(']')
            .ok_or_else(|| DomainError::MalformedRoutes {
                reason: "route array closing ']' not found".into(),
            })?;
        let (body, trailer) = after_open.split_at(close);

        let mut body: Vec<&str> = body.lines().collect();
        if body.first().is_some_and(|line| line.trim().is_empty()) {
            body.remove(0);
        }
        if body.last().is_some_and(|line| line.trim().is_empty()) {
            body.pop();
        }

        Ok(Self {
            imports: head.lines().map(str::to_owned).collect(),
            declaration: declaration.to_owned(),
            body: body.into_iter().map(str::to_owned).collect(),
            trailer: trailer.to_owned(),
        })
    }

    /// Register a child's component: one import after the last import, one
    /// route as the last entry.
    pub fn add_child(&mut self, child: &NameForms, import_path: &str) {
        let component = child.class_name("Component");
        self.imports
            .push(format!("import {{ {component} }} from '{import_path}';"));
        self.body.push(format!(
            "  {{ path: '{}', component: {component} }},",
            child.kebab()
        ));
    }

    /// Serialise back to source text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for import in &self.imports {
            out.push_str(import);
            out.push('\n');
        }
        out.push_str(&self.declaration);
        out.push('\n');
        for line in &self.body {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&self.trailer);
        out
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// Non-blank lines of the route array.
    pub fn entries(&self) -> Vec<&str> {
        self.body
            .iter()
            .map(String::as_str)
            .filter(|line| !line.trim().is_empty())
            .collect()
    }

    pub fn entry_count(&self) -> usize {
        self.entries().len()
    }
}

/// Byte offset of the route array's `[`: the first `[` after the
/// declaration's `=`, so a type annotation such as `Route[]` is skipped.
/// Without an `=` the first `[` is taken.
fn array_open(rest: &str) -> Option<usize> {
    match rest.find('=') {
        Some(eq) => rest[eq..].find('[').map(|i| eq + i),
        None => rest.find('['),
    }
}

/// Byte offset just past the last `import ` line that precedes the first
/// line containing `[`.
fn import_block_end(text: &str) -> usize {
    let mut end = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if line.contains('[') {
            break;
        }
        offset += line.len();
        if line.trim_start().starts_with("import ") {
            end = offset;
        }
    }

    end
}
