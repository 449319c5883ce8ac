//! Flat text rendering of extracted declarations.

use crate::analysis::record::{DeclarationKind, DeclarationRecord};

/// Render records in the order given. Classes become
/// `class Name:\n    description`, functions their signature followed by the
/// description; every entry ends with a blank line.
pub fn serialize(records: &[DeclarationRecord]) -> String {
    let mut output = String::new();

    for record in records {
        match record.kind {
            DeclarationKind::Class => {
                output.push_str("class ");
                output.push_str(&record.name);
                output.push_str(":\n    ");
                output.push_str(&record.description);
            }
            DeclarationKind::Function => {
                output.push_str(record.signature.as_deref().unwrap_or(&record.name));
                output.push('\n');
                output.push_str(&record.description);
            }
        }
        output.push_str("\n\n");
    }

    output
}
