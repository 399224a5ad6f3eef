//! Message catalog: stable finding codes resolved to display text.
//!
//! Codes and positional `{0}`/`{1}` arguments mirror a properties-style
//! catalog; unknown codes fall back to the code itself so a missing entry
//! is visible rather than silent.

use crate::finding::Finding;

fn template(code: &str) -> &'static str {
    match code {
        "required" => "Item name is required.",
        "range" => "Price must be between {0} and {1}.",
        "max" => "A maximum of {0} units is allowed.",
        "totalPriceMin" => "Price times quantity must be at least {0} (currently {1}).",
        "typeMismatch" => "Please enter a number.",
        _ => "",
    }
}

/// Resolve a finding to user-facing text.
pub fn resolve(finding: &Finding) -> String {
    let tpl = template(finding.code);
    if tpl.is_empty() {
        return finding.code.to_string();
    }

    let mut message = tpl.to_string();
    for (i, arg) in finding.args.iter().enumerate() {
        message = message.replace(&format!("{{{i}}}"), &arg.to_string());
    }
    message
}
