//! Advisory format checks for contact fields.
//!
//! These are hints, not validation: a malformed value still propagates into
//! every output unchanged. The driver surfaces findings as warnings.

use crate::models::Record;

/// Checks the light format hints on contact fields and returns one message
/// per finding. An empty field is never a finding — absence is legal.
pub fn advisories(record: &Record) -> Vec<String> {
    let info = &record.personal_info;
    let mut findings = Vec::new();

    if !info.email.is_empty() && (!info.email.contains('@') || !info.email.contains('.')) {
        findings.push(format!(
            "email '{}' does not look like an address (expected '@' and '.')",
            info.email
        ));
    }
    if !info.linkedin.is_empty() && !info.linkedin.starts_with("http") {
        findings.push(format!(
            "linkedin '{}' is not a URL (expected an http(s) prefix)",
            info.linkedin
        ));
    }
    if !info.github.is_empty() && !info.github.starts_with("http") {
        findings.push(format!(
            "github '{}' is not a URL (expected an http(s) prefix)",
            info.github
        ));
    }

    findings
}
