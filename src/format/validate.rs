/* src/format/validate.rs */

use super::scan::reads_as_header;
use super::{FormatError, NameKind, SEPARATOR};

fn invalid(kind: NameKind, name: &str, reason: &'static str) -> FormatError {
	FormatError::InvalidName {
		kind,
		name: name.to_string(),
		reason,
	}
}

fn check_line(kind: NameKind, name: &str) -> Result<(), FormatError> {
	if name.is_empty() {
		return Err(invalid(kind, name, "must not be empty"));
	}
	if name.contains(['\n', '\r']) {
		return Err(invalid(kind, name, "must not contain line breaks"));
	}
	if name.trim() != name {
		return Err(invalid(kind, name, "must not start or end with whitespace"));
	}
	Ok(())
}

/// Checks that `name` can be written as a holder header and read back.
pub fn validate_holder_name(name: &str) -> Result<(), FormatError> {
	check_line(NameKind::Holder, name)?;
	if name.contains(['{', '}']) {
		return Err(invalid(NameKind::Holder, name, "must not contain braces"));
	}
	// `Foo :` renders as `Foo : {`, which splits as a property line.
	if format!("{name} {{").contains(SEPARATOR) {
		return Err(invalid(NameKind::Holder, name, "must not contain \" : \""));
	}
	if !reads_as_header(name) {
		return Err(invalid(NameKind::Holder, name, "does not read back as a holder header"));
	}
	Ok(())
}

/// Checks that `key` survives a split on the first `" : "` of its line.
pub fn validate_key(key: &str) -> Result<(), FormatError> {
	check_line(NameKind::Key, key)?;
	let probe = format!("{key}{SEPARATOR}");
	if probe.find(SEPARATOR) != Some(key.len()) {
		return Err(invalid(NameKind::Key, key, "must not contain \" : \""));
	}
	Ok(())
}

/// Checks that `value` is not altered by whole-line trimming.
pub fn validate_value(value: &str) -> Result<(), FormatError> {
	check_line(NameKind::Value, value)
}
