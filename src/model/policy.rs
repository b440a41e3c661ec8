/* src/model/policy.rs */

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How two names are compared during lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CaseMode {
	/// Names must be byte-for-byte equal.
	#[default]
	Sensitive,
	/// Names are equal after lowercasing both sides.
	Insensitive,
}

impl CaseMode {
	/// Returns true if `a` and `b` name the same thing under this mode.
	pub fn matches(self, a: &str, b: &str) -> bool {
		match self {
			Self::Sensitive => a == b,
			Self::Insensitive => {
				if a.is_ascii() && b.is_ascii() {
					a.eq_ignore_ascii_case(b)
				} else {
					a.to_lowercase() == b.to_lowercase()
				}
			}
		}
	}
}

/// Comparison rules for holder names and property keys.
///
/// The default keeps holder lookup case-insensitive and key lookup
/// case-sensitive. Set both fields to the same [`CaseMode`] for a uniform
/// policy across the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchPolicy {
	/// Applied when looking up holders by name.
	pub holder: CaseMode,
	/// Applied when looking up keys inside a holder.
	pub key: CaseMode,
}

impl MatchPolicy {
	/// Same mode for holders and keys.
	pub const fn uniform(mode: CaseMode) -> Self {
		Self {
			holder: mode,
			key: mode,
		}
	}
}

impl Default for MatchPolicy {
	fn default() -> Self {
		Self {
			holder: CaseMode::Insensitive,
			key: CaseMode::Sensitive,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sensitive_is_exact() {
		assert!(CaseMode::Sensitive.matches("Theme", "Theme"));
		assert!(!CaseMode::Sensitive.matches("Theme", "theme"));
	}

	#[test]
	fn test_insensitive_folds_case() {
		assert!(CaseMode::Insensitive.matches("UserSettings", "usersettings"));
		assert!(CaseMode::Insensitive.matches("ÄRGER", "ärger"));
		assert!(!CaseMode::Insensitive.matches("User", "Users"));
	}

	#[test]
	fn test_default_policy_is_asymmetric() {
		let policy = MatchPolicy::default();
		assert_eq!(policy.holder, CaseMode::Insensitive);
		assert_eq!(policy.key, CaseMode::Sensitive);
		assert_eq!(
			MatchPolicy::uniform(CaseMode::Sensitive).holder,
			CaseMode::Sensitive
		);
	}
}
