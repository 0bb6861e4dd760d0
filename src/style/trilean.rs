//! Three-valued flags for style attributes.

/// A boolean style attribute that may also be left unspecified.
///
/// `Pass` defers to inheritance, so "not mentioned" stays distinguishable
/// from "explicitly off".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Trilean {
    /// No opinion; inherit or fall back to the renderer's default.
    #[default]
    Pass,
    /// Explicitly on.
    Yes,
    /// Explicitly off.
    No,
}

impl Trilean {
    /// Renders the attribute token for `base`: `"bold"`, `"nobold"` or `""`.
    pub fn prefix(self, base: &str) -> String {
        match self {
            Trilean::Yes => base.to_string(),
            Trilean::No => format!("no{}", base),
            Trilean::Pass => String::new(),
        }
    }

    /// Returns true for [`Trilean::Pass`].
    pub fn is_pass(self) -> bool {
        self == Trilean::Pass
    }
}

impl std::fmt::Display for Trilean {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trilean::Pass => write!(f, "Pass"),
            Trilean::Yes => write!(f, "Yes"),
            Trilean::No => write!(f, "No"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(Trilean::Yes.prefix("bold"), "bold");
        assert_eq!(Trilean::No.prefix("bold"), "nobold");
        assert_eq!(Trilean::Pass.prefix("bold"), "");
    }

    #[test]
    fn test_default_is_pass() {
        assert!(Trilean::default().is_pass());
        assert!(!Trilean::No.is_pass());
    }

    #[test]
    fn test_display() {
        assert_eq!(Trilean::Pass.to_string(), "Pass");
        assert_eq!(Trilean::Yes.to_string(), "Yes");
        assert_eq!(Trilean::No.to_string(), "No");
    }
}
