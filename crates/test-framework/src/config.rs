//! Harness configuration, read from the environment.

use core::fmt;

use log::warn;

const COLOR_GREEN: &str = "\x1b[32m";
const COLOR_RED: &str = "\x1b[31m";
const COLOR_RESET: &str = "\x1b[0m";

/// Output settings for a test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Wrap the `[OK ]` and `[FAIL]` tags in ANSI color codes
    pub color: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl HarnessConfig {
    /// Build the configuration from the process environment.
    ///
    /// | Variable | Effect |
    /// |----------|--------|
    /// | `NO_COLOR` (non-empty) | disable color |
    /// | `HARNESS_COLOR=always\|never\|auto` | force color on / off, or keep the default |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if lookup("NO_COLOR").is_some_and(|value| !value.is_empty()) {
            config.color = false;
        }

        match lookup("HARNESS_COLOR").as_deref() {
            Some("always") => config.color = true,
            Some("never") => config.color = false,
            Some("auto") | None => {}
            Some(other) => warn!("Ignoring unknown HARNESS_COLOR value {:?}", other),
        }

        config
    }

    pub const fn run_tag(&self) -> Tag {
        Tag {
            label: "[RUN]",
            color: None,
        }
    }

    pub const fn ok_tag(&self) -> Tag {
        Tag {
            label: "[OK ]",
            color: if self.color { Some(COLOR_GREEN) } else { None },
        }
    }

    pub const fn fail_tag(&self) -> Tag {
        Tag {
            label: "[FAIL]",
            color: if self.color { Some(COLOR_RED) } else { None },
        }
    }
}

/// A result marker, optionally colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    label: &'static str,
    color: Option<&'static str>,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{}{}{}", color, self.label, COLOR_RESET),
            None => f.write_str(self.label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_color_on_by_default() {
        let config = HarnessConfig::from_lookup(lookup(&[]));
        assert!(config.color);
        assert_eq!(config.ok_tag().to_string(), "\x1b[32m[OK ]\x1b[0m");
        assert_eq!(config.fail_tag().to_string(), "\x1b[31m[FAIL]\x1b[0m");
    }

    #[test]
    fn test_no_color_disables_tags() {
        let config = HarnessConfig::from_lookup(lookup(&[("NO_COLOR", "1")]));
        assert!(!config.color);
        assert_eq!(config.ok_tag().to_string(), "[OK ]");
        assert_eq!(config.fail_tag().to_string(), "[FAIL]");
    }

    #[test]
    fn test_empty_no_color_is_ignored() {
        let config = HarnessConfig::from_lookup(lookup(&[("NO_COLOR", "")]));
        assert!(config.color);
    }

    #[test]
    fn test_harness_color_overrides_no_color() {
        let config =
            HarnessConfig::from_lookup(lookup(&[("NO_COLOR", "1"), ("HARNESS_COLOR", "always")]));
        assert!(config.color);

        let config = HarnessConfig::from_lookup(lookup(&[("HARNESS_COLOR", "never")]));
        assert!(!config.color);

        let config = HarnessConfig::from_lookup(lookup(&[("HARNESS_COLOR", "sometimes")]));
        assert!(config.color);
    }

    #[test]
    fn test_run_tag_is_never_colored() {
        assert_eq!(HarnessConfig::default().run_tag().to_string(), "[RUN]");
    }
}
