use std::collections::HashSet;

use crate::error::{Result, ShimError};
use crate::window::{CutoutPolicy, SystemBarsBehavior};

/// Bootstrap configuration for an activity shim
///
/// This is fixed before the activity is created and is never mutated
/// afterwards; the builder style `with_*` methods consume and return the
/// config.
#[derive(Clone, Debug, PartialEq)]
pub struct ShimConfig {
    native_libraries: Vec<String>,
    preferred_refresh_rate: Option<f32>,
    cutout_policy: CutoutPolicy,
    bars_behavior: SystemBarsBehavior,
    restore_bars_on_focus_loss: bool,
    log_tag: String,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            native_libraries: vec!["main".to_string()],
            preferred_refresh_rate: Some(Self::DEFAULT_REFRESH_RATE),
            cutout_policy: CutoutPolicy::ShortEdges,
            bars_behavior: SystemBarsBehavior::ShowTransientBarsBySwipe,
            restore_bars_on_focus_loss: false,
            log_tag: "MainActivity".to_string(),
        }
    }
}

impl ShimConfig {
    pub const DEFAULT_REFRESH_RATE: f32 = 60.0;

    /// Creates a default config that declares the given native libraries
    ///
    /// Libraries are named the way `System.loadLibrary()` expects, so
    /// `"main"` rather than `"libmain.so"`, and are loaded in order.
    pub fn new<I, S>(native_libraries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            native_libraries: native_libraries.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// `None` leaves the window's preferred refresh rate untouched
    pub fn with_preferred_refresh_rate(mut self, hz: Option<f32>) -> Self {
        self.preferred_refresh_rate = hz;
        self
    }

    pub fn with_cutout_policy(mut self, policy: CutoutPolicy) -> Self {
        self.cutout_policy = policy;
        self
    }

    pub fn with_bars_behavior(mut self, behavior: SystemBarsBehavior) -> Self {
        self.bars_behavior = behavior;
        self
    }

    /// Explicitly show the system bars again when the window loses focus
    ///
    /// By default nothing is done on focus loss and the OS is left to reveal
    /// the bars itself.
    pub fn with_restore_bars_on_focus_loss(mut self, restore: bool) -> Self {
        self.restore_bars_on_focus_loss = restore;
        self
    }

    /// The tag used for Android log output
    pub fn with_log_tag(mut self, tag: impl Into<String>) -> Self {
        self.log_tag = tag.into();
        self
    }

    pub fn native_libraries(&self) -> &[String] {
        &self.native_libraries
    }

    pub fn preferred_refresh_rate(&self) -> Option<f32> {
        self.preferred_refresh_rate
    }

    pub fn cutout_policy(&self) -> CutoutPolicy {
        self.cutout_policy
    }

    pub fn bars_behavior(&self) -> SystemBarsBehavior {
        self.bars_behavior
    }

    pub fn restore_bars_on_focus_loss(&self) -> bool {
        self.restore_bars_on_focus_loss
    }

    pub fn log_tag(&self) -> &str {
        &self.log_tag
    }

    /// Checks the config is usable by a host runtime
    ///
    /// # Errors
    ///
    /// Returns [`ShimError::InvalidConfig`] if no native libraries are
    /// declared, if a library name isn't a bare `System.loadLibrary()` name
    /// or is declared twice, if the refresh rate isn't a positive finite
    /// number or if the log tag is empty or contains a NUL character.
    pub fn validate(&self) -> Result<()> {
        if self.native_libraries.is_empty() {
            return Err(ShimError::InvalidConfig(
                "At least one native library must be declared".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.native_libraries {
            if name.is_empty() {
                return Err(ShimError::InvalidConfig(
                    "Empty native library name".to_string(),
                ));
            }
            if name.contains('/') || name.starts_with("lib") || name.ends_with(".so") {
                return Err(ShimError::InvalidConfig(format!(
                    "Native library {name:?} should be a bare name, as passed to System.loadLibrary()"
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(ShimError::InvalidConfig(format!(
                    "Native library {name:?} is declared more than once"
                )));
            }
        }

        if let Some(hz) = self.preferred_refresh_rate {
            if !hz.is_finite() || hz <= 0.0 {
                return Err(ShimError::InvalidConfig(format!(
                    "Invalid preferred refresh rate: {hz}"
                )));
            }
        }

        if self.log_tag.is_empty() {
            return Err(ShimError::InvalidConfig("Empty log tag".to_string()));
        }
        if self.log_tag.contains('\0') {
            return Err(ShimError::InvalidConfig(format!(
                "Log tag {:?} contains a NUL character",
                self.log_tag
            )));
        }

        Ok(())
    }
}

/// `tag` if Android's logger can use it, otherwise the default tag
///
/// Log tags end up as C strings, so an interior NUL can't be represented.
#[cfg_attr(not(target_os = "android"), allow(dead_code))]
pub(crate) fn android_log_tag(tag: &str) -> &str {
    if tag.is_empty() || tag.contains('\0') {
        "MainActivity"
    } else {
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShimConfig::default();
        assert_eq!(config.native_libraries(), ["main".to_string()]);
        assert_eq!(config.preferred_refresh_rate(), Some(60.0));
        assert_eq!(config.cutout_policy(), CutoutPolicy::ShortEdges);
        assert_eq!(
            config.bars_behavior(),
            SystemBarsBehavior::ShowTransientBarsBySwipe
        );
        assert!(!config.restore_bars_on_focus_loss());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_library_order_is_kept() {
        let config = ShimConfig::new(["SDL2", "SDL2_mixer", "main"]);
        assert_eq!(config.native_libraries(), ["SDL2", "SDL2_mixer", "main"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_libraries() {
        for libs in [
            vec![],
            vec![""],
            vec!["libmain.so"],
            vec!["libmain"],
            vec!["main.so"],
            vec!["lib/arm64/main"],
            vec!["main", "game", "main"],
        ] {
            let config = ShimConfig::new(libs.clone());
            assert!(
                matches!(config.validate(), Err(ShimError::InvalidConfig(_))),
                "{libs:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_refresh_rate() {
        for hz in [0.0, -60.0, f32::NAN, f32::INFINITY] {
            let config = ShimConfig::default().with_preferred_refresh_rate(Some(hz));
            assert!(config.validate().is_err(), "{hz} should be rejected");
        }

        let config = ShimConfig::default().with_preferred_refresh_rate(None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_log_tag() {
        let config = ShimConfig::default().with_log_tag("");
        assert!(config.validate().is_err());

        let config = ShimConfig::default().with_log_tag("Main\0Activity");
        assert!(matches!(
            config.validate(),
            Err(ShimError::InvalidConfig(_))
        ));

        let config = ShimConfig::default().with_log_tag("GameShim");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_android_log_tag_falls_back() {
        assert_eq!(android_log_tag("GameShim"), "GameShim");
        assert_eq!(android_log_tag("Main\0Activity"), "MainActivity");
        assert_eq!(android_log_tag(""), "MainActivity");
    }
}
