use crate::error::{Result, ShimError};

/// The tier of window configuration features available on the running OS
///
/// Tiers are ordered, so a feature gated on a tier is available for every
/// tier that compares greater or equal.
///
/// The level is resolved once, from the SDK version, and then stays fixed for
/// the lifetime of a [`DisplayUiController`](crate::DisplayUiController).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CapabilityLevel {
    /// Neither display cutout modes nor the insets controller are available,
    /// system bars can only be hidden via `View.setSystemUiVisibility()`
    Legacy,

    /// `WindowManager.LayoutParams.layoutInDisplayCutoutMode` is available
    /// (Android P)
    CutoutModes,

    /// `Window.getInsetsController()` and `Window.setDecorFitsSystemWindows()`
    /// are available (Android R)
    InsetsController,
}

impl CapabilityLevel {
    /// [`Build.VERSION_CODES.P`](https://developer.android.com/reference/android/os/Build.VERSION_CODES#P)
    pub const CUTOUT_MODES_SDK: i32 = 28;

    /// [`Build.VERSION_CODES.R`](https://developer.android.com/reference/android/os/Build.VERSION_CODES#R)
    pub const INSETS_CONTROLLER_SDK: i32 = 30;

    /// Maps an SDK version (`Build.VERSION.SDK_INT`) to the highest tier it
    /// supports
    pub fn from_sdk_version(sdk_version: i32) -> Self {
        if sdk_version >= Self::INSETS_CONTROLLER_SDK {
            CapabilityLevel::InsetsController
        } else if sdk_version >= Self::CUTOUT_MODES_SDK {
            CapabilityLevel::CutoutModes
        } else {
            CapabilityLevel::Legacy
        }
    }

    /// Resolves the level of the running OS from its SDK version
    ///
    /// # Errors
    ///
    /// Returns [`ShimError::SdkVersion`] if the `ro.build.version.sdk` system
    /// property can't be read or parsed, or when not running on Android.
    pub fn detect() -> Result<Self> {
        sdk_version().map(Self::from_sdk_version)
    }

    pub fn supports_cutout_modes(self) -> bool {
        self >= CapabilityLevel::CutoutModes
    }

    pub fn supports_insets_controller(self) -> bool {
        self >= CapabilityLevel::InsetsController
    }
}

/// The user-visible SDK version of the framework
///
/// Also referred to as [`Build.VERSION_CODES`](https://developer.android.com/reference/android/os/Build.VERSION_CODES)
#[cfg(target_os = "android")]
pub fn sdk_version() -> Result<i32> {
    let mut prop = android_properties::getprop("ro.build.version.sdk");
    match prop.value() {
        Some(val) => parse_sdk_version(&val),
        None => Err(ShimError::SdkVersion(
            "Couldn't read ro.build.version.sdk system property".to_string(),
        )),
    }
}

#[cfg_attr(not(any(target_os = "android", test)), allow(dead_code))]
fn parse_sdk_version(val: &str) -> Result<i32> {
    val.trim().parse::<i32>().map_err(|err| {
        ShimError::SdkVersion(format!(
            "Failed to parse ro.build.version.sdk property {val:?}: {err}"
        ))
    })
}

/// The user-visible SDK version of the framework
///
/// There is no SDK version to query when not running on Android so this
/// always fails.
#[cfg(not(target_os = "android"))]
pub fn sdk_version() -> Result<i32> {
    Err(ShimError::SdkVersion("Not running on Android".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdk_version_boundaries() {
        assert_eq!(CapabilityLevel::from_sdk_version(21), CapabilityLevel::Legacy);
        assert_eq!(CapabilityLevel::from_sdk_version(27), CapabilityLevel::Legacy);
        assert_eq!(
            CapabilityLevel::from_sdk_version(28),
            CapabilityLevel::CutoutModes
        );
        assert_eq!(
            CapabilityLevel::from_sdk_version(29),
            CapabilityLevel::CutoutModes
        );
        assert_eq!(
            CapabilityLevel::from_sdk_version(30),
            CapabilityLevel::InsetsController
        );
        assert_eq!(
            CapabilityLevel::from_sdk_version(34),
            CapabilityLevel::InsetsController
        );
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(CapabilityLevel::Legacy < CapabilityLevel::CutoutModes);
        assert!(CapabilityLevel::CutoutModes < CapabilityLevel::InsetsController);

        assert!(!CapabilityLevel::Legacy.supports_cutout_modes());
        assert!(CapabilityLevel::CutoutModes.supports_cutout_modes());
        assert!(!CapabilityLevel::CutoutModes.supports_insets_controller());
        assert!(CapabilityLevel::InsetsController.supports_cutout_modes());
        assert!(CapabilityLevel::InsetsController.supports_insets_controller());
    }

    #[test]
    fn test_parse_sdk_version() {
        assert_eq!(parse_sdk_version("34").ok(), Some(34));
        assert_eq!(parse_sdk_version("30\n").ok(), Some(30));
        assert!(matches!(
            parse_sdk_version("UpsideDownCake"),
            Err(ShimError::SdkVersion(_))
        ));
        assert!(parse_sdk_version("").is_err());
    }

    #[cfg(not(target_os = "android"))]
    #[test]
    fn test_detect_fails_off_device() {
        assert!(matches!(
            CapabilityLevel::detect(),
            Err(ShimError::SdkVersion(_))
        ));
    }
}
