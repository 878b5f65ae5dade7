//! The vocabulary of window configuration calls made on behalf of an activity
//!
//! All values here mirror Android SDK integer constants so they can be passed
//! through JNI unchanged.

use bitflags::bitflags;

use crate::error::Result;

/// Whether window content may extend into display cutout (notch) areas
///
/// This implements `Into<i32>` and `TryFrom<i32>` for converting to/from
/// [`WindowManager.LayoutParams.layoutInDisplayCutoutMode`](https://developer.android.com/reference/android/view/WindowManager.LayoutParams#layoutInDisplayCutoutMode)
/// values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, num_enum::TryFromPrimitive, num_enum::IntoPrimitive,
)]
#[repr(i32)]
pub enum CutoutPolicy {
    /// `LAYOUT_IN_DISPLAY_CUTOUT_MODE_DEFAULT`: leave the OS default in place
    Ignore = 0,

    /// `LAYOUT_IN_DISPLAY_CUTOUT_MODE_SHORT_EDGES`: content extends into
    /// cutouts on the short edges of the display
    ShortEdges = 1,
}

/// How hidden system bars can be revealed again by the user
///
/// See [`WindowInsetsController.setSystemBarsBehavior()`](https://developer.android.com/reference/android/view/WindowInsetsController#setSystemBarsBehavior(int))
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, num_enum::TryFromPrimitive, num_enum::IntoPrimitive,
)]
#[repr(i32)]
pub enum SystemBarsBehavior {
    ShowBarsByTouch = 0,
    ShowBarsBySwipe = 1,

    /// Bars appear temporarily over the content after a swipe from the
    /// edge and hide themselves again
    ShowTransientBarsBySwipe = 2,
}

bitflags! {
    /// Inset type classes, as returned by `WindowInsets.Type`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InsetsTypes: i32 {
        const STATUS_BARS = 1 << 0;
        const NAVIGATION_BARS = 1 << 1;
    }
}

impl InsetsTypes {
    pub fn system_bars() -> Self {
        InsetsTypes::STATUS_BARS | InsetsTypes::NAVIGATION_BARS
    }
}

bitflags! {
    /// Legacy `View.SYSTEM_UI_FLAG_*` visibility flags for the decor view
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SystemUiFlags: i32 {
        const HIDE_NAVIGATION = 0x00000002;
        const FULLSCREEN = 0x00000004;
        const LAYOUT_STABLE = 0x00000100;
        const LAYOUT_HIDE_NAVIGATION = 0x00000200;
        const LAYOUT_FULLSCREEN = 0x00000400;
        const IMMERSIVE = 0x00000800;
        const IMMERSIVE_STICKY = 0x00001000;
    }
}

impl SystemUiFlags {
    /// Sticky immersive fullscreen, with the layout laid out as if the bars
    /// were hidden
    pub fn immersive_sticky() -> Self {
        SystemUiFlags::IMMERSIVE_STICKY
            | SystemUiFlags::LAYOUT_STABLE
            | SystemUiFlags::LAYOUT_HIDE_NAVIGATION
            | SystemUiFlags::LAYOUT_FULLSCREEN
            | SystemUiFlags::HIDE_NAVIGATION
            | SystemUiFlags::FULLSCREEN
    }
}

/// A single configuration call made against an activity's window
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowCommand {
    SetCutoutMode(CutoutPolicy),
    SetPreferredRefreshRate(f32),
    SetDecorFitsSystemWindows(bool),
    HideSystemBars(InsetsTypes),
    ShowSystemBars(InsetsTypes),
    SetSystemBarsBehavior(SystemBarsBehavior),
    SetSystemUiVisibility(SystemUiFlags),
}

impl WindowCommand {
    pub fn apply<W: HostWindow + ?Sized>(&self, window: &mut W) -> Result<()> {
        match *self {
            WindowCommand::SetCutoutMode(policy) => window.set_cutout_mode(policy),
            WindowCommand::SetPreferredRefreshRate(hz) => window.set_preferred_refresh_rate(hz),
            WindowCommand::SetDecorFitsSystemWindows(fits) => {
                window.set_decor_fits_system_windows(fits)
            }
            WindowCommand::HideSystemBars(types) => window.hide_system_bars(types),
            WindowCommand::ShowSystemBars(types) => window.show_system_bars(types),
            WindowCommand::SetSystemBarsBehavior(behavior) => {
                window.set_system_bars_behavior(behavior)
            }
            WindowCommand::SetSystemUiVisibility(flags) => window.set_system_ui_visibility(flags),
        }
    }
}

/// The OS window (and its decor view) of the current activity
///
/// Implementations are expected to forward each call to the corresponding
/// Android API without any capability checks of their own; callers only
/// issue calls that the running OS supports.
pub trait HostWindow {
    /// Mutates `WindowManager.LayoutParams.layoutInDisplayCutoutMode` in place
    fn set_cutout_mode(&mut self, policy: CutoutPolicy) -> Result<()>;

    /// Mutates `WindowManager.LayoutParams.preferredRefreshRate` in place
    fn set_preferred_refresh_rate(&mut self, hz: f32) -> Result<()>;

    fn set_decor_fits_system_windows(&mut self, decor_fits: bool) -> Result<()>;

    fn hide_system_bars(&mut self, types: InsetsTypes) -> Result<()>;

    fn show_system_bars(&mut self, types: InsetsTypes) -> Result<()>;

    fn set_system_bars_behavior(&mut self, behavior: SystemBarsBehavior) -> Result<()>;

    /// Calls the (deprecated since Android R) `View.setSystemUiVisibility()`
    /// on the decor view
    fn set_system_ui_visibility(&mut self, flags: SystemUiFlags) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_constant_values() {
        assert_eq!(i32::from(CutoutPolicy::Ignore), 0);
        assert_eq!(i32::from(CutoutPolicy::ShortEdges), 1);
        assert_eq!(i32::from(SystemBarsBehavior::ShowTransientBarsBySwipe), 2);
        assert_eq!(
            SystemBarsBehavior::try_from(1).ok(),
            Some(SystemBarsBehavior::ShowBarsBySwipe)
        );
        assert!(CutoutPolicy::try_from(7).is_err());

        assert_eq!(InsetsTypes::system_bars().bits(), 0b11);
        assert_eq!(SystemUiFlags::immersive_sticky().bits(), 0x1706);
        assert!(!SystemUiFlags::immersive_sticky().contains(SystemUiFlags::IMMERSIVE));
    }
}
