//! Window setup for Android activities that host a native engine
//!
//! A [`DisplayUiController`] reacts to an activity being created and to its
//! window gaining or losing focus by configuring the window for fullscreen
//! rendering: content is allowed into display cutouts, a preferred refresh
//! rate is requested and the system bars are hidden (immersive mode).
//!
//! Which Android APIs are used depends on the [`CapabilityLevel`] of the
//! running OS, resolved once from its SDK version.
//!
//! The controller itself only talks to a [`HostWindow`], so it can be driven
//! and tested anywhere. On Android, `JniWindow` implements [`HostWindow`] on
//! top of `android.view.Window` and `ActivityBridge` connects the `native`
//! methods of a Java activity subclass to a set of [`ActivityCallbacks`].

mod capability;
pub use capability::{sdk_version, CapabilityLevel};

mod config;
pub use config::ShimConfig;

mod controller;
pub use controller::{DisplayUiController, ImmersiveState};

mod error;
pub use error::{Result, ShimError};

mod java;
mod lazy;

mod window;
pub use window::{
    CutoutPolicy, HostWindow, InsetsTypes, SystemBarsBehavior, SystemUiFlags, WindowCommand,
};

#[cfg(target_os = "android")]
mod jni_utils;

#[cfg(target_os = "android")]
mod jni_window;
#[cfg(target_os = "android")]
pub use jni_window::JniWindow;

#[cfg(target_os = "android")]
mod bridge;
#[cfg(target_os = "android")]
pub use bridge::ActivityBridge;

/// The lifecycle callbacks a host activity runtime invokes
///
/// The host activity class itself is owned by the engine runtime; an
/// implementation of this trait only ever sees the callbacks it forwards.
pub trait ActivityCallbacks {
    /// Called once from `Activity.onCreate()`, after the host's own setup
    fn on_create(&mut self, window: &mut dyn HostWindow) -> Result<()>;

    /// Called from `Activity.onWindowFocusChanged()`
    fn on_window_focus_changed(
        &mut self,
        window: &mut dyn HostWindow,
        has_focus: bool,
    ) -> Result<()>;

    /// The native libraries the host runtime should load at startup, in
    /// load order
    fn native_libraries(&self) -> &[String];

    /// The tag for Android log output
    fn log_tag(&self) -> &str {
        "MainActivity"
    }
}

#[test]
fn test_controller_is_send_sync() {
    fn needs_send_sync<T: Send + Sync>() {}
    needs_send_sync::<DisplayUiController>();
    needs_send_sync::<ShimConfig>();
}
