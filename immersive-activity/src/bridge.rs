//! Forwarding of a Java activity's lifecycle callbacks into Rust
//!
//! The host activity (a `GameActivity`, `SDLActivity` or `NativeActivity`
//! subclass) stays in Java and declares a few `native` methods that it calls
//! after the corresponding `super` calls:
//!
//! ```java
//! public class MainActivity extends GameActivity {
//!     static { System.loadLibrary("main"); }
//!
//!     private native void nativeOnCreate();
//!     private native void nativeOnWindowFocusChanged(boolean hasFocus);
//!
//!     @Override
//!     protected void onCreate(Bundle savedInstanceState) {
//!         super.onCreate(savedInstanceState);
//!         nativeOnCreate();
//!     }
//!
//!     @Override
//!     public void onWindowFocusChanged(boolean hasFocus) {
//!         super.onWindowFocusChanged(hasFocus);
//!         nativeOnWindowFocusChanged(hasFocus);
//!     }
//! }
//! ```
//!
//! The application crate then exports the JNI symbols and forwards them to a
//! `static` [`ActivityBridge`]:
//!
//! ```ignore
//! use immersive_activity::{ActivityBridge, DisplayUiController, ShimConfig};
//! use jni::{objects::JObject, sys::jboolean, JNIEnv};
//!
//! static BRIDGE: ActivityBridge<DisplayUiController> =
//!     ActivityBridge::new(|| DisplayUiController::from_system(ShimConfig::default()));
//!
//! #[no_mangle]
//! pub extern "system" fn Java_com_example_MainActivity_nativeOnCreate(
//!     mut env: JNIEnv,
//!     activity: JObject,
//! ) {
//!     BRIDGE.on_create(&mut env, &activity);
//! }
//!
//! #[no_mangle]
//! pub extern "system" fn Java_com_example_MainActivity_nativeOnWindowFocusChanged(
//!     mut env: JNIEnv,
//!     activity: JObject,
//!     has_focus: jboolean,
//! ) {
//!     BRIDGE.on_window_focus_changed(&mut env, &activity, has_focus);
//! }
//! ```
//!
//! # Native libraries
//!
//! [`ActivityBridge::native_libraries()`] can back `SDLActivity.getLibraries()`,
//! but it is itself a `native` method that lives in one of the libraries it
//! lists. It doesn't bootstrap loading: the library exporting it must already
//! have been loaded, e.g. from a Java `static { System.loadLibrary("main"); }`
//! block, before `getLibraries()` is called. Loading an already loaded
//! library again is a no-op for the host runtime.

use std::sync::MutexGuard;

use jni::{
    objects::JObject,
    sys::{jboolean, jobjectArray, JNI_FALSE},
    JNIEnv,
};
use log::LevelFilter;

use crate::config::android_log_tag;
use crate::error::{InternalShimError, Result};
use crate::jni_utils;
use crate::jni_window::JniWindow;
use crate::lazy::LazyCallbacks;
use crate::ActivityCallbacks;

// Enough for the window, its attributes and one of its controllers or views
const LOCAL_FRAME_CAPACITY: i32 = 8;

/// Lazily created [`ActivityCallbacks`] that JNI entry points forward to
///
/// Failures are logged and never thrown back into Java.
pub struct ActivityBridge<C> {
    callbacks: LazyCallbacks<C>,
}

impl<C: ActivityCallbacks + Send> ActivityBridge<C> {
    pub const fn new(init: fn() -> C) -> Self {
        Self {
            callbacks: LazyCallbacks::new(init),
        }
    }

    /// Locks the callbacks; logging is set up before the first lock returns
    fn callbacks(&self) -> MutexGuard<'_, C> {
        self.callbacks
            .lock_or_init(|callbacks| init_logging(callbacks.log_tag()))
    }

    fn with_window<F>(
        mut callbacks: MutexGuard<'_, C>,
        env: &mut JNIEnv<'_>,
        activity: &JObject<'_>,
        what: &str,
        f: F,
    ) where
        F: FnOnce(&mut C, &mut JniWindow<'_, '_>) -> Result<()>,
    {
        let result: Result<()> =
            match env.with_local_frame::<_, _, InternalShimError>(LOCAL_FRAME_CAPACITY, |env| {
                Ok(JniWindow::new(env, activity)
                    .and_then(|mut window| f(&mut *callbacks, &mut window)))
            }) {
                Ok(result) => result,
                Err(err) => Err(err.into()),
            };
        if let Err(err) = result {
            log::error!("{what} failed: {err}");
        }
    }

    /// Forwards `Activity.onCreate()`
    pub fn on_create(&self, env: &mut JNIEnv<'_>, activity: &JObject<'_>) {
        let callbacks = self.callbacks();
        log::trace!("onCreate");
        Self::with_window(callbacks, env, activity, "onCreate", |callbacks, window| {
            callbacks.on_create(window)
        });
    }

    /// Forwards `Activity.onWindowFocusChanged()`
    pub fn on_window_focus_changed(
        &self,
        env: &mut JNIEnv<'_>,
        activity: &JObject<'_>,
        has_focus: jboolean,
    ) {
        let has_focus = has_focus != JNI_FALSE;
        let callbacks = self.callbacks();
        log::trace!("onWindowFocusChanged: {has_focus}");
        Self::with_window(
            callbacks,
            env,
            activity,
            "onWindowFocusChanged",
            |callbacks, window| callbacks.on_window_focus_changed(window, has_focus),
        );
    }

    /// Returns the declared native libraries as a Java `String[]`, or `null`
    /// if the array couldn't be created
    ///
    /// This is the shape `SDLActivity.getLibraries()` expects; see the
    /// [module docs](self#native-libraries) for when it can be called.
    pub fn native_libraries(&self, env: &mut JNIEnv<'_>) -> jobjectArray {
        let callbacks = self.callbacks();
        match jni_utils::new_string_array(env, callbacks.native_libraries()) {
            Ok(array) => array.into_raw(),
            Err(err) => {
                log::error!("Failed to build native library array: {err}");
                std::ptr::null_mut()
            }
        }
    }
}

fn init_logging(tag: &str) {
    #[cfg(debug_assertions)]
    let level = LevelFilter::Trace;
    #[cfg(not(debug_assertions))]
    let level = LevelFilter::Info;

    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(level)
            .with_tag(android_log_tag(tag)),
    );
}
