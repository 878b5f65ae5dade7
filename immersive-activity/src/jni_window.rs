use jni::{
    objects::{JObject, JValue},
    sys::{JNI_FALSE, JNI_TRUE},
    JNIEnv,
};

use crate::error::{InternalResult, InternalShimError, Result};
use crate::java::{self, JavaField, JavaMethod};
use crate::jni_utils::clear_and_map_exception_to_err;
use crate::window::{CutoutPolicy, HostWindow, InsetsTypes, SystemBarsBehavior, SystemUiFlags};

fn call_void(
    env: &mut JNIEnv<'_>,
    target: &JObject<'_>,
    method: JavaMethod,
    args: &[JValue<'_, '_>],
) -> InternalResult<()> {
    env.call_method(target, method.name, method.sig, args)
        .and_then(|value| value.v())
        .map_err(|err| clear_and_map_exception_to_err(env, err))
}

fn call_object<'local>(
    env: &mut JNIEnv<'local>,
    target: &JObject<'_>,
    method: JavaMethod,
) -> InternalResult<JObject<'local>> {
    env.call_method(target, method.name, method.sig, &[])
        .and_then(|value| value.l())
        .map_err(|err| clear_and_map_exception_to_err(env, err))
}

/// A [`HostWindow`] backed by the `android.view.Window` of a Java activity
///
/// This must only be used on the activity's UI thread, typically from within
/// one of its `native` lifecycle callbacks.
pub struct JniWindow<'a, 'local> {
    env: &'a mut JNIEnv<'local>,
    window: JObject<'local>,
}

impl<'a, 'local> JniWindow<'a, 'local> {
    /// Looks up the window of the given `android.app.Activity`
    pub fn new(env: &'a mut JNIEnv<'local>, activity: &JObject<'_>) -> Result<Self> {
        let window = call_object(env, activity, java::ACTIVITY_GET_WINDOW)?;
        Ok(Self { env, window })
    }

    /// Mutates a field of the window's `WindowManager.LayoutParams`
    ///
    /// `getAttributes()` returns the live object the window uses, so the
    /// field doesn't need to be written back with `setAttributes()`.
    fn set_attribute(&mut self, field: JavaField, value: JValue<'_, '_>) -> InternalResult<()> {
        let attrs = call_object(self.env, &self.window, java::WINDOW_GET_ATTRIBUTES)?;
        let result = self
            .env
            .set_field(&attrs, field.name, field.sig, value)
            .map_err(|err| clear_and_map_exception_to_err(self.env, err));
        self.env.delete_local_ref(attrs)?;
        result
    }

    /// Calls a `void (int)` method on the window's `WindowInsetsController`
    ///
    /// Like `Window.getInsetsController()` itself, this quietly does nothing
    /// if the window has no controller.
    fn call_insets_controller(&mut self, method: JavaMethod, arg: i32) -> InternalResult<()> {
        let controller = call_object(self.env, &self.window, java::WINDOW_GET_INSETS_CONTROLLER)?;
        if controller.is_null() {
            log::debug!(
                "Window has no WindowInsetsController, skipping {}()",
                method.name
            );
            return Ok(());
        }
        let result = call_void(self.env, &controller, method, &[JValue::Int(arg)]);
        self.env.delete_local_ref(controller)?;
        result
    }
}

impl HostWindow for JniWindow<'_, '_> {
    fn set_cutout_mode(&mut self, policy: CutoutPolicy) -> Result<()> {
        let mode: i32 = policy.into();
        self.set_attribute(java::LAYOUT_PARAMS_CUTOUT_MODE, JValue::Int(mode))?;
        log::debug!("Display cutout mode set to {policy:?}");
        Ok(())
    }

    fn set_preferred_refresh_rate(&mut self, hz: f32) -> Result<()> {
        self.set_attribute(java::LAYOUT_PARAMS_PREFERRED_REFRESH_RATE, JValue::Float(hz))?;
        log::debug!("Preferred refresh rate set to {hz}Hz");
        Ok(())
    }

    fn set_decor_fits_system_windows(&mut self, decor_fits: bool) -> Result<()> {
        let decor_fits = if decor_fits { JNI_TRUE } else { JNI_FALSE };
        call_void(
            self.env,
            &self.window,
            java::WINDOW_SET_DECOR_FITS_SYSTEM_WINDOWS,
            &[JValue::Bool(decor_fits)],
        )?;
        Ok(())
    }

    fn hide_system_bars(&mut self, types: InsetsTypes) -> Result<()> {
        self.call_insets_controller(java::INSETS_CONTROLLER_HIDE, types.bits())?;
        Ok(())
    }

    fn show_system_bars(&mut self, types: InsetsTypes) -> Result<()> {
        self.call_insets_controller(java::INSETS_CONTROLLER_SHOW, types.bits())?;
        Ok(())
    }

    fn set_system_bars_behavior(&mut self, behavior: SystemBarsBehavior) -> Result<()> {
        self.call_insets_controller(
            java::INSETS_CONTROLLER_SET_SYSTEM_BARS_BEHAVIOR,
            behavior.into(),
        )?;
        Ok(())
    }

    fn set_system_ui_visibility(&mut self, flags: SystemUiFlags) -> Result<()> {
        let decor_view = call_object(self.env, &self.window, java::WINDOW_GET_DECOR_VIEW)?;
        let result = call_void(
            self.env,
            &decor_view,
            java::VIEW_SET_SYSTEM_UI_VISIBILITY,
            &[JValue::Int(flags.bits())],
        );
        self.env
            .delete_local_ref(decor_view)
            .map_err(InternalShimError::from)?;
        result?;
        Ok(())
    }
}

