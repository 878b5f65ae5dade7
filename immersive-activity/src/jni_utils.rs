//! The JNI calls we make in this crate run inside the activity's `native`
//! callbacks, and a Java exception that is left pending would be thrown from
//! `onCreate()` or `onWindowFocusChanged()` as soon as we return to Java.
//!
//! These utilities help us check + clear exceptions and map them into Rust Errors.

use jni::{
    objects::{JObject, JObjectArray, JString},
    JNIEnv,
};

use crate::error::{InternalResult, InternalShimError};
use crate::java;

/// Use with `.map_err()` to map `jni::errors::Error::JavaException` into a
/// richer error based on the actual contents of the `JThrowable`
///
/// (The `jni` crate doesn't do that automatically since it's more
/// common to let the exception get thrown when returning to Java)
///
/// This will also clear the exception
pub(crate) fn clear_and_map_exception_to_err(
    env: &mut JNIEnv<'_>,
    err: jni::errors::Error,
) -> InternalShimError {
    if matches!(err, jni::errors::Error::JavaException) {
        let result = env.with_local_frame::<_, _, InternalShimError>(5, |env| {
            let e = env.exception_occurred()?;
            env.exception_clear()?;
            if e.is_null() {
                return Ok("UNKNOWN (no pending exception)".to_string());
            }

            let msg = env
                .call_method(
                    &e,
                    java::THROWABLE_GET_MESSAGE.name,
                    java::THROWABLE_GET_MESSAGE.sig,
                    &[],
                )?
                .l()?;
            if msg.is_null() {
                let class = env.get_object_class(&e)?;
                let name = env
                    .call_method(
                        &class,
                        java::CLASS_GET_NAME.name,
                        java::CLASS_GET_NAME.sig,
                        &[],
                    )?
                    .l()?;
                let name: String = env.get_string(&JString::from(name))?.into();
                return Ok(name);
            }
            let msg: String = env.get_string(&JString::from(msg))?.into();

            Ok(msg)
        });

        match result {
            Ok(msg) => InternalShimError::JniException(msg),
            Err(err) => InternalShimError::JniException(format!(
                "UNKNOWN (Failed to query JThrowable: {err:?})"
            )),
        }
    } else {
        err.into()
    }
}

/// Builds a Java `String[]` holding `values`, in order
pub(crate) fn new_string_array<'local>(
    env: &mut JNIEnv<'local>,
    values: &[String],
) -> InternalResult<JObjectArray<'local>> {
    let len = i32::try_from(values.len())
        .map_err(|_| InternalShimError::ArrayTooLarge(values.len()))?;
    let array = env
        .new_object_array(len, java::STRING_CLASS, JObject::null())
        .map_err(|err| clear_and_map_exception_to_err(env, err))?;

    for (i, value) in values.iter().enumerate() {
        let element = env
            .new_string(value)
            .map_err(|err| clear_and_map_exception_to_err(env, err))?;
        env.set_object_array_element(&array, i as i32, &element)
            .map_err(|err| clear_and_map_exception_to_err(env, err))?;
        env.delete_local_ref(element)?;
    }

    Ok(array)
}
