use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShimError {
    #[error("Java VM or JNI error, including Java exceptions: {0}")]
    JavaError(String),

    #[error("Unable to determine the Android SDK version: {0}")]
    SdkVersion(String),

    #[error("Invalid shim configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ShimError>;

// XXX: we don't want to expose jni-rs in the public API
// so the JNI layer uses an internal error type that is
// stripped down to a `ShimError` at the crate boundary.
//
// This way we avoid exposing a public trait implementation for
// `From<jni::errors::Error>`
#[cfg(target_os = "android")]
#[derive(Error, Debug)]
pub(crate) enum InternalShimError {
    #[error("A JNI error")]
    JniError(jni::errors::JniError),
    #[error("A Java Exception was thrown via a JNI method call")]
    JniException(String),
    #[error("A Java VM error")]
    JvmError(jni::errors::Error),
    #[error("{0} elements don't fit in a Java array")]
    ArrayTooLarge(usize),
}

#[cfg(target_os = "android")]
pub(crate) type InternalResult<T> = std::result::Result<T, InternalShimError>;

#[cfg(target_os = "android")]
impl From<jni::errors::Error> for InternalShimError {
    fn from(value: jni::errors::Error) -> Self {
        InternalShimError::JvmError(value)
    }
}
#[cfg(target_os = "android")]
impl From<jni::errors::JniError> for InternalShimError {
    fn from(value: jni::errors::JniError) -> Self {
        InternalShimError::JniError(value)
    }
}

#[cfg(target_os = "android")]
impl From<InternalShimError> for ShimError {
    fn from(value: InternalShimError) -> Self {
        match value {
            InternalShimError::JniError(err) => ShimError::JavaError(err.to_string()),
            InternalShimError::JniException(msg) => ShimError::JavaError(msg),
            InternalShimError::JvmError(err) => ShimError::JavaError(err.to_string()),
            InternalShimError::ArrayTooLarge(len) => {
                ShimError::JavaError(format!("{len} elements don't fit in a Java array"))
            }
        }
    }
}

#[cfg(all(test, target_os = "android"))]
mod tests {
    use super::*;

    #[test]
    fn test_oversized_array_is_not_an_exception() {
        let err = InternalShimError::ArrayTooLarge(usize::MAX);
        assert!(!matches!(err, InternalShimError::JniException(_)));
        match ShimError::from(err) {
            ShimError::JavaError(msg) => assert!(msg.contains("Java array")),
            other => panic!("Unexpected error: {other:?}"),
        }
    }
}
