//! Names and JNI type descriptors of the Java APIs the JNI layer calls
//!
//! These are kept apart from the JNI code itself so they can be checked on
//! any host, not only when building for Android.

#![cfg_attr(not(target_os = "android"), allow(dead_code))]

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct JavaMethod {
    pub name: &'static str,
    pub sig: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct JavaField {
    pub name: &'static str,
    pub sig: &'static str,
}

const fn method(name: &'static str, sig: &'static str) -> JavaMethod {
    JavaMethod { name, sig }
}

const fn field(name: &'static str, sig: &'static str) -> JavaField {
    JavaField { name, sig }
}

pub(crate) const ACTIVITY_GET_WINDOW: JavaMethod =
    method("getWindow", "()Landroid/view/Window;");

pub(crate) const WINDOW_GET_ATTRIBUTES: JavaMethod = method(
    "getAttributes",
    "()Landroid/view/WindowManager$LayoutParams;",
);
pub(crate) const WINDOW_GET_INSETS_CONTROLLER: JavaMethod = method(
    "getInsetsController",
    "()Landroid/view/WindowInsetsController;",
);
pub(crate) const WINDOW_GET_DECOR_VIEW: JavaMethod =
    method("getDecorView", "()Landroid/view/View;");
pub(crate) const WINDOW_SET_DECOR_FITS_SYSTEM_WINDOWS: JavaMethod =
    method("setDecorFitsSystemWindows", "(Z)V");

pub(crate) const LAYOUT_PARAMS_CUTOUT_MODE: JavaField = field("layoutInDisplayCutoutMode", "I");
pub(crate) const LAYOUT_PARAMS_PREFERRED_REFRESH_RATE: JavaField =
    field("preferredRefreshRate", "F");

pub(crate) const INSETS_CONTROLLER_HIDE: JavaMethod = method("hide", "(I)V");
pub(crate) const INSETS_CONTROLLER_SHOW: JavaMethod = method("show", "(I)V");
pub(crate) const INSETS_CONTROLLER_SET_SYSTEM_BARS_BEHAVIOR: JavaMethod =
    method("setSystemBarsBehavior", "(I)V");

pub(crate) const VIEW_SET_SYSTEM_UI_VISIBILITY: JavaMethod =
    method("setSystemUiVisibility", "(I)V");

pub(crate) const THROWABLE_GET_MESSAGE: JavaMethod =
    method("getMessage", "()Ljava/lang/String;");
pub(crate) const CLASS_GET_NAME: JavaMethod = method("getName", "()Ljava/lang/String;");

pub(crate) const STRING_CLASS: &str = "java/lang/String";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{
        CutoutPolicy, InsetsTypes, SystemBarsBehavior, SystemUiFlags, WindowCommand,
    };

    /// Splits one type descriptor off the front of `desc`
    fn split_type(desc: &str) -> Option<(&str, &str)> {
        let end = match desc.as_bytes().first()? {
            b'Z' | b'B' | b'C' | b'S' | b'I' | b'J' | b'F' | b'D' => 1,
            b'L' => desc.find(';')? + 1,
            b'[' => {
                let (elem, _) = split_type(&desc[1..])?;
                elem.len() + 1
            }
            _ => return None,
        };
        Some(desc.split_at(end))
    }

    /// Parses `(args)ret` into its argument and return descriptors
    fn parse_method(sig: &str) -> Option<(Vec<&str>, &str)> {
        let mut rest = sig.strip_prefix('(')?;
        let mut args = Vec::new();
        while !rest.starts_with(')') {
            let (arg, tail) = split_type(rest)?;
            args.push(arg);
            rest = tail;
        }
        let ret = &rest[1..];
        if ret == "V" {
            return Some((args, ret));
        }
        match split_type(ret)? {
            (ret, "") => Some((args, ret)),
            _ => None,
        }
    }

    fn is_valid_identifier(name: &str) -> bool {
        !name.is_empty()
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !name.starts_with(|c: char| c.is_ascii_digit())
    }

    /// The Java member that applying `command` ends up setting or calling,
    /// and the JNI descriptor of the value passed to it
    fn target_of(command: &WindowCommand) -> (&'static str, &'static str) {
        match command {
            WindowCommand::SetCutoutMode(_) => (LAYOUT_PARAMS_CUTOUT_MODE.sig, "I"),
            WindowCommand::SetPreferredRefreshRate(_) => {
                (LAYOUT_PARAMS_PREFERRED_REFRESH_RATE.sig, "F")
            }
            WindowCommand::SetDecorFitsSystemWindows(_) => {
                (WINDOW_SET_DECOR_FITS_SYSTEM_WINDOWS.sig, "Z")
            }
            WindowCommand::HideSystemBars(_) => (INSETS_CONTROLLER_HIDE.sig, "I"),
            WindowCommand::ShowSystemBars(_) => (INSETS_CONTROLLER_SHOW.sig, "I"),
            WindowCommand::SetSystemBarsBehavior(_) => {
                (INSETS_CONTROLLER_SET_SYSTEM_BARS_BEHAVIOR.sig, "I")
            }
            WindowCommand::SetSystemUiVisibility(_) => (VIEW_SET_SYSTEM_UI_VISIBILITY.sig, "I"),
        }
    }

    const ALL_METHODS: [JavaMethod; 11] = [
        ACTIVITY_GET_WINDOW,
        WINDOW_GET_ATTRIBUTES,
        WINDOW_GET_INSETS_CONTROLLER,
        WINDOW_GET_DECOR_VIEW,
        WINDOW_SET_DECOR_FITS_SYSTEM_WINDOWS,
        INSETS_CONTROLLER_HIDE,
        INSETS_CONTROLLER_SHOW,
        INSETS_CONTROLLER_SET_SYSTEM_BARS_BEHAVIOR,
        VIEW_SET_SYSTEM_UI_VISIBILITY,
        THROWABLE_GET_MESSAGE,
        CLASS_GET_NAME,
    ];

    #[test]
    fn test_method_descriptors_parse() {
        for m in ALL_METHODS {
            assert!(is_valid_identifier(m.name), "{m:?}");
            assert!(parse_method(m.sig).is_some(), "{m:?} has a malformed signature");
        }
        for f in [LAYOUT_PARAMS_CUTOUT_MODE, LAYOUT_PARAMS_PREFERRED_REFRESH_RATE] {
            assert!(is_valid_identifier(f.name), "{f:?}");
            assert_eq!(split_type(f.sig), Some((f.sig, "")), "{f:?}");
        }
    }

    #[test]
    fn test_getters_return_objects() {
        for m in [
            ACTIVITY_GET_WINDOW,
            WINDOW_GET_ATTRIBUTES,
            WINDOW_GET_INSETS_CONTROLLER,
            WINDOW_GET_DECOR_VIEW,
        ] {
            let (args, ret) = parse_method(m.sig).unwrap();
            assert!(args.is_empty(), "{m:?}");
            assert!(ret.starts_with("Landroid/view/"), "{m:?}");
        }
    }

    #[test]
    fn test_every_window_command_matches_its_java_member() {
        let commands = [
            WindowCommand::SetCutoutMode(CutoutPolicy::ShortEdges),
            WindowCommand::SetPreferredRefreshRate(60.0),
            WindowCommand::SetDecorFitsSystemWindows(false),
            WindowCommand::HideSystemBars(InsetsTypes::system_bars()),
            WindowCommand::ShowSystemBars(InsetsTypes::system_bars()),
            WindowCommand::SetSystemBarsBehavior(SystemBarsBehavior::ShowTransientBarsBySwipe),
            WindowCommand::SetSystemUiVisibility(SystemUiFlags::immersive_sticky()),
        ];
        for command in commands {
            let (sig, value) = target_of(&command);
            match parse_method(sig) {
                // A setter taking exactly the value
                Some((args, ret)) => {
                    assert_eq!(args, [value], "{command:?}");
                    assert_eq!(ret, "V", "{command:?}");
                }
                // A field of that type
                None => assert_eq!(sig, value, "{command:?}"),
            }
        }
    }
}
