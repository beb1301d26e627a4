// JSON strings across the boundary, panics caught at the edge.
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

use libc::c_char;

use crate::core::classifier::Mode;
use crate::registry::LanguageRegistry;

static mut REGISTRY: *mut LanguageRegistry = ptr::null_mut();

#[no_mangle]
pub extern "C" fn numwords_init() {
    let result = catch_unwind(|| unsafe {
        if !REGISTRY.is_null() {
            return;
        }
        REGISTRY = Box::into_raw(Box::new(LanguageRegistry::with_builtin_languages()));
    });
    if result.is_err() {
        eprintln!("[numwords FATAL] A panic occurred during registry initialization.");
        unsafe {
            REGISTRY = ptr::null_mut();
        }
    }
}

#[no_mangle]
pub extern "C" fn numwords_destroy() {
    unsafe {
        if REGISTRY.is_null() {
            return;
        }
        drop(Box::from_raw(REGISTRY));
        REGISTRY = ptr::null_mut();
    }
}

unsafe fn get_registry<'a>() -> Option<&'a LanguageRegistry> {
    REGISTRY.as_ref()
}

unsafe fn cstr_or_empty<'a>(s: *const c_char) -> &'a str {
    if s.is_null() {
        ""
    } else {
        CStr::from_ptr(s).to_str().unwrap_or("")
    }
}

/// Converts `input` in language `lang`. `mode` may be NULL, empty, or one of
/// "currency"/"individual". Returns a JSON object with either a "words" or an
/// "error" field; the caller frees it with `numwords_free_string`.
#[no_mangle]
pub extern "C" fn numwords_convert(
    input: *const c_char,
    lang: *const c_char,
    mode: *const c_char,
) -> *mut c_char {
    let input_str = unsafe { cstr_or_empty(input) };
    let lang_str = unsafe { cstr_or_empty(lang) };
    let mode_override: Option<Mode> = Mode::from_flag(unsafe { cstr_or_empty(mode) });

    let result = catch_unwind(AssertUnwindSafe(|| {
        unsafe {
            if let Some(registry) = get_registry() {
                return match registry.convert(input_str, lang_str, mode_override) {
                    Ok(words) => {
                        serde_json::json!({ "ok": true, "words": words }).to_string()
                    }
                    Err(e) => {
                        serde_json::json!({ "ok": false, "error": e.to_string() }).to_string()
                    }
                };
            }
        }
        serde_json::json!({ "ok": false, "error": "registry not initialized" }).to_string()
    }));
    let json_string = result.unwrap_or_else(|_| {
        eprintln!("[numwords FATAL] Panic in convert.");
        r#"{"ok":false,"error":"internal panic"}"#.to_string()
    });
    CString::new(json_string).unwrap().into_raw()
}

/// Returns the supported languages as a JSON object of code -> name.
#[no_mangle]
pub extern "C" fn numwords_languages() -> *mut c_char {
    let result = catch_unwind(AssertUnwindSafe(|| {
        unsafe {
            if let Some(registry) = get_registry() {
                let map: serde_json::Map<String, serde_json::Value> = registry
                    .supported_languages()
                    .map(|(code, name)| (code.to_string(), name.into()))
                    .collect();
                return serde_json::Value::Object(map).to_string();
            }
        }
        "{}".to_string()
    }));
    let json_string = result.unwrap_or_else(|_| "{}".to_string());
    CString::new(json_string).unwrap().into_raw()
}

#[no_mangle]
pub extern "C" fn numwords_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
