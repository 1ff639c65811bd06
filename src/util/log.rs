#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
}

/// Browser console under wasm, stdout elsewhere.
pub fn log_line(line: &str) {
    #[cfg(target_arch = "wasm32")]
    console_log(line);

    #[cfg(not(target_arch = "wasm32"))]
    println!("{line}");
}

pub fn log_if(is_log_enabled: bool, line: impl FnOnce() -> String) {
    if is_log_enabled {
        log_line(&line());
    }
}
