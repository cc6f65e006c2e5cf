//! API utilities for frontend-backend communication.

/// Get the base URL for API requests.
///
/// Constructs the backend origin from the current window location, using
/// port 5000 for the backend server. Outside the browser (native test
/// builds) a localhost fallback is returned; tests construct their own
/// client against a mock server anyway.
pub fn api_base() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return String::new(),
        };
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        format!("{}//{}:5000", protocol, hostname)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "http://127.0.0.1:5000".to_string()
    }
}
