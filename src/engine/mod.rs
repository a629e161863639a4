pub mod bootstrap;
pub mod errors;
#[cfg(test)]
pub mod mock;

use raw_window_handle::RawWindowHandle;
use std::path::PathBuf;
use std::sync::Arc;

/// Placement of the embedded browser's native child window, in pixels
/// relative to the parent window's client area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Where the engine should create its native child window.
#[derive(Debug, Clone)]
pub struct WindowInfo {
    /// Native handle of the hosting toolkit window, if one exists yet.
    pub parent: Option<RawWindowHandle>,
    pub bounds: Rect,
}

/// Process-wide engine configuration, passed to
/// [`bootstrap::start_up`].
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Run the engine's message loop on its own threads instead of
    /// integrating with the host toolkit's loop.
    pub multi_threaded_message_loop: bool,
    pub cache_path: Option<PathBuf>,
    pub user_agent: Option<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            multi_threaded_message_loop: true,
            cache_path: None,
            user_agent: None,
        }
    }
}

/// Why a render process went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationStatus {
    Normal,
    Abnormal,
    Killed,
    Crashed,
}

/// A single document frame inside a browser, main frame or sub-frame.
///
/// Handles are cheap to clone and internally thread-safe; navigation calls
/// never block, their effects arrive later through [`BrowserDelegate`].
pub trait Frame: Send + Sync {
    fn url(&self) -> String;
    /// Frame name; empty for the unnamed main frame.
    fn name(&self) -> String;
    fn is_main(&self) -> bool;
    fn load_url(&self, url: &str);
    fn load_html(&self, html: &str, base_url: &str);
    fn execute_script(&self, code: &str);
    fn cut(&self);
    fn copy(&self);
    fn paste(&self);
    fn undo(&self);
    fn redo(&self);
    fn select_all(&self);
}

/// Window-level handle of a browser.
pub trait BrowserHost: Send + Sync {
    fn set_window_bounds(&self, bounds: Rect);
    /// Current zoom level. Implementations marshal the query to the engine's
    /// internal UI thread so the returned value is the live one.
    fn zoom_level(&self) -> f64;
    fn set_zoom_level(&self, level: f64);
    /// Tell the engine the hosting window is about to be destroyed so it can
    /// tear down its native child window cleanly.
    fn parent_window_will_close(&self);
}

/// One embedded browser.
pub trait Browser: Send + Sync {
    fn id(&self) -> i32;
    fn main_frame(&self) -> Arc<dyn Frame>;
    fn host(&self) -> Arc<dyn BrowserHost>;
    fn is_loading(&self) -> bool;
    fn stop_load(&self);
    fn reload(&self);
    fn reload_ignore_cache(&self);
}

/// Callback surface the engine fires on its own threads.
///
/// Implementations must not assume any particular calling thread. Methods
/// with a default body are observed-only notifications.
pub trait BrowserDelegate: Send + Sync {
    fn on_browser_created(&self, browser: Arc<dyn Browser>);
    fn on_browser_closing(&self, browser: &dyn Browser);
    fn on_title_changed(&self, browser: &dyn Browser, title: &str);
    fn on_load_start(&self, frame: &dyn Frame);
    fn on_load_end(&self, frame: &dyn Frame, http_status: i32);
    fn on_load_error(&self, frame: &dyn Frame, error_code: i32, error_text: &str, failed_url: &str);

    /// A popup wants to open. Returning `false` leaves the engine's default
    /// behavior in place.
    fn on_before_popup(&self, _url: &str, _frame_name: &str) -> bool {
        false
    }

    /// Returning `false` lets the message surface through the engine's own
    /// logging.
    fn on_console_message(&self, _message: &str, _source: &str, _line: i32) -> bool {
        false
    }

    fn on_address_changed(&self, _url: &str) {}

    fn on_loading_state_changed(&self, _is_loading: bool, _can_go_back: bool, _can_go_forward: bool) {
    }

    fn on_render_process_terminated(&self, _status: TerminationStatus) {}
}

/// The embedded engine itself. Implementations wrap the real engine's process
/// and IPC machinery; the rest of the crate only ever talks to these traits.
pub trait Engine: Send + Sync {
    /// Run the engine's sub-process entry point. Returns the exit code when
    /// the current process is an engine-spawned helper that must terminate
    /// instead of running application code, `None` for the main process.
    fn execute_process(&self) -> Option<i32>;
    fn initialize(&self, settings: &EngineSettings) -> bool;
    /// Request a browser inside `window`. Creation is asynchronous; the new
    /// browser is handed to `delegate` via
    /// [`BrowserDelegate::on_browser_created`]. Returns whether the request
    /// was accepted.
    fn create_browser(&self, window: WindowInfo, delegate: Arc<dyn BrowserDelegate>, url: &str)
        -> bool;
    fn shutdown(&self);
}

/// Custom scheme handler interface. Accepted by
/// [`WebView::register_scheme_handler`](crate::WebView::register_scheme_handler)
/// but not currently supported by the engine integration.
pub trait SchemeHandler: Send + Sync {
    /// Scheme this handler would serve, e.g. `"app"`.
    fn scheme(&self) -> &str;
}
