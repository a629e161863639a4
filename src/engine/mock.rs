//! In-memory engine used by unit tests. Records every command it receives and
//! lets tests fire delegate callbacks the way the real engine would, from any
//! thread.

use super::{
    Browser, BrowserDelegate, BrowserHost, Engine, EngineSettings, Frame, Rect, WindowInfo,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// One call that reached an engine handle.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadUrl(String),
    LoadHtml { html: String, base_url: String },
    ExecuteScript(String),
    Cut,
    Copy,
    Paste,
    Undo,
    Redo,
    SelectAll,
    StopLoad,
    Reload,
    ReloadIgnoreCache,
    SetZoomLevel(f64),
    SetWindowBounds(Rect),
    ParentWindowWillClose,
}

/// Shared backing store for one mock browser and its frames and host.
#[derive(Default)]
pub struct MockState {
    commands: Mutex<Vec<Command>>,
    url: Mutex<String>,
    zoom: Mutex<f64>,
    loading: AtomicBool,
}

impl MockState {
    pub fn push(&self, command: Command) {
        self.commands.lock().unwrap().push(command);
    }

    pub fn commands(&self) -> Vec<Command> {
        self.commands.lock().unwrap().clone()
    }

    pub fn set_url(&self, url: &str) {
        *self.url.lock().unwrap() = url.to_string();
    }

    pub fn url(&self) -> String {
        self.url.lock().unwrap().clone()
    }

    pub fn set_loading(&self, loading: bool) {
        self.loading.store(loading, Ordering::SeqCst);
    }
}

pub struct MockFrame {
    state: Arc<MockState>,
    name: String,
    main: bool,
}

impl MockFrame {
    pub fn new(state: Arc<MockState>, name: &str, main: bool) -> Self {
        Self {
            state,
            name: name.to_string(),
            main,
        }
    }
}

impl Frame for MockFrame {
    fn url(&self) -> String {
        self.state.url()
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn is_main(&self) -> bool {
        self.main
    }

    fn load_url(&self, url: &str) {
        self.state.set_url(url);
        self.state.push(Command::LoadUrl(url.to_string()));
    }

    fn load_html(&self, html: &str, base_url: &str) {
        self.state.push(Command::LoadHtml {
            html: html.to_string(),
            base_url: base_url.to_string(),
        });
    }

    fn execute_script(&self, code: &str) {
        self.state.push(Command::ExecuteScript(code.to_string()));
    }

    fn cut(&self) {
        self.state.push(Command::Cut);
    }

    fn copy(&self) {
        self.state.push(Command::Copy);
    }

    fn paste(&self) {
        self.state.push(Command::Paste);
    }

    fn undo(&self) {
        self.state.push(Command::Undo);
    }

    fn redo(&self) {
        self.state.push(Command::Redo);
    }

    fn select_all(&self) {
        self.state.push(Command::SelectAll);
    }
}

pub struct MockHost {
    state: Arc<MockState>,
}

impl BrowserHost for MockHost {
    fn set_window_bounds(&self, bounds: Rect) {
        self.state.push(Command::SetWindowBounds(bounds));
    }

    fn zoom_level(&self) -> f64 {
        *self.state.zoom.lock().unwrap()
    }

    fn set_zoom_level(&self, level: f64) {
        *self.state.zoom.lock().unwrap() = level;
        self.state.push(Command::SetZoomLevel(level));
    }

    fn parent_window_will_close(&self) {
        self.state.push(Command::ParentWindowWillClose);
    }
}

pub struct MockBrowser {
    id: i32,
    state: Arc<MockState>,
}

impl MockBrowser {
    pub fn new(id: i32) -> (Arc<Self>, Arc<MockState>) {
        let state = Arc::new(MockState::default());
        let browser = Arc::new(Self {
            id,
            state: Arc::clone(&state),
        });
        (browser, state)
    }
}

impl Browser for MockBrowser {
    fn id(&self) -> i32 {
        self.id
    }

    fn main_frame(&self) -> Arc<dyn Frame> {
        Arc::new(MockFrame::new(Arc::clone(&self.state), "", true))
    }

    fn host(&self) -> Arc<dyn BrowserHost> {
        Arc::new(MockHost {
            state: Arc::clone(&self.state),
        })
    }

    fn is_loading(&self) -> bool {
        self.state.loading.load(Ordering::SeqCst)
    }

    fn stop_load(&self) {
        self.state.push(Command::StopLoad);
    }

    fn reload(&self) {
        self.state.push(Command::Reload);
    }

    fn reload_ignore_cache(&self) {
        self.state.push(Command::ReloadIgnoreCache);
    }
}

pub struct MockEngine {
    helper_exit: Option<i32>,
    init_ok: bool,
    accept_create: bool,
    pub initialized: AtomicBool,
    pub shutdown_called: AtomicBool,
    delegate: Mutex<Option<Arc<dyn BrowserDelegate>>>,
    requested_url: Mutex<Option<String>>,
    requested_bounds: Mutex<Option<Rect>>,
}

impl MockEngine {
    fn with_config(helper_exit: Option<i32>, init_ok: bool, accept_create: bool) -> Arc<Self> {
        Arc::new(Self {
            helper_exit,
            init_ok,
            accept_create,
            initialized: AtomicBool::new(false),
            shutdown_called: AtomicBool::new(false),
            delegate: Mutex::new(None),
            requested_url: Mutex::new(None),
            requested_bounds: Mutex::new(None),
        })
    }

    pub fn new() -> Arc<Self> {
        Self::with_config(None, true, true)
    }

    /// Engine that reports the current process as a helper sub-process.
    pub fn helper(exit_code: i32) -> Arc<Self> {
        Self::with_config(Some(exit_code), true, true)
    }

    pub fn failing_init() -> Arc<Self> {
        Self::with_config(None, false, true)
    }

    pub fn rejecting_create() -> Arc<Self> {
        Self::with_config(None, true, false)
    }

    /// The callback sink handed over by the last `create_browser` request.
    pub fn delegate(&self) -> Arc<dyn BrowserDelegate> {
        self.delegate
            .lock()
            .unwrap()
            .clone()
            .expect("no browser was requested")
    }

    pub fn requested_url(&self) -> Option<String> {
        self.requested_url.lock().unwrap().clone()
    }

    pub fn requested_bounds(&self) -> Option<Rect> {
        *self.requested_bounds.lock().unwrap()
    }
}

impl Engine for MockEngine {
    fn execute_process(&self) -> Option<i32> {
        self.helper_exit
    }

    fn initialize(&self, _settings: &EngineSettings) -> bool {
        self.initialized.store(true, Ordering::SeqCst);
        self.init_ok
    }

    fn create_browser(
        &self,
        window: WindowInfo,
        delegate: Arc<dyn BrowserDelegate>,
        url: &str,
    ) -> bool {
        if !self.accept_create {
            return false;
        }
        *self.requested_url.lock().unwrap() = Some(url.to_string());
        *self.requested_bounds.lock().unwrap() = Some(window.bounds);
        *self.delegate.lock().unwrap() = Some(delegate);
        true
    }

    fn shutdown(&self) {
        self.shutdown_called.store(true, Ordering::SeqCst);
    }
}

/// Drive a full successful main-frame load through `delegate`, the way the
/// engine reports one.
pub fn complete_load(delegate: &Arc<dyn BrowserDelegate>, state: &Arc<MockState>, url: &str) {
    state.set_url(url);
    let frame = MockFrame::new(Arc::clone(state), "", true);
    delegate.on_load_start(&frame);
    delegate.on_load_end(&frame, 200);
}
