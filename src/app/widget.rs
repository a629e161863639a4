//! The public browser-widget façade.

use super::history::{EntryId, HistoryEntry};
use super::session::BrowserSession;
use super::zoom::{Zoom, ZoomType};
use crate::engine::{Browser, Engine, Frame, Rect, SchemeHandler, WindowInfo};
use crate::events::bridge::{EventBridge, NoticeReceiver};
use crate::events::WebViewEvent;
use std::sync::Arc;
use thiserror::Error;

const DELETE_SELECTION_SCRIPT: &str = "if (window.getSelection) { if (window.getSelection().deleteFromDocument) { window.getSelection().deleteFromDocument(); } }";
const CLEAR_SELECTION_SCRIPT: &str = "if (window.getSelection) { if (window.getSelection().empty) { window.getSelection().empty(); } }";

#[derive(Error, Debug)]
pub enum WebViewError {
    #[error("the engine rejected the browser creation request")]
    BrowserCreation,
}

/// A web-view widget backed by the embedded browser engine.
///
/// Lives on the host toolkit's UI thread. The engine reports progress through
/// [`poll_events`](Self::poll_events), which the host should call from its
/// event loop; navigation commands are fire-and-forget and surface their
/// effects the same way.
///
/// Commands issued while no browser is owned (before asynchronous creation
/// completes, or after the engine closed it) are silently dropped, and
/// queries fall back to defaults.
pub struct WebView {
    session: BrowserSession,
    notices: NoticeReceiver,
}

impl WebView {
    /// Create the widget and request an embedded browser inside `window`,
    /// navigated to `url`.
    ///
    /// Browser creation is asynchronous: the engine's native child window
    /// appears, and commands start taking effect, once creation completes.
    pub fn create(engine: &dyn Engine, window: WindowInfo, url: &str) -> Result<Self, WebViewError> {
        let (bridge, notices) = EventBridge::channel();
        log::info!("requesting embedded browser for {}", url);
        if !engine.create_browser(window, bridge, url) {
            return Err(WebViewError::BrowserCreation);
        }

        Ok(Self {
            session: BrowserSession::new(),
            notices,
        })
    }

    /// Drain pending engine notifications and return the toolkit events they
    /// translate to, in arrival order.
    pub fn poll_events(&mut self) -> Vec<WebViewEvent> {
        let mut events = Vec::new();
        while let Ok(notice) = self.notices.try_recv() {
            self.session.apply(notice, &mut events);
        }
        events
    }

    fn browser(&self) -> Option<&Arc<dyn Browser>> {
        self.session.browser()
    }

    fn main_frame(&self) -> Option<Arc<dyn Frame>> {
        self.browser().map(|browser| browser.main_frame())
    }

    /// Keep the embedded browser's native window matched to the widget's
    /// client area. Call on every toolkit resize notification.
    pub fn set_bounds(&self, bounds: Rect) {
        if let Some(browser) = self.browser() {
            browser.host().set_window_bounds(bounds);
        }
    }

    pub fn load_url(&self, url: &str) {
        if let Some(frame) = self.main_frame() {
            frame.load_url(url);
        }
    }

    /// Replace the page with `html`, resolving relative references against
    /// `base_url`.
    pub fn load_html(&self, html: &str, base_url: &str) {
        if let Some(frame) = self.main_frame() {
            frame.load_html(html, base_url);
        }
    }

    pub fn stop(&self) {
        if let Some(browser) = self.browser() {
            browser.stop_load();
        }
    }

    pub fn reload(&self, use_cache: bool) {
        if let Some(browser) = self.browser() {
            if use_cache {
                browser.reload();
            } else {
                browser.reload_ignore_cache();
            }
        }
    }

    pub fn cut(&self) {
        if let Some(frame) = self.main_frame() {
            frame.cut();
        }
    }

    pub fn copy(&self) {
        if let Some(frame) = self.main_frame() {
            frame.copy();
        }
    }

    pub fn paste(&self) {
        if let Some(frame) = self.main_frame() {
            frame.paste();
        }
    }

    pub fn undo(&self) {
        if let Some(frame) = self.main_frame() {
            frame.undo();
        }
    }

    pub fn redo(&self) {
        if let Some(frame) = self.main_frame() {
            frame.redo();
        }
    }

    pub fn select_all(&self) {
        if let Some(frame) = self.main_frame() {
            frame.select_all();
        }
    }

    /// The engine has no selection-deletion call; a small fixed script fills
    /// the gap.
    pub fn delete_selection(&self) {
        self.run_script(DELETE_SELECTION_SCRIPT);
    }

    pub fn clear_selection(&self) {
        self.run_script(CLEAR_SELECTION_SCRIPT);
    }

    /// Toggle document-wide editing by flipping the page's design-mode flag.
    pub fn set_editable(&self, editable: bool) {
        let mode = if editable { "\"on\"" } else { "\"off\"" };
        self.run_script(&format!("document.designMode = {}", mode));
    }

    /// Execute `code` in the main frame. Fire-and-forget: results and script
    /// exceptions are discarded.
    pub fn run_script(&self, code: &str) {
        if let Some(frame) = self.main_frame() {
            frame.execute_script(code);
        }
    }

    pub fn current_url(&self) -> String {
        self.main_frame()
            .map(|frame| frame.url())
            .unwrap_or_default()
    }

    /// Title most recently reported by the engine.
    pub fn current_title(&self) -> String {
        self.session.title().to_string()
    }

    pub fn is_busy(&self) -> bool {
        self.browser().map(|browser| browser.is_loading()).unwrap_or(false)
    }

    /// Page source extraction is not supported; always empty.
    pub fn page_source(&self) -> String {
        String::new()
    }

    /// Page text extraction is not supported; always empty.
    pub fn page_text(&self) -> String {
        String::new()
    }

    /// Printing is not supported.
    pub fn print(&self) {}

    pub fn zoom(&self) -> Zoom {
        match self.browser() {
            Some(browser) => Zoom::from_level(browser.host().zoom_level()),
            None => Zoom::Medium,
        }
    }

    pub fn set_zoom(&self, zoom: Zoom) {
        if let Some(browser) = self.browser() {
            browser.host().set_zoom_level(zoom.to_level());
        }
    }

    pub fn zoom_type(&self) -> ZoomType {
        ZoomType::Layout
    }

    /// Only [`ZoomType::Layout`] is supported; asking for anything else is a
    /// caller bug.
    pub fn set_zoom_type(&self, zoom_type: ZoomType) {
        debug_assert!(zoom_type == ZoomType::Layout, "unsupported zoom type");
    }

    pub fn can_set_zoom_type(&self, zoom_type: ZoomType) -> bool {
        zoom_type == ZoomType::Layout
    }

    /// Custom scheme handlers are not supported; the handler is dropped.
    pub fn register_scheme_handler(&self, handler: Arc<dyn SchemeHandler>) {
        log::debug!("ignoring scheme handler for {:?}", handler.scheme());
    }

    /// Raw engine browser handle, for advanced use.
    pub fn native_backend(&self) -> Option<Arc<dyn Browser>> {
        self.browser().cloned()
    }

    pub fn can_go_back(&self) -> bool {
        self.session.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.session.history.can_go_forward()
    }

    /// Navigate to the previous history entry. Callers must check
    /// [`can_go_back`](Self::can_go_back) first.
    pub fn go_back(&mut self) {
        if let Some(url) = self.session.history.go_back() {
            self.load_url(&url);
        }
    }

    /// Navigate to the next history entry. Callers must check
    /// [`can_go_forward`](Self::can_go_forward) first.
    pub fn go_forward(&mut self) {
        if let Some(url) = self.session.history.go_forward() {
            self.load_url(&url);
        }
    }

    /// Navigate to an arbitrary history entry without recording a new one.
    pub fn load_history_item(&mut self, id: EntryId) {
        if let Some(url) = self.session.history.load_entry(id) {
            self.load_url(&url);
        }
    }

    pub fn backward_history(&self) -> &[HistoryEntry] {
        self.session.history.backward_entries()
    }

    pub fn forward_history(&self) -> &[HistoryEntry] {
        self.session.history.forward_entries()
    }

    pub fn enable_history(&mut self, enabled: bool) {
        self.session.history.set_enabled(enabled);
    }

    pub fn clear_history(&mut self) {
        self.session.history.clear();
    }
}

impl Drop for WebView {
    fn drop(&mut self) {
        // Give the engine a chance to tear down its native child window
        // before the parent goes away.
        if let Some(browser) = self.session.browser() {
            browser.host().parent_window_will_close();
        }
    }
}
