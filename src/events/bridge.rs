//! Receives engine callbacks on the engine's own threads and forwards them to
//! the owning thread as messages.

use crate::engine::{Browser, BrowserDelegate, Frame, TerminationStatus};
use std::sync::mpsc;
use std::sync::Arc;

/// Immutable update posted from an engine thread, drained on the owning
/// thread by [`WebView::poll_events`](crate::WebView::poll_events).
pub(crate) enum Notice {
    BrowserCreated {
        browser: Arc<dyn Browser>,
    },
    BrowserClosing {
        browser_id: i32,
    },
    TitleChanged {
        title: String,
        target: String,
    },
    LoadStarted {
        url: String,
        target: String,
    },
    LoadFinished {
        url: String,
        target: String,
        main_frame: bool,
    },
    LoadFailed {
        url: String,
        target: String,
        code: i32,
        message: String,
    },
}

pub(crate) type NoticeReceiver = mpsc::Receiver<Notice>;

/// The engine's callback sink. Owns nothing but the sending half of the
/// notice channel, so every callback is safe on whichever thread the engine
/// fires it from.
pub struct EventBridge {
    tx: mpsc::Sender<Notice>,
}

impl EventBridge {
    pub(crate) fn channel() -> (Arc<EventBridge>, NoticeReceiver) {
        let (tx, rx) = mpsc::channel();
        (Arc::new(EventBridge { tx }), rx)
    }

    fn post(&self, notice: Notice) {
        // The receiver is gone once the widget is destroyed; late engine
        // callbacks are dropped.
        let _ = self.tx.send(notice);
    }
}

impl BrowserDelegate for EventBridge {
    fn on_browser_created(&self, browser: Arc<dyn Browser>) {
        self.post(Notice::BrowserCreated { browser });
    }

    fn on_browser_closing(&self, browser: &dyn Browser) {
        self.post(Notice::BrowserClosing {
            browser_id: browser.id(),
        });
    }

    fn on_title_changed(&self, browser: &dyn Browser, title: &str) {
        self.post(Notice::TitleChanged {
            title: title.to_string(),
            target: browser.main_frame().name(),
        });
    }

    fn on_load_start(&self, frame: &dyn Frame) {
        self.post(Notice::LoadStarted {
            url: frame.url(),
            target: frame.name(),
        });
    }

    fn on_load_end(&self, frame: &dyn Frame, _http_status: i32) {
        self.post(Notice::LoadFinished {
            url: frame.url(),
            target: frame.name(),
            main_frame: frame.is_main(),
        });
    }

    fn on_load_error(&self, frame: &dyn Frame, error_code: i32, error_text: &str, failed_url: &str) {
        self.post(Notice::LoadFailed {
            url: failed_url.to_string(),
            target: frame.name(),
            code: error_code,
            message: error_text.to_string(),
        });
    }

    fn on_before_popup(&self, url: &str, _frame_name: &str) -> bool {
        log::debug!("popup requested for {}", url);
        false
    }

    fn on_console_message(&self, message: &str, source: &str, line: i32) -> bool {
        // Not forwarded; the engine's own logging surfaces it.
        log::debug!("page console [{}:{}] {}", source, line, message);
        false
    }

    fn on_render_process_terminated(&self, status: TerminationStatus) {
        // No crash recovery; the application decides whether to reload.
        log::warn!("render process terminated: {:?}", status);
    }
}
