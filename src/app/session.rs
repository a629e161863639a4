//! Per-widget browser state. Mutated only on the owning thread, while the
//! notices it consumes are produced on engine threads.

use super::history::NavigationHistory;
use crate::engine::errors;
use crate::engine::Browser;
use crate::events::bridge::Notice;
use crate::events::WebViewEvent;
use std::sync::Arc;

/// The one live browser behind a widget, together with the display state the
/// engine reports asynchronously.
pub(crate) struct BrowserSession {
    browser: Option<Arc<dyn Browser>>,
    browser_id: i32,
    title: String,
    pub history: NavigationHistory,
}

impl BrowserSession {
    pub fn new() -> Self {
        Self {
            browser: None,
            browser_id: 0,
            title: String::new(),
            history: NavigationHistory::new(),
        }
    }

    pub fn browser(&self) -> Option<&Arc<dyn Browser>> {
        self.browser.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Apply one engine notice, pushing any toolkit events it translates to.
    pub fn apply(&mut self, notice: Notice, events: &mut Vec<WebViewEvent>) {
        match notice {
            Notice::BrowserCreated { browser } => {
                // First creation wins; the engine may open further browsers
                // (popups) that this widget does not manage.
                if self.browser.is_none() {
                    self.browser_id = browser.id();
                    log::info!("adopted browser {}", self.browser_id);
                    self.browser = Some(browser);
                } else {
                    log::debug!("ignoring secondary browser {}", browser.id());
                }
            }
            Notice::BrowserClosing { browser_id } => {
                if browser_id == self.browser_id {
                    log::info!("browser {} closing", browser_id);
                    self.browser = None;
                }
            }
            Notice::TitleChanged { title, target } => {
                self.title = title.clone();
                events.push(WebViewEvent::TitleChanged { title, target });
            }
            Notice::LoadStarted { url, target } => {
                events.push(WebViewEvent::Navigating { url, target });
            }
            Notice::LoadFinished {
                url,
                target,
                main_frame,
            } => {
                events.push(WebViewEvent::Navigated {
                    url: url.clone(),
                    target: target.clone(),
                });
                if main_frame {
                    self.history.record_completed_load(&url, &self.title);
                    self.history.clear_suppression();
                    events.push(WebViewEvent::Loaded { url, target });
                }
            }
            Notice::LoadFailed {
                url,
                target,
                code,
                message,
            } => {
                events.push(WebViewEvent::Error {
                    url,
                    target,
                    kind: errors::categorize(code),
                    message,
                });
            }
        }
    }
}
