use crate::engine::errors::NavigationError;

/// Navigation and lifecycle notifications, translated from engine callbacks
/// and returned by [`WebView::poll_events`](crate::WebView::poll_events).
///
/// `target` is the name of the frame the notification concerns; empty for the
/// unnamed main frame.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    /// A frame started loading. In-flight engine navigations cannot be
    /// aborted from this notification.
    Navigating { url: String, target: String },
    /// A frame finished loading.
    Navigated { url: String, target: String },
    /// The main frame finished loading; delivered after its `Navigated`.
    Loaded { url: String, target: String },
    /// The page title changed.
    TitleChanged { title: String, target: String },
    /// A load failed. `kind` classifies the raw engine error code, `message`
    /// carries the engine's error text verbatim.
    Error {
        url: String,
        target: String,
        kind: NavigationError,
        message: String,
    },
}
