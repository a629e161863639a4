pub(crate) mod bridge;
pub mod event;

pub use bridge::EventBridge;
pub use event::WebViewEvent;
