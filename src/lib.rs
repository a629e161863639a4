pub mod app;
pub mod engine;
pub mod events;

pub use app::history::{EntryId, HistoryEntry, NavigationHistory};
pub use app::widget::{WebView, WebViewError};
pub use app::zoom::{Zoom, ZoomType};
pub use engine::bootstrap::{shut_down, start_up, BootstrapError, StartUp};
pub use engine::errors::NavigationError;
pub use events::event::WebViewEvent;
