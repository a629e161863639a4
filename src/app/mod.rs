pub mod history;
pub(crate) mod session;
pub mod widget;
pub mod zoom;

pub use history::{EntryId, HistoryEntry, NavigationHistory};
pub use widget::{WebView, WebViewError};
pub use zoom::{Zoom, ZoomType};
