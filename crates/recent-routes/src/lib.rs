//! Clean Recent Routes
//!
//! Static navigation table for the webview. Seven paths, six views:
//! `/` and `/mission` both land on the mission list.
//! The frontend uses hash history, so a full location resolves through its
//! fragment (`tauri://localhost/#/backup`).

mod error;
mod table;
mod view;

pub use error::RouteError;
pub use table::{Route, RouteTable};
pub use view::View;

pub type Result<T> = std::result::Result<T, RouteError>;
