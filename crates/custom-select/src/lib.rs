//! Drives ARIA custom dropdowns (Material UI `Select` and look-alikes) with
//! the same vocabulary as a native `<select>`: list options, read the
//! selection, select or deselect by text, value or index.
//!
//! DOM access goes through an injected [`DomQueryPort`], so the adapter runs
//! the same against a WebDriver session, a CDP bridge or an in-memory fake.

pub mod api;
pub mod errors;
pub mod markers;
pub mod model;
pub mod ports;
pub mod query;

mod menu;
mod precheck;
mod runner;

pub use api::{SelectionAdapter, SelectionAdapterBuilder};
pub use errors::SelectError;
pub use markers::SelectMarkers;
pub use model::{SelectOption, TextMatch, WidgetCapabilities};
pub use mui_select_core_types::{DriverError, NodeHandle, Scope, Selector};
pub use ports::DomQueryPort;
