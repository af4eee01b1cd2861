//! mui-select
//!
//! Native-select style automation for Material UI and other ARIA custom
//! dropdowns. The adapter itself lives in `custom-select`; this crate adds
//! configuration loading and logging setup for test suites that use it.

pub mod config;
pub mod logging;

use std::sync::Arc;

pub use crate::config::{AppConfig, LoggingConfig};
pub use custom_select::{
    query, DomQueryPort, DriverError, NodeHandle, Scope, SelectError, SelectMarkers,
    SelectOption, SelectionAdapter, SelectionAdapterBuilder, Selector, TextMatch,
    WidgetCapabilities,
};
pub use crate::logging::init_logging;

/// Wraps `root` using the markers from `config`.
pub async fn wrap(
    root: NodeHandle,
    port: Arc<dyn DomQueryPort>,
    config: &AppConfig,
) -> Result<SelectionAdapter, SelectError> {
    SelectionAdapter::builder()
        .with_root(root)
        .with_port(port)
        .with_markers(config.markers.clone())
        .build()
        .await
}
