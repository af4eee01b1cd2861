use mui_select_core_types::{DriverError, Scope};
use tracing::debug;

use crate::api::SelectionAdapter;

impl SelectionAdapter {
    /// Whether the trigger under the root currently reports `aria-expanded`.
    pub async fn is_menu_open(&self) -> Result<bool, DriverError> {
        let expanded = self
            .port
            .find_all(Scope::Node(&self.root), &self.markers.expanded_trigger())
            .await?;
        Ok(!expanded.is_empty())
    }

    /// Clicks the root unless the popup is already open.
    pub async fn open_menu(&self) -> Result<(), DriverError> {
        if self.is_menu_open().await? {
            return Ok(());
        }
        debug!(root = %self.root, "opening select menu");
        self.port.click(&self.root).await
    }

    /// Clicks the popup backdrop.
    pub async fn close_menu(&self) -> Result<(), DriverError> {
        let backdrop = self
            .port
            .find_one(Scope::Document, &self.markers.menu_container())
            .await?;
        debug!(root = %self.root, backdrop = %backdrop, "closing select menu");
        self.port.click(&backdrop).await
    }
}
