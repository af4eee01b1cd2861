use mui_select_core_types::{NodeHandle, Scope};
use tracing::debug;

use crate::api::SelectionAdapter;
use crate::errors::SelectError;
use crate::model::SelectOption;
use crate::ports::flag;
use crate::query::{normalize_text, OptionQuery};

impl SelectionAdapter {
    /// Drives `option` toward `select`.
    ///
    /// The option is clicked only when its current `aria-selected` state
    /// differs. Otherwise the popup is closed instead, so every selection call
    /// leaves the menu closed the way a native select would, even a no-op one.
    pub async fn set_selected(&self, option: &SelectOption, select: bool) -> Result<(), SelectError> {
        self.toggle(&option.handle, select).await
    }

    async fn toggle(&self, node: &NodeHandle, select: bool) -> Result<(), SelectError> {
        let selected = flag(self.port.as_ref(), node, &self.markers.selected_attribute).await?;
        if selected != select {
            debug!(option = %node, select, "toggling option");
            self.port.click(node).await?;
        } else {
            self.close_menu().await?;
        }
        Ok(())
    }

    /// Toggles every option matched by `query` and returns how many were
    /// handled. Selecting on a single-select widget stops after the first.
    ///
    /// A toggle may close the popup and invalidate its handles, so the query
    /// is re-run before each toggle after the first and the k-th fresh match
    /// is used.
    pub(crate) async fn toggle_matches(
        &self,
        query: &OptionQuery<'_>,
        select: bool,
    ) -> Result<usize, SelectError> {
        let mut matches = self.matching_options(query).await?;
        let total = matches.len();
        debug!(matches = total, "option query resolved");

        for index in 0..total {
            if index > 0 {
                matches = self.matching_options(query).await?;
            }
            let Some(node) = matches.get(index) else {
                return Ok(index);
            };
            self.toggle(node, select).await?;
            if select && !self.is_multiple() {
                return Ok(1);
            }
        }
        Ok(total)
    }

    async fn matching_options(&self, query: &OptionQuery<'_>) -> Result<Vec<NodeHandle>, SelectError> {
        self.open_menu().await?;
        let container = self
            .port
            .find_one(Scope::Document, &self.markers.menu_container())
            .await?;
        let nodes = self
            .port
            .find_all(Scope::Node(&container), &query.selector(&self.markers))
            .await?;

        let Some(expected) = query.required_text() else {
            return Ok(nodes);
        };
        let mut narrowed = Vec::with_capacity(nodes.len());
        for node in nodes {
            if normalize_text(&self.port.text(&node).await?) == expected {
                narrowed.push(node);
            }
        }
        Ok(narrowed)
    }
}
