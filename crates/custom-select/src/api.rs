use std::sync::Arc;

use mui_select_core_types::{NodeHandle, Scope};
use tracing::instrument;

use crate::errors::SelectError;
use crate::markers::SelectMarkers;
use crate::model::{SelectOption, TextMatch, WidgetCapabilities};
use crate::ports::DomQueryPort;
use crate::precheck::inspect_root;
use crate::query::{longest_token, OptionQuery};

pub struct SelectionAdapterBuilder {
    root: Option<NodeHandle>,
    port: Option<Arc<dyn DomQueryPort>>,
    markers: SelectMarkers,
}

impl SelectionAdapterBuilder {
    pub fn new() -> Self {
        Self {
            root: None,
            port: None,
            markers: SelectMarkers::default(),
        }
    }

    pub fn with_root(mut self, root: NodeHandle) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_port(mut self, port: Arc<dyn DomQueryPort>) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_markers(mut self, markers: SelectMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Inspects the root once and freezes what it found.
    pub async fn build(self) -> Result<SelectionAdapter, SelectError> {
        let root = self.root.ok_or(SelectError::NullArgument("root"))?;
        let port = self.port.ok_or(SelectError::NullArgument("port"))?;
        let capabilities = inspect_root(port.as_ref(), &root, &self.markers).await?;
        Ok(SelectionAdapter {
            root,
            port,
            markers: self.markers,
            capabilities,
        })
    }
}

impl Default for SelectionAdapterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Native-select style access to one custom dropdown.
///
/// Nothing rendered is cached: every read opens the popup and queries it
/// again, because the widget re-renders its options on each open.
pub struct SelectionAdapter {
    pub(crate) root: NodeHandle,
    pub(crate) port: Arc<dyn DomQueryPort>,
    pub(crate) markers: SelectMarkers,
    capabilities: WidgetCapabilities,
}

impl SelectionAdapter {
    pub fn builder() -> SelectionAdapterBuilder {
        SelectionAdapterBuilder::new()
    }

    /// Wraps `root` using the Material UI markers.
    pub async fn new(root: NodeHandle, port: Arc<dyn DomQueryPort>) -> Result<Self, SelectError> {
        Self::builder().with_root(root).with_port(port).build().await
    }

    pub fn root(&self) -> &NodeHandle {
        &self.root
    }

    pub fn markers(&self) -> &SelectMarkers {
        &self.markers
    }

    pub fn capabilities(&self) -> WidgetCapabilities {
        self.capabilities
    }

    pub fn is_multiple(&self) -> bool {
        self.capabilities.multiple
    }

    /// Every option node in the document, in rendered order.
    ///
    /// Options render in a portal, so the query is not scoped to the root.
    #[instrument(skip_all, fields(root = %self.root))]
    pub async fn options(&self) -> Result<Vec<SelectOption>, SelectError> {
        self.open_menu().await?;
        let handles = self
            .port
            .find_all(Scope::Document, &self.markers.option())
            .await?;
        let mut options = Vec::with_capacity(handles.len());
        for handle in handles {
            options.push(SelectOption::read(self.port.as_ref(), &self.markers, handle).await?);
        }
        Ok(options)
    }

    pub async fn disabled_options(&self) -> Result<Vec<SelectOption>, SelectError> {
        Ok(self
            .options()
            .await?
            .into_iter()
            .filter(|option| option.disabled)
            .collect())
    }

    pub async fn selected_options(&self) -> Result<Vec<SelectOption>, SelectError> {
        Ok(self
            .options()
            .await?
            .into_iter()
            .filter(|option| option.selected)
            .collect())
    }

    /// First selected option; widgets reporting several still yield one.
    pub async fn selected_option(&self) -> Result<SelectOption, SelectError> {
        self.options()
            .await?
            .into_iter()
            .find(|option| option.selected)
            .ok_or_else(|| SelectError::NotFound("no option is selected".into()))
    }

    /// Selects options by label. A single-select widget stops after the first
    /// match; a multi-select one takes every match.
    ///
    /// When nothing matches and `text` contains a space, the lookup is retried
    /// on its longest space-free token and narrowed to labels whose
    /// normalized text equals `text`.
    #[instrument(skip_all, fields(root = %self.root, text = %text, mode = ?mode))]
    pub async fn select_by_text(&self, text: &str, mode: TextMatch) -> Result<(), SelectError> {
        let mut toggled = self
            .toggle_matches(&OptionQuery::Text { text, mode }, true)
            .await?;

        if toggled == 0 && text.contains(' ') {
            let token = longest_token(text);
            toggled = self
                .toggle_matches(&OptionQuery::Token { text, token }, true)
                .await?;
        }

        if toggled == 0 {
            return Err(SelectError::NotFound(format!(
                "cannot locate option with text: {}",
                text
            )));
        }
        Ok(())
    }

    #[instrument(skip_all, fields(root = %self.root, value = %value))]
    pub async fn select_by_value(&self, value: &str) -> Result<(), SelectError> {
        if self
            .toggle_matches(&OptionQuery::Value(value), true)
            .await?
            == 0
        {
            return Err(SelectError::NotFound(format!(
                "cannot locate option with value: {}",
                value
            )));
        }
        Ok(())
    }

    #[instrument(skip_all, fields(root = %self.root, index = index))]
    pub async fn select_by_index(&self, index: usize) -> Result<(), SelectError> {
        let option = self.option_at(index).await?;
        self.set_selected(&option, true).await
    }

    /// Clears every option. Multi-select widgets only.
    #[instrument(skip_all, fields(root = %self.root))]
    pub async fn deselect_all(&self) -> Result<(), SelectError> {
        self.require_multiple("deselect_all")?;
        let mut options = self.options().await?;
        let total = options.len();
        for index in 0..total {
            if index > 0 {
                options = self.options().await?;
            }
            let Some(option) = options.get(index) else {
                break;
            };
            self.set_selected(option, false).await?;
        }
        Ok(())
    }

    #[instrument(skip_all, fields(root = %self.root, text = %text))]
    pub async fn deselect_by_text(&self, text: &str) -> Result<(), SelectError> {
        self.require_multiple("deselect_by_text")?;
        let query = OptionQuery::Text {
            text,
            mode: TextMatch::Exact,
        };
        if self.toggle_matches(&query, false).await? == 0 {
            return Err(SelectError::NotFound(format!(
                "cannot locate option with text: {}",
                text
            )));
        }
        Ok(())
    }

    #[instrument(skip_all, fields(root = %self.root, value = %value))]
    pub async fn deselect_by_value(&self, value: &str) -> Result<(), SelectError> {
        self.require_multiple("deselect_by_value")?;
        if self
            .toggle_matches(&OptionQuery::Value(value), false)
            .await?
            == 0
        {
            return Err(SelectError::NotFound(format!(
                "cannot locate option with value: {}",
                value
            )));
        }
        Ok(())
    }

    #[instrument(skip_all, fields(root = %self.root, index = index))]
    pub async fn deselect_by_index(&self, index: usize) -> Result<(), SelectError> {
        self.require_multiple("deselect_by_index")?;
        let option = self.option_at(index).await?;
        self.set_selected(&option, false).await
    }

    async fn option_at(&self, index: usize) -> Result<SelectOption, SelectError> {
        let mut options = self.options().await?;
        let len = options.len();
        if index >= len {
            return Err(SelectError::IndexOutOfRange { index, len });
        }
        Ok(options.swap_remove(index))
    }

    fn require_multiple(&self, operation: &str) -> Result<(), SelectError> {
        if self.is_multiple() {
            Ok(())
        } else {
            Err(SelectError::multi_select_only(operation))
        }
    }
}
