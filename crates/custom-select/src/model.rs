use mui_select_core_types::{DriverError, NodeHandle};

use crate::markers::SelectMarkers;
use crate::ports::{flag, DomQueryPort};

/// How caller text is compared with an option label.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TextMatch {
    /// Whitespace-normalized label equals the text.
    #[default]
    Exact,
    /// Whitespace-normalized label contains the text.
    Partial,
}

/// What the adapter learned about the widget when it was wrapped.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WidgetCapabilities {
    pub multiple: bool,
}

/// Snapshot of one rendered option, read when the popup was last queried.
///
/// The handle is only valid while the popup that rendered it stays open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub handle: NodeHandle,
    pub text: String,
    pub value: Option<String>,
    pub disabled: bool,
    pub selected: bool,
}

impl SelectOption {
    pub(crate) async fn read(
        port: &dyn DomQueryPort,
        markers: &SelectMarkers,
        handle: NodeHandle,
    ) -> Result<Self, DriverError> {
        let text = port.text(&handle).await?;
        let value = port.attribute(&handle, &markers.value_attribute).await?;
        let disabled = flag(port, &handle, &markers.disabled_attribute).await?;
        let selected = flag(port, &handle, &markers.selected_attribute).await?;
        Ok(Self {
            handle,
            text,
            value,
            disabled,
            selected,
        })
    }
}
