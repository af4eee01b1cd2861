use mui_select_core_types::{NodeHandle, Scope};
use tracing::debug;

use crate::errors::SelectError;
use crate::markers::SelectMarkers;
use crate::model::WidgetCapabilities;
use crate::ports::DomQueryPort;

/// Rejects native selects and detects multi-selection. Runs once per adapter.
pub(crate) async fn inspect_root(
    port: &dyn DomQueryPort,
    root: &NodeHandle,
    markers: &SelectMarkers,
) -> Result<WidgetCapabilities, SelectError> {
    let native_child = !port
        .find_all(Scope::Node(root), &markers.native_select())
        .await?
        .is_empty();
    let native = native_child
        || port
            .tag_name(root)
            .await?
            .eq_ignore_ascii_case(&markers.native_tag);
    if native {
        return Err(SelectError::Configuration(
            "root wraps a native select element; use a native select adapter instead".into(),
        ));
    }

    let multiple = !port
        .find_all(Scope::Node(root), &markers.multiple())
        .await?
        .is_empty();
    debug!(root = %root, multiple, "custom select inspected");
    Ok(WidgetCapabilities { multiple })
}
