use async_trait::async_trait;
use mui_select_core_types::{DriverError, NodeHandle, Scope, Selector};

/// Browser-side capabilities the adapter consumes.
///
/// Implementations own waiting and retry policy; the adapter issues one call
/// at a time and never polls.
#[async_trait]
pub trait DomQueryPort: Send + Sync {
    /// All nodes under `scope` matching `selector`, in document order.
    async fn find_all(
        &self,
        scope: Scope<'_>,
        selector: &Selector,
    ) -> Result<Vec<NodeHandle>, DriverError>;

    async fn find_one(
        &self,
        scope: Scope<'_>,
        selector: &Selector,
    ) -> Result<NodeHandle, DriverError> {
        self.find_all(scope, selector)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DriverError::no_such_element(selector))
    }

    async fn attribute(
        &self,
        node: &NodeHandle,
        name: &str,
    ) -> Result<Option<String>, DriverError>;

    /// Rendered text content.
    async fn text(&self, node: &NodeHandle) -> Result<String, DriverError>;

    async fn click(&self, node: &NodeHandle) -> Result<(), DriverError>;

    async fn tag_name(&self, node: &NodeHandle) -> Result<String, DriverError>;
}

/// Reads a boolean ARIA-style attribute; only the literal `"true"` counts.
pub(crate) async fn flag(
    port: &dyn DomQueryPort,
    node: &NodeHandle,
    name: &str,
) -> Result<bool, DriverError> {
    Ok(port.attribute(node, name).await?.as_deref() == Some("true"))
}
