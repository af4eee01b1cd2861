use mui_select_core_types::Selector;
use serde::{Deserialize, Serialize};

/// Rendering contract of the target widget. Defaults follow Material UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectMarkers {
    /// CSS for a native `<select>` nested under the root.
    pub native_select: String,
    /// Tag name that marks the root itself as native (compared ignoring case).
    pub native_tag: String,
    /// CSS for the class that flags a multi-select widget.
    pub multiple: String,
    /// CSS for every rendered option node.
    pub option: String,
    /// CSS for the trigger while the popup is open.
    pub expanded_trigger: String,
    /// CSS for the popup container; also the backdrop clicked to close it.
    pub menu_container: String,
    /// Role value matched inside XPath option queries.
    pub option_role: String,
    pub selected_attribute: String,
    pub disabled_attribute: String,
    pub value_attribute: String,
}

impl Default for SelectMarkers {
    fn default() -> Self {
        Self {
            native_select: "select".into(),
            native_tag: "select".into(),
            multiple: ".MuiSelect-multiple".into(),
            option: "[role=option]".into(),
            expanded_trigger: "[role=button][aria-expanded=true]".into(),
            menu_container: ".MuiMenu-root[role=presentation]".into(),
            option_role: "option".into(),
            selected_attribute: "aria-selected".into(),
            disabled_attribute: "aria-disabled".into(),
            value_attribute: "data-value".into(),
        }
    }
}

impl SelectMarkers {
    pub fn native_select(&self) -> Selector {
        Selector::css(&self.native_select)
    }

    pub fn multiple(&self) -> Selector {
        Selector::css(&self.multiple)
    }

    pub fn option(&self) -> Selector {
        Selector::css(&self.option)
    }

    pub fn expanded_trigger(&self) -> Selector {
        Selector::css(&self.expanded_trigger)
    }

    pub fn menu_container(&self) -> Selector {
        Selector::css(&self.menu_container)
    }
}
