//! In-memory stand-in for a Material UI `Select`.
//!
//! The popup renders into a portal under the document body while open and is
//! unmounted on close; every open mints fresh option handles, so a handle kept
//! across a close reports a stale element just like a real browser.

#![allow(dead_code)]


use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use custom_select::{DomQueryPort, DriverError, NodeHandle, Scope, Selector};
use parking_lot::Mutex;

#[derive(Clone, Debug)]
pub struct OptionSpec {
    pub label: String,
    pub value: String,
    pub disabled: bool,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum NodeKind {
    Plain,
    Root,
    Trigger,
    Backdrop,
    Option(usize),
}

#[derive(Clone, Debug)]
struct FakeNode {
    handle: NodeHandle,
    parent: Option<NodeHandle>,
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    kind: NodeKind,
}

impl FakeNode {
    fn new(tag: &str, parent: Option<&NodeHandle>, kind: NodeKind) -> Self {
        Self {
            handle: NodeHandle::new(),
            parent: parent.cloned(),
            tag: tag.to_string(),
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            kind,
        }
    }

    fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }
}

/// One recorded interaction with the fake page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Click {
    Root,
    Trigger,
    Backdrop,
    Option(String),
    Other,
}

#[derive(Debug)]
struct State {
    multiple: bool,
    options: Vec<OptionSpec>,
    nodes: Vec<FakeNode>,
    open: bool,
    clicks: Vec<Click>,
    queries: Vec<Selector>,
}

pub struct FakeWidget {
    root: NodeHandle,
    body: NodeHandle,
    state: Mutex<State>,
}

pub struct FakeWidgetBuilder {
    multiple: bool,
    options: Vec<OptionSpec>,
    root_tag: String,
    native_child: bool,
}

impl FakeWidgetBuilder {
    pub fn option(mut self, label: &str, value: &str) -> Self {
        self.options.push(OptionSpec {
            label: label.to_string(),
            value: value.to_string(),
            disabled: false,
            selected: false,
        });
        self
    }

    pub fn options(mut self, items: &[(&str, &str)]) -> Self {
        for (label, value) in items {
            self = self.option(label, value);
        }
        self
    }

    pub fn disabled(mut self, label: &str) -> Self {
        self.spec_mut(label).disabled = true;
        self
    }

    pub fn selected(mut self, label: &str) -> Self {
        self.spec_mut(label).selected = true;
        self
    }

    /// Renders a native `<select>` inside the root.
    pub fn with_native_child(mut self) -> Self {
        self.native_child = true;
        self
    }

    pub fn with_root_tag(mut self, tag: &str) -> Self {
        self.root_tag = tag.to_string();
        self
    }

    fn spec_mut(&mut self, label: &str) -> &mut OptionSpec {
        self.options
            .iter_mut()
            .find(|spec| spec.label == label)
            .expect("option declared before flagging it")
    }

    pub fn build(self) -> Arc<FakeWidget> {
        let body = FakeNode::new("body", None, NodeKind::Plain);
        let root = FakeNode::new(&self.root_tag, Some(&body.handle), NodeKind::Root)
            .class("MuiInputBase-root")
            .class("MuiOutlinedInput-root");
        let mut trigger = FakeNode::new("div", Some(&root.handle), NodeKind::Trigger)
            .class("MuiSelect-select")
            .attr("role", "button")
            .attr("id", "demo-simple-select");
        if self.multiple {
            trigger = trigger.class("MuiSelect-multiple");
        }
        let input = FakeNode::new("input", Some(&root.handle), NodeKind::Plain)
            .class("MuiSelect-nativeInput")
            .attr("aria-hidden", "true");

        let root_handle = root.handle.clone();
        let body_handle = body.handle.clone();
        let mut nodes = vec![body, root, trigger, input];
        if self.native_child {
            nodes.push(FakeNode::new("select", Some(&root_handle), NodeKind::Plain));
        }

        Arc::new(FakeWidget {
            root: root_handle,
            body: body_handle,
            state: Mutex::new(State {
                multiple: self.multiple,
                options: self.options,
                nodes,
                open: false,
                clicks: Vec::new(),
                queries: Vec::new(),
            }),
        })
    }
}

/// The ten options of the Material UI "basic select" demo shape.
pub const NUMBERS: [(&str, &str); 10] = [
    ("One", "1"),
    ("Two", "2"),
    ("Three", "3"),
    ("Four", "4"),
    ("Five", "5"),
    ("Six", "6"),
    ("Seven", "7"),
    ("Eight", "8"),
    ("Nine", "9"),
    ("Ten", "10"),
];

impl FakeWidget {
    pub fn single() -> FakeWidgetBuilder {
        FakeWidgetBuilder {
            multiple: false,
            options: Vec::new(),
            root_tag: "div".into(),
            native_child: false,
        }
    }

    pub fn multiple() -> FakeWidgetBuilder {
        FakeWidgetBuilder {
            multiple: true,
            ..Self::single()
        }
    }

    pub fn root(&self) -> NodeHandle {
        self.root.clone()
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().open
    }

    pub fn selected_labels(&self) -> Vec<String> {
        self.state
            .lock()
            .options
            .iter()
            .filter(|spec| spec.selected)
            .map(|spec| spec.label.clone())
            .collect()
    }

    pub fn clicks(&self) -> Vec<Click> {
        self.state.lock().clicks.clone()
    }

    pub fn option_clicks(&self) -> usize {
        self.clicks()
            .iter()
            .filter(|click| matches!(click, Click::Option(_)))
            .count()
    }

    pub fn queries(&self) -> Vec<Selector> {
        self.state.lock().queries.clone()
    }

    /// Forgets recorded clicks and queries.
    pub fn clear_log(&self) {
        let mut state = self.state.lock();
        state.clicks.clear();
        state.queries.clear();
    }

    /// Sets the popup state directly, bypassing the click log.
    pub fn force_open(&self) {
        let mut state = self.state.lock();
        if !state.open {
            self.render_popup(&mut state);
        }
    }
}

impl FakeWidget {
    fn render_popup(&self, state: &mut State) {
        let container = FakeNode::new("div", Some(&self.body), NodeKind::Backdrop)
            .class("MuiMenu-root")
            .class("MuiPopover-root")
            .attr("role", "presentation");
        let listbox = FakeNode::new("ul", Some(&container.handle), NodeKind::Plain)
            .class("MuiMenu-list")
            .attr("role", "listbox");
        let mut rendered = Vec::with_capacity(state.options.len());
        for index in 0..state.options.len() {
            rendered.push(
                FakeNode::new("li", Some(&listbox.handle), NodeKind::Option(index))
                    .class("MuiMenuItem-root"),
            );
        }
        state.nodes.push(container);
        state.nodes.push(listbox);
        state.nodes.extend(rendered);
        state.open = true;
    }

    fn unmount_popup(&self, state: &mut State) {
        let view: &State = state;
        let popup: Vec<NodeHandle> = view
            .nodes
            .iter()
            .filter(|node| is_in_popup(view, node))
            .map(|node| node.handle.clone())
            .collect();
        state.nodes.retain(|node| !popup.contains(&node.handle));
        state.open = false;
    }
}

fn is_in_popup(state: &State, node: &FakeNode) -> bool {
    let mut current = Some(node);
    while let Some(item) = current {
        if item.kind == NodeKind::Backdrop {
            return true;
        }
        current = item
            .parent
            .as_ref()
            .and_then(|parent| lookup(state, parent));
    }
    false
}

fn lookup<'a>(state: &'a State, handle: &NodeHandle) -> Option<&'a FakeNode> {
    state.nodes.iter().find(|node| &node.handle == handle)
}

fn live<'a>(state: &'a State, handle: &NodeHandle) -> Result<&'a FakeNode, DriverError> {
    lookup(state, handle).ok_or_else(|| DriverError::StaleElement(handle.to_string()))
}

fn is_descendant(state: &State, node: &FakeNode, ancestor: &NodeHandle) -> bool {
    let mut parent = node.parent.as_ref();
    while let Some(handle) = parent {
        if handle == ancestor {
            return true;
        }
        parent = lookup(state, handle).and_then(|item| item.parent.as_ref());
    }
    false
}

fn attribute_of(state: &State, node: &FakeNode, name: &str) -> Option<String> {
    match (&node.kind, name) {
        (NodeKind::Option(_), "role") => Some("option".into()),
        (NodeKind::Option(index), "data-value") => Some(state.options[*index].value.clone()),
        (NodeKind::Option(index), "aria-selected") => {
            Some(state.options[*index].selected.to_string())
        }
        (NodeKind::Option(index), "aria-disabled") => {
            state.options[*index].disabled.then(|| "true".to_string())
        }
        (NodeKind::Trigger, "aria-expanded") => Some(state.open.to_string()),
        (_, "class") if !node.classes.is_empty() => Some(node.classes.join(" ")),
        _ => node.attrs.get(name).cloned(),
    }
}

fn text_of(state: &State, node: &FakeNode) -> String {
    match node.kind {
        NodeKind::Option(index) => state.options[index].label.clone(),
        _ => String::new(),
    }
}

fn matches_css(state: &State, node: &FakeNode, css: &str) -> bool {
    let compound = CssCompound::parse(css);
    if let Some(tag) = &compound.tag {
        if !node.tag.eq_ignore_ascii_case(tag) {
            return false;
        }
    }
    compound
        .classes
        .iter()
        .all(|class| node.classes.contains(class))
        && compound.attrs.iter().all(|(name, expected)| {
            let actual = attribute_of(state, node, name);
            match expected {
                Some(value) => actual.as_deref() == Some(value.as_str()),
                None => actual.is_some(),
            }
        })
}

#[derive(Debug, Default)]
struct CssCompound {
    tag: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

impl CssCompound {
    fn parse(css: &str) -> Self {
        let mut compound = CssCompound::default();
        let mut rest = css.trim();
        let tag_end = rest.find(&['.', '['][..]).unwrap_or(rest.len());
        if tag_end > 0 {
            compound.tag = Some(rest[..tag_end].to_string());
        }
        rest = &rest[tag_end..];
        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix('.') {
                let end = after.find(&['.', '['][..]).unwrap_or(after.len());
                compound.classes.push(after[..end].to_string());
                rest = &after[end..];
            } else if let Some(after) = rest.strip_prefix('[') {
                let end = after.find(']').expect("closed attribute selector");
                let body = &after[..end];
                let attr = match body.split_once('=') {
                    Some((name, value)) => (
                        name.trim().to_string(),
                        Some(value.trim().trim_matches(&['"', '\''][..]).to_string()),
                    ),
                    None => (body.trim().to_string(), None),
                };
                compound.attrs.push(attr);
                rest = &after[end + 1..];
            } else {
                panic!("unsupported css selector: {css}");
            }
        }
        compound
    }
}

#[async_trait]
impl DomQueryPort for FakeWidget {
    async fn find_all(
        &self,
        scope: Scope<'_>,
        selector: &Selector,
    ) -> Result<Vec<NodeHandle>, DriverError> {
        let mut state = self.state.lock();
        state.queries.push(selector.clone());
        let state = &*state;
        if let Scope::Node(handle) = scope {
            live(state, handle)?;
        }

        let in_scope = |node: &FakeNode| match scope {
            Scope::Document => true,
            Scope::Node(ancestor) => is_descendant(state, node, ancestor),
        };

        let found = match selector {
            Selector::Css(css) => state
                .nodes
                .iter()
                .filter(|node| in_scope(*node) && matches_css(state, *node, css))
                .map(|node| node.handle.clone())
                .collect(),
            Selector::XPath(expr) => {
                let query = xpath::OptionXPath::parse(expr)
                    .unwrap_or_else(|err| panic!("unsupported xpath {expr}: {err}"));
                state
                    .nodes
                    .iter()
                    .filter(|node| in_scope(*node))
                    .filter(|node| {
                        query.matches(
                            |name| attribute_of(state, node, name),
                            &text_of(state, node),
                        )
                    })
                    .map(|node| node.handle.clone())
                    .collect()
            }
        };
        Ok(found)
    }

    async fn attribute(
        &self,
        node: &NodeHandle,
        name: &str,
    ) -> Result<Option<String>, DriverError> {
        let state = self.state.lock();
        let item = live(&state, node)?;
        Ok(attribute_of(&state, item, name))
    }

    async fn text(&self, node: &NodeHandle) -> Result<String, DriverError> {
        let state = self.state.lock();
        let item = live(&state, node)?;
        Ok(text_of(&state, item))
    }

    async fn click(&self, node: &NodeHandle) -> Result<(), DriverError> {
        let mut state = self.state.lock();
        let kind = live(&state, node)?.kind.clone();
        match kind {
            NodeKind::Root | NodeKind::Trigger => {
                state.clicks.push(if kind == NodeKind::Root {
                    Click::Root
                } else {
                    Click::Trigger
                });
                if !state.open {
                    self.render_popup(&mut state);
                }
            }
            NodeKind::Backdrop => {
                state.clicks.push(Click::Backdrop);
                self.unmount_popup(&mut state);
            }
            NodeKind::Option(index) => {
                let label = state.options[index].label.clone();
                if state.options[index].disabled {
                    return Err(DriverError::NotInteractable(label));
                }
                state.clicks.push(Click::Option(label));
                if state.multiple {
                    let spec = &mut state.options[index];
                    spec.selected = !spec.selected;
                } else {
                    for (pos, spec) in state.options.iter_mut().enumerate() {
                        spec.selected = pos == index;
                    }
                    self.unmount_popup(&mut state);
                }
            }
            NodeKind::Plain => state.clicks.push(Click::Other),
        }
        Ok(())
    }

    async fn tag_name(&self, node: &NodeHandle) -> Result<String, DriverError> {
        let state = self.state.lock();
        Ok(live(&state, node)?.tag.clone())
    }
}
