//! The UI root.
//!
//! [`Ui`] owns the widget arena, the engine, the focus chain and the active modal. A frame is a
//! single call to [`Ui::layout`]: the root is placed full-screen, containers split their area
//! among children recursively (placing and drawing each child in turn), and the active modal is
//! drawn last on top of everything.
//!
//! All state here is touched from one thread. Other threads reach the session through
//! [`UiHandle`], whose closures run in [`Ui::drain_tasks`].

use super::core::geom::Bounds;
use super::core::layout::{self, Axis, SplitArea};
use super::engine::{allow_unknown, Engine, EngineError, Screen};
use super::error::UiError;
use super::focus::FocusChain;
use super::handle::{Task, UiHandle};
use super::listeners::{ListenerId, Listeners};
use super::modal::Modal;
use super::widgets::{
    CheckList, ChoiceEvent, Container, Node, Paragraph, RadioList, ViewState, Widget, WidgetId,
};
use crate::core::{Command, Key, KeyCode};
use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::SlotMap;
use std::sync::mpsc;

/// Global bindings installed by [`Ui::start`].
pub fn default_bindings() -> Vec<(Key, Command)> {
    vec![
        (Key::ctrl(KeyCode::Char('c')), Command::Quit),
        (Key::simple(KeyCode::Tab), Command::FocusNext),
        (Key::alt(KeyCode::Tab), Command::FocusPrev),
        (Key::simple(KeyCode::BackTab), Command::FocusPrev),
    ]
}

pub struct Ui<E: Engine = Screen> {
    engine: E,
    nodes: SlotMap<WidgetId, Node>,
    root: Option<WidgetId>,
    started: bool,
    modal: Option<Modal>,
    focused: Option<WidgetId>,
    focused_before_modal: Option<WidgetId>,
    default_focus: Option<WidgetId>,
    chain: FocusChain,
    /// Regions each widget was drawn into, first-drawn first.
    regions: FxHashMap<WidgetId, Vec<String>>,
    /// Regions placed during the current frame.
    drawn: FxHashSet<String>,
    listeners: Listeners,
    redraw: bool,
    quit: bool,
    tx: mpsc::Sender<Task<E>>,
    rx: mpsc::Receiver<Task<E>>,
}

impl<E: Engine> Ui<E> {
    pub fn new(engine: E) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            engine,
            nodes: SlotMap::with_key(),
            root: None,
            started: false,
            modal: None,
            focused: None,
            focused_before_modal: None,
            default_focus: None,
            chain: FocusChain::new(),
            regions: FxHashMap::default(),
            drawn: FxHashSet::default(),
            listeners: Listeners::new(),
            redraw: false,
            quit: false,
            tx,
            rx,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn handle(&self) -> UiHandle<E> {
        UiHandle::new(self.tx.clone())
    }

    // ---------------------------------------------------------------------
    // Tree construction
    // ---------------------------------------------------------------------

    pub fn add(&mut self, widget: impl Into<Widget>) -> WidgetId {
        self.nodes.insert(Node::new(widget))
    }

    pub fn add_horizontal(&mut self) -> WidgetId {
        self.add(Container::horizontal())
    }

    pub fn add_vertical(&mut self) -> WidgetId {
        self.add(Container::vertical())
    }

    pub fn add_paragraph(&mut self) -> WidgetId {
        self.add(Paragraph::new())
    }

    pub fn add_check_list<I, S>(&mut self, items: I) -> WidgetId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add(CheckList::new(items))
    }

    pub fn add_radio_list<I, S>(&mut self, items: I) -> WidgetId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add(RadioList::new(items))
    }

    /// Appends `child` to `container`.
    ///
    /// # Panics
    ///
    /// Panics when `container` is not a live container or when the edge would make `container`
    /// its own descendant.
    pub fn add_child(&mut self, container: WidgetId, child: WidgetId) {
        assert!(
            self.nodes.contains_key(child),
            "add_child: child widget does not exist"
        );
        assert!(
            !self.is_ancestor_or_self(child, container),
            "add_child: adding this child would create a cycle"
        );
        let kind = match self.nodes.get(container) {
            Some(node) => node.widget.kind(),
            None => panic!("add_child: container widget does not exist"),
        };
        let Some(c) = self
            .nodes
            .get_mut(container)
            .and_then(|n| n.widget.as_container_mut())
        else {
            panic!("add_child: target is a {kind}, not a container");
        };
        c.push(child);
        if let Some(child_node) = self.nodes.get_mut(child) {
            child_node.view.set_parent(Some(container));
        }
        self.redraw_widget(container);
    }

    pub fn set_border(&mut self, container: WidgetId, border: bool) -> bool {
        let Some(c) = self
            .nodes
            .get_mut(container)
            .and_then(|n| n.widget.as_container_mut())
        else {
            return false;
        };
        c.set_border(border);
        self.redraw_widget(container);
        true
    }

    /// Sets the widget drawn full-screen.
    ///
    /// # Panics
    ///
    /// Panics once the first frame has been laid out.
    pub fn set_root(&mut self, root: WidgetId) {
        assert!(!self.started, "can not set root after starting UI");
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    /// Widget focused by the first frame that finds nothing focused.
    pub fn set_default_focus(&mut self, id: WidgetId) {
        self.default_focus = Some(id);
    }

    /// Destroys `id` and its subtree. Containers listing a destroyed widget drop it.
    pub fn remove(&mut self, id: WidgetId) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            let Some(node) = self.nodes.remove(cur) else {
                continue;
            };
            if let Widget::Container(c) = &node.widget {
                stack.extend(c.children().iter().copied());
            }
            for other in self.nodes.values_mut() {
                if let Some(c) = other.widget.as_container_mut() {
                    c.remove(cur);
                }
            }
            self.forget(cur);
            tracing::debug!(widget = node.view.name(), kind = node.widget.kind(), "removed widget");
        }
        self.redraw = true;
        true
    }

    fn forget(&mut self, id: WidgetId) {
        self.chain.forget(id);
        self.listeners.clear_widget(id);
        if let Some(names) = self.regions.remove(&id) {
            for name in names {
                self.warn_on_error("delete region", &name, |e| {
                    allow_unknown(e.delete_region(&name))
                });
            }
        }
        if self.root == Some(id) {
            self.root = None;
        }
        if self.default_focus == Some(id) {
            self.default_focus = None;
        }
        if self.focused_before_modal == Some(id) {
            self.focused_before_modal = None;
        }
        if self.focused == Some(id) {
            self.focused = None;
            self.warn_on_error("set current", "", |e| e.set_current(None));
        }
        if self.modal.as_ref().is_some_and(|m| m.child() == id) {
            self.modal = None;
            let restore = self.focused_before_modal.take();
            self.set_focused(restore);
        }
    }

    fn is_ancestor_or_self(&self, ancestor: WidgetId, id: WidgetId) -> bool {
        let mut cur = Some(id);
        // Bounded by arena size so a malformed parent chain cannot spin forever.
        for _ in 0..=self.nodes.len() {
            let Some(c) = cur else {
                return false;
            };
            if c == ancestor {
                return true;
            }
            cur = self.nodes.get(c).and_then(|n| n.view.parent());
        }
        false
    }

    // ---------------------------------------------------------------------
    // Inspection
    // ---------------------------------------------------------------------

    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: WidgetId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn view(&self, id: WidgetId) -> Option<&ViewState> {
        self.nodes.get(id).map(|n| &n.view)
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.nodes.get(id).map(|n| &n.widget)
    }

    pub fn container(&self, id: WidgetId) -> Option<&Container> {
        self.widget(id).and_then(Widget::as_container)
    }

    pub fn paragraph(&self, id: WidgetId) -> Option<&Paragraph> {
        self.widget(id).and_then(Widget::as_paragraph)
    }

    pub fn check_list(&self, id: WidgetId) -> Option<&CheckList> {
        self.widget(id).and_then(Widget::as_check_list)
    }

    pub fn radio_list(&self, id: WidgetId) -> Option<&RadioList> {
        self.widget(id).and_then(Widget::as_radio_list)
    }

    /// Regions `id` was drawn into and that are still live.
    pub fn regions_of(&self, id: WidgetId) -> &[String] {
        self.regions.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Whether `id` reaches the session through its parent links.
    pub fn is_attached(&self, id: WidgetId) -> bool {
        let mut cur = Some(id);
        for _ in 0..=self.nodes.len() {
            let Some(node) = cur.and_then(|c| self.nodes.get(c)) else {
                return false;
            };
            if node.view.is_attached() {
                return true;
            }
            cur = node.view.parent();
        }
        false
    }

    // ---------------------------------------------------------------------
    // Frame
    // ---------------------------------------------------------------------

    /// Installs the global key bindings. The first frame may follow.
    pub fn start(&mut self) -> Result<(), UiError> {
        if self.root.is_none() {
            return Err(UiError::NoRoot);
        }
        for (key, command) in default_bindings() {
            self.engine
                .bind(None, key, command)
                .map_err(|e| UiError::engine("bind", "", e))?;
        }
        self.started = true;
        self.redraw = true;
        tracing::info!("ui started");
        Ok(())
    }

    pub fn bind_global(&mut self, key: Key, command: Command) -> Result<(), UiError> {
        self.engine
            .bind(None, key, command)
            .map_err(|e| UiError::engine("bind", "", e))
    }

    pub fn unbind_global(&mut self, key: Key) {
        self.engine.unbind(None, key);
    }

    /// Lays out and draws one frame.
    ///
    /// On error the frame is abandoned where it failed; the next call starts over.
    pub fn layout(&mut self) -> Result<(), UiError> {
        let root = self
            .root
            .filter(|r| self.nodes.contains_key(*r))
            .ok_or(UiError::NoRoot)?;
        self.started = true;
        self.redraw = false;
        self.drawn.clear();

        let (max_x, max_y) = self.engine.size();
        tracing::debug!(max_x, max_y, "layout");

        let Some(node) = self.nodes.get_mut(root) else {
            return Err(UiError::NoRoot);
        };
        node.view.context(None, 0, 0, max_x, max_y);
        node.view.attach();
        let region = node.view.name().to_string();

        self.place(root, &region, Bounds::new(0, 0, max_x, max_y), false, None)?;
        self.draw_node(root, &region, true, 0)?;
        self.draw_modal()?;

        if self.focused.is_none() {
            if let Some(id) = self.default_focus.take() {
                tracing::debug!("set default focus");
                self.set_focused(Some(id));
            }
        }
        self.collect_stale_regions();
        self.sync_current();
        Ok(())
    }

    /// Allocates or resizes `region`, clears it and sets its decoration.
    fn place(
        &mut self,
        id: WidgetId,
        region: &str,
        bounds: Bounds,
        frame: bool,
        title: Option<&str>,
    ) -> Result<(), UiError> {
        allow_unknown(self.engine.set_region(region, bounds))
            .map_err(|e| UiError::engine("set region", region, e))?;
        self.engine
            .clear(region)
            .map_err(|e| UiError::engine("clear", region, e))?;
        self.engine
            .set_frame(region, frame, title)
            .map_err(|e| UiError::engine("set frame", region, e))?;

        self.drawn.insert(region.to_string());
        let names = self.regions.entry(id).or_default();
        if !names.iter().any(|n| n == region) {
            names.push(region.to_string());
        }
        Ok(())
    }

    fn draw_node(
        &mut self,
        id: WidgetId,
        region: &str,
        register: bool,
        depth: usize,
    ) -> Result<(), UiError> {
        let Some(node) = self.nodes.get(id) else {
            return Ok(());
        };
        if let Widget::Container(container) = &node.widget {
            if container.is_empty() {
                return Ok(());
            }
            let nested = node
                .view
                .parent()
                .and_then(|p| self.nodes.get(p))
                .is_some_and(|p| p.widget.as_container().is_some());
            let (x, y) = node.view.pos();
            let (width, height) = node.view.size();
            let area = SplitArea {
                x,
                y,
                width,
                height,
                nested,
            };
            let children = container.children().to_vec();
            let axis = container.axis();
            let border = container.border();
            return self.draw_children(id, &children, area, axis, border, register, depth);
        }

        node.widget
            .draw(id, &node.view, region, &mut self.engine)
            .map_err(|e| UiError::engine("draw", region, e))?;
        if register && node.widget.is_interactive() && self.chain.register(id) {
            tracing::debug!(widget = node.view.name(), kind = node.widget.kind(), "focusable");
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_children(
        &mut self,
        parent: WidgetId,
        children: &[WidgetId],
        area: SplitArea,
        axis: Axis,
        border: bool,
        register: bool,
        depth: usize,
    ) -> Result<(), UiError> {
        let bands = layout::split(area, axis, children.len());
        tracing::debug!(
            depth,
            count = children.len(),
            x = area.x,
            y = area.y,
            width = area.width,
            height = area.height,
            nested = area.nested,
            "split"
        );

        for (index, (&child, b)) in children.iter().zip(bands).enumerate() {
            let Some(node) = self.nodes.get(child) else {
                continue;
            };
            let region = format!("{}-{}", node.view.name(), index);
            tracing::debug!(depth, index, x0 = b.x0, y0 = b.y0, x1 = b.x1, y1 = b.y1, "place");

            let wrap = |source: UiError| UiError::Draw {
                index,
                region: region.clone(),
                source: Box::new(source),
            };
            self.place(child, &region, b, border, None).map_err(wrap)?;
            if let Some(node) = self.nodes.get_mut(child) {
                node.view
                    .context(Some(parent), b.x0, b.y0, b.width(), b.height());
            }
            self.draw_node(child, &region, register, depth + 1)
                .map_err(wrap)?;
        }
        Ok(())
    }

    /// Draws the active modal's child into its own centered region, detached from the tree.
    fn draw_modal(&mut self) -> Result<(), UiError> {
        let Some(modal) = self.modal.as_ref() else {
            return Ok(());
        };
        let child = modal.child();
        let title = modal.title().to_string();
        let (max_x, max_y) = self.engine.size();
        let geometry = modal.geometry(max_x, max_y);
        let Some(region) = self.nodes.get(child).map(|n| n.view.name().to_string()) else {
            return Ok(());
        };

        self.place(child, &region, geometry.bounds, true, Some(&title))?;
        self.engine
            .set_on_top(&region)
            .map_err(|e| UiError::engine("set on top", &region, e))?;
        let b = geometry.bounds;
        if let Some(node) = self.nodes.get_mut(child) {
            node.view
                .context(None, b.x0, b.y0, geometry.width, geometry.height);
            node.view.attach();
        }
        // Modal content is focused explicitly and never joins the chain.
        self.draw_node(child, &region, false, 0)
    }

    /// Deletes engine regions nothing placed this frame.
    fn collect_stale_regions(&mut self) {
        let stale: Vec<String> = self
            .engine
            .region_names()
            .into_iter()
            .filter(|n| !self.drawn.contains(n))
            .collect();
        if stale.is_empty() {
            return;
        }
        for name in &stale {
            tracing::debug!(region = %name, "drop stale region");
            self.warn_on_error("delete region", name, |e| {
                allow_unknown(e.delete_region(name))
            });
        }
        let drawn = &self.drawn;
        for names in self.regions.values_mut() {
            names.retain(|n| drawn.contains(n));
        }
    }

    // ---------------------------------------------------------------------
    // Focus
    // ---------------------------------------------------------------------

    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    pub fn focus_chain(&self) -> &[WidgetId] {
        self.chain.entries()
    }

    pub fn focus(&mut self, id: WidgetId) {
        self.set_focused(Some(id));
    }

    pub fn release_focus(&mut self) {
        self.set_focused(None);
    }

    pub fn focus_next(&mut self) {
        self.toggle_focus(false);
    }

    pub fn focus_prev(&mut self) {
        self.toggle_focus(true);
    }

    fn toggle_focus(&mut self, backwards: bool) {
        if self.modal.is_some() {
            return;
        }
        let next = if backwards {
            self.chain.prev(self.focused)
        } else {
            self.chain.next(self.focused)
        };
        if let Some(id) = next {
            self.set_focused(Some(id));
        }
    }

    fn set_focused(&mut self, target: Option<WidgetId>) {
        if let Some(prev) = self.focused.take() {
            if let Some(node) = self.nodes.get_mut(prev) {
                node.view.on_focus_lost();
            }
            self.warn_on_error("set current", "", |e| e.set_current(None));
            self.redraw = true;
        }
        let Some(id) = target else {
            return;
        };
        let Some(node) = self.nodes.get_mut(id) else {
            tracing::debug!("focus target no longer exists");
            return;
        };
        node.view.on_focus();
        self.focused = Some(id);
        self.redraw = true;
        self.sync_current();
    }

    /// Region receiving input for `id`: the modal region while `id` is the modal child, else the
    /// first live region it was drawn into.
    fn focus_region(&self, id: WidgetId) -> Option<String> {
        if self.modal.as_ref().is_some_and(|m| m.child() == id) {
            let name = self.nodes.get(id)?.view.name();
            if self.engine.has_region(name) {
                return Some(name.to_string());
            }
        }
        self.regions
            .get(&id)?
            .iter()
            .find(|n| self.engine.has_region(n))
            .cloned()
    }

    fn sync_current(&mut self) {
        let target = self.focused.and_then(|id| self.focus_region(id));
        if self.engine.current() == target.as_deref() {
            return;
        }
        self.warn_on_error("set current", target.as_deref().unwrap_or(""), |e| {
            e.set_current(target.as_deref())
        });
    }

    // ---------------------------------------------------------------------
    // Modal
    // ---------------------------------------------------------------------

    pub fn active_modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    /// Shows `modal`, hiding any modal already active, and focuses its child.
    pub fn show_modal(&mut self, modal: Modal) {
        if !self.nodes.contains_key(modal.child()) {
            tracing::warn!(title = modal.title(), "show modal: child widget does not exist");
            return;
        }
        if self.modal.is_some() {
            self.hide_modal();
        }
        tracing::info!(
            title = modal.title(),
            width_percent = modal.width_percent(),
            "show modal"
        );
        let child = modal.child();
        self.focused_before_modal = self.focused;
        self.modal = Some(modal);
        self.set_focused(Some(child));
        self.redraw = true;
    }

    /// Releases the modal region and gives focus back to whatever had it before the modal was
    /// shown. No-op without an active modal.
    pub fn hide_modal(&mut self) {
        let Some(modal) = self.modal.take() else {
            return;
        };
        tracing::info!(title = modal.title(), "hide modal");
        let child = modal.child();
        if let Some(region) = self.nodes.get(child).map(|n| n.view.name().to_string()) {
            self.warn_on_error("delete region", &region, |e| {
                allow_unknown(e.delete_region(&region))
            });
            if let Some(names) = self.regions.get_mut(&child) {
                names.retain(|n| *n != region);
            }
        }
        self.redraw = true;
        let restore = self.focused_before_modal.take();
        self.set_focused(restore);
    }

    // ---------------------------------------------------------------------
    // Content mutation
    // ---------------------------------------------------------------------

    pub fn set_text(&mut self, id: WidgetId, text: &str) -> bool {
        self.with_paragraph(id, |p| p.set_text(text))
    }

    pub fn append(&mut self, id: WidgetId, text: &str) -> bool {
        self.with_paragraph(id, |p| p.append(text))
    }

    pub fn append_line(&mut self, id: WidgetId, text: &str) -> bool {
        self.with_paragraph(id, |p| p.append_line(text))
    }

    pub fn new_line(&mut self, id: WidgetId) -> bool {
        self.with_paragraph(id, Paragraph::new_line)
    }

    pub fn set_auto_scroll(&mut self, id: WidgetId, on: bool) -> bool {
        self.with_paragraph(id, |p| p.set_auto_scroll(on))
    }

    pub fn set_line_wrapping(&mut self, id: WidgetId, on: bool) -> bool {
        self.with_paragraph(id, |p| p.set_line_wrapping(on))
    }

    /// Replaces a list's labels, clearing its check or selection state.
    pub fn set_items<I, S>(&mut self, id: WidgetId, items: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        match &mut node.widget {
            Widget::CheckList(cl) => cl.set_items(items),
            Widget::RadioList(rl) => rl.set_items(items),
            Widget::Container(_) | Widget::Paragraph(_) => return false,
        }
        self.redraw_widget(id);
        true
    }

    /// Toggles item `index` of a list and notifies listeners. Radio lists apply the
    /// single-choice rule.
    pub fn toggle(&mut self, id: WidgetId, index: usize) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        let changes = match &mut node.widget {
            Widget::CheckList(cl) => cl.toggle(index).map(|c| vec![(index, c)]).unwrap_or_default(),
            Widget::RadioList(rl) => rl.toggle(index),
            Widget::Container(_) | Widget::Paragraph(_) => return false,
        };
        self.emit(id, &changes);
        self.redraw_widget(id);
        true
    }

    /// Sets a check list item. Listeners hear about it only when the state changes.
    pub fn set_checked(&mut self, id: WidgetId, index: usize, checked: bool) -> bool {
        let Some(cl) = self
            .nodes
            .get_mut(id)
            .and_then(|n| n.widget.as_check_list_mut())
        else {
            return false;
        };
        if cl.set_checked(index, checked) {
            self.emit(id, &[(index, checked)]);
        }
        self.redraw_widget(id);
        true
    }

    fn with_paragraph(&mut self, id: WidgetId, f: impl FnOnce(&mut Paragraph)) -> bool {
        let Some(p) = self
            .nodes
            .get_mut(id)
            .and_then(|n| n.widget.as_paragraph_mut())
        else {
            return false;
        };
        f(p);
        self.redraw_widget(id);
        true
    }

    // ---------------------------------------------------------------------
    // Listeners
    // ---------------------------------------------------------------------

    /// Registers `listener` for check/selection changes of `id`.
    pub fn on_choice(
        &mut self,
        id: WidgetId,
        listener: impl FnMut(&ChoiceEvent) + 'static,
    ) -> ListenerId {
        self.listeners.add(id, Box::new(listener))
    }

    pub fn remove_listener(&mut self, id: WidgetId, listener: ListenerId) -> bool {
        self.listeners.remove(id, listener)
    }

    fn emit(&mut self, id: WidgetId, changes: &[(usize, bool)]) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let events: Vec<ChoiceEvent> = changes
            .iter()
            .filter_map(|&(index, checked)| {
                let item = node.widget.item(index)?.to_string();
                Some(ChoiceEvent {
                    widget: id,
                    item,
                    index,
                    checked,
                })
            })
            .collect();
        for event in &events {
            self.listeners.emit(event);
        }
    }

    // ---------------------------------------------------------------------
    // Input
    // ---------------------------------------------------------------------

    /// Dispatches `key` through the engine bindings. Returns whether a binding matched.
    pub fn handle_key(&mut self, key: Key) -> bool {
        let Some(command) = self.engine.resolve(key) else {
            return false;
        };
        tracing::debug!(command = command.name(), "key");
        self.apply(command);
        self.redraw = true;
        true
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Quit => self.quit(),
            Command::FocusNext => self.focus_next(),
            Command::FocusPrev => self.focus_prev(),
            Command::CursorUp(id) | Command::CursorDown(id) => {
                let up = matches!(command, Command::CursorUp(_));
                if let Some(node) = self.nodes.get_mut(id) {
                    if node.widget.move_cursor(up) {
                        self.redraw_widget(id);
                    }
                }
            }
            Command::Toggle(id) => {
                let Some(node) = self.nodes.get_mut(id) else {
                    return;
                };
                let changes = match &mut node.widget {
                    Widget::CheckList(cl) => cl.toggle_cursor().into_iter().collect(),
                    Widget::RadioList(rl) => rl.toggle_cursor(),
                    Widget::Container(_) | Widget::Paragraph(_) => Vec::new(),
                };
                self.emit(id, &changes);
                self.redraw_widget(id);
            }
        }
    }

    // ---------------------------------------------------------------------
    // Scheduling
    // ---------------------------------------------------------------------

    /// Schedules a redraw when `id` is attached to this session.
    pub fn redraw_widget(&mut self, id: WidgetId) {
        if self.is_attached(id) {
            self.redraw = true;
        }
    }

    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Runs every queued [`UiHandle`] task. Returns how many ran.
    pub fn drain_tasks(&mut self) -> usize {
        let tasks: Vec<Task<E>> = self.rx.try_iter().collect();
        let count = tasks.len();
        for task in tasks {
            task(self);
        }
        count
    }

    fn warn_on_error(
        &mut self,
        op: &'static str,
        region: &str,
        f: impl FnOnce(&mut E) -> Result<(), EngineError>,
    ) {
        if let Err(err) = f(&mut self.engine) {
            tracing::warn!(op, region, error = %err, "engine call failed");
        }
    }
}

impl Ui<Screen> {
    /// Headless session on an in-memory screen.
    pub fn headless(width: u16, height: u16) -> Self {
        Self::new(Screen::new(width, height))
    }
}

impl<E: Engine> std::fmt::Debug for Ui<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ui")
            .field("widgets", &self.nodes.len())
            .field("root", &self.root)
            .field("focused", &self.focused)
            .field("modal", &self.modal)
            .field("chain", &self.chain.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/session.rs"]
mod tests;
