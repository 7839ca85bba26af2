use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use uikit_types::NavigationItem;

/// Expansion flag plus the single active entry shared by every item.
///
/// `active_label` is always one of the declared labels, or `None` when the
/// rail was built without items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarSelectionState {
    expanded: bool,
    active_label: Option<String>,
    labels: Vec<String>,
}

impl SidebarSelectionState {
    /// Starts expanded with the first declared label active.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        Self {
            expanded: true,
            active_label: labels.first().cloned(),
            labels,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn active_label(&self) -> Option<&str> {
        self.active_label.as_deref()
    }

    /// Collapsed <-> Expanded. Leaves the active entry alone.
    pub fn toggle_expansion(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Makes `label` the active entry. Last write wins.
    ///
    /// Labels that were never declared are ignored so the active entry always
    /// names a real item. Returns whether the selection was applied.
    pub fn select_item(&mut self, label: &str) -> bool {
        if !self.labels.iter().any(|declared| declared == label) {
            return false;
        }
        self.active_label = Some(label.to_string());
        true
    }
}

/// Everything one sidebar entry needs to draw itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItemProps<'a> {
    pub item: &'a NavigationItem,
    pub is_active: bool,
    pub is_expanded: bool,
    pub is_focused: bool,
}

/// Sidebar rail state: selection plus focus flags and hit-test areas.
#[derive(Debug, Clone)]
pub struct SidebarState {
    items: Vec<NavigationItem>,
    selection: SidebarSelectionState,
    /// Focus flag for the container in the global focus tree.
    pub container_focus: FocusFlag,
    /// Focus flag for the collapse toggle.
    pub toggle_focus: FocusFlag,
    /// Focus flags for each item; kept in sync with `items` length.
    pub item_focus_flags: Vec<FocusFlag>,
    /// Last rendered area of the rail.
    pub last_area: Rect,
    /// Last rendered area of the collapse toggle.
    pub toggle_area: Rect,
    /// Last computed per-item row areas for hit testing.
    pub per_item_areas: Vec<Rect>,
    /// Item under the mouse pointer.
    pub hovered_index: Option<usize>,
}

impl SidebarState {
    pub fn new(items: Vec<NavigationItem>) -> Self {
        let selection = SidebarSelectionState::new(items.iter().map(|item| item.label.clone()));
        let item_focus_flags = (0..items.len())
            .map(|index| FocusFlag::named(&format!("sidebar.item.{index}")))
            .collect();
        Self {
            items,
            selection,
            container_focus: FocusFlag::named("sidebar"),
            toggle_focus: FocusFlag::named("sidebar.toggle"),
            item_focus_flags,
            last_area: Rect::default(),
            toggle_area: Rect::default(),
            per_item_areas: Vec::new(),
            hovered_index: None,
        }
    }

    /// The eight entries of the demo rail; Dashboard carries the alert dot.
    pub fn default_items() -> Vec<NavigationItem> {
        vec![
            NavigationItem::new("◫", "Dashboard").flagged(),
            NavigationItem::new("▥", "Statistics"),
            NavigationItem::new("☺", "Users"),
            NavigationItem::new("▣", "Inventory"),
            NavigationItem::new("◰", "Orders"),
            NavigationItem::new("$", "Billings"),
            NavigationItem::new("≡", "Settings"),
            NavigationItem::new("?", "Help"),
        ]
    }

    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }

    pub fn selection(&self) -> &SidebarSelectionState {
        &self.selection
    }

    pub fn is_expanded(&self) -> bool {
        self.selection.is_expanded()
    }

    pub fn active_label(&self) -> Option<&str> {
        self.selection.active_label()
    }

    pub fn toggle_expansion(&mut self) {
        self.selection.toggle_expansion();
    }

    pub fn select_item(&mut self, label: &str) -> bool {
        self.selection.select_item(label)
    }

    /// Props for each entry, in declaration order.
    pub fn item_props(&self) -> Vec<SidebarItemProps<'_>> {
        let active = self.active_label();
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| SidebarItemProps {
                item,
                is_active: active == Some(item.label.as_str()),
                is_expanded: self.is_expanded(),
                is_focused: self.item_focus_flags.get(index).is_some_and(FocusFlag::get),
            })
            .collect()
    }

    /// Index of the item holding focus, if any.
    pub fn focused_index(&self) -> Option<usize> {
        self.item_focus_flags.iter().position(FocusFlag::get)
    }

    /// Entry to describe in the collapsed tooltip: hovered, then focused,
    /// then the active one.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.hovered_index.or_else(|| self.focused_index()).or_else(|| {
            let active = self.active_label()?;
            self.items.iter().position(|item| item.label == active)
        })
    }

    /// Next (or previous) item flag from the focused one, wrapping at the ends.
    pub fn cycle_focus(&self, forward: bool) -> Option<FocusFlag> {
        let len = self.item_focus_flags.len();
        if len == 0 {
            return None;
        }
        let next = match self.focused_index() {
            Some(index) if forward => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
            None => 0,
        };
        self.item_focus_flags.get(next).cloned()
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(Self::default_items())
    }
}

impl HasFocus for SidebarState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.toggle_focus);
        for flag in &self.item_focus_flags {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
