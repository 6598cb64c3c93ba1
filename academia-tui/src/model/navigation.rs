//! Sidebar navigation
//!
//! The sidebar is a shallow tree: top-level items plus collapsible groups.
//! Selection moves over the flattened rows, so a collapsed group's
//! children are skipped.

use std::collections::BTreeSet;

/// Leaf item; each one opens a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Home,
    ManageUsers,
    CreateUser,
}

/// Collapsible group
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NavGroupId {
    AdminUsers,
}

#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub icon: &'static str,
}

#[derive(Debug, Clone)]
pub enum NavEntry {
    Item(NavItem),
    Group {
        id: NavGroupId,
        icon: &'static str,
        children: Vec<NavItem>,
    },
}

/// One visible line of the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRow {
    Item {
        id: NavItemId,
        icon: &'static str,
        nested: bool,
    },
    Group {
        id: NavGroupId,
        icon: &'static str,
        expanded: bool,
    },
}

pub struct NavigationState {
    pub entries: Vec<NavEntry>,
    pub expanded_groups: BTreeSet<NavGroupId>,
    /// Index into [`NavigationState::rows`]
    pub selected: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            entries: vec![
                NavEntry::Item(NavItem {
                    id: NavItemId::Home,
                    icon: "⌂",
                }),
                NavEntry::Group {
                    id: NavGroupId::AdminUsers,
                    icon: "@",
                    children: vec![
                        NavItem {
                            id: NavItemId::ManageUsers,
                            icon: "✎",
                        },
                        NavItem {
                            id: NavItemId::CreateUser,
                            icon: "+",
                        },
                    ],
                },
            ],
            expanded_groups: BTreeSet::new(),
            selected: 0,
        }
    }

    /// Flattened visible rows
    pub fn rows(&self) -> Vec<NavRow> {
        let mut rows = Vec::new();
        for entry in &self.entries {
            match entry {
                NavEntry::Item(item) => rows.push(NavRow::Item {
                    id: item.id,
                    icon: item.icon,
                    nested: false,
                }),
                NavEntry::Group { id, icon, children } => {
                    let expanded = self.is_expanded(*id);
                    rows.push(NavRow::Group {
                        id: *id,
                        icon: *icon,
                        expanded,
                    });
                    if expanded {
                        rows.extend(children.iter().map(|child| NavRow::Item {
                            id: child.id,
                            icon: child.icon,
                            nested: true,
                        }));
                    }
                }
            }
        }
        rows
    }

    pub fn is_expanded(&self, id: NavGroupId) -> bool {
        self.expanded_groups.contains(&id)
    }

    /// Children follow their group, so the group row keeps its index
    pub fn toggle_group(&mut self, id: NavGroupId) {
        if !self.expanded_groups.remove(&id) {
            self.expanded_groups.insert(id);
        }
        self.clamp_selection();
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < self.rows().len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows().len().saturating_sub(1);
    }

    pub fn current_row(&self) -> Option<NavRow> {
        self.rows().get(self.selected).copied()
    }

    /// Move the selection to `id`, opening its group if needed
    pub fn select_item(&mut self, id: NavItemId) {
        let parent = self.entries.iter().find_map(|entry| match entry {
            NavEntry::Group {
                id: group,
                children,
                ..
            } if children.iter().any(|child| child.id == id) => Some(*group),
            _ => None,
        });
        if let Some(group) = parent {
            self.expanded_groups.insert(group);
        }
        if let Some(index) = self
            .rows()
            .iter()
            .position(|row| matches!(row, NavRow::Item { id: item, .. } if *item == id))
        {
            self.selected = index;
        }
    }

    fn clamp_selection(&mut self) {
        let last = self.rows().len().saturating_sub(1);
        self.selected = self.selected.min(last);
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
