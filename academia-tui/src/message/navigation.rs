//! Sidebar messages

#[derive(Debug, Clone)]
pub enum NavigationMessage {
    SelectPrevious,
    SelectNext,
    /// Open the item or expand/collapse the group
    Confirm,
    SelectFirst,
    SelectLast,
}
