//! List page messages

#[derive(Debug, Clone)]
pub enum ContentMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Open the selected row
    Confirm,
}
