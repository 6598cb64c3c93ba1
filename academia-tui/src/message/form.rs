//! Form input messages
//!
//! Routed to the form of the current screen: the auth form, the edit form
//! of the users page, or the create form.

#[derive(Debug, Clone)]
pub enum FormMessage {
    NextField,
    PrevField,
    Input(char),
    Backspace,
    /// ← on a selector
    CyclePrev,
    /// → on a selector
    CycleNext,
    Submit,
}
