/// Global actions that are valid whatever section has focus.
#[derive(Debug, Clone)]
pub enum AppMessage {
    Quit,
    NextSection,
    PreviousSection,
    Submit,
    DismissNotice,
}
