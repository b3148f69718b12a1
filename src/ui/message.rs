#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    Quit,

    // Input
    InputChar(char),
    InputText(String),
    Backspace,
    ClearInput,
    Submit,

    // Results
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
}
