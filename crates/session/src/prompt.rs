/// Blocking user prompts (confirmation dialogs and text input).
pub trait Prompter {
    /// Yes/no confirmation.
    fn confirm(&mut self, message: &str) -> bool;

    /// Free-text answer; `None` when the user cancels.
    fn ask(&mut self, message: &str, default: Option<&str>) -> Option<String>;
}
