use crate::ui::tui;

/// Leaves the alternate screen before the report is printed, otherwise the
/// panic message is lost with the TUI frame.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(err) = tui::Tui::restore() {
            tracing::error!("failed to restore terminal: {err}");
        }
        tracing::error!("{panic_info}");
        hook(panic_info);
    }));
}
