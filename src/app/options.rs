use std::time::Duration;

#[derive(Debug, Clone)]
pub struct UiOptions {
    /// How long the event loop waits for input before redrawing.
    pub tick_rate: Duration,
    pub show_help: bool,
    /// Ask for a second Ctrl+Q when the form holds unsubmitted input.
    pub confirm_exit: bool,
    /// Re-check a field on every change instead of only on submit.
    pub live_validation: bool,
    pub editor_tab_width: usize,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            show_help: true,
            confirm_exit: true,
            live_validation: true,
            editor_tab_width: 2,
        }
    }
}

impl UiOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_live_validation(mut self, enabled: bool) -> Self {
        self.live_validation = enabled;
        self
    }

    pub fn with_editor_tab_width(mut self, width: usize) -> Self {
        self.editor_tab_width = width.max(1);
        self
    }
}
