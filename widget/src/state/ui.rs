//! Local UI toggles for the chat frame.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatTab {
    #[default]
    Message,
    Help,
}

impl ChatTab {
    pub const ALL: [ChatTab; 2] = [ChatTab::Message, ChatTab::Help];

    pub fn label(self) -> &'static str {
        match self {
            Self::Message => "Message",
            Self::Help => "Help",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: ChatTab,
    pub emoji_picker_open: bool,
}

impl UiState {
    pub fn toggle_emoji_picker(&mut self) {
        self.emoji_picker_open = !self.emoji_picker_open;
    }

    pub fn close_emoji_picker(&mut self) {
        self.emoji_picker_open = false;
    }

    /// Switching tabs also dismisses the picker.
    pub fn select_tab(&mut self, tab: ChatTab) {
        self.active_tab = tab;
        self.emoji_picker_open = false;
    }
}
