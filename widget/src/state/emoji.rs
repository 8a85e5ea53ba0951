//! Emoji catalog and picker selection state.
//!
//! Category 0 is the dynamic "Recent" list; the rest are static. The picker
//! falls back to the default category whenever the requested one has nothing
//! to show.

#[cfg(test)]
#[path = "emoji_test.rs"]
mod emoji_test;

pub const RECENT_INDEX: usize = 0;
pub const DEFAULT_INDEX: usize = 1;
pub const RECENT_CAPACITY: usize = 24;

#[derive(Debug)]
pub struct Category {
    pub name: &'static str,
    pub icon: &'static str,
    pub emojis: &'static [&'static str],
}

#[rustfmt::skip]
pub static CATALOG: [Category; 8] = [
    Category { name: "Recent", icon: "🕒", emojis: &[] },
    Category {
        name: "Default",
        icon: "😀",
        emojis: &[
            "😀", "😃", "😄", "😁", "😆", "😅", "😂", "🤣",
            "😊", "😇", "🙂", "🙃", "😉", "😌", "😍", "🥰",
            "😘", "😗", "😙", "😚", "😋", "😛", "😝", "😜",
            "🤪", "🤨", "🧐", "🤓", "😎", "🤩", "🥳", "😏",
            "😒", "😞", "😔", "😟", "😕", "🙁", "☹️", "😣",
            "😖", "😫", "😩", "🥺", "😢", "😭", "😤", "😠",
            "😡", "🤬", "🤯", "😳", "🥵", "🥶", "😱", "😨",
            "😰", "😥", "😓", "🤗", "🤔", "🤭", "🤫", "🤥",
            "😶", "😐", "😑", "😬", "🙄", "😯", "😦", "😧",
            "😮", "😲", "🥱", "😴", "🤤", "😪", "😵", "🤐",
            "🥴", "🤢", "🤮", "🤧", "😷", "🤒", "🤕", "🤑",
        ],
    },
    Category {
        name: "Gestures",
        icon: "👍",
        emojis: &[
            "👍", "👎", "👊", "✊", "🤛", "🤜", "🤞", "✌️",
            "🤟", "🤘", "👌", "🤌", "🤏", "👈", "👉", "👆",
            "🖕", "👇", "☝️", "👋", "🤚", "🖐️", "✋", "🖖",
            "👏", "🙌", "🤲", "🤝", "🙏", "✍️", "💪", "🦾",
            "🦿", "🦵", "🦶", "👂", "🦻", "👃", "👶", "👧",
            "🧒", "👦", "👩", "🧑", "👨", "👩‍🦱", "🧑‍🦱", "👨‍🦱",
        ],
    },
    Category {
        name: "Objects",
        icon: "👓",
        emojis: &[
            "👓", "🕶️", "🥽", "🥼", "🦺", "👔", "👕", "👖",
            "🧣", "🧤", "🧥", "🧦", "👗", "👘", "🥻", "🩱",
            "🩲", "🩳", "👙", "👚", "👛", "👜", "👝", "🛍️",
            "🎒", "👞", "👟", "🥾", "🥿", "👠", "👡", "🩰",
            "👢", "👑", "👒", "🎩", "🎓", "🧢", "⛑️", "💄",
            "💍", "💼", "☂️", "🌂", "🧳", "🧭", "🧱", "🧲",
            "🧴", "🧷", "🧹", "🧺", "🧻", "🧼", "🧽", "🧯",
        ],
    },
    Category {
        name: "Nature",
        icon: "🌱",
        emojis: &[
            "🌱", "🌲", "🌳", "🌴", "🌵", "🌶️", "🌷", "🌸",
            "🌹", "🌺", "🌻", "🌼", "🌾", "🌿", "☘️", "🍀",
            "🍁", "🍂", "🍃", "🍄", "🌰", "🌍", "🌎", "🌏",
            "🌐", "🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗",
            "🌘", "🌙", "🌚", "🌛", "🌜", "🌝", "🌞", "⭐",
            "🌟", "🌠", "☀️", "⛅", "☁️", "⛈️", "🌤️", "🌥️",
            "🌦️", "🌧️", "🌨️", "🌩️", "🌪️", "🌫️", "🌬️", "🌀",
            "🌈", "☂️", "☔", "⚡", "❄️", "☃️", "⛄", "🔥",
        ],
    },
    Category {
        name: "Food",
        icon: "🍎",
        emojis: &[
            "🍎", "🍏", "🍐", "🍊", "🍋", "🍌", "🍉", "🍇",
            "🍓", "🍈", "🍒", "🍑", "🥭", "🍍", "🥥", "🥝",
            "🍅", "🍆", "🥑", "🥦", "🥬", "🥒", "🌶️", "🌽",
            "🥕", "🥔", "🍠", "🥐", "🥯", "🍞", "🥖", "🥨",
            "🧀", "🥚", "🍳", "🥞", "🥓", "🥩", "🍗", "🍖",
            "🌭", "🍔", "🍟", "🍕", "🥪", "🥙", "🌮", "🌯",
            "🥗", "🥘", "🥫", "🍝", "🍜", "🍲", "🍛", "🍣",
            "🍱", "🍘", "🍙", "🍚", "🍙", "🍢", "🍡", "🍧",
        ],
    },
    Category {
        name: "Activities",
        icon: "⚽",
        emojis: &[
            "⚽", "🏀", "🏈", "⚾", "🥎", "🎾", "🏐", "🏉",
            "🥏", "🎱", "🏓", "🏸", "🥅", "🏒", "🏑", "🏏",
            "🥍", "🏹", "🎣", "🥊", "🥋", "🎽", "🛹", "🛷",
            "⛸️", "🥌", "🎿", "⛷️", "🏂", "🏋️", "🤼", "🤸",
            "🤺", "⛹️", "🤹", "🧘", "🏄", "🏊", "🤽", "🚣",
            "🧗", "🚵", "🚴", "🏇", "🤾", "🏌️", "🏆", "🥇",
            "🥈", "🥉", "🏅", "🎖️", "🏵️", "🎗️", "🎫", "🎟️",
            "🎪", "🤹", "🎭", "🩰", "🎨", "🎬", "🎤", "🎧",
        ],
    },
    Category {
        name: "Symbols",
        icon: "❤️",
        emojis: &[
            "❤️", "🧡", "💛", "💚", "💙", "💜", "🖤", "🤍",
            "🤎", "💔", "❣️", "💕", "💞", "💓", "💗", "💖",
            "💘", "💝", "💟", "☮️", "✝️", "☪️", "🕉️", "☸️",
            "✡️", "🔯", "🕎", "☯️", "☦️", "🛐", "⛎", "♈",
            "♉", "♊", "♋", "♌", "♍", "♎", "♏", "♐",
            "♑", "♒", "♓", "🆔", "⚛️", "🉑", "☢️", "☣️",
            "📴", "📳", "🈶", "🈚", "🈸", "🈺", "🈷️", "✴️",
            "🆚", "💮", "🉐", "㊙️", "㊗️", "🈴", "🈵", "🈹",
        ],
    },
];

/// Picker state that survives the picker closing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmojiState {
    active: usize,
    recent: Vec<String>,
}

impl Default for EmojiState {
    fn default() -> Self {
        Self { active: DEFAULT_INDEX, recent: Vec::new() }
    }
}

impl EmojiState {
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn recent(&self) -> &[String] {
        &self.recent
    }

    /// Entries of the category at `index`; empty when out of range.
    pub fn entries(&self, index: usize) -> Vec<&str> {
        if index == RECENT_INDEX {
            return self.recent.iter().map(String::as_str).collect();
        }
        CATALOG.get(index).map(|c| c.emojis.to_vec()).unwrap_or_default()
    }

    pub fn current_entries(&self) -> Vec<&str> {
        self.entries(self.active)
    }

    /// Only an empty Recent tab is disabled.
    pub fn is_disabled(&self, index: usize) -> bool {
        index == RECENT_INDEX && self.recent.is_empty()
    }

    /// Switch tabs. Empty or unknown categories land on the default tab.
    pub fn select_category(&mut self, index: usize) {
        self.active = if index < CATALOG.len() && !self.entries(index).is_empty() {
            index
        } else {
            DEFAULT_INDEX
        };
    }

    /// Move `emoji` to the front of Recent, dropping the oldest past capacity.
    pub fn record(&mut self, emoji: &str) {
        self.recent.retain(|e| e != emoji);
        self.recent.insert(0, emoji.to_owned());
        self.recent.truncate(RECENT_CAPACITY);
    }
}
