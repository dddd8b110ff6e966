use ratatui::style::Color;

pub const CATEGORY_COLORS: [Color; 10] = [
    Color::Rgb(255, 153, 0),
    Color::Rgb(0, 176, 80),
    Color::Rgb(0, 153, 255),
    Color::Rgb(255, 204, 0),
    Color::Rgb(153, 0, 255),
    Color::Rgb(255, 51, 102),
    Color::Rgb(128, 255, 0),
    Color::Rgb(255, 102, 0),
    Color::Rgb(102, 51, 255),
    Color::Rgb(0, 255, 255),
];

pub const TIME_SETTINGS: TimeSettings = TimeSettings {
    poll_ms: 16,
    target_fps: 24,
};

// A token still matches with roughly 40% of its characters edited; tokens
// starting past 100 characters into a field are outside the search window.
pub const FUZZY_SETTINGS: FuzzySettings = FuzzySettings {
    max_score: 0.4,
    window_chars: 100,
};

pub const DELAY_SETTINGS: DelaySettings = DelaySettings {
    suggest_base_ms: 600,
    suggest_jitter_ms: 400,
    jump_ms: 300,
};

pub struct TimeSettings {
    pub poll_ms: u64,
    pub target_fps: u64,
}

pub struct FuzzySettings {
    pub max_score: f64,
    pub window_chars: usize,
}

pub struct DelaySettings {
    pub suggest_base_ms: u64,
    pub suggest_jitter_ms: u64,
    pub jump_ms: u64,
}
