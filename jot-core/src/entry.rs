use chrono::NaiveDateTime;

/// One journal record. Optional metadata is either present and non-blank, or `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub date: NaiveDateTime,
    pub text: String,
    pub location: Option<String>,
    pub weather: Option<String>,
    pub mood: Option<String>,
    pub tags: Vec<String>,
}

impl JournalEntry {
    /// Creates an entry with no metadata.
    pub fn new(date: NaiveDateTime, text: impl Into<String>) -> Self {
        Self {
            date,
            text: text.into(),
            location: None,
            weather: None,
            mood: None,
            tags: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = non_blank(location);
        self
    }

    pub fn with_weather(mut self, weather: &str) -> Self {
        self.weather = non_blank(weather);
        self
    }

    pub fn with_mood(mut self, mood: &str) -> Self {
        self.mood = non_blank(mood);
        self
    }

    /// Sets the tags, trimming each one and dropping the blank ones.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = tags
            .into_iter()
            .filter_map(|t| non_blank(t.as_ref()))
            .collect();
        self
    }
}

/// `None` for empty or whitespace-only input, otherwise the trimmed value.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
