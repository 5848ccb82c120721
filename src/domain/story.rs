use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_STATE_TITLE: &str = "Your Story Will Appear Here";
pub const UNTITLED_STORY: &str = "Generated Story";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    Toddler,
    EarlyReader,
    Preteen,
}

impl AgeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Toddler => "3-5 years",
            AgeGroup::EarlyReader => "6-8 years",
            AgeGroup::Preteen => "9-12 years",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 接受 "6-8" 或 "6-8 years"
        let key = s.trim().trim_end_matches("years").trim();
        match key {
            "3-5" => Ok(AgeGroup::Toddler),
            "6-8" => Ok(AgeGroup::EarlyReader),
            "9-12" => Ok(AgeGroup::Preteen),
            _ => Err(format!(
                "unknown age group '{}', expected one of: 3-5, 6-8, 9-12",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Adventure,
    Fantasy,
    Friendship,
    Nature,
    Learning,
    Family,
    Animals,
    Space,
    Custom(String),
}

impl Theme {
    pub const PRESETS: [Theme; 8] = [
        Theme::Adventure,
        Theme::Fantasy,
        Theme::Friendship,
        Theme::Nature,
        Theme::Learning,
        Theme::Family,
        Theme::Animals,
        Theme::Space,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Theme::Adventure => "Adventure",
            Theme::Fantasy => "Fantasy",
            Theme::Friendship => "Friendship",
            Theme::Nature => "Nature",
            Theme::Learning => "Learning",
            Theme::Family => "Family",
            Theme::Animals => "Animals",
            Theme::Space => "Space",
            Theme::Custom(theme) => theme,
        }
    }

    /// Preset name, or `Custom` with the supplied free-text theme.
    pub fn resolve(name: &str, custom: Option<&str>) -> Result<Theme, String> {
        if name.trim().eq_ignore_ascii_case("custom") {
            return Ok(Theme::Custom(custom.unwrap_or_default().trim().to_string()));
        }
        Theme::PRESETS
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| format!("unknown theme '{}'", name))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRequest {
    pub age_group: AgeGroup,
    pub theme: Theme,
    pub characters: String,
    pub moral: String,
    pub extra_prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Illustration {
    pub caption: String,
    pub scene_text: String,
    pub svg: String,
}

/// Everything the storybook view shows. Passed in and returned per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryState {
    pub title: String,
    pub story: String,
    pub illustrations: Vec<Illustration>,
}

impl Default for StoryState {
    fn default() -> Self {
        Self {
            title: DEFAULT_STATE_TITLE.to_string(),
            story: String::new(),
            illustrations: Vec::new(),
        }
    }
}

impl StoryState {
    pub fn has_story(&self) -> bool {
        !self.story.is_empty()
    }

    pub fn to_document(&self) -> StoryDocument {
        StoryDocument {
            title: self.title.clone(),
            body: self.story.clone(),
            illustrations: self.illustrations.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryDocument {
    pub title: String,
    pub body: String,
    pub illustrations: Vec<Illustration>,
}
