use crate::adapters::illustration::placeholder;
use crate::core::{DocumentExporter, Storage, TextGenerator};
use crate::domain::story::{StoryRequest, StoryState, Theme, UNTITLED_STORY};
use crate::utils::error::{BazaiError, Result};

pub const MISSING_API_KEY: &str = "Please enter your Gemini API Key.";
pub const MISSING_DETAILS: &str = "Please fill in all story details.";
pub const SCENES: [&str; 2] = [
    "Scene 1: The adventure begins.",
    "Scene 2: A new friend appears.",
];

/// 建立故事生成的提示詞
pub fn story_prompt(request: &StoryRequest) -> String {
    format!(
        "Create a children's story with the following details:\n\
         - Age group: {}\n\
         - Theme: {}\n\
         - Main characters: {}\n\
         - Moral or lesson: {}\n\
         - Additional requirements: {}\n\n\
         The story should be appropriate for children, engaging, and include a clear beginning, middle, and end.\n\
         Please format the story with proper paragraphs and include a title.",
        request.age_group,
        request.theme,
        request.characters.trim(),
        request.moral.trim(),
        request.extra_prompt.trim()
    )
}

/// Splits generated text into (title, body). Single-line text has no title.
pub fn split_title(text: &str) -> (String, String) {
    match text.split_once('\n') {
        Some((first, rest)) => (
            first.trim_matches(|c| c == '#' || c == ' ').to_string(),
            rest.trim().to_string(),
        ),
        None => (UNTITLED_STORY.to_string(), text.to_string()),
    }
}

fn validate_request(request: &StoryRequest) -> Result<()> {
    let custom_blank = matches!(&request.theme, Theme::Custom(theme) if theme.trim().is_empty());
    let blank = [&request.characters, &request.moral, &request.extra_prompt]
        .iter()
        .any(|field| field.trim().is_empty());

    if blank || custom_blank {
        return Err(BazaiError::ValidationError {
            message: MISSING_DETAILS.to_string(),
        });
    }
    Ok(())
}

pub struct StorybookGenerator<G: TextGenerator> {
    generator: Option<G>,
}

impl<G: TextGenerator> StorybookGenerator<G> {
    pub fn new(generator: Option<G>) -> Self {
        Self { generator }
    }

    /// Produces the next view state.
    ///
    /// A successful call always replaces the whole of `state`: title, story and
    /// illustrations come only from this request, nothing is merged from the
    /// previous story. `state` is read for logging only. On a validation error
    /// the caller keeps its old state.
    pub async fn generate(&self, state: &StoryState, request: &StoryRequest) -> Result<StoryState> {
        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| BazaiError::ValidationError {
                message: MISSING_API_KEY.to_string(),
            })?;
        validate_request(request)?;

        tracing::info!(
            "✨ Creating story (age group: {}, theme: {})",
            request.age_group,
            request.theme
        );

        // 生成失敗時錯誤訊息直接成為故事內容
        let text = match generator.generate(&story_prompt(request)).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Story generation failed: {}", e);
                e.to_string()
            }
        };

        let (title, story) = split_title(&text);
        let illustrations: Vec<_> = SCENES
            .iter()
            .enumerate()
            .map(|(idx, scene)| placeholder(idx, scene))
            .collect();
        tracing::debug!(
            "Generated {} illustrations, replacing '{}'",
            illustrations.len(),
            state.title
        );

        Ok(StoryState {
            title,
            story,
            illustrations,
        })
    }
}

/// Exports the current state and stores it under `filename`.
pub async fn export_state<E: DocumentExporter, S: Storage>(
    state: &StoryState,
    exporter: &E,
    storage: &S,
    filename: &str,
) -> Result<()> {
    if !state.has_story() {
        return Err(BazaiError::ValidationError {
            message: "There is no story to export yet.".to_string(),
        });
    }

    let data = exporter.export(&state.to_document())?;
    tracing::debug!("Writing storybook ({} bytes) to storage", data.len());
    storage.write_file(filename, &data).await?;
    Ok(())
}
