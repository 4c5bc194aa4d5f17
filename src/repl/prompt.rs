//! Router-style prompt for the configuration shell

use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

/// Prompt shown while in configuration mode
pub struct ConfigPrompt {
    /// Prompt text, e.g. `(config)# `
    text: String,
}

impl ConfigPrompt {
    /// Create a new prompt
    ///
    /// # Arguments
    /// * `text` - Prompt text rendered on the left
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for ConfigPrompt {
    fn default() -> Self {
        Self::new("(config)# ")
    }
}

impl Prompt for ConfigPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        "".into()
    }

    /// The indicator is part of the left prompt already
    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompt() {
        let prompt = ConfigPrompt::default();
        assert_eq!(prompt.render_prompt_left(), "(config)# ");
    }

    #[test]
    fn test_custom_prompt() {
        let prompt = ConfigPrompt::new("edge1(config)# ");
        assert_eq!(prompt.render_prompt_left(), "edge1(config)# ");
    }

    #[test]
    fn test_right_prompt_and_indicator_empty() {
        let prompt = ConfigPrompt::default();
        assert_eq!(prompt.render_prompt_right(), "");
        assert_eq!(prompt.render_prompt_indicator(PromptEditMode::Default), "");
    }

    #[test]
    fn test_multiline_indicator() {
        let prompt = ConfigPrompt::default();
        assert_eq!(prompt.render_prompt_multiline_indicator(), "... ");
    }
}
