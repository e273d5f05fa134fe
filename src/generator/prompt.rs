// file: src/generator/prompt.rs
// description: static prompt templates with a single document placeholder
// reference: Internal prompt standards

pub const DOCUMENT_PLACEHOLDER: &str = "{DOCUMENT_TEXT}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    name: &'static str,
    template: &'static str,
}

impl PromptTemplate {
    pub const fn new(name: &'static str, template: &'static str) -> Self {
        Self { name, template }
    }

    pub fn science_quiz() -> Self {
        Self::new(
            "science-quiz",
            include_str!("../../prompts/science-quiz-prompt.txt"),
        )
    }

    pub fn vocabulary() -> Self {
        Self::new(
            "vocabulary",
            include_str!("../../prompts/vocabulary-prompt.txt"),
        )
    }

    pub fn definition_quiz() -> Self {
        Self::new(
            "definition-quiz",
            include_str!("../../prompts/definition-quiz-prompt.txt"),
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Substitutes the first placeholder only; document text that happens to
    /// contain the placeholder string is left alone.
    pub fn fill(&self, document_text: &str) -> String {
        self.template.replacen(DOCUMENT_PLACEHOLDER, document_text, 1)
    }

    pub fn has_placeholder(&self) -> bool {
        self.template.contains(DOCUMENT_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_templates_have_one_placeholder() {
        for template in [
            PromptTemplate::science_quiz(),
            PromptTemplate::vocabulary(),
            PromptTemplate::definition_quiz(),
        ] {
            assert!(template.has_placeholder(), "{}", template.name());
            assert_eq!(
                template.template.matches(DOCUMENT_PLACEHOLDER).count(),
                1,
                "{}",
                template.name()
            );
        }
    }

    #[test]
    fn test_fill_substitutes_document() {
        let template = PromptTemplate::new("test", "Quiz me on:\n{DOCUMENT_TEXT}\nThanks");
        assert_eq!(
            template.fill("Plants need light."),
            "Quiz me on:\nPlants need light.\nThanks"
        );
    }

    #[test]
    fn test_fill_only_first_placeholder() {
        let template = PromptTemplate::new("test", "{DOCUMENT_TEXT} / {DOCUMENT_TEXT}");
        assert_eq!(template.fill("x"), "x / {DOCUMENT_TEXT}");
    }

    #[test]
    fn test_bundled_templates_are_distinct() {
        assert!(PromptTemplate::science_quiz().fill("").contains("SCIENCE QUIZ"));
        assert!(PromptTemplate::vocabulary().fill("").contains("VOCABULARY CARDS"));
        assert!(PromptTemplate::definition_quiz().fill("").contains("DEFINITION QUIZ"));
    }
}
