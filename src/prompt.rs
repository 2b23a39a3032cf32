//! Instruction-payload builder for the submission workflow.
//!
//! [`InstructionBuilder`] constructs the single natural-language text block
//! sent to the generation endpoint.  Two mutually exclusive templates exist:
//!
//! * **Debug** — chosen whenever the code box is non-empty: embeds the
//!   language tag, the raw code verbatim, an optional "specific question"
//!   clause, and four fixed instructional directives.
//! * **General** — chosen when only the question box is filled: embeds the
//!   question and a request for an educational explanation.
//!
//! The templates are never combined; a filled code box always wins.

use crate::form::FormState;

// ---------------------------------------------------------------------------
// Template preambles
// ---------------------------------------------------------------------------

/// Persona line + directive list for the debug-this-code template.
const DEBUG_DIRECTIVES: &str = "\
Please provide:
1. Any bugs or issues you find
2. Explanations in simple terms for students
3. Suggested fixes with explanations
4. Learning tips to avoid similar issues

Format your response clearly with sections.";

// ---------------------------------------------------------------------------
// Instruction
// ---------------------------------------------------------------------------

/// A built instruction payload, tagged with the template that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Debug-this-code template (code box was non-empty).
    Debug(String),
    /// General-question template (only the question box was filled).
    General(String),
}

impl Instruction {
    /// The payload text, regardless of which template produced it.
    pub fn text(&self) -> &str {
        match self {
            Instruction::Debug(text) | Instruction::General(text) => text,
        }
    }
}

// ---------------------------------------------------------------------------
// InstructionBuilder
// ---------------------------------------------------------------------------

/// Builds instruction payloads from the current [`FormState`].
///
/// # Example
/// ```rust
/// use codeb::form::FormState;
/// use codeb::prompt::{Instruction, InstructionBuilder};
///
/// let mut form = FormState::new("rust");
/// form.code_text = "fn main() {}".into();
///
/// let instruction = InstructionBuilder::build(&form).unwrap();
/// assert!(matches!(instruction, Instruction::Debug(_)));
/// assert!(instruction.text().contains("fn main() {}"));
/// ```
pub struct InstructionBuilder;

impl InstructionBuilder {
    /// Select a template and build the payload.
    ///
    /// Returns `None` when both fields are empty/whitespace — callers are
    /// expected to have rejected that form already (`InputRequired`), so
    /// `None` here simply means "nothing to send".
    pub fn build(form: &FormState) -> Option<Instruction> {
        let code = form.code_text.trim();
        let question = form.free_text_prompt.trim();

        if !code.is_empty() {
            Some(Instruction::Debug(Self::build_debug(
                &form.language,
                &form.code_text,
                question,
            )))
        } else if !question.is_empty() {
            Some(Instruction::General(Self::build_general(question)))
        } else {
            None
        }
    }

    /// Debug-this-code template.  `code` is embedded raw (untrimmed) so the
    /// model sees exactly what the user pasted.
    fn build_debug(language: &str, code: &str, question: &str) -> String {
        let mut text = String::with_capacity(code.len() + 512);
        text.push_str(&format!(
            "You are CoDeb, an AI code debugging assistant for students. \
             Analyze this {language} code and provide debugging help:\n\n"
        ));
        text.push_str(&format!("CODE:\n```{language}\n{code}\n```\n\n"));
        if !question.is_empty() {
            text.push_str(&format!("SPECIFIC QUESTION: {question}\n\n"));
        }
        text.push_str(DEBUG_DIRECTIVES);
        text
    }

    /// General-question template.
    fn build_general(question: &str) -> String {
        format!(
            "You are CoDeb, an AI coding assistant for students. \
             Answer this programming question in a clear, educational way:\n\n\
             QUESTION: {question}\n\n\
             Please provide a helpful explanation suitable for students \
             learning to code."
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn form(code: &str, prompt: &str) -> FormState {
        let mut f = FormState::new("python");
        f.code_text = code.into();
        f.free_text_prompt = prompt.into();
        f
    }

    // -----------------------------------------------------------------------
    // Template selection
    // -----------------------------------------------------------------------

    #[test]
    fn empty_form_builds_nothing() {
        assert_eq!(InstructionBuilder::build(&form("", "")), None);
        assert_eq!(InstructionBuilder::build(&form("  \n", "\t ")), None);
    }

    #[test]
    fn code_selects_debug_template() {
        let instruction = InstructionBuilder::build(&form("x = 1", "")).unwrap();
        assert!(matches!(instruction, Instruction::Debug(_)));
    }

    #[test]
    fn prompt_only_selects_general_template() {
        let instruction =
            InstructionBuilder::build(&form("", "what is recursion?")).unwrap();
        assert!(matches!(instruction, Instruction::General(_)));
        assert!(!instruction.text().contains("CODE:"));
    }

    #[test]
    fn code_wins_over_prompt() {
        // Both filled: the debug template must be used, never a blend.
        let instruction =
            InstructionBuilder::build(&form("x = 1", "why does this fail?")).unwrap();
        assert!(matches!(instruction, Instruction::Debug(_)));
    }

    // -----------------------------------------------------------------------
    // Debug template contents
    // -----------------------------------------------------------------------

    #[test]
    fn debug_template_embeds_language_and_code_verbatim() {
        let code = "def add(a, b):\n    return a - b  # oops";
        let mut f = form(code, "");
        f.language = "python".into();

        let instruction = InstructionBuilder::build(&f).unwrap();
        let text = instruction.text();

        assert!(text.contains("python"), "language tag must appear");
        assert!(text.contains(code), "code must appear unmodified");
        assert!(text.contains("```python\n"), "code must be fenced");
    }

    #[test]
    fn debug_template_has_all_four_directives() {
        let instruction = InstructionBuilder::build(&form("x = 1", "")).unwrap();
        let text = instruction.text();

        assert!(text.contains("bugs or issues"));
        assert!(text.contains("simple terms"));
        assert!(text.contains("Suggested fixes"));
        assert!(text.contains("Learning tips"));
        assert!(text.contains("Format your response clearly"));
    }

    #[test]
    fn debug_template_includes_specific_question_when_present() {
        let instruction =
            InstructionBuilder::build(&form("x = 1", "why is x unused?")).unwrap();
        assert!(instruction
            .text()
            .contains("SPECIFIC QUESTION: why is x unused?"));
    }

    #[test]
    fn debug_template_omits_question_clause_when_absent() {
        let instruction = InstructionBuilder::build(&form("x = 1", "")).unwrap();
        assert!(!instruction.text().contains("SPECIFIC QUESTION"));
    }

    #[test]
    fn debug_template_trims_question_but_not_code() {
        let instruction =
            InstructionBuilder::build(&form("x = 1", "  padded?  ")).unwrap();
        assert!(instruction.text().contains("SPECIFIC QUESTION: padded?"));
    }

    // -----------------------------------------------------------------------
    // General template contents
    // -----------------------------------------------------------------------

    #[test]
    fn general_template_embeds_question() {
        let instruction =
            InstructionBuilder::build(&form("", "what is a closure?")).unwrap();
        let text = instruction.text();

        assert!(text.contains("QUESTION: what is a closure?"));
        assert!(text.contains("educational"));
        assert!(text.contains("students"));
    }
}
