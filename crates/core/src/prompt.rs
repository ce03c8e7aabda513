use crate::model::QUESTIONS_PER_QUIZ;

/// Instruction prompt asking the generator for a strict JSON quiz on `topics`.
///
/// The topic text is embedded verbatim; the rest of the prompt is fixed so the
/// same topics always produce the same request.
#[must_use]
pub fn quiz_prompt(topics: &str) -> String {
    format!(
        r#"
You are an expert cybersecurity instructor.
Always respond ONLY in STRICT JSON.

Create a cybersecurity quiz with EXACTLY {QUESTIONS_PER_QUIZ} MCQs.

STRICT FORMAT ONLY:

{{
    "quiz": [
        {{"question": "...", "options": ["A. ...", "B. ...", "C. ...", "D. ..."], "correct": "A", "explanation": "..."}}
    ]
}}

No extra text or paragraphs.

Topics:
{topics}
"#
    )
}
