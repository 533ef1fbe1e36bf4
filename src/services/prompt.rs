/// Builds the instruction sent to the completion API.
///
/// `topic` is embedded verbatim.
pub fn build_prompt(topic: &str, num_questions: u32) -> String {
    format!(
        r#"Generate {num_questions} multiple choice questions about {topic}.
Format as JSON with structure:
{{
    "questions": [
        {{
            "question": "question text",
            "options": ["A", "B", "C", "D"],
            "correct": "correct option",
            "explanation": "explanation for the answer"
        }}
    ]
}}
Each question must have exactly 4 options, and "correct" must repeat the text of one of them exactly.
Respond with the JSON object only."#
    )
}
