use maud::{html, Markup};

use crate::names;

/// Values echoed back into the form when it is re-rendered.
#[derive(Default)]
pub struct FormState<'a> {
    pub topic: &'a str,
    pub num_questions: Option<&'a str>,
    pub error: Option<&'a str>,
}

pub fn generate_form(state: &FormState) -> Markup {
    let default_count = names::DEFAULT_QUESTION_COUNT.to_string();
    let num_questions = state
        .num_questions
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(default_count.as_str());

    html! {
        h1 { "Generate a quiz" }

        @if let Some(error) = state.error {
            p.form-error role="alert" { (error) }
        }

        article style="width: fit-content;" {
            form id="quiz-generation-form" method="post" action=(names::GENERATE_URL) {
                label {
                    "Topic"
                    input name="topic"
                          id="topic"
                          type="text"
                          autocomplete="off"
                          placeholder="e.g. Photosynthesis"
                          value=(state.topic)
                          required;
                }
                label {
                    "Number of questions"
                    input name="num_questions"
                          id="num-questions"
                          type="number"
                          min=(names::MIN_QUESTION_COUNT)
                          max=(names::MAX_QUESTION_COUNT)
                          value=(num_questions)
                          required;
                    small style="display: block; margin-top: 0.5rem; color: #666;" {
                        "Between " (names::MIN_QUESTION_COUNT) " and " (names::MAX_QUESTION_COUNT)
                        ". Generating can take a few seconds."
                    }
                }
                input type="submit" id="submit-btn" value="Generate";
            }
        }
    }
}
