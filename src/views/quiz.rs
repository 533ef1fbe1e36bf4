use maud::{html, Markup};

use crate::{models::Question, names};

pub fn question(question: &Question, number: usize, total: usize) -> Markup {
    html! {
        article style="width: fit-content;" {
            p style="color: #666; font-size: 0.9rem;" {
                "Question " strong { (number) } " of " (total)
            }
            progress value=(number - 1) max=(total) {}

            h3 { (question.question) }

            form id="quiz-answer-form" method="post" action=(names::QUIZ_URL) {
                fieldset {
                    @for option in &question.options {
                        label {
                            input type="radio" name="answer" value=(option) required;
                            (option)
                        }
                    }
                }
                input type="submit" value=(if number == total { "Finish" } else { "Next" });
            }
        }
    }
}
