use maud::{html, Markup};

use crate::{names, services::FeedbackReport};

pub fn feedback(report: &FeedbackReport) -> Markup {
    html! {
        h1 { "Your results" }
        article.score-card {
            p.score {
                "You scored " strong { (report.score) " / " (report.total) }
                " (" (format!("{:.1}", report.percentage)) "%)"
            }
            progress value=(report.score) max=(report.total) {}
            @if !report.is_complete {
                p style="color: #666;" { "You left this quiz before answering every question." }
            }
        }

        h2 { "Review" }
        @for (idx, item) in report.items.iter().enumerate() {
            article.review-item.correct[item.is_correct].incorrect[!item.is_correct] {
                header {
                    strong { (idx + 1) ". " }
                    (item.question.question)
                }
                ul {
                    @for option in &item.question.options {
                        li {
                            (option)
                            @if *option == item.question.correct {
                                " " mark { "correct answer" }
                            }
                            @if item.answer == Some(option.as_str()) {
                                " " em { "your answer" }
                            }
                        }
                    }
                }
                @if let Some(answer) = item.answer {
                    @if !item.question.options.iter().any(|o| o == answer) {
                        p { "Your answer: " em { (if answer.is_empty() { "(none)" } else { answer }) } }
                    }
                } @else {
                    p { em { "Not answered" } }
                }
                footer { (item.question.explanation) }
            }
        }

        a role="button" href=(names::GENERATE_URL) { "Try another quiz" }
    }
}
