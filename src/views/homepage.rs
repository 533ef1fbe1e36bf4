use maud::{html, Markup};

use crate::names;

pub fn landing_page() -> Markup {
    html! {
        section.landing-hero {
            h1 { "Quiz yourself on anything" }
            p.landing-hero-desc {
                "Pick a topic, choose how many questions you want, and get a freshly "
                "generated multiple-choice quiz. Answer one question at a time and "
                "review every explanation at the end."
            }
            div.landing-cta {
                a role="button" href=(names::GENERATE_URL) { "Generate a quiz" }
            }
        }
    }
}
