// src/templates/faq_card.rs
use crate::animation::FADE_IN_UP;
use crate::content::FaqEntry;

use super::html_escape;

pub fn render(entry: &FaqEntry, position: usize) -> String {
    format!(
        r#"<div class="faq-item" {}>
            <div class="faq-card">
                <h3 class="card-title">{}</h3>
                <p class="card-description">{}</p>
            </div>
        </div>"#,
        FADE_IN_UP.staggered(position).style_attr(),
        html_escape(entry.question),
        html_escape(entry.answer)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQ_ENTRIES;

    #[test]
    fn question_is_heading_and_answer_is_body() {
        for (i, entry) in FAQ_ENTRIES.iter().enumerate() {
            let html = render(entry, i);
            assert!(html.contains(&format!(
                r#"<h3 class="card-title">{}</h3>"#,
                html_escape(entry.question)
            )));
            assert!(html.contains(&format!(
                r#"<p class="card-description">{}</p>"#,
                html_escape(entry.answer)
            )));
        }
    }

    #[test]
    fn apostrophes_are_escaped() {
        let html = render(&FAQ_ENTRIES[1], 1);
        assert!(html.contains("donation&#39;s journey"));
    }
}
