// src/templates/process_step.rs
use crate::animation::FADE_IN_UP;
use crate::content::ProcessStepData;

use super::html_escape;

/// One numbered step. `position` staggers the entrance within the list.
pub fn render(step: &ProcessStepData, position: usize) -> String {
    format!(
        r#"<div class="step" {}>
            <div class="step-badge">{}</div>
            <div class="step-body">
                <div class="step-title">
                    <span class="step-icon">{}</span>
                    <h3>{}</h3>
                </div>
                <p>{}</p>
            </div>
        </div>"#,
        FADE_IN_UP.staggered(position).style_attr(),
        step.number,
        step.icon.svg("icon-lg"),
        html_escape(step.title),
        html_escape(step.description)
    )
}
