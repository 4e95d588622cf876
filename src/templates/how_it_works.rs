// src/templates/how_it_works.rs
use rand::Rng;

use super::{blockchain, faq_card, html_escape, particles, process_step, render_page};
use crate::animation::FADE_IN_UP;
use crate::content::{
    BENEFITS, CHARITIES_PATH, CTA_TEXT, CTA_TITLE, FAQ_ENTRIES, FAQ_INTRO, FAQ_TITLE, HERO_SUBTITLE,
    HERO_TITLE, HOW_IT_WORKS_PATH, PROCESS_STEPS, TECH_INTRO, TECH_TITLE,
};
use crate::icons::Icon;
use crate::particles::Viewport;

/// The whole "How It Works" page for the given year.
///
/// `rng` places both particle backgrounds; pass a seeded generator for
/// reproducible output.
pub fn render<R: Rng + ?Sized>(year: i32, viewport: Option<Viewport>, rng: &mut R) -> String {
    let steps: String = PROCESS_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| process_step::render(step, i))
        .collect();

    let faqs: String = FAQ_ENTRIES
        .iter()
        .enumerate()
        .map(|(i, entry)| faq_card::render(entry, i))
        .collect();

    let benefits: String = BENEFITS
        .iter()
        .map(|b| format!("<li>{}<span>{}</span></li>", Icon::CheckCircle.svg(""), html_escape(b)))
        .collect();

    let hero_particles = particles::render(rng, viewport);
    let cta_particles = particles::render(rng, viewport);

    let content = format!(
        r#"
    <section class="section section-hero">
        {hero_particles}
        <div class="container section-inner">
            <div class="section-heading">
                <h1 {fade}>{hero_title}</h1>
                <p class="lead" {fade}>{hero_subtitle}</p>
            </div>
        </div>
    </section>

    <section class="section">
        <div class="container">
            <div class="steps">
                {steps}
            </div>
        </div>
    </section>

    <section class="section section-muted">
        <div class="container section-inner">
            <div class="tech-grid">
                <div class="tech-copy">
                    <h2>{tech_title}</h2>
                    <p class="lead">{tech_intro}</p>
                    <ul class="benefits">{benefits}</ul>
                </div>
                <div class="tech-visual">
                    {visualization}
                </div>
            </div>
        </div>
    </section>

    <section class="section">
        <div class="container">
            <div class="section-heading">
                <h2>{faq_title}</h2>
                <p class="lead">{faq_intro}</p>
            </div>
            <div class="faq-grid">
                {faqs}
            </div>
        </div>
    </section>

    <section class="section section-muted">
        {cta_particles}
        <div class="container section-inner">
            <div class="section-heading">
                <h2>{cta_title}</h2>
                <p class="lead">{cta_text}</p>
                <div class="cta-buttons">
                    <a href="{charities}" class="btn btn-primary btn-lg">Start Donating {arrow}</a>
                    <a href="{charities}" class="btn btn-outline btn-lg">Browse Charities</a>
                </div>
            </div>
        </div>
    </section>
    "#,
        hero_particles = hero_particles,
        fade = FADE_IN_UP.style_attr(),
        hero_title = HERO_TITLE,
        hero_subtitle = html_escape(HERO_SUBTITLE),
        steps = steps,
        tech_title = TECH_TITLE,
        tech_intro = TECH_INTRO,
        benefits = benefits,
        visualization = blockchain::render(),
        faq_title = FAQ_TITLE,
        faq_intro = FAQ_INTRO,
        faqs = faqs,
        cta_particles = cta_particles,
        cta_title = CTA_TITLE,
        cta_text = CTA_TEXT,
        charities = CHARITIES_PATH,
        arrow = Icon::ArrowRight.svg(""),
    );

    render_page("How It Works", HOW_IT_WORKS_PATH, &content, year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::PARTICLE_COUNT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn page() -> String {
        render(2025, None, &mut StdRng::seed_from_u64(2025))
    }

    fn hrefs(html: &str) -> Vec<String> {
        html.split("href=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn renders_without_external_data() {
        let html = page();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn every_step_appears_once() {
        let html = page();
        for step in PROCESS_STEPS.iter() {
            let badge = format!(r#"<div class="step-badge">{}</div>"#, step.number);
            assert_eq!(html.matches(&badge).count(), 1);
            assert_eq!(html.matches(&format!("<h3>{}</h3>", step.title)).count(), 1);
            assert_eq!(html.matches(&html_escape(step.description)).count(), 1);
        }
        assert_eq!(html.matches(r#"class="step""#).count(), 4);
    }

    #[test]
    fn every_faq_has_heading_and_body() {
        let html = page();
        for entry in FAQ_ENTRIES.iter() {
            assert!(html.contains(&format!(
                r#"<h3 class="card-title">{}</h3>"#,
                html_escape(entry.question)
            )));
            assert!(html.contains(&format!(
                r#"<p class="card-description">{}</p>"#,
                html_escape(entry.answer)
            )));
        }
        assert_eq!(html.matches(r#"class="faq-card""#).count(), 6);
    }

    #[test]
    fn links_resolve_to_known_paths() {
        let html = page();
        let links = hrefs(&html);
        let distinct: BTreeSet<&str> = links.iter().map(String::as_str).collect();
        assert_eq!(
            distinct,
            BTreeSet::from(["/", "/how-it-works", "/charities", "/about-us"])
        );
        assert_eq!(links.iter().filter(|l| *l == "/about-us").count(), 2);
        assert!(html.contains(r#"<a href="/how-it-works" class="nav-link active" aria-current="page">"#));
        assert_eq!(html.matches("nav-link active").count(), 1);
    }

    #[test]
    fn copyright_uses_render_year() {
        assert!(page().contains("© 2025 Trace the Change. All rights reserved."));
        let later = render(2040, None, &mut StdRng::seed_from_u64(1));
        assert!(later.contains("© 2040 Trace the Change. All rights reserved."));
    }

    #[test]
    fn two_particle_fields_and_one_visualization() {
        let html = page();
        assert_eq!(html.matches(r#"class="particles""#).count(), 2);
        assert_eq!(html.matches(r#"class="particle""#).count(), 2 * PARTICLE_COUNT);
        assert_eq!(html.matches(r#"class="chain-tile""#).count(), 5);
        assert_eq!(html.matches(r#"class="chain-sweep""#).count(), 1);
    }

    #[test]
    fn sections_in_order() {
        let html = page();
        let order = [
            "class=\"header\"",
            HERO_TITLE,
            "class=\"steps\"",
            TECH_TITLE,
            FAQ_TITLE,
            CTA_TITLE,
            "class=\"footer\"",
        ];
        let positions: Vec<usize> = order.iter().map(|m| html.find(m).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
    }

    #[test]
    fn benefits_and_wallet_action() {
        let html = page();
        for benefit in BENEFITS {
            assert!(html.contains(&format!("<span>{}</span>", benefit)));
        }
        assert_eq!(html.matches("data-wallet-connect").count(), 1);
    }

    #[test]
    fn seed_fixes_output() {
        let viewport = Viewport::new(1280, 720);
        let a = render(2025, viewport, &mut StdRng::seed_from_u64(8));
        let b = render(2025, viewport, &mut StdRng::seed_from_u64(8));
        let c = render(2025, viewport, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
