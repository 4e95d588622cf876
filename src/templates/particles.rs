// src/templates/particles.rs
use rand::Rng;

use crate::animation::particle_drift;
use crate::particles::{scatter, Particle, Viewport};

fn render_particle(p: &Particle) -> String {
    format!(
        r#"<div class="particle" style="--x0:{:.1}px;--y0:{:.1}px;--x1:{:.1}px;--y1:{:.1}px;{}"></div>"#,
        p.start.0,
        p.start.1,
        p.end.0,
        p.end.1,
        particle_drift(p.duration_ms).to_css()
    )
}

/// Background layer of drifting dots, freshly placed on every call.
pub fn render<R: Rng + ?Sized>(rng: &mut R, viewport: Option<Viewport>) -> String {
    let dots: String = scatter(rng, viewport).iter().map(render_particle).collect();
    format!(r#"<div class="particles" aria-hidden="true">{}</div>"#, dots)
}
