// src/animation.rs
// Declarative animation descriptions rendered as CSS `animation` declarations.
//
// Every animation on the page is plain data: a keyframes name, a duration,
// a start delay, an easing curve and whether it loops. The browser's CSS
// engine does the scheduling, and the animations stop with the document.

/// Delay between siblings of a staggered list.
pub const STAGGER_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
}

impl Easing {
    pub fn as_css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub keyframes: &'static str,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Animation {
    pub const fn new(keyframes: &'static str, duration_ms: u32) -> Self {
        Self {
            keyframes,
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
            repeat: Repeat::Once,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub const fn eased(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    pub const fn forever(self) -> Self {
        Self {
            repeat: Repeat::Forever,
            ..self
        }
    }

    /// Same animation, started `position` stagger steps later.
    pub const fn staggered(self, position: usize) -> Self {
        self.delayed(self.delay_ms + position as u32 * STAGGER_MS)
    }

    /// The `animation` declaration for an inline `style` attribute.
    ///
    /// One-shot entrances use `backwards` fill so the first frame holds during
    /// the delay and `:hover` transforms still apply once they finish.
    pub fn to_css(&self) -> String {
        let (iterations, fill) = match self.repeat {
            Repeat::Once => ("1", "backwards"),
            Repeat::Forever => ("infinite", "none"),
        };
        format!(
            "animation: {} {}ms {} {}ms {} {};",
            self.keyframes,
            self.duration_ms,
            self.easing.as_css(),
            self.delay_ms,
            iterations,
            fill
        )
    }

    pub fn style_attr(&self) -> String {
        format!(r#"style="{}""#, self.to_css())
    }
}

// Presets used across the page
pub const FADE_IN_UP: Animation = Animation::new("fade-in-up", 600);
pub const HEADER_DROP_IN: Animation = Animation::new("drop-in", 500);
pub const FOOTER_FADE_IN: Animation = Animation::new("fade-in", 500);
pub const BRAND_SPIN: Animation = Animation::new("spin", 5000).eased(Easing::Linear).forever();
pub const TILE_POP_IN: Animation = Animation::new("pop-in", 500);
pub const TILE_SPIN: Animation = Animation::new("spin", 2000).eased(Easing::Linear).forever();
pub const SWEEP: Animation = Animation::new("sweep", 3000).eased(Easing::Linear).forever();

/// Tiles enter one after another, 200ms apart.
pub const TILE_STAGGER_MS: u32 = 200;

pub fn particle_drift(duration_ms: u32) -> Animation {
    Animation::new("drift", duration_ms)
        .eased(Easing::Linear)
        .forever()
}

/// Keyframes referenced by the presets above.
pub const KEYFRAMES: &str = r#"
@keyframes fade-in-up { from { opacity: 0; transform: translateY(60px); } to { opacity: 1; transform: translateY(0); } }
@keyframes drop-in { from { opacity: 0; transform: translateY(-50px); } to { opacity: 1; transform: translateY(0); } }
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
@keyframes pop-in { from { opacity: 0; transform: scale(0); } to { opacity: 1; transform: scale(1); } }
@keyframes sweep { from { transform: translateX(-100%); } to { transform: translateX(100%); } }
@keyframes drift { from { transform: translate(var(--x0), var(--y0)); } to { transform: translate(var(--x1), var(--y1)); } }
"#;
