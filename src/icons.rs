// src/icons.rs
// Outline glyphs drawn as inline SVG on a 24x24 grid.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Globe,
    Wallet,
    ShieldCheck,
    ArrowRight,
    CheckCircle,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Globe => "globe",
            Icon::Wallet => "wallet",
            Icon::ShieldCheck => "shield-check",
            Icon::ArrowRight => "arrow-right",
            Icon::CheckCircle => "check-circle",
        }
    }

    fn paths(&self) -> &'static str {
        match self {
            Icon::Globe => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#
            }
            Icon::Wallet => {
                r#"<path d="M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1"/><path d="M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4"/>"#
            }
            Icon::ShieldCheck => {
                r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/><path d="m9 12 2 2 4-4"/>"#
            }
            Icon::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Icon::CheckCircle => {
                r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><path d="m9 11 3 3L22 4"/>"#
            }
        }
    }

    pub fn svg(&self, class: &str) -> String {
        format!(
            r#"<svg class="icon {}" data-icon="{}" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
            class,
            self.name(),
            self.paths()
        )
    }
}
