// src/templates/layout.rs
use crate::animation::{BRAND_SPIN, FOOTER_FADE_IN, HEADER_DROP_IN, KEYFRAMES};
use crate::content::{CONTACT_LINK, NAV_LINKS};
use crate::icons::Icon;

use super::html_escape;

const BASE_STYLES: &str = r#"
:root { --primary: 22 163 74; --background: 255 255 255; --muted: 244 244 245; --muted-fg: 113 113 122; --border: 228 228 231; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; color: #18181b; background: rgb(var(--background)); }
a { color: inherit; text-decoration: none; }
.page { display: flex; min-height: 100vh; flex-direction: column; }
.container { width: 100%; max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
.header { position: sticky; top: 0; z-index: 50; border-bottom: 1px solid rgb(var(--border)); background: rgb(var(--background) / 0.95); backdrop-filter: blur(8px); }
.header-content { display: flex; height: 4rem; align-items: center; justify-content: space-between; }
.brand { display: flex; align-items: center; gap: 0.5rem; font-weight: 700; }
.brand-mark { display: inline-flex; color: rgb(var(--primary)); }
.nav { display: flex; gap: 1.5rem; }
.nav-link { font-size: 0.875rem; font-weight: 500; }
.nav-link:hover, .nav-link.active { color: rgb(var(--primary)); }
.icon { width: 1.25rem; height: 1.25rem; }
.icon-lg { width: 1.5rem; height: 1.5rem; color: rgb(var(--primary)); }
.btn { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.5rem 1rem; border-radius: 0.375rem; border: 1px solid transparent; font: inherit; font-weight: 500; cursor: pointer; transition: transform 150ms; }
.btn:hover { transform: scale(1.05); }
.btn:active { transform: scale(0.95); }
.btn-primary { background: rgb(var(--primary)); color: #fff; }
.btn-outline { background: transparent; border-color: rgb(var(--border)); }
.btn-lg { padding: 0.75rem 2rem; }
.main { flex: 1; }
.section { position: relative; width: 100%; padding: 6rem 0; overflow: hidden; }
.section-muted { background: rgb(var(--muted)); }
.section-hero { background: linear-gradient(135deg, rgb(var(--background)), rgb(var(--primary) / 0.05), rgb(var(--background))); }
.section-inner { position: relative; z-index: 10; }
.section-heading { display: flex; flex-direction: column; align-items: center; text-align: center; gap: 1rem; }
.section-heading h1 { font-size: 3rem; letter-spacing: -0.05em; margin: 0; }
.section-heading h2, .tech-copy h2 { font-size: 2.25rem; letter-spacing: -0.05em; margin: 0; }
.lead { max-width: 900px; color: rgb(var(--muted-fg)); font-size: 1.25rem; line-height: 1.6; }
.steps { display: grid; gap: 2rem; max-width: 64rem; margin: 0 auto; }
.step { display: flex; align-items: flex-start; gap: 1rem; }
.step-badge { display: flex; flex-shrink: 0; width: 3rem; height: 3rem; align-items: center; justify-content: center; border-radius: 9999px; background: rgb(var(--primary)); color: #fff; font-weight: 700; font-size: 1.125rem; transition: transform 300ms; }
.step-badge:hover { transform: scale(1.1) rotate(360deg); }
.step-title { display: flex; align-items: center; gap: 0.5rem; }
.step-title h3 { font-size: 1.25rem; margin: 0; }
.step-icon { display: inline-flex; transition: transform 200ms; }
.step-icon:hover { transform: scale(1.2) rotate(15deg); }
.step p { color: rgb(var(--muted-fg)); margin: 0.25rem 0 0; }
.tech-grid { display: grid; gap: 3rem; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); }
.tech-copy { display: flex; flex-direction: column; justify-content: center; gap: 1rem; }
.benefits { list-style: none; padding: 0; display: grid; gap: 0.5rem; }
.benefits li { display: flex; align-items: center; gap: 0.5rem; }
.benefits .icon { color: rgb(var(--primary)); }
.faq-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1.5rem; max-width: 64rem; margin: 0 auto; padding: 3rem 0; }
.faq-card { height: 100%; padding: 1.5rem; border-radius: 0.75rem; border: 1px solid rgb(var(--primary) / 0.2); background: rgb(var(--background)); transition: all 300ms; }
.faq-card:hover { border-color: rgb(var(--primary) / 0.4); box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.1); }
.card-title { font-size: 1.125rem; margin: 0 0 0.75rem; }
.card-description { color: rgb(var(--muted-fg)); margin: 0; }
.cta-buttons { display: flex; flex-wrap: wrap; gap: 0.5rem; justify-content: center; }
.chain-panel { position: relative; width: 100%; height: 24rem; border-radius: 0.75rem; overflow: hidden; background: linear-gradient(135deg, rgb(var(--primary) / 0.1), rgb(var(--primary) / 0.05)); }
.chain-row { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; }
.chain-tile { display: flex; width: 4rem; height: 4rem; margin: 0 0.5rem; align-items: center; justify-content: center; border-radius: 0.5rem; border: 2px solid rgb(var(--primary) / 0.4); background: rgb(var(--primary) / 0.2); transition: transform 200ms, background 200ms; }
.chain-tile:hover { transform: scale(1.1); background: rgb(var(--primary) / 0.3); }
.chain-tile-core { width: 2rem; height: 2rem; border-radius: 0.25rem; background: rgb(var(--primary)); }
.chain-sweep { position: absolute; top: 0; left: 0; width: 100%; height: 0.25rem; background: linear-gradient(90deg, rgb(var(--primary)), rgb(var(--primary) / 0.5)); }
.particles { position: absolute; inset: 0; overflow: hidden; pointer-events: none; }
.particle { position: absolute; top: 0; left: 0; width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: rgb(var(--primary) / 0.2); }
.footer { border-top: 1px solid rgb(var(--border)); padding: 3rem 0; }
.footer-content { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 1rem; }
.footer-content p, .footer-link { font-size: 0.875rem; color: rgb(var(--muted-fg)); }
.footer-link:hover { color: #18181b; }
"#;

pub fn brand_mark() -> String {
    format!(
        r#"<span class="brand-mark" {}>{}</span>"#,
        BRAND_SPIN.style_attr(),
        Icon::Globe.svg("")
    )
}

pub fn nav_link(href: &str, text: &str, active: bool) -> String {
    if active {
        format!(
            r#"<a href="{}" class="nav-link active" aria-current="page">{}</a>"#,
            href, text
        )
    } else {
        format!(r#"<a href="{}" class="nav-link">{}</a>"#, href, text)
    }
}

pub fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, crate::content::BRAND)
}

/// Full document: header with navigation, `content` inside `<main>`, footer.
/// `active_path` marks the matching nav link as current.
pub fn render_page(title: &str, active_path: &str, content: &str, year: i32) -> String {
    let nav: String = NAV_LINKS
        .iter()
        .map(|link| nav_link(link.href, link.label, link.href == active_path))
        .collect::<Vec<_>>()
        .join("\n                    ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - {brand}</title>
    <style>{styles}{keyframes}</style>
</head>
<body>
<div class="page">
    <header class="header" {header_anim}>
        <div class="container">
            <div class="header-content">
                <div class="brand">
                    {brand_mark}
                    <a href="/">{brand}</a>
                </div>
                <nav class="nav">
                    {nav}
                </nav>
                <div class="header-actions">
                    <button type="button" class="btn btn-primary wallet-connect" data-wallet-connect>Connect Wallet</button>
                </div>
            </div>
        </div>
    </header>

    <main class="main">
        {content}
    </main>

    <footer class="footer" {footer_anim}>
        <div class="container footer-content">
            <div class="brand">
                {brand_mark}
                <span>{brand}</span>
            </div>
            <p class="copyright">{copyright}</p>
            <div class="footer-links">
                <a href="{contact_href}" class="footer-link">{contact_label}</a>
            </div>
        </div>
    </footer>
</div>
</body>
</html>"#,
        title = html_escape(title),
        brand = crate::content::BRAND,
        styles = BASE_STYLES,
        keyframes = KEYFRAMES,
        header_anim = HEADER_DROP_IN.style_attr(),
        footer_anim = FOOTER_FADE_IN.style_attr(),
        brand_mark = brand_mark(),
        nav = nav,
        content = content,
        copyright = copyright(year),
        contact_href = CONTACT_LINK.href,
        contact_label = CONTACT_LINK.label,
    )
}
