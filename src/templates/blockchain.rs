// src/templates/blockchain.rs
// Decorative chain panel: a row of spinning tiles and a sweeping bar.

use crate::animation::{SWEEP, TILE_POP_IN, TILE_SPIN, TILE_STAGGER_MS};

pub const TILE_COUNT: usize = 5;

pub fn render() -> String {
    let tiles: String = (0..TILE_COUNT)
        .map(|i| {
            format!(
                r#"<div class="chain-tile" {}><div class="chain-tile-core" {}></div></div>"#,
                TILE_POP_IN.delayed(i as u32 * TILE_STAGGER_MS).style_attr(),
                TILE_SPIN.style_attr()
            )
        })
        .collect();

    format!(
        r#"<div class="chain-panel" aria-hidden="true">
            <div class="chain-row">{}</div>
            <div class="chain-sweep" {}></div>
        </div>"#,
        tiles,
        SWEEP.style_attr()
    )
}
