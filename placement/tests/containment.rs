//! Containment sweep: for every viewport large enough to hold the panel plus
//! padding, the placed panel never crosses the padded viewport edges.
#![allow(clippy::cast_precision_loss)]

use placement::{PlacementConfig, Rect, Viewport, place, resolve};

const VIEWPORTS: &[(f64, f64)] = &[(432.0, 332.0), (480.0, 640.0), (800.0, 600.0), (1200.0, 800.0), (1920.0, 1080.0)];
const TRIGGER_SIZES: &[(f64, f64)] = &[(0.0, 0.0), (24.0, 24.0), (40.0, 40.0), (120.0, 32.0), (600.0, 48.0)];

fn assert_contained(trigger: Rect, viewport: Viewport, cfg: &PlacementConfig) {
    let p = place(trigger, viewport, cfg);
    let max_left = viewport.width - cfg.panel_width - cfg.edge_padding;
    let max_top = viewport.height - cfg.panel_height - cfg.edge_padding;
    assert!(
        p.left >= cfg.edge_padding && p.left <= max_left,
        "left {} outside [{}, {max_left}] for {trigger:?} in {viewport:?}",
        p.left,
        cfg.edge_padding
    );
    assert!(
        p.top >= cfg.edge_padding && p.top <= max_top,
        "top {} outside [{}, {max_top}] for {trigger:?} in {viewport:?}",
        p.top,
        cfg.edge_padding
    );
}

#[test]
fn default_panel_stays_inside_padded_viewport() {
    let cfg = PlacementConfig::default();
    for &(vw, vh) in VIEWPORTS {
        let viewport = Viewport::new(vw, vh);
        for &(tw, th) in TRIGGER_SIZES {
            let mut y = -50.0;
            while y <= vh + 50.0 {
                let mut x = -50.0;
                while x <= vw + 50.0 {
                    assert_contained(Rect::new(x, y, tw, th), viewport, &cfg);
                    x += 7.0;
                }
                y += 11.0;
            }
        }
    }
}

#[test]
fn small_panel_stays_inside_padded_viewport() {
    let cfg = PlacementConfig {
        panel_width: 120.0,
        panel_height: 90.0,
        gap: 4.0,
        edge_padding: 8.0,
        ..PlacementConfig::default()
    };
    let viewport = Viewport::new(360.0, 640.0);
    for i in 0..60 {
        for j in 0..60 {
            let trigger = Rect::new(f64::from(i) * 6.0 - 10.0, f64::from(j) * 11.0 - 10.0, 32.0, 32.0);
            assert_contained(trigger, viewport, &cfg);
        }
    }
}

#[test]
fn identical_inputs_yield_identical_resolutions() {
    let cfg = PlacementConfig::default();
    let viewport = Viewport::new(1200.0, 800.0);
    for i in 0..40 {
        let trigger = Rect::new(i as f64 * 30.0, 780.0 - i as f64 * 19.0, 40.0, 40.0);
        assert_eq!(resolve(trigger, viewport, &cfg), resolve(trigger, viewport, &cfg));
    }
}

#[test]
fn degenerate_viewports_never_panic_or_produce_nan() {
    let cfg = PlacementConfig::default();
    for &(vw, vh) in &[(0.0, 0.0), (100.0, 100.0), (431.0, 900.0), (900.0, 331.0)] {
        let p = place(Rect::new(10.0, 10.0, 20.0, 20.0), Viewport::new(vw, vh), &cfg);
        assert!(p.top.is_finite() && p.left.is_finite());
    }
}
