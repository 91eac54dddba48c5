#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Hide console in release mode

/// Main entry point for the FishboneView application
///
/// A small, standalone fishbone (Ishikawa) diagram viewer built with Rust
/// and egui. The program takes no arguments: it opens a window showing the
/// built-in cause-and-effect diagram and exits when the window closes.
#[cfg(not(test))]
use fishview::{FishboneViewerApp, APP_TITLE_PREFIX};

/// Application entry point
#[cfg(not(test))]
fn main() -> Result<(), eframe::Error> {
    // Configure logging for debugging (only in debug builds)
    #[cfg(debug_assertions)]
    env_logger::init();

    // Set up eframe options for the native window
    let viewport = egui::ViewportBuilder::default()
        .with_title(format!("{APP_TITLE_PREFIX} - Cause & Effect Diagram"))
        .with_inner_size(egui::Vec2::new(1000.0, 640.0))
        .with_min_inner_size(egui::Vec2::new(600.0, 400.0))
        .with_icon(create_app_icon());

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    // Launch the application
    eframe::run_native(
        APP_TITLE_PREFIX,
        native_options,
        Box::new(|cc| {
            configure_egui_style(&cc.egui_ctx);
            Box::new(FishboneViewerApp::new())
        }),
    )
}

#[cfg(test)]
fn main() {}

/// Create an application icon from embedded data
fn create_app_icon() -> egui::IconData {
    // Create a 32x32 miniature fishbone: spine, head disc, angled bones.
    let size = 32;
    let mut rgba_data = Vec::with_capacity(size * size * 4);

    let spine_blue = (31u8, 119u8, 180u8, 255u8);
    let background = (250u8, 250u8, 250u8, 255u8);

    for y in 0..size as i32 {
        for x in 0..size as i32 {
            let on_spine = (15..=16).contains(&y) && (2..=26).contains(&x);
            let on_head = {
                let dx = x - 26;
                let dy = y - 15;
                dx >= 0 && dx * dx + dy * dy <= 36
            };
            let on_tail = x <= 4 && (y - 15).abs() <= 8 - 2 * x;
            let on_bone = [9, 15, 21].iter().any(|&root| {
                let up = y >= 9 && y < 15 && x == root + (y - 15);
                let down = y > 16 && y <= 22 && x == root + (16 - y);
                up || down
            });

            let (r, g, b, a) = if on_spine || on_head || on_tail || on_bone {
                spine_blue
            } else {
                background
            };
            rgba_data.extend_from_slice(&[r, g, b, a]);
        }
    }

    egui::IconData {
        rgba: rgba_data,
        width: size as u32,
        height: size as u32,
    }
}

/// Configure egui styling for a clean diagram display
fn configure_egui_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    // Tight margins: the window is a single diagram panel
    style.spacing.item_spacing = egui::Vec2::new(8.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(8.0);

    style.visuals.window_rounding = egui::Rounding::same(4.0);

    // True black background in dark mode for maximum contrast with the
    // diagram's own background fill
    if style.visuals.dark_mode {
        style.visuals.window_fill = egui::Color32::BLACK;
        style.visuals.panel_fill = egui::Color32::BLACK;
        style.visuals.extreme_bg_color = egui::Color32::BLACK;
    }

    ctx.set_style(style);
}
