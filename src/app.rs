//! Main application state and frame loop.

use std::sync::Arc;

use egui::{CentralPanel, Color32, Context};

use fishview_ishikawa::{render_fishbone_to_svg, Diagram, RenderOptions};

use crate::svg_texture::{bucket_width, rasterize_svg};

/// Window title prefix.
pub const APP_TITLE_PREFIX: &str = "FishboneView";

/// A rasterized diagram texture with its display dimensions. The actual
/// texture is larger by the supersample factor for crisp rendering.
struct TextureEntry {
    texture: egui::TextureHandle,
    display_size: [u32; 2],
}

/// Main application state and logic.
pub struct FishboneViewerApp {
    /// The diagram being displayed.
    diagram: Diagram,
    /// Shared font database for SVG text rasterization.
    fontdb: Arc<usvg::fontdb::Database>,
    /// Rendered SVG, keyed by the dark-mode flag it was rendered with.
    svg: Option<(bool, String)>,
    /// Current texture, keyed by (width bucket, dark mode).
    texture: Option<((u32, bool), TextureEntry)>,
    /// Error message to display if any.
    error_message: Option<String>,
}

impl FishboneViewerApp {
    /// Create the viewer with the built-in example diagram.
    pub fn new() -> Self {
        Self::with_diagram(Diagram::default())
    }

    /// Create the viewer for a specific diagram. Loads system fonts once
    /// at startup; without them, usvg's default empty fontdb silently
    /// drops all text labels in rasterized SVGs.
    pub fn with_diagram(diagram: Diagram) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();

        Self {
            diagram,
            fontdb: Arc::new(db),
            svg: None,
            texture: None,
            error_message: None,
        }
    }

    /// The SVG for the requested theme, rendering it on first use.
    fn svg_for_mode(&mut self, dark_mode: bool) -> Result<String, String> {
        if let Some((mode, svg)) = &self.svg {
            if *mode == dark_mode {
                return Ok(svg.clone());
            }
        }

        let options = RenderOptions {
            dark_mode,
            ..Default::default()
        };
        let result = render_fishbone_to_svg(&self.diagram, &options).map_err(|e| e.to_string())?;
        for warning in &result.warnings {
            log::warn!("{}", warning.message);
        }
        self.svg = Some((dark_mode, result.svg.clone()));
        Ok(result.svg)
    }

    /// Rasterize and upload the texture if the width bucket or theme
    /// changed since the last frame.
    fn ensure_texture(&mut self, ctx: &Context, available_width: f32) {
        let key = (bucket_width(available_width), ctx.style().visuals.dark_mode);
        if key.0 == 0 {
            return;
        }
        if matches!(&self.texture, Some((current, _)) if *current == key) {
            return;
        }

        let outcome = self
            .svg_for_mode(key.1)
            .and_then(|svg| rasterize_svg(&self.fontdb, &svg, key.0));
        match outcome {
            Ok(raster) => {
                let image =
                    egui::ColorImage::from_rgba_premultiplied(raster.raster_size, &raster.rgba);
                let texture =
                    ctx.load_texture("fishbone-diagram", image, egui::TextureOptions::LINEAR);
                self.texture = Some((
                    key,
                    TextureEntry {
                        texture,
                        display_size: raster.display_size,
                    },
                ));
                self.error_message = None;
            }
            Err(err) => {
                log::error!("diagram render failed: {err}");
                self.error_message = Some(err);
            }
        }
    }
}

impl eframe::App for FishboneViewerApp {
    /// Update function called every frame
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| {
            // Show error message if any
            if let Some(ref error) = self.error_message {
                ui.colored_label(Color32::RED, format!("⚠ Error: {}", error));
                return;
            }

            let available = ui.available_size();
            self.ensure_texture(ctx, available.x);

            if let Some((_, entry)) = &self.texture {
                let size = egui::vec2(entry.display_size[0] as f32, entry.display_size[1] as f32);
                ui.vertical_centered(|ui| {
                    let pad = ((available.y - size.y) / 2.0).max(0.0);
                    ui.add_space(pad);
                    ui.add(egui::Image::new(egui::load::SizedTexture::new(
                        entry.texture.id(),
                        size,
                    )));
                });
            }
        });
    }
}

impl Default for FishboneViewerApp {
    fn default() -> Self {
        Self::new()
    }
}
