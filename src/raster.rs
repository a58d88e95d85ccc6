use crate::effect::{sample_targets, EffectConfig, Raster};
use glam::Vec2;
use rand::Rng;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Draw `text` onto an offscreen canvas of `width x height` and return the
/// RGBA bytes. The text is centered horizontally with its baseline at mid-height.
pub fn render_text(
    document: &web::Document,
    text: &str,
    font: &str,
    color: &str,
    width: u32,
    height: u32,
) -> anyhow::Result<Vec<u8>> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("offscreen 2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    ctx.set_font(font);
    ctx.set_fill_style_str(color);
    let metrics = ctx
        .measure_text(text)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let x = (width as f64 - metrics.width()) / 2.0;
    let y = height as f64 / 2.0;
    ctx.fill_text(text, x, y)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let image = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(image.data().0)
}

/// Rasterize the label text for the current viewport and sample particle targets.
pub fn text_targets<R: Rng + ?Sized>(
    document: &web::Document,
    text: &str,
    config: &EffectConfig,
    viewport: Vec2,
    rng: &mut R,
) -> anyhow::Result<Vec<Vec2>> {
    let (width, height) = (viewport.x as u32, viewport.y as u32);
    let rgba = render_text(
        document,
        text,
        &config.text.font,
        &config.text.color,
        width,
        height,
    )?;
    let raster = Raster::new(width, height, &rgba)?;
    let targets = sample_targets(&raster, config.text.sampling_stride, rng);
    log::info!(
        "[raster] {}x{} \"{}\" -> {} targets",
        width,
        height,
        text,
        targets.len()
    );
    Ok(targets)
}
