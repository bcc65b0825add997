//! Offline host for `ClipColorText`.
//!
//! Loads a layout, runs the progress animation on a fixed-step clock and
//! writes every repainted frame as a PNG.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cliptext_engine::logging::{LoggingConfig, init_logging};
use cliptext_engine::paint::Color;
use cliptext_engine::render::{RenderTarget, Renderer};
use cliptext_engine::time::FrameClock;
use cliptext_ui::prelude::*;
use cliptext_ui::widgets::clip_text::DEFAULT_GRADIENT;

const DEFAULT_LAYOUT: &str = include_str!("../layouts/main.mkml");

#[derive(Parser, Debug)]
#[command(version, about = "Render ClipColorText animation frames to PNG")]
struct Cli {
    /// Layout file (.mkml). Uses the built-in layout when omitted.
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Output directory for frame_NNNN.png files.
    #[arg(long, default_value = "frames")]
    out: PathBuf,

    #[arg(long, default_value_t = 480)]
    width: u32,

    #[arg(long, default_value_t = 160)]
    height: u32,

    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 180)]
    frames: u32,

    /// Paint the clip pass with the red/blue/green gradient.
    #[arg(long)]
    gradient: bool,

    /// Draw layout guides and log measured sizes.
    #[arg(long)]
    debug: bool,

    /// Font file. Searches common DejaVu / Noto locations when omitted.
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let _ = init_debug_overlay(cli.debug);

    let attrs = load_attrs(cli.layout.as_deref())?;

    let mut scene = UiScene::new();
    let font_bytes = load_font(cli.font.as_deref())?;
    let font = scene.load_font(&font_bytes).context("failed to parse font")?;

    let mut label = attrs.build(font);
    if cli.gradient {
        label.set_gradient_colors(Some(DEFAULT_GRADIENT.to_vec()));
    }

    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("failed to create output directory {}", cli.out.display()))?;

    let viewport = Vec2::new(cli.width as f32, cli.height as f32);
    let mut target = RenderTarget::new(cli.width, cli.height).context("invalid viewport")?;
    let mut renderer = Renderer::new();
    let mut clock = FrameClock::fixed_fps(cli.fps);
    let mut animator = ProgressAnimator::new();

    log::info!(
        "rendering {} frames of {:?} at {}x{}, {} fps",
        cli.frames,
        label.text(),
        cli.width,
        cli.height,
        cli.fps
    );

    let mut written = 0u32;
    for _ in 0..cli.frames {
        let frame = clock.tick();
        if let Some(p) = animator.tick(Duration::from_secs_f32(frame.dt)) {
            label.set_progress(p);
        }
        if !label.is_dirty() {
            continue;
        }

        let _ = scene.frame_ref(&mut label, viewport, attrs.placement());
        target.clear(Color::WHITE);
        renderer.render(&mut target, &mut scene.draw_list, &scene.font_system);

        let path = cli.out.join(format!("frame_{:04}.png", frame.frame_index));
        save_png(&target, &path)?;
        written += 1;
        log::debug!("frame {} progress {:.3}", frame.frame_index, label.progress());
    }
    animator.cancel();

    log::info!("wrote {written} frames to {}", cli.out.display());
    Ok(())
}

fn load_attrs(path: Option<&Path>) -> Result<ClipColorTextAttrs> {
    let (src, name) = match path {
        Some(p) => (
            std::fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))?,
            p.display().to_string(),
        ),
        None => (DEFAULT_LAYOUT.to_string(), "built-in layout".to_string()),
    };
    ClipColorTextAttrs::parse(&src).with_context(|| format!("invalid layout in {name}"))
}

fn load_font(path: Option<&Path>) -> Result<Vec<u8>> {
    if let Some(p) = path {
        return std::fs::read(p).with_context(|| format!("failed to read font {}", p.display()));
    }
    let found = [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "assets/fonts/DejaVuSans.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok());

    match found {
        Some(bytes) => Ok(bytes),
        None => bail!("no system font found, pass one with --font"),
    }
}

fn save_png(target: &RenderTarget, path: &Path) -> Result<()> {
    let img = image::RgbaImage::from_raw(target.width(), target.height(), target.to_rgba8())
        .context("pixel buffer does not match target size")?;
    img.save(path).with_context(|| format!("failed to write {}", path.display()))
}
