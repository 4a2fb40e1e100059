// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless annotation session.
//!
//! Loads an image (or generates a checkerboard PNG), replays a short script of
//! pointer and wheel events against an [`Editor`], prints each overlay frame,
//! and exports the resulting points.
//!
//! Run:
//! - `cargo run -p pinmark_demos -- --format json --absolute`
//! - `RUST_LOG=debug cargo run -p pinmark_demos -- --image photo.png --out target/`

mod script;

use std::io::Cursor;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use image::{ImageFormat, Rgba, RgbaImage};
use kurbo::Size;
use log::info;
use pinmark_canvas::{CanvasConfig, Editor, OverlayFrame, StateChannels};
use pinmark_export::{CoordinateMode, ExportFormat, ExportOptions};
use pinmark_imaging::RecordingBackend;
use pinmark_import::ImageSource;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
        }
    }
}

/// Replay a scripted annotation session without a window.
#[derive(Debug, Parser)]
#[command(name = "pinmark_session", version)]
struct Args {
    /// Image to annotate; a generated checkerboard is used when omitted.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Size of the generated image, as WIDTHxHEIGHT.
    #[arg(long, default_value = "400x300", value_parser = parse_size)]
    generated: (u32, u32),

    /// Size of the drawing surface, as WIDTHxHEIGHT.
    #[arg(long, default_value = "800x600", value_parser = parse_size)]
    view: (u32, u32),

    /// JSON file with canvas settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Export format.
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Export image pixels instead of fractions of the image size.
    #[arg(long)]
    absolute: bool,

    /// Directory to write the export into; printed to stdout otherwise.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn parse_size(text: &str) -> Result<(u32, u32), String> {
    let (w, h) = text
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{text}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|err| format!("bad dimension `{v}`: {err}"))
    };
    Ok((parse(w)?, parse(h)?))
}

fn checkerboard_png(width: u32, height: u32) -> Result<Vec<u8>> {
    let light = Rgba([0xee, 0xee, 0xee, 0xff]);
    let dark = Rgba([0x99, 0x99, 0x99, 0xff]);
    let image = RgbaImage::from_fn(width, height, |x, y| {
        if (x / 25 + y / 25) % 2 == 0 { light } else { dark }
    });
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .context("encoding generated image")?;
    Ok(bytes.into_inner())
}

fn load_config(args: &Args) -> Result<CanvasConfig> {
    match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            CanvasConfig::from_json_str(&text).with_context(|| format!("loading {}", path.display()))
        }
        None => Ok(CanvasConfig::default()),
    }
}

fn load_image(args: &Args) -> Result<ImageSource> {
    let source = match &args.image {
        Some(path) => ImageSource::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            let (w, h) = args.generated;
            ImageSource::from_bytes(checkerboard_png(w, h)?)?
        }
    };
    if source.is_degenerate() {
        bail!("image has no area ({}x{})", source.width, source.height);
    }
    Ok(source)
}

fn print_frame(label: &str, frame: &OverlayFrame) {
    println!("-- {label}: {} markers", frame.markers.len());
    for marker in &frame.markers {
        println!(
            "   {:<10} at ({:7.1}, {:7.1}) r={:<4} opacity={:.1}{}",
            marker.label.as_deref().unwrap_or("-"),
            marker.center.x,
            marker.center.y,
            marker.radius,
            marker.fill_opacity,
            if marker.active { " active" } else { "" },
        );
    }
    if let Some(ghost) = &frame.ghost {
        println!(
            "   ghost of {} at ({:.1}, {:.1})",
            ghost.id, ghost.center.x, ghost.center.y
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let source = load_image(&args)?;
    let mut editor = Editor::new(config)?;
    editor.subscribe(StateChannels::ANNOTATIONS, |changed| {
        log::debug!("observer: {changed:?}");
    });

    let mut backend = RecordingBackend::new();
    let (vw, vh) = args.view;
    editor.resize(Size::new(f64::from(vw), f64::from(vh)));
    editor.load_image(&source);
    if let Some(frame) = editor.render(&mut backend) {
        print_frame("fitted", &frame);
    }

    for step in script::steps(editor.state().transform(), source.width, source.height) {
        info!("{}", step.describe());
        step.apply(&mut editor);
        if let Some(frame) = editor.render(&mut backend) {
            print_frame(&step.describe(), &frame);
        }
    }

    let options = ExportOptions {
        format: args.format.into(),
        coordinates: if args.absolute {
            CoordinateMode::Absolute
        } else {
            CoordinateMode::Relative
        },
    };
    let file = editor.export(options)?;
    match &args.out {
        Some(dir) => {
            let path = file.write_to_dir(dir)?;
            println!("wrote {}", path.display());
        }
        None => print!("{}", file.contents),
    }

    editor.teardown();
    info!(
        "session done, {} draw ops recorded, capture balanced: {}",
        backend.ops().len(),
        editor.capture().is_balanced()
    );
    Ok(())
}
