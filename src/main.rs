//! Demo binary: renders the dashboard and the self-test patterns into an
//! in-memory framebuffer and exports PNG snapshots.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use pixelsmith::scene::{self, draw_animated_value, draw_gradient_background};
use pixelsmith::{
    Dashboard, DashboardLayout, FontId, Framebuffer, Point, Raster, Rect, Rgb565, TextRenderer,
};

const DEFAULT_WIDTH: u32 = 160;
const DEFAULT_HEIGHT: u32 = 128;

struct Options {
    width: u32,
    height: u32,
    output: PathBuf,
    layout: Option<PathBuf>,
    demo: Demo,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Demo {
    Dashboard,
    Patterns,
    Gradient,
}

/// Stand-in for the external text renderer: logs what the collaborator
/// would have drawn. Glyph rendering is outside this crate.
struct PlaceholderText;

impl TextRenderer for PlaceholderText {
    fn draw_text(&mut self, origin: Point, text: &str, font: FontId, _fg: Rgb565, _bg: Rgb565) {
        let (w, h) = match font {
            FontId::Small => (7, 10),
            FontId::Large => (11, 18),
        };
        tracing::debug!(
            x = origin.x,
            y = origin.y,
            glyph_w = w,
            glyph_h = h,
            "text collaborator: {text:?}"
        );
    }
}

/// Parse command line arguments
fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = Options {
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        output: PathBuf::from("."),
        layout: None,
        demo: Demo::Dashboard,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 160x128)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            opts.width = w;
                            opts.height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--output" | "-o" => {
                if i + 1 < args.len() {
                    opts.output = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            },
            "--layout" | "-l" => {
                if i + 1 < args.len() {
                    opts.layout = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            },
            "--demo" | "-d" => {
                if i + 1 < args.len() {
                    opts.demo = match args[i + 1].as_str() {
                        "patterns" => Demo::Patterns,
                        "gradient" => Demo::Gradient,
                        _ => Demo::Dashboard,
                    };
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: pixelsmith [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --resolution WxH, -r WxH  Device frame size (default: {}x{})",
                    DEFAULT_WIDTH, DEFAULT_HEIGHT
                );
                println!("  --output DIR, -o DIR      Directory for PNG snapshots (default: .)");
                println!("  --layout FILE, -l FILE    Dashboard layout JSON");
                println!("  --demo NAME, -d NAME      dashboard | patterns | gradient");
                println!("  --help                    Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    opts
}

/// Export the framebuffer as a PNG, expanding RGB565 to 8-bit channels
fn export_png(fb: &Framebuffer, path: &Path) -> Result<()> {
    let img = image::RgbImage::from_fn(fb.width(), fb.height(), |x, y| {
        let (r, g, b) = fb
            .get_pixel(x as i32, y as i32)
            .unwrap_or(Rgb565::BLACK)
            .to_rgb888();
        image::Rgb([r, g, b])
    });
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote snapshot");
    Ok(())
}

fn render_dashboard(fb: &mut Framebuffer, layout: DashboardLayout) {
    let (w, h) = (fb.width() as i32, fb.height() as i32);
    let mut raster = Raster::new(fb, w, h);
    let mut text = PlaceholderText;

    let dashboard = Dashboard::new(layout);
    dashboard.draw_chrome(&mut raster, &mut text);
    dashboard.update_readings(&mut raster, &mut text, 21.5, 48.0);
    draw_animated_value(
        &mut raster,
        &mut text,
        Point::new(w / 2 - scene::VALUE_BOX_WIDTH / 2, h - 70),
        "Temp",
        21.5,
        Rgb565::from_rgb888(0, 64, 128),
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = parse_args();
    tracing::info!(
        width = opts.width,
        height = opts.height,
        "rendering {}x{} frame",
        opts.width,
        opts.height
    );

    let layout = match &opts.layout {
        Some(path) => DashboardLayout::load(path)
            .with_context(|| format!("failed to load layout {}", path.display()))?,
        None => DashboardLayout::default(),
    };

    let mut fb = Framebuffer::with_size(opts.width, opts.height);
    let (w, h) = (opts.width as i32, opts.height as i32);

    match opts.demo {
        Demo::Dashboard => {
            render_dashboard(&mut fb, layout);
            export_png(&fb, &opts.output.join("dashboard.png"))?;
        },
        Demo::Patterns => {
            let mut raster = Raster::new(&mut fb, w, h);
            pixelsmith::selftest::all(&mut raster);
            export_png(&fb, &opts.output.join("patterns.png"))?;
        },
        Demo::Gradient => {
            let mut raster = Raster::new(&mut fb, w, h);
            draw_gradient_background(&mut raster, Rgb565::BLACK, Rgb565::BLUE);
            raster.fill_round_rect(Rect::new(w / 4, h / 4, w / 2, h / 2), 10, Rgb565::YELLOW);
            export_png(&fb, &opts.output.join("gradient.png"))?;
        },
    }

    Ok(())
}
