use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use duotile::{
    Background, CombineRequest, HeroAnchor, HeroSlot, ImageSource, LayoutKind, LayoutSpec,
    Pipeline, Slot,
    layout::HERO_SCALE_RATIO,
};

/// Square export sizes offered by the catalog presets.
const SIZES: &[u32] = &[512, 768, 1024, 1500, 2000, 3000, 4000, 8000, 16000];

#[derive(Parser, Debug)]
#[command(
    name = "duotile",
    version,
    about = "Compose two product photos onto one square catalog tile (PNG)"
)]
struct Cli {
    /// First image file.
    #[arg(long)]
    img1: Option<PathBuf>,

    /// First image URL (a file given via --img1 wins).
    #[arg(long)]
    img1_url: Option<String>,

    /// Second image file.
    #[arg(long)]
    img2: Option<PathBuf>,

    /// Second image URL (a file given via --img2 wins).
    #[arg(long)]
    img2_url: Option<String>,

    /// Remove the background of image 1 (needs a matting backend).
    #[arg(long)]
    remove_bg1: bool,

    /// Remove the background of image 2 (needs a matting backend).
    #[arg(long)]
    remove_bg2: bool,

    /// Layout strategy.
    #[arg(long, value_enum, default_value_t = LayoutChoice::SideBySide)]
    layout: LayoutChoice,

    /// Canvas background.
    #[arg(long, value_enum, default_value_t = BackgroundChoice::White)]
    background: BackgroundChoice,

    /// Square output size in pixels.
    #[arg(long, default_value_t = 4000, value_parser = parse_size)]
    size: u32,

    /// Gap between the two products, percent of canvas width (side-by-side
    /// only, typically 1-15).
    #[arg(long, default_value_t = 5.0)]
    gap_pct: f64,

    /// Outer padding on all four sides, percent of canvas size (typically
    /// 2-12).
    #[arg(long, default_value_t = 5.0)]
    padding_pct: f64,

    /// Which input is the hero (bigger, at the back) in the hero overlay.
    #[arg(long, value_enum, default_value_t = HeroChoice::First)]
    hero: HeroChoice,

    /// Hero vertical anchor in the hero overlay.
    #[arg(long, value_enum, default_value_t = AnchorChoice::Center)]
    hero_anchor: AnchorChoice,

    /// Secondary center offset from the hero center, percent of the hero
    /// half-width; negative places it left of the hero.
    #[arg(long, default_value_t = 16.0, allow_hyphen_values = true)]
    offset_pct: f64,

    /// Secondary height as a fraction of the hero's resized height.
    #[arg(long, default_value_t = HERO_SCALE_RATIO)]
    scale_ratio: f64,

    /// Extra downward drop of the secondary below the hero's bottom edge,
    /// percent of canvas size.
    #[arg(long, default_value_t = 0.0)]
    drop_pct: f64,

    /// Print the resolved layout spec as JSON and exit without rendering.
    #[arg(long)]
    dump_spec: bool,

    /// Output PNG path. Defaults to combined_sku_{size}px.png.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutChoice {
    SideBySide,
    OverlayEqual,
    OverlayHero,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackgroundChoice {
    White,
    Black,
    Transparent,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeroChoice {
    #[value(alias = "1")]
    First,
    #[value(alias = "2")]
    Second,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AnchorChoice {
    Center,
    Bottom,
}

fn parse_size(raw: &str) -> Result<u32, String> {
    let size: u32 = raw.parse().map_err(|_| format!("'{raw}' is not a number"))?;
    if SIZES.contains(&size) {
        Ok(size)
    } else {
        Err(format!("size must be one of {SIZES:?}"))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let spec = LayoutSpec {
        canvas_size: cli.size,
        padding_ratio: cli.padding_pct / 100.0,
        kind: match cli.layout {
            LayoutChoice::SideBySide => LayoutKind::SideBySide {
                gap_ratio: cli.gap_pct / 100.0,
            },
            LayoutChoice::OverlayEqual => LayoutKind::OverlayEqual,
            LayoutChoice::OverlayHero => LayoutKind::OverlayHero {
                offset_ratio: cli.offset_pct / 100.0,
                scale_ratio: cli.scale_ratio,
                drop_ratio: cli.drop_pct / 100.0,
                anchor: match cli.hero_anchor {
                    AnchorChoice::Center => HeroAnchor::Center,
                    AnchorChoice::Bottom => HeroAnchor::Bottom,
                },
                hero: match cli.hero {
                    HeroChoice::First => HeroSlot::First,
                    HeroChoice::Second => HeroSlot::Second,
                },
            },
        },
    };

    if cli.dump_spec {
        println!("{}", serde_json::to_string_pretty(&spec)?);
        return Ok(());
    }

    let request = CombineRequest {
        slots: [
            Slot {
                source: ImageSource::from_options(cli.img1, cli.img1_url)?,
                remove_background: cli.remove_bg1,
            },
            Slot {
                source: ImageSource::from_options(cli.img2, cli.img2_url)?,
                remove_background: cli.remove_bg2,
            },
        ],
        background: match cli.background {
            BackgroundChoice::White => Background::White,
            BackgroundChoice::Black => Background::Black,
            BackgroundChoice::Transparent => Background::Transparent,
        },
        spec,
    };

    let pipeline = Pipeline::new();
    if (cli.remove_bg1 || cli.remove_bg2) && !pipeline.has_background_remover() {
        eprintln!("background removal is not available in this build; images pass through unchanged");
    }

    let canvas = pipeline.run(&request)?;

    let out = cli
        .out
        .unwrap_or_else(|| PathBuf::from(format!("combined_sku_{}px.png", request.spec.canvas_size)));
    duotile::encode::write_png(&canvas, &out)?;
    println!("wrote {}", out.display());
    Ok(())
}
