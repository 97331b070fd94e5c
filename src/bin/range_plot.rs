use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

// Text needs a font backend; without the `labels` feature only the curves are drawn.
const LABELS: bool = cfg!(feature = "labels");

const CAPTION: &str = "Fuel Amount vs Viable Distance";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a fuel amount vs viable distance chart from a sweep CSV"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/sweep.png")]
    output: PathBuf,
    /// Draw a marker at this fuel mass (kg)
    #[arg(long)]
    current_fuel: Option<f64>,
    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 400)]
    height: u32,
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    fuel_mass_kg: f64,
    distance_km: f64,
}

fn main() -> anyhow::Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init();
    let cli = Cli::parse();
    let mut samples = read_samples(&cli.input)?;
    if samples.is_empty() {
        return Err(anyhow::anyhow!("No sweep samples in the provided CSV"));
    }
    samples.sort_by(|a, b| a.fuel_mass_kg.total_cmp(&b.fuel_mass_kg));
    log::debug!("plotting {} samples from {}", samples.len(), cli.input);

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let (fuel_min, fuel_max) = padded_span(
        samples.first().map(|s| s.fuel_mass_kg).unwrap_or_default(),
        samples.last().map(|s| s.fuel_mass_kg).unwrap_or_default(),
    );
    let distance_max = samples
        .iter()
        .map(|s| s.distance_km)
        .fold(0.0_f64, f64::max);
    let (_, distance_top) = padded_span(0.0, distance_max * 1.05);

    let line_color = RGBColor(37, 99, 235);
    let marker_color = RGBColor(34, 197, 94);

    let labels = LABELS && fonts_available();
    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if labels {
        let caption_font = FontDesc::new(select_font_family(), 24.0, FontStyle::Bold);
        builder
            .caption(CAPTION, caption_font)
            .x_label_area_size(50)
            .y_label_area_size(70);
    }
    let mut chart = builder.build_cartesian_2d(fuel_min..fuel_max, 0.0..distance_top)?;

    if labels {
        let label_font = FontDesc::new(select_font_family(), 16.0, FontStyle::Normal);
        chart
            .configure_mesh()
            .x_desc("Fuel Amount (kg)")
            .y_desc("Distance (km)")
            .label_style(label_font)
            .x_labels(8)
            .y_labels(6)
            .x_label_formatter(&|v| format!("{v:.0}"))
            .y_label_formatter(&|v| format!("{v:.0}"))
            .draw()?;
    }

    chart.draw_series(LineSeries::new(
        samples.iter().map(|s| (s.fuel_mass_kg, s.distance_km)),
        ShapeStyle::from(&line_color).stroke_width(3),
    ))?;
    chart.draw_series(
        samples
            .iter()
            .map(|s| Circle::new((s.fuel_mass_kg, s.distance_km), 3, line_color.filled())),
    )?;

    if let Some(fuel) = cli.current_fuel {
        if (fuel_min..=fuel_max).contains(&fuel) {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(fuel, 0.0), (fuel, distance_max)],
                ShapeStyle::from(&marker_color).stroke_width(2),
            )))?;
        } else {
            log::warn!("current fuel {fuel} kg lies outside the swept range");
        }
    }

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

/// Whether the system can lay out text; headless hosts may have no fonts at all.
fn fonts_available() -> bool {
    match FontDesc::new(select_font_family(), 16.0, FontStyle::Normal).box_size(CAPTION) {
        Ok(_) => true,
        Err(err) => {
            log::warn!("no usable font ({err:?}); drawing the chart without labels");
            false
        }
    }
}

/// Widen degenerate spans so the chart always has a drawable axis.
fn padded_span(min: f64, max: f64) -> (f64, f64) {
    if (max - min).abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}

fn read_samples(path: &str) -> anyhow::Result<Vec<Sample>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let fuel_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("fuel_mass_kg"))
        .ok_or_else(|| anyhow::anyhow!("CSV missing 'fuel_mass_kg' column"))?;
    let distance_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("distance_km"))
        .ok_or_else(|| anyhow::anyhow!("CSV missing 'distance_km' column"))?;

    let mut samples = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let fuel_mass_kg: f64 = r.get(fuel_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let distance_km: f64 = r.get(distance_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        if fuel_mass_kg.is_finite() && distance_km.is_finite() {
            samples.push(Sample {
                fuel_mass_kg,
                distance_km,
            });
        }
    }
    Ok(samples)
}
