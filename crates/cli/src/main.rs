use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use graphlab::api::{
    calculate_triangle_area_simplified, check_mission, clamp_reference, current_value_label,
    enclosed_area, get_discriminant, get_intersection_count, solve_intersections, trace,
    validate_all_intersections, AreaVertex, CoordinateSystem, Line, LocusCfg, MissionSession,
    Parabola, MAX_SAMPLES, MISSION_CATALOG, VALIDATION_TOLERANCE,
};
use graphlab::Vec2;
use polars::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{write_sidecar, Provenance};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Parabola/line lab driver: solve, locus export, missions, viewport bounds")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

/// Slider state; defaults match the lab's initial screen.
#[derive(Args, Clone, Copy, Debug)]
struct CurveArgs {
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    a: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    p: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    q: f64,
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    m: f64,
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    n: f64,
}

impl CurveArgs {
    fn curves(&self) -> (Parabola, Line) {
        (
            Parabola::new(self.a, self.p, self.q),
            Line::new(self.m, self.n),
        )
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Parquet,
}

#[derive(Subcommand)]
enum Action {
    /// Intersections, discriminant and triangle areas for one slider state
    Solve {
        #[command(flatten)]
        curves: CurveArgs,
    },
    /// Sample the midpoint locus and write it as a table
    Locus {
        #[command(flatten)]
        curves: CurveArgs,
        #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
        ax: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        ay: f64,
        #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
        t_min: f64,
        #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
        t_max: f64,
        #[arg(long, default_value_t = 0.08)]
        step: f64,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
    /// Run a seeded mission session against one slider state
    Mission {
        #[command(flatten)]
        curves: CurveArgs,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 7)]
        rounds: usize,
    },
    /// Evaluate every catalog mission over recorded states (CSV with a,p,q,m,n)
    Batch {
        #[arg(long)]
        states: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Visible math bounds of a viewport
    Bounds {
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
        #[arg(long, default_value_t = 1.0)]
        zoom: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        pan_x: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        pan_y: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let tag = cmd.tag;
    match cmd.action {
        Action::Solve { curves } => print_json(&solve_report(curves)),
        Action::Locus {
            curves,
            ax,
            ay,
            t_min,
            t_max,
            step,
            out,
            format,
        } => {
            let cfg = LocusCfg { t_min, t_max, step };
            locus(curves, clamp_reference(Vec2::new(ax, ay)), cfg, &out, format, tag)
        }
        Action::Mission {
            curves,
            seed,
            rounds,
        } => {
            tracing::info!(seed, rounds, tag = ?tag, "mission");
            print_json(&mission_rounds(curves, seed, rounds))
        }
        Action::Batch { states, out } => batch(&states, &out, tag),
        Action::Bounds {
            width,
            height,
            zoom,
            pan_x,
            pan_y,
        } => bounds(width, height, zoom, Vec2::new(pan_x, pan_y)),
        Action::Report => report(tag),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct SolveReport {
    parabola: [f64; 3],
    line: [f64; 2],
    discriminant: f64,
    count: usize,
    intersections: Vec<[f64; 2]>,
    area_origin: f64,
    area_apex: f64,
    area_simplified: f64,
    valid: bool,
}

fn solve_report(args: CurveArgs) -> SolveReport {
    let (par, line) = args.curves();
    tracing::info!(?par, ?line, "solve");
    let pts = solve_intersections(&par, &line);
    SolveReport {
        parabola: [par.a(), par.p(), par.q()],
        line: [line.m(), line.n()],
        discriminant: get_discriminant(&par, &line),
        count: get_intersection_count(&par, &line),
        intersections: pts.iter().map(|pt| [pt.x, pt.y]).collect(),
        area_origin: enclosed_area(&par, &line, AreaVertex::Origin),
        area_apex: enclosed_area(&par, &line, AreaVertex::Apex),
        area_simplified: calculate_triangle_area_simplified(&line, &pts),
        valid: validate_all_intersections(&pts, &par, &line, VALIDATION_TOLERANCE),
    }
}

fn locus_frame(par: &Parabola, reference: Vec2<f64>, cfg: LocusCfg) -> PolarsResult<DataFrame> {
    let samples = trace(par, reference, cfg);
    let mut ts = Vec::with_capacity(samples.len());
    let mut xs = Vec::with_capacity(samples.len());
    let mut ys = Vec::with_capacity(samples.len());
    for (k, m) in samples.enumerate() {
        ts.push(cfg.t_at(k));
        xs.push(m.x);
        ys.push(m.y);
    }
    df!("t" => ts, "x" => xs, "y" => ys)
}

fn write_frame(df: &mut DataFrame, path: &Path, format: Format) -> Result<()> {
    ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        Format::Csv => CsvWriter::new(&mut file).include_header(true).finish(df)?,
        Format::Parquet => {
            ParquetWriter::new(&mut file).finish(df)?;
        }
    }
    Ok(())
}

fn locus(
    args: CurveArgs,
    reference: Vec2<f64>,
    cfg: LocusCfg,
    out: &Path,
    format: Format,
    tag: Option<String>,
) -> Result<()> {
    let (par, _) = args.curves();
    if cfg.sample_count() == 0 {
        bail!(
            "empty locus: need step > 0, t_max >= t_min, at most {} samples (step={}, t=[{}, {}])",
            MAX_SAMPLES,
            cfg.step,
            cfg.t_min,
            cfg.t_max
        );
    }
    let mut df = locus_frame(&par, reference, cfg)?;
    tracing::info!(rows = df.height(), out = %out.display(), tag = ?tag, "locus");
    write_frame(&mut df, out, format)?;
    let params = serde_json::json!({
        "parabola": [par.a(), par.p(), par.q()],
        "reference": [reference.x, reference.y],
        "t_min": cfg.t_min,
        "t_max": cfg.t_max,
        "step": cfg.step,
        "rows": df.height(),
    });
    write_sidecar(out, Provenance::new(params, tag))?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct MissionRound {
    round: usize,
    title: &'static str,
    target: String,
    passed: bool,
    value: String,
}

fn mission_rounds(args: CurveArgs, seed: u64, rounds: usize) -> Vec<MissionRound> {
    let (par, line) = args.curves();
    let mut session = MissionSession::seeded(seed);
    session.start();
    let mut out = Vec::with_capacity(rounds);
    for round in 0..rounds {
        let Some(mission) = session.current().copied() else {
            break;
        };
        let passed = session.check(&par, &line);
        out.push(MissionRound {
            round,
            title: mission.title,
            target: mission.target_label(),
            passed,
            value: session.current_value_label(&par, &line),
        });
        session.next();
    }
    out
}

/// Rows of `a,p,q,m,n`; extra columns are ignored, nulls are rejected.
fn read_states(path: &Path) -> Result<Vec<(Parabola, Line)>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let column = |name: &str| -> Result<Vec<f64>> {
        let series = df
            .column(name)
            .with_context(|| format!("missing column `{name}`"))?
            .cast(&DataType::Float64)?;
        let values = series.f64()?;
        values
            .into_iter()
            .map(|v| v.with_context(|| format!("null in column `{name}`")))
            .collect()
    };
    let (a, p, q) = (column("a")?, column("p")?, column("q")?);
    let (m, n) = (column("m")?, column("n")?);
    Ok((0..df.height())
        .map(|i| (Parabola::new(a[i], p[i], q[i]), Line::new(m[i], n[i])))
        .collect())
}

#[derive(Debug, Serialize)]
struct Verdict {
    title: &'static str,
    passed: bool,
    value: String,
}

#[derive(Debug, Serialize)]
struct BatchRow {
    row: usize,
    parabola: [f64; 3],
    line: [f64; 2],
    verdicts: Vec<Verdict>,
}

fn batch_rows(states: &[(Parabola, Line)]) -> Vec<BatchRow> {
    states
        .iter()
        .enumerate()
        .map(|(row, (par, line))| BatchRow {
            row,
            parabola: [par.a(), par.p(), par.q()],
            line: [line.m(), line.n()],
            verdicts: MISSION_CATALOG
                .iter()
                .map(|mission| Verdict {
                    title: mission.title,
                    passed: check_mission(mission, par, line),
                    value: current_value_label(mission, par, line),
                })
                .collect(),
        })
        .collect()
}

fn batch(states: &Path, out: &Path, tag: Option<String>) -> Result<()> {
    let rows = batch_rows(&read_states(states)?);
    let cleared = rows
        .iter()
        .flat_map(|r| r.verdicts.iter())
        .filter(|v| v.passed)
        .count();
    tracing::info!(rows = rows.len(), cleared, tag = ?tag, "batch");
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({
        "states": states.to_string_lossy(),
        "rows": rows.len(),
        "cleared": cleared,
    });
    write_sidecar(out, Provenance::new(params, tag))?;
    Ok(())
}

fn bounds(width: f64, height: f64, zoom: f64, pan: Vec2<f64>) -> Result<()> {
    let Some(cs) = CoordinateSystem::new(width, height, zoom, pan) else {
        bail!("invalid viewport: need positive finite size and zoom");
    };
    let b = cs.visible_math_bounds();
    tracing::info!(width, height, zoom, "bounds");
    print_json(&serde_json::json!({
        "scale": cs.scale(),
        "min_x": b.min_x,
        "max_x": b.max_x,
        "min_y": b.min_y,
        "max_y": b.max_y,
    }))
}

fn report(tag: Option<String>) -> Result<()> {
    print_json(&Provenance::new(serde_json::json!({}), tag))
}
