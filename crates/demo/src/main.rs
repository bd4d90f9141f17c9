// File: crates/demo/src/main.rs
// Summary: Headless host: fills the chart widget with random (or CSV-loaded) series and renders PNGs.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{theme, ChartStyle, ChartView, DataSource, RandomSource};
use chart_render_skia::{render_to_png, RenderOptions};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 640;

struct Args {
    out_dir: PathBuf,
    csv: Option<String>,
    theme: String,
    seed: Option<u64>,
    rounds: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let style = theme::find(&args.theme)?;
    let mut view = ChartView::new(style).with_size(WIDTH, HEIGHT);
    let opts = RenderOptions::default();

    if let Some(raw) = &args.csv {
        let (path, used_alt) = resolve_path(raw)?;
        info!(path = %path.display(), "using input file");
        if used_alt {
            info!("extension swapped between .csv/.cvs");
        }
        let file = std::fs::File::open(&path).with_context(|| format!("opening {}", path.display()))?;
        let values = load_series_csv(file).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        info!(count = values.len(), "loaded values");
        view.set_data(&values)?;
        let out = out_name(&args.out_dir, &style, "csv");
        render_to_png(&mut view, &opts, &out)?;
        info!("wrote {}", out.display());
        return Ok(());
    }

    let mut rounds: Vec<Vec<i32>> = Vec::with_capacity(args.rounds);
    match args.seed {
        Some(seed) => {
            let mut src = RandomSource::seeded(seed);
            rounds.extend((0..args.rounds).map(|_| src.next_series()));
        }
        None => {
            let mut src = RandomSource::new();
            rounds.extend((0..args.rounds).map(|_| src.next_series()));
        }
    }

    for (i, values) in rounds.iter().enumerate() {
        view.set_data(values)?;
        info!(round = i, ?values, "set random data");
        let out = out_name(&args.out_dir, &style, &format!("random_{i}"));
        render_to_png(&mut view, &opts, &out)?;
        info!("wrote {}", out.display());
    }
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        out_dir: PathBuf::from("target/out"),
        csv: None,
        theme: "light".to_string(),
        seed: None,
        rounds: 1,
    };
    while let Some(a) = it.next() {
        let mut value = |flag: &str| it.next().with_context(|| format!("{flag} expects a value"));
        match a.as_str() {
            "--csv" => args.csv = Some(value("--csv")?),
            "--theme" => args.theme = value("--theme")?,
            "--seed" => args.seed = Some(value("--seed")?.parse::<u64>().context("--seed expects an integer")?),
            "--rounds" => {
                args.rounds = value("--rounds")?.parse::<usize>().context("--rounds expects an integer")?;
            }
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag {flag}"),
            dir => args.out_dir = PathBuf::from(dir),
        }
    }
    Ok(args)
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => alt.set_extension("csv"),
        "csv" => alt.set_extension("cvs"),
        _ => return None,
    };
    Some(alt)
}

/// Produce output file name like <dir>/chart_<theme>_<suffix>.png
fn out_name(dir: &Path, style: &ChartStyle, suffix: &str) -> PathBuf {
    dir.join(format!("chart_{}_{}.png", style.name, suffix))
}

/// Read one integer per row from a headed CSV.
///
/// Uses the column named `value`/`y`/`close` when present, otherwise the
/// first column. Fractional values are rounded; unparsable rows are skipped.
fn load_series_csv(input: impl Read) -> Result<Vec<i32>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(input);
    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let column = headers
        .iter()
        .position(|h| matches!(h.as_str(), "value" | "y" | "close" | "v"))
        .unwrap_or(0);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        match rec.get(column).and_then(|s| s.parse::<f64>().ok()) {
            Some(v) if v.is_finite() => out.push(v.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32),
            _ => warn!(row, "skipping row without a numeric value"),
        }
    }
    anyhow::ensure!(!out.is_empty(), "no numeric values found in column {column}");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_prefers_named_column() {
        let data = "time,value\n1,3\n2,7.6\n3,oops\n4,-2\n";
        assert_eq!(load_series_csv(data.as_bytes()).unwrap(), vec![3, 8, -2]);
    }

    #[test]
    fn csv_falls_back_to_first_column() {
        let data = "a,b\n5,1\n6,1\n";
        assert_eq!(load_series_csv(data.as_bytes()).unwrap(), vec![5, 6]);
    }

    #[test]
    fn csv_without_numbers_is_an_error() {
        assert!(load_series_csv("a\nx\n".as_bytes()).is_err());
    }

    #[test]
    fn args_parse_flags_and_out_dir() {
        let argv = ["--theme", "dark", "--seed", "9", "--rounds", "3", "out"].map(String::from);
        let args = parse_args(argv.into_iter()).unwrap();
        assert_eq!(args.theme, "dark");
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.rounds, 3);
        assert_eq!(args.out_dir, PathBuf::from("out"));
        assert!(parse_args(["--bogus".to_string()].into_iter()).is_err());
    }

    #[test]
    fn swap_ext_handles_typo_extension() {
        assert_eq!(swap_ext(Path::new("a.cvs")), Some(PathBuf::from("a.csv")));
        assert_eq!(swap_ext(Path::new("a.txt")), None);
    }
}
