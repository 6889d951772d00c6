use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use maf::api::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_json::{json, Value};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "maf")]
#[command(about = "Angle, direction and rectangle helpers; prints JSON")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Degrees to radians (4 decimals)
    Deg2rad {
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },
    /// Radians to degrees (4 decimals)
    Rad2deg {
        #[arg(allow_negative_numbers = true)]
        radians: f64,
    },
    /// Unit direction for an angle (radians unless --degrees)
    Direction {
        #[arg(allow_negative_numbers = true)]
        angle: f64,
        #[arg(long)]
        degrees: bool,
    },
    /// Angle a vector points at
    Heading {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(long)]
        degrees: bool,
    },
    /// Angle of the difference vector `from - to`
    Between {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        from: Vec<f64>,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        to: Vec<f64>,
        /// Use the reversed variant. It declares its parameters as (to, from),
        /// so --from fills its `to` slot and the result is the angle of `to - from`
        #[arg(long)]
        reversed: bool,
    },
    /// Wrap an angle into one turn centered on zero
    Wrap {
        #[arg(allow_negative_numbers = true)]
        angle: f64,
        #[arg(long)]
        degrees: bool,
    },
    /// Smooth rotation from one angle toward another
    Clerp {
        #[arg(allow_negative_numbers = true)]
        from: f64,
        #[arg(allow_negative_numbers = true)]
        to: f64,
        #[arg(long)]
        degrees: bool,
        /// Number of ticks to emit (at most 100000)
        #[arg(long, default_value_t = 1)]
        steps: usize,
        #[arg(long, default_value_t = SMOOTHNESS)]
        smoothness: f64,
    },
    /// Overlap test for two integer rectangles given as x0,y0,x1,y1
    Overlap {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        a: Vec<i64>,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        b: Vec<i64>,
    },
    /// Integer bounds and rotation pivot of a rectangle given as x,y,w,h
    Origin {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        rect: Vec<f64>,
    },
    /// Uniform integer in [min, max]
    Random {
        #[arg(long, allow_negative_numbers = true)]
        min: i64,
        #[arg(long, allow_negative_numbers = true)]
        max: i64,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Pick one of the given items
    Pick {
        items: Vec<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a small version block
    Report,
}

/// Upper bound on `clerp --steps`; the trajectory is held in memory.
const MAX_CLERP_STEPS: usize = 100_000;

#[derive(Serialize)]
struct ClerpStep {
    tick: usize,
    angle: f64,
}

#[derive(Serialize)]
struct RectOut {
    min: [i64; 2],
    max: [i64; 2],
    display: String,
}

impl From<Rect> for RectOut {
    fn from(r: Rect) -> Self {
        Self {
            min: [r.min.x, r.min.y],
            max: [r.max.x, r.max.y],
            display: r.to_string(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = dispatch(cmd.action)?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn dispatch(action: Action) -> Result<Value> {
    match action {
        Action::Deg2rad { degrees } => {
            tracing::info!(degrees, "deg2rad");
            Ok(json!({ "radians": degrees_to_radians(degrees) }))
        }
        Action::Rad2deg { radians } => {
            tracing::info!(radians, "rad2deg");
            Ok(json!({ "degrees": radians_to_degrees(radians) }))
        }
        Action::Direction { angle, degrees } => direction(angle, degrees),
        Action::Heading { x, y, degrees } => heading(x, y, degrees),
        Action::Between { from, to, reversed } => between(&from, &to, reversed),
        Action::Wrap { angle, degrees } => {
            tracing::info!(angle, degrees, "wrap");
            let wrapped = if degrees {
                wrap_degrees(angle)
            } else {
                wrap_radians(angle)
            };
            Ok(json!({ "wrapped": wrapped }))
        }
        Action::Clerp {
            from,
            to,
            degrees,
            steps,
            smoothness,
        } => clerp(from, to, degrees, steps, ClerpCfg { smoothness }),
        Action::Overlap { a, b } => overlap(&a, &b),
        Action::Origin { rect } => origin(&rect),
        Action::Random { min, max, seed } => random(min, max, seed),
        Action::Pick { items, seed } => pick(&items, seed),
        Action::Report => Ok(report()),
    }
}

fn vec2_arg(name: &str, v: &[f64]) -> Result<Vec2> {
    ensure!(v.len() == 2, "--{name} expects x,y (got {} values)", v.len());
    Ok(Vec2::new(v[0], v[1]))
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

fn direction(angle: f64, degrees: bool) -> Result<Value> {
    tracing::info!(angle, degrees, "direction");
    let dir = if degrees {
        direction_from_degrees(angle)
    } else {
        direction_from_radians(angle)
    };
    Ok(json!({ "x": dir.x, "y": dir.y }))
}

fn heading(x: f64, y: f64, degrees: bool) -> Result<Value> {
    tracing::info!(x, y, degrees, "heading");
    let v = Vec2::new(x, y);
    if degrees {
        Ok(json!({ "degrees": vector_to_degrees(v) }))
    } else {
        Ok(json!({ "radians": angle_from_direction(v) }))
    }
}

fn between(from: &[f64], to: &[f64], reversed: bool) -> Result<Value> {
    let from = vec2_arg("from", from)?;
    let to = vec2_arg("to", to)?;
    tracing::info!(from = ?(from.x, from.y), to = ?(to.x, to.y), reversed, "between");
    let radians = if reversed {
        angle_between_reversed(from, to)
    } else {
        angle_between(from, to)
    };
    Ok(json!({ "radians": radians, "degrees": radians_to_degrees(radians) }))
}

fn clerp(from: f64, to: f64, degrees: bool, steps: usize, cfg: ClerpCfg) -> Result<Value> {
    ensure!(steps > 0, "--steps must be at least 1");
    ensure!(
        steps <= MAX_CLERP_STEPS,
        "--steps must be at most {MAX_CLERP_STEPS} (got {steps})"
    );
    ensure!(
        cfg.smoothness.is_finite(),
        "--smoothness must be finite (got {})",
        cfg.smoothness
    );
    tracing::info!(from, to, degrees, steps, smoothness = cfg.smoothness, "clerp");
    let mut angle = from;
    let mut trajectory = Vec::with_capacity(steps);
    for tick in 1..=steps {
        angle = if degrees {
            cfg.step_degrees(angle, to)
        } else {
            cfg.step_radians(angle, to)
        };
        trajectory.push(ClerpStep { tick, angle });
    }
    Ok(json!({ "final": angle, "steps": trajectory }))
}

fn overlap(a: &[i64], b: &[i64]) -> Result<Value> {
    ensure!(a.len() == 4, "--a expects x0,y0,x1,y1 (got {} values)", a.len());
    ensure!(b.len() == 4, "--b expects x0,y0,x1,y1 (got {} values)", b.len());
    let ra = Rect::from_corners(a[0], a[1], a[2], a[3]);
    let rb = Rect::from_corners(b[0], b[1], b[2], b[3]);
    tracing::info!(a = %ra, b = %rb, "overlap");
    Ok(json!({
        "a": RectOut::from(ra),
        "b": RectOut::from(rb),
        "overlaps": ra.overlaps(&rb),
    }))
}

fn origin(rect: &[f64]) -> Result<Value> {
    ensure!(
        rect.len() == 4,
        "--rect expects x,y,w,h (got {} values)",
        rect.len()
    );
    let bounds = PosSizeRect::new(rect[0], rect[1], rect[2], rect[3]).to_rect();
    let pivot = origin_from_rect(&bounds);
    tracing::info!(rect = %bounds, "origin");
    Ok(json!({
        "rect": RectOut::from(bounds),
        "size": [bounds.dx(), bounds.dy()],
        "origin": { "x": pivot.x, "y": pivot.y },
    }))
}

fn random(min: i64, max: i64, seed: Option<u64>) -> Result<Value> {
    tracing::info!(min, max, seed = ?seed, "random");
    let value = random_in_range_inclusive_with(&mut rng_for(seed), min, max)?;
    Ok(json!({ "value": value }))
}

fn pick(items: &[String], seed: Option<u64>) -> Result<Value> {
    tracing::info!(count = items.len(), seed = ?seed, "pick");
    let choice = pick_random_with(&mut rng_for(seed), items)?;
    Ok(json!({ "choice": choice }))
}

fn report() -> Value {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    json!({
        "code_rev": rev,
        "version": maf::VERSION,
        "smoothness": SMOOTHNESS,
    })
}
