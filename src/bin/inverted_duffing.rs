use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use duffing::{render, Parameters, F_LOW};

/// Solve the inverted Duffing oscillator and plot x against y = dx/dt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Forcing amplitude F
    #[arg(short = 'F', long = "F", visible_alias = "forcing", default_value_t = F_LOW,
          allow_negative_numbers = true)]
    forcing: f64,

    /// Initial value for x
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x0: f64,

    /// Initial value for y (dx/dt)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y0: f64,

    /// Number of seconds
    #[arg(short, long = "t", visible_alias = "time", default_value_t = 100)]
    t: u32,

    /// Step resolution (--dt 10 gives 10 steps per second)
    #[arg(long, default_value_t = 1000)]
    dt: u32,

    /// Compare F=0.24 and F=0.35, ignoring -F
    #[arg(long)]
    comp: bool,

    /// Directory the image is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    #[arg(long, default_value_t = render::WIDTH)]
    width: u32,

    #[arg(long, default_value_t = render::HEIGHT)]
    height: u32,
}

impl Args {
    fn parameters(&self) -> Parameters {
        Parameters {
            forcing:            self.forcing,
            x0:                 self.x0,
            y0:                 self.y0,
            duration:           self.t,
            steps_per_second:   self.dt
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let params = args.parameters();
    params.validate().context("invalid parameters")?;
    let n = params.steps();
    info!(?params, n, comp = args.comp, "integrating");

    let (fig, name) = render::build(&params, args.comp).context("failed to sample trajectory")?;
    let path = render::save(&fig, args.width, args.height, &args.out_dir, &name)
        .context("failed to render plot")?;

    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_match_documented_names() {
        let args = Args::try_parse_from([
            "inverted_duffing", "--F", "0.3", "--x0", "-1.5", "--y0", "0.25", "-t", "5", "--dt", "20", "--comp"
        ]).unwrap();
        let p = args.parameters();
        assert_eq!(p.forcing, 0.3);
        assert_eq!(p.x0, -1.5);
        assert_eq!(p.y0, 0.25);
        assert_eq!(p.steps(), 100);
        assert!(args.comp);

        let args = Args::try_parse_from(["inverted_duffing", "-F", "0.35", "--time", "2"]).unwrap();
        assert_eq!(args.forcing, 0.35);
        assert_eq!(args.t, 2);
        assert!(!args.comp);
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["inverted_duffing"]).unwrap();
        assert_eq!(args.parameters(), Parameters::default());
    }
}
