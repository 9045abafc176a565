use crate::config::*;
use crate::domain::Promotion;
use crate::error::*;
use crate::initial_conditions::*;
use clap::Parser;

/// Explicit 3 point stencil on a 1D field
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of interior points, ghost cells not included.
    #[arg(short = 'n', long, default_value_t = 10_000_000, allow_negative_numbers = true)]
    pub num_points: i64,

    /// Number of time steps to take.
    #[arg(short = 't', long, default_value_t = 100, allow_negative_numbers = true)]
    pub num_timesteps: i64,

    /// Weight of the left neighbor.
    #[arg(long, default_value_t = 0.25, allow_negative_numbers = true)]
    pub coef_left: f64,

    /// Weight of the point itself.
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    pub coef_center: f64,

    /// Weight of the right neighbor.
    #[arg(long, default_value_t = 0.25, allow_negative_numbers = true)]
    pub coef_right: f64,

    /// Initial condition.
    #[arg(long, value_enum, default_value_t = ClapICType::Impulse)]
    pub ic: ClapICType,

    /// Impulse value, normal variance, or random max value.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub ic_dial: f64,

    /// Position of the impulse, defaults to num_points / 2.
    #[arg(long)]
    pub impulse_index: Option<usize>,

    /// Seed for the random initial condition.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chunk size to use for parallelism.
    #[arg(short, long, default_value_t = 100_000)]
    pub chunk_size: usize,

    /// The number of threads to use, defaults to rayon's choice.
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// How the next field becomes the current one after each step.
    #[arg(long, value_enum, default_value_t = Promotion::Copy)]
    pub promotion: Promotion,

    /// Print every value of the final field.
    #[arg(long)]
    pub print_field: bool,
}

impl Args {
    pub fn cli_parse(name: &str) -> Self {
        let args = Args::parse();
        tracing::info!(
            example = name,
            git_describe = crate::build_info::GIT_DESCRIBE,
            git_hash = crate::build_info::GIT_HASH,
            "starting"
        );
        args
    }

    pub fn to_config(&self) -> StencilResult<SimulationConfig> {
        Ok(SimulationConfig {
            num_points: self.num_points,
            num_timesteps: self.num_timesteps,
            coef_left: self.coef_left,
            coef_center: self.coef_center,
            coef_right: self.coef_right,
            ic: self
                .ic
                .to_ic_type(self.ic_dial, self.impulse_index, self.seed)?,
            chunk_size: self.chunk_size,
            threads: self.threads,
            promotion: self.promotion,
        })
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn defaults_match_config() {
        let args = Args::try_parse_from(["stencil_1d"]).unwrap();
        assert_eq!(args.to_config().unwrap(), SimulationConfig::default());
    }

    #[test]
    fn negative_counts_reach_validation() {
        let args = Args::try_parse_from([
            "stencil_1d",
            "--num-points",
            "-3",
            "--num-timesteps",
            "-1",
        ])
        .unwrap();
        assert_eq!(args.num_points, -3);
        assert!(args.to_config().unwrap().validate().is_err());
    }

    #[test]
    fn parse_options() {
        let args = Args::try_parse_from([
            "stencil_1d",
            "-n",
            "5",
            "-t",
            "1",
            "--coef-left",
            "-0.5",
            "--ic",
            "impulse",
            "--impulse-index",
            "3",
            "--promotion",
            "swap",
            "-j",
            "2",
        ])
        .unwrap();
        let config = args.to_config().unwrap();
        assert_eq!(config.num_points, 5);
        assert_eq!(config.num_timesteps, 1);
        assert_eq!(config.coef_left, -0.5);
        assert_eq!(config.promotion, Promotion::Swap);
        assert_eq!(config.threads, Some(2));
        assert_eq!(
            config.ic,
            ICType::Impulse {
                index: Some(3),
                value: 1.0
            }
        );
    }

    #[test]
    fn fractional_rand_dial_rejected() {
        let args = Args::try_parse_from([
            "stencil_1d",
            "--ic",
            "rand",
            "--ic-dial",
            "2.7",
        ])
        .unwrap();
        assert!(matches!(
            args.to_config(),
            Err(StencilError::InvalidInitialCondition { .. })
        ));

        let args = Args::try_parse_from([
            "stencil_1d",
            "--ic",
            "rand",
            "--ic-dial",
            "16",
        ])
        .unwrap();
        assert_eq!(
            args.to_config().unwrap().ic,
            ICType::Rand {
                max_val: 16,
                seed: None
            }
        );
    }
}
