use abcompute::compute::{
    compute_alpha, compute_mde, compute_power, compute_sample_size, compute_ss_range,
    expected_duration_days, CalculationInput, ComputationTarget, Sidedness,
};
use clap::{Args, Parser, Subcommand};
use log::info;

/// Sample size and power calculator for two-proportion A/B tests
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone, Copy)]
struct TestArgs {
    /// Baseline conversion rate in percent
    #[arg(long)]
    bcr: f64,

    /// Significance level
    #[arg(long, default_value_t = 0.05)]
    alpha: f64,

    /// Use a one-sided test instead of a two-sided one
    #[arg(long)]
    one_sided: bool,
}

impl TestArgs {
    fn sidedness(&self) -> Sidedness {
        Sidedness::from(!self.one_sided)
    }
}

#[derive(Args, Debug, Clone, Copy)]
struct GroupArgs {
    /// Size of the control group
    #[arg(long)]
    control: u64,

    /// Size of the test group
    #[arg(long)]
    test: u64,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Required group sizes for a target power
    SampleSize {
        #[command(flatten)]
        test_args: TestArgs,
        /// Relative minimum detectable effect in percent
        #[arg(long, allow_negative_numbers = true)]
        mde: f64,
        /// Statistical power
        #[arg(long, default_value_t = 0.8)]
        power: f64,
        /// Share of traffic assigned to the test group
        #[arg(long, default_value_t = 0.5)]
        split: f64,
        /// Subjects entering the experiment per day, to estimate duration
        #[arg(long)]
        daily_traffic: Option<f64>,
    },
    /// Power achieved by fixed group sizes
    Power {
        #[command(flatten)]
        test_args: TestArgs,
        #[arg(long, allow_negative_numbers = true)]
        mde: f64,
        #[command(flatten)]
        groups: GroupArgs,
    },
    /// Significance level at which fixed group sizes reach a target power
    Alpha {
        /// Baseline conversion rate in percent
        #[arg(long)]
        bcr: f64,
        #[arg(long, allow_negative_numbers = true)]
        mde: f64,
        #[arg(long, default_value_t = 0.8)]
        power: f64,
        #[arg(long)]
        one_sided: bool,
        #[command(flatten)]
        groups: GroupArgs,
    },
    /// Relative effect detectable with fixed group sizes
    Mde {
        #[command(flatten)]
        test_args: TestArgs,
        #[arg(long, default_value_t = 0.8)]
        power: f64,
        #[command(flatten)]
        groups: GroupArgs,
    },
    /// Sample size table over several effects and powers
    Range {
        #[command(flatten)]
        test_args: TestArgs,
        #[arg(long, num_args = 1.., required = true, allow_negative_numbers = true)]
        mde: Vec<f64>,
        #[arg(long, num_args = 1.., default_values_t = [0.8])]
        power: Vec<f64>,
        #[arg(long, default_value_t = 0.5)]
        split: f64,
    },
}

impl Command {
    fn target(&self) -> ComputationTarget {
        match self {
            Command::SampleSize { .. } | Command::Range { .. } => ComputationTarget::SampleSize,
            Command::Power { .. } => ComputationTarget::Power,
            Command::Alpha { .. } => ComputationTarget::Alpha,
            Command::Mde { .. } => ComputationTarget::EffectSize,
        }
    }
}

fn log_level(verbose: u8) -> simplelog::LevelFilter {
    match verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    simplelog::TermLogger::init(
        log_level(cli.verbose),
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    info!("computing {}", cli.command.target());

    match cli.command {
        Command::SampleSize {
            test_args,
            mde,
            power,
            split,
            daily_traffic,
        } => {
            let res = compute_sample_size(&CalculationInput {
                baseline_rate: test_args.bcr,
                relative_effect: mde,
                alpha: test_args.alpha,
                power,
                sidedness: test_args.sidedness(),
                split_ratio: split,
            })?;
            println!("control: {}", res.control_size);
            println!("test: {}", res.test_size);
            println!("total: {}", res.total_size);
            if let Some(daily_traffic) = daily_traffic {
                let days = expected_duration_days(res.total_size, daily_traffic)?;
                println!("days: {days}");
            }
        }
        Command::Power {
            test_args,
            mde,
            groups,
        } => {
            let power = compute_power(
                test_args.bcr,
                mde,
                test_args.alpha,
                test_args.sidedness(),
                groups.control,
                groups.test,
            )?;
            println!("power: {power:.4}");
        }
        Command::Alpha {
            bcr,
            mde,
            power,
            one_sided,
            groups,
        } => {
            let alpha = compute_alpha(
                bcr,
                mde,
                power,
                Sidedness::from(!one_sided),
                groups.control,
                groups.test,
            )?;
            println!("alpha: {alpha:.4}");
        }
        Command::Mde {
            test_args,
            power,
            groups,
        } => {
            let mde = compute_mde(
                test_args.bcr,
                test_args.alpha,
                power,
                test_args.sidedness(),
                groups.control,
                groups.test,
            )?;
            println!("mde: {mde:.2}%");
        }
        Command::Range {
            test_args,
            mde,
            power,
            split,
        } => {
            let input = CalculationInput {
                baseline_rate: test_args.bcr,
                alpha: test_args.alpha,
                sidedness: test_args.sidedness(),
                split_ratio: split,
                ..CalculationInput::default()
            };
            for row in compute_ss_range(&input, &mde, &power)? {
                println!(
                    "mde: {}%, power: {}, control: {}, test: {}, total: {}",
                    row.relative_effect,
                    row.power,
                    row.result.control_size,
                    row.result.test_size,
                    row.result.total_size
                );
            }
        }
    }

    Ok(())
}
