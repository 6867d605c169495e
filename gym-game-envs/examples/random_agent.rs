use anyhow::Result;
use clap::Parser;
use gym_game_core::{
    config::YamlConfig,
    record::{Record, Recorder},
    space::Space,
    util::eval_with_recorder,
    wrappers::{RecordEpisodeStatistics, TimeLimit, TimeLimitConfig, EPISODE_RETURN_KEY},
    Env, Policy, RandomPolicy, RenderMode, Rendered,
};
use gym_game_envs::{GridWorld, GridWorldConfig, GuessingGame, GuessingGameConfig};
use log::info;
use std::{thread::sleep, time::Duration};

/// Run a random agent in an environment
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Environment name (grid, guess)
    #[arg(long, default_value = "grid")]
    env: String,

    /// Number of episodes
    #[arg(long, default_value_t = 3)]
    episodes: usize,

    /// Random seed, drawn from entropy if not given
    #[arg(long)]
    seed: Option<u64>,

    /// Render mode at every step (human, rgb_array, ansi)
    #[arg(long)]
    render: Option<String>,

    /// Maximum number of steps in an episode
    #[arg(long, default_value_t = 100)]
    max_steps: usize,

    /// YAML configuration of the environment
    #[arg(long)]
    config: Option<String>,

    /// Waiting time in milliseconds between frames
    #[arg(long, default_value_t = 100)]
    wait: u64,
}

fn run<E>(env_config: E::Config, args: &Args) -> Result<()>
where
    E: Env,
    E::Act: From<<E::ActionSpace as Space>::Element>,
{
    let config = TimeLimitConfig::new(env_config, args.max_steps);
    let mut env = RecordEpisodeStatistics::<TimeLimit<E>>::build(&config, args.seed)?;
    info!("render.modes = {:?}", env.metadata().render_mode_names());

    let mut policy = RandomPolicy::from_env(&env, args.seed);
    let mut recorder = StepPrinter::default();
    let returns = match args.render.as_deref() {
        None => eval_with_recorder(&mut env, &mut policy, args.episodes, &mut recorder)?,
        Some(mode) => {
            let wait = Duration::from_millis(args.wait);
            render_episodes(&mut env, &mut policy, args.episodes, mode, wait)?
        }
    };

    info!("Returns: {:?}", returns);
    info!("Lengths: {:?}", env.episode_lengths());
    env.close()
}

/// Logs the return of each finished episode.
#[derive(Default)]
struct StepPrinter {
    n: usize,
}

impl Recorder for StepPrinter {
    fn write(&mut self, record: Record) {
        self.n += 1;
        if let Ok(r) = record.get_scalar(EPISODE_RETURN_KEY) {
            info!("Episode finished after {} steps, return = {}", self.n, r);
            self.n = 0;
        }
    }
}

fn render_episodes<E, P>(
    env: &mut E,
    policy: &mut P,
    n_episodes: usize,
    mode: &str,
    wait: Duration,
) -> Result<Vec<f32>>
where
    E: Env,
    P: Policy<E>,
{
    let mut returns = vec![];
    for _ in 0..n_episodes {
        let mut obs = env.reset()?;
        let mut r_total = 0.0;
        loop {
            show(env.render_str(mode)?);
            let step = env.step(&policy.sample(&obs))?;
            r_total += step.reward;
            if step.is_done() {
                show(env.render_str(mode)?);
                break;
            }
            obs = step.obs;
            sleep(wait);
        }
        returns.push(r_total);
    }
    Ok(returns)
}

fn show(rendered: Rendered) {
    match rendered {
        Rendered::None => {}
        Rendered::Ansi(text) => println!("{}\n", text),
        Rendered::RgbArray(frame) => info!("frame of shape {:?}", frame.shape()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Some(mode) = args.render.as_deref() {
        // fail early on unknown names
        mode.parse::<RenderMode>()?;
    }

    match args.env.as_str() {
        "grid" => {
            let config = match &args.config {
                Some(path) => GridWorldConfig::load(path)?,
                None => GridWorldConfig::default(),
            };
            run::<GridWorld>(config, &args)
        }
        "guess" => {
            let config = match &args.config {
                Some(path) => GuessingGameConfig::load(path)?,
                None => GuessingGameConfig::default(),
            };
            run::<GuessingGame>(config, &args)
        }
        name => anyhow::bail!("Unknown environment: {}", name),
    }
}
