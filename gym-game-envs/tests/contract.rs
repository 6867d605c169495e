//! Checks of the environment contract shared by all environments.
use anyhow::Result;
use gym_game_core::{
    error::GymError, space::Space, Env, Policy, RandomPolicy, RenderMode,
};
use gym_game_envs::{GridWorld, GridWorldConfig, GuessingGame, GuessingGameConfig};
use tempdir::TempDir;

const ALL_MODES: [&str; 4] = ["human", "rgb_array", "ansi", "depth_array"];

fn gym_error(err: &anyhow::Error) -> Option<&GymError> {
    err.downcast_ref::<GymError>()
}

fn check_episodes<E>(env: &mut E, n_episodes: usize, max_steps: usize) -> Result<()>
where
    E: Env,
    E::Act: From<<E::ActionSpace as Space>::Element>,
    E::Obs: Into<<E::ObservationSpace as Space>::Element>,
{
    let mut policy = RandomPolicy::from_env(env, Some(0));

    for _ in 0..n_episodes {
        let obs = env.reset()?;
        assert!(env.observation_space().contains(&obs.clone().into()));

        let mut obs = obs;
        for _ in 0..max_steps {
            let (next_obs, reward, done, info) = env.step(&policy.sample(&obs))?.into_tuple();
            assert!(env.observation_space().contains(&next_obs.clone().into()));
            assert!(reward.is_finite());
            assert!(!info.is_empty());
            if done {
                let err = env.step(&policy.sample(&next_obs)).unwrap_err();
                assert!(matches!(gym_error(&err), Some(GymError::StaleEpisode(_))));
                break;
            }
            obs = next_obs;
        }
    }
    Ok(())
}

fn check_render_modes<E: Env>(env: &mut E) -> Result<()> {
    env.reset()?;
    for mode in ALL_MODES.iter() {
        let supported = mode
            .parse::<RenderMode>()
            .map(|m| E::METADATA.supports(m))
            .unwrap_or(false);
        let res = env.render_str(mode);
        if supported {
            res?;
        } else {
            let err = res.unwrap_err();
            assert_eq!(
                gym_error(&err),
                Some(&GymError::UnsupportedRenderMode(mode.to_string()))
            );
        }
    }
    Ok(())
}

fn check_close<E: Env>(env: &mut E) -> Result<()> {
    env.reset()?;
    env.close()?;
    env.close()?;
    let err = env.reset().unwrap_err();
    assert_eq!(gym_error(&err), Some(&GymError::EnvClosed));
    Ok(())
}

fn initial_observations<E: Env>(env: &mut E, n: usize) -> Result<Vec<E::Obs>> {
    (0..n).map(|_| env.reset()).collect()
}

fn grid_config(dir: &TempDir) -> GridWorldConfig {
    GridWorldConfig::default().human_output(Some(dir.path().join("grid.txt")))
}

fn guess_config(dir: &TempDir) -> GuessingGameConfig {
    GuessingGameConfig::default().human_output(Some(dir.path().join("guess.txt")))
}

#[test]
fn test_grid_world_contract() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = TempDir::new("grid_world_contract")?;

    check_episodes(&mut GridWorld::build(&grid_config(&dir), Some(1))?, 5, 1000)?;
    check_render_modes(&mut GridWorld::build(&grid_config(&dir), Some(1))?)?;
    check_close(&mut GridWorld::build(&grid_config(&dir), Some(1))?)?;
    Ok(())
}

#[test]
fn test_guessing_game_contract() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = TempDir::new("guessing_game_contract")?;

    check_episodes(&mut GuessingGame::build(&guess_config(&dir), Some(1))?, 3, 1000)?;
    check_render_modes(&mut GuessingGame::build(&guess_config(&dir), Some(1))?)?;
    check_close(&mut GuessingGame::build(&guess_config(&dir), Some(1))?)?;
    Ok(())
}

#[test]
fn test_resets_are_independent() -> Result<()> {
    // The generator is seeded once; resets must not replay the same episode.
    let mut env = GridWorld::build(&GridWorldConfig::default().size(10, 10), Some(7))?;
    let obs = initial_observations(&mut env, 10)?;
    assert!(obs.iter().any(|o| *o != obs[0]));

    let mut env = GuessingGame::build(&GuessingGameConfig::default(), Some(7))?;
    let mut numbers = vec![];
    for _ in 0..5 {
        env.reset()?;
        let step = env.step(&gym_game_envs::GuessAct(0.0))?;
        numbers.push(step.info.get_scalar("number")?);
    }
    assert!(numbers.iter().any(|n| *n != numbers[0]));
    Ok(())
}

#[test]
fn test_entropy_seeded_envs_differ() -> Result<()> {
    let config = GridWorldConfig::default().size(10, 10);
    let mut env1 = GridWorld::build(&config, None)?;
    let mut env2 = GridWorld::build(&config, None)?;
    let obs1 = initial_observations(&mut env1, 10)?;
    let obs2 = initial_observations(&mut env2, 10)?;
    assert_ne!(obs1, obs2);
    Ok(())
}

#[test]
fn test_explicit_seed_replays() -> Result<()> {
    let config = GridWorldConfig::default();
    let mut env = GridWorld::build(&config, None)?;
    assert_eq!(env.seed(Some(11)), 11);
    let obs1 = initial_observations(&mut env, 5)?;
    env.seed(Some(11));
    let obs2 = initial_observations(&mut env, 5)?;
    assert_eq!(obs1, obs2);
    Ok(())
}

#[test]
fn test_step_before_reset() -> Result<()> {
    let mut env = GridWorld::build(&GridWorldConfig::default(), None)?;
    let err = env.step(&gym_game_envs::GridAct::UP).unwrap_err();
    assert_eq!(gym_error(&err), Some(&GymError::EpisodeNotStarted));

    let err = env.render(RenderMode::Ansi).unwrap_err();
    assert_eq!(gym_error(&err), Some(&GymError::EpisodeNotStarted));
    Ok(())
}

#[test]
fn test_metadata_is_static() {
    assert_eq!(
        GridWorld::METADATA.render_mode_names(),
        vec!["human", "rgb_array", "ansi"]
    );
    assert_eq!(GuessingGame::METADATA.render_mode_names(), vec!["human"]);
    assert!(matches!(
        GuessingGame::build(&GuessingGameConfig::default(), None)
            .and_then(|mut env| env.render(RenderMode::Ansi)),
        Err(_)
    ));
}
