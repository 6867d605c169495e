//! Utilities for interaction of policies and environments.
use crate::{
    record::{RecordValue, Recorder},
    Env, Policy,
};
use anyhow::Result;
use log::info;

/// Run episodes with a policy and recorder.
///
/// For every step, the `info` of the step is written to `recorder` together with
/// `"reward"`, `"episode"` and `"step"`. Returns the return of each episode.
pub fn eval_with_recorder<E, P, R>(
    env: &mut E,
    policy: &mut P,
    n_episodes: usize,
    recorder: &mut R,
) -> Result<Vec<f32>>
where
    E: Env,
    P: Policy<E>,
    R: Recorder,
{
    let mut rs = Vec::new();

    for episode in 0..n_episodes {
        let mut prev_obs = env.reset()?;
        let mut count_step = 0;
        let mut r_total = 0.0;

        loop {
            let act = policy.sample(&prev_obs);
            let step = env.step(&act)?;
            let is_done = step.is_done();
            r_total += step.reward;

            let mut record = step.info;
            record.insert("reward", RecordValue::Scalar(step.reward));
            record.insert("episode", RecordValue::Scalar(episode as _));
            record.insert("step", RecordValue::Scalar(count_step as _));
            recorder.write(record);

            count_step += 1;
            if is_done {
                break;
            }
            prev_obs = step.obs;
        }

        info!(
            "Episode {:?}, {:?} steps, reward = {:?}",
            episode, count_step, r_total
        );
        rs.push(r_total);
    }

    Ok(rs)
}
