use gym_game_core::Obs;

/// Observation of [`GridWorld`](super::GridWorld).
///
/// Positions are `[row, col]`, row 0 being the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridObs {
    /// Position of the agent.
    pub agent: [usize; 2],

    /// Position of the goal.
    pub goal: [usize; 2],
}

impl GridObs {
    /// Manhattan distance between the agent and the goal.
    pub fn distance(&self) -> usize {
        let d = |a: usize, b: usize| if a > b { a - b } else { b - a };
        d(self.agent[0], self.goal[0]) + d(self.agent[1], self.goal[1])
    }
}

impl Obs for GridObs {}

impl From<GridObs> for Vec<usize> {
    fn from(obs: GridObs) -> Self {
        vec![obs.agent[0], obs.agent[1], obs.goal[0], obs.goal[1]]
    }
}
