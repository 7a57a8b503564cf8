use crate::algorithm::constructor::advance;
use crate::algorithm::{Ant, Hop, Problem, ProblemEnum, Walk};
use crate::component::{BestSolution, PheromoneMatrix, Tracker};
use crate::utils::config::Parameters;
use crate::utils::error::{Error, Result};
use log::{debug, info, warn};
use ordered_float::OrderedFloat;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Stopped,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunState {
    pub iteration: usize,
    pub is_active: bool,
}

/// What happened when every ant had finished walking.
#[derive(Clone, Debug)]
pub struct Cycle {
    pub iteration: usize,
    pub completed: usize,
    pub stuck: usize,
    pub skipped_deposits: usize,
    pub iteration_best: Option<f64>,
    pub improved: bool,
    pub best: Option<BestSolution>,
}

#[derive(Clone, Debug)]
pub struct Step {
    pub state: RunState,
    pub cycle: Option<Cycle>,
}

struct Instance {
    problem: ProblemEnum,
    params: Parameters,
    pheromone: PheromoneMatrix,
    ants: Vec<Ant>,
}

/// The whole simulation: one problem instance, its trails, its ants and the
/// best path found so far. Advances only when `step` is called.
pub struct Colony {
    instance: Option<Instance>,
    tracker: Tracker,
    phase: Phase,
    iteration: usize,
    seed: u64,
    rng: ChaChaRng,
    hops: Vec<Hop>,
}


impl Colony {
    pub fn new(seed: u64) -> Self {
        Colony {
            instance: None,
            tracker: Tracker::new(),
            phase: Phase::Idle,
            iteration: 0,
            seed,
            rng: ChaChaRng::seed_from_u64(seed),
            hops: vec![],
        }
    }
    pub fn with_problem(problem: impl Into<ProblemEnum>, params: Parameters, seed: u64) -> Result<Self> {
        let mut colony = Colony::new(seed);
        colony.reset(problem, params)?;
        Ok(colony)
    }
    /// Loads a problem instance and rebuilds trails, ants and counters from
    /// scratch. The random stream restarts too, so two resets with equal
    /// inputs leave the colony in equal states.
    pub fn reset(&mut self, problem: impl Into<ProblemEnum>, params: Parameters) -> Result<()> {
        let problem = problem.into();
        params.validate()?;
        let n = problem.node_count();
        if n < 2 {
            return Err(Error::TooFewNodes(n));
        }
        self.rng = ChaChaRng::seed_from_u64(self.seed);
        let pheromone = PheromoneMatrix::new(n, problem.edges(),
                                             params.initial_pheromone, params.min_pheromone);
        let rng = &mut self.rng;
        let ants = (0..params.num_ants)
            .map(|_| Ant::new(n, problem.start(rng)))
            .collect();
        self.instance = Some(Instance { problem, params, pheromone, ants });
        self.tracker.clear();
        self.iteration = 0;
        self.phase = Phase::Idle;
        debug!("colony reset with {} nodes", n);
        Ok(())
    }
    pub fn start(&mut self) -> Result<()> {
        if self.instance.is_none() {
            return Err(Error::NoInstance);
        }
        self.phase = Phase::Running;
        Ok(())
    }
    pub fn stop(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Stopped;
        }
    }
    /// Advances every walking ant by one hop. Once none is walking, the
    /// cycle completes within the same tick.
    pub fn step(&mut self) -> Result<Step> {
        if self.phase != Phase::Running {
            return Err(Error::NotRunning(self.phase));
        }
        let instance = self.instance.as_mut().ok_or(Error::NoInstance)?;
        let Instance { problem, params, pheromone, ants } = instance;
        for ant in ants.iter_mut().filter(|ant| ant.is_walking()) {
            advance(ant, problem, pheromone, params, &mut self.rng, &mut self.hops);
        }
        let cycle = if ants.iter().any(Ant::is_walking) {
            None
        } else {
            self.iteration += 1;
            Some(complete_cycle(instance, &mut self.tracker, self.iteration, &mut self.rng))
        };
        Ok(Step { state: self.run_state(), cycle })
    }
    /// Runs until `iterations` more cycles have completed.
    pub fn run(&mut self, iterations: usize) -> Result<Option<&BestSolution>> {
        if self.phase != Phase::Running {
            self.start()?;
        }
        let target = self.iteration + iterations;
        while self.iteration < target {
            self.step()?;
        }
        Ok(self.tracker.best())
    }
    pub fn best_solution(&self) -> Option<&BestSolution> {
        self.tracker.best()
    }
    pub fn pheromone_snapshot(&self) -> Option<&PheromoneMatrix> {
        self.instance.as_ref().map(|instance| &instance.pheromone)
    }
    pub fn run_state(&self) -> RunState {
        RunState {
            iteration: self.iteration,
            is_active: self.phase == Phase::Running,
        }
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn problem(&self) -> Option<&ProblemEnum> {
        self.instance.as_ref().map(|instance| &instance.problem)
    }
    pub fn ants(&self) -> &[Ant] {
        match &self.instance {
            Some(instance) => &instance.ants,
            None => &[],
        }
    }
}

/// Evaporates, deposits, records the best and respawns, strictly in that order.
fn complete_cycle(instance: &mut Instance, tracker: &mut Tracker, iteration: usize, rng: &mut ChaChaRng) -> Cycle {
    let Instance { problem, params, pheromone, ants } = instance;
    pheromone.evaporate(params.evaporation_rate);

    let mut skipped_deposits = 0;
    let symmetric = problem.symmetric();
    for ant in ants.iter_mut().filter(|ant| ant.is_complete()) {
        let closing = problem.closing_cost(ant);
        if let Some(cost) = closing {
            ant.cost += cost;
        }
        if ant.cost.is_finite() && ant.cost > 0.0 {
            pheromone.deposit(&ant.path, params.q / ant.cost, closing.is_some(), symmetric);
        } else {
            warn!("skip deposit for degenerate path {:?} with cost {}", ant.path, ant.cost);
            skipped_deposits += 1;
        }
    }

    let mut improved = false;
    for ant in ants.iter().filter(|ant| ant.is_complete()) {
        improved |= tracker.offer(&ant.path, ant.cost, iteration);
    }
    let completed = ants.iter().filter(|ant| ant.is_complete()).count();
    let stuck = ants.iter().filter(|ant| ant.walk == Walk::Stuck).count();
    let iteration_best = ants.iter()
        .filter(|ant| ant.is_complete())
        .map(|ant| OrderedFloat(ant.cost))
        .min()
        .map(OrderedFloat::into_inner);

    if completed == 0 {
        warn!("cycle #{} found no path, all {} ants stuck", iteration, stuck);
    }
    if improved {
        info!("cycle #{} improved best cost to {:.4}", iteration, tracker.cost());
    }
    debug!("cycle #{}: {} completed, {} stuck, iteration best {:?}, global best {:.4}",
           iteration, completed, stuck, iteration_best, tracker.cost());

    for ant in ants.iter_mut() {
        ant.respawn(problem.start(rng));
    }

    Cycle {
        iteration,
        completed,
        stuck,
        skipped_deposits,
        iteration_best,
        improved,
        best: tracker.best().cloned(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{Routing, Tour};
    use crate::component::{Channel, Point};
    use crate::network::Network;

    fn square() -> Tour {
        let points = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        Tour::new(points.into_iter().map(Point::from).collect()).unwrap()
    }

    fn params() -> Parameters {
        Parameters {
            num_ants: 10,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.5,
            q: 100.0,
            ..Parameters::default()
        }
    }

    #[test]
    fn it_refuses_to_step_before_start() {
        let mut colony = Colony::new(0);
        assert!(matches!(colony.step(), Err(Error::NotRunning(Phase::Idle))));
        assert!(matches!(colony.start(), Err(Error::NoInstance)));
        assert!(colony.best_solution().is_none());
        assert!(colony.pheromone_snapshot().is_none());
        assert!(colony.ants().is_empty());
    }

    #[test]
    fn it_rejects_invalid_parameters() {
        let mut colony = Colony::new(0);
        let bad = Parameters { evaporation_rate: -0.1, ..params() };
        assert!(colony.reset(square(), bad).is_err());
        assert!(colony.problem().is_none());
    }

    #[test]
    fn it_completes_cycle_after_n_minus_one_hops() {
        let mut colony = Colony::with_problem(square(), params(), 7).unwrap();
        colony.start().unwrap();
        for _ in 0..2 {
            let step = colony.step().unwrap();
            assert!(step.cycle.is_none());
            assert_eq!(step.state, RunState { iteration: 0, is_active: true });
        }
        let step = colony.step().unwrap();
        let cycle = step.cycle.expect("third hop should complete the tour");
        assert_eq!(cycle.iteration, 1);
        assert_eq!(cycle.completed, 10);
        assert_eq!(cycle.stuck, 0);
        assert!(cycle.improved);
        let best = cycle.best.unwrap();
        assert_eq!(best.path.len(), 4);
        assert_eq!(best.found_at, 1);
        assert!(colony.ants().iter().all(|ant| ant.path.len() == 1));
    }

    #[test]
    fn it_starts_from_reset_state() {
        let mut colony = Colony::with_problem(square(), params(), 7).unwrap();
        let pheromone = colony.pheromone_snapshot().unwrap().clone();
        let starts: Vec<usize> = colony.ants().iter().map(Ant::start).collect();
        colony.start().unwrap();
        assert_eq!(colony.phase(), Phase::Running);
        assert_eq!(colony.pheromone_snapshot().unwrap(), &pheromone);
        assert_eq!(colony.ants().iter().map(Ant::start).collect::<Vec<_>>(), starts);
        assert!(colony.pheromone_snapshot().unwrap().rows().flatten()
            .filter(|&&t| t > 0.0)
            .all(|&t| t == 1.0));
    }

    #[test]
    fn it_pauses_and_resumes() {
        let mut colony = Colony::with_problem(square(), params(), 7).unwrap();
        colony.run(3).unwrap();
        colony.stop();
        assert_eq!(colony.phase(), Phase::Stopped);
        assert!(!colony.run_state().is_active);
        assert!(colony.step().is_err());
        let before = colony.pheromone_snapshot().unwrap().clone();
        assert_eq!(colony.run_state().iteration, 3);
        colony.start().unwrap();
        assert_eq!(colony.pheromone_snapshot().unwrap(), &before);
        colony.run(2).unwrap();
        assert_eq!(colony.run_state().iteration, 5);
    }

    #[test]
    fn it_resets_identically() {
        let mut colony = Colony::with_problem(square(), params(), 11).unwrap();
        let first = colony.pheromone_snapshot().unwrap().clone();
        let starts: Vec<usize> = colony.ants().iter().map(Ant::start).collect();
        colony.run(4).unwrap();
        colony.reset(square(), params()).unwrap();
        assert_eq!(colony.pheromone_snapshot().unwrap(), &first);
        assert_eq!(colony.ants().iter().map(Ant::start).collect::<Vec<_>>(), starts);
        assert_eq!(colony.run_state(), RunState::default());
        assert!(colony.best_solution().is_none());
        assert_eq!(colony.phase(), Phase::Idle);
    }

    #[test]
    fn it_never_raises_best_cost() {
        let points = (0..8)
            .map(|i| Point::new((i * 37 % 11) as f64, (i * 53 % 13) as f64))
            .collect();
        let mut colony = Colony::with_problem(Tour::new(points).unwrap(), params(), 5).unwrap();
        colony.start().unwrap();
        let mut last = f64::INFINITY;
        while colony.run_state().iteration < 30 {
            if let Some(cycle) = colony.step().unwrap().cycle {
                let best = cycle.best.unwrap().cost;
                assert!(best <= last);
                assert!(cycle.iteration_best.unwrap() >= best);
                last = best;
            }
        }
    }

    #[test]
    fn it_skips_deposit_on_zero_cost_tour() {
        let points = vec![Point::new(1.0, 1.0); 3];
        let mut colony = Colony::with_problem(Tour::new(points).unwrap(), params(), 0).unwrap();
        colony.start().unwrap();
        let cycle = loop {
            if let Some(cycle) = colony.step().unwrap().cycle {
                break cycle;
            }
        };
        assert_eq!(cycle.skipped_deposits, 10);
        assert_eq!(cycle.best.unwrap().cost, 0.0);
        let snapshot = colony.pheromone_snapshot().unwrap();
        assert_eq!(snapshot.get(0, 1), 0.5);
    }

    #[test]
    fn it_reports_stuck_ants() {
        let mut network = Network::new();
        network.add_channel("A", "B", Channel::new(10.0, 1.0, 0.0));
        network.add_channel("C", "D", Channel::new(10.0, 1.0, 0.0));
        let routing = Routing::new(network, "A", "D", 1.0).unwrap();
        let mut colony = Colony::with_problem(routing, params(), 0).unwrap();
        colony.start().unwrap();
        let mut steps = 0;
        let cycle = loop {
            steps += 1;
            if let Some(cycle) = colony.step().unwrap().cycle {
                break cycle;
            }
        };
        assert_eq!(steps, 2);
        assert_eq!(cycle.stuck, 10);
        assert_eq!(cycle.completed, 0);
        assert_eq!(cycle.iteration_best, None);
        assert!(cycle.best.is_none());
        assert_eq!(colony.pheromone_snapshot().unwrap().get(0, 1), 0.5);
    }
}
