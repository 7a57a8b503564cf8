use ant_trail::algorithm::ProblemEnum;
use ant_trail::colony::Colony;
use ant_trail::utils::config::Arguments;
use ant_trail::utils::error::Result;
use ant_trail::utils::yaml;
use log::info;
use std::error::Error;
use std::process;
use std::time::Instant;

fn main() {
    env_logger::init();
    let args: Arguments = argh::from_env();
    if let Err(err) = run(args) {
        let mut msg = format!("error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            msg.push_str(&format!(": {}", cause));
            source = cause.source();
        }
        eprintln!("{}", msg);
        process::exit(1);
    }
}

fn run(args: Arguments) -> Result<()> {
    let mut config = yaml::load_config(&args.config)?;
    config.override_from_args(&args);
    let problem = yaml::load_problem(&args.problem)?;
    info!("loaded {} with config `{}`", args.problem, config.name);

    let mut colony = Colony::new(config.seed);
    colony.reset(problem, config.parameters.clone())?;
    colony.start()?;

    let start = Instant::now();
    while colony.run_state().iteration < config.iterations {
        if let Some(cycle) = colony.step()?.cycle {
            info!("iteration {}/{}, best cost found: {:.4}", cycle.iteration, config.iterations,
                  cycle.best.map_or(f64::INFINITY, |best| best.cost));
        }
    }
    let elapsed = start.elapsed().as_micros();
    colony.stop();

    show_results(&colony);
    println!("--- computing time: {} μs ---", elapsed);
    Ok(())
}

fn show_results(colony: &Colony) {
    let best = match colony.best_solution() {
        Some(best) => best,
        None => {
            println!("no path found");
            return;
        }
    };
    let route = match colony.problem() {
        Some(ProblemEnum::Routing(routing)) => routing.network()
            .node_sequence(&best.path)
            .join(" -> "),
        _ => best.path.iter()
            .map(|node| node.to_string())
            .collect::<Vec<_>>()
            .join(" -> "),
    };
    println!("best path: {}", route);
    println!("total cost: {:.4}, found at iteration #{}", best.cost, best.found_at);
}
