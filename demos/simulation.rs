use argbind::{Param, Parsed, Registry};

fn main() {
    if let Err(err) = run() {
        err.exit()
    }
}

fn run() -> argbind::Result<()> {
    let mut iterations = 0i32;
    let mut seeds: Vec<f32> = Vec::new();
    let mut name = String::new();
    let mut showhelp = false;

    let mut registry = Registry::new();
    registry.register(Param::new(
        &mut iterations,
        "--iterations",
        "The number of iterations to perform.",
    ))?;
    registry.register(
        Param::list(&mut seeds, 3, "--seeds", "The seeds to begin simulation.").required(false),
    )?;
    registry.register(
        Param::new(&mut name, "--name", "The name for this simulation run.")
            .default_value("simulation"),
    )?;
    registry.register(Param::help(&mut showhelp))?;

    let help = registry.render_help();
    if registry.parse_env()? == Parsed::Help {
        println!("{help}");
        return Ok(());
    }
    drop(registry);

    println!("{name}: {iterations} iterations, seeds {seeds:?}");
    Ok(())
}
