
use std::time::Instant;

use xshell::{cmd, Shell};

fn main() -> xshell::Result<()> {
    let sh = Shell::new()?;
    let _e = sh.push_env("RUSTUP_TOOLCHAIN", "stable");
    cmd!(sh, "rustc --version").run()?;

    {
        let _s = Section::start("TEST");
        cmd!(sh, "cargo test --workspace -- --nocapture").run()?;
    }

    {
        let _s = Section::start("DEMO");
        cmd!(sh, "cargo run --example simulation -- --iterations=3 --seeds 1 2 3").run()?;
        cmd!(sh, "cargo run --example simulation -- --help").run()?;
    }

    Ok(())
}

/// GitHub Actions log group, closed with its timing when dropped.
struct Section {
    name: &'static str,
    start: Instant,
}

impl Section {
    fn start(name: &'static str) -> Section {
        println!("::group::{name}");
        Section { name, start: Instant::now() }
    }
}

impl Drop for Section {
    fn drop(&mut self) {
        eprintln!("{}: {:.2?}", self.name, self.start.elapsed());
        println!("::endgroup::");
    }
}
