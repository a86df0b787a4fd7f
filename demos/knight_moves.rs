//! Knight path demo: prints shortest knight paths between squares.
//!
//! Run: cargo run --bin knight-moves -- [--json] [X,Y X,Y ...]

use knight_demos::{Command, USAGE, parse_args, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let stdout = std::io::stdout();
    run(&config, &mut stdout.lock())?;
    Ok(())
}
