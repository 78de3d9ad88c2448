use clap::Parser;
use sheet_dice::config::Config;
use sheet_dice::session::{Command, Session, HELP};
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let config = Config::parse();
    let character = config.load_character()?;
    let mut session = Session::new(character, config.rng());
    log::info!("session started for {}", session.character().name);

    println!("{}", session.sheet());
    println!("\n{}", HELP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(Ok(line)) = lines.next() {
        if !line.trim().is_empty() {
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => match session.execute(&command) {
                    Ok(out) => println!("{}", out),
                    Err(why) => eprintln!("Error: {}", why),
                },
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
