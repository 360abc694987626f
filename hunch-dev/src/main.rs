use std::io::{self, BufRead, Write};

use hunch_core::Direction;
use hunch_engine::{Config, Engine};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
commands:
  from <expr>   edit the lower bound (e.g. `from 30%`)
  to <expr>     edit the upper bound (e.g. `to 2^10`)
  lower | l     the candidate is too high
  higher | h    the candidate is too low
  undo | u      revert the last feedback step
  json          print the current state as JSON
  help          show this help
  quit | q      exit
";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::default();
    let mut lower_text = config.initial_lower.clone();
    let mut upper_text = config.initial_upper.clone();
    let mut engine = Engine::new(&config);

    println!("hunch: pin down a number by answering too low / too high");
    print_view(&engine);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => print_view(&engine),
            "from" => {
                lower_text = rest.to_string();
                engine.reseed(&lower_text, &upper_text);
                print_view(&engine);
            }
            "to" => {
                upper_text = rest.to_string();
                engine.reseed(&lower_text, &upper_text);
                print_view(&engine);
            }
            "lower" | "l" => feedback(&mut engine, Direction::Lower),
            "higher" | "h" => feedback(&mut engine, Direction::Higher),
            "undo" | "u" => {
                if engine.undo() {
                    print_view(&engine);
                } else {
                    println!("nothing to undo");
                }
            }
            "json" => {
                let json =
                    serde_json::to_string_pretty(&engine.view()).expect("view serializes");
                println!("{json}");
            }
            "help" => print!("{HELP}"),
            "quit" | "q" | "exit" => break,
            _ => println!("unrecognized command '{command}' (try `help`)"),
        }
    }

    Ok(())
}

/// Applies feedback unless the engine says the step could not move a bound,
/// the way the original interface greys out its buttons.
fn feedback(engine: &mut Engine, dir: Direction) {
    if !engine.can_narrow(dir) {
        let way = match dir {
            Direction::Lower => "down",
            Direction::Higher => "up",
        };
        println!("cannot narrow {way} from here");
        return;
    }
    engine.apply_feedback(dir);
    print_view(engine);
}

fn print_view(engine: &Engine) {
    let view = engine.view();
    println!(
        "[{} .. {}]  candidate {}  (undo {})",
        view.lower, view.upper, view.candidate, view.undo_depth
    );
    if !view.message.is_empty() {
        println!("{}", view.message);
    }
}
