use clap::Parser;
use hbnb_console::console::{Console, Control};
use hbnb_console::error::Result;
use hbnb_console::store::fs::FileStore;
use hbnb_console::store::ObjectStore;
use std::io::{self, Write};
use std::path::PathBuf;

mod args;
use args::Cli;

const PROMPT: &str = "(hbnb) ";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = cli.file.unwrap_or_else(|| PathBuf::from("file.json"));
    let mut store = FileStore::new(path);
    store.reload()?;

    let interactive = console::user_attended();
    let mut shell = Console::new(store);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    // piped mode gets a banner instead of prompts, plus a marker after
    // every line, so transcripts stay diffable
    if !interactive {
        println!("{}", PROMPT.trim_end());
    }

    loop {
        if interactive {
            print!("{}", PROMPT);
            stdout.flush()?;
        }
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            // end of input behaves like EOF: newline, then stop
            println!();
            break;
        }
        let (control, output) = shell.handle_line(line.trim_end_matches(['\r', '\n']));
        for text in output.lines() {
            println!("{}", text);
        }
        if control == Control::Quit {
            break;
        }
        if !interactive {
            print!("{}", PROMPT);
            stdout.flush()?;
        }
    }
    Ok(())
}
