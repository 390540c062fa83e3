//! Interactive CLI: reads MSE input line by line, re-parsing the
//! accumulated buffer after every line until a model matches.

use std::io::{self, BufRead, Write};

use clap::Parser;
use famix_mse::{kind_histogram, render_bar_chart, Entity, Session, SAMPLE_MODEL};

#[derive(Parser, Debug)]
#[command(
    name = "famix-mse",
    version,
    about = "Parse FAMIX MSE model input, line by line"
)]
struct Cli {
    /// Emit parsed entities as JSON instead of the debug rendering
    #[arg(long)]
    json: bool,

    /// Print a kind-frequency bar chart after each successful parse
    #[arg(long)]
    chart: bool,
}

fn show_welcome() {
    println!("---Welcome---\n");
    println!("Please input a FAMIX string (spaces are significant).");
    println!("Type `help` for more information.\n");
}

fn show_help() {
    println!("---Help---\n");
    println!("Type `reset` to discard the current input, `:q` to quit,");
    println!("`example` to load an example model.\n");
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    show_welcome();

    let stdin = io::stdin();
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim().to_uppercase().as_str() {
            ":Q" => return Ok(()),
            "HELP" => {
                show_help();
                continue;
            }
            "RESET" => {
                session.reset();
                println!("---Reset---");
                continue;
            }
            "EXAMPLE" => {
                println!("---Example---\n{SAMPLE_MODEL}\n-------------");
                session.load(SAMPLE_MODEL);
            }
            _ => {
                session.push_line(&line);
            }
        }

        if !session.results().is_empty() {
            let rest = session.rest().to_string();
            let entities = session.take_results();
            report(&cli, &entities, &rest)?;
            show_welcome();
        }
    }

    Ok(())
}

fn report(cli: &Cli, entities: &[Entity], rest: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();

    if cli.json {
        serde_json::to_writer_pretty(&mut out, entities)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Parsed:")?;
        for entity in entities {
            writeln!(out, " {entity}")?;
        }
    }
    writeln!(out, "Rest:\n{rest}")?;

    if cli.chart {
        write!(out, "{}", render_bar_chart(&kind_histogram(entities)))?;
    }
    Ok(())
}
