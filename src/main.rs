use std::process::exit;

use docopt::Docopt;
use failure::Error;
use itertools::Itertools;
use log::*;
use serde_derive::Deserialize;

use sequences::{min_greater_number, AnagramDict};

mod input;

use crate::input::Sequence;

const USAGE: &str = "
Sequence algorithms.

Usage:
    algos window [--last] [--numbers] <sequence>
    algos next [--all] [--numbers] <sequence>
    algos number <value>
    algos anagrams <word> <dictionary>...
    algos (-h | --help)

Options:
    -h --help   Show this screen.
    --numbers   Read the sequence as a list of integers instead of characters.
    --last      Report the last of the shortest windows instead of the first.
    --all       Keep going until the greatest arrangement is reached.
";

#[derive(Debug, Deserialize)]
struct Args {
    cmd_window: bool,
    cmd_next: bool,
    cmd_number: bool,
    cmd_anagrams: bool,
    flag_last: bool,
    flag_numbers: bool,
    flag_all: bool,
    arg_sequence: String,
    arg_value: String,
    arg_word: String,
    arg_dictionary: Vec<String>,
}

fn main() {
    pretty_env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args: Args = Docopt::new(USAGE)
        .and_then(|dopt| dopt.deserialize())
        .unwrap_or_else(|e| e.exit());
    debug!("{:?}", args);

    if args.cmd_window {
        window(&args)
    } else if args.cmd_next {
        next(&args)
    } else if args.cmd_number {
        number(&args)
    } else if args.cmd_anagrams {
        anagrams(&args)
    } else {
        Ok(())
    }
}

fn window(args: &Args) -> Result<(), Error> {
    let sequence = Sequence::parse(&args.arg_sequence, args.flag_numbers)?;
    let window = sequence.min_window(args.flag_last);

    if window.is_empty() {
        println!("<not found>");
    } else {
        println!(
            "window length: {}, index range: [{},{}), window: {}",
            window.len(),
            window.start(),
            window.end(),
            sequence.excerpt(window.range())
        );
    }
    Ok(())
}

fn next(args: &Args) -> Result<(), Error> {
    let mut sequence = Sequence::parse(&args.arg_sequence, args.flag_numbers)?;

    if !sequence.next_greater() {
        println!("no greater sequence");
        return Ok(());
    }
    println!("{}", sequence);

    if args.flag_all {
        let mut steps = 1;
        while sequence.next_greater() {
            println!("{}", sequence);
            steps += 1;
        }
        info!("{} greater sequences", steps);
    }
    Ok(())
}

fn number(args: &Args) -> Result<(), Error> {
    let value: u64 = args.arg_value.trim().parse()?;

    match min_greater_number(value) {
        Some(greater) => println!("{}", greater),
        None => println!("no greater number"),
    }
    Ok(())
}

fn anagrams(args: &Args) -> Result<(), Error> {
    let dict = AnagramDict::from_words(args.arg_dictionary.iter().map(String::as_str))?;
    debug!("Dictionary of {} words", dict.len());

    let found = dict.find_anagrams(&args.arg_word)?;
    if found.is_empty() {
        println!("no anagrams of {}", args.arg_word);
    } else {
        println!("{}", found.iter().join(" "));
    }
    Ok(())
}
