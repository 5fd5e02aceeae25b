use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use levdict::{
    check_distance, describe_dfa, edit_distance, load_corpus, match_batch, normalize_word,
    suggest, write_dfa_dot, write_nfa_dot, Corpus, CorpusOptions, LevenshteinAutomaton,
    SuggestConfig, Suggestion, Suggestions,
};

mod cli;
use cli::display::{self, BOLD, GRAY, GREEN, RED, YELLOW};
use cli::{AlphabetChoice, Cli, Commands, CorpusArgs};

/// JSON shape of one `match` query.
#[derive(Serialize)]
struct MatchReport {
    word: String,
    max_distance: usize,
    matches: Vec<Suggestion>,
}

/// JSON shape of one `suggest` query.
#[derive(Serialize)]
struct SuggestReport {
    word: String,
    result: Suggestions,
}

#[derive(Serialize)]
struct InspectReport {
    word: String,
    max_distance: usize,
    nfa_states: usize,
    nfa_edges: usize,
    dfa_states: usize,
    dfa_transitions: usize,
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        display::disable_colors();
    }
    if let Err(e) = levdict::logging::init(cli.log_level.as_deref(), cli.no_color) {
        eprintln!("{}: invalid --log-level: {}", display::themed(RED, &[BOLD], "error"), e);
        process::exit(2);
    }

    if let Err(e) = run(cli) {
        eprintln!("{}: {:#}", display::themed(RED, &[BOLD], "error"), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    match cli.command {
        Commands::Match {
            corpus,
            words,
            distance,
        } => run_match(&corpus, &words, distance, json),
        Commands::Suggest {
            corpus,
            words,
            max_distance,
        } => run_suggest(&corpus, &words, max_distance, json),
        Commands::Interactive {
            corpus,
            max_distance,
        } => run_interactive(&corpus, max_distance, json),
        Commands::Dot {
            word,
            distance,
            nfa,
            output,
        } => {
            let distance = check_distance(distance)?;
            let automaton = LevenshteinAutomaton::new(&word, distance);
            let mut out: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("cannot create {}", path.display()))?,
                )),
                None => Box::new(io::stdout().lock()),
            };
            if nfa {
                write_nfa_dot(automaton.nfa(), &mut out)?;
            } else {
                write_dfa_dot(automaton.dfa(), &mut out)?;
            }
            out.flush()?;
            Ok(())
        }
        Commands::Inspect {
            word,
            distance,
            alphabet,
        } => run_inspect(&word, distance, alphabet, json),
    }
}

fn open_corpus(args: &CorpusArgs) -> Result<(Corpus, CorpusOptions)> {
    let options = args.options();
    let corpus = load_corpus(&args.corpus, &options)?;
    if !corpus.rejected.is_empty() {
        eprintln!(
            "{} {} corpus line(s) skipped",
            display::themed(YELLOW, &[BOLD], "note:"),
            corpus.rejected.len()
        );
    }
    Ok((corpus, options))
}

fn prepare(word: &str, options: &CorpusOptions) -> String {
    if options.normalize {
        normalize_word(word)
    } else {
        word.to_string()
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn run_match(args: &CorpusArgs, words: &[String], distance: usize, json: bool) -> Result<()> {
    let distance = check_distance(distance)?;
    let (corpus, options) = open_corpus(args)?;

    let queries: Vec<(String, usize)> = words
        .iter()
        .map(|w| (prepare(w, &options), distance))
        .collect();
    let results = match_batch(&queries, &corpus.dictionary);

    let reports: Vec<MatchReport> = queries
        .into_iter()
        .zip(results)
        .map(|((word, max_distance), found)| {
            let query: Vec<char> = word.chars().collect();
            let matches = found
                .into_iter()
                .map(|m| {
                    let candidate: Vec<char> = m.chars().collect();
                    Suggestion {
                        distance: edit_distance(&query, &candidate),
                        word: m,
                    }
                })
                .collect();
            MatchReport {
                word,
                max_distance,
                matches,
            }
        })
        .collect();

    if json {
        return print_json(&reports);
    }
    for report in &reports {
        println!(
            "{} (k = {}): {} match(es)",
            display::query(&report.word),
            report.max_distance,
            report.matches.len()
        );
        for m in &report.matches {
            println!("  {} {}", display::distance_badge(m.distance), m.word);
        }
    }
    Ok(())
}

fn print_suggestions(word: &str, result: &Suggestions) {
    match result {
        Suggestions::Exact { .. } => {
            println!(
                "{} {} is a valid word",
                display::themed(GREEN, &[BOLD], "✓"),
                display::query(word)
            );
        }
        Suggestions::Close {
            distance_bound,
            matches,
        } => {
            println!(
                "{} not found; did you mean (within {}):",
                display::query(word),
                distance_bound
            );
            for m in matches {
                println!("  {} {}", display::distance_badge(m.distance), m.word);
            }
        }
        Suggestions::None { max_distance } => {
            println!(
                "{} {} no words within distance {}",
                display::themed(RED, &[BOLD], "✗"),
                display::query(word),
                max_distance
            );
        }
    }
}

fn run_suggest(args: &CorpusArgs, words: &[String], max_distance: usize, json: bool) -> Result<()> {
    let (corpus, options) = open_corpus(args)?;
    let config = SuggestConfig {
        alphabet: options.alphabet,
        ..SuggestConfig::with_max_distance(max_distance)?
    };

    let mut reports = Vec::with_capacity(words.len());
    for word in words {
        let word = prepare(word, &options);
        let result = suggest(&word, &corpus.dictionary, &config);
        if !json {
            print_suggestions(&word, &result);
        }
        reports.push(SuggestReport { word, result });
    }

    if json {
        print_json(&reports)?;
    }
    Ok(())
}

fn run_interactive(args: &CorpusArgs, max_distance: usize, json: bool) -> Result<()> {
    let (corpus, options) = open_corpus(args)?;
    let config = SuggestConfig {
        alphabet: options.alphabet,
        ..SuggestConfig::with_max_distance(max_distance)?
    };

    if !json {
        println!(
            "Loaded {} words. Type a word and press enter; Ctrl-D to quit.",
            corpus.dictionary.len()
        );
    }

    let stdin = io::stdin();
    loop {
        if !json {
            print!("{} ", display::themed(GRAY, &[], ">"));
            io::stdout().flush()?;
        }
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let Some(word) = line.split_whitespace().next() else {
            continue;
        };
        let word = prepare(word, &options);
        let result = suggest(&word, &corpus.dictionary, &config);
        if json {
            serde_json::to_writer(io::stdout().lock(), &SuggestReport { word, result })?;
            println!();
        } else {
            print_suggestions(&word, &result);
        }
    }
    Ok(())
}

fn run_inspect(word: &str, distance: usize, alphabet: AlphabetChoice, json: bool) -> Result<()> {
    let distance = check_distance(distance)?;
    let query: Vec<char> = word.chars().collect();
    let automaton = LevenshteinAutomaton::with_alphabet(&query, distance, alphabet.range());
    let nfa = automaton.nfa();
    let dfa = automaton.dfa();

    let report = InspectReport {
        word: word.to_string(),
        max_distance: distance,
        nfa_states: nfa.states().len(),
        nfa_edges: nfa.edges().len(),
        dfa_states: dfa.state_count(),
        dfa_transitions: dfa.transition_count(),
    };
    if json {
        return print_json(&report);
    }

    display::section_top("AUTOMATON");
    display::row(&format!(" query            {}", display::query(word)));
    display::row(&format!(" distance bound   {}", distance));
    display::row(&format!(" nfa states       {}", report.nfa_states));
    display::row(&format!(" nfa edges        {}", report.nfa_edges));
    display::row(&format!(" dfa states       {}", report.dfa_states));
    display::row(&format!(" dfa transitions  {}", report.dfa_transitions));
    display::section_bot();

    println!();
    print!("{}", describe_dfa(dfa));

    match automaton.successor(&[]) {
        Some(first) => {
            let first: String = first.iter().collect();
            println!(
                "\n{} {:?}",
                display::pad_right("smallest accepted string:", 28),
                first
            );
        }
        None => println!("\nautomaton accepts nothing over this alphabet"),
    }
    Ok(())
}
