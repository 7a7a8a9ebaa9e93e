use spelling_bee_oracle::cli::{CliInterface, Command, describe_check, parse_cli};
use spelling_bee_oracle::error::{Result, read_input};
use spelling_bee_oracle::hints::{extract_letters, render_strategy, render_suggestions};
use spelling_bee_oracle::letters::LetterConfiguration;
use spelling_bee_oracle::logging::init_logging;
use spelling_bee_oracle::oracle::WordOracle;
use spelling_bee_oracle::session::play_round;
use spelling_bee_oracle::server;
use spelling_bee_oracle::vocabulary::WordSource;
use std::io::{self, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let source = WordSource::resolve(cli.words_path.as_deref());
    log::info!("Loading words from {source:?}");
    let vocabulary = match source.load() {
        Ok(vocabulary) => vocabulary,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Failed to load word list: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Loaded {} words", vocabulary.len());
    let oracle = WordOracle::new(vocabulary);

    match run(&oracle, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(oracle: &WordOracle, command: Command) -> Result<()> {
    match command {
        Command::Check {
            word,
            center,
            letters,
        } => {
            let config = letters.map(|letters| match center {
                Some(c) => LetterConfiguration::new(c, &letters),
                None => LetterConfiguration::without_center(&letters),
            });
            println!("{}", describe_check(oracle, &word, config.as_ref()));
        }
        Command::Find {
            letters,
            center,
            json,
        } => {
            let words: Vec<String> = match center {
                Some(c) => oracle
                    .all_valid_answers(&LetterConfiguration::new(c, &letters))
                    .into_iter()
                    .collect(),
                None => oracle.find_words(&letters),
            };
            if json {
                println!("{}", serde_json::to_string(&words)?);
            } else {
                for word in &words {
                    println!("{word}");
                }
            }
        }
        Command::Hint { file } => {
            let observation = match file {
                Some(path) => read_input(&path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            match extract_letters(&observation) {
                Some(letters) => {
                    let letters: String = letters.into_iter().collect();
                    println!("Allowed letters: {letters}");
                    let words = oracle.find_words(&letters);
                    println!("{}", render_strategy(&words));
                    println!("{}", render_suggestions(&words));
                }
                None => println!("No allowed letters found in the observation."),
            }
        }
        Command::Play { center, letters } => {
            let config = LetterConfiguration::new(center, &letters);
            let mut interface = CliInterface::new(io::stdin().lock());
            let summary = play_round(oracle, config, &mut interface);
            println!("Found {} of {} answers.", summary.found.len(), summary.total);
        }
        Command::Serve => {
            let stdin = io::stdin();
            server::run(oracle, stdin.lock(), io::stdout().lock())?;
        }
    }
    Ok(())
}
