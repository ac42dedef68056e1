use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use ota_dict::{
    ConsoleText, DictionaryStore, LineEnding, LoadOptions, Main, Multi, Sentence, Tokenizer,
    Variant,
};

#[derive(Parser)]
#[command(name = "ota-dict", version, about = "Inspect and edit .ota vocabulary dictionaries")]
struct Cli {
    /// Dictionary variant of the file
    #[arg(long, value_enum, default_value_t = VariantArg::Multi)]
    variant: VariantArg,

    /// Skip malformed records instead of failing the load
    #[arg(long)]
    skip_malformed: bool,

    /// Write CRLF line endings instead of the platform default
    #[arg(long)]
    crlf: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Multi,
    Main,
    Sentence,
}

#[derive(Subcommand)]
enum Command {
    /// Print every record in word order
    List { file: PathBuf },
    /// Print the meanings of one word
    Get { file: PathBuf, word: String },
    /// Insert or replace a word and save the file
    Put {
        file: PathBuf,
        word: String,
        #[arg(required = true)]
        meanings: Vec<String>,
    },
    /// Remove a word and save the file
    Remove { file: PathBuf, word: String },
    /// Tokenize standard input with the console character set
    Tokens,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.variant {
        VariantArg::Multi => run::<Multi>(&cli),
        VariantArg::Main => run::<Main>(&cli),
        VariantArg::Sentence => run::<Sentence>(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run<V: Variant>(cli: &Cli) -> ota_dict::Result<()> {
    let options = if cli.skip_malformed {
        LoadOptions::skip_malformed()
    } else {
        LoadOptions::default()
    };
    let ending = if cli.crlf {
        LineEnding::CrLf
    } else {
        LineEnding::native()
    };

    match &cli.command {
        Command::List { file } => {
            let store = DictionaryStore::<V>::open(file, options)?;
            println!("{}", "=".repeat(60));
            for (word, meanings) in store.iter() {
                println!("{}: {}", word, meanings.join("; "));
            }
            println!("{}", "=".repeat(60));
            println!("Total words: {}", store.len());
        }
        Command::Get { file, word } => {
            let store = DictionaryStore::<V>::open(file, options)?;
            match store.get(word) {
                Some(meanings) => {
                    for (i, meaning) in meanings.iter().enumerate() {
                        println!("  {}. {}", i + 1, meaning);
                    }
                }
                None => println!("Not found '{}' in dictionary", word),
            }
        }
        Command::Put {
            file,
            word,
            meanings,
        } => {
            let mut store = DictionaryStore::<V>::open(file, options)?;
            match store.put(word.as_str(), meanings.clone())? {
                Some(previous) => println!("Replaced '{}' (was: {})", word, previous.join("; ")),
                None => println!("Added '{}'", word),
            }
            store.save_to_path(file, ending)?;
        }
        Command::Remove { file, word } => {
            let mut store = DictionaryStore::<V>::open(file, options)?;
            if store.remove(word).is_some() {
                store.save_to_path(file, ending)?;
                println!("Removed '{}'", word);
            } else {
                println!("Not found '{}' in dictionary", word);
            }
        }
        Command::Tokens => {
            let tokens: Tokenizer<_, ConsoleText> = Tokenizer::new(io::stdin().lock());
            for token in tokens {
                let token = token?;
                let kind = if token.is_line_break() { "break" } else { "word" };
                println!("{:<6}{}", kind, token);
            }
        }
    }
    Ok(())
}
