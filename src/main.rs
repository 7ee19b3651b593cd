use std::io;
use std::process::ExitCode;

use word_session::cli::{self, Cli, CliInterface, Command, PoorCommand, WordsCommand};
use word_session::{FileStore, GameSession, WordPoolStore, debug_log, logging, session_loop};

fn main() -> ExitCode {
    let cli = cli::parse_cli();
    logging::init(cli.verbose);

    let store = match open_store(&cli) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open word storage: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug_log!("Using word storage in {}", store.dir().display());

    match cli.command.unwrap_or(Command::Play { json: false }) {
        Command::Play { json } => {
            let mut session = GameSession::new(store);
            println!("{} words in the pool.", session.pool().get_words().len());
            let mut interface = CliInterface::new(io::stdin().lock()).with_json(json);
            session_loop(&mut session, &mut interface);
        }
        Command::Words(command) => run_words(WordPoolStore::new(store), command),
        Command::Poor(command) => run_poor(WordPoolStore::new(store), command),
    }
    ExitCode::SUCCESS
}

fn open_store(cli: &Cli) -> Result<FileStore, word_session::StorageError> {
    match &cli.store_dir {
        Some(dir) => FileStore::open(dir),
        None => FileStore::open_default(),
    }
}

fn run_words(mut pool: WordPoolStore<FileStore>, command: WordsCommand) {
    match command {
        WordsCommand::List => cli::display_words(&pool.get_words()),
        WordsCommand::Set { words } => {
            pool.save_words(&words);
            println!("Pool now holds {} words.", pool.get_words().len());
        }
        WordsCommand::Remove { words } => {
            pool.remove_words(&words);
            println!("Pool now holds {} words.", pool.get_words().len());
        }
        WordsCommand::Clear => {
            pool.clear_words();
            println!("Pool cleared.");
        }
    }
}

fn run_poor(mut pool: WordPoolStore<FileStore>, command: PoorCommand) {
    match command {
        PoorCommand::List => cli::display_words(&pool.get_poor_words()),
        PoorCommand::Add { words } => {
            pool.save_poor_words(&words);
            println!("{} poor words recorded.", pool.get_poor_words().len());
        }
        PoorCommand::Clear => {
            pool.clear_poor_words();
            println!("Poor words cleared.");
        }
    }
}
