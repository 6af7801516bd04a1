use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use engine::{command::HELP, parse_command, Command, Game, GameConfig};
use log;
use persistence::SnapshotConfig;

#[derive(Parser, Debug)]
struct Params {
    /// Snapshot file used by `save` and `load` without a path
    #[arg(short, long)]
    snapshot: Option<String>,

    /// YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the computer's moves
    #[arg(long)]
    seed: Option<u64>,

    /// History entries shown after each round
    #[arg(short, long)]
    recent: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Params::parse();
    log::info!("args: {args:?}");

    let config = match &args.config {
        Some(path) => GameConfig::from_yaml_file(path).unwrap_or_else(|err| {
            log::error!("{err}, using defaults");
            GameConfig::default()
        }),
        None => GameConfig::default(),
    };
    let snapshot = SnapshotConfig::from_cli_or_env_or_yaml(args.snapshot, config.snapshot_path);
    let recent = args.recent.unwrap_or(config.recent_entries);
    log::info!("snapshot: {}, recent: {recent}", snapshot.path.display());

    let mut game = Game::with_random_opponent(args.seed.or(config.seed));
    println!("Welcome to Rock Paper Scissors!\n{HELP}\n");
    println!("{}", game.display(recent));

    let mut buf = String::new();
    loop {
        print!("Your move? >> ");
        let _ = io::stdout().flush();
        buf.clear();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                log::error!("Error reading line from stdin: {err}");
                break;
            }
        }
        if buf.trim().is_empty() {
            continue;
        }

        match parse_command(&buf) {
            Ok(Command::Quit) => break,
            Ok(command) => run_command(&mut game, command, &snapshot.path, recent),
            Err(err) => {
                log::debug!("Error parsing command: {err}");
                println!("{err}");
            }
        }
    }
}

fn run_command(game: &mut Game, command: Command, default_path: &Path, recent: usize) {
    match command {
        Command::Play(choice) => {
            game.select_move(choice);
        }
        Command::Reset => game.reset(),
        Command::Save(path) => {
            let path = path.map(PathBuf::from).unwrap_or_else(|| default_path.to_path_buf());
            game.export_snapshot(path);
        }
        Command::Load(path) => {
            let path = path.map(PathBuf::from).unwrap_or_else(|| default_path.to_path_buf());
            game.import_snapshot(path);
        }
        Command::Stats => {
            println!("{}\n", game.display(recent).stats_report());
            return;
        }
        Command::History(limit) => {
            for line in game.history_lines(limit) {
                println!("{line}");
            }
            println!();
            return;
        }
        Command::Help => {
            println!("{HELP}\n");
            return;
        }
        Command::Quit => return,
    }
    println!("{}\n", game.display(recent));
}
