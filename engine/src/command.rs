use regex::{Captures, Regex};
use types::Move;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Reset,
    Save(Option<String>),
    Load(Option<String>),
    Stats,
    History(Option<usize>),
    Help,
    Quit,
}

pub const HELP: &str = "Commands: rock | paper | scissors (or r/p/s), reset, save [path], load [path], stats, history [n], help, quit";

pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();

    if let Some(play_result) = _get_command_from_regex(
        input,
        Regex::new(r"(?i)^(?:play\s+)?(?<choice>\S+)$").expect("Valid play regex"),
        play_command_from_captures,
    ) {
        return play_result;
    }

    if let Some(save_result) = _get_command_from_regex(
        input,
        Regex::new(r"(?i)^save(?:\s+(?<path>.+))?$").expect("Valid save regex"),
        save_command_from_captures,
    ) {
        return save_result;
    }

    if let Some(load_result) = _get_command_from_regex(
        input,
        Regex::new(r"(?i)^load(?:\s+(?<path>.+))?$").expect("Valid load regex"),
        load_command_from_captures,
    ) {
        return load_result;
    }

    if let Some(history_result) = _get_command_from_regex(
        input,
        Regex::new(r"(?i)^history(?:\s+(?<count>\S+))?$").expect("Valid history regex"),
        history_command_from_captures,
    ) {
        return history_result;
    }

    Err(format!("Unrecognized command: {input:?}. {HELP}"))
}

fn _get_command_from_regex(
    input: &str,
    re: Regex,
    callback: for<'a, 'b> fn(&'a Captures<'b>) -> Result<Command, String>,
) -> Option<Result<Command, String>> {
    let Some(caps) = re.captures(input) else {
        return None;
    };

    Some(callback(&caps))
}

fn play_command_from_captures(caps: &Captures) -> Result<Command, String> {
    let word = caps["choice"].to_lowercase();
    match word.as_str() {
        "reset" => Ok(Command::Reset),
        "save" => Ok(Command::Save(None)),
        "load" => Ok(Command::Load(None)),
        "stats" | "statistics" => Ok(Command::Stats),
        "history" => Ok(Command::History(None)),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "r" => Ok(Command::Play(Move::Rock)),
        "p" => Ok(Command::Play(Move::Paper)),
        "s" => Ok(Command::Play(Move::Scissors)),
        other => other
            .parse::<Move>()
            .map(Command::Play)
            .map_err(|err| format!("{err}. {HELP}")),
    }
}

fn path_from_captures(caps: &Captures) -> Option<String> {
    caps.name("path").map(|m| m.as_str().trim().to_string())
}

fn save_command_from_captures(caps: &Captures) -> Result<Command, String> {
    Ok(Command::Save(path_from_captures(caps)))
}

fn load_command_from_captures(caps: &Captures) -> Result<Command, String> {
    Ok(Command::Load(path_from_captures(caps)))
}

fn history_command_from_captures(caps: &Captures) -> Result<Command, String> {
    match caps.name("count") {
        None => Ok(Command::History(None)),
        Some(count) => count
            .as_str()
            .parse::<usize>()
            .map(|n| Command::History(Some(n)))
            .map_err(|err| format!("Invalid history length {:?}: {err}", count.as_str())),
    }
}
