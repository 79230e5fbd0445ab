//! CLI Elevator example: seat 0 is played from the terminal, the rest by bots.
//!
//! Set `RUST_LOG=elevator=debug` to see the engine's log output on stderr.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use elevator::{ActionError, BotMove, Card, Game, GameOptions, Suit};
use tracing_subscriber::EnvFilter;

const HUMAN: u8 = 0;

enum Command {
    Play(usize),
    Draw,
    Quit,
}

fn main() {
    init_logging();

    clear_screen();
    let Some(players) = prompt_u8("Enter player count [2,4]: ") else {
        return;
    };
    let Some(hand_size) = prompt_u8("Enter starting hand size [2,7]: ") else {
        return;
    };
    clear_screen();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default()
        .with_players(players)
        .with_hand_size(hand_size);
    let mut game = Game::new(options, seed);

    for notice in game.config_warnings() {
        println!("Error: {notice}");
    }

    while game.winner().is_none() {
        let player = game.current_player();
        let result = if player == HUMAN {
            human_move(&mut game)
        } else {
            game.bot_move(player).map(|outcome| print_bot_move(&game, player, outcome))
        };

        match result {
            Ok(true) => {}
            Ok(false) => return,
            Err(err) if err.is_recoverable() => println!("{}", describe(err)),
            Err(err) => {
                println!("The game cannot continue: {err}");
                return;
            }
        }
    }

    if let Some(winner) = game.winner() {
        println!("Player {winner} WINS!");
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Returns `Ok(false)` when the player quits.
fn human_move(game: &mut Game) -> Result<bool, ActionError> {
    game.sort_hand(HUMAN)?;
    print_table(game);

    let hand_len = game.hand(HUMAN).map_or(0, <[Card]>::len);
    let command = loop {
        let input = prompt_line("Enter move. Options: PLAY [INDEX], DRAW. ");
        match parse_command(&input, hand_len) {
            Some(command) => break command,
            None => println!("Unknown move."),
        }
    };
    clear_screen();

    match command {
        Command::Play(index) => game.play_card_at(HUMAN, index - 1).map(|_| true),
        Command::Draw => game.draw_card(HUMAN).map(|_| true),
        Command::Quit => Ok(false),
    }
}

fn parse_command(input: &str, hand_len: usize) -> Option<Command> {
    let words: Vec<String> = input.split_whitespace().map(str::to_uppercase).collect();
    match words.as_slice() {
        [draw] if draw == "DRAW" => Some(Command::Draw),
        [quit] if quit == "Q" || quit == "QUIT" => Some(Command::Quit),
        [play, index] if play == "PLAY" => index
            .parse::<usize>()
            .ok()
            .filter(|index| (1..=hand_len).contains(index))
            .map(Command::Play),
        _ => None,
    }
}

fn print_bot_move(game: &Game, player: u8, outcome: BotMove) -> bool {
    let cards_left = game.hand(player).map_or(0, <[Card]>::len);
    match outcome {
        BotMove::Played(card) => println!(
            "BOT {player} MOVE: PLAYED {}\tCARDS LEFT: {cards_left}",
            format_card(&card)
        ),
        BotMove::Drew(_) => println!("BOT {player} MOVE: DREW\t\tCARDS LEFT: {cards_left}"),
    }
    true
}

fn describe(err: ActionError) -> &'static str {
    match err {
        ActionError::NotAdjacent => "Not a valid card played.",
        ActionError::NotYourTurn => "Error: not this player's turn.",
        ActionError::CardNotInHand => "That card is not in your hand.",
        ActionError::GameOver => "The game is already over.",
        ActionError::PlayerNotFound => "No such player.",
        ActionError::Deal(_) => "The draw pile is exhausted.",
    }
}

fn print_table(game: &Game) {
    let hand = game.hand(HUMAN).unwrap_or_default();
    let cards: Vec<String> = hand.iter().map(format_card).collect();
    let indices: Vec<String> = (1..=hand.len()).map(|i| i.to_string()).collect();

    println!(
        "CARD:\t{}\t  {}\t  {} cards",
        cards.join("\t"),
        format_card(&game.face_up_top()),
        game.draw_pile().len()
    );
    println!(
        "INDEX:\t{}\tFACEUP\tDRAW PILE SIZE\tTURN {}",
        indices.join("\t"),
        game.turn()
    );
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Spades | Suit::Clubs => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn clear_screen() {
    print!("\u{1b}[2J");
    let _ = io::stdout().flush();
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "quit".to_string(),
        Ok(_) => input.trim().to_string(),
    }
}

fn prompt_u8(prompt: &str) -> Option<u8> {
    loop {
        let input = prompt_line(prompt);
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            return None;
        }
        match input.parse::<u8>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
