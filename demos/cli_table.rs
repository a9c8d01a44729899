//! Terminal card counting table.
//!
//! Run with `RUST_LOG=debug` to follow the round flow.

use core::time::Duration;
use std::io::{self, Write};
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use bjcount::{
    Card, Chip, FileStore, Game, GameOptions, HandView, Intent, RoundPhase, Snapshot, Suit,
};

const FRAME: Duration = Duration::from_millis(50);

struct Clock(Instant);

impl Clock {
    fn now(&self) -> u64 {
        u64::try_from(self.0.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

fn main() {
    env_logger::init();
    println!("Blackjack count trainer (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let clock = Clock(Instant::now());
    let mut game = Game::new(GameOptions::default(), seed, FileStore::default());

    while !game.quit_requested() {
        play_out(&mut game, &clock);
        print_table(&game.snapshot(clock.now()));

        let intents = match game.phase() {
            RoundPhase::Betting => betting_prompt(),
            RoundPhase::Insurance => insurance_prompt(),
            RoundPhase::Playing => action_prompt(),
            RoundPhase::RoundOver => round_over_prompt(&game),
            RoundPhase::CountCheck => count_prompt(),
            RoundPhase::GameOver => game_over_prompt(),
            RoundPhase::PlayerDoubling | RoundPhase::DealerDrawing => Vec::new(),
        };

        for intent in intents {
            if let Err(err) = game.apply(intent, clock.now()) {
                println!("{}", colorize(&err.to_string(), "33"));
                break;
            }
        }
    }

    println!("Balance saved: {}. Goodbye.", game.balance());
}

/// Ticks until no card is waiting to be shown.
fn play_out(game: &mut Game, clock: &Clock) {
    let mut shown = game.player_hand().len() + game.dealer_hand().len();
    while game.is_animating() {
        thread::sleep(FRAME);
        game.tick(clock.now());

        let now_shown = game.player_hand().len() + game.dealer_hand().len();
        if now_shown != shown {
            shown = now_shown;
            print_table(&game.snapshot(clock.now()));
        }
    }
    game.tick(clock.now());
}

fn betting_prompt() -> Vec<Intent> {
    let chips = Chip::ALL
        .iter()
        .rev()
        .map(|chip| chip.value().to_string())
        .collect::<Vec<_>>()
        .join("/");
    let input = prompt_line(&format!(
        "Bet a chip ({chips}), [c]lear, [d]eal, [r]eshuffle, [q]uit: "
    ));

    match input.as_str() {
        "c" | "clear" => vec![Intent::ClearBet],
        "d" | "deal" => vec![Intent::Deal],
        "r" | "reshuffle" => vec![Intent::Reshuffle],
        "q" | "quit" => vec![Intent::Quit],
        other => match other.parse().ok().and_then(Chip::from_value) {
            Some(chip) => vec![Intent::PlaceBet(chip)],
            None => {
                println!("Unknown chip.");
                Vec::new()
            }
        },
    }
}

fn insurance_prompt() -> Vec<Intent> {
    match prompt_line("Dealer shows an Ace. Take insurance? (y/n): ").as_str() {
        "q" | "quit" => vec![Intent::Quit],
        "y" | "yes" => vec![Intent::Insurance(true)],
        _ => vec![Intent::Insurance(false)],
    }
}

fn action_prompt() -> Vec<Intent> {
    let input = prompt_line("[h]it [s]tand [d]ouble s[p]lit [k] check count [r]eshuffle [q]uit: ");
    match input.as_str() {
        "h" | "hit" => vec![Intent::Hit],
        "s" | "stand" => vec![Intent::Stand],
        "d" | "double" => vec![Intent::Double],
        "p" | "split" => vec![Intent::Split],
        "k" | "count" => vec![Intent::CheckCount],
        "r" | "reshuffle" => vec![Intent::Reshuffle],
        "q" | "quit" => vec![Intent::Quit],
        _ => {
            println!("Unknown action.");
            Vec::new()
        }
    }
}

fn round_over_prompt(game: &Game) -> Vec<Intent> {
    let prompt = if game.is_count_check_ready() {
        "Press enter to check the count, [n]ew round, [q]uit: "
    } else {
        "[n]ew round, [q]uit, enter to wait: "
    };

    match prompt_line(prompt).as_str() {
        "n" | "new" => vec![Intent::NewRound],
        "q" | "quit" => vec![Intent::Quit],
        "" if game.is_count_check_ready() => vec![Intent::Continue],
        _ => Vec::new(),
    }
}

fn count_prompt() -> Vec<Intent> {
    let input = prompt_line("What is the running count? ");
    let mut intents: Vec<Intent> = input.chars().map(Intent::CountKey).collect();
    intents.push(Intent::CountSubmit);
    intents
}

fn game_over_prompt() -> Vec<Intent> {
    match prompt_line("Game over. [n]ew round or [q]uit: ").as_str() {
        "q" | "quit" => vec![Intent::Quit],
        _ => vec![Intent::NewRound],
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn print_table(snapshot: &Snapshot) {
    println!(
        "\nShoe: {} cards | Balance: {} | Bet: {}",
        snapshot.shoe_remaining, snapshot.balance, snapshot.bet
    );
    if snapshot.insurance_bet > 0 {
        println!("Insurance: {}", snapshot.insurance_bet);
    }

    let dealer = snapshot
        .dealer
        .cards
        .iter()
        .map(|card| card.as_ref().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ");
    println!("Dealer: {dealer} (value {})", snapshot.dealer.value);

    for (seat, hand) in snapshot.ai.iter().enumerate() {
        println!("AI {}: {}", seat + 1, format_hand(hand));
    }
    println!("You: {}", format_hand(&snapshot.player));

    if let Some(count) = snapshot.count {
        println!(
            "Running count: {} | True count: {:.1}",
            count.running, count.true_count
        );
    }
    if let Some(message) = snapshot.popup {
        println!("{}", colorize(message, "33"));
    }
    if !snapshot.result.is_empty() {
        println!("{}", colorize(&snapshot.result, "36"));
    }
}

fn format_hand(hand: &HandView) -> String {
    if hand.cards.is_empty() {
        return "(empty)".to_string();
    }
    let cards = hand
        .cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{cards} (value {})", hand.value)
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "37",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
