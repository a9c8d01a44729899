use alloc::format;

use crate::count::running_count;
use crate::error::CountCheckError;

use super::{Game, RoundPhase};

const CORRECT: &str = "Correct!";

impl Game {
    fn ensure_count_check(&self) -> Result<(), CountCheckError> {
        if self.phase == RoundPhase::CountCheck {
            Ok(())
        } else {
            Err(CountCheckError::InvalidState)
        }
    }

    /// Opens the count check once the post-round delay has passed.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over or the delay has not
    /// passed yet.
    pub fn continue_to_count_check(&mut self) -> Result<(), CountCheckError> {
        if self.phase != RoundPhase::RoundOver || !self.count_check_ready {
            return Err(CountCheckError::NotReady);
        }

        self.count_check_ready = false;
        self.count_input.clear();
        self.set_phase(RoundPhase::CountCheck);
        Ok(())
    }

    /// Types one character of the guess.
    ///
    /// Digits are accepted anywhere and `-` only as the first character.
    /// Returns whether the character was accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the count check is not open.
    pub fn count_key(&mut self, ch: char) -> Result<bool, CountCheckError> {
        self.ensure_count_check()?;

        let accepted = ch.is_ascii_digit() || (ch == '-' && self.count_input.is_empty());
        if accepted {
            self.count_input.push(ch);
        }
        Ok(accepted)
    }

    /// Deletes the last character of the guess.
    ///
    /// # Errors
    ///
    /// Returns an error if the count check is not open.
    pub fn count_backspace(&mut self) -> Result<(), CountCheckError> {
        self.ensure_count_check()?;

        self.count_input.pop();
        Ok(())
    }

    /// Checks the guess against the running count.
    ///
    /// Anything that is not exactly the running count, including input
    /// that is not a number, is wrong: the current bet is taken from the
    /// balance (stopping at zero) and the game is over.
    ///
    /// Returns whether the guess was right.
    ///
    /// # Errors
    ///
    /// Returns an error if the count check is not open.
    pub fn submit_count(&mut self) -> Result<bool, CountCheckError> {
        self.ensure_count_check()?;

        let running = running_count(self.shoe.discards());
        let correct = self
            .count_input
            .parse::<i32>()
            .is_ok_and(|guess| guess == running);

        self.result.clear();
        if correct {
            log::info!("count check passed at {running}");
            self.result.push_str(CORRECT);
            self.set_phase(RoundPhase::RoundOver);
        } else {
            log::info!(
                "count check failed: guessed {:?}, count was {running}",
                self.count_input
            );
            self.ledger.debit_clamped(self.bet);
            self.bet = 0;
            self.result = format!("Incorrect! Count was {running}. You lose your bet.");
            self.set_phase(RoundPhase::GameOver);
        }

        Ok(correct)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::card::{Card, Suit};
    use crate::error::CountCheckError;
    use crate::ledger::MemoryStore;
    use crate::options::GameOptions;

    use super::super::{Game, RoundPhase};

    /// A table sitting in the count check with the given discards and bet.
    fn at_count_check(discard_ranks: &[u8], bet: usize, balance: i64) -> (Game, MemoryStore) {
        let store = MemoryStore::with_balance(balance);
        let mut game = Game::new(GameOptions::default(), 3, store.clone());

        let mut cards = vec![Card::new(Suit::Clubs, 7); 60];
        cards.extend(
            discard_ranks
                .iter()
                .rev()
                .map(|&rank| Card::new(Suit::Hearts, rank)),
        );
        game.shoe.set_cards(cards);
        for _ in discard_ranks {
            game.shoe.draw();
        }

        game.bet = bet;
        game.phase = RoundPhase::CountCheck;
        (game, store)
    }

    fn type_guess(game: &mut Game, guess: &str) {
        for ch in guess.chars() {
            game.count_key(ch).unwrap();
        }
    }

    #[test]
    fn exact_negative_count_is_correct() {
        let (mut game, _) = at_count_check(&[10, 1, 13], 40, 200);
        assert_eq!(game.count().running, -3);

        type_guess(&mut game, "-3");
        assert!(game.submit_count().unwrap());
        assert_eq!(game.result(), "Correct!");
        assert_eq!(game.phase(), RoundPhase::RoundOver);
        assert_eq!(game.balance(), 200);
        assert_eq!(game.bet(), 40);
    }

    #[test]
    fn wrong_sign_loses_bet() {
        let (mut game, store) = at_count_check(&[10, 1, 13], 40, 200);

        type_guess(&mut game, "3");
        assert!(!game.submit_count().unwrap());
        assert_eq!(game.result(), "Incorrect! Count was -3. You lose your bet.");
        assert_eq!(game.phase(), RoundPhase::GameOver);
        assert_eq!(game.balance(), 160);
        assert_eq!(game.bet(), 0);
        assert_eq!(store.stored(), Some(160));
    }

    #[test]
    fn letters_never_reach_the_guess() {
        let (mut game, _) = at_count_check(&[10, 1, 13], 40, 200);

        assert!(!game.count_key('a').unwrap());
        assert!(!game.count_key('b').unwrap());
        assert_eq!(game.count_input(), "");
        assert!(!game.submit_count().unwrap());
        assert_eq!(game.phase(), RoundPhase::GameOver);
    }

    #[test]
    fn penalty_stops_at_zero() {
        let (mut game, _) = at_count_check(&[2, 3], 500, 120);

        type_guess(&mut game, "0");
        assert!(!game.submit_count().unwrap());
        assert_eq!(game.balance(), 0);
    }

    #[test]
    fn minus_only_leads_and_backspace_edits() {
        let (mut game, _) = at_count_check(&[2, 3], 0, 100);

        assert!(game.count_key('-').unwrap());
        assert!(!game.count_key('-').unwrap());
        type_guess(&mut game, "12");
        assert_eq!(game.count_input(), "-12");

        game.count_backspace().unwrap();
        game.count_backspace().unwrap();
        game.count_backspace().unwrap();
        game.count_backspace().unwrap();
        assert_eq!(game.count_input(), "");

        type_guess(&mut game, "2");
        assert!(game.submit_count().unwrap());
    }

    #[test]
    fn input_rejected_outside_count_check() {
        let mut game = Game::new(GameOptions::default(), 3, MemoryStore::new());
        assert_eq!(game.count_key('1'), Err(CountCheckError::InvalidState));
        assert_eq!(game.submit_count(), Err(CountCheckError::InvalidState));
        assert_eq!(
            game.continue_to_count_check(),
            Err(CountCheckError::NotReady)
        );
    }
}
