//! Table configuration options.

use crate::card::DECK_SIZE;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcount::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(8)
///     .with_ai_players(1)
///     .with_starting_chips(500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Minimum cards left in the shoe before a draw; below it the shoe is
    /// rebuilt.
    pub reshuffle_threshold: usize,
    /// Number of scripted AI seats.
    pub ai_players: u8,
    /// Balance given to a new or broke player.
    pub starting_chips: usize,
    /// Total at which the dealer and AI seats stop drawing.
    pub dealer_stands_on: u8,
    /// Delay between revealed cards, in milliseconds.
    pub draw_interval_ms: u64,
    /// How long Check Count shows the count, in milliseconds.
    pub count_display_ms: u64,
    /// Delay between a settled round and the count check prompt, in
    /// milliseconds.
    pub count_check_delay_ms: u64,
    /// How long a rejected bet message stays up, in milliseconds.
    pub bet_popup_ms: u64,
    /// How long the reshuffle message stays up, in milliseconds.
    pub reshuffle_popup_ms: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            reshuffle_threshold: DECK_SIZE,
            ai_players: 2,
            starting_chips: 100,
            dealer_stands_on: 17,
            draw_interval_ms: 300,
            count_display_ms: 2_000,
            count_check_delay_ms: 3_000,
            bet_popup_ms: 1_500,
            reshuffle_popup_ms: 2_000,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(78);
    /// assert_eq!(options.reshuffle_threshold, 78);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, cards: usize) -> Self {
        self.reshuffle_threshold = cards;
        self
    }

    /// Sets the number of AI seats.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_ai_players(0);
    /// assert_eq!(options.ai_players, 0);
    /// ```
    #[must_use]
    pub const fn with_ai_players(mut self, seats: u8) -> Self {
        self.ai_players = seats;
        self
    }

    /// Sets the starting stake.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_chips(1_000);
    /// assert_eq!(options.starting_chips, 1_000);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the total the dealer and AI seats stand on.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the delay between revealed cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_draw_interval_ms(0);
    /// assert_eq!(options.draw_interval_ms, 0);
    /// ```
    #[must_use]
    pub const fn with_draw_interval_ms(mut self, interval_ms: u64) -> Self {
        self.draw_interval_ms = interval_ms;
        self
    }

    /// Sets how long Check Count shows the count.
    #[must_use]
    pub const fn with_count_display_ms(mut self, duration_ms: u64) -> Self {
        self.count_display_ms = duration_ms;
        self
    }

    /// Sets the delay before the count check prompt.
    #[must_use]
    pub const fn with_count_check_delay_ms(mut self, delay_ms: u64) -> Self {
        self.count_check_delay_ms = delay_ms;
        self
    }

    /// Sets how long popup messages stay up.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_popup_ms(500, 800);
    /// assert_eq!(options.bet_popup_ms, 500);
    /// assert_eq!(options.reshuffle_popup_ms, 800);
    /// ```
    #[must_use]
    pub const fn with_popup_ms(mut self, bet_popup_ms: u64, reshuffle_popup_ms: u64) -> Self {
        self.bet_popup_ms = bet_popup_ms;
        self.reshuffle_popup_ms = reshuffle_popup_ms;
        self
    }
}
