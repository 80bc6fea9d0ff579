use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::observer::GameObserver;
use crate::player::{Participant, Player};
use crate::rng::{RandomSource, SeededRandom};
use crate::shuffle::Shuffler;

/// Why a game stopped.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// One player collected every card in play.
    Sweep,
    /// A player ran out of cards; the player holding the most cards wins.
    Elimination,
    /// The configured round limit was reached; decided like an elimination.
    RoundLimit,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EndReason::Sweep => "sweep",
            EndReason::Elimination => "elimination",
            EndReason::RoundLimit => "round limit",
        };
        f.write_str(s)
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Index of the winner in the session's player order
    pub winner: usize,
    pub winner_name: String,
    pub reason: EndReason,
    /// Rounds fully resolved (ties included)
    pub rounds: u64,
    /// Cards still on the table when the game stopped: the pending tie pile
    /// plus anything revealed in a round cut short by elimination
    pub unclaimed: Vec<Card>,
}

/// Collects the collaborators of a [`Game`] and validates them.
///
/// # Examples
///
/// ```
/// use cardwar_engine::deck::Deck;
/// use cardwar_engine::game::GameBuilder;
/// use cardwar_engine::observer::EventRecorder;
/// use cardwar_engine::player::Player;
/// use cardwar_engine::rng::SeededRandom;
/// use cardwar_engine::shuffle::FisherYates;
///
/// let recorder = EventRecorder::new();
/// let mut game = GameBuilder::new()
///     .observer(recorder.clone())
///     .deck(Deck::new())
///     .shuffler(FisherYates)
///     .players(vec![Player::new("1"), Player::new("2")])
///     .random(SeededRandom::new(42))
///     .cards(40, 10)
///     .build()
///     .expect("valid setup");
///
/// let outcome = game.play().expect("game runs to completion");
/// assert!(outcome.winner < 2);
/// assert!(!recorder.events().is_empty());
/// ```
pub struct GameBuilder<'a, P: Participant = Player> {
    observer: Option<Box<dyn GameObserver + 'a>>,
    deck: Option<Deck>,
    shuffler: Option<Box<dyn Shuffler + 'a>>,
    players: Option<Vec<P>>,
    random: Option<Box<dyn RandomSource + 'a>>,
    total_cards: usize,
    max_card_value: u32,
    max_rounds: Option<u64>,
}

impl<P: Participant> Default for GameBuilder<'_, P> {
    fn default() -> Self {
        Self {
            observer: None,
            deck: None,
            shuffler: None,
            players: None,
            random: None,
            total_cards: 0,
            max_card_value: 0,
            max_rounds: None,
        }
    }
}

impl<'a, P: Participant> GameBuilder<'a, P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observer(mut self, observer: impl GameObserver + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Master deck; its contents are replaced during setup.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn shuffler(mut self, shuffler: impl Shuffler + 'a) -> Self {
        self.shuffler = Some(Box::new(shuffler));
        self
    }

    /// Players in session order.
    pub fn players(mut self, players: Vec<P>) -> Self {
        self.players = Some(players);
        self
    }

    /// Randomness for every shuffle in the session. Defaults to a freshly
    /// seeded [`SeededRandom`].
    pub fn random(mut self, random: impl RandomSource + 'a) -> Self {
        self.random = Some(Box::new(random));
        self
    }

    pub fn cards(mut self, total_cards: usize, max_card_value: u32) -> Self {
        self.total_cards = total_cards;
        self.max_card_value = max_card_value;
        self
    }

    pub fn max_rounds(mut self, max_rounds: Option<u64>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Validates the setup, builds and shuffles the master deck and deals
    /// every player an equal share.
    ///
    /// # Errors
    ///
    /// - [`GameError::NullArgument`] when the observer, deck, shuffler or
    ///   player list is missing
    /// - [`GameError::InvalidArgument`] for fewer than two players, fewer
    ///   than two cards, or a max card value below two
    ///
    /// Nothing is dealt unless every check passes.
    pub fn build(self) -> Result<Game<'a, P>, GameError> {
        let observer = self.observer.ok_or(GameError::NullArgument("observer"))?;
        let mut deck = self.deck.ok_or(GameError::NullArgument("deck"))?;
        let shuffler = self.shuffler.ok_or(GameError::NullArgument("shuffler"))?;
        let mut players = self.players.ok_or(GameError::NullArgument("players"))?;
        if players.len() <= 1 {
            return Err(GameError::InvalidArgument(
                "more than one player is required".into(),
            ));
        }
        if self.total_cards < 2 {
            return Err(GameError::InvalidArgument(
                "at least 2 cards are needed to play".into(),
            ));
        }
        if self.max_card_value < 2 {
            return Err(GameError::InvalidArgument(
                "max card value can't be less than 2".into(),
            ));
        }

        let mut random: Box<dyn RandomSource + 'a> = match self.random {
            Some(random) => random,
            None => Box::new(SeededRandom::from_entropy()),
        };

        deck.create_deck(self.total_cards, self.max_card_value)?;
        deck.shuffle(shuffler.as_ref(), random.as_mut());
        let total_cards = deck.count();
        deal_equal_shares(&mut deck, &mut players);

        info!(
            players = players.len(),
            total_cards,
            max_card_value = self.max_card_value,
            undistributed = deck.count(),
            "game set up"
        );

        Ok(Game {
            observer,
            shuffler,
            random,
            players,
            deck,
            total_cards,
            max_rounds: self.max_rounds,
            rounds: 0,
            played: false,
        })
    }
}

/// Deals `count / players` cards to each player from the top of the deck,
/// in player order. The remainder stays in the deck and is never played.
fn deal_equal_shares<P: Participant>(deck: &mut Deck, players: &mut [P]) {
    let per_player = deck.count() / players.len();
    if per_player == 0 {
        return;
    }
    for player in players.iter_mut() {
        let share: Vec<Card> = (0..per_player).filter_map(|_| deck.draw_top_card()).collect();
        player.set_hand(share);
    }
}

/// Picks the round winner from `(card, player index)` pairs.
///
/// Any card equal to the running maximum makes the whole round a tie, even if
/// a higher card shows up later in the scan.
pub fn round_winner(moves: &[(Card, usize)]) -> Option<usize> {
    let (first, rest) = moves.split_first()?;
    let (mut max, mut winner) = *first;
    for &(card, player) in rest {
        match card.compare(&max) {
            std::cmp::Ordering::Equal => return None,
            std::cmp::Ordering::Greater => {
                max = card;
                winner = player;
            }
            std::cmp::Ordering::Less => {}
        }
    }
    Some(winner)
}

/// A session of the card war game.
///
/// Every round each player reveals the top card of their hand. The highest
/// card takes the whole table; ties leave the cards on the table for the
/// next round.
pub struct Game<'a, P: Participant = Player> {
    observer: Box<dyn GameObserver + 'a>,
    shuffler: Box<dyn Shuffler + 'a>,
    random: Box<dyn RandomSource + 'a>,
    players: Vec<P>,
    /// Master deck; after setup it holds only the undistributed remainder
    deck: Deck,
    total_cards: usize,
    max_rounds: Option<u64>,
    rounds: u64,
    played: bool,
}

impl<P: Participant> Game<'_, P> {
    pub fn players(&self) -> &[P] {
        &self.players
    }

    /// Cards left over after the equal deal.
    pub fn undistributed(&self) -> &Deck {
        &self.deck
    }

    /// Size of the master deck built at setup.
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Runs rounds until a player sweeps the deck, a player runs out of
    /// cards, or the round limit is hit.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidState`] when called a second time, or when a
    /// participant cannot show a card after its hand was refilled.
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        if self.played {
            return Err(GameError::InvalidState("game has already been played".into()));
        }
        self.played = true;

        let mut table: Vec<Card> = Vec::new();
        let mut moves: Vec<(Card, usize)> = Vec::with_capacity(self.players.len());

        loop {
            if self.max_rounds.is_some_and(|limit| self.rounds >= limit) {
                let leader = self.leader();
                return Ok(self.finish(leader, EndReason::RoundLimit, table));
            }

            moves.clear();
            for idx in 0..self.players.len() {
                let player = &mut self.players[idx];
                if player.total_available_cards_count() == 0 {
                    debug!(player = player.name(), "player out of cards");
                    let leader = self.leader();
                    return Ok(self.finish(leader, EndReason::Elimination, table));
                }
                if player.hand_count() == 0 {
                    trace!(player = player.name(), "refilling hand from discard pile");
                    player.use_shuffled_discarded_set(self.shuffler.as_ref(), self.random.as_mut());
                }

                let card = player.show_card()?;
                moves.push((card, idx));
                table.push(card);
                self.observer
                    .on_move(player.name(), card.value, player.hand_count());
            }
            self.rounds += 1;

            let Some(winner) = round_winner(&moves) else {
                debug!(round = self.rounds, table = table.len(), "tie, cards stay on the table");
                continue;
            };

            let player = &mut self.players[winner];
            debug!(round = self.rounds, winner = player.name(), cards = table.len(), "round won");
            self.observer.on_round_completed(player.name());
            player.add_discarded_cards(&table);
            table.clear();

            if player.total_available_cards_count() == self.total_cards {
                return Ok(self.finish(winner, EndReason::Sweep, table));
            }
        }
    }

    /// Index of the player holding the most cards; the first one wins ties.
    fn leader(&self) -> usize {
        let mut best = 0;
        for (idx, player) in self.players.iter().enumerate().skip(1) {
            if player.total_available_cards_count()
                > self.players[best].total_available_cards_count()
            {
                best = idx;
            }
        }
        best
    }

    fn finish(&mut self, winner: usize, reason: EndReason, unclaimed: Vec<Card>) -> GameOutcome {
        let winner_name = self.players[winner].name().to_string();
        self.observer.on_game_completed(&winner_name);
        info!(winner = %winner_name, %reason, rounds = self.rounds, "game finished");
        GameOutcome {
            winner,
            winner_name,
            reason,
            rounds: self.rounds,
            unclaimed,
        }
    }
}

impl<P: Participant> fmt::Debug for Game<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players.len())
            .field("total_cards", &self.total_cards)
            .field("undistributed", &self.deck.count())
            .field("rounds", &self.rounds)
            .field("played", &self.played)
            .finish()
    }
}
