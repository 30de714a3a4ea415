use crate::Action;
use crate::BettingRound;
use crate::GameError;
use crate::GamePlayer;
use crate::Pot;
use crate::SeatState;
use pk_cards::Card;
use pk_cards::Deck;
use pk_cards::best_hand;
use pk_core::Chips;
use pk_core::Position;

/// A legal action available to the player on turn, with its numeric range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableAction {
    pub label: &'static str,
    pub min_amount: Chips,
    pub max_amount: Chips,
    pub increment: Chips,
}

/// The per-table state machine: seating, blinds, dealing, betting rounds,
/// showdown. Owns its deck; holds no borrowed references to anything
/// outside itself.
#[derive(Debug, Clone)]
pub struct GameState {
    pub game_id: i64,
    pub hand_id: u64,
    pub seq: u64,

    pub max_players: usize,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub min_buy_in: Chips,
    pub max_buy_in: Chips,

    pub betting_round: BettingRound,
    pub dealer_seat: Option<Position>,
    pub active_seat: Option<Position>,
    sb_seat: Option<Position>,
    bb_seat: Option<Position>,

    pub seats: Vec<GamePlayer>,
    pub community_cards: Vec<Card>,

    pub main_pot: Pot,
    pub side_pots: Vec<Pot>,

    pub current_bet: Chips,
    pub min_raise: Chips,
    pub last_aggressor_seat: Option<Position>,
    pub players_acted: usize,

    deck: Deck,

    pub hand_in_progress: bool,
    pub winner_seat: Option<Position>,
    pub amount_won: Chips,
    pub winner_hand_rank: Option<i32>,
}

impl GameState {
    pub fn create(
        game_id: i64,
        max_players: usize,
        small_blind: Chips,
        big_blind: Chips,
    ) -> Result<Self, GameError> {
        if max_players == 0 || max_players > pk_core::MAX_SEATS {
            return Err(GameError::EngineFault("max_players out of range".into()));
        }
        if !(small_blind > 0 && big_blind > small_blind) {
            return Err(GameError::EngineFault(
                "blinds must satisfy big_blind > small_blind > 0".into(),
            ));
        }
        Ok(Self {
            game_id,
            hand_id: 0,
            seq: 0,
            max_players,
            small_blind,
            big_blind,
            min_buy_in: pk_core::MIN_BUY_IN_BB * big_blind,
            max_buy_in: pk_core::MAX_BUY_IN_BB * big_blind,
            betting_round: BettingRound::Complete,
            dealer_seat: None,
            active_seat: None,
            sb_seat: None,
            bb_seat: None,
            seats: (0..max_players).map(GamePlayer::empty).collect(),
            community_cards: Vec::with_capacity(5),
            main_pot: Pot::default(),
            side_pots: Vec::new(),
            current_bet: 0,
            min_raise: big_blind,
            last_aggressor_seat: None,
            players_acted: 0,
            deck: Deck::new(),
            hand_in_progress: false,
            winner_seat: None,
            amount_won: 0,
            winner_hand_rank: None,
        })
    }

    pub fn add_player(
        &mut self,
        user_id: i64,
        name: String,
        seat: Position,
        buy_in: Chips,
    ) -> Result<(), GameError> {
        let slot = self.seats.get(seat).ok_or(GameError::SeatInvalid)?;
        if !slot.is_empty() {
            return Err(GameError::SeatTaken);
        }
        if buy_in < self.min_buy_in || buy_in > self.max_buy_in {
            return Err(GameError::BuyInOutOfRange);
        }
        self.seats[seat] = GamePlayer {
            player_id: user_id,
            name,
            state: SeatState::Waiting,
            money: buy_in,
            ..GamePlayer::empty(seat)
        };
        Ok(())
    }

    pub fn remove_player(&mut self, seat: Position) -> Result<(), GameError> {
        let slot = self.seats.get(seat).ok_or(GameError::SeatInvalid)?;
        if slot.is_empty() {
            return Err(GameError::SeatEmpty);
        }
        self.seats[seat] = GamePlayer::empty(seat);
        Ok(())
    }

    pub fn convert_to_bot(&mut self, seat: Position) -> Result<(), GameError> {
        let slot = self.seats.get_mut(seat).ok_or(GameError::SeatInvalid)?;
        if slot.is_empty() {
            return Err(GameError::SeatEmpty);
        }
        let original = slot.player_id;
        slot.is_bot = true;
        slot.original_user_id = Some(original);
        slot.player_id = -1;
        slot.name = "Bot".to_string();
        Ok(())
    }

    /// Seats with `money == 0` and a non-empty state: removed after a hand
    /// completes, per the bust-out scenario. Returns the removed seats'
    /// former occupant ids so the caller can notify/credit them.
    pub fn sweep_busted_players(&mut self) -> Vec<Position> {
        let mut removed = Vec::new();
        for seat in 0..self.seats.len() {
            let slot = &self.seats[seat];
            if !slot.is_empty() && slot.money == 0 {
                removed.push(seat);
                self.seats[seat] = GamePlayer::empty(seat);
            }
        }
        removed
    }

    pub fn start_hand(&mut self) -> Result<(), GameError> {
        if self.hand_in_progress {
            return Err(GameError::InProgress);
        }
        let ready = self
            .seats
            .iter()
            .filter(|s| !matches!(s.state, SeatState::Empty | SeatState::SittingOut) && s.money > 0)
            .count();
        if ready < 2 {
            return Err(GameError::TooFewPlayers);
        }

        self.hand_id += 1;
        self.reset_hand();
        self.set_roles();
        self.deal_hole_cards();
        self.post_blinds();
        match self.set_first_to_act() {
            Ok(()) => {
                self.hand_in_progress = true;
                Ok(())
            }
            Err(e) => {
                self.hand_in_progress = false;
                self.active_seat = None;
                Err(e)
            }
        }
    }

    fn reset_hand(&mut self) {
        self.community_cards.clear();
        self.main_pot = Pot::default();
        self.side_pots.clear();
        for seat in &mut self.seats {
            seat.reset_for_new_hand();
        }
        self.deck.reset();
        self.deck.shuffle(1000, self.hand_id);
        self.winner_seat = None;
        self.amount_won = 0;
        self.winner_hand_rank = None;
        self.players_acted = 0;
        self.current_bet = 0;
        self.min_raise = self.big_blind;
        self.last_aggressor_seat = None;
        self.betting_round = BettingRound::Preflop;
    }

    fn set_roles(&mut self) {
        for seat in &mut self.seats {
            if seat.state == SeatState::Waiting && seat.money > 0 {
                seat.state = SeatState::Active;
            }
        }
        let from = self.dealer_seat.unwrap_or(self.seats.len() - 1);
        let dealer = self
            .next_occupied_seat(from)
            .unwrap_or(from);
        self.dealer_seat = Some(dealer);
        self.seats[dealer].is_dealer = true;

        let (sb, bb) = if self.active_seats().len() == 2 {
            (Some(dealer), self.next_active_seat(dealer))
        } else {
            let sb = self.next_active_seat(dealer);
            let bb = sb.and_then(|s| self.next_active_seat(s));
            (sb, bb)
        };
        if let Some(sb) = sb {
            self.seats[sb].is_small_blind = true;
        }
        if let Some(bb) = bb {
            self.seats[bb].is_big_blind = true;
        }
        self.sb_seat = sb;
        self.bb_seat = bb;
    }

    fn deal_hole_cards(&mut self) {
        let active: Vec<Position> = self.active_seats();
        for _ in 0..2 {
            for &seat in &active {
                if let Ok(card) = self.deck.draw() {
                    let slot = &mut self.seats[seat].hole_cards;
                    if slot[0].is_none() {
                        slot[0] = Some(card);
                    } else {
                        slot[1] = Some(card);
                    }
                }
            }
        }
    }

    fn post_blinds(&mut self) {
        if let Some(sb) = self.sb_seat {
            self.seats[sb].commit(self.small_blind);
        }
        if let Some(bb) = self.bb_seat {
            self.seats[bb].commit(self.big_blind);
        }
        self.current_bet = self.big_blind;
    }

    fn set_first_to_act(&mut self) -> Result<(), GameError> {
        let bb = self
            .bb_seat
            .ok_or_else(|| GameError::EngineFault("NoActor: big blind not seated".into()))?;
        let first = self
            .next_active_seat(bb)
            .ok_or_else(|| GameError::EngineFault("NoActor: no seat follows big blind".into()))?;
        self.active_seat = Some(first);
        self.betting_round = BettingRound::Preflop;
        self.stamp_timer_deadline();
        Ok(())
    }

    /// Writes an epoch-ms decision deadline onto the seat now on the clock.
    /// Advisory only — a periodic scan outside the engine turns an expired
    /// deadline into a synthesized Check-or-Fold.
    fn stamp_timer_deadline(&mut self) {
        if let Some(seat) = self.active_seat {
            let now = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0);
            self.seats[seat].timer_deadline = Some(now + pk_core::DECISION_TIMEOUT_SECS * 1000);
        }
    }

    fn clear_timer_deadlines(&mut self) {
        for seat in &mut self.seats {
            seat.timer_deadline = None;
        }
    }

    pub fn process_action(&mut self, user_id: i64, action: Action) -> Result<(), GameError> {
        let seat = self.active_seat.ok_or(GameError::NotYourTurn)?;
        if self.seats[seat].player_id != user_id {
            return Err(GameError::NotYourTurn);
        }
        self.apply_action(seat, action)?;
        self.seq += 1;
        self.players_acted += 1;

        if self.round_complete() {
            self.advance_round();
        } else {
            self.active_seat = self.next_active_seat(seat);
            self.stamp_timer_deadline();
        }
        Ok(())
    }

    fn apply_action(&mut self, seat: Position, action: Action) -> Result<(), GameError> {
        let to_call = self.current_bet - self.seats[seat].bet;
        match action {
            Action::Fold => {
                self.seats[seat].state = SeatState::Folded;
            }
            Action::Check => {
                if to_call != 0 {
                    return Err(GameError::InvalidAction(
                        "cannot check, a bet is outstanding".into(),
                    ));
                }
            }
            Action::Call => {
                if to_call <= 0 {
                    return Err(GameError::InvalidAction("nothing to call".into()));
                }
                self.seats[seat].commit(to_call);
            }
            Action::Bet(amount) => {
                if self.current_bet != 0 {
                    return Err(GameError::InvalidAction(
                        "cannot bet, pot already opened".into(),
                    ));
                }
                if amount < self.big_blind || amount > self.seats[seat].money {
                    return Err(GameError::InvalidAction("bet size invalid".into()));
                }
                self.seats[seat].commit(amount);
                self.current_bet = amount;
                self.min_raise = amount;
                self.last_aggressor_seat = Some(seat);
            }
            Action::Raise(amount) => {
                if self.current_bet <= 0 {
                    return Err(GameError::InvalidAction("no bet to raise".into()));
                }
                if amount < self.current_bet + self.min_raise {
                    return Err(GameError::InvalidAction("raise too small".into()));
                }
                let stack_ceiling = self.seats[seat].money + self.seats[seat].bet;
                if amount > stack_ceiling {
                    return Err(GameError::InvalidAction("raise exceeds stack".into()));
                }
                let raise_size = amount - self.current_bet;
                let prior_bet = self.seats[seat].bet;
                let chips_added = amount - prior_bet;
                self.seats[seat].commit(chips_added);
                self.min_raise = raise_size;
                self.current_bet = amount;
                self.last_aggressor_seat = Some(seat);
            }
            Action::AllIn => {
                if self.seats[seat].money <= 0 {
                    return Err(GameError::InvalidAction("no chips to go all-in".into()));
                }
                let all_in_amount = self.seats[seat].money;
                self.seats[seat].commit(all_in_amount);
                let new_bet = self.seats[seat].bet;
                if new_bet > self.current_bet {
                    let raise_size = new_bet - self.current_bet;
                    self.min_raise = self.min_raise.max(raise_size);
                    self.current_bet = new_bet;
                    self.last_aggressor_seat = Some(seat);
                }
            }
        }
        Ok(())
    }

    fn round_complete(&self) -> bool {
        let contesting = self
            .seats
            .iter()
            .filter(|s| matches!(s.state, SeatState::Active | SeatState::AllIn))
            .count();
        if contesting <= 1 {
            return true;
        }
        let all_matched = self
            .seats
            .iter()
            .filter(|s| s.state == SeatState::Active)
            .all(|s| s.bet == self.current_bet);
        if !all_matched {
            return false;
        }
        if self.last_aggressor_seat.is_some() {
            return true;
        }
        // No one has opened the betting beyond the forced blinds: the round
        // ends once every ACTIVE seat has acted at least once (this is what
        // gives the big blind its option to check or raise preflop).
        let active_count = self
            .seats
            .iter()
            .filter(|s| s.state == SeatState::Active)
            .count();
        self.players_acted >= active_count
    }

    fn advance_round(&mut self) {
        let collected: Chips = self.seats.iter().map(|s| s.bet).sum();
        self.main_pot.amount += collected;
        for seat in &mut self.seats {
            seat.bet = 0;
        }

        let contesting: Vec<Position> = self
            .seats
            .iter()
            .enumerate()
            .filter(|(_, s)| matches!(s.state, SeatState::Active | SeatState::AllIn))
            .map(|(i, _)| i)
            .collect();

        if contesting.len() <= 1 {
            self.conclude_without_showdown(contesting.first().copied());
            return;
        }

        let active_count = self
            .seats
            .iter()
            .filter(|s| s.state == SeatState::Active)
            .count();
        let all_in_count = self
            .seats
            .iter()
            .filter(|s| s.state == SeatState::AllIn)
            .count();

        if active_count == 0 && all_in_count >= 2 {
            self.deal_remaining_community_cards();
            self.run_showdown();
            return;
        }

        match self.betting_round {
            BettingRound::Preflop => {
                self.deal_community(3);
                self.betting_round = BettingRound::Flop;
                self.start_new_betting_round();
            }
            BettingRound::Flop => {
                self.deal_community(1);
                self.betting_round = BettingRound::Turn;
                self.start_new_betting_round();
            }
            BettingRound::Turn => {
                self.deal_community(1);
                self.betting_round = BettingRound::River;
                self.start_new_betting_round();
            }
            BettingRound::River => {
                self.betting_round = BettingRound::Showdown;
                self.run_showdown();
            }
            BettingRound::Showdown | BettingRound::Complete => {
                // advance_round should never be invoked once a hand has
                // concluded; treat as a no-op engine fault surfaced via log
                // rather than a panic.
                log::error!("advance_round called outside an active hand");
            }
        }
    }

    fn start_new_betting_round(&mut self) {
        self.current_bet = 0;
        self.min_raise = self.big_blind;
        self.last_aggressor_seat = None;
        self.players_acted = 0;
        let dealer = self.dealer_seat.unwrap_or(0);
        self.active_seat = self.next_active_seat(dealer);
        self.stamp_timer_deadline();
    }

    fn deal_community(&mut self, n: usize) {
        // burn one
        let _ = self.deck.draw();
        for _ in 0..n {
            if let Ok(card) = self.deck.draw() {
                self.community_cards.push(card);
            }
        }
    }

    fn deal_remaining_community_cards(&mut self) {
        while self.community_cards.len() < 3 {
            self.deal_community(3 - self.community_cards.len());
        }
        if self.community_cards.len() == 3 {
            self.deal_community(1);
        }
        if self.community_cards.len() == 4 {
            self.deal_community(1);
        }
    }

    fn conclude_without_showdown(&mut self, winner: Option<Position>) {
        if let Some(seat) = winner {
            self.seats[seat].money += self.main_pot.amount;
            self.winner_seat = Some(seat);
            self.amount_won = self.main_pot.amount;
        }
        self.winner_hand_rank = None;
        self.betting_round = BettingRound::Complete;
        self.hand_in_progress = false;
        self.active_seat = None;
        self.clear_timer_deadlines();
    }

    fn run_showdown(&mut self) {
        let contesting: Vec<Position> = self
            .seats
            .iter()
            .enumerate()
            .filter(|(_, s)| matches!(s.state, SeatState::Active | SeatState::AllIn))
            .map(|(i, _)| i)
            .collect();

        let mut winner: Option<(Position, i32)> = None;
        for seat in contesting {
            let hole = match self.seats[seat].hole_cards {
                [Some(a), Some(b)] => [a, b],
                _ => continue,
            };
            let strength = best_hand(hole, &self.community_cards).value();
            winner = Some(match winner {
                Some((w_seat, w_strength)) if w_strength >= strength => (w_seat, w_strength),
                _ => (seat, strength),
            });
        }

        if let Some((seat, strength)) = winner {
            self.seats[seat].money += self.main_pot.amount;
            self.winner_seat = Some(seat);
            self.amount_won = self.main_pot.amount;
            self.winner_hand_rank = Some(strength);
        }
        self.betting_round = BettingRound::Complete;
        self.hand_in_progress = false;
        self.active_seat = None;
        self.clear_timer_deadlines();
    }

    pub fn available_actions(&self, user_id: i64) -> Vec<AvailableAction> {
        let seat = match self.active_seat {
            Some(s) if self.seats[s].player_id == user_id => s,
            _ => return Vec::new(),
        };
        let player = &self.seats[seat];
        let to_call = self.current_bet - player.bet;
        let mut out = vec![AvailableAction {
            label: "fold",
            min_amount: 0,
            max_amount: 0,
            increment: 1,
        }];
        if to_call == 0 {
            out.push(AvailableAction {
                label: "check",
                min_amount: 0,
                max_amount: 0,
                increment: 1,
            });
        } else {
            out.push(AvailableAction {
                label: "call",
                min_amount: to_call.min(player.money),
                max_amount: to_call.min(player.money),
                increment: 1,
            });
        }
        if self.current_bet == 0 && player.money > 0 {
            out.push(AvailableAction {
                label: "bet",
                min_amount: self.big_blind.min(player.money),
                max_amount: player.money,
                increment: 1,
            });
        } else if self.current_bet > 0 {
            let min_raise_to = self.current_bet + self.min_raise;
            let max_raise_to = player.money + player.bet;
            if max_raise_to >= min_raise_to {
                out.push(AvailableAction {
                    label: "raise",
                    min_amount: min_raise_to,
                    max_amount: max_raise_to,
                    increment: 1,
                });
            }
        }
        if player.money > 0 {
            out.push(AvailableAction {
                label: "all_in",
                min_amount: player.money,
                max_amount: player.money,
                increment: 1,
            });
        }
        out
    }

    fn active_seats(&self) -> Vec<Position> {
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.state == SeatState::Active)
            .map(|(i, _)| i)
            .collect()
    }

    /// Next seat in increasing circular order whose state is ACTIVE.
    fn next_active_seat(&self, from: Position) -> Option<Position> {
        let n = self.seats.len();
        for offset in 1..=n {
            let idx = (from + offset) % n;
            if self.seats[idx].state == SeatState::Active {
                return Some(idx);
            }
        }
        None
    }

    /// Next seat in increasing circular order that is occupied (not EMPTY,
    /// not SITTING_OUT), used for dealer-button rotation.
    fn next_occupied_seat(&self, from: Position) -> Option<Position> {
        let n = self.seats.len();
        for offset in 1..=n {
            let idx = (from + offset) % n;
            if !matches!(self.seats[idx].state, SeatState::Empty | SeatState::SittingOut) {
                return Some(idx);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_player_game(sb: Chips, bb: Chips, buy_in: Chips) -> GameState {
        let mut game = GameState::create(1, 2, sb, bb).unwrap();
        game.add_player(100, "alice".into(), 0, buy_in).unwrap();
        game.add_player(200, "bob".into(), 1, buy_in).unwrap();
        game
    }

    #[test]
    fn fold_to_one_player_awards_pot_without_showdown() {
        let mut game = two_player_game(10, 20, 1000);
        game.start_hand().unwrap();

        let actor_seat = game.active_seat.unwrap();
        let other_seat = 1 - actor_seat;
        let actor_id = game.seats[actor_seat].player_id;

        game.process_action(actor_id, Action::Fold).unwrap();

        assert!(!game.hand_in_progress);
        assert_eq!(game.winner_seat, Some(other_seat));
        assert_eq!(game.winner_hand_rank, None);
        assert_eq!(game.amount_won, 30);
        assert_eq!(game.seats[actor_seat].state, SeatState::Folded);
    }

    #[test]
    fn too_few_players_rejects_start_hand() {
        let mut game = GameState::create(1, 2, 10, 20).unwrap();
        game.add_player(100, "alice".into(), 0, 1000).unwrap();
        assert_eq!(game.start_hand(), Err(GameError::TooFewPlayers));
    }

    #[test]
    fn second_start_hand_while_in_progress_is_rejected() {
        let mut game = two_player_game(10, 20, 1000);
        game.start_hand().unwrap();
        assert_eq!(game.start_hand(), Err(GameError::InProgress));
    }

    #[test]
    fn checking_down_every_street_reaches_showdown() {
        let mut game = two_player_game(10, 20, 1000);
        game.start_hand().unwrap();

        for _ in 0..100 {
            if !game.hand_in_progress {
                break;
            }
            let seat = game.active_seat.expect("a hand in progress has an actor");
            let user_id = game.seats[seat].player_id;
            let actions = game.available_actions(user_id);
            let pick = actions
                .iter()
                .find(|a| a.label == "check")
                .or_else(|| actions.iter().find(|a| a.label == "call"))
                .expect("check or call is always legal for the acting player");
            let action = if pick.label == "check" {
                Action::Check
            } else {
                Action::Call
            };
            game.process_action(user_id, action).unwrap();
        }

        assert!(!game.hand_in_progress);
        assert_eq!(game.community_cards.len(), 5);
        assert!(game.winner_hand_rank.is_some());
        assert_eq!(game.betting_round, BettingRound::Complete);
    }

    #[test]
    fn raise_then_call_closes_the_betting_round_and_deals_the_flop() {
        let mut game = two_player_game(10, 20, 1000);
        game.start_hand().unwrap();

        let raiser_seat = game.active_seat.unwrap();
        let raiser_id = game.seats[raiser_seat].player_id;
        let raise_to = game.current_bet + game.min_raise;
        game.process_action(raiser_id, Action::Raise(raise_to)).unwrap();
        assert_eq!(game.current_bet, raise_to);
        assert_eq!(game.last_aggressor_seat, Some(raiser_seat));
        assert!(game.hand_in_progress);
        assert_eq!(game.betting_round, BettingRound::Preflop);

        let caller_seat = game.active_seat.unwrap();
        let caller_id = game.seats[caller_seat].player_id;
        game.process_action(caller_id, Action::Call).unwrap();

        assert_eq!(game.betting_round, BettingRound::Flop);
        assert_eq!(game.community_cards.len(), 3);
        assert!(game.hand_in_progress);
        assert_eq!(game.current_bet, 0);
        assert_eq!(game.last_aggressor_seat, None);
    }

    #[test]
    fn shoving_both_players_all_in_skips_straight_to_showdown() {
        let mut game = two_player_game(5, 10, 200);
        game.start_hand().unwrap();

        let first_seat = game.active_seat.unwrap();
        let first_id = game.seats[first_seat].player_id;
        game.process_action(first_id, Action::AllIn).unwrap();
        assert!(game.hand_in_progress);

        let second_seat = game.active_seat.unwrap();
        let second_id = game.seats[second_seat].player_id;
        game.process_action(second_id, Action::AllIn).unwrap();

        assert!(!game.hand_in_progress);
        assert_eq!(game.community_cards.len(), 5);
        assert_eq!(game.amount_won, 400);
        assert!(game.winner_hand_rank.is_some());
        assert_eq!(game.seats[0].money + game.seats[1].money, 400);
    }

    #[test]
    fn busted_player_is_swept_after_the_hand_and_seat_freed() {
        let mut game = two_player_game(10, 20, 1000);
        game.start_hand().unwrap();
        let loser_seat = game.active_seat.unwrap();
        let loser_id = game.seats[loser_seat].player_id;
        game.seats[loser_seat].money = 0;
        game.process_action(loser_id, Action::Fold).unwrap();

        let removed = game.sweep_busted_players();
        assert_eq!(removed, vec![loser_seat]);
        assert!(game.seats[loser_seat].is_empty());
    }

    #[test]
    fn available_actions_is_empty_when_it_is_not_your_turn() {
        let mut game = two_player_game(10, 20, 1000);
        game.start_hand().unwrap();
        let actor_seat = game.active_seat.unwrap();
        let other_id = game.seats[1 - actor_seat].player_id;
        assert!(game.available_actions(other_id).is_empty());
    }

    #[test]
    fn seat_and_buy_in_validation_errors() {
        let mut game = GameState::create(1, 2, 10, 20).unwrap();
        assert_eq!(
            game.add_player(1, "a".into(), 5, 1000),
            Err(GameError::SeatInvalid)
        );
        assert_eq!(
            game.add_player(1, "a".into(), 0, 1),
            Err(GameError::BuyInOutOfRange)
        );
        game.add_player(1, "a".into(), 0, 1000).unwrap();
        assert_eq!(
            game.add_player(2, "b".into(), 0, 1000),
            Err(GameError::SeatTaken)
        );
    }
}
