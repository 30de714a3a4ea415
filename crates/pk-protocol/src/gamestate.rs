use crate::Map;
use crate::Value;
use pk_cards::Card;
use pk_gameplay::BettingRound;
use pk_gameplay::GameState;
use pk_gameplay::SeatState;

fn card_to_wire(card: Option<Card>) -> i64 {
    card.map(|c| c.wire_index() as i64).unwrap_or(-1)
}

fn seat_state_label(state: SeatState) -> &'static str {
    match state {
        SeatState::Empty => "empty",
        SeatState::Waiting => "waiting",
        SeatState::Active => "active",
        SeatState::Folded => "folded",
        SeatState::AllIn => "all_in",
        SeatState::SittingOut => "sitting_out",
    }
}

/// Encodes a table's full state as seen by `viewer_user_id` (or, if `None`,
/// a fully-redacted spectator view). Hole cards are revealed only for the
/// viewer's own seat, or for every seat once the hand reaches showdown.
pub fn encode_game_state(game: &GameState, viewer_user_id: Option<i64>) -> Map {
    let showdown = matches!(game.betting_round, BettingRound::Showdown | BettingRound::Complete)
        && game.winner_hand_rank.is_some();

    let players: Vec<Value> = game
        .seats
        .iter()
        .map(|seat| {
            if seat.is_empty() {
                return Value::Null;
            }
            let reveal = showdown || Some(seat.player_id) == viewer_user_id;
            let hole = if reveal {
                [card_to_wire(seat.hole_cards[0]), card_to_wire(seat.hole_cards[1])]
            } else {
                [-1, -1]
            };
            Value::Map(
                Map::new()
                    .set("seat", Value::Int(seat.seat as i64))
                    .set("player_id", Value::Int(seat.player_id))
                    .set("name", Value::Str(seat.name.clone()))
                    .set("state", Value::Str(seat_state_label(seat.state).to_string()))
                    .set("money", Value::Int(seat.money))
                    .set("bet", Value::Int(seat.bet))
                    .set("total_bet", Value::Int(seat.total_bet))
                    .set("is_dealer", Value::Bool(seat.is_dealer))
                    .set("is_small_blind", Value::Bool(seat.is_small_blind))
                    .set("is_big_blind", Value::Bool(seat.is_big_blind))
                    .set("is_bot", Value::Bool(seat.is_bot))
                    .set("hole", Value::List(vec![Value::Int(hole[0]), Value::Int(hole[1])])),
            )
        })
        .collect();

    let community_cards: Vec<Value> = game
        .community_cards
        .iter()
        .map(|c| Value::Int(c.wire_index() as i64))
        .collect();

    let side_pots: Vec<Value> = game
        .side_pots
        .iter()
        .map(|pot| {
            Value::Map(Map::new().set("amount", Value::Int(pot.amount)).set(
                "eligible_players",
                Value::List(pot.eligible.iter().map(|&s| Value::Int(s as i64)).collect()),
            ))
        })
        .collect();

    let mut map = Map::new()
        .set("game_id", Value::Int(game.game_id))
        .set("hand_id", Value::Int(game.hand_id as i64))
        .set("seq", Value::Int(game.seq as i64))
        .set("max_players", Value::Int(game.max_players as i64))
        .set("small_blind", Value::Int(game.small_blind))
        .set("big_blind", Value::Int(game.big_blind))
        .set("min_buy_in", Value::Int(game.min_buy_in))
        .set("max_buy_in", Value::Int(game.max_buy_in))
        .set("betting_round", Value::Str(game.betting_round.as_str().to_string()))
        .set(
            "dealer_seat",
            Value::Int(game.dealer_seat.map(|s| s as i64).unwrap_or(-1)),
        )
        .set(
            "active_seat",
            Value::Int(game.active_seat.map(|s| s as i64).unwrap_or(-1)),
        )
        .set("players", Value::List(players))
        .set("community_cards", Value::List(community_cards))
        .set("main_pot", Value::Int(game.main_pot.amount))
        .set("side_pots", Value::List(side_pots))
        .set("current_bet", Value::Int(game.current_bet))
        .set("min_raise", Value::Int(game.min_raise));

    if let (Some(active_seat), Some(viewer)) = (game.active_seat, viewer_user_id) {
        if game.seats[active_seat].player_id == viewer {
            let actions: Vec<Value> = game
                .available_actions(viewer)
                .into_iter()
                .map(|a| {
                    Value::Map(
                        Map::new()
                            .set("label", Value::Str(a.label.to_string()))
                            .set("min_amount", Value::Int(a.min_amount))
                            .set("max_amount", Value::Int(a.max_amount))
                            .set("increment", Value::Int(a.increment)),
                    )
                })
                .collect();
            map = map.set("available_actions", Value::List(actions));
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hole_cards_are_redacted_for_non_owning_viewers() {
        let mut game = GameState::create(1, 2, 10, 20).unwrap();
        game.add_player(100, "alice".into(), 0, 1000).unwrap();
        game.add_player(200, "bob".into(), 1, 1000).unwrap();
        game.start_hand().unwrap();

        let view = encode_game_state(&game, Some(999));
        let players = view.get_list("players").unwrap();
        for p in players {
            if let Value::Map(seat) = p {
                let hole = seat.get_list("hole").unwrap();
                assert_eq!(hole, &[Value::Int(-1), Value::Int(-1)]);
            }
        }
    }

    #[test]
    fn owning_viewer_sees_their_own_hole_cards() {
        let mut game = GameState::create(1, 2, 10, 20).unwrap();
        game.add_player(100, "alice".into(), 0, 1000).unwrap();
        game.add_player(200, "bob".into(), 1, 1000).unwrap();
        game.start_hand().unwrap();

        let view = encode_game_state(&game, Some(100));
        let players = view.get_list("players").unwrap();
        let alice_seat = players
            .iter()
            .find_map(|p| match p {
                Value::Map(m) if m.get_int("player_id") == Some(100) => Some(m),
                _ => None,
            })
            .unwrap();
        let hole = alice_seat.get_list("hole").unwrap();
        assert_ne!(hole, &[Value::Int(-1), Value::Int(-1)]);
    }
}
