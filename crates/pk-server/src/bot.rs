use pk_gameplay::Action;
use pk_gameplay::GameState;

/// Bot's player id sentinel, matching `convert_to_bot`'s contract.
const BOT_PLAYER_ID: i64 = -1;

/// Drives check-or-fold bot turns until a human is on the clock or the hand
/// completes, bounded so a misbehaving hand can't spin the dispatch task
/// forever.
pub fn drive_bots(game: &mut GameState) {
    for _ in 0..pk_core::MAX_BOT_ACTIONS_PER_TURN {
        let Some(seat) = game.active_seat else {
            return;
        };
        if !game.seats[seat].is_bot {
            return;
        }
        let actions = game.available_actions(BOT_PLAYER_ID);
        let action = if actions.iter().any(|a| a.label == "check") {
            Action::Check
        } else {
            Action::Fold
        };
        if game.process_action(BOT_PLAYER_ID, action).is_err() {
            log::warn!("[bot] seat {} action rejected, stopping bot loop", seat);
            return;
        }
    }
    log::warn!("[bot] hit the bot-action bound without reaching a human turn");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_checks_when_legal_else_folds() {
        let mut game = GameState::create(1, 2, 10, 20).unwrap();
        game.add_player(100, "alice".into(), 0, 1000).unwrap();
        game.add_player(200, "bob".into(), 1, 1000).unwrap();
        game.start_hand().unwrap();

        let active = game.active_seat.unwrap();
        game.convert_to_bot(active).unwrap();
        drive_bots(&mut game);

        // The bot folded or checked its way through; either the hand
        // concluded (heads-up fold) or the turn moved off the bot's seat.
        assert!(game.active_seat != Some(active) || !game.hand_in_progress);
    }
}
