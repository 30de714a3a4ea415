use pk_core::Chips;
use pk_core::Position;

/// A pot and the seats eligible to contest it. The engine only ever
/// populates `main_pot`; `side_pots` exists so the data model admits
/// side-pot accounting, but distribution always draws from the main pot
/// only (see design notes — side-pot distribution is a documented
/// non-goal).
#[derive(Debug, Clone, Default)]
pub struct Pot {
    pub amount: Chips,
    pub eligible: Vec<Position>,
}
