//! In-memory game snapshot.
//!
//! `Table` implements `GameView` over plain data so evaluators can be driven
//! without a rules engine: by tests, benchmarks, or a host that prefers to
//! copy its state out before asking the AI. Collections are `im` structures,
//! so cloning a table for a what-if is O(1).

use im::{HashSet as ImHashSet, OrdMap, Vector};
use serde::{Deserialize, Serialize};

use crate::cards::{Ability, AbilityId, Card, CardId};
use crate::core::{PlayerId, PlayerMap};
use crate::game::{Combat, GameView, Phase, Zone};

/// Per-player state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub life: i32,
    /// Players on the same team are allies, everyone else is an opponent.
    pub team: u8,
    pub can_gain_life: bool,
    pub can_lose_life: bool,
    /// Cannot be targeted.
    pub hexproof: bool,
    /// Untapped mana sources.
    pub mana_sources: usize,
}

impl Seat {
    fn new(team: u8) -> Self {
        Self {
            life: 20,
            team,
            can_gain_life: true,
            can_lose_life: true,
            hexproof: false,
            mana_sources: 0,
        }
    }
}

/// A game snapshot.
///
/// ```
/// use ccg_ability_ai::core::PlayerId;
/// use ccg_ability_ai::game::{GameView, Phase};
/// use ccg_ability_ai::sandbox::Table;
///
/// let table = Table::new(3)
///     .with_team(PlayerId::new(2), 0)
///     .with_phase(Phase::Main2, PlayerId::new(0));
///
/// assert_eq!(table.opponents(PlayerId::new(0)), vec![PlayerId::new(1)]);
/// assert_eq!(table.allies(PlayerId::new(0)), vec![PlayerId::new(2)]);
/// assert!(table.is_phase_for(Phase::Main2, PlayerId::new(0)));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Table {
    seats: PlayerMap<Seat>,
    cards: OrdMap<CardId, Card>,
    abilities: Vector<Ability>,
    /// Bottom first, top last.
    stack: Vector<Ability>,
    phase: Phase,
    active_player: PlayerId,
    combat: Option<Combat>,
    unpayable: ImHashSet<AbilityId>,
}

impl Table {
    /// Free-for-all table: each player on their own team, 20 life, first
    /// main phase of player 0.
    pub fn new(player_count: usize) -> Self {
        Self {
            seats: PlayerMap::new(player_count, |p| Seat::new(p.0)),
            cards: OrdMap::new(),
            abilities: Vector::new(),
            stack: Vector::new(),
            phase: Phase::Main1,
            active_player: PlayerId::new(0),
            combat: None,
            unpayable: ImHashSet::new(),
        }
    }

    /// Mutable access to a seat. Panics on a seat the table does not have.
    pub fn seat_mut(&mut self, player: PlayerId) -> &mut Seat {
        &mut self.seats[player]
    }

    #[must_use]
    pub fn with_phase(mut self, phase: Phase, active_player: PlayerId) -> Self {
        self.phase = phase;
        self.active_player = active_player;
        self
    }

    #[must_use]
    pub fn with_life(mut self, player: PlayerId, life: i32) -> Self {
        self.seat_mut(player).life = life;
        self
    }

    #[must_use]
    pub fn with_team(mut self, player: PlayerId, team: u8) -> Self {
        self.seat_mut(player).team = team;
        self
    }

    #[must_use]
    pub fn with_mana_sources(mut self, player: PlayerId, sources: usize) -> Self {
        self.seat_mut(player).mana_sources = sources;
        self
    }

    /// Add or replace a card.
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.insert(card.id, card);
        self
    }

    /// Add an ability of a card on the table.
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push_back(ability);
        self
    }

    /// Put an ability on top of the stack.
    #[must_use]
    pub fn with_stack_top(mut self, ability: Ability) -> Self {
        self.stack.push_back(ability);
        self
    }

    #[must_use]
    pub fn with_combat(mut self, combat: Combat) -> Self {
        self.combat = Some(combat);
        self
    }

    /// Mark an ability as impossible to pay for.
    #[must_use]
    pub fn with_unpayable(mut self, ability: AbilityId) -> Self {
        self.unpayable.insert(ability);
        self
    }

    /// Move a card to another zone.
    pub fn move_card(&mut self, card: CardId, zone: Zone) {
        if let Some(c) = self.cards.get_mut(&card) {
            c.zone = zone;
        }
    }

    fn seat(&self, player: PlayerId) -> Option<&Seat> {
        self.seats.get(player)
    }

    fn battlefield(&self) -> impl Iterator<Item = &Card> {
        self.cards.values().filter(|c| c.zone == Zone::Battlefield)
    }
}

impl GameView for Table {
    fn life(&self, player: PlayerId) -> i32 {
        self.seat(player).map_or(0, |s| s.life)
    }

    fn can_gain_life(&self, player: PlayerId) -> bool {
        self.seat(player).is_some_and(|s| s.can_gain_life)
    }

    fn can_lose_life(&self, player: PlayerId) -> bool {
        self.seat(player).is_some_and(|s| s.can_lose_life)
    }

    fn opponents(&self, player: PlayerId) -> Vec<PlayerId> {
        let Some(me) = self.seat(player) else {
            return Vec::new();
        };
        self.seats
            .iter()
            .filter(|(p, s)| *p != player && s.team != me.team)
            .map(|(p, _)| p)
            .collect()
    }

    fn allies(&self, player: PlayerId) -> Vec<PlayerId> {
        let Some(me) = self.seat(player) else {
            return Vec::new();
        };
        self.seats
            .iter()
            .filter(|(p, s)| *p != player && s.team == me.team)
            .map(|(p, _)| p)
            .collect()
    }

    fn is_opponent_of(&self, player: PlayerId, other: PlayerId) -> bool {
        match (self.seat(player), self.seat(other)) {
            (Some(a), Some(b)) => player != other && a.team != b.team,
            _ => false,
        }
    }

    fn can_be_targeted_by(&self, player: PlayerId, ability: &Ability) -> bool {
        let Some(seat) = self.seat(player) else {
            return false;
        };
        if seat.hexproof {
            return false;
        }
        let Some(spec) = &ability.target else {
            return true;
        };
        let actor = ability
            .activator
            .or_else(|| self.card(ability.host).map(|c| c.controller));
        match actor {
            Some(actor) => spec.allows_player(self, actor, player),
            None => false,
        }
    }

    fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    fn controls_card_named(&self, player: PlayerId, name: &str) -> bool {
        self.battlefield()
            .any(|c| c.controller == player && c.name == name)
    }

    fn is_card_in_play(&self, name: &str) -> bool {
        self.battlefield().any(|c| c.name == name)
    }

    fn cards_in_zone(&self, player: PlayerId, zone: Zone) -> usize {
        self.cards
            .values()
            .filter(|c| c.owner == player && c.zone == zone)
            .count()
    }

    fn count_named_in_all_graveyards(&self, name: &str) -> usize {
        self.cards
            .values()
            .filter(|c| c.zone == Zone::Graveyard && c.name == name)
            .count()
    }

    fn hand_abilities(&self, player: PlayerId) -> Vec<Ability> {
        self.abilities
            .iter()
            .filter(|a| {
                self.card(a.host)
                    .is_some_and(|c| c.owner == player && c.zone == Zone::Hand)
            })
            .cloned()
            .collect()
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn active_player(&self) -> PlayerId {
        self.active_player
    }

    fn combat(&self) -> Option<&Combat> {
        self.combat.as_ref()
    }

    fn stack_top(&self) -> Option<&Ability> {
        self.stack.last()
    }

    fn available_mana_sources(&self, player: PlayerId) -> usize {
        self.seat(player).map_or(0, |s| s.mana_sources)
    }

    fn can_activate_for_cost(&self, player: PlayerId, ability: &Ability) -> bool {
        !self.unpayable.contains(&ability.id)
            && ability.cost.mana_value() as usize <= self.available_mana_sources(player)
    }
}
