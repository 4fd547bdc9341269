//! Life exchange evaluator behavior.
//!
//! Covers the three known life exchange cards and the cost-free trigger
//! target selection, driven through a sandbox table.

use ccg_ability_ai::ai::{AbilityEvaluator, AiContext, LifeExchangeAi};
use ccg_ability_ai::cards::{Ability, AbilityCost, AbilityId, Card, CardId, Effect, Target, TargetSpec};
use ccg_ability_ai::core::{AiConfig, GameRng, PlayerId, RandomSource};
use ccg_ability_ai::game::{Combat, GameView, Phase, Zone};
use ccg_ability_ai::sandbox::{ScriptedAdvisor, Table};
use std::ops::Range;

const AGENT: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);
const P2: PlayerId = PlayerId::new(2);

const SOURCE: CardId = CardId::new(10);

fn source_card(name: &str, power: i32, toughness: i32) -> Card {
    Card::new(SOURCE, name, AGENT)
        .creature(power, toughness)
        .in_zone(Zone::Battlefield)
}

fn permanent(id: u32, name: &str, controller: PlayerId) -> Card {
    Card::new(CardId::new(id), name, controller).in_zone(Zone::Battlefield)
}

fn redemption() -> Ability {
    Ability::new(AbilityId::new(1), SOURCE, Effect::life_exchange_for("Tree of Redemption"))
        .with_cost(AbilityCost::tap())
}

fn perdition() -> Ability {
    Ability::new(AbilityId::new(2), SOURCE, Effect::life_exchange_for("Tree of Perdition"))
        .with_cost(AbilityCost::tap())
        .with_target(TargetSpec::single_opponent())
}

fn evra() -> Ability {
    Ability::new(AbilityId::new(3), SOURCE, Effect::life_exchange_for("Evra, Halcyon Witness"))
        .with_cost(AbilityCost::mana("4".parse().unwrap()))
}

fn can_play_with(table: &Table, advisor: &ScriptedAdvisor, config: &AiConfig, ability: &mut Ability) -> bool {
    let mut rng = GameRng::new(42);
    let mut ctx = AiContext::new(AGENT, table, advisor, advisor, config, &mut rng);
    LifeExchangeAi.can_play(&mut ctx, ability)
}

fn can_play(table: &Table, advisor: &ScriptedAdvisor, ability: &mut Ability) -> bool {
    can_play_with(table, advisor, &AiConfig::default(), ability)
}

/// Fire a trigger whose source sits on the agent's battlefield.
fn trigger(table: &Table, ability: &mut Ability, mandatory: bool) -> bool {
    let table = table.clone().with_card(source_card("Tree of Perdition", 0, 3));
    let advisor = ScriptedAdvisor::new();
    let config = AiConfig::default();
    let mut rng = GameRng::new(42);
    let mut ctx = AiContext::new(AGENT, &table, &advisor, &advisor, &config, &mut rng);
    LifeExchangeAi.do_trigger_no_cost(&mut ctx, ability, mandatory)
}

fn targeted_players(ability: &Ability) -> Vec<PlayerId> {
    ability.targets().players().collect()
}

/// Always returns the value it was built with, clamped into the range.
struct Pinned(i32);

impl RandomSource for Pinned {
    fn next_in_range(&mut self, range: Range<i32>) -> i32 {
        self.0.clamp(range.start, range.end - 1)
    }
}

// --- Tree of Redemption ---------------------------------------------------

#[test]
fn test_heal_held_back_at_comfortable_life() {
    let table = Table::new(2)
        .with_life(AGENT, 5)
        .with_card(source_card("Tree of Redemption", 0, 10));
    assert!(!can_play(&table, &ScriptedAdvisor::new(), &mut redemption()));
}

#[test]
fn test_heal_below_comfortable_life() {
    let table = Table::new(2)
        .with_life(AGENT, 4)
        .with_card(source_card("Tree of Redemption", 0, 10));
    assert!(can_play(&table, &ScriptedAdvisor::new(), &mut redemption()));
}

#[test]
fn test_heal_in_serious_danger() {
    let table = Table::new(2)
        .with_life(AGENT, 3)
        .with_card(source_card("Tree of Redemption", 0, 10));
    let advisor = ScriptedAdvisor::new().in_danger(AGENT);
    assert!(can_play(&table, &advisor, &mut redemption()));

    // Danger overrides a comfortable life total.
    let table = table.with_life(AGENT, 8);
    assert!(can_play(&table, &advisor, &mut redemption()));
}

#[test]
fn test_heal_needs_net_gain() {
    let advisor = ScriptedAdvisor::new().in_danger(AGENT);
    for life in [9, 10, 15] {
        let table = Table::new(2)
            .with_life(AGENT, life)
            .with_card(source_card("Tree of Redemption", 0, 10));
        assert!(!can_play(&table, &advisor, &mut redemption()), "life {life}");
    }
}

#[test]
fn test_heal_blocked_by_punisher_under_any_control() {
    let advisor = ScriptedAdvisor::new().in_danger(AGENT);
    for controller in [AGENT, P1] {
        let table = Table::new(2)
            .with_life(AGENT, 2)
            .with_card(source_card("Tree of Redemption", 0, 10))
            .with_card(permanent(20, "Sulfuric Vortex", controller));
        assert!(!can_play(&table, &advisor, &mut redemption()));
    }
}

#[test]
fn test_heal_blocked_only_by_opponent_redirector() {
    let advisor = ScriptedAdvisor::new().in_danger(AGENT);
    let base = Table::new(2)
        .with_life(AGENT, 2)
        .with_card(source_card("Tree of Redemption", 0, 10));

    let theirs = base.clone().with_card(permanent(20, "Tainted Remedy", P1));
    assert!(!can_play(&theirs, &advisor, &mut redemption()));

    let ours = base.with_card(permanent(20, "Tainted Remedy", AGENT));
    assert!(can_play(&ours, &advisor, &mut redemption()));
}

#[test]
fn test_heal_requires_life_gain() {
    let mut table = Table::new(2)
        .with_life(AGENT, 2)
        .with_card(source_card("Tree of Redemption", 0, 10));
    table.seat_mut(AGENT).can_gain_life = false;
    assert!(!can_play(&table, &ScriptedAdvisor::new().in_danger(AGENT), &mut redemption()));
}

#[test]
fn test_heal_waits_for_blocking() {
    let table = Table::new(2)
        .with_life(AGENT, 2)
        .with_card(source_card("Tree of Redemption", 0, 10));
    let advisor = ScriptedAdvisor::new().waiting_for_blocking();
    assert!(!can_play(&table, &advisor, &mut redemption()));
}

#[test]
fn test_unknown_source_fails_closed() {
    let table = Table::new(2)
        .with_life(AGENT, 1)
        .with_card(source_card("Grizzly Bears", 2, 2));
    let mut ability = Ability::new(AbilityId::new(9), SOURCE, Effect::life_exchange_for("Grizzly Bears"));
    assert!(!can_play(&table, &ScriptedAdvisor::new().in_danger(AGENT), &mut ability));
}

#[test]
fn test_missing_source_card_fails_closed() {
    let table = Table::new(2).with_life(AGENT, 1);
    assert!(!can_play(&table, &ScriptedAdvisor::new().in_danger(AGENT), &mut redemption()));
}

// --- Tree of Perdition ----------------------------------------------------

#[test]
fn test_drain_selects_low_life_opponent() {
    let table = Table::new(3)
        .with_life(P1, 2)
        .with_life(P2, 20)
        .with_card(source_card("Tree of Perdition", 0, 3));
    let mut ability = perdition();

    assert!(can_play(&table, &ScriptedAdvisor::new(), &mut ability));
    assert_eq!(targeted_players(&ability), vec![P1]);
}

#[test]
fn test_drain_is_first_fit_in_seat_order() {
    // Both opponents qualify; the earlier seat wins even though the later
    // one has the lower life total.
    let table = Table::new(3)
        .with_life(P1, 20)
        .with_life(P2, 2)
        .with_card(source_card("Tree of Perdition", 0, 3));
    let mut ability = perdition();

    assert!(can_play(&table, &ScriptedAdvisor::new(), &mut ability));
    assert_eq!(targeted_players(&ability), vec![P1]);
}

#[test]
fn test_drain_skips_untargetable_and_immune_opponents() {
    let mut table = Table::new(4)
        .with_life(P1, 20)
        .with_life(P2, 20)
        .with_card(source_card("Tree of Perdition", 0, 3));
    table.seat_mut(P1).hexproof = true;
    table.seat_mut(P2).can_lose_life = false;
    let mut ability = perdition();

    assert!(can_play(&table, &ScriptedAdvisor::new(), &mut ability));
    assert_eq!(targeted_players(&ability), vec![PlayerId::new(3)]);
}

#[test]
fn test_drain_small_swap_needs_redirector() {
    let base = Table::new(2)
        .with_life(P1, 1)
        .with_card(source_card("Tree of Perdition", 0, 10));

    let mut ability = perdition();
    assert!(!can_play(&base, &ScriptedAdvisor::new(), &mut ability));
    assert!(ability.targets().is_empty());

    let with_remedy = base.with_card(permanent(20, "Tainted Remedy", AGENT));
    let mut ability = perdition();
    assert!(can_play(&with_remedy, &ScriptedAdvisor::new(), &mut ability));
    assert_eq!(targeted_players(&ability), vec![P1]);
}

#[test]
fn test_drain_redirector_useless_when_opponent_cannot_gain() {
    let mut table = Table::new(2)
        .with_life(P1, 1)
        .with_card(source_card("Tree of Perdition", 0, 10))
        .with_card(permanent(20, "Tainted Remedy", AGENT));
    table.seat_mut(P1).can_gain_life = false;
    assert!(!can_play(&table, &ScriptedAdvisor::new(), &mut perdition()));
}

#[test]
fn test_drain_uses_ally_redirector() {
    // Seat 2 is the agent's teammate and controls the redirector.
    let table = Table::new(3)
        .with_team(P2, 0)
        .with_life(P1, 1)
        .with_card(source_card("Tree of Perdition", 0, 10))
        .with_card(permanent(20, "Tainted Remedy", P2));
    let mut ability = perdition();

    assert!(can_play(&table, &ScriptedAdvisor::new(), &mut ability));
    assert_eq!(targeted_players(&ability), vec![P1]);
}

#[test]
fn test_drain_waits_for_blocking_and_clears_targets() {
    let table = Table::new(3)
        .with_life(P1, 20)
        .with_card(source_card("Tree of Perdition", 0, 3));
    let mut ability = perdition();
    assert!(ability.add_target(Target::Player(P2)));

    let advisor = ScriptedAdvisor::new().waiting_for_blocking();
    assert!(!can_play(&table, &advisor, &mut ability));
    assert!(ability.targets().is_empty());
}

/// A table where two players on different teams are not opponents of each
/// other. Everything else is answered by the table.
struct Truce {
    table: Table,
    between: (PlayerId, PlayerId),
}

impl GameView for Truce {
    fn life(&self, player: PlayerId) -> i32 {
        self.table.life(player)
    }

    fn can_gain_life(&self, player: PlayerId) -> bool {
        self.table.can_gain_life(player)
    }

    fn can_lose_life(&self, player: PlayerId) -> bool {
        self.table.can_lose_life(player)
    }

    fn opponents(&self, player: PlayerId) -> Vec<PlayerId> {
        self.table.opponents(player)
    }

    fn allies(&self, player: PlayerId) -> Vec<PlayerId> {
        self.table.allies(player)
    }

    fn is_opponent_of(&self, player: PlayerId, other: PlayerId) -> bool {
        let (a, b) = self.between;
        let at_peace = (player, other) == (a, b) || (player, other) == (b, a);
        !at_peace && self.table.is_opponent_of(player, other)
    }

    fn can_be_targeted_by(&self, player: PlayerId, ability: &Ability) -> bool {
        self.table.can_be_targeted_by(player, ability)
    }

    fn card(&self, id: CardId) -> Option<&Card> {
        self.table.card(id)
    }

    fn controls_card_named(&self, player: PlayerId, name: &str) -> bool {
        self.table.controls_card_named(player, name)
    }

    fn is_card_in_play(&self, name: &str) -> bool {
        self.table.is_card_in_play(name)
    }

    fn cards_in_zone(&self, player: PlayerId, zone: Zone) -> usize {
        self.table.cards_in_zone(player, zone)
    }

    fn count_named_in_all_graveyards(&self, name: &str) -> usize {
        self.table.count_named_in_all_graveyards(name)
    }

    fn hand_abilities(&self, player: PlayerId) -> Vec<Ability> {
        self.table.hand_abilities(player)
    }

    fn phase(&self) -> Phase {
        self.table.phase()
    }

    fn active_player(&self) -> PlayerId {
        self.table.active_player()
    }

    fn combat(&self) -> Option<&Combat> {
        self.table.combat()
    }

    fn stack_top(&self) -> Option<&Ability> {
        self.table.stack_top()
    }

    fn available_mana_sources(&self, player: PlayerId) -> usize {
        self.table.available_mana_sources(player)
    }

    fn can_activate_for_cost(&self, player: PlayerId, ability: &Ability) -> bool {
        self.table.can_activate_for_cost(player, ability)
    }
}

#[test]
fn test_drain_ignores_ally_redirector_against_non_enemy() {
    // The ally holds the redirector, but the candidate is not the ally's
    // opponent, so the ally's redirector does not apply to them.
    let table = Table::new(3)
        .with_team(P2, 0)
        .with_life(P1, 1)
        .with_card(source_card("Tree of Perdition", 0, 10))
        .with_card(permanent(20, "Tainted Remedy", P2));
    let truce = Truce { table, between: (P1, P2) };

    let advisor = ScriptedAdvisor::new();
    let config = AiConfig::default();
    let mut rng = GameRng::new(42);
    let mut ctx = AiContext::new(AGENT, &truce, &advisor, &advisor, &config, &mut rng);
    let mut ability = perdition();

    assert!(!LifeExchangeAi.can_play(&mut ctx, &mut ability));
    assert!(ability.targets().is_empty());
}

// --- Evra, Halcyon Witness ------------------------------------------------

#[test]
fn test_power_swap_when_in_danger() {
    let table = Table::new(2)
        .with_life(AGENT, 5)
        .with_card(source_card("Evra, Halcyon Witness", 10, 10));
    assert!(can_play(&table, &ScriptedAdvisor::new().in_danger(AGENT), &mut evra()));
    assert!(!can_play(&table, &ScriptedAdvisor::new(), &mut evra()));
}

#[test]
fn test_power_swap_against_lethal_on_stack() {
    let bolt = Ability::new(AbilityId::new(50), CardId::new(50), Effect::Other("damage".into()));
    let table = Table::new(2)
        .with_life(AGENT, 5)
        .with_card(source_card("Evra, Halcyon Witness", 10, 10))
        .with_stack_top(bolt);

    let lethal = ScriptedAdvisor::new().predicts_damage(AbilityId::new(50), 5);
    assert!(can_play(&table, &lethal, &mut evra()));

    let survivable = ScriptedAdvisor::new().predicts_damage(AbilityId::new(50), 4);
    assert!(!can_play(&table, &survivable, &mut evra()));
}

#[test]
fn test_power_swap_needs_power_above_life_for_emergencies() {
    let table = Table::new(2)
        .with_life(AGENT, 10)
        .with_card(source_card("Evra, Halcyon Witness", 10, 10));
    assert!(!can_play(&table, &ScriptedAdvisor::new().in_danger(AGENT), &mut evra()));
}

fn blockers_step(agent_life: i32, defender_life: i32, power: i32, combat: Combat) -> Table {
    Table::new(2)
        .with_phase(Phase::CombatDeclareBlockers, AGENT)
        .with_life(AGENT, agent_life)
        .with_life(P1, defender_life)
        .with_card(source_card("Evra, Halcyon Witness", power, 4))
        .with_combat(combat)
}

#[test]
fn test_power_swap_unblocked_race() {
    let unblocked = Combat::new().attack(SOURCE, P1);
    let table = blockers_step(10, 8, 4, unblocked);
    let high_threshold = AiConfig::default().with_danger_range(20, 20);
    assert!(can_play_with(&table, &ScriptedAdvisor::new(), &high_threshold, &mut evra()));

    // Defender ahead on life: the swap does not pay off.
    let table = blockers_step(10, 12, 4, Combat::new().attack(SOURCE, P1));
    assert!(!can_play_with(&table, &ScriptedAdvisor::new(), &high_threshold, &mut evra()));
}

#[test]
fn test_power_swap_unblocked_race_needs_defender_to_lose_life() {
    let mut table = blockers_step(10, 8, 4, Combat::new().attack(SOURCE, P1));
    table.seat_mut(P1).can_lose_life = false;
    let high_threshold = AiConfig::default().with_danger_range(20, 20);
    assert!(!can_play_with(&table, &ScriptedAdvisor::new(), &high_threshold, &mut evra()));
}

#[test]
fn test_power_swap_big_attacker_against_threshold() {
    let blocked = Combat::new().attack(SOURCE, P1).block(SOURCE, CardId::new(77));
    let table = blockers_step(10, 20, 5, blocked);

    assert!(can_play(&table, &ScriptedAdvisor::new(), &mut evra()));

    let cautious = AiConfig::default().with_danger_range(6, 6);
    assert!(!can_play_with(&table, &ScriptedAdvisor::new(), &cautious, &mut evra()));
}

#[test]
fn test_power_swap_threshold_comes_from_random_source() {
    let blocked = Combat::new().attack(SOURCE, P1).block(SOURCE, CardId::new(77));
    let table = blockers_step(10, 20, 5, blocked);
    let config = AiConfig::default().with_danger_range(2, 9);
    let advisor = ScriptedAdvisor::new();

    for (pinned, expected) in [(3, true), (5, true), (6, false), (8, false)] {
        let mut rng = Pinned(pinned);
        let mut ctx = AiContext::new(AGENT, &table, &advisor, &advisor, &config, &mut rng);
        assert_eq!(LifeExchangeAi.can_play(&mut ctx, &mut evra()), expected, "threshold {pinned}");
    }
}

#[test]
fn test_power_swap_outside_declare_blockers() {
    let blocked = Combat::new().attack(SOURCE, P1).block(SOURCE, CardId::new(77));
    let table = blockers_step(10, 20, 5, blocked).with_phase(Phase::CombatDamage, AGENT);
    assert!(!can_play(&table, &ScriptedAdvisor::new(), &mut evra()));
}

#[test]
fn test_power_swap_requires_life_gain() {
    let mut table = Table::new(2)
        .with_life(AGENT, 5)
        .with_card(source_card("Evra, Halcyon Witness", 10, 10));
    table.seat_mut(AGENT).can_gain_life = false;
    assert!(!can_play(&table, &ScriptedAdvisor::new().in_danger(AGENT), &mut evra()));
}

// --- Triggers --------------------------------------------------------------

#[test]
fn test_untargeted_trigger_proceeds() {
    let table = Table::new(2).with_life(AGENT, 20).with_life(P1, 1);
    assert!(trigger(&table, &mut redemption(), false));
}

#[test]
fn test_targeted_trigger_only_voluntary_when_behind() {
    let behind = Table::new(2).with_life(AGENT, 10).with_life(P1, 20);
    let mut ability = perdition();
    assert!(trigger(&behind, &mut ability, false));
    assert_eq!(targeted_players(&ability), vec![P1]);

    let ahead = Table::new(2).with_life(AGENT, 20).with_life(P1, 10);
    let mut ability = perdition();
    assert!(!trigger(&ahead, &mut ability, false));
    assert!(ability.targets().is_empty());

    let even = Table::new(2).with_life(AGENT, 10).with_life(P1, 10);
    assert!(!trigger(&even, &mut perdition(), false));
}

#[test]
fn test_mandatory_trigger_targets_even_when_ahead() {
    let table = Table::new(2).with_life(AGENT, 20).with_life(P1, 10);
    let mut ability = perdition();
    assert!(trigger(&table, &mut ability, true));
    assert_eq!(targeted_players(&ability), vec![P1]);
}

#[test]
fn test_trigger_without_legal_target() {
    let solo = Table::new(1);
    assert!(!trigger(&solo, &mut perdition(), true));

    let mut shielded = Table::new(2).with_life(AGENT, 1);
    shielded.seat_mut(P1).hexproof = true;
    assert!(!trigger(&shielded, &mut perdition(), true));
}

#[test]
fn test_trigger_selection_is_repeatable() {
    let table = Table::new(3).with_life(AGENT, 5).with_life(P1, 20);
    let mut ability = perdition();

    assert!(trigger(&table, &mut ability, false));
    let first = targeted_players(&ability);
    assert!(trigger(&table, &mut ability, false));
    assert_eq!(targeted_players(&ability), first);
}

#[test]
fn test_trigger_designates_weakest_opponent() {
    let table = Table::new(3)
        .with_life(AGENT, 10)
        .with_life(P1, 30)
        .with_life(P2, 5);

    let mut ability = perdition();
    assert!(trigger(&table, &mut ability, true));
    assert_eq!(targeted_players(&ability), vec![P2]);

    // Behind the first seat but ahead of the weakest: not voluntary.
    let mut ability = perdition();
    assert!(!trigger(&table, &mut ability, false));
    assert!(ability.targets().is_empty());
}

#[test]
fn test_trigger_weakest_opponent_tie_keeps_seat_order() {
    let table = Table::new(3)
        .with_life(AGENT, 3)
        .with_life(P1, 7)
        .with_life(P2, 7);
    let mut ability = perdition();
    assert!(trigger(&table, &mut ability, false));
    assert_eq!(targeted_players(&ability), vec![P1]);
}
