//! Simulation tick
//!
//! Advances the world by one step. Order matters:
//! 1. player / vehicle controls and enter-exit
//! 2. NPC steering, tracking the freshly moved possessed entity
//! 3. NPC contact damage, so an NPC that just arrived can hit this tick
//! 4. camera

use super::input::{InputState, Presses};
use super::npc::Environment;
use super::player::Contact;
use super::state::{SimEvent, SimulationState};
use super::vehicle::Drive;

/// Advance the simulation by one tick. Does nothing before `start_session`.
pub fn tick(state: &mut SimulationState, input: &InputState) {
    if !state.is_running() {
        return;
    }

    state.events.clear();
    state.tick_count += 1;
    let presses = input.presses_since(&state.previous_input);

    if state.player.alive {
        apply_controls(state, input, presses);
    } else if presses.restart {
        state.restart();
        state.events.push(SimEvent::Restarted);
    }

    update_npcs(state);
    resolve_contacts(state);

    let target = state.tracked_position();
    state.camera.follow(target, state.bounds);

    state.previous_input = *input;
}

fn apply_controls(state: &mut SimulationState, input: &InputState, presses: Presses) {
    let bounds = state.bounds;

    if state.player.in_car {
        if state.vehicle.drive(input, state.obstacles.rects(), bounds) == Drive::Crashed {
            log::debug!("Vehicle crashed at {:?}", state.vehicle.pos);
            state.events.push(SimEvent::VehicleCrashed);
        }
        if presses.interact {
            state.player.exit_vehicle(state.vehicle.pos, bounds);
            log::info!("Left vehicle at {:?}", state.player.pos);
            state.events.push(SimEvent::ExitedVehicle);
        }
    } else {
        state.player.walk(
            input,
            state.obstacles.rects(),
            bounds,
            state.settings.normalize_diagonal,
        );
        if presses.interact && state.player.can_reach(state.vehicle.pos) {
            state.player.enter_vehicle(state.vehicle.pos);
            log::info!("Entered vehicle at {:?}", state.vehicle.pos);
            state.events.push(SimEvent::EnteredVehicle);
        }
    }
}

fn update_npcs(state: &mut SimulationState) {
    let env = Environment {
        tracked: state.tracked_position(),
        obstacles: state.obstacles.rects(),
        bounds: state.bounds,
    };
    for npc in &mut state.npcs {
        npc.update(&env, &mut state.rng);
    }
}

fn resolve_contacts(state: &mut SimulationState) {
    if state.player.alive && !state.player.in_car {
        match state.player.resolve_contact(state.npcs.iter().map(|npc| npc.rect())) {
            Contact::None => {}
            Contact::Damaged { health } => {
                log::debug!("Player hit, health {health}");
                state.events.push(SimEvent::PlayerDamaged { health });
            }
            Contact::Died => {
                log::info!("Player died after {} ticks", state.tick_count);
                state.events.push(SimEvent::PlayerDamaged { health: 0 });
                state.events.push(SimEvent::PlayerDied);
            }
        }
    }
    state.player.cool_down();
}
