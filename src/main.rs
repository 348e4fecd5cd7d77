//! Sprawl Drive entry point
//!
//! Native builds run a headless session with a scripted driver and print the
//! final snapshot. The browser build is driven from JavaScript through
//! `platform::web` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sprawl_drive::Settings;
    use sprawl_drive::sim::{SimulationState, tick};

    env_logger::init();
    log::info!("Sprawl Drive (native, headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let ticks: u64 = match args.next().map(|s| s.parse()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!("Invalid tick count: {e}; running 600");
            600
        }
        None => 600,
    };

    let mut state = SimulationState::new(settings);
    state.start_default_session();

    for _ in 0..ticks {
        let input = autopilot::next_input(&state);
        tick(&mut state, &input);
        for event in &state.events {
            log::debug!("tick {}: {:?}", state.tick_count, event);
        }
    }

    let visible_npcs = state
        .npcs
        .iter()
        .filter(|npc| state.camera.is_visible(&npc.rect()))
        .count();
    log::info!(
        "Finished {} ticks: health={} in_car={} player={:?} vehicle={:?} npcs_on_screen={}",
        state.tick_count,
        state.player.health,
        state.player.in_car,
        state.player.pos,
        state.vehicle.pos,
        visible_npcs
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize snapshot: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_main, this is just to satisfy the compiler
}

/// Scripted driver for headless runs: walk to the vehicle, get in, drive laps
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use sprawl_drive::sim::{InputState, SimulationState};

    pub fn next_input(state: &SimulationState) -> InputState {
        let mut input = InputState::default();
        // Alternate so edge-triggered keys fire every other tick
        let pulse = state.tick_count % 2 == 0;

        if !state.player.alive {
            input.restart = pulse;
        } else if state.player.in_car {
            input.up = true;
            input.right = (state.tick_count / 90) % 2 == 0;
        } else if state.player.can_reach(state.vehicle.pos) {
            input.interact = pulse;
        } else {
            let delta = state.vehicle.pos - state.player.pos;
            let step = state.player.speed;
            input.left = delta.x < -step;
            input.right = delta.x > step;
            input.up = delta.y < -step;
            input.down = delta.y > step;
        }
        input
    }
}
