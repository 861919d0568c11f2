//! The game engine: owns the ECS world, the command queue, the seeded
//! RNG, and the round schedule, and advances everything one fixed tick
//! at a time.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use homebound_core::commands::PlayerCommand;
use homebound_core::components::Waypoint;
use homebound_core::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, FIRST_ROUND_DELAY_MS};
use homebound_core::enums::{EnemyKind, GamePhase};
use homebound_core::events::GameEvent;
use homebound_core::state::GameStateSnapshot;
use homebound_core::types::{Bounds, Position, SimTime};

use crate::systems;
use crate::systems::spawner::{ms_to_ticks, SpawnSchedule};
use crate::world_setup;

/// Session parameters fixed at engine construction.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub seed: u64,
    pub width: f64,
    pub height: f64,
    /// Starting level, 1-based.
    pub level: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            level: 1,
        }
    }
}

/// Headless game engine. Call [`queue_command`](Self::queue_command) to
/// feed input, then [`tick`](Self::tick) at the fixed rate; each tick
/// returns the snapshot to render.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    bounds: Bounds,
    start_level: u32,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    schedule: SpawnSchedule,
}

impl GameEngine {
    pub fn new(config: SimConfig) -> Self {
        assert!(config.level >= 1, "starting level is 1-based");
        assert!(
            config.width > 0.0 && config.height > 0.0,
            "viewport bounds must be positive"
        );
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::NotStarted,
            bounds: Bounds {
                width: config.width,
                height: config.height,
            },
            start_level: config.level,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            schedule: SpawnSchedule::idle(config.level),
        }
    }

    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. Commands queued since the last tick are applied first;
    /// systems only run while the game is in the Running phase.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.schedule.display_level,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> &SimTime {
        &self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn schedule(&self) -> &SpawnSchedule {
        &self.schedule
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase != GamePhase::NotStarted {
                    return;
                }
                world_setup::setup_session(&mut self.world, self.bounds);
                self.time = SimTime::default();
                self.schedule = SpawnSchedule::starting_at(
                    self.start_level,
                    ms_to_ticks(FIRST_ROUND_DELAY_MS),
                );
                self.phase = GamePhase::Running;
            }
            PlayerCommand::PointerClick { x, y } => {
                if self.phase != GamePhase::Running {
                    return;
                }
                for (_, (waypoint, position)) in
                    self.world.query_mut::<(&mut Waypoint, &mut Position)>()
                {
                    waypoint.active = true;
                    *position = Position::new(x, y);
                }
                self.events.push(GameEvent::WaypointSet { x, y });
            }
        }
    }

    fn run_systems(&mut self) {
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.schedule,
            self.bounds,
            self.time.tick,
            &mut self.events,
        );

        // The player system runs before enemies, so reaching home and
        // being caught on the same tick resolves as a win.
        if systems::player::run(&mut self.world, &mut self.events) {
            self.game_over_win();
        }

        let caught = systems::enemy::run(
            &mut self.world,
            self.bounds,
            &self.time,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        if let Some(kind) = caught {
            self.game_over_lose(kind);
        }

        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Transition to Won. Only the first terminal signal in a session
    /// takes effect.
    fn game_over_win(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.phase = GamePhase::Won;
        self.events.push(GameEvent::HomeReached);
    }

    /// Transition to Lost. Only the first terminal signal in a session
    /// takes effect.
    fn game_over_lose(&mut self, kind: EnemyKind) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.phase = GamePhase::Lost;
        self.events.push(GameEvent::PlayerCaught { kind });
    }

    /// Teleport the player, bypassing waypoint movement.
    #[cfg(test)]
    pub fn place_player(&mut self, x: f64, y: f64) {
        use homebound_core::components::Player;
        for (_, (_, position)) in self.world.query_mut::<(&Player, &mut Position)>() {
            *position = Position::new(x, y);
        }
    }

    /// Drop a demo drifter into the running session.
    #[cfg(test)]
    pub fn spawn_demo_at(&mut self, x: f64, y: f64) -> Entity {
        world_setup::spawn_demo(&mut self.world, Position::new(x, y), self.time.tick)
    }
}
