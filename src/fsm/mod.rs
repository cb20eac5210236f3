//! Function-pointer finite state machine engine — the occupancy monitor.
//!
//! Classic embedded FSM pattern ported to Rust:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  StateTable                                                    │
//! │  ┌────────────┬───────────┬──────────┬───────────────────┐     │
//! │  │ State      │ on_enter  │ on_exit  │ on_update         │     │
//! │  ├────────────┼───────────┼──────────┼───────────────────┤     │
//! │  │ Unoccupied │ —         │ —        │ fn(ctx)->Option<> │     │
//! │  │ Occupied   │ fn(ctx)   │ fn(ctx)  │ fn(ctx)->Option<> │     │
//! │  └────────────┴───────────┴──────────┴───────────────────┘     │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each poll the engine calls `on_update` for the **current** state.
//! If it returns `Some(next)`, the engine runs `on_exit` for the
//! current state, then `on_enter` for the next.  A transition only
//! happens on an edge against the level seen on the previous poll, so
//! the previous light level *is* the current state.

pub mod context;
pub mod states;

use context::FsmContext;
use log::info;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Occupancy as inferred from the light sensor.
/// Must stay in sync with the state table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OccupancyState {
    Unoccupied = 0,
    Occupied = 1,
}

impl OccupancyState {
    /// Total number of states — used to size the table array.
    pub const COUNT: usize = 2;

    /// Convert a table index back to a state.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Unoccupied,
            1 => Self::Occupied,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::Unoccupied
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
/// These run exactly once on each state transition.
pub type StateActionFn = fn(&mut FsmContext);

/// Signature for the per-poll update handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type StateUpdateFn = fn(&mut FsmContext) -> Option<OccupancyState>;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single FSM state.
pub struct StateDescriptor {
    pub id: OccupancyState,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_update: StateUpdateFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The finite state machine engine.
pub struct Fsm {
    /// Fixed-size table indexed by `OccupancyState as usize`.
    table: [StateDescriptor; OccupancyState::COUNT],
    /// Index of the currently active state.
    current: usize,
}

impl Fsm {
    /// Construct a new FSM with the given state table, starting in `initial`.
    pub fn new(table: [StateDescriptor; OccupancyState::COUNT], initial: OccupancyState) -> Self {
        debug_assert!(
            table.iter().enumerate().all(|(i, d)| d.id as usize == i),
            "state table out of order"
        );
        Self {
            table,
            current: initial as usize,
        }
    }

    /// Run the initial `on_enter` for the starting state.
    /// Call once after construction, before the first `poll()`.
    pub fn start(&mut self, ctx: &mut FsmContext) {
        info!("FSM starting in state: {}", self.table[self.current].name);
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    /// Advance the FSM by one poll.
    ///
    /// 1. Call `on_update` for the current state.
    /// 2. If it returns `Some(next)`, execute the transition:
    ///    `on_exit(current)` → update pointer → `on_enter(next)`.
    ///
    /// Returns the transition taken, if any.
    pub fn poll(&mut self, ctx: &mut FsmContext) -> Option<(OccupancyState, OccupancyState)> {
        let next = (self.table[self.current].on_update)(ctx)?;
        let prev = self.current_state();
        if next == prev {
            return None;
        }
        self.transition(next, ctx);
        Some((prev, next))
    }

    /// The current state's identity.
    pub fn current_state(&self) -> OccupancyState {
        OccupancyState::from_index(self.current)
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next_id: OccupancyState, ctx: &mut FsmContext) {
        let next_idx = next_id as usize;

        info!(
            "FSM transition: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }

        self.current = next_idx;

        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }
}
