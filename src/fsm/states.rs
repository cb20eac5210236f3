//! Concrete state handler functions and table builder.
//!
//! Each state is defined by plain `fn` pointers: no closures, no
//! dynamic dispatch, no heap.
//!
//! ```text
//!  UNOCCUPIED ──[light on]──▶ OCCUPIED
//!      ▲                          │
//!      └──────[light off]─────────┘
//!               │
//!               ▼  on_exit(Occupied):
//!      classify elapsed → feedback blink → dispense → blink(6) → sleep
//! ```

use super::context::{CompletedSession, FsmContext};
use super::{OccupancyState, StateDescriptor};
use log::info;

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; OccupancyState::COUNT] {
    [
        // Index 0 — Unoccupied
        StateDescriptor {
            id: OccupancyState::Unoccupied,
            name: "Unoccupied",
            on_enter: None,
            on_exit: None,
            on_update: unoccupied_update,
        },
        // Index 1 — Occupied
        StateDescriptor {
            id: OccupancyState::Occupied,
            name: "Occupied",
            on_enter: Some(occupied_enter),
            on_exit: Some(occupied_exit),
            on_update: occupied_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  UNOCCUPIED state
// ═══════════════════════════════════════════════════════════════════════════

fn unoccupied_update(ctx: &mut FsmContext) -> Option<OccupancyState> {
    ctx.light_on.then_some(OccupancyState::Occupied)
}

// ═══════════════════════════════════════════════════════════════════════════
//  OCCUPIED state — timing the visit
// ═══════════════════════════════════════════════════════════════════════════

fn occupied_enter(ctx: &mut FsmContext) {
    ctx.session.begin(ctx.now_ms);
    ctx.commands.indicator = Some(true);
    info!("OCCUPIED: light on at {} ms, session started", ctx.now_ms);
}

fn occupied_update(ctx: &mut FsmContext) -> Option<OccupancyState> {
    (!ctx.light_on).then_some(OccupancyState::Unoccupied)
}

fn occupied_exit(ctx: &mut FsmContext) {
    if let Some(elapsed_ms) = ctx.session.take_elapsed(ctx.now_ms) {
        let doses = ctx.thresholds.classify(elapsed_ms);
        info!(
            "OCCUPIED: light off after {} ms -> {} dose(s)",
            elapsed_ms,
            doses.count()
        );
        ctx.commands.feedback_blinks = doses.count();
        ctx.commands.doses = doses;
        ctx.commands.completed = Some(CompletedSession { elapsed_ms, doses });
    }

    // Closing pattern and sleep happen whether or not a dose was earned.
    ctx.session.clear();
    ctx.commands.post_cycle_blinks = ctx.config.post_cycle_blinks;
    ctx.commands.sleep_requested = true;
}
