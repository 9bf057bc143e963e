//! Session runner - the two-actor loop that plays one game
//!
//! A scoped gravity thread advances the session on its tick interval
//! while the calling thread feeds it input. Both share the session and
//! the render sink behind a single mutex, so every transition and the
//! redraw it triggers happen atomically. The pause dialog blocks inside
//! the locked region, which is exactly what freezes gravity during a
//! pause. Event fetching stays outside the lock, so the board keeps
//! ticking while the input actor waits for a key.
//!
//! Either actor can stop the game: gravity on a failed spawn, input on
//! an accepted quit. Both exit paths flip the shared game-over latch
//! first, so the peer observes it within one bounded wait and the final
//! join cannot hang.

use std::sync::Mutex;
use std::thread;

use anyhow::{anyhow, Result};

use crate::core::{GameScore, GameSession, InputOutcome};
use crate::types::{EndReason, InputEvent, QuitChoice};
use crate::ui::{GameUi, InputSource};

/// Final state handed back once both actors have joined
#[derive(Debug, Clone, Copy)]
pub struct SessionOutcome {
    pub score: GameScore,
    pub reason: EndReason,
}

struct Shared<'a, U> {
    session: GameSession,
    ui: &'a mut U,
}

/// Play one session to completion. Returns only after both actors have
/// terminated, with the session's final score card and end reason.
pub fn run_session<U, I>(session: GameSession, ui: &mut U, input: &mut I) -> Result<SessionOutcome>
where
    U: GameUi + Send,
    I: InputSource,
{
    let shared = Mutex::new(Shared { session, ui });

    let (tick_result, input_result) = thread::scope(|scope| {
        let ticker = scope.spawn(|| tick_loop(&shared));

        let input_result = input_loop(&shared, input);
        if input_result.is_err() {
            latch_game_over(&shared);
        }

        let tick_result = ticker
            .join()
            .unwrap_or_else(|_| Err(anyhow!("gravity thread panicked")));
        (tick_result, input_result)
    });
    tick_result?;
    input_result?;

    let shared = shared
        .into_inner()
        .map_err(|_| anyhow!("session lock poisoned"))?;
    Ok(SessionOutcome {
        score: shared.session.score(),
        reason: shared.session.end_reason(),
    })
}

/// Flip the latch so the peer actor stops waiting on a dead partner
fn latch_game_over<U>(shared: &Mutex<Shared<'_, U>>) {
    if let Ok(mut guard) = shared.lock() {
        guard.session.force_game_over();
    }
}

fn tick_loop<U: GameUi>(shared: &Mutex<Shared<'_, U>>) -> Result<()> {
    let result = tick_loop_inner(shared);
    if result.is_err() {
        latch_game_over(shared);
    }
    result
}

fn tick_loop_inner<U: GameUi>(shared: &Mutex<Shared<'_, U>>) -> Result<()> {
    let mut interval = {
        let guard = shared.lock().map_err(|_| anyhow!("session lock poisoned"))?;
        guard.session.tick_interval()
    };

    loop {
        thread::sleep(interval);

        let mut guard = shared.lock().map_err(|_| anyhow!("session lock poisoned"))?;
        let Shared { session, ui } = &mut *guard;
        if session.game_over() {
            break;
        }

        if session.current().is_none() {
            // First piece of the session; later spawns ride the lock
            // transition inside tick_down.
            if !session.spawn_from_queue() {
                break;
            }
            let (kind, rotation) = session.next_preview();
            ui.draw_next_piece(kind, rotation)?;
        } else if let Some(report) = session.tick_down() {
            if !report.cleared_rows.is_empty() {
                ui.draw_row_clear(&report.cleared_rows)?;
                ui.draw_score(&session.score())?;
            }
            if report.leveled_up {
                ui.draw_level_banner(session.score().level)?;
            }
            if report.game_over {
                // Show the settled stack; there is no piece to overlay.
                ui.draw_board(session.board(), None)?;
                break;
            }
            let (kind, rotation) = session.next_preview();
            ui.draw_next_piece(kind, rotation)?;
        }

        ui.draw_board(session.board(), session.current().as_ref())?;
        interval = session.tick_interval();
    }
    Ok(())
}

fn input_loop<U: GameUi, I: InputSource>(
    shared: &Mutex<Shared<'_, U>>,
    input: &mut I,
) -> Result<()> {
    loop {
        // Blocking fetch happens without the lock; gravity keeps going.
        let event = input.next_event()?;
        if event == InputEvent::Invalid {
            continue;
        }

        let mut guard = shared.lock().map_err(|_| anyhow!("session lock poisoned"))?;
        let Shared { session, ui } = &mut *guard;
        if session.game_over() {
            break;
        }

        match session.handle_input(event) {
            InputOutcome::Ignored => {}
            InputOutcome::Moved | InputOutcome::Dropped => {
                ui.draw_board(session.board(), session.current().as_ref())?;
            }
            InputOutcome::PauseRequested => {
                let choice = ui.confirm_quit()?;
                ui.draw_board(session.board(), session.current().as_ref())?;
                if choice == QuitChoice::Quit {
                    session.quit();
                    break;
                }
            }
        }
    }
    Ok(())
}
