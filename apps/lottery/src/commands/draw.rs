use crate::cli::Cli;
use crate::error::LotteryError;
use crate::logger::initialize as LoggerInitialize;
use crate::render::{
    render_alert, render_countdown_through, render_drawing, render_header, render_winners,
};

use draw_core::config::{LotteryConfig, default_data_dir};
use draw_core::error::CoreError;
use draw_core::i18n::{locale_from_env, translations};
use draw_core::session::{DrawSession, SessionConfig};
use draw_core::store::{JsonFileStore, KeyValueStore, MemoryStore};

use models::{CountdownState, ErrorLocation, Language, WinnerCount, WinnerList};

use std::fs::{create_dir_all, read_to_string};
use std::io::Write;
use std::panic::Location;

use log::{debug, info, warn};

/// Input applied to the session right before drawing. `None` keeps the
/// session's current (persisted) value.
#[derive(Debug, Clone, Default)]
pub struct DrawOptions {
    pub names_text: Option<String>,
    pub winner_count: Option<WinnerCount>,
    pub language: Option<Language>,
}

/// Wire config, store and session from the command line, then draw once.
///
/// # Errors
///
/// * [`LotteryError::Rejected`] - validation refused the draw; the localized
///   alert has already been written to `out`
/// * [`LotteryError::Core`] - config, data directory or session failure
/// * [`LotteryError::Lottery`] - names file, log file or output failure
pub async fn run<W: Write>(cli: Cli, out: &mut W) -> Result<WinnerList, LotteryError> {
    let location = ErrorLocation::from(Location::caller());

    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir().map_err(CoreError::from)?,
    };

    create_dir_all(&data_dir).map_err(|e| LotteryError::Lottery {
        message: format!("Failed to create data directory: {e}"),
        location,
    })?;

    LoggerInitialize(&data_dir)?;

    info!("Lottery starting");
    info!("Data directory: {}", data_dir.display());

    let mut config = LotteryConfig::load(&data_dir).map_err(CoreError::from)?;
    if let Some(tick_ms) = cli.tick_ms {
        config.countdown.tick_interval_ms = tick_ms;
        config.validate().map_err(CoreError::from)?;
    }

    let store: Box<dyn KeyValueStore> = if cli.ephemeral {
        debug!("Ephemeral run, input will not be saved");
        Box::new(MemoryStore::new())
    } else {
        Box::new(JsonFileStore::open(config.store_path(&data_dir)))
    };

    let names_text = match (&cli.names, &cli.names_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(read_to_string(path).map_err(|e| LotteryError::Lottery {
            message: format!("Failed to read names file {}: {e}", path.display()),
            location,
        })?),
        (None, None) => None,
    };

    let options = DrawOptions {
        names_text,
        winner_count: cli.winner_count(),
        language: cli.language(),
    };

    let locale = locale_from_env();
    let session = DrawSession::spawn(
        SessionConfig::from(&config.countdown),
        store,
        locale.as_deref(),
    );

    let result = draw(&session, options, out).await;

    if let Err(e) = session.shutdown().await {
        warn!("Session did not shut down cleanly: {e}");
    }

    result
}

/// Apply `options`, request a draw and follow it to the reveal.
///
/// Prints the name count, each countdown step and the winners, then closes
/// the reveal so the session is back to `Idle` when this returns.
pub async fn draw<W: Write>(
    session: &DrawSession,
    options: DrawOptions,
    out: &mut W,
) -> Result<WinnerList, LotteryError> {
    let location = ErrorLocation::from(Location::caller());
    let output_error = |e: std::io::Error| LotteryError::Lottery {
        message: format!("Failed to write output: {e}"),
        location,
    };

    if let Some(language) = options.language {
        session
            .set_language(language)
            .await
            .map_err(CoreError::from)?;
    }
    if let Some(text) = options.names_text {
        session
            .set_names_text(text)
            .await
            .map_err(CoreError::from)?;
    }
    if let Some(count) = options.winner_count {
        session
            .set_winner_count(count)
            .await
            .map_err(CoreError::from)?;
    }

    let snapshot = session.snapshot();
    let text = translations(snapshot.language);
    render_header(out, text, snapshot.name_count).map_err(output_error)?;

    let mut updates = session.subscribe();

    let ticket = match session.request_draw().await {
        Ok(ticket) => ticket,
        Err(e) => {
            let Some(rejection) = e.rejection() else {
                return Err(CoreError::from(e).into());
            };
            let message = text.rejection_message(&rejection);
            warn!("Draw refused: {rejection}");
            render_alert(out, &message).map_err(output_error)?;
            return Err(LotteryError::Rejected { message, location });
        }
    };

    info!(
        "Draw {} started: {} of {} names",
        ticket.draw_id, ticket.winner_count, ticket.name_count
    );
    render_drawing(out, text).map_err(output_error)?;

    let mut next_step = Some(ticket.countdown_from);
    loop {
        let countdown = updates.borrow_and_update().countdown.clone();

        match countdown {
            CountdownState::Ticking(remaining) => {
                render_countdown_through(out, &mut next_step, remaining).map_err(output_error)?;
            }
            CountdownState::Revealing(winners) => {
                render_countdown_through(out, &mut next_step, 0).map_err(output_error)?;
                render_winners(out, text, &winners).map_err(output_error)?;
                session.close_winners().await.map_err(CoreError::from)?;
                return Ok(winners);
            }
            CountdownState::Idle => {
                return Err(LotteryError::Lottery {
                    message: "Draw was cancelled before the reveal".to_string(),
                    location,
                });
            }
        }

        updates.changed().await.map_err(|e| LotteryError::Lottery {
            message: format!("Session stopped during the countdown: {e}"),
            location,
        })?;
    }
}
