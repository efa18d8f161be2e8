//! Cycle handlers for scheduled ticks and manual trades

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::error::{ComputeError, CycleError};
use crate::jobs::context::JobContext;
use crate::jobs::types::{CycleOutcome, CycleTrigger, TickResult};
use crate::models::trade::NewTrade;
use crate::signals::engine::SignalEngine;
use crate::signals::synthetic::synthesize_price_window;

/// Handler for a scheduler tick
///
/// Skips the tick if another cycle still holds the guard.
pub async fn handle_scheduled_tick(ctx: &JobContext) -> TickResult {
    let Ok(_guard) = ctx.cycle_guard.try_lock() else {
        warn!("Trade cycle still running, skipping scheduled tick");
        if let Some(ref metrics) = ctx.metrics {
            metrics.record_cycle("skipped");
        }
        return TickResult::Skipped;
    };

    match run_cycle(ctx, CycleTrigger::Scheduled).await {
        Ok(outcome) => TickResult::Completed(outcome),
        Err(e) => TickResult::Failed(e),
    }
}

/// Handler for a manually requested trade
///
/// Waits for any running cycle before starting.
pub async fn handle_manual_trade(ctx: &JobContext) -> Result<CycleOutcome, CycleError> {
    let _guard = ctx.cycle_guard.lock().await;
    run_cycle(ctx, CycleTrigger::Manual).await
}

async fn run_cycle(ctx: &JobContext, trigger: CycleTrigger) -> Result<CycleOutcome, CycleError> {
    debug!(trigger = ?trigger, "Running trade cycle");

    let result = evaluate_and_record(ctx).await;

    let message = match &result {
        Ok(outcome) => match outcome.record {
            Some(ref record) => {
                info!(
                    trigger = ?trigger,
                    signal = %record.signal,
                    price = record.current_price,
                    rsi = record.rsi,
                    trade_id = record.id,
                    "Executed trade"
                );
                format!(
                    "Executed trade: {} at {}, RSI: {}",
                    record.signal, record.current_price, record.rsi
                )
            }
            None => {
                info!(
                    trigger = ?trigger,
                    price = outcome.current_price,
                    rsi = outcome.rsi,
                    "No trade executed, RSI within neutral range"
                );
                format!("No trade executed, RSI is within neutral range: {}", outcome.rsi)
            }
        },
        Err(CycleError::Compute(e)) => {
            warn!(trigger = ?trigger, error = %e, "RSI calculation returned null");
            "RSI calculation returned null".to_string()
        }
        Err(e) => {
            error!(trigger = ?trigger, error = %e, "Error executing trade");
            format!("Error executing trade: {}", e)
        }
    };
    ctx.log_sink.push(message).await;

    if let Some(ref metrics) = ctx.metrics {
        match &result {
            Ok(outcome) => {
                metrics.record_cycle(outcome.outcome_label());
                metrics.last_rsi_value.set(outcome.rsi);
                if outcome.record.is_some() {
                    metrics.trades_recorded_total.inc();
                }
            }
            Err(e) => metrics.record_cycle(e.outcome_label()),
        }
    }

    result
}

async fn evaluate_and_record(ctx: &JobContext) -> Result<CycleOutcome, CycleError> {
    let current_price = ctx.data_provider.get_latest_price().await?;

    let window = synthesize_price_window(current_price, &ctx.window, &mut rand::thread_rng());

    let evaluation = SignalEngine::evaluate(&window, current_price, ctx.oscillator, &ctx.policy)
        .ok_or(ComputeError::InsufficientData { current_price })?;

    let Some((stop_loss, take_profit)) = evaluation.decision.levels() else {
        return Ok(CycleOutcome {
            current_price,
            rsi: evaluation.rsi,
            decision: evaluation.decision,
            record: None,
        });
    };

    let record = ctx
        .trade_store
        .insert_trade(NewTrade {
            signal: evaluation.decision.signal,
            stop_loss,
            take_profit,
            current_price,
            rsi: evaluation.rsi,
            timestamp: Utc::now(),
        })
        .await?;

    Ok(CycleOutcome {
        current_price,
        rsi: evaluation.rsi,
        decision: evaluation.decision,
        record: Some(record),
    })
}
