pub mod cli;
pub mod collab;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use uuid::Uuid;

use cli::{Cli, Command};
use collab::{LogAlerts, MemoryStore, ReplayMarket};
use market::types::PricePoint;
use monitor::store::ScanRecord;
use monitor::{MonitoringConfig, SignalMonitor};
use pattern::PatternResult;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    common::logger::init_logger("vcp");

    let args = Cli::parse();
    match args.command {
        Command::Analyze { data } => run_analyze(&data),
        Command::Watch {
            data,
            symbol,
            interval_min,
            min_confidence,
        } => run_watch(&data, symbol, interval_min, min_confidence).await,
    }
}

fn load_series(path: &Path) -> anyhow::Result<Vec<PricePoint>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn print_result(result: &PatternResult) {
    println!(
        "score {:.0}/100  pattern: {}",
        result.score,
        if result.has_pattern { "YES" } else { "no" }
    );
    println!("  {}", result.description);
    println!(
        "  bases: {}  contraction: {:.1}%  tightness: {:.0}  dry-up: {}  breakout: {:.0}",
        result.base_count,
        result.volatility_contraction_pct,
        result.price_tightness_score,
        result.volume_dry_up,
        result.breakout_potential_score,
    );
    for entry in &result.entry_points {
        println!(
            "  entry {:?} @ {:.2} (confidence {:.0}): {}",
            entry.kind, entry.price, entry.confidence, entry.description
        );
    }
}

fn run_analyze(data: &Path) -> anyhow::Result<()> {
    let series = load_series(data)?;
    let result = pattern::analyze(&series);
    print_result(&result);
    Ok(())
}

async fn run_watch(
    data: &Path,
    symbol: String,
    interval_min: u64,
    min_confidence: f64,
) -> anyhow::Result<()> {
    let series = load_series(data)?;
    let result = pattern::analyze(&series);
    print_result(&result);

    if !result.has_pattern {
        println!("series does not qualify for monitoring");
        return Ok(());
    }

    let instrument_id = Uuid::new_v4();
    let last_price = series.last().map(|b| b.close).unwrap_or_default();

    let store = Arc::new(MemoryStore::default());
    store.insert(ScanRecord {
        instrument_id,
        symbol: symbol.clone(),
        has_pattern: true,
        pattern_score: result.score,
        last_price,
        signal_fired_at: None,
    });

    let config = MonitoringConfig {
        check_interval_minutes: interval_min,
        min_confidence,
        ..Default::default()
    };
    let monitor = SignalMonitor::new(
        Arc::new(ReplayMarket::new(series)),
        store,
        Arc::new(LogAlerts),
        config,
    );

    monitor.start_monitoring(instrument_id).await?;
    if monitor.status().is_empty() {
        // The immediate check already fired and stood the watch down.
        return Ok(());
    }

    println!("watching {symbol} every {interval_min}m; ctrl-c to stop");
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                monitor.stop_all_monitoring();
                println!("stopped");
                break;
            }
            _ = tokio::time::sleep(Duration::from_secs(1)) => {
                if monitor.status().is_empty() {
                    break;
                }
            }
        }
    }

    Ok(())
}
