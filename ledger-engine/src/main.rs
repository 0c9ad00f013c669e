use anyhow::Context;
use ledger_engine::{build_society_report, gst_collected, setup_environment};
use serde::Serialize;
use shared::models::{SocietyReport, SocietySnapshot};
use std::path::PathBuf;

#[derive(Serialize)]
struct ReportOutput {
    report: SocietyReport,
    gst_collected: ledger_engine::GstBreakdown,
}

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment().context("Failed to set up environment")?;

    // 2. 读取快照
    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: ledger-report <snapshot.json>")?;
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read snapshot {:?}", path))?;
    let snapshot: SocietySnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid snapshot {:?}", path))?;

    tracing::info!(
        society_id = snapshot.society_id,
        towers = snapshot.towers.len(),
        "Snapshot loaded"
    );

    // 3. 计算报表
    let output = ReportOutput {
        gst_collected: gst_collected(&snapshot, config.gst_policy())
            .context("GST computation failed")?,
        report: build_society_report(&snapshot),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
