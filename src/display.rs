/*!
 * Display
 * Plain-text renderings of the process table, Gantt schedule, and slot map
 */

use crate::ledger::Account;
use crate::process::ProcessRecord;
use crate::scheduler::Schedule;
use std::fmt::Write;
use std::mem;

/// Process table, one row per record in insertion order
pub fn render_process_table(records: &[ProcessRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Process Table:");
    let _ = writeln!(
        out,
        "{:<6}{:<12}{:>12}  {:<10}{:<12}{:>15}",
        "ID", "AccountID", "Amount", "Kind", "Status", "Execution Time"
    );
    for record in records {
        let _ = writeln!(
            out,
            "{:<6}{:<12}{:>12.2}  {:<10}{:<12}{:>15}",
            record.process_id,
            record.account_id,
            record.amount,
            record.kind.label(),
            record.status.label(),
            record.execution_time
        );
    }
    if records.is_empty() {
        let _ = writeln!(out, "(no transactions)");
    }
    out
}

/// Gantt table, executed timeline, and averages
pub fn render_gantt(schedule: &Schedule) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Gantt Chart (Round Robin Scheduling):");
    let _ = writeln!(
        out,
        "{:<13}{:>9}{:>11}{:>11}{:>12}{:>12}{:>9}",
        "Transaction", "Arrival", "Execution", "Remaining", "Completion", "Turnaround", "Waiting"
    );
    for row in &schedule.rows {
        let _ = writeln!(
            out,
            "{:<13}{:>9}{:>11}{:>11}{:>12}{:>12}{:>9}",
            format!("T{}", row.transaction_id),
            row.arrival_time,
            row.execution_time,
            row.remaining_time,
            row.completion_time,
            row.turnaround_time,
            row.waiting_time
        );
    }

    if schedule.slices.is_empty() {
        let _ = writeln!(out, "Timeline: (idle)");
    } else {
        out.push_str("Timeline: ");
        for slice in &schedule.slices {
            let _ = write!(out, "| T{} {}-{} ", slice.transaction_id, slice.start, slice.end);
        }
        out.push_str("|\n");
    }

    let _ = writeln!(
        out,
        "Average Turnaround: {:.2}  Average Waiting: {:.2}  Preemptions: {}",
        schedule.stats.average_turnaround, schedule.stats.average_waiting, schedule.stats.preemptions
    );
    out
}

/// Slot map of the ledger
///
/// Addresses are offsets from a zero base, one `Account` wide per slot.
pub fn render_slot_map(accounts: &[Account]) -> String {
    let stride = mem::size_of::<Account>();
    let mut out = String::new();
    let _ = writeln!(out, "Slot Map:");
    for (slot, account) in accounts.iter().enumerate() {
        let label = if account.is_allocated() {
            format!("Account {}", account.account_id)
        } else {
            "free".to_string()
        };
        let _ = writeln!(out, "0x{:04x}  slot {:<3} {}", slot * stride, slot, label);
    }
    let _ = writeln!(
        out,
        "0x{:04x}  Transaction Data (Shared)",
        accounts.len() * stride
    );
    out
}

/// Pretty JSON export of a schedule
pub fn schedule_json(schedule: &Schedule) -> serde_json::Result<String> {
    serde_json::to_string_pretty(schedule)
}
