/*!
 * Bank Kernel - Main Entry Point
 *
 * Interactive banking simulation that provides:
 * - Account ledger
 * - Transaction process table
 * - Round-robin scheduling report
 * - Outcome notifications
 */

use bank_kernel::{init_tracing, notification_channel, KernelConfig, Shell, TransactionCoordinator};
use miette::IntoDiagnostic;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize structured tracing
    init_tracing();

    info!("Bank kernel starting...");

    let config = KernelConfig::from_env()?;
    info!(?config, "Configuration loaded");

    let (notifier, receiver) = notification_channel(config.notification_capacity);
    let coordinator = TransactionCoordinator::new(config, Arc::new(notifier))?;

    // Print notifications as they arrive
    let listener = tokio::spawn(async move {
        let mut received = 0usize;
        while let Some(notification) = receiver.recv_async().await {
            println!("IPC Notification: {}", notification);
            received += 1;
        }
        info!(received, "Notification channel closed");
    });

    // Shell owns the coordinator; dropping it closes the channel
    let shell = tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        Shell::new(&coordinator, stdin.lock(), std::io::stdout()).run()
    });

    match shell.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(error = %e, "Shell I/O error"),
        Err(e) => error!(error = %e, "Shell task failed"),
    }

    listener.await.into_diagnostic()?;
    info!("Bank kernel stopped");
    Ok(())
}
