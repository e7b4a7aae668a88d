/*!
 * Shell Tests
 * Scripted sessions over an in-memory buffer
 */

use bank_kernel::{notification_channel, KernelConfig, Shell, TransactionCoordinator};
use std::io::Cursor;
use std::sync::Arc;

fn session(script: &str) -> (String, Vec<String>) {
    let (notifier, receiver) = notification_channel(64);
    let bank = TransactionCoordinator::new(KernelConfig::new().with_seed(4), Arc::new(notifier)).unwrap();

    let mut output = Vec::new();
    Shell::new(&bank, Cursor::new(script.as_bytes()), &mut output)
        .run()
        .unwrap();

    let notifications = receiver.drain().into_iter().map(|n| n.message).collect();
    (String::from_utf8(output).unwrap(), notifications)
}

#[test]
fn test_full_session() {
    let script = "1\n100\n500\n2\n1\n250\n3\n1\n1000\n4\n1\n7\n5\n6\n9\n";
    let (out, notifications) = session(script);

    assert!(out.contains("Account Created: ID=1, CustomerID=100, Balance=500.00"));
    assert!(out.contains("Deposit of 250.00 to Account ID=1 completed. New Balance=750.00"));
    assert!(out.contains("Withdrawal failed. Insufficient funds. Account ID=1"));
    assert!(out.contains("Balance: Account ID=1, Balance=750.00"));
    assert!(out.contains("Process Table:"));
    assert!(out.contains("Gantt Chart (Round Robin Scheduling):"));
    assert!(out.contains("Account 1"));
    assert!(out.contains("Exiting..."));

    assert_eq!(notifications.len(), 2);
}

#[test]
fn test_invalid_inputs_keep_session_alive() {
    let (out, _) = session("abc\n4\n3\n2\nx\n9\n");

    assert!(out.contains("Invalid choice. Try again."));
    assert!(out.contains("Invalid Account ID=3"));
    assert!(out.contains("Invalid Account ID: \"x\""));
    assert!(out.contains("Exiting..."));
}

#[test]
fn test_export_json() {
    let (out, _) = session("1\n5\n10\n2\n1\n5\n8\n9\n");

    let start = out.find('{').unwrap();
    let end = out.rfind('}').unwrap();
    let value: serde_json::Value = serde_json::from_str(&out[start..=end]).unwrap();
    assert_eq!(value["rows"].as_array().unwrap().len(), 1);
    assert_eq!(value["stats"]["completed"], 1);
}
