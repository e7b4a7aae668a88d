/*!
 * Interactive Shell
 * Numbered menu over the coordinator, generic over its input and output
 */

use crate::coordinator::TransactionCoordinator;
use crate::core::types::{AccountId, Amount, CustomerId};
use crate::display::{render_gantt, render_process_table, render_slot_map, schedule_json};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

const MENU: &str = "\
Banking System Menu:
1. Create Account
2. Deposit
3. Withdraw
4. Check Balance
5. Show Gantt Chart
6. Show Slot Map
7. Show Process Table
8. Export Schedule (JSON)
9. Exit";

/// Parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    Gantt,
    SlotMap,
    ProcessTable,
    ExportJson,
    Exit,
}

impl FromStr for Choice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Choice::CreateAccount),
            "2" => Ok(Choice::Deposit),
            "3" => Ok(Choice::Withdraw),
            "4" => Ok(Choice::CheckBalance),
            "5" => Ok(Choice::Gantt),
            "6" => Ok(Choice::SlotMap),
            "7" => Ok(Choice::ProcessTable),
            "8" => Ok(Choice::ExportJson),
            "9" => Ok(Choice::Exit),
            _ => Err(()),
        }
    }
}

/// One prompted field
enum Field<T> {
    Value(T),
    Invalid(String),
    Closed,
}

/// Menu-driven front end
pub struct Shell<'a, R, W> {
    coordinator: &'a TransactionCoordinator,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(coordinator: &'a TransactionCoordinator, input: R, output: W) -> Self {
        Self {
            coordinator,
            input,
            output,
        }
    }

    /// Run until Exit or end of input
    pub fn run(&mut self) -> io::Result<()> {
        info!("Shell started");
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            write!(self.output, "Enter your choice: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            let choice = match line.parse::<Choice>() {
                Ok(choice) => choice,
                Err(()) => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    continue;
                }
            };
            debug!(?choice, "Menu selection");

            let keep_going = match choice {
                Choice::CreateAccount => self.create_account()?,
                Choice::Deposit => self.transact(true)?,
                Choice::Withdraw => self.transact(false)?,
                Choice::CheckBalance => self.check_balance()?,
                Choice::Gantt => self.gantt(false)?,
                Choice::SlotMap => {
                    let slots = self.coordinator.slots();
                    write!(self.output, "{}", render_slot_map(&slots))?;
                    true
                }
                Choice::ProcessTable => {
                    let records = self.coordinator.processes();
                    write!(self.output, "{}", render_process_table(&records))?;
                    true
                }
                Choice::ExportJson => self.gantt(true)?,
                Choice::Exit => {
                    writeln!(self.output, "Exiting...")?;
                    false
                }
            };
            if !keep_going {
                break;
            }
        }
        self.output.flush()?;
        info!("Shell finished");
        Ok(())
    }

    fn create_account(&mut self) -> io::Result<bool> {
        let customer_id = match self.prompt::<CustomerId>("Enter Customer ID: ")? {
            Field::Value(v) => v,
            Field::Invalid(raw) => return self.reject("Customer ID", &raw),
            Field::Closed => return Ok(false),
        };
        let balance = match self.prompt::<Amount>("Enter Initial Balance: ")? {
            Field::Value(v) => v,
            Field::Invalid(raw) => return self.reject("balance", &raw),
            Field::Closed => return Ok(false),
        };

        match self.coordinator.open_account(customer_id, balance) {
            Ok(account_id) => writeln!(
                self.output,
                "Account Created: ID={}, CustomerID={}, Balance={:.2}",
                account_id, customer_id, balance
            )?,
            Err(e) => writeln!(self.output, "Account creation failed: {}", e)?,
        }
        Ok(true)
    }

    fn transact(&mut self, is_deposit: bool) -> io::Result<bool> {
        let account_id = match self.prompt::<AccountId>("Enter Account ID: ")? {
            Field::Value(v) => v,
            Field::Invalid(raw) => return self.reject("Account ID", &raw),
            Field::Closed => return Ok(false),
        };
        let label = if is_deposit {
            "Enter Deposit Amount: "
        } else {
            "Enter Withdrawal Amount: "
        };
        let amount = match self.prompt::<Amount>(label)? {
            Field::Value(v) => v,
            Field::Invalid(raw) => return self.reject("amount", &raw),
            Field::Closed => return Ok(false),
        };

        let outcome = if is_deposit {
            self.coordinator.deposit(account_id, amount)
        } else {
            self.coordinator.withdraw(account_id, amount)
        };
        writeln!(self.output, "{}", outcome)?;
        Ok(true)
    }

    fn check_balance(&mut self) -> io::Result<bool> {
        let account_id = match self.prompt::<AccountId>("Enter Account ID: ")? {
            Field::Value(v) => v,
            Field::Invalid(raw) => return self.reject("Account ID", &raw),
            Field::Closed => return Ok(false),
        };

        match self.coordinator.check_balance(account_id) {
            Ok(balance) => writeln!(
                self.output,
                "Balance: Account ID={}, Balance={:.2}",
                account_id, balance
            )?,
            Err(_) => writeln!(self.output, "Invalid Account ID={}", account_id)?,
        }
        Ok(true)
    }

    /// Run a scheduling pass and print it as a chart or JSON
    fn gantt(&mut self, as_json: bool) -> io::Result<bool> {
        let schedule = match self.coordinator.schedule() {
            Ok(schedule) => schedule,
            Err(e) => {
                writeln!(self.output, "Scheduling failed: {}", e)?;
                return Ok(true);
            }
        };

        if as_json {
            match schedule_json(&schedule) {
                Ok(json) => writeln!(self.output, "{}", json)?,
                Err(e) => writeln!(self.output, "Export failed: {}", e)?,
            }
        } else {
            write!(self.output, "{}", render_gantt(&schedule))?;
        }
        Ok(true)
    }

    fn prompt<T: FromStr>(&mut self, label: &str) -> io::Result<Field<T>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        Ok(match self.read_line()? {
            None => Field::Closed,
            Some(line) => match line.parse::<T>() {
                Ok(value) => Field::Value(value),
                Err(_) => Field::Invalid(line),
            },
        })
    }

    fn reject(&mut self, what: &str, raw: &str) -> io::Result<bool> {
        writeln!(self.output, "Invalid {}: {:?}", what, raw)?;
        Ok(true)
    }

    /// Next trimmed line, or None at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
