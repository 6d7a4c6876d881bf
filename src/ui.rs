//! Interactive text screens over the account directory.
//!
//! One screen per state, mirroring a simple form-based flow: main menu,
//! open-account, login, dashboard, deposit, withdraw, transaction list.
//! The session is generic over its input and output so whole flows can be
//! driven through in-memory buffers in tests.
//!
//! Responsibility split: this layer pre-validates input shape (numeric,
//! non-empty) and renders every core error as a user-facing message; the
//! core only validates ranges and credential equality. After every mutating
//! operation the full directory is saved through the snapshot store, and a
//! failed save is reported instead of being swallowed.

use crate::account::Receipt;
use crate::directory::AccountDirectory;
use crate::error::{Result, TellerError};
use crate::money::Money;
use crate::store::SnapshotStore;
use log::warn;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Which screen the session is currently on.
#[derive(Clone, Copy)]
enum Screen {
    MainMenu,
    /// Logged in to the account with this number.
    Dashboard(u32),
}

/// An interactive banking session bound to a snapshot store.
pub struct Session<S: SnapshotStore> {
    directory: AccountDirectory,
    store: S,
}

impl<S: SnapshotStore> Session<S> {
    /// Loads the directory from the store and builds a session over it.
    ///
    /// # Errors
    /// - `CorruptData` when the stored snapshot is malformed
    /// - `Storage` when the snapshot cannot be read
    pub fn open(store: S) -> Result<Self> {
        let directory = match store.load()? {
            Some(snapshot) => AccountDirectory::from_snapshot(&snapshot)?,
            None => AccountDirectory::new(),
        };

        Ok(Session { directory, store })
    }

    /// The directory this session operates on.
    pub fn directory(&self) -> &AccountDirectory {
        &self.directory
    }

    /// Runs the session until the user quits or input ends.
    ///
    /// Core errors never escape this loop; they are rendered as messages.
    /// Only terminal I/O failures propagate.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        let mut screen = Screen::MainMenu;

        loop {
            match screen {
                Screen::MainMenu => {
                    writeln!(output)?;
                    writeln!(output, "=== Teller ===")?;
                    writeln!(output, "1) Log in")?;
                    writeln!(output, "2) Open account")?;
                    writeln!(output, "3) Quit")?;

                    let Some(choice) = prompt(&mut input, &mut output, "> ")? else {
                        return Ok(());
                    };
                    match choice.as_str() {
                        "1" => {
                            if let Some(number) = self.login(&mut input, &mut output)? {
                                screen = Screen::Dashboard(number);
                            }
                        }
                        "2" => self.open_account(&mut input, &mut output)?,
                        "3" => {
                            writeln!(output, "Goodbye.")?;
                            return Ok(());
                        }
                        _ => writeln!(output, "Unknown option.")?,
                    }
                }
                Screen::Dashboard(number) => {
                    writeln!(output)?;
                    writeln!(output, "--- Account {} ---", number)?;
                    writeln!(output, "1) Deposit")?;
                    writeln!(output, "2) Withdraw")?;
                    writeln!(output, "3) Balance")?;
                    writeln!(output, "4) Transactions")?;
                    writeln!(output, "5) Log out")?;

                    let Some(choice) = prompt(&mut input, &mut output, "> ")? else {
                        return Ok(());
                    };
                    match choice.as_str() {
                        "1" => self.deposit_screen(number, &mut input, &mut output)?,
                        "2" => self.withdraw_screen(number, &mut input, &mut output)?,
                        "3" => self.balance_screen(number, &mut output)?,
                        "4" => self.transactions_screen(number, &mut output)?,
                        "5" => screen = Screen::MainMenu,
                        _ => writeln!(output, "Unknown option.")?,
                    }
                }
            }
        }
    }

    /// Open-account form: name, PIN, PIN confirmation.
    fn open_account<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<()> {
        let Some(name) = prompt(input, output, "Holder name: ")? else {
            return Ok(());
        };
        if name.is_empty() {
            writeln!(output, "Name cannot be empty.")?;
            return Ok(());
        }

        let Some(pin) = prompt(input, output, "Choose a PIN: ")? else {
            return Ok(());
        };
        if pin.is_empty() {
            writeln!(output, "PIN cannot be empty.")?;
            return Ok(());
        }

        let Some(confirm) = prompt(input, output, "Confirm PIN: ")? else {
            return Ok(());
        };
        if confirm != pin {
            writeln!(output, "PINs do not match.")?;
            return Ok(());
        }

        let number = self.directory.create_account(&name, &pin).number();
        writeln!(output, "Account {} opened for {}.", number, name)?;
        self.persist(output)
    }

    /// Login form. Returns the account number on success.
    fn login<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Option<u32>> {
        let Some(number_text) = prompt(input, output, "Account number: ")? else {
            return Ok(None);
        };
        let Ok(number) = number_text.parse::<u32>() else {
            writeln!(output, "Account numbers are digits only.")?;
            return Ok(None);
        };

        let Some(pin) = prompt(input, output, "PIN: ")? else {
            return Ok(None);
        };

        match self.directory.authenticate(number, &pin) {
            Ok(account) => {
                writeln!(output, "Welcome, {}.", account.holder())?;
                Ok(Some(number))
            }
            Err(e) => {
                writeln!(output, "{}", message_for(&e))?;
                Ok(None)
            }
        }
    }

    /// Deposit form: amount only.
    fn deposit_screen<R: BufRead, W: Write>(
        &mut self,
        number: u32,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<()> {
        let Some(text) = prompt(input, output, "Deposit amount: ")? else {
            return Ok(());
        };
        let Ok(amount) = Money::from_str(&text) else {
            writeln!(output, "Invalid amount.")?;
            return Ok(());
        };

        match self.directory.deposit(number, amount) {
            Ok(receipt) => {
                writeln!(output, "{}", describe(&receipt))?;
                self.persist(output)
            }
            Err(e) => writeln!(output, "{}", message_for(&e)),
        }
    }

    /// Withdraw form: amount, then PIN.
    fn withdraw_screen<R: BufRead, W: Write>(
        &mut self,
        number: u32,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<()> {
        let Some(text) = prompt(input, output, "Withdraw amount: ")? else {
            return Ok(());
        };
        let Ok(amount) = Money::from_str(&text) else {
            writeln!(output, "Invalid amount.")?;
            return Ok(());
        };

        let Some(pin) = prompt(input, output, "PIN: ")? else {
            return Ok(());
        };

        match self.directory.withdraw(number, amount, &pin) {
            Ok(receipt) => {
                writeln!(output, "{}", describe(&receipt))?;
                self.persist(output)
            }
            Err(e) => writeln!(output, "{}", message_for(&e)),
        }
    }

    fn balance_screen<W: Write>(&self, number: u32, output: &mut W) -> io::Result<()> {
        match self.directory.account(number) {
            Some(account) => writeln!(output, "Balance: {}", account.display_balance()),
            None => writeln!(output, "{}", message_for(&TellerError::UnknownAccount(number))),
        }
    }

    fn transactions_screen<W: Write>(&self, number: u32, output: &mut W) -> io::Result<()> {
        let Some(account) = self.directory.account(number) else {
            return writeln!(output, "{}", message_for(&TellerError::UnknownAccount(number)));
        };

        writeln!(output, "Transactions for account {}:", number)?;
        if account.ledger().is_empty() {
            writeln!(output, "  (none)")?;
        }
        for entry in account.ledger() {
            writeln!(output, "  [{}] {}", entry.timestamp(), entry.description())?;
        }

        Ok(())
    }

    /// Flushes the directory to the store, reporting rather than hiding a
    /// failed save.
    fn persist<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if let Err(e) = self.store.save(&self.directory.snapshot()) {
            warn!("saving accounts failed: {}", e);
            writeln!(output, "Warning: could not save accounts: {}", e)?;
        }

        Ok(())
    }
}

/// Writes a prompt label and reads one trimmed line.
///
/// Returns `None` when input is exhausted, which ends the enclosing flow.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Renders a receipt as a user-facing sentence.
fn describe(receipt: &Receipt) -> String {
    match receipt {
        Receipt::Deposit { amount, balance } => {
            format!("Deposited {}. Balance is now {}.", amount, balance)
        }
        Receipt::Withdrawal { amount, balance } => {
            format!("Withdrew {}. Balance is now {}.", amount, balance)
        }
    }
}

/// Translates a core error into a user-facing message.
fn message_for(error: &TellerError) -> String {
    match error {
        TellerError::InvalidAmount(_) => "Amounts cannot be negative.".to_string(),
        TellerError::InsufficientFunds { available, .. } => {
            format!("Insufficient funds: balance is {}.", available)
        }
        TellerError::IncorrectPin => "Incorrect PIN.".to_string(),
        TellerError::UnknownAccount(number) => format!("No account with number {}.", number),
        other => other.to_string(),
    }
}
