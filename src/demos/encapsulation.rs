//! Encapsulation: private fields behind validating methods. The inner
//! module boundary is what makes the fields actually inaccessible here.

mod account {
    /// Balance is only reachable through the methods; invariant: never
    /// negative.
    pub struct BankAccount {
        balance_cents: i64,
    }

    impl BankAccount {
        pub fn open(initial_cents: i64) -> Self {
            Self {
                balance_cents: initial_cents.max(0),
            }
        }

        pub fn balance_cents(&self) -> i64 {
            self.balance_cents
        }

        pub fn deposit(&mut self, cents: i64) {
            if cents > 0 {
                self.balance_cents += cents;
            }
        }

        /// Rejects overdrafts instead of letting the invariant break.
        pub fn withdraw(&mut self, cents: i64) -> Result<(), String> {
            if cents <= 0 {
                return Err("withdrawal must be positive".into());
            }
            if cents > self.balance_cents {
                return Err(format!(
                    "insufficient funds: have {}, asked for {}",
                    self.balance_cents, cents
                ));
            }
            self.balance_cents -= cents;
            Ok(())
        }
    }
}

use account::BankAccount;

pub fn run() {
    println!("Encapsulation and module privacy\n");

    let mut acct = BankAccount::open(10_000);
    println!("opened with balance {}", acct.balance_cents());

    acct.deposit(2_500);
    println!("after deposit      {}", acct.balance_cents());

    // acct.balance_cents = -1; would not compile: the field is private.

    match acct.withdraw(50_000) {
        Ok(()) => println!("withdrawal ok"),
        Err(reason) => println!("withdrawal refused: {}", reason),
    }
    println!("balance unchanged  {}", acct.balance_cents());
}
