//! Abstraction with traits: callers depend on a contract, never on the
//! concrete type behind it. A provided method builds on the required ones,
//! which is the abstract-base-class pattern without a base class.

trait PaymentMethod {
    fn label(&self) -> String;
    fn charge(&self, amount: f64) -> String;

    // Provided method defined entirely in terms of the contract.
    fn receipt(&self, amount: f64) -> String {
        format!("[{}] {}", self.label(), self.charge(amount))
    }
}

struct CreditCard {
    last_four: String,
}

struct BankTransfer {
    iban: String,
}

impl PaymentMethod for CreditCard {
    fn label(&self) -> String {
        format!("card *{}", self.last_four)
    }
    fn charge(&self, amount: f64) -> String {
        format!("charged {:.2} to the card network", amount)
    }
}

impl PaymentMethod for BankTransfer {
    fn label(&self) -> String {
        format!("transfer {}", self.iban)
    }
    fn charge(&self, amount: f64) -> String {
        format!("queued {:.2} for settlement", amount)
    }
}

// The checkout only ever sees the abstraction.
fn checkout(method: &dyn PaymentMethod, amount: f64) {
    println!("{}", method.receipt(amount));
}

pub fn run() {
    println!("Abstraction with traits\n");

    let card = CreditCard {
        last_four: "4242".into(),
    };
    let transfer = BankTransfer {
        iban: "DE02 1203".into(),
    };

    checkout(&card, 19.99);
    checkout(&transfer, 500.0);
}
