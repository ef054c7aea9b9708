use serde::{Deserialize, Serialize};

use budgetd_core::{DomainError, DomainResult};

/// A named sub-allocation of the total budget.
///
/// Amounts are whole units in the smallest denomination (e.g. cents),
/// carried as `i64`. Shape rules (non-empty name, non-negative amount)
/// are enforced by the store, not the type, because updates are checked
/// against the current record before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub name: String,
    pub amount: i64,
}

impl Envelope {
    pub fn new(name: impl Into<String>, amount: i64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// In-memory ledger: total budget plus the ordered envelope sequence.
///
/// Invariants after every successful operation:
/// - `sum(envelope.amount) <= total_budget`
/// - envelope names are unique
/// - every amount and the total budget are non-negative
///
/// The store is explicitly constructed and passed around; there is no
/// process-wide instance. Callers that share one across threads must
/// wrap it in a lock (see the API crate).
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    total_budget: i64,
    envelopes: Vec<Envelope>,
}

fn check_shape(envelope: &Envelope) -> DomainResult<()> {
    if envelope.name.is_empty() {
        return Err(DomainError::validation("name must be a non-empty string"));
    }
    if envelope.amount < 0 {
        return Err(DomainError::validation(
            "amount must be a non-negative number",
        ));
    }
    Ok(())
}

impl LedgerStore {
    /// Empty store: zero budget, no envelopes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_budget(&self) -> i64 {
        self.total_budget
    }

    /// Sum of all envelope amounts.
    pub fn amount_budgeted(&self) -> i64 {
        self.envelopes.iter().map(|e| e.amount).sum()
    }

    /// Slack that can still be allocated: total budget minus budgeted sum.
    pub fn amount_available(&self) -> i64 {
        self.total_budget - self.amount_budgeted()
    }

    /// Replace the total budget.
    ///
    /// Rejects negative values and values below the already-budgeted sum
    /// (shrinking the budget under committed allocations would break
    /// conservation). The assignment itself is a single write, so no
    /// partial state is possible.
    pub fn set_total_budget(&mut self, new_budget: i64) -> DomainResult<()> {
        if new_budget < 0 {
            return Err(DomainError::validation(
                "total budget must be a non-negative number",
            ));
        }
        if new_budget < self.amount_budgeted() {
            return Err(DomainError::invariant(
                "total budget cannot be less than the amount budgeted in envelopes",
            ));
        }
        self.total_budget = new_budget;
        Ok(())
    }

    /// Append a new envelope at the end of the sequence.
    ///
    /// Checks run in order: shape, available budget, name uniqueness.
    pub fn add_envelope(&mut self, envelope: Envelope) -> DomainResult<()> {
        check_shape(&envelope)?;
        if envelope.amount > self.amount_available() {
            return Err(DomainError::invariant(
                "amount budgeted cannot be greater than the total budget",
            ));
        }
        if self.envelopes.iter().any(|e| e.name == envelope.name) {
            return Err(DomainError::conflict(format!(
                "an envelope named \"{}\" already exists",
                envelope.name
            )));
        }
        self.envelopes.push(envelope);
        Ok(())
    }

    /// Look up an envelope by name. Absence is `None`, not an error; the
    /// HTTP layer turns it into a 404.
    pub fn envelope(&self, name: &str) -> Option<&Envelope> {
        self.envelopes.iter().find(|e| e.name == name)
    }

    /// All envelopes in insertion order.
    pub fn envelopes(&self) -> &[Envelope] {
        &self.envelopes
    }

    /// Rewrite an existing envelope in place; both name and amount may
    /// change. The budget check is delta-based: only the *increase* over
    /// the current amount has to fit in the available slack, since the
    /// current amount already counts against the budget.
    pub fn update_envelope(&mut self, name: &str, update: Envelope) -> DomainResult<Envelope> {
        let Some(index) = self.envelopes.iter().position(|e| e.name == name) else {
            return Err(DomainError::not_found());
        };

        check_shape(&update)?;
        if update.name != name && self.envelopes.iter().any(|e| e.name == update.name) {
            return Err(DomainError::conflict(format!(
                "an envelope named \"{}\" already exists",
                update.name
            )));
        }

        let delta = update.amount - self.envelopes[index].amount;
        if delta > self.amount_available() {
            return Err(DomainError::invariant(
                "new amount would put the budgeted total over the total budget",
            ));
        }

        let current = &mut self.envelopes[index];
        current.name = update.name;
        current.amount = update.amount;
        Ok(current.clone())
    }

    /// Remove the envelope with the given name; its allocation becomes
    /// available budget again. Silent on absent names — callers that
    /// care about existence check first (the HTTP layer 404s upstream).
    pub fn delete_envelope(&mut self, name: &str) {
        self.envelopes.retain(|e| e.name != name);
    }

    /// Clear the envelope sequence. Test/initialization reset only; not
    /// exposed over HTTP.
    pub fn reset(&mut self) {
        self.envelopes.clear();
    }

    /// Move `amount` from one envelope to another. The total budget is
    /// unaffected; only allocation moves. All checks run before either
    /// side mutates, so a failed transfer changes nothing.
    pub fn transfer(
        &mut self,
        from: &str,
        to: &str,
        amount: i64,
    ) -> DomainResult<(Envelope, Envelope)> {
        let Some(from_index) = self.envelopes.iter().position(|e| e.name == from) else {
            return Err(DomainError::not_found());
        };
        let Some(to_index) = self.envelopes.iter().position(|e| e.name == to) else {
            return Err(DomainError::not_found());
        };

        if amount < 0 {
            return Err(DomainError::validation(
                "transfer amount must be a non-negative number",
            ));
        }
        if amount > self.envelopes[from_index].amount {
            return Err(DomainError::invariant(
                "transfer amount exceeds the source envelope balance",
            ));
        }

        self.envelopes[from_index].amount -= amount;
        self.envelopes[to_index].amount += amount;
        Ok((
            self.envelopes[from_index].clone(),
            self.envelopes[to_index].clone(),
        ))
    }
}
