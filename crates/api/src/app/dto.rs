//! Request DTOs and JSON mapping helpers.
//!
//! The wire format is camelCase JSON; non-numeric amounts and missing
//! fields never reach the store — the typed extractors reject them with
//! a 400 before a handler runs.

use serde::Deserialize;
use serde_json::json;

use budgetd_ledger::Envelope;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBudgetRequest {
    pub total_budget: i64,
}

/// Body wrapper used by POST and PUT on envelopes: `{"envelope": {...}}`.
#[derive(Debug, Deserialize)]
pub struct EnvelopeBody {
    pub envelope: EnvelopeRequest,
}

#[derive(Debug, Deserialize)]
pub struct EnvelopeRequest {
    pub name: String,
    pub amount: i64,
}

impl From<EnvelopeRequest> for Envelope {
    fn from(req: EnvelopeRequest) -> Self {
        Envelope::new(req.name, req.amount)
    }
}

#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub amount: i64,
}

pub fn envelope_to_json(envelope: &Envelope) -> serde_json::Value {
    json!({
        "name": envelope.name,
        "amount": envelope.amount,
    })
}
