//! Payload assembly: bill context + resolved reference → render request.
//!
//! The [`RenderRequest`] serializes (camelCase) into the configuration
//! object the rendering service expects. Nothing is validated here;
//! the reference already satisfies its regime and the context is the
//! caller's responsibility.

use rust_decimal::Decimal;
use serde::Serialize;

use super::iban::Iban;
use super::types::*;

/// Creditor block of a render request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderCreditor {
    /// Creditor name.
    pub name: String,
    /// Street, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// House number, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    /// Postal code.
    pub zip: String,
    /// Town.
    pub city: String,
    /// Compact IBAN or QR-IBAN.
    pub account: String,
    /// ISO 3166-1 alpha-2 code.
    pub country: String,
}

/// Debtor block of a render request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDebtor {
    /// Debtor name.
    pub name: String,
    /// Street, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// House number, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    /// Postal code.
    pub zip: String,
    /// Town.
    pub city: String,
    /// ISO 3166-1 alpha-2 code.
    pub country: String,
}

/// Configuration handed to the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    /// Bill currency.
    pub currency: Currency,
    /// Amount due; absent for an open-amount bill.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub amount: Option<Decimal>,
    /// Reference regime.
    pub reference_type: ReferenceType,
    /// Absent for NON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Unstructured message to the payee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payee and account.
    pub creditor: RenderCreditor,
    /// Payer.
    pub debtor: RenderDebtor,
}

/// Merge the bill context, the creditor account and the resolved
/// reference into a [`RenderRequest`].
pub fn assemble(ctx: &BillContext, iban: &Iban, reference: &ResolvedReference) -> RenderRequest {
    let creditor = &ctx.creditor;
    let debtor = &ctx.debtor;

    RenderRequest {
        currency: ctx.currency,
        amount: ctx.amount,
        reference_type: reference.kind(),
        reference: reference.as_option().map(str::to_string),
        message: ctx.message.clone(),
        creditor: RenderCreditor {
            name: creditor.name.clone(),
            address: creditor.address.street.clone(),
            building_number: creditor.address.building_number.clone(),
            zip: creditor.address.postal_code.clone(),
            city: creditor.address.city.clone(),
            account: iban.as_str().to_string(),
            country: creditor.address.country_code.clone(),
        },
        debtor: RenderDebtor {
            name: debtor.name.clone(),
            address: debtor.address.street.clone(),
            building_number: debtor.address.building_number.clone(),
            zip: debtor.address.postal_code.clone(),
            city: debtor.address.city.clone(),
            country: debtor.address.country_code.clone(),
        },
    }
}
