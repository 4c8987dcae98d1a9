use rust_decimal::Decimal;

use super::countries::normalize_country_code;
use super::error::QrBillError;
use super::types::*;
use super::validation;

/// Builder for the [`BillContext`] handed to the payload assembler.
///
/// ```
/// use qrbill::core::*;
/// use rust_decimal_macros::dec;
///
/// let ctx = BillContextBuilder::new(Currency::Chf)
///     .amount(dec!(1949.75))
///     .creditor(PartyBuilder::new("Robert Schneider AG",
///         AddressBuilder::new("Biel", "2501", "CH").street("Rue du Lac").building_number("1268").build())
///         .build())
///     .debtor(PartyBuilder::new("Pia-Maria Rutschmann-Schnyder",
///         AddressBuilder::new("Rorschach", "9400", "CH").street("Grosse Marktgasse 28").build())
///         .build())
///     .build_strict()
///     .unwrap();
///
/// assert_eq!(ctx.creditor.address.country_code, "CH");
/// ```
pub struct BillContextBuilder {
    currency: Currency,
    amount: Option<Decimal>,
    creditor: Option<Party>,
    debtor: Option<Party>,
    message: Option<String>,
}

impl BillContextBuilder {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            amount: None,
            creditor: None,
            debtor: None,
            message: None,
        }
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn creditor(mut self, party: Party) -> Self {
        self.creditor = Some(party);
        self
    }

    pub fn debtor(mut self, party: Party) -> Self {
        self.debtor = Some(party);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Build without content checks. Only the presence of both parties
    /// is enforced.
    pub fn build(self) -> Result<BillContext, QrBillError> {
        let creditor = self
            .creditor
            .ok_or_else(|| QrBillError::missing("BillContext", "creditor"))?;
        let debtor = self
            .debtor
            .ok_or_else(|| QrBillError::missing("BillContext", "debtor"))?;

        Ok(BillContext {
            currency: self.currency,
            amount: self.amount,
            creditor,
            debtor,
            message: self.message,
        })
    }

    /// Build and run [`validate_bill_context`](super::validate_bill_context).
    /// Returns all validation errors joined into one message.
    pub fn build_strict(self) -> Result<BillContext, QrBillError> {
        let ctx = self.build()?;
        let errors = validation::validate_bill_context(&ctx);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(QrBillError::Validation(msg));
        }
        Ok(ctx)
    }
}

/// Builder for a creditor or debtor.
pub struct PartyBuilder {
    name: String,
    address: Address,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name.trim().to_string(),
            address: self.address,
        }
    }
}

/// Builder for a postal address. The country code is normalized to
/// upper case.
pub struct AddressBuilder {
    street: Option<String>,
    building_number: Option<String>,
    postal_code: String,
    city: String,
    country_code: String,
}

impl AddressBuilder {
    pub fn new(
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            street: None,
            building_number: None,
            postal_code: postal_code.into(),
            city: city.into(),
            country_code: normalize_country_code(&country_code.into()),
        }
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn building_number(mut self, number: impl Into<String>) -> Self {
        self.building_number = Some(number.into());
        self
    }

    pub fn build(self) -> Address {
        Address {
            street: self.street.filter(|s| !s.trim().is_empty()),
            building_number: self.building_number.filter(|s| !s.trim().is_empty()),
            postal_code: self.postal_code,
            city: self.city,
            country_code: self.country_code,
        }
    }
}
