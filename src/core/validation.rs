use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::countries::is_known_country_code;
use super::error::ValidationError;
use super::types::*;

/// Highest amount a QR-bill can carry.
pub const MAX_AMOUNT: Decimal = dec!(999999999.99);

const MAX_NAME_LEN: usize = 70;
const MAX_STREET_LEN: usize = 70;
const MAX_BUILDING_NUMBER_LEN: usize = 16;
const MAX_POSTAL_CODE_LEN: usize = 16;
const MAX_CITY_LEN: usize = 35;
const MAX_MESSAGE_LEN: usize = 140;

/// Check a bill context against the QR-bill field rules.
/// Returns all validation errors found (not just the first).
///
/// The payload assembler does not call this; hosts that want early,
/// field-level feedback run it before assembling.
pub fn validate_bill_context(ctx: &BillContext) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(amount) = ctx.amount {
        if amount.is_sign_negative() && !amount.is_zero() {
            errors.push(ValidationError::with_rule(
                "amount",
                format!("amount {amount} must not be negative"),
                "Amt",
            ));
        } else if amount > MAX_AMOUNT {
            errors.push(ValidationError::with_rule(
                "amount",
                format!("amount {amount} exceeds the maximum of {MAX_AMOUNT}"),
                "Amt",
            ));
        }
        if amount.normalize().scale() > 2 {
            errors.push(ValidationError::with_rule(
                "amount",
                format!("amount {amount} has more than 2 decimal places"),
                "Amt",
            ));
        }
    }

    validate_party(&ctx.creditor, "creditor", &mut errors);
    validate_party(&ctx.debtor, "debtor", &mut errors);

    if let Some(message) = &ctx.message {
        check_len(message, MAX_MESSAGE_LEN, "message", "Ustrd", &mut errors);
    }

    errors
}

fn validate_party(party: &Party, prefix: &str, errors: &mut Vec<ValidationError>) {
    if party.name.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.name"),
            "name must not be empty",
            "Name",
        ));
    } else {
        check_len(
            &party.name,
            MAX_NAME_LEN,
            &format!("{prefix}.name"),
            "Name",
            errors,
        );
    }
    validate_address(&party.address, &format!("{prefix}.address"), errors);
}

fn validate_address(address: &Address, prefix: &str, errors: &mut Vec<ValidationError>) {
    if let Some(street) = &address.street {
        check_len(
            street,
            MAX_STREET_LEN,
            &format!("{prefix}.street"),
            "StrtNmOrAdrLine1",
            errors,
        );
    }
    if let Some(number) = &address.building_number {
        check_len(
            number,
            MAX_BUILDING_NUMBER_LEN,
            &format!("{prefix}.building_number"),
            "BldgNbOrAdrLine2",
            errors,
        );
    }

    if address.postal_code.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.postal_code"),
            "postal code must not be empty",
            "PstCd",
        ));
    } else {
        check_len(
            &address.postal_code,
            MAX_POSTAL_CODE_LEN,
            &format!("{prefix}.postal_code"),
            "PstCd",
            errors,
        );
    }

    if address.city.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.city"),
            "city must not be empty",
            "TwnNm",
        ));
    } else {
        check_len(
            &address.city,
            MAX_CITY_LEN,
            &format!("{prefix}.city"),
            "TwnNm",
            errors,
        );
    }

    if !is_known_country_code(&address.country_code) {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.country_code"),
            format!(
                "country code '{}' is not a known ISO 3166-1 alpha-2 code",
                address.country_code
            ),
            "Ctry",
        ));
    }
}

fn check_len(
    value: &str,
    max: usize,
    field: &str,
    element: &str,
    errors: &mut Vec<ValidationError>,
) {
    let len = value.chars().count();
    if len > max {
        errors.push(ValidationError::with_rule(
            field,
            format!("{len} characters exceed the maximum of {max}"),
            element,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::*;

    fn address() -> Address {
        AddressBuilder::new("Biel", "2501", "CH")
            .street("Rue du Lac")
            .building_number("1268")
            .build()
    }

    fn context() -> BillContext {
        BillContextBuilder::new(Currency::Chf)
            .amount(dec!(1949.75))
            .creditor(PartyBuilder::new("Robert Schneider AG", address()).build())
            .debtor(PartyBuilder::new("Pia Rutschmann", address()).build())
            .build()
            .unwrap()
    }

    #[test]
    fn valid_context() {
        assert!(validate_bill_context(&context()).is_empty());
    }

    #[test]
    fn zero_and_missing_amount_allowed() {
        let mut ctx = context();
        ctx.amount = Some(dec!(0));
        assert!(validate_bill_context(&ctx).is_empty());
        ctx.amount = None;
        assert!(validate_bill_context(&ctx).is_empty());
    }

    #[test]
    fn amount_bounds() {
        let mut ctx = context();
        ctx.amount = Some(MAX_AMOUNT);
        assert!(validate_bill_context(&ctx).is_empty());

        ctx.amount = Some(dec!(1000000000.00));
        let errors = validate_bill_context(&ctx);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule.as_deref(), Some("Amt"));

        ctx.amount = Some(dec!(-0.05));
        assert_eq!(validate_bill_context(&ctx).len(), 1);
    }

    #[test]
    fn amount_precision() {
        let mut ctx = context();
        ctx.amount = Some(dec!(10.005));
        assert_eq!(validate_bill_context(&ctx).len(), 1);
        // trailing zeros do not count
        ctx.amount = Some(dec!(10.5000));
        assert!(validate_bill_context(&ctx).is_empty());
    }

    #[test]
    fn unknown_country() {
        let mut ctx = context();
        ctx.debtor.address.country_code = "XX".into();
        let errors = validate_bill_context(&ctx);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "debtor.address.country_code");
    }

    #[test]
    fn empty_fields_all_reported() {
        let mut ctx = context();
        ctx.creditor.name = " ".into();
        ctx.creditor.address.city = String::new();
        ctx.creditor.address.postal_code = String::new();
        let fields: Vec<_> = validate_bill_context(&ctx)
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(
            fields,
            vec![
                "creditor.name",
                "creditor.address.postal_code",
                "creditor.address.city"
            ]
        );
    }

    #[test]
    fn length_limits() {
        let mut ctx = context();
        ctx.debtor.name = "N".repeat(71);
        ctx.debtor.address.city = "C".repeat(36);
        ctx.message = Some("m".repeat(141));
        assert_eq!(validate_bill_context(&ctx).len(), 3);

        // limits count characters, not bytes
        ctx.debtor.name = "ü".repeat(70);
        ctx.debtor.address.city = "Zürich".into();
        ctx.message = None;
        assert!(validate_bill_context(&ctx).is_empty());
    }
}
