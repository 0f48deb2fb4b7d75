//! PayHere's keyed double-MD5 integrity scheme.
//!
//! The same functions serve the outbound (checkout) and inbound
//! (notification) directions; the single correctness risk in this scheme is
//! format drift between the two call sites, so both go through here.

use rust_decimal::Decimal;

/// 32-character uppercase hex MD5 digest of `message`.
pub fn md5_upper(message: &[u8]) -> String {
    hex::encode(md5::compute(message).0).to_uppercase()
}

/// Formats an amount the way PayHere hashes it: exactly two decimal places.
///
/// Any other rendering (e.g. `1500` instead of `1500.00`) produces a
/// signature mismatch on the provider side.
pub fn format_amount(amount: Decimal) -> String {
    format!("{amount:.2}")
}

/// Signature for the outbound hosted-checkout payload.
///
/// `uppercase(md5(merchant_id + order_id + amount + currency +
/// uppercase(md5(merchant_secret))))`, with `amount` already formatted via
/// [`format_amount`].
pub fn checkout_signature(
    merchant_id: &str,
    order_id: &str,
    amount: &str,
    currency: &str,
    merchant_secret: &str,
) -> String {
    let secret_digest = md5_upper(merchant_secret.as_bytes());
    md5_upper(format!("{merchant_id}{order_id}{amount}{currency}{secret_digest}").as_bytes())
}

/// Signature PayHere attaches to server notifications (`md5sig`).
///
/// Identical to [`checkout_signature`] with `status_code` concatenated
/// before the secret digest. The inbound amount string is hashed verbatim,
/// never reformatted.
pub fn notification_signature(
    merchant_id: &str,
    order_id: &str,
    amount: &str,
    currency: &str,
    status_code: &str,
    merchant_secret: &str,
) -> String {
    let secret_digest = md5_upper(merchant_secret.as_bytes());
    md5_upper(
        format!("{merchant_id}{order_id}{amount}{currency}{status_code}{secret_digest}").as_bytes(),
    )
}
