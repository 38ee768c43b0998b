//! Identifier and timestamp generation.
//!
//! # Responsibility
//! - Produce record identifiers from current time plus a random component.
//! - Provide the `IdSource` seam so callers can inject deterministic ids.
//!
//! # Invariants
//! - Uniqueness is probabilistic; generated ids are never re-checked for
//!   collisions against existing records.

use chrono::Utc;
use uuid::Uuid;

const RANDOM_SUFFIX_LEN: usize = 8;
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of fresh identifiers and creation timestamps for mutations.
pub trait IdSource {
    /// Returns a new identifier.
    fn generate_id(&mut self) -> String;
    /// Returns the current time in Unix epoch milliseconds.
    fn now_ms(&mut self) -> i64;
}

/// Wall-clock backed id source used by the store by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdSource;

impl IdSource for SystemIdSource {
    fn generate_id(&mut self) -> String {
        generate_id()
    }

    fn now_ms(&mut self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Returns a new identifier: base-36 epoch millis followed by a random
/// base-36 suffix drawn from a v4 UUID.
pub fn generate_id() -> String {
    let millis = u128::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
    let mut id = to_base36(millis);

    let random = to_base36(Uuid::new_v4().as_u128());
    let start = random.len().saturating_sub(RANDOM_SUFFIX_LEN);
    id.push_str(&format!("{:0>width$}", &random[start..], width = RANDOM_SUFFIX_LEN));
    id
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
