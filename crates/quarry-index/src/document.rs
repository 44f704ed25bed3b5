//! Document metadata and search result types.

use std::{fmt, str::FromStr};

use serde::Serialize;

/// Identifier supplied by the caller when a document is added.
///
/// Signed so that negative ids coming from untrusted input can be rejected
/// with a proper error instead of failing to convert.
pub type DocumentId = i32;

/// Moderation status attached to every document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Live document, the default search target.
    #[default]
    Actual,
    /// Outdated or off-topic document.
    Irrelevant,
    /// Document blocked by moderation.
    Banned,
    /// Document withdrawn by its owner.
    Removed,
}

impl DocumentStatus {
    /// All statuses, in ordinal order.
    pub const ALL: [Self; 4] = [Self::Actual, Self::Irrelevant, Self::Banned, Self::Removed];

    /// Returns the numeric code of this status (0 for `Actual` through 3 for `Removed`).
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Actual => 0,
            Self::Irrelevant => 1,
            Self::Banned => 2,
            Self::Removed => 3,
        }
    }

    /// Returns the lowercase name of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Actual => "actual",
            Self::Irrelevant => "irrelevant",
            Self::Banned => "banned",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = String;

    /// Accepts a status name in any case, or its ordinal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| {
                trimmed.eq_ignore_ascii_case(status.as_str())
                    || trimmed == status.ordinal().to_string()
            })
            .ok_or_else(|| {
                format!("unknown document status '{s}' (expected actual, irrelevant, banned, removed or 0-3)")
            })
    }
}

/// Stored metadata for one indexed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DocumentRecord {
    /// Status given at insertion.
    pub status: DocumentStatus,
    /// Average of the supplied ratings, truncated toward zero.
    pub rating: i32,
}

/// A ranked search hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Document {
    /// Id of the matching document.
    pub id: DocumentId,
    /// Summed TF-IDF score over the query's plus terms.
    pub relevance: f64,
    /// The document's average rating.
    pub rating: i32,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id,
            SignificantDigits(self.relevance),
            self.rating
        )
    }
}

/// Number of significant digits used when printing a relevance.
const RELEVANCE_DIGITS: usize = 6;

/// Formats a float with [`RELEVANCE_DIGITS`] significant digits.
///
/// Trailing zeros are dropped. Exponents below -4 or at least the digit count
/// switch to scientific notation with a signed two-digit exponent, so `1e-7`
/// prints as `1e-07`.
struct SignificantDigits(f64);

impl fmt::Display for SignificantDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value == 0.0 || !value.is_finite() {
            return write!(f, "{value}");
        }

        // Round once in scientific form so the exponent reflects the rounding.
        let scientific = format!("{:.*e}", RELEVANCE_DIGITS - 1, value);
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return write!(f, "{value}");
        };
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= RELEVANCE_DIGITS as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{sign}{:02}",
                trim_fraction(mantissa),
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (RELEVANCE_DIGITS as i32 - 1 - exponent).max(0) as usize;
            let fixed = format!("{value:.decimals$}");
            f.write_str(trim_fraction(&fixed))
        }
    }
}

/// Strips trailing zeros, and a then-trailing point, from a decimal string.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Computes the integer mean of `ratings`, truncating toward zero.
///
/// Returns `None` for an empty slice.
pub(crate) fn average_rating(ratings: &[i32]) -> Option<i32> {
    if ratings.is_empty() {
        return None;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    let count = i64::try_from(ratings.len()).ok()?;
    // The mean of i32 values always fits in an i32.
    i32::try_from(sum / count).ok()
}
