//! Infraction and bonus ledger records.
//!
//! Both ledgers are append-only and owned by external collaborators. The
//! engine only reads records whose issue date falls inside the processed month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RawInstant;

/// Sentinel kind marking a bonus as a percentage of the prorated base.
pub const PERCENTAGE_KIND: &str = "PERCENTAGE";

/// A disciplinary record that deducts a percentage of the prorated base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Infraction {
    /// Unique identifier for the infraction.
    pub id: String,
    /// The employee the infraction was issued to.
    pub employee_id: String,
    /// Deduction in percent, 0-100. Zero records the infraction without
    /// financial effect.
    #[serde(default)]
    pub deduction_percentage: Decimal,
    /// When the infraction was issued.
    pub date_issued: RawInstant,
}

/// How a bonus amount is interpreted.
///
/// Serialized as a plain string: the sentinel `"PERCENTAGE"` or a currency code.
///
/// # Example
///
/// ```
/// use payroll_engine::models::BonusKind;
///
/// let kind: BonusKind = serde_json::from_str(r#""PERCENTAGE""#).unwrap();
/// assert_eq!(kind, BonusKind::Percentage);
///
/// let kind: BonusKind = serde_json::from_str(r#""NGN""#).unwrap();
/// assert_eq!(kind, BonusKind::Currency("NGN".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BonusKind {
    /// A percentage of the employee's prorated base salary.
    Percentage,
    /// A flat amount in the given currency.
    Currency(String),
}

impl From<String> for BonusKind {
    fn from(value: String) -> Self {
        if value == PERCENTAGE_KIND {
            BonusKind::Percentage
        } else {
            BonusKind::Currency(value)
        }
    }
}

impl From<BonusKind> for String {
    fn from(kind: BonusKind) -> Self {
        match kind {
            BonusKind::Percentage => PERCENTAGE_KIND.to_string(),
            BonusKind::Currency(code) => code,
        }
    }
}

/// An award granted to an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bonus {
    /// Unique identifier for the bonus.
    pub id: String,
    /// The employee the bonus was awarded to.
    pub employee_id: String,
    /// Flat amount, or percentage when `currency_or_kind` is `Percentage`.
    pub amount: Decimal,
    /// Currency code or the percentage sentinel.
    pub currency_or_kind: BonusKind,
    /// When the bonus was issued.
    pub date_issued: RawInstant,
}

impl Bonus {
    /// Returns true if the bonus is a percentage of the prorated base.
    pub fn is_percentage(&self) -> bool {
        self.currency_or_kind == BonusKind::Percentage
    }
}
