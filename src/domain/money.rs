use {
    super::error::GatewayError,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Amount in integer minor units (cents), the representation the provider
/// API speaks. Major units (`amount / 100`) are a display concern only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64")]
pub struct MoneyAmount(i64);

impl MoneyAmount {
    pub fn new(minor: i64) -> Result<Self, GatewayError> {
        if minor < 0 {
            return Err(GatewayError::InvalidAmount(minor));
        }
        Ok(Self(minor))
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn minor(&self) -> i64 {
        self.0
    }

    pub fn checked_add(self, other: MoneyAmount) -> Option<MoneyAmount> {
        self.0.checked_add(other.0).map(MoneyAmount)
    }

    pub fn checked_sub(self, other: MoneyAmount) -> Option<MoneyAmount> {
        self.0
            .checked_sub(other.0)
            .filter(|&v| v >= 0)
            .map(MoneyAmount)
    }
}

impl TryFrom<i64> for MoneyAmount {
    type Error = GatewayError;

    fn try_from(minor: i64) -> Result<Self, Self::Error> {
        Self::new(minor)
    }
}

/// Renders in major units, e.g. 5000 → "50.00".
impl fmt::Display for MoneyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// The currencies Paylike settles in. A store configured with anything
/// outside this set cannot use the gateway at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Aud,
    Cad,
    Eur,
    Gbp,
    Jpy,
    Nzd,
    Chf,
    Hkd,
    Sgd,
    Sek,
    Dkk,
    Pln,
    Nok,
    Czk,
    Ils,
    Mxn,
    Php,
    Twd,
    Thb,
    Myr,
    Rub,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Nzd => "NZD",
            Self::Chf => "CHF",
            Self::Hkd => "HKD",
            Self::Sgd => "SGD",
            Self::Sek => "SEK",
            Self::Dkk => "DKK",
            Self::Pln => "PLN",
            Self::Nok => "NOK",
            Self::Czk => "CZK",
            Self::Ils => "ILS",
            Self::Mxn => "MXN",
            Self::Php => "PHP",
            Self::Twd => "TWD",
            Self::Thb => "THB",
            Self::Myr => "MYR",
            Self::Rub => "RUB",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Currency {
    type Error = GatewayError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "AUD" => Ok(Self::Aud),
            "CAD" => Ok(Self::Cad),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "JPY" => Ok(Self::Jpy),
            "NZD" => Ok(Self::Nzd),
            "CHF" => Ok(Self::Chf),
            "HKD" => Ok(Self::Hkd),
            "SGD" => Ok(Self::Sgd),
            "SEK" => Ok(Self::Sek),
            "DKK" => Ok(Self::Dkk),
            "PLN" => Ok(Self::Pln),
            "NOK" => Ok(Self::Nok),
            "CZK" => Ok(Self::Czk),
            "ILS" => Ok(Self::Ils),
            "MXN" => Ok(Self::Mxn),
            "PHP" => Ok(Self::Php),
            "TWD" => Ok(Self::Twd),
            "THB" => Ok(Self::Thb),
            "MYR" => Ok(Self::Myr),
            "RUB" => Ok(Self::Rub),
            other => Err(GatewayError::UnsupportedCurrency(other.to_string())),
        }
    }
}
