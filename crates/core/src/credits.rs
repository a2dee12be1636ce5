// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Credits amount.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

/// Credits amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Credits(u32);

impl Credits {
    /// The zero credits.
    pub const ZERO: Credits = Credits(0);

    /// Creates credits with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Credits {
    fn from(val: u32) -> Self {
        Credits(val)
    }
}

impl From<Credits> for u32 {
    fn from(val: Credits) -> Self {
        val.0
    }
}

impl ops::Add for Credits {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Credits(self.0 + rhs.0)
    }
}

impl ops::AddAssign for Credits {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl ops::Sub<Credits> for Credits {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl ops::SubAssign for Credits {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl ops::Mul<u32> for Credits {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0;
        if amount >= 1_000_000 {
            write!(
                f,
                "{},{:03},{:03}",
                amount / 1_000_000,
                amount % 1_000_000 / 1_000,
                amount % 1000
            )
        } else if amount >= 1_000 {
            write!(f, "{},{:03}", amount / 1000, amount % 1000)
        } else {
            write!(f, "{}", amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credits_formatting() {
        assert_eq!(Credits(0).to_string(), "0");
        assert_eq!(Credits(123).to_string(), "123");
        assert_eq!(Credits(1_000).to_string(), "1,000");
        assert_eq!(Credits(12_345).to_string(), "12,345");
        assert_eq!(Credits(123_456).to_string(), "123,456");
        assert_eq!(Credits(1_234_567).to_string(), "1,234,567");
    }

    #[test]
    fn credits_arithmetic() {
        let mut credits = Credits::new(100);
        credits -= Credits::new(5);
        assert_eq!(credits, Credits::new(95));

        credits += Credits::new(5) * 9;
        assert_eq!(credits, Credits::new(140));

        // Subtraction saturates at zero.
        credits -= Credits::new(1_000);
        assert_eq!(credits, Credits::ZERO);
    }
}
