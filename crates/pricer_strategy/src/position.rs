//! Positions and P&L arithmetic.

use pricer_core::types::OptionType;

use crate::error::StrategyError;

/// Round-trip profit and loss: (exit - entry) * quantity.
///
/// # Examples
/// ```
/// use pricer_strategy::position::pnl;
///
/// assert_eq!(pnl(3.50, 5.25, 100.0), 175.0);
/// assert_eq!(pnl(3.50, 0.0, 100.0), -350.0);
/// ```
#[inline]
pub fn pnl(entry: f64, exit: f64, quantity: f64) -> f64 {
    (exit - entry) * quantity
}

/// Percent return of a round trip: 100 * (exit - entry) / entry.
///
/// # Errors
/// `StrategyError::ZeroEntryPrice` when `entry` is zero.
///
/// # Examples
/// ```
/// use pricer_strategy::position::percent_return;
///
/// assert_eq!(percent_return(50.0, 75.0).unwrap(), 50.0);
/// assert!(percent_return(0.0, 1.0).is_err());
/// ```
#[inline]
pub fn percent_return(entry: f64, exit: f64) -> Result<f64, StrategyError> {
    if entry == 0.0 {
        return Err(StrategyError::ZeroEntryPrice);
    }
    Ok(100.0 * (exit - entry) / entry)
}

/// Direction of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Bought: gains when value rises.
    Long,
    /// Sold: gains when value falls.
    Short,
}

impl Side {
    /// +1 for long, -1 for short.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Side::Long => 1.0,
            Side::Short => -1.0,
        }
    }
}

/// What a leg holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instrument {
    /// Shares of the underlying.
    Stock,
    /// A vanilla option settled at intrinsic value.
    Option {
        /// Call or put
        option_type: OptionType,
        /// Strike price
        strike: f64,
    },
}

/// A single leg: instrument, direction, entry price, quantity, multiplier.
///
/// Stock legs conventionally use a multiplier of 1; listed option legs use
/// 100 shares per contract.
///
/// # Examples
/// ```
/// use pricer_strategy::position::Position;
///
/// let leg = Position::long_call(100.0, 3.50, 2.0, 100.0);
/// // At 110: intrinsic 10 versus 3.50 paid, 2 contracts of 100 shares
/// assert_eq!(leg.pnl_at_expiry(110.0), (10.0 - 3.5) * 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    instrument: Instrument,
    side: Side,
    entry_price: f64,
    quantity: f64,
    multiplier: f64,
}

impl Position {
    /// Creates a leg from its parts.
    pub fn new(
        instrument: Instrument,
        side: Side,
        entry_price: f64,
        quantity: f64,
        multiplier: f64,
    ) -> Self {
        Self {
            instrument,
            side,
            entry_price,
            quantity,
            multiplier,
        }
    }

    /// Long call bought for `premium`.
    pub fn long_call(strike: f64, premium: f64, quantity: f64, multiplier: f64) -> Self {
        Self::new(
            Instrument::Option {
                option_type: OptionType::Call,
                strike,
            },
            Side::Long,
            premium,
            quantity,
            multiplier,
        )
    }

    /// Long put bought for `premium`.
    pub fn long_put(strike: f64, premium: f64, quantity: f64, multiplier: f64) -> Self {
        Self::new(
            Instrument::Option {
                option_type: OptionType::Put,
                strike,
            },
            Side::Long,
            premium,
            quantity,
            multiplier,
        )
    }

    /// Short call written for `premium`.
    pub fn short_call(strike: f64, premium: f64, quantity: f64, multiplier: f64) -> Self {
        Self::new(
            Instrument::Option {
                option_type: OptionType::Call,
                strike,
            },
            Side::Short,
            premium,
            quantity,
            multiplier,
        )
    }

    /// Short put written for `premium`.
    pub fn short_put(strike: f64, premium: f64, quantity: f64, multiplier: f64) -> Self {
        Self::new(
            Instrument::Option {
                option_type: OptionType::Put,
                strike,
            },
            Side::Short,
            premium,
            quantity,
            multiplier,
        )
    }

    /// Stock bought at `entry_price`.
    pub fn long_stock(entry_price: f64, shares: f64) -> Self {
        Self::new(Instrument::Stock, Side::Long, entry_price, shares, 1.0)
    }

    /// Stock sold short at `entry_price`.
    pub fn short_stock(entry_price: f64, shares: f64) -> Self {
        Self::new(Instrument::Stock, Side::Short, entry_price, shares, 1.0)
    }

    /// Value of one unit of the instrument at expiry.
    #[inline]
    pub fn unit_value_at_expiry(&self, spot: f64) -> f64 {
        match self.instrument {
            Instrument::Stock => spot,
            Instrument::Option {
                option_type,
                strike,
            } => option_type.intrinsic(spot, strike),
        }
    }

    /// Leg P&L at expiry for the given spot.
    ///
    /// sign * (value_at_expiry - entry) * quantity * multiplier
    #[inline]
    pub fn pnl_at_expiry(&self, spot: f64) -> f64 {
        let unit = self.unit_value_at_expiry(spot);
        self.side.sign() * (unit - self.entry_price) * self.quantity * self.multiplier
    }

    /// Returns the entry price.
    #[inline]
    pub fn entry_price(&self) -> f64 {
        self.entry_price
    }

    /// Returns the instrument.
    #[inline]
    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    /// Returns the direction.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }
}
