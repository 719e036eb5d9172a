use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};

#[cfg(feature = "tracing")]
use tracing::warn;

use crate::Error;

/// A natural number in unary: zero, or the successor of another natural.
///
/// The chain of `Successor`s is as long as the value it denotes, so every
/// representation is unique and structural equality is value equality.
/// Operators never modify their inputs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Natural {
    Zero,
    Successor(Box<Natural>),
}
impl Natural {
    pub fn one() -> Self {
        Natural::Zero.successor()
    }
    pub fn successor(self) -> Self {
        Natural::Successor(Box::new(self))
    }
    pub fn predecessor(&self) -> Option<&Natural> {
        match self {
            Natural::Zero => None,
            Natural::Successor(pred) => Some(&**pred),
        }
    }
    pub fn is_zero(&self) -> bool {
        matches!(self, Natural::Zero)
    }
    /// Counts the successors. Meant for display, not arithmetic.
    pub fn to_usize(&self) -> usize {
        let mut count = 0;
        let mut n = self;
        while let Some(pred) = n.predecessor() {
            count += 1;
            n = pred;
        }
        count
    }

    /// Subtracts `subtrahend` by peeling one successor off both sides at a
    /// time. Fails with [`Error::Underflow`] when `subtrahend` is the larger;
    /// use `a - b` for a signed [`Integer`](crate::Integer) result instead.
    #[cfg_attr(feature = "trace", tracing::instrument)]
    pub fn subtract(&self, subtrahend: &Natural) -> Result<Natural, Error> {
        let (mut a, mut b) = (self, subtrahend);
        loop {
            match (a.predecessor(), b.predecessor()) {
                (_, None) => return Ok(a.clone()),
                (Some(x), Some(y)) => {
                    a = x;
                    b = y;
                }
                (None, Some(_)) => {
                    #[cfg(feature = "tracing")]
                    warn!("Natural underflow: {} - {}", self, subtrahend);
                    return Err(Error::underflow(self, subtrahend));
                }
            }
        }
    }

    /// Integer division by repeated subtraction. A zero divisor is rejected
    /// up front with [`Error::DivideByZero`].
    #[cfg_attr(feature = "trace", tracing::instrument)]
    pub fn divide(&self, divisor: &Natural) -> Result<Natural, Error> {
        if divisor.is_zero() {
            #[cfg(feature = "tracing")]
            warn!("Division by zero: {} / 0", self);
            return Err(Error::divide_by_zero(self));
        }
        let mut quotient = Natural::Zero;
        let mut remainder = self.clone();
        while remainder >= *divisor {
            remainder = remainder.subtract(divisor)?;
            quotient = quotient.successor();
        }
        Ok(quotient)
    }
}
impl Default for Natural {
    fn default() -> Self {
        Natural::Zero
    }
}
impl From<usize> for Natural {
    fn from(n: usize) -> Self {
        (0..n).fold(Natural::Zero, |acc, _| acc.successor())
    }
}

impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        let (mut a, mut b) = (self, other);
        loop {
            match (a.predecessor(), b.predecessor()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(x), Some(y)) => {
                    a = x;
                    b = y;
                }
            }
        }
    }
}
impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// moves one successor at a time from `lhs` onto `sum` until `lhs` bottoms out
fn add_onto(lhs: &Natural, mut sum: Natural) -> Natural {
    let mut lhs = lhs;
    while let Some(pred) = lhs.predecessor() {
        sum = sum.successor();
        lhs = pred;
    }
    sum
}

impl Add for Natural {
    type Output = Natural;
    fn add(self, rhs: Natural) -> Natural {
        add_onto(&self, rhs)
    }
}
impl<'a, 'b> Add<&'b Natural> for &'a Natural {
    type Output = Natural;
    fn add(self, rhs: &'b Natural) -> Natural {
        add_onto(self, rhs.clone())
    }
}

impl Mul for Natural {
    type Output = Natural;
    fn mul(self, rhs: Natural) -> Natural {
        &self * &rhs
    }
}
impl<'a, 'b> Mul<&'b Natural> for &'a Natural {
    type Output = Natural;
    // a * S(p) = a + a * p
    fn mul(self, rhs: &'b Natural) -> Natural {
        let mut product = Natural::Zero;
        let mut rhs = rhs;
        while let Some(pred) = rhs.predecessor() {
            product = add_onto(self, product);
            rhs = pred;
        }
        product
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_usize())
    }
}
impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
