use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::Natural;

/// A signed value held as the unreduced difference `positive - negative`.
///
/// `(1, 0)` and `(2, 1)` are different representations of the same value,
/// and compare equal.
#[derive(Clone, Default)]
pub struct Integer {
    positive: Natural,
    negative: Natural,
}
impl Integer {
    pub fn new(positive: Natural, negative: Natural) -> Self {
        Integer { positive, negative }
    }
    pub fn positive_part(&self) -> &Natural {
        &self.positive
    }
    pub fn negative_part(&self) -> &Natural {
        &self.negative
    }
    pub fn into_parts(self) -> (Natural, Natural) {
        (self.positive, self.negative)
    }
    pub fn to_i128(&self) -> i128 {
        self.positive.to_usize() as i128 - self.negative.to_usize() as i128
    }
}
impl From<Natural> for Integer {
    fn from(positive: Natural) -> Self {
        Integer {
            positive,
            negative: Natural::Zero,
        }
    }
}

// p1 - n1 == p2 - n2 without subtracting, since natural subtraction can fail
impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        &self.positive + &other.negative == &self.negative + &other.positive
    }
}
impl Eq for Integer {}

impl Neg for Integer {
    type Output = Integer;
    fn neg(self) -> Integer {
        Integer {
            positive: self.negative,
            negative: self.positive,
        }
    }
}
impl Neg for Natural {
    type Output = Integer;
    fn neg(self) -> Integer {
        Integer {
            positive: Natural::Zero,
            negative: self,
        }
    }
}

impl Add for Integer {
    type Output = Integer;
    fn add(self, rhs: Integer) -> Integer {
        Integer {
            positive: self.positive + rhs.positive,
            negative: self.negative + rhs.negative,
        }
    }
}
impl Sub for Integer {
    type Output = Integer;
    fn sub(self, rhs: Integer) -> Integer {
        self + -rhs
    }
}
/// Total subtraction of naturals: the difference is kept as an [`Integer`]
/// rather than failing the way [`Natural::subtract`] does.
impl Sub for Natural {
    type Output = Integer;
    fn sub(self, rhs: Natural) -> Integer {
        Integer::new(self, rhs)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i128())
    }
}
impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} - {})", self.positive, self.negative)
    }
}
