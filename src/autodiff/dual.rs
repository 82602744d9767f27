//! Forward-mode dual numbers.
//!
//! A [`Dual`] carries a primal value `re` and one tangent `eps`. Pushing
//! duals through a transform written against [`Scalar`] evaluates the
//! transform and its directional derivative in one pass, with no tape and
//! no in-place aliasing concerns.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::numerics::scalar::Scalar;

/// Dual — `re + eps·ε` with `ε² = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dual {
    /// Primal value.
    pub re: f64,
    /// Tangent (directional derivative).
    pub eps: f64,
}

impl Dual {
    pub fn new(re: f64, eps: f64) -> Self {
        Dual { re, eps }
    }

    /// A constant: zero tangent.
    pub fn constant(re: f64) -> Self {
        Dual { re, eps: 0.0 }
    }

    /// An independent variable: unit tangent.
    pub fn variable(re: f64) -> Self {
        Dual { re, eps: 1.0 }
    }
}

impl fmt::Display for Dual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.re, self.eps)
    }
}

// Primal first, tangent as tie-break, so the ordering agrees with `PartialEq`.
impl PartialOrd for Dual {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.re.partial_cmp(&other.re) {
            Some(Ordering::Equal) => self.eps.partial_cmp(&other.eps),
            ord => ord,
        }
    }
}

impl Add for Dual {
    type Output = Dual;
    #[inline]
    fn add(self, rhs: Dual) -> Dual {
        Dual { re: self.re + rhs.re, eps: self.eps + rhs.eps }
    }
}

impl Sub for Dual {
    type Output = Dual;
    #[inline]
    fn sub(self, rhs: Dual) -> Dual {
        Dual { re: self.re - rhs.re, eps: self.eps - rhs.eps }
    }
}

impl Mul for Dual {
    type Output = Dual;
    #[inline]
    fn mul(self, rhs: Dual) -> Dual {
        Dual { re: self.re * rhs.re, eps: self.re * rhs.eps + self.eps * rhs.re }
    }
}

impl Div for Dual {
    type Output = Dual;
    #[inline]
    fn div(self, rhs: Dual) -> Dual {
        let inv = 1.0 / rhs.re;
        Dual { re: self.re * inv, eps: (self.eps * rhs.re - self.re * rhs.eps) * inv * inv }
    }
}

impl Neg for Dual {
    type Output = Dual;
    #[inline]
    fn neg(self) -> Dual {
        Dual { re: -self.re, eps: -self.eps }
    }
}

impl Zero for Dual {
    fn zero() -> Self {
        Dual::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.eps == 0.0
    }
}

impl One for Dual {
    fn one() -> Self {
        Dual::constant(1.0)
    }
}

impl Scalar for Dual {
    fn from_f64(value: f64) -> Self {
        Dual::constant(value)
    }

    fn to_f64(self) -> f64 {
        self.re
    }

    fn abs(self) -> Self {
        if self.re < 0.0 { -self } else { self }
    }

    // Saturated entries are constants: their tangent is zero.
    fn clip(self, lo: Self, hi: Self) -> Self {
        if self.re < lo.re {
            Dual::constant(lo.re)
        } else if self.re > hi.re {
            Dual::constant(hi.re)
        } else {
            self
        }
    }

    fn sqrt(self) -> Self {
        let root = self.re.sqrt();
        Dual::new(root, self.eps / (2.0 * root))
    }

    fn epsilon() -> f64 {
        f64::EPSILON
    }
}
