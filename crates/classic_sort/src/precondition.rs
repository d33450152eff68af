use crate::SortError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Precondition {
    None,
    /// Every integer lies in `[lo, hi]`.
    IntegerRange { lo: i64, hi: i64 },
    /// Every integer is `>= 0`.
    NonNegative,
    /// Every real lies in `[0, 1)`.
    UnitInterval,
}

impl Precondition {
    pub fn admits_integer(self, value: i64) -> bool {
        match self {
            Precondition::IntegerRange { lo, hi } => (lo..=hi).contains(&value),
            Precondition::NonNegative => value >= 0,
            Precondition::None | Precondition::UnitInterval => true,
        }
    }

    pub fn admits_real(self, value: f64) -> bool {
        match self {
            Precondition::UnitInterval => (0.0..1.0).contains(&value),
            _ => true,
        }
    }

    /// Single scan reporting the first integer this precondition rejects.
    pub fn check_integers(self, data: &[i64]) -> Result<(), SortError> {
        let Some(index) = data.iter().position(|&v| !self.admits_integer(v)) else {
            return Ok(());
        };
        let value = data[index];
        Err(match self {
            Precondition::IntegerRange { lo, hi } => SortError::ValueOutOfRange {
                index,
                value,
                lo,
                hi,
            },
            _ => SortError::NegativeValue { index, value },
        })
    }

    /// Single scan reporting the first real this precondition rejects.
    pub fn check_reals(self, data: &[f64]) -> Result<(), SortError> {
        match data.iter().position(|&v| !self.admits_real(v)) {
            Some(index) => Err(SortError::RealOutOfRange {
                index,
                value: data[index],
            }),
            None => Ok(()),
        }
    }
}
