//! Letter grades from a percentage score.

use strum_macros::{Display, EnumString};

/// Lowest passing percentage.
pub const PASS_MARK: i32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// `A` from 90, `B` from 80, `C` from 70, `D` from 60, `F` below.
    pub fn from_percentage(percentage: i32) -> Self {
        match percentage {
            p if p >= 90 => Grade::A,
            p if p >= 80 => Grade::B,
            p if p >= 70 => Grade::C,
            p if p >= 60 => Grade::D,
            _ => Grade::F,
        }
    }
}

pub fn passed(percentage: i32) -> bool {
    percentage >= PASS_MARK
}

/// The two lines printed for a score.
pub fn report(percentage: i32) -> String {
    let grade = Grade::from_percentage(percentage);
    let verdict = if passed(percentage) {
        "Congratulations! You have passed."
    } else {
        "Better luck next time!"
    };
    format!("Your grade is: {grade}.\n{verdict}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(Grade::from_percentage(95), Grade::A);
        assert_eq!(Grade::from_percentage(90), Grade::A);
        assert_eq!(Grade::from_percentage(89), Grade::B);
        assert_eq!(Grade::from_percentage(80), Grade::B);
        assert_eq!(Grade::from_percentage(70), Grade::C);
        assert_eq!(Grade::from_percentage(65), Grade::D);
        assert_eq!(Grade::from_percentage(59), Grade::F);
        assert_eq!(Grade::from_percentage(-3), Grade::F);
        assert_eq!(Grade::from_percentage(120), Grade::A);
    }

    #[test]
    fn reports() {
        assert_eq!(
            report(95),
            "Your grade is: A.\nCongratulations! You have passed.\n"
        );
        assert_eq!(report(65), "Your grade is: D.\nBetter luck next time!\n");
        assert_eq!(report(59), "Your grade is: F.\nBetter luck next time!\n");
        assert_eq!(
            report(70),
            "Your grade is: C.\nCongratulations! You have passed.\n"
        );
    }

    #[test]
    fn grade_names_round_trip_through_strings() {
        assert_eq!(Grade::D.to_string(), "D");
        assert_eq!("F".parse::<Grade>(), Ok(Grade::F));
    }
}
