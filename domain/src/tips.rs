/// Messages cycled through by the dashboard tip banner
pub const TIPS: &[&str] = &[
    "You've spent ₹2000 on food delivery this week!",
    "Save ₹100 more this week to unlock rewards!",
    "Your electricity bill is due in 3 days.",
    "You've saved ₹5000 this month. Great job!",
];

/// Index of the tip shown after `current`, wrapping around
pub fn next_tip_index(current: usize) -> usize {
    (current + 1) % TIPS.len()
}

pub fn tip_at(index: usize) -> &'static str {
    TIPS[index % TIPS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tips_wrap_around() {
        assert_eq!(next_tip_index(0), 1);
        assert_eq!(next_tip_index(TIPS.len() - 1), 0);
        assert_eq!(tip_at(TIPS.len()), TIPS[0]);
    }
}
