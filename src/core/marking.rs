//! Guess scoring: the two-pass consuming feedback algorithm.

use crate::core::constants::CODE_LENGTH;
use crate::core::game_state::FeedbackMark;

/// Score a guess against the secret code.
///
/// Pass 1 takes exact matches and consumes those code slots. Pass 2 scans
/// the remaining slots left to right for each unscored guess digit and
/// consumes the first match it finds. A code slot is never consumed twice,
/// so duplicate digits in the guess cannot outnumber their occurrences in
/// the code.
pub fn mark_guess(
    guess: &[u8; CODE_LENGTH],
    code: &[u8; CODE_LENGTH],
) -> [FeedbackMark; CODE_LENGTH] {
    let mut feedback = [FeedbackMark::Absent; CODE_LENGTH];
    let mut consumed = [false; CODE_LENGTH];

    for i in 0..CODE_LENGTH {
        if guess[i] == code[i] {
            feedback[i] = FeedbackMark::Exact;
            consumed[i] = true;
        }
    }

    for i in 0..CODE_LENGTH {
        if feedback[i] == FeedbackMark::Exact {
            continue;
        }
        for j in 0..CODE_LENGTH {
            if !consumed[j] && guess[i] == code[j] {
                feedback[i] = FeedbackMark::Misplaced;
                consumed[j] = true;
                break;
            }
        }
    }

    feedback
}

/// A winning guess scores exact on every position.
pub fn is_winning(feedback: &[FeedbackMark; CODE_LENGTH]) -> bool {
    feedback.iter().all(|m| *m == FeedbackMark::Exact)
}

/// Feedback ordered exact, then misplaced, then absent - for difficulties
/// that show a summary without revealing positions. Stored feedback stays
/// positional; this reorders a copy for display.
pub fn sorted_summary(feedback: &[FeedbackMark; CODE_LENGTH]) -> [FeedbackMark; CODE_LENGTH] {
    let mut sorted = *feedback;
    sorted.sort_by_key(|m| match m {
        FeedbackMark::Exact => 0,
        FeedbackMark::Misplaced => 1,
        FeedbackMark::Absent => 2,
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackMark::{Absent, Exact, Misplaced};

    #[test]
    fn test_guessing_the_code_is_all_exact() {
        for code in [[1, 2, 3, 4], [0, 0, 0, 0], [9, 9, 1, 2]] {
            assert!(is_winning(&mark_guess(&code, &code)));
        }
    }

    #[test]
    fn test_reversed_code_is_all_misplaced() {
        let feedback = mark_guess(&[4, 3, 2, 1], &[1, 2, 3, 4]);
        assert_eq!(feedback, [Misplaced; 4]);
    }

    #[test]
    fn test_disjoint_digits_are_all_absent() {
        let feedback = mark_guess(&[5, 6, 7, 8], &[1, 2, 3, 4]);
        assert_eq!(feedback, [Absent; 4]);
    }

    #[test]
    fn test_duplicate_guess_digits_never_overcount() {
        // The code holds two 1s; the guess holds four. Pass 1 consumes both
        // code 1s, so pass 2 finds nothing left.
        let feedback = mark_guess(&[1, 1, 1, 1], &[1, 1, 2, 3]);
        assert_eq!(feedback, [Exact, Exact, Absent, Absent]);
    }

    #[test]
    fn test_single_code_digit_matches_only_once() {
        let feedback = mark_guess(&[2, 2, 5, 6], &[2, 3, 4, 7]);
        assert_eq!(feedback, [Exact, Absent, Absent, Absent]);
    }

    #[test]
    fn test_misplaced_consumes_first_available_slot() {
        // Guess digit 1 at position 0 matches code positions 1 and 3; the
        // scan takes position 1, leaving position 3 for the next 1.
        let feedback = mark_guess(&[1, 1, 2, 3], &[4, 1, 1, 1]);
        assert_eq!(feedback, [Misplaced, Exact, Misplaced, Absent]);
    }

    #[test]
    fn test_exact_match_reserves_its_slot() {
        // Code position 1 is consumed by the exact match before the
        // misplaced scan runs, so the duplicate 8 in the guess finds nothing.
        let feedback = mark_guess(&[8, 8, 0, 0], &[3, 8, 5, 6]);
        assert_eq!(feedback, [Absent, Exact, Absent, Absent]);
    }

    #[test]
    fn test_mixed_feedback() {
        let feedback = mark_guess(&[1, 3, 2, 9], &[1, 2, 3, 4]);
        assert_eq!(feedback, [Exact, Misplaced, Misplaced, Absent]);
    }

    #[test]
    fn test_mark_counts_bounded_by_code_occurrences() {
        // For every digit value, exact + misplaced marks never exceed its
        // occurrences in the code.
        let cases = [
            ([1, 1, 2, 2], [2, 2, 1, 1]),
            ([0, 0, 0, 1], [0, 1, 1, 1]),
            ([5, 5, 5, 5], [5, 1, 2, 5]),
            ([7, 8, 7, 8], [8, 7, 8, 7]),
        ];
        for (guess, code) in cases {
            let feedback = mark_guess(&guess, &code);
            for v in 0..10u8 {
                let in_code = code.iter().filter(|&&c| c == v).count();
                let marked = (0..4)
                    .filter(|&i| guess[i] == v && feedback[i] != Absent)
                    .count();
                assert!(
                    marked <= in_code,
                    "digit {} overcounted for guess {:?} vs code {:?}",
                    v,
                    guess,
                    code
                );
            }
        }
    }

    #[test]
    fn test_exact_count_matches_positions() {
        let cases = [
            ([1, 2, 3, 4], [1, 2, 4, 3]),
            ([0, 0, 1, 1], [0, 1, 0, 1]),
            ([6, 6, 6, 6], [6, 6, 6, 6]),
        ];
        for (guess, code) in cases {
            let feedback = mark_guess(&guess, &code);
            let exact_positions = (0..4).filter(|&i| guess[i] == code[i]).count();
            let exact_marks = feedback.iter().filter(|m| **m == Exact).count();
            assert_eq!(exact_marks, exact_positions);
        }
    }

    #[test]
    fn test_sorted_summary_orders_marks() {
        assert_eq!(
            sorted_summary(&[Absent, Exact, Misplaced, Exact]),
            [Exact, Exact, Misplaced, Absent]
        );
        // The original stays positional.
        let feedback = [Absent, Exact, Misplaced, Exact];
        let _ = sorted_summary(&feedback);
        assert_eq!(feedback, [Absent, Exact, Misplaced, Exact]);
    }
}
