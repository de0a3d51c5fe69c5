//! Streak reconciliation and win aggregation.

use super::types::{StatBucket, Stats, Streak};
use crate::core::game_state::{Difficulty, Mode};
use chrono::NaiveDate;

impl Streak {
    /// True when a daily win is already recorded for `today`. Used to lock
    /// the daily puzzle for the rest of the calendar day.
    pub fn won_on(&self, today: NaiveDate) -> bool {
        self.count > 0 && self.last_played == Some(today)
    }

    /// Fold a daily win into the streak.
    pub fn record_win(&self, today: NaiveDate) -> Streak {
        Streak {
            count: self.count + 1,
            last_played: Some(today),
        }
    }

    /// Load-time repair: a streak only survives across consecutive calendar
    /// days. Unless the last play was today or yesterday, the chain is
    /// broken - count restarts at zero with today as the anchor.
    pub fn reconcile(&self, today: NaiveDate) -> Streak {
        let intact = self
            .last_played
            .is_some_and(|d| d == today || d.succ_opt() == Some(today));
        if intact {
            *self
        } else {
            Streak {
                count: 0,
                last_played: Some(today),
            }
        }
    }
}

impl Stats {
    /// Fold one win into a new snapshot. `streak_count` only feeds the
    /// highest-streak high-water mark, which tracks daily wins alone.
    pub fn record_win(
        &self,
        mode: Mode,
        difficulty: Option<Difficulty>,
        guess_count: u32,
        elapsed_seconds: u64,
        streak_count: u32,
    ) -> Stats {
        let mut next = self.clone();

        if next.bucket(mode, difficulty).is_none() {
            next.buckets.push(StatBucket::new(mode, difficulty));
        }
        if let Some(bucket) = next
            .buckets
            .iter_mut()
            .find(|b| b.mode == mode && b.difficulty == difficulty)
        {
            bucket.wins += 1;
            bucket.total_guesses += guess_count;
            bucket.fewest_guesses =
                Some(bucket.fewest_guesses.map_or(guess_count, |v| v.min(guess_count)));
            bucket.most_guesses =
                Some(bucket.most_guesses.map_or(guess_count, |v| v.max(guess_count)));
            bucket.total_seconds += elapsed_seconds;
            bucket.fastest_seconds = Some(
                bucket
                    .fastest_seconds
                    .map_or(elapsed_seconds, |v| v.min(elapsed_seconds)),
            );
            bucket.slowest_seconds = Some(
                bucket
                    .slowest_seconds
                    .map_or(elapsed_seconds, |v| v.max(elapsed_seconds)),
            );
        }

        if mode == Mode::Daily {
            next.highest_streak = next.highest_streak.max(streak_count);
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    // ── Streak ─────────────────────────────────────────────────

    #[test]
    fn test_record_win_increments_and_stamps_date() {
        let streak = Streak::default().record_win(date(2024, 6, 1));
        assert_eq!(streak.count, 1);
        assert_eq!(streak.last_played, Some(date(2024, 6, 1)));

        let streak = streak.record_win(date(2024, 6, 2));
        assert_eq!(streak.count, 2);
    }

    #[test]
    fn test_reconcile_keeps_streak_from_yesterday() {
        let streak = Streak {
            count: 3,
            last_played: Some(date(2024, 6, 9)),
        };
        let reconciled = streak.reconcile(date(2024, 6, 10));
        assert_eq!(reconciled.count, 3);
        assert_eq!(reconciled.last_played, Some(date(2024, 6, 9)));
    }

    #[test]
    fn test_reconcile_keeps_streak_from_today() {
        let streak = Streak {
            count: 2,
            last_played: Some(date(2024, 6, 10)),
        };
        assert_eq!(streak.reconcile(date(2024, 6, 10)), streak);
    }

    #[test]
    fn test_reconcile_resets_stale_streak() {
        let streak = Streak {
            count: 3,
            last_played: Some(date(2024, 6, 7)),
        };
        let reconciled = streak.reconcile(date(2024, 6, 10));
        assert_eq!(reconciled.count, 0);
        assert_eq!(reconciled.last_played, Some(date(2024, 6, 10)));
    }

    #[test]
    fn test_reconcile_handles_month_boundary() {
        let streak = Streak {
            count: 9,
            last_played: Some(date(2024, 5, 31)),
        };
        assert_eq!(streak.reconcile(date(2024, 6, 1)).count, 9);
    }

    #[test]
    fn test_reconcile_never_played() {
        let reconciled = Streak::default().reconcile(date(2024, 6, 10));
        assert_eq!(reconciled.count, 0);
        assert_eq!(reconciled.last_played, Some(date(2024, 6, 10)));
    }

    #[test]
    fn test_won_on_requires_win_today() {
        let today = date(2024, 6, 10);
        assert!(Streak {
            count: 1,
            last_played: Some(today)
        }
        .won_on(today));
        // Reconciliation stamps today with count 0; that is not a win.
        assert!(!Streak {
            count: 0,
            last_played: Some(today)
        }
        .won_on(today));
        assert!(!Streak {
            count: 4,
            last_played: Some(date(2024, 6, 9))
        }
        .won_on(today));
    }

    // ── Stats ──────────────────────────────────────────────────

    #[test]
    fn test_first_win_initializes_min_max_from_real_values() {
        let stats = Stats::default().record_win(Mode::SinglePlayer, Some(Difficulty::Easy), 3, 45, 0);
        let bucket = stats
            .bucket(Mode::SinglePlayer, Some(Difficulty::Easy))
            .expect("bucket created");

        assert_eq!(bucket.wins, 1);
        assert_eq!(bucket.total_guesses, 3);
        // A zero-initialized minimum would have stayed at 0 here.
        assert_eq!(bucket.fewest_guesses, Some(3));
        assert_eq!(bucket.most_guesses, Some(3));
        assert_eq!(bucket.fastest_seconds, Some(45));
        assert_eq!(bucket.slowest_seconds, Some(45));
        assert_eq!(bucket.total_seconds, 45);
    }

    #[test]
    fn test_min_max_update_across_wins() {
        let stats = Stats::default()
            .record_win(Mode::SinglePlayer, Some(Difficulty::Easy), 5, 60, 0)
            .record_win(Mode::SinglePlayer, Some(Difficulty::Easy), 2, 90, 0)
            .record_win(Mode::SinglePlayer, Some(Difficulty::Easy), 8, 30, 0);
        let bucket = stats
            .bucket(Mode::SinglePlayer, Some(Difficulty::Easy))
            .expect("bucket exists");

        assert_eq!(bucket.wins, 3);
        assert_eq!(bucket.total_guesses, 15);
        assert_eq!(bucket.fewest_guesses, Some(2));
        assert_eq!(bucket.most_guesses, Some(8));
        assert_eq!(bucket.fastest_seconds, Some(30));
        assert_eq!(bucket.slowest_seconds, Some(90));
        assert_eq!(bucket.total_seconds, 180);
        assert_eq!(bucket.average_guesses(), 5.0);
    }

    #[test]
    fn test_buckets_keyed_by_mode_and_difficulty() {
        let stats = Stats::default()
            .record_win(Mode::SinglePlayer, Some(Difficulty::Easy), 4, 10, 0)
            .record_win(Mode::SinglePlayer, Some(Difficulty::Hard), 6, 20, 0)
            .record_win(Mode::Multiplayer, Some(Difficulty::Easy), 2, 30, 0);

        assert_eq!(stats.buckets.len(), 3);
        assert_eq!(
            stats
                .bucket(Mode::SinglePlayer, Some(Difficulty::Easy))
                .map(|b| b.wins),
            Some(1)
        );
        assert!(stats.bucket(Mode::SinglePlayer, Some(Difficulty::Extreme)).is_none());
    }

    #[test]
    fn test_daily_wins_share_one_bucket_and_track_streak() {
        let stats = Stats::default()
            .record_win(Mode::Daily, None, 4, 100, 1)
            .record_win(Mode::Daily, None, 3, 80, 2);

        assert_eq!(stats.buckets.len(), 1);
        let bucket = stats.bucket(Mode::Daily, None).expect("daily bucket");
        assert_eq!(bucket.wins, 2);
        assert_eq!(stats.highest_streak, 2);
    }

    #[test]
    fn test_highest_streak_is_high_water_mark() {
        let stats = Stats::default()
            .record_win(Mode::Daily, None, 4, 10, 5)
            .record_win(Mode::Daily, None, 4, 10, 1);
        assert_eq!(stats.highest_streak, 5);
    }

    #[test]
    fn test_non_daily_wins_leave_highest_streak_alone() {
        let stats = Stats::default().record_win(Mode::SinglePlayer, Some(Difficulty::Easy), 4, 10, 9);
        assert_eq!(stats.highest_streak, 0);
    }

    #[test]
    fn test_record_win_is_pure() {
        let original = Stats::default();
        let _ = original.record_win(Mode::Daily, None, 4, 10, 1);
        assert_eq!(original, Stats::default());
    }
}
