//! Weekly skill aggregation for the dashboard's stacked-bar chart.
//!
//! Collapses each student's per-lesson skill labels within one week
//! into a single tier by majority vote, then counts students per tier
//! for the class. Pure computation over an externally fetched
//! snapshot; recomputed on every query, nothing is cached.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{Duration, NaiveDate, Weekday};

use crate::errors::Result;
use crate::models::grading::entities::SkillTier;
use crate::models::reports::entities::ClassPerformance;
use crate::models::reports::responses::WeeklySkillDistribution;
use crate::storage::Storage;
use crate::utils::parse_skill_text;

/// Inclusive [Monday, Sunday] window of the week containing `date`.
pub fn week_window(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week = date.week(Weekday::Mon);
    (week.first_day(), week.last_day())
}

/// Aggregate one class for the week containing `anchor`.
pub fn weekly_skill_distribution(
    class: &ClassPerformance,
    anchor: NaiveDate,
) -> WeeklySkillDistribution {
    let (week_start, week_end) = week_window(anchor);

    let in_window: HashSet<i64> = class
        .sessions
        .iter()
        .filter(|session| session.date >= week_start && session.date <= week_end)
        .map(|session| session.id)
        .collect();

    let mut tier_counts: HashMap<SkillTier, i64> = HashMap::new();
    for student in &class.students {
        let mut votes: HashMap<SkillTier, i64> = HashMap::new();
        for entry in &student.entries {
            if !in_window.contains(&entry.session_id) {
                continue;
            }
            // unrecognized or empty skill text casts no vote
            if let Some(tier) = parse_skill_text(&entry.skills) {
                *votes.entry(tier).or_insert(0) += 1;
            }
        }
        *tier_counts.entry(majority_tier(&votes)).or_insert(0) += 1;
    }

    WeeklySkillDistribution {
        class_id: class.class_id,
        week_start,
        week_end,
        tot_count: tier_counts.get(&SkillTier::Tot).copied().unwrap_or(0),
        kha_count: tier_counts.get(&SkillTier::Kha).copied().unwrap_or(0),
        trung_binh_count: tier_counts
            .get(&SkillTier::TrungBinh)
            .copied()
            .unwrap_or(0),
        total_students: class.students.len() as i64,
    }
}

/// One distribution per week across `[from, to]`, one chart bar each.
pub fn weekly_series(
    class: &ClassPerformance,
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<WeeklySkillDistribution> {
    let mut series = Vec::new();
    let (mut week_start, _) = week_window(from);
    while week_start <= to {
        series.push(weekly_skill_distribution(class, week_start));
        week_start = week_start + Duration::days(7);
    }
    series
}

/// Fetch the snapshot the aggregation runs over.
pub async fn fetch_class_performance(
    storage: &Arc<dyn Storage>,
    class_id: i64,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<ClassPerformance> {
    let sessions = storage.list_lesson_sessions(class_id, from, to).await?;
    let students = storage.list_performance_entries(class_id).await?;
    Ok(ClassPerformance {
        class_id,
        sessions,
        students,
    })
}

/// Majority vote with a lower-tier tie-break.
///
/// Tiers are scanned in ascending order with a strict comparison, so
/// a tie keeps the lower tier and a student with no votes at all
/// lands on Trung bình.
fn majority_tier(votes: &HashMap<SkillTier, i64>) -> SkillTier {
    let mut winner = SkillTier::TrungBinh;
    let mut best = votes.get(&SkillTier::TrungBinh).copied().unwrap_or(0);
    for tier in [SkillTier::Kha, SkillTier::Tot] {
        let count = votes.get(&tier).copied().unwrap_or(0);
        if count > best {
            winner = tier;
            best = count;
        }
    }
    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reports::entities::{LessonSession, SkillEntry, StudentRecordSet};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn student(id: i64, entries: Vec<(i64, &str)>) -> StudentRecordSet {
        StudentRecordSet {
            student_id: id,
            student_name: format!("Học sinh {id}"),
            entries: entries
                .into_iter()
                .map(|(session_id, skills)| SkillEntry {
                    session_id,
                    skills: skills.to_string(),
                })
                .collect(),
        }
    }

    // week of 2024-10-07 (Monday) .. 2024-10-13 (Sunday)
    fn sample_class(students: Vec<StudentRecordSet>) -> ClassPerformance {
        ClassPerformance {
            class_id: 1,
            sessions: vec![
                LessonSession { id: 100, date: date(2024, 10, 7) },
                LessonSession { id: 101, date: date(2024, 10, 9) },
                LessonSession { id: 102, date: date(2024, 10, 11) },
                // previous week, must not count
                LessonSession { id: 99, date: date(2024, 10, 4) },
            ],
            students,
        }
    }

    #[test]
    fn test_week_window_is_monday_to_sunday() {
        let (start, end) = week_window(date(2024, 10, 9)); // a Wednesday
        assert_eq!(start, date(2024, 10, 7));
        assert_eq!(end, date(2024, 10, 13));
        // a Monday anchors its own week
        assert_eq!(week_window(date(2024, 10, 7)).0, date(2024, 10, 7));
        // a Sunday belongs to the week started the previous Monday
        assert_eq!(week_window(date(2024, 10, 13)).0, date(2024, 10, 7));
    }

    #[test]
    fn test_majority_wins() {
        let class = sample_class(vec![student(
            1,
            vec![(100, "Tốt"), (101, "Tốt"), (102, "Khá")],
        )]);
        let dist = weekly_skill_distribution(&class, date(2024, 10, 9));
        assert_eq!(dist.tot_count, 1);
        assert_eq!(dist.kha_count, 0);
        assert_eq!(dist.trung_binh_count, 0);
        assert_eq!(dist.total_students, 1);
    }

    #[test]
    fn test_tie_prefers_lower_tier() {
        let class = sample_class(vec![student(1, vec![(100, "Tốt"), (101, "Khá")])]);
        let dist = weekly_skill_distribution(&class, date(2024, 10, 9));
        assert_eq!(dist.kha_count, 1);
        assert_eq!(dist.tot_count, 0);

        let class = sample_class(vec![student(
            1,
            vec![(100, "Trung bình"), (101, "Tốt")],
        )]);
        let dist = weekly_skill_distribution(&class, date(2024, 10, 9));
        assert_eq!(dist.trung_binh_count, 1);
    }

    #[test]
    fn test_no_votes_defaults_to_trung_binh() {
        // no entries in the window, and unparseable text respectively
        let class = sample_class(vec![
            student(1, vec![(99, "Tốt")]),
            student(2, vec![(100, "tuyệt vời")]),
            student(3, vec![]),
        ]);
        let dist = weekly_skill_distribution(&class, date(2024, 10, 9));
        assert_eq!(dist.trung_binh_count, 3);
        assert_eq!(dist.total_students, 3);
    }

    #[test]
    fn test_out_of_window_sessions_are_ignored() {
        let class = sample_class(vec![student(
            1,
            vec![(99, "Trung bình"), (100, "Tốt"), (101, "Tốt")],
        )]);
        let dist = weekly_skill_distribution(&class, date(2024, 10, 9));
        assert_eq!(dist.tot_count, 1);
        assert_eq!(dist.trung_binh_count, 0);
    }

    #[test]
    fn test_ascii_spellings_count_as_votes() {
        let class = sample_class(vec![student(
            1,
            vec![(100, "tot"), (101, "TOT"), (102, "kha")],
        )]);
        let dist = weekly_skill_distribution(&class, date(2024, 10, 9));
        assert_eq!(dist.tot_count, 1);
    }

    #[test]
    fn test_weekly_series_one_bar_per_week() {
        let class = sample_class(vec![student(1, vec![(99, "Tốt"), (100, "Khá")])]);
        let series = weekly_series(&class, date(2024, 10, 2), date(2024, 10, 13));
        assert_eq!(series.len(), 2);
        // first bar: week of Oct 4 session
        assert_eq!(series[0].week_start, date(2024, 9, 30));
        assert_eq!(series[0].tot_count, 1);
        // second bar: week of Oct 7 session
        assert_eq!(series[1].week_start, date(2024, 10, 7));
        assert_eq!(series[1].kha_count, 1);
    }
}
