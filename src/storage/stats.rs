use super::project::{Project, Status};

/// Counts per status plus the mean feasibility score.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    pub by_status: Vec<(Status, usize)>,
    pub average_score: f64,
}

impl DashboardStats {
    #[must_use]
    pub fn from_projects<'a>(projects: impl IntoIterator<Item = &'a Project>) -> Self {
        let mut by_status: Vec<(Status, usize)> = Status::ALL.iter().map(|s| (*s, 0)).collect();
        let mut total = 0usize;
        let mut score_sum = 0u64;

        for project in projects {
            total += 1;
            score_sum += u64::from(project.feasibility_score);
            if let Some(slot) = by_status.iter_mut().find(|(s, _)| *s == project.status) {
                slot.1 += 1;
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let average_score = if total == 0 {
            0.0
        } else {
            score_sum as f64 / total as f64
        };

        Self {
            total,
            by_status,
            average_score,
        }
    }

    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, n)| *n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed::sample_projects;

    #[test]
    fn test_empty_stats() {
        let stats = DashboardStats::from_projects(&Vec::<Project>::new());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_score, 0.0);
        assert!(stats.by_status.iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn test_sample_stats() {
        let projects = sample_projects();
        let stats = DashboardStats::from_projects(&projects);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.count(Status::UnderReview), 1);
        assert_eq!(stats.count(Status::Feasible), 1);
        assert_eq!(stats.count(Status::Approved), 0);
        assert!((stats.average_score - 80.0).abs() < f64::EPSILON);
    }
}
