use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use chrono::{Local, NaiveDate};
use tracing::debug;

use super::project::{Author, Comment, NewProject, Priority, Project, ProjectId, ProjectPatch, Status};
use super::stats::DashboardStats;

/// First id handed out when no sample data occupies the low ids.
pub const DEFAULT_FIRST_ID: u32 = 3;

/// Source of "today" for audit stamps.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the running machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A settable date. Clones share the same date, so a test can keep a handle
/// and move time forward after handing the clock to a repository.
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Rc<Cell<NaiveDate>>,
}

impl FixedClock {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Rc::new(Cell::new(date)),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        self.date.set(date);
    }

    pub fn advance_days(&self, days: u64) {
        let next = self.date.get() + chrono::Days::new(days);
        self.date.set(next);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}

/// Filter over a closed set of values. `All` bypasses the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl<T: Copy + PartialEq> Filter<T> {
    /// Steps through `All`, then each of `values` in order, then back to `All`.
    #[must_use]
    pub fn cycle(self, values: &[T], forward: bool) -> Self {
        let position = match self {
            Filter::All => None,
            Filter::Only(current) => values.iter().position(|v| *v == current),
        };
        let len = values.len();
        let next = match (position, forward) {
            (None, true) => Some(0),
            (None, false) => len.checked_sub(1),
            (Some(i), true) if i + 1 < len => Some(i + 1),
            (Some(_), true) => None,
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
        next.and_then(|i| values.get(i).copied())
            .map_or(Filter::All, Filter::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("All"),
            Filter::Only(value) => value.fmt(f),
        }
    }
}

/// Dashboard query. Filters compose with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectQuery {
    pub status: Filter<Status>,
    pub priority: Filter<Priority>,
    /// Case-insensitive substring of project name or customer name.
    pub search: String,
}

impl ProjectQuery {
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Filter::Only(status);
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Filter::Only(priority);
        self
    }

    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        if !self.status.matches(&project.status) || !self.priority.matches(&project.priority) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        project.name.to_lowercase().contains(&needle)
            || project.customer_name.to_lowercase().contains(&needle)
    }
}

/// Result of an id-addressed mutation. An unknown id is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum UpdateOutcome {
    Applied,
    NotFound,
}

/// Emitted on every mutation so the presentation layer knows to re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryChange {
    Added(ProjectId),
    Updated(ProjectId),
    Commented(ProjectId),
}

/// In-memory, insertion-ordered store of projects.
pub struct ProjectRepository {
    projects: Vec<Project>,
    next_id: u64,
    clock: Box<dyn Clock>,
    author: Option<Author>,
    changes: Vec<RepositoryChange>,
}

impl fmt::Debug for ProjectRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectRepository")
            .field("projects", &self.projects.len())
            .field("next_id", &self.next_id)
            .field("author", &self.author)
            .finish_non_exhaustive()
    }
}

impl Default for ProjectRepository {
    fn default() -> Self {
        Self::new(DEFAULT_FIRST_ID)
    }
}

impl ProjectRepository {
    #[must_use]
    pub fn new(first_id: u32) -> Self {
        Self::with_clock(first_id, SystemClock)
    }

    /// The counter is wider than the configured seed, so ids never run out
    /// even when the seed is `u32::MAX`.
    #[must_use]
    pub fn with_clock(first_id: u32, clock: impl Clock + 'static) -> Self {
        Self {
            projects: Vec::new(),
            next_id: u64::from(first_id),
            clock: Box::new(clock),
            author: None,
            changes: Vec::new(),
        }
    }

    /// Repository preloaded with the two sample projects (ids 1 and 2).
    #[must_use]
    pub fn with_sample_data(clock: impl Clock + 'static) -> Self {
        let mut repo = Self::with_clock(DEFAULT_FIRST_ID, clock);
        repo.projects = super::seed::sample_projects();
        repo
    }

    /// Sets the author stamped on comments added from now on.
    pub fn set_author(&mut self, author: Author) {
        self.author = Some(author);
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn add(&mut self, project: NewProject) -> ProjectId {
        let id = ProjectId(self.next_id);
        self.next_id += 1;
        let project = project.into_project(id, self.clock.today());
        debug!(%id, name = %project.name, "project added");
        self.projects.push(project);
        self.changes.push(RepositoryChange::Added(id));
        id
    }

    /// Applies `patch` to the first project with `id` and stamps its
    /// last-updated date. Ids are unique in practice; were they not, only the
    /// first match would change.
    pub fn update(&mut self, id: ProjectId, patch: ProjectPatch) -> UpdateOutcome {
        let today = self.clock.today();
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            debug!(%id, "update ignored, no such project");
            return UpdateOutcome::NotFound;
        };
        patch.apply_to(project);
        project.last_updated = today;
        debug!(%id, "project updated");
        self.changes.push(RepositoryChange::Updated(id));
        UpdateOutcome::Applied
    }

    pub fn add_comment(&mut self, id: ProjectId, text: impl Into<String>) -> UpdateOutcome {
        let today = self.clock.today();
        let author = self.author.clone();
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            debug!(%id, "comment ignored, no such project");
            return UpdateOutcome::NotFound;
        };
        project.comments.push(Comment {
            author,
            text: text.into(),
            date: today,
        });
        project.last_updated = today;
        debug!(%id, comments = project.comments.len(), "comment added");
        self.changes.push(RepositoryChange::Commented(id));
        UpdateOutcome::Applied
    }

    /// Projects matching `query`, in insertion order.
    #[must_use]
    pub fn query(&self, query: &ProjectQuery) -> Vec<&Project> {
        self.projects.iter().filter(|p| query.matches(p)).collect()
    }

    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Aggregates over every project, ignoring any dashboard filter.
    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_projects(&self.projects)
    }

    /// Takes the changes recorded since the last call.
    pub fn drain_changes(&mut self) -> Vec<RepositoryChange> {
        std::mem::take(&mut self.changes)
    }
}
