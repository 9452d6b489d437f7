//! The ledger and budget store
//!
//! `ExpenseTracker` is the single owner of expense records and the monthly
//! budget. It is constructed once at startup and passed to whatever needs
//! it. Every mutation is validated first, then persisted before returning.

use tracing::info;

use crate::config::paths::TrackerPaths;
use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseCategory, ExpenseRecord, Money, MonthPeriod};
use crate::services::summary::{self, BudgetStatus, CategoryTotals};
use crate::storage::Storage;
use crate::time::{Clock, SystemClock};

/// Expense ledger plus monthly budget, backed by durable storage
pub struct ExpenseTracker {
    storage: Storage,
    clock: Box<dyn Clock>,
}

impl ExpenseTracker {
    /// Open the store using the system clock
    pub fn open(paths: TrackerPaths, settings: &Settings) -> TrackerResult<Self> {
        Self::with_clock(paths, settings, SystemClock)
    }

    /// Open the store with a custom clock
    pub fn with_clock(
        paths: TrackerPaths,
        settings: &Settings,
        clock: impl Clock + 'static,
    ) -> TrackerResult<Self> {
        let storage = Storage::open(paths, settings)?;
        Ok(Self {
            storage,
            clock: Box::new(clock),
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// The fixed set of expense categories
    pub fn categories(&self) -> &'static [ExpenseCategory] {
        ExpenseCategory::all()
    }

    /// The calendar month containing "now"
    pub fn current_period(&self) -> MonthPeriod {
        MonthPeriod::current(self.clock.as_ref())
    }

    /// Record an expense timestamped with the current time
    ///
    /// The ledger is reloaded under the store lock, the record appended and
    /// the whole file rewritten. If the write fails the record stays in
    /// memory and `Persistence` is returned.
    pub fn add_expense(
        &mut self,
        amount: Money,
        category: ExpenseCategory,
        description: impl Into<String>,
    ) -> TrackerResult<ExpenseRecord> {
        let description: String = description.into();
        let record = ExpenseRecord::new(
            self.clock.now(),
            amount,
            category,
            description.trim(),
        );
        record
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let _lock = self.storage.lock()?;
        self.storage.ledger.load()?;
        self.storage.ledger.push(record.clone());
        self.storage.ledger.save()?;

        info!(
            amount = %record.amount,
            category = %record.category,
            count = self.storage.ledger.len(),
            "recorded expense"
        );
        Ok(record)
    }

    /// Record an expense from unvalidated form input
    ///
    /// The amount is rounded to cents; the category label is matched
    /// case-insensitively against the fixed set.
    pub fn add_expense_from_input(
        &mut self,
        amount: f64,
        category: &str,
        description: &str,
    ) -> TrackerResult<ExpenseRecord> {
        let amount = Money::from_decimal(amount)?;
        let category: ExpenseCategory = category.parse()?;
        self.add_expense(amount, category, description)
    }

    /// All records in insertion order
    pub fn expenses(&self) -> &[ExpenseRecord] {
        self.storage.ledger.records()
    }

    /// Records in the given calendar month, in insertion order
    pub fn expenses_in(&self, period: MonthPeriod) -> impl Iterator<Item = &ExpenseRecord> + '_ {
        self.expenses()
            .iter()
            .filter(move |record| period.contains(record.timestamp))
    }

    /// Records whose timestamp falls in the current calendar month
    pub fn get_monthly_expenses(&self) -> impl Iterator<Item = &ExpenseRecord> + '_ {
        self.expenses_in(self.current_period())
    }

    /// Sum of this month's amounts
    pub fn get_monthly_total(&self) -> Money {
        summary::total(self.get_monthly_expenses())
    }

    /// This month's amounts summed per category
    pub fn get_category_totals(&self) -> CategoryTotals {
        summary::category_totals(self.get_monthly_expenses())
    }

    /// Overwrite the monthly budget and persist it
    pub fn set_budget(&mut self, amount: Money) -> TrackerResult<()> {
        if amount.is_negative() {
            return Err(TrackerError::Validation(format!(
                "Monthly budget cannot be negative, got {}",
                amount
            )));
        }

        let _lock = self.storage.lock()?;
        let previous = self.storage.budget.get();
        self.storage.budget.set(amount);
        self.storage.budget.save()?;

        info!(from = %previous, to = %amount, "updated monthly budget");
        Ok(())
    }

    /// Set the budget from unvalidated numeric input
    pub fn set_budget_from_input(&mut self, amount: f64) -> TrackerResult<()> {
        self.set_budget(Money::from_decimal(amount)?)
    }

    pub fn get_budget(&self) -> Money {
        self.storage.budget.get()
    }

    /// Total, budget, remaining and percentage used for the current month
    pub fn get_budget_status(&self) -> BudgetStatus {
        BudgetStatus::compute(self.get_monthly_total(), self.get_budget())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use chrono::{NaiveDate, NaiveDateTime};
    use tempfile::TempDir;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn open(temp_dir: &TempDir, clock: &FixedClock) -> ExpenseTracker {
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        ExpenseTracker::with_clock(paths, &Settings::default(), clock.clone()).unwrap()
    }

    fn dollars(d: i64) -> Money {
        Money::from_dollars_cents(d, 0)
    }

    #[test]
    fn test_fresh_store_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let clock = FixedClock::new(at(2025, 3, 10, 12));
        let tracker = open(&temp_dir, &clock);

        assert_eq!(tracker.get_budget(), dollars(1000));
        assert_eq!(tracker.get_monthly_expenses().count(), 0);
        assert_eq!(tracker.get_monthly_total(), Money::zero());
        assert_eq!(tracker.categories().len(), 8);
    }

    #[test]
    fn test_budget_status_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let clock = FixedClock::new(at(2025, 3, 10, 12));
        let mut tracker = open(&temp_dir, &clock);

        tracker
            .add_expense(dollars(300), ExpenseCategory::Food, "lunch")
            .unwrap();
        tracker
            .add_expense(dollars(250), ExpenseCategory::Housing, "rent")
            .unwrap();

        assert_eq!(tracker.get_monthly_total(), dollars(550));
        let status = tracker.get_budget_status();
        assert_eq!(status.total, dollars(550));
        assert_eq!(status.budget, dollars(1000));
        assert_eq!(status.remaining, dollars(450));
        assert!((status.percentage_used - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_budget_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let clock = FixedClock::new(at(2025, 3, 10, 12));
        let mut tracker = open(&temp_dir, &clock);

        tracker.set_budget(Money::zero()).unwrap();
        tracker
            .add_expense(dollars(50), ExpenseCategory::Other, "")
            .unwrap();

        let status = tracker.get_budget_status();
        assert_eq!(status.percentage_used, 0.0);
        assert_eq!(status.remaining, dollars(-50));
    }

    #[test]
    fn test_failed_write_keeps_record_in_memory() {
        let temp_dir = TempDir::new().unwrap();
        let clock = FixedClock::new(at(2025, 3, 10, 12));
        let mut tracker = open(&temp_dir, &clock);
        tracker
            .add_expense(dollars(20), ExpenseCategory::Food, "saved")
            .unwrap();

        let ledger_path = tracker.storage().paths().expenses_file();
        let before = std::fs::read_to_string(&ledger_path).unwrap();

        // A directory where the temp file goes makes the atomic write fail
        let blocker = ledger_path.with_file_name("expenses.csv.tmp");
        std::fs::create_dir(&blocker).unwrap();

        let err = tracker
            .add_expense(dollars(7), ExpenseCategory::Shopping, "unsaved")
            .unwrap_err();
        assert!(err.is_persistence());
        assert_eq!(tracker.expenses().len(), 2);
        assert_eq!(tracker.expenses()[1].description, "unsaved");
        assert_eq!(std::fs::read_to_string(&ledger_path).unwrap(), before);
        assert!(!tracker.storage().paths().lock_file().exists());

        // Disk stays authoritative once writes work again
        std::fs::remove_dir(&blocker).unwrap();
        tracker
            .add_expense(dollars(3), ExpenseCategory::Other, "")
            .unwrap();
        let descriptions: Vec<&str> = tracker
            .expenses()
            .iter()
            .map(|r| r.description.as_str())
            .collect();
        assert_eq!(descriptions, ["saved", ""]);
    }

    #[test]
    fn test_set_budget_persists() {
        let temp_dir = TempDir::new().unwrap();
        let clock = FixedClock::new(at(2025, 3, 10, 12));
        let mut tracker = open(&temp_dir, &clock);

        tracker.set_budget(dollars(800)).unwrap();
        assert_eq!(tracker.get_budget(), dollars(800));
        drop(tracker);

        let reopened = open(&temp_dir, &clock);
        assert_eq!(reopened.get_budget(), dollars(800));
    }

    #[test]
    fn test_monthly_filter_uses_calendar_month() {
        let temp_dir = TempDir::new().unwrap();
        let clock = FixedClock::new(at(2025, 3, 31, 22));
        let mut tracker = open(&temp_dir, &clock);

        tracker
            .add_expense(dollars(40), ExpenseCategory::Food, "late dinner")
            .unwrap();
        assert_eq!(tracker.get_monthly_total(), dollars(40));

        clock.set(at(2025, 4, 1, 8));
        tracker
            .add_expense(dollars(5), ExpenseCategory::Food, "coffee")
            .unwrap();

        let monthly: Vec<_> = tracker.get_monthly_expenses().collect();
        assert_eq!(monthly.len(), 1);
        assert_eq!(monthly[0].description, "coffee");
        assert_eq!(tracker.expenses().len(), 2);

        let march = MonthPeriod::new(2025, 3).unwrap();
        assert_eq!(tracker.expenses_in(march).count(), 1);
    }

    #[test]
    fn test_same_month_other_year_excluded() {
        let temp_dir = TempDir::new().unwrap();
        let clock = FixedClock::new(at(2024, 3, 15, 12));
        let mut tracker = open(&temp_dir, &clock);
        tracker
            .add_expense(dollars(10), ExpenseCategory::Shopping, "")
            .unwrap();

        clock.set(at(2025, 3, 15, 12));
        assert_eq!(tracker.get_monthly_expenses().count(), 0);
    }

    #[test]
    fn test_category_totals_match_monthly_total() {
        let temp_dir = TempDir::new().unwrap();
        let clock = FixedClock::new(at(2025, 6, 2, 9));
        let mut tracker = open(&temp_dir, &clock);

        let entries = [
            (1250, ExpenseCategory::Food),
            (899, ExpenseCategory::Food),
            (4500, ExpenseCategory::Utilities),
            (1999, ExpenseCategory::Entertainment),
            (1, ExpenseCategory::Other),
        ];
        for (cents, category) in entries {
            tracker
                .add_expense(Money::from_cents(cents), category, "")
                .unwrap();
        }

        let totals = tracker.get_category_totals();
        assert_eq!(totals.len(), 4);
        assert_eq!(totals[&ExpenseCategory::Food], Money::from_cents(2149));
        assert!(!totals.contains_key(&ExpenseCategory::Healthcare));
        assert_eq!(totals.values().sum::<Money>(), tracker.get_monthly_total());
        assert_eq!(tracker.get_monthly_total(), Money::from_cents(8649));
    }

    #[test]
    fn test_records_survive_reload_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let clock = FixedClock::new(at(2025, 6, 2, 9));
        let mut tracker = open(&temp_dir, &clock);

        tracker
            .add_expense(Money::from_cents(1050), ExpenseCategory::Food, "bagel, coffee")
            .unwrap();
        clock.set(at(2025, 6, 2, 10));
        tracker
            .add_expense(Money::from_cents(20_000), ExpenseCategory::Healthcare, "dentist")
            .unwrap();
        let before = tracker.expenses().to_vec();
        drop(tracker);

        let reopened = open(&temp_dir, &clock);
        assert_eq!(reopened.expenses(), before.as_slice());
    }

    #[test]
    fn test_validation_rejects_bad_input() {
        let temp_dir = TempDir::new().unwrap();
        let clock = FixedClock::new(at(2025, 6, 2, 9));
        let mut tracker = open(&temp_dir, &clock);

        assert!(tracker
            .add_expense(Money::zero(), ExpenseCategory::Food, "")
            .unwrap_err()
            .is_validation());
        assert!(tracker
            .add_expense_from_input(-3.0, "Food", "")
            .unwrap_err()
            .is_validation());
        assert!(tracker
            .add_expense_from_input(f64::NAN, "Food", "")
            .unwrap_err()
            .is_validation());
        assert!(tracker
            .add_expense_from_input(3.0, "Groceries", "")
            .unwrap_err()
            .is_validation());
        assert!(tracker.set_budget(dollars(-1)).unwrap_err().is_validation());
        assert!(tracker
            .set_budget_from_input(f64::INFINITY)
            .unwrap_err()
            .is_validation());

        assert!(tracker.expenses().is_empty());
        assert_eq!(tracker.get_budget(), dollars(1000));
    }

    #[test]
    fn test_add_from_input_normalizes() {
        let temp_dir = TempDir::new().unwrap();
        let clock = FixedClock::new(at(2025, 6, 2, 9));
        let mut tracker = open(&temp_dir, &clock);

        let record = tracker
            .add_expense_from_input(12.349, "transportation", "  bus pass ")
            .unwrap();
        assert_eq!(record.amount, Money::from_cents(1235));
        assert_eq!(record.category, ExpenseCategory::Transportation);
        assert_eq!(record.description, "bus pass");
        assert_eq!(record.timestamp, at(2025, 6, 2, 9));
    }

    #[test]
    fn test_concurrent_handles_do_not_lose_inserts() {
        let temp_dir = TempDir::new().unwrap();
        let clock = FixedClock::new(at(2025, 6, 2, 9));
        let mut first = open(&temp_dir, &clock);
        let mut second = open(&temp_dir, &clock);

        first
            .add_expense(dollars(1), ExpenseCategory::Food, "first")
            .unwrap();
        second
            .add_expense(dollars(2), ExpenseCategory::Food, "second")
            .unwrap();

        let reopened = open(&temp_dir, &clock);
        assert_eq!(reopened.expenses().len(), 2);
        assert_eq!(reopened.get_monthly_total(), dollars(3));
    }
}
