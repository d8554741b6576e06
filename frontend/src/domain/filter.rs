use shared::{Transaction, TransactionKind};

/// Criteria read live from the filter controls above the transactions table.
///
/// Each field is independently optional; an absent field imposes no
/// constraint. Active predicates are combined with logical AND.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    pub category_id: Option<i64>,
    /// Inclusive lower bound, ISO-8601 date.
    pub date_from: Option<String>,
    /// Inclusive upper bound, ISO-8601 date.
    pub date_to: Option<String>,
}

impl TransactionFilter {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.category_id.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    fn matches(&self, tx: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if tx.kind != kind {
                return false;
            }
        }
        if let Some(category_id) = self.category_id {
            if tx.category_id != category_id {
                return false;
            }
        }
        // ISO-8601 dates compare chronologically as plain strings.
        if let Some(from) = &self.date_from {
            if tx.date.as_str() < from.as_str() {
                return false;
            }
        }
        if let Some(to) = &self.date_to {
            if tx.date.as_str() > to.as_str() {
                return false;
            }
        }
        true
    }

    /// Stable filter over the snapshot: matching transactions keep their
    /// relative order from the server response.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|tx| self.matches(tx))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: i64, kind: TransactionKind, category_id: i64, date: &str) -> Transaction {
        Transaction {
            id,
            description: format!("tx {id}"),
            amount: 50.0,
            kind,
            date: date.into(),
            category_id,
            category_name: None,
            category_color: None,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx(1, TransactionKind::Expense, 1, "2024-01-05"),
            tx(2, TransactionKind::Income, 2, "2024-02-01"),
            tx(3, TransactionKind::Expense, 2, "2024-02-15"),
            tx(4, TransactionKind::Expense, 1, "2024-03-20"),
        ]
    }

    fn ids(transactions: &[Transaction]) -> Vec<i64> {
        transactions.iter().map(|t| t.id).collect()
    }

    #[test]
    fn empty_filter_returns_the_snapshot_unchanged() {
        let transactions = sample();
        let filter = TransactionFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&transactions), transactions);
    }

    #[test]
    fn kind_predicate_keeps_only_matching_kind() {
        let transactions = vec![
            tx(1, TransactionKind::Expense, 1, "2024-01-05"),
            tx(2, TransactionKind::Income, 1, "2024-02-01"),
        ];
        let filter = TransactionFilter {
            kind: Some(TransactionKind::Expense),
            ..TransactionFilter::default()
        };
        assert_eq!(ids(&filter.apply(&transactions)), vec![1]);
    }

    #[test]
    fn category_predicate_matches_by_id() {
        let filter = TransactionFilter {
            category_id: Some(2),
            ..TransactionFilter::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![2, 3]);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let filter = TransactionFilter {
            date_from: Some("2024-02-01".into()),
            date_to: Some("2024-02-15".into()),
            ..TransactionFilter::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![2, 3]);
    }

    #[test]
    fn predicates_combine_conjunctively() {
        let filter = TransactionFilter {
            kind: Some(TransactionKind::Expense),
            category_id: Some(2),
            date_from: Some("2024-01-01".into()),
            date_to: Some("2024-12-31".into()),
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![3]);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let filter = TransactionFilter {
            date_from: Some("2025-01-01".into()),
            ..TransactionFilter::default()
        };
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn relative_order_is_preserved() {
        let filter = TransactionFilter {
            kind: Some(TransactionKind::Expense),
            ..TransactionFilter::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 3, 4]);
    }
}
