use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a record moves money into or out of the account.
///
/// The API speaks Spanish on the wire (`"ingreso"` / `"gasto"`), so the
/// variants carry explicit renames instead of a blanket `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "ingreso")]
    Income,
    #[serde(rename = "gasto")]
    Expense,
}

impl TransactionKind {
    /// Wire value expected by the API in bodies and query strings.
    pub fn as_wire(&self) -> &'static str {
        match self {
            TransactionKind::Income => "ingreso",
            TransactionKind::Expense => "gasto",
        }
    }

    /// Parse the wire value back. Anything else is rejected, matching the
    /// server's own validation of the `tipo` field.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "ingreso" => Some(TransactionKind::Income),
            "gasto" => Some(TransactionKind::Expense),
            _ => None,
        }
    }

    /// Spanish display label, capitalised for badges and dropdowns.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Ingreso",
            TransactionKind::Expense => "Gasto",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// A user-defined label for classifying transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    /// Hex colour token (e.g. `#FF6B35`) chosen at creation time.
    pub color: String,
}

/// A single income or expense record as delivered by the server.
///
/// `amount` is always the absolute value; the sign shown to the user is
/// derived from `kind`. The category name and colour are denormalised onto
/// the transaction so list rows render without a join on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    /// Calendar date in ISO-8601 (`YYYY-MM-DD`). Lexicographic comparison of
    /// these strings is chronological comparison, which the range filters
    /// rely on.
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "categoria_id")]
    pub category_id: i64,
    #[serde(rename = "categoria_nombre")]
    pub category_name: Option<String>,
    #[serde(rename = "categoria_color")]
    pub category_color: Option<String>,
}

impl Transaction {
    /// Amount with the sign implied by the kind, for arithmetic on totals.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount.abs(),
            TransactionKind::Expense => -self.amount.abs(),
        }
    }
}

/// Body for `POST /api/transacciones`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "categoria_id")]
    pub category_id: i64,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
}

/// Body for `POST /api/categorias`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    pub color: String,
}

/// Response of `GET /api/dashboard`: the four summary figures plus the most
/// recent transactions for the overview list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub balance_total: f64,
    #[serde(rename = "ingresos_mes")]
    pub month_income: f64,
    #[serde(rename = "gastos_mes")]
    pub month_expenses: f64,
    #[serde(rename = "balance_mes")]
    pub month_balance: f64,
    #[serde(rename = "ultimas_transacciones")]
    pub recent_transactions: Vec<Transaction>,
}

/// One bar-chart row of `GET /api/estadisticas/resumen-mensual`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummaryRow {
    #[serde(rename = "mes")]
    pub month: String,
    #[serde(rename = "ingresos")]
    pub income: f64,
    #[serde(rename = "gastos")]
    pub expenses: f64,
}

/// One slice of `GET /api/estadisticas/por-categoria`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdownRow {
    #[serde(rename = "categoria")]
    pub category: String,
    pub total: f64,
    pub color: String,
    #[serde(rename = "porcentaje")]
    pub percentage: f64,
}

/// One line-chart point of `GET /api/estadisticas/tendencias`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRow {
    #[serde(rename = "periodo")]
    pub period: String,
    #[serde(rename = "ingresos")]
    pub income: f64,
    #[serde(rename = "gastos")]
    pub expenses: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_wire_names() {
        assert_eq!(TransactionKind::Income.as_wire(), "ingreso");
        assert_eq!(TransactionKind::Expense.as_wire(), "gasto");
        assert_eq!(TransactionKind::from_wire("ingreso"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::from_wire("gasto"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::from_wire("transfer"), None);
    }

    #[test]
    fn transaction_deserialises_from_server_json() {
        // The colour token contains `"#`, so the raw string needs the wider
        // delimiter.
        let json = r##"{
            "id": 7,
            "descripcion": "Mercado",
            "monto": 120.5,
            "fecha": "2024-01-05",
            "tipo": "gasto",
            "categoria_id": 2,
            "categoria_nombre": "Alimentación",
            "categoria_color": "#E74C3C"
        }"##;

        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, 7);
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.date, "2024-01-05");
        assert_eq!(tx.category_name.as_deref(), Some("Alimentación"));
        assert_eq!(tx.signed_amount(), -120.5);
    }

    #[test]
    fn new_transaction_serialises_with_wire_names() {
        let body = NewTransaction {
            description: "Sueldo".into(),
            amount: 2500.0,
            category_id: 1,
            date: "2024-02-01".into(),
            kind: TransactionKind::Income,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["descripcion"], "Sueldo");
        assert_eq!(value["monto"], 2500.0);
        assert_eq!(value["categoria_id"], 1);
        assert_eq!(value["fecha"], "2024-02-01");
        assert_eq!(value["tipo"], "ingreso");
    }

    #[test]
    fn dashboard_summary_deserialises() {
        let json = r#"{
            "balance_total": 1000.0,
            "ingresos_mes": 1500.0,
            "gastos_mes": 500.0,
            "balance_mes": 1000.0,
            "ultimas_transacciones": []
        }"#;

        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.month_income, 1500.0);
        assert!(summary.recent_transactions.is_empty());
    }

    #[test]
    fn signed_amount_normalises_server_sign() {
        let mut tx = Transaction {
            id: 1,
            description: "Pago".into(),
            amount: 80.0,
            kind: TransactionKind::Expense,
            date: "2024-03-10".into(),
            category_id: 3,
            category_name: None,
            category_color: None,
        };
        assert_eq!(tx.signed_amount(), -80.0);

        tx.kind = TransactionKind::Income;
        assert_eq!(tx.signed_amount(), 80.0);
    }
}
