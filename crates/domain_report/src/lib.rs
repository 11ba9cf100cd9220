//! Reporting Domain - Aggregation and Export
//!
//! Turns transaction, payment, and dispatch snapshots into report
//! rows, roll-ups, and export tables:
//!
//! - filtered/enriched listing and grouped reports with totals
//! - the transport (freight) ledger report
//! - stock positions and the dashboard summary
//! - role-gated, format-agnostic export tables and CSV text
//!
//! Degradation policy: a stale master-data reference labels its row
//! "Unknown", an orphan dispatch drops its row, and nothing aborts a
//! whole report.

pub mod aggregator;
pub mod error;
pub mod export;
pub mod inventory;
pub mod lookups;
pub mod row;
pub mod summary;
pub mod transport;

pub use aggregator::{
    run_report, GroupBy, Report, ReportQuery, ReportType, SortOrder, StatusFilter, Totals,
    TypeFilter,
};
pub use error::ReportError;
pub use export::{render_csv, to_table, transport_table, ExportTable, FieldSet, Role};
pub use inventory::{stock_positions, StockPosition, WarehouseStock};
pub use lookups::{Lookups, UNKNOWN};
pub use row::{DetailRow, GroupRow, ReportRow, TransportRow};
pub use summary::{dashboard_summary, DashboardSummary};
pub use transport::transport_report;
