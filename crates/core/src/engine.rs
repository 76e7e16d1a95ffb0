//! Statement generation pipeline.
//!
//! One engine run takes a batch of transaction entries through
//! classification, aggregation, the four statement builders, and
//! reconciliation. Statements that cannot be computed are omitted and
//! recorded; the others proceed. Warnings are accumulated across every
//! stage and always returned.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use finstat_shared::{AppConfig, ReportingPeriod};

use crate::aggregate::CategoryTotals;
use crate::classify::{AccountRules, Category, Classifier, RulesError};
use crate::ingest::TransactionEntry;
use crate::statements::{
    self, BalanceSheet, CashAccounts, CashFlowStatement, DepreciationReport, IncomeStatement,
    SectionRules, StatementContext, StatementError, StatementKind, Warning,
};

/// Configuration resolved for a single engine instance.
///
/// Immutable after construction; each run reads it, none mutate it.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Account classification rule table.
    pub rules: AccountRules,
    /// Error on an entirely absent revenue category instead of zeroing it.
    pub strict: bool,
    /// Currency code stamped on every statement.
    pub currency: String,
    /// Patterns identifying cash accounts.
    pub cash_accounts: CashAccounts,
    /// Balance sheet subsection rules.
    pub sections: SectionRules,
}

/// Errors raised while resolving configuration into an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum EngineConfigError {
    /// The configured fallback category name is not a known category.
    #[error("Unknown fallback category: {0}")]
    UnknownCategory(String),

    /// The configured rules file could not be loaded.
    #[error(transparent)]
    Rules(#[from] RulesError),
}

impl EngineConfig {
    /// Resolves application configuration into a typed engine configuration.
    ///
    /// Loads the rules file when one is configured, otherwise uses the
    /// built-in standard table; parses the fallback category name.
    ///
    /// # Errors
    ///
    /// Returns an error when the rules file cannot be loaded or the
    /// fallback category name is unknown.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, EngineConfigError> {
        let report = &config.report;

        let rules = match &report.rules_file {
            Some(path) => AccountRules::from_file(path)?,
            None => AccountRules::standard(),
        };
        let rules = match &report.fallback_category {
            Some(name) => {
                let category: Category = name
                    .parse()
                    .map_err(|_| EngineConfigError::UnknownCategory(name.clone()))?;
                rules.with_fallback(Some(category))
            }
            None => rules,
        };

        Ok(Self {
            rules,
            strict: report.strict,
            currency: report.currency.clone(),
            cash_accounts: CashAccounts::new(report.cash_accounts.clone()),
            sections: SectionRules::default(),
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rules: AccountRules::standard(),
            strict: false,
            currency: "USD".to_string(),
            cash_accounts: CashAccounts::default(),
            sections: SectionRules::default(),
        }
    }
}

/// A statement omitted from the bundle, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OmittedStatement {
    /// Which statement was omitted.
    pub kind: StatementKind,
    /// Why it could not be computed.
    pub reason: String,
}

/// The four statements plus everything that must travel with them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialStatements {
    /// Currency code shared by all statements.
    pub currency: String,
    /// Period the batch spans, when non-empty.
    pub period: Option<ReportingPeriod>,
    /// The income statement, unless omitted.
    pub income_statement: Option<IncomeStatement>,
    /// The balance sheet, unless omitted.
    pub balance_sheet: Option<BalanceSheet>,
    /// The cash flow statement, unless omitted.
    pub cash_flow: Option<CashFlowStatement>,
    /// The depreciation report, unless omitted.
    pub depreciation: Option<DepreciationReport>,
    /// Statements that could not be computed, with reasons.
    pub omitted: Vec<OmittedStatement>,
    /// Warnings accumulated across classification, balancing, and
    /// reconciliation. Never silently dropped.
    pub warnings: Vec<Warning>,
}

/// The statement generation engine.
///
/// Holds only immutable configuration; each [`run`](Self::run) processes an
/// independent batch with no state shared across requests.
#[derive(Debug, Clone, Default)]
pub struct ReportEngine {
    config: EngineConfig,
}

impl ReportEngine {
    /// Creates an engine over the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Generates all four statements for one batch.
    ///
    /// Never fails as a whole: statements that cannot be computed are
    /// recorded in `omitted` and the rest proceed.
    #[must_use]
    pub fn run(&self, entries: &[TransactionEntry]) -> FinancialStatements {
        let mut warnings = Vec::new();
        let mut omitted = Vec::new();

        let classifier = Classifier::new(&self.config.rules);
        let batch = classifier.classify_batch(entries.to_vec());
        warnings.extend(batch.unknown.into_iter().map(Warning::UnknownAccount));

        let totals = CategoryTotals::from_entries(&batch.entries);

        let context = StatementContext {
            currency: self.config.currency.clone(),
            period: ReportingPeriod::from_dates(entries.iter().map(|e| e.date)),
        };

        let record = |kind: StatementKind, error: &StatementError| OmittedStatement {
            kind,
            reason: error.to_string(),
        };

        let income_statement =
            match statements::income::build(&totals, self.config.strict, &context) {
                Ok(statement) => Some(statement),
                Err(error) => {
                    omitted.push(record(StatementKind::Income, &error));
                    None
                }
            };
        let net_income = income_statement.as_ref().map(IncomeStatement::net_income);

        let (balance_sheet, mismatch) = statements::balance_sheet::build(
            &totals,
            net_income,
            &self.config.sections,
            &context,
        );
        warnings.extend(mismatch.map(Warning::BalanceMismatch));
        let balance_sheet = Some(balance_sheet);

        let cash_flow = match statements::cash_flow::build(
            &totals,
            net_income,
            &self.config.cash_accounts,
            &context,
        ) {
            Ok(statement) => Some(statement),
            Err(error) => {
                omitted.push(record(StatementKind::CashFlow, &error));
                None
            }
        };

        let depreciation = Some(statements::depreciation::build(&totals, &context));

        warnings.extend(
            statements::reconcile(
                income_statement.as_ref(),
                balance_sheet.as_ref(),
                cash_flow.as_ref(),
                &self.config.cash_accounts,
            )
            .into_iter()
            .map(Warning::Reconciliation),
        );

        FinancialStatements {
            currency: self.config.currency.clone(),
            period: context.period,
            income_statement,
            balance_sheet,
            cash_flow,
            depreciation,
            omitted,
            warnings,
        }
    }
}
