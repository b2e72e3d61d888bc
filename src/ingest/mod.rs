//! Boundary normalization for raw backend rows
//!
//! The hosted backend returns loosely-typed rows with pt-BR column names
//! ("descricao", "valor", "data", ...). Amounts arrive as JSON numbers or
//! locale-formatted strings and dates as ISO `YYYY-MM-DD` strings; nothing
//! past this module ever sees those shapes. Batches convert atomically: one
//! malformed row fails the whole batch, matching the all-or-nothing insert
//! semantics of installment groups.

use serde::Deserialize;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    BudgetBucket, CardId, Classification, ExpenseCategory, ExpenseDetails, InstallmentGroupId,
    LedgerRecord, Money, PaymentMethod, RecordId, RecordKind, UserId,
};

/// An amount column value: numeric or locale-formatted text
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// Normalize to Money
    pub fn to_money(&self) -> LedgerResult<Money> {
        match self {
            RawAmount::Number(value) => {
                if !value.is_finite() {
                    return Err(LedgerError::Parse(format!("non-finite amount: {}", value)));
                }
                Ok(Money::from_cents((value * 100.0).round() as i64))
            }
            RawAmount::Text(text) => {
                Money::parse(text).map_err(|e| LedgerError::Parse(e.to_string()))
            }
        }
    }
}

/// A raw income ("entrada") row
#[derive(Debug, Clone, Deserialize)]
pub struct EntradaRow {
    pub id: String,
    pub usuario_id: String,
    pub descricao: String,
    pub valor: RawAmount,
    pub data: String,
}

/// A raw expense ("gasto") row
#[derive(Debug, Clone, Deserialize)]
pub struct GastoRow {
    pub id: String,
    pub usuario_id: String,
    pub descricao: String,
    pub valor: RawAmount,
    pub data: String,
    #[serde(default)]
    pub classificacao: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub metodo_pagamento: Option<String>,
    #[serde(default)]
    pub cartao_id: Option<String>,
    #[serde(default)]
    pub parcela_atual: Option<u32>,
    #[serde(default)]
    pub total_parcelas: Option<u32>,
    #[serde(default)]
    pub grupo_parcelamento: Option<String>,
    #[serde(default)]
    pub considerar_soma: Option<bool>,
}

/// Parse an ISO `YYYY-MM-DD` date column
///
/// Dates carry no time component, so month bucketing cannot drift across
/// timezone boundaries the way timestamp parsing would.
fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::Parse(format!("invalid date: {}", s)))
}

fn parse_classification(s: &str) -> LedgerResult<Classification> {
    match s.trim().to_lowercase().as_str() {
        "fixo" | "fixa" | "fixed" => Ok(Classification::Fixed),
        "variavel" | "variável" | "variable" => Ok(Classification::Variable),
        other => Err(LedgerError::Parse(format!(
            "unknown classification: {}",
            other
        ))),
    }
}

fn parse_payment_method(s: &str) -> LedgerResult<PaymentMethod> {
    match s.trim().to_lowercase().as_str() {
        "debito" | "débito" | "debit" => Ok(PaymentMethod::Debit),
        "credito" | "crédito" | "credit" => Ok(PaymentMethod::Credit),
        other => Err(LedgerError::Parse(format!(
            "unknown payment method: {}",
            other
        ))),
    }
}

fn parse_bucket(s: &str) -> LedgerResult<BudgetBucket> {
    match s.trim().to_lowercase().as_str() {
        "essencial" | "essential" => Ok(BudgetBucket::Essential),
        "lazer" | "leisure" => Ok(BudgetBucket::Leisure),
        "reserva" | "reserve" => Ok(BudgetBucket::Reserve),
        other => Err(LedgerError::Parse(format!("unknown budget type: {}", other))),
    }
}

/// Categories the backend doesn't recognize fall back to `Other`
fn parse_category(s: &str) -> ExpenseCategory {
    match s.trim().to_lowercase().as_str() {
        "moradia" | "housing" => ExpenseCategory::Housing,
        "alimentacao" | "alimentação" | "food" => ExpenseCategory::Food,
        "transporte" | "transport" => ExpenseCategory::Transport,
        "saude" | "saúde" | "health" => ExpenseCategory::Health,
        "lazer" | "leisure" => ExpenseCategory::Leisure,
        "educacao" | "educação" | "education" => ExpenseCategory::Education,
        "assinaturas" | "subscriptions" => ExpenseCategory::Subscriptions,
        "presente" | "gift" => ExpenseCategory::Gift,
        "cuidado-pessoal" | "cuidados pessoais" | "personal-care" => ExpenseCategory::PersonalCare,
        "emprestimo" | "empréstimo" | "loan" => ExpenseCategory::Loan,
        _ => ExpenseCategory::Other,
    }
}

fn validated(record: LedgerRecord) -> LedgerResult<LedgerRecord> {
    record
        .validate()
        .map_err(|e| LedgerError::invalid_input(e.to_string()))?;
    Ok(record)
}

impl TryFrom<EntradaRow> for LedgerRecord {
    type Error = LedgerError;

    fn try_from(row: EntradaRow) -> LedgerResult<Self> {
        validated(LedgerRecord {
            id: RecordId::from_str(&row.id)
                .map_err(|_| LedgerError::Parse(format!("invalid record id: {}", row.id)))?,
            owner_id: UserId::from_str(&row.usuario_id)
                .map_err(|_| LedgerError::Parse(format!("invalid user id: {}", row.usuario_id)))?,
            description: row.descricao.trim().to_string(),
            amount: row.valor.to_money()?,
            date: parse_date(&row.data)?,
            kind: RecordKind::Income,
        })
    }
}

impl TryFrom<GastoRow> for LedgerRecord {
    type Error = LedgerError;

    fn try_from(row: GastoRow) -> LedgerResult<Self> {
        let payment_method = match row.metodo_pagamento.as_deref() {
            Some(s) => parse_payment_method(s)?,
            None => PaymentMethod::Debit,
        };
        let classification = match row.classificacao.as_deref() {
            Some(s) => parse_classification(s)?,
            None => Classification::Variable,
        };
        let bucket = match row.tipo.as_deref() {
            Some(s) => parse_bucket(s)?,
            None => BudgetBucket::Essential,
        };
        let category = row
            .categoria
            .as_deref()
            .map(parse_category)
            .unwrap_or_default();

        let card_id = match row.cartao_id.as_deref() {
            Some(s) => Some(
                CardId::from_str(s)
                    .map_err(|_| LedgerError::Parse(format!("invalid card id: {}", s)))?,
            ),
            None => None,
        };
        let installment_group_id = match row.grupo_parcelamento.as_deref() {
            Some(s) => Some(
                InstallmentGroupId::from_str(s)
                    .map_err(|_| LedgerError::Parse(format!("invalid group id: {}", s)))?,
            ),
            None => None,
        };

        let details = ExpenseDetails {
            classification,
            category,
            bucket,
            payment_method,
            card_id,
            installment_index: row.parcela_atual.unwrap_or(1),
            installment_total: row.total_parcelas.unwrap_or(1),
            installment_group_id,
            counts_toward_balance: row
                .considerar_soma
                .unwrap_or(payment_method != PaymentMethod::Credit),
        };

        validated(LedgerRecord {
            id: RecordId::from_str(&row.id)
                .map_err(|_| LedgerError::Parse(format!("invalid record id: {}", row.id)))?,
            owner_id: UserId::from_str(&row.usuario_id)
                .map_err(|_| LedgerError::Parse(format!("invalid user id: {}", row.usuario_id)))?,
            description: row.descricao.trim().to_string(),
            amount: row.valor.to_money()?,
            date: parse_date(&row.data)?,
            kind: RecordKind::Expense(details),
        })
    }
}

/// Convert a batch of income rows; any bad row fails the whole batch
pub fn normalize_entradas(rows: Vec<EntradaRow>) -> LedgerResult<Vec<LedgerRecord>> {
    rows.into_iter().map(LedgerRecord::try_from).collect()
}

/// Convert a batch of expense rows; any bad row fails the whole batch
pub fn normalize_gastos(rows: Vec<GastoRow>) -> LedgerResult<Vec<LedgerRecord>> {
    rows.into_iter().map(LedgerRecord::try_from).collect()
}

/// Decode and normalize a JSON array of income rows
pub fn entradas_from_json(json: &str) -> LedgerResult<Vec<LedgerRecord>> {
    let rows: Vec<EntradaRow> = serde_json::from_str(json)?;
    normalize_entradas(rows)
}

/// Decode and normalize a JSON array of expense rows
pub fn gastos_from_json(json: &str) -> LedgerResult<Vec<LedgerRecord>> {
    let rows: Vec<GastoRow> = serde_json::from_str(json)?;
    normalize_gastos(rows)
}
